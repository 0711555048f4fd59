// src/validate.rs

/// Maximum length accepted for a project/package name.
const MAX_PROJECT_NAME_LEN: usize = 214;

/// Loose rule used for feature-module names: non-empty after trimming and
/// composed of letters, digits, hyphens and underscores only.
pub fn is_valid_feature_name(raw: &str) -> bool {
  let name = raw.trim();
  !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Strict rule used for project/package names. On top of the loose character
/// class it permits '.' and '@' (scoped packages), caps the length at 214 and
/// rejects the literal '.' and '..' path names.
pub fn is_valid_project_name(raw: &str) -> bool {
  let name = raw.trim();
  if name.is_empty() || name == "." || name == ".." {
    return false;
  }
  if name.len() > MAX_PROJECT_NAME_LEN {
    return false;
  }
  name
    .chars()
    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '@'))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn feature_names_accept_word_characters() {
    assert!(is_valid_feature_name("billing"));
    assert!(is_valid_feature_name("user_profile"));
    assert!(is_valid_feature_name("search-v2"));
    assert!(is_valid_feature_name("  padded  ")); // trimmed before checking
  }

  #[test]
  fn feature_names_reject_specials_and_empty() {
    assert!(!is_valid_feature_name(""));
    assert!(!is_valid_feature_name("   "));
    assert!(!is_valid_feature_name("has space"));
    assert!(!is_valid_feature_name("dot.name"));
    assert!(!is_valid_feature_name("at@name"));
  }

  #[test]
  fn project_names_accept_npm_style_names() {
    assert!(is_valid_project_name("my-app"));
    assert!(is_valid_project_name("@scope-app"));
    assert!(is_valid_project_name("app.v2"));
    assert!(is_valid_project_name("demo_2024"));
  }

  #[test]
  fn project_names_reject_dot_dirs_and_bad_chars() {
    assert!(!is_valid_project_name("."));
    assert!(!is_valid_project_name(".."));
    assert!(!is_valid_project_name(""));
    assert!(!is_valid_project_name("has space"));
    assert!(!is_valid_project_name("semi;colon"));
  }

  #[test]
  fn project_names_reject_overlong_input() {
    let ok = "a".repeat(214);
    let too_long = "a".repeat(215);
    assert!(is_valid_project_name(&ok));
    assert!(!is_valid_project_name(&too_long));
  }
}
