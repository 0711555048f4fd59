// src/prompts.rs
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::config::Language;
use crate::error::ScaffoldError;
use crate::validate;

/// Answers gathered interactively when `create` is missing required options
/// and `--yes` was not given.
#[derive(Debug)]
pub struct ProjectAnswers {
  pub name: String,
  pub language: Language,
}

pub fn ask_project_options(
  name: Option<&str>,
  language: Option<Language>,
) -> Result<ProjectAnswers, ScaffoldError> {
  let theme = ColorfulTheme::default();

  let name = match name {
    Some(n) => n.to_string(),
    None => Input::with_theme(&theme)
      .with_prompt("Enter your project name")
      .default("my-app".to_string())
      .validate_with(|input: &String| -> Result<(), String> {
        if validate::is_valid_project_name(input) {
          Ok(())
        } else {
          Err(format!("Invalid project name: {}", input))
        }
      })
      .interact_text()?,
  };

  let language = match language {
    Some(l) => l,
    None => {
      let choices = [Language::TypeScript, Language::JavaScript];
      let selection = Select::with_theme(&theme)
        .with_prompt("Choose language")
        .items(&["TypeScript", "JavaScript"])
        .default(0)
        .interact()?;
      choices[selection]
    }
  };

  Ok(ProjectAnswers { name, language })
}
