// src/templates.rs
//
// Pure mapping from (project name, language mode, React generation) to the
// set of file actions that make up the opinionated scaffold. No filesystem
// or process access happens here; orchestrators apply the actions.

use std::path::PathBuf;

use serde_json::json;

use crate::config::Language;

/// How a file action treats an existing file at its target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
  /// Unconditional overwrite.
  Overwrite,
  /// Skip silently when the file already exists.
  CreateIfAbsent,
  /// Rewrite only when the file exists (entry-file normalization).
  OverwriteIfPresent,
}

/// The atomic unit of filesystem mutation: a relative target path, a write
/// mode and the full content to write.
#[derive(Debug, Clone)]
pub struct FileAction {
  pub path: PathBuf,
  pub mode: WriteMode,
  pub content: String,
}

impl FileAction {
  fn overwrite(path: &str, content: String) -> FileAction {
    FileAction {
      path: PathBuf::from(path),
      mode: WriteMode::Overwrite,
      content,
    }
  }

  fn if_absent(path: &str, content: String) -> FileAction {
    FileAction {
      path: PathBuf::from(path),
      mode: WriteMode::CreateIfAbsent,
      content,
    }
  }

  fn if_present(path: &str, content: String) -> FileAction {
    FileAction {
      path: PathBuf::from(path),
      mode: WriteMode::OverwriteIfPresent,
      content,
    }
  }
}

/// The fixed folder skeleton of a fresh scaffold.
pub const PROJECT_FOLDERS: &[&str] = &[
  "public",
  "src/assets",
  "src/components/common",
  "src/components/layout",
  "src/components/icons",
  "src/components/ui",
  "src/features",
  "src/hooks",
  "src/lib",
  "src/routes",
];

/// Conventional subdirectories of every feature module.
pub const FEATURE_SUBDIRS: &[&str] = &["components", "pages", "service"];

/// Produces the full set of file actions for a fresh scaffold. The example
/// feature's stubs come from [`feature_stub_actions`] so that the standalone
/// `feature` command generates structurally identical modules later.
pub fn scaffold_actions(name: &str, language: Language, modern_react: bool) -> Vec<FileAction> {
  let ext = language.component_ext();
  let script = language.script_ext();
  let is_ts = language.is_typescript();

  let mut actions = Vec::new();

  // --- App shell, router, layout ---
  actions.push(FileAction::overwrite(
    &format!("src/App.{}", ext),
    r#"import { RouterProvider } from "react-router-dom";
import { router } from "./routes";

export default function App() {
  return <RouterProvider router={router} />;
}
"#
    .to_string(),
  ));
  actions.push(FileAction::overwrite(
    &format!("src/routes/index.{}", ext),
    r#"import { createBrowserRouter } from "react-router-dom";
import MainLayout from "../components/layout/MainLayout";
import ExamplePage from "../features/example/pages/ExamplePage";

export const router = createBrowserRouter([
  {
    path: "/",
    element: <MainLayout />,
    children: [
      { index: true, element: <ExamplePage /> }
    ]
  }
]);
"#
    .to_string(),
  ));
  actions.push(FileAction::overwrite(
    &format!("src/components/layout/Header.{}", ext),
    r#"export default function Header() {
  return (
    <header style={{ padding: "0.75rem 1rem", borderBottom: "1px solid #eaeaea" }}>
      <strong>Header</strong>
    </header>
  );
}
"#
    .to_string(),
  ));
  actions.push(FileAction::overwrite(
    &format!("src/components/layout/Footer.{}", ext),
    r#"export default function Footer() {
  return (
    <footer style={{ padding: "0.75rem 1rem", borderTop: "1px solid #eaeaea", marginTop: "2rem" }}>
      <small>Footer</small>
    </footer>
  );
}
"#
    .to_string(),
  ));
  actions.push(FileAction::overwrite(
    &format!("src/components/layout/MainLayout.{}", ext),
    r#"import { Outlet } from "react-router-dom";
import Header from "./Header";
import Footer from "./Footer";

export default function MainLayout() {
  return (
    <>
      <Header />
      <main style={{ padding: "1rem" }}>
        <Outlet />
      </main>
      <Footer />
    </>
  );
}
"#
    .to_string(),
  ));

  // --- UI primitives ---
  actions.push(FileAction::overwrite(
    &format!("src/components/common/Card.{}", ext),
    if is_ts {
      r#"import type { ReactNode } from "react";

type CardProps = { children?: ReactNode };

export default function Card({ children }: CardProps) {
  return (
    <div style={{ padding: "1rem", border: "1px solid #ddd", borderRadius: 8 }}>
      {children}
    </div>
  );
}
"#
      .to_string()
    } else {
      r#"export default function Card({ children }) {
  return (
    <div style={{ padding: "1rem", border: "1px solid #ddd", borderRadius: 8 }}>
      {children}
    </div>
  );
}
"#
      .to_string()
    },
  ));
  actions.push(FileAction::overwrite(
    &format!("src/components/ui/Button.{}", ext),
    if is_ts {
      r#"import type { ButtonHTMLAttributes, ReactNode } from "react";

type ButtonProps = ButtonHTMLAttributes<HTMLButtonElement> & { children?: ReactNode };

export default function Button({ children, ...rest }: ButtonProps) {
  return <button {...rest}>{children}</button>;
}
"#
      .to_string()
    } else {
      r#"export default function Button(props) {
  const { children, ...rest } = props;
  return <button {...rest}>{children}</button>;
}
"#
      .to_string()
    },
  ));
  actions.push(FileAction::overwrite(
    &format!("src/components/ui/Input.{}", ext),
    if is_ts {
      r#"import type { InputHTMLAttributes } from "react";

type InputProps = InputHTMLAttributes<HTMLInputElement>;

export default function Input(props: InputProps) {
  return <input {...props} />;
}
"#
      .to_string()
    } else {
      r#"export default function Input(props) {
  return <input {...props} />;
}
"#
      .to_string()
    },
  ));
  actions.push(FileAction::overwrite(
    &format!("src/components/icons/LogoIcon.{}", ext),
    if is_ts {
      r#"import type { SVGProps } from "react";

export default function LogoIcon(props: SVGProps<SVGSVGElement>) {
  return (
    <svg width="24" height="24" viewBox="0 0 24 24" {...props}>
      <circle cx="12" cy="12" r="10" fill="currentColor" />
    </svg>
  );
}
"#
      .to_string()
    } else {
      r#"export default function LogoIcon(props) {
  return (
    <svg width="24" height="24" viewBox="0 0 24 24" {...props}>
      <circle cx="12" cy="12" r="10" fill="currentColor" />
    </svg>
  );
}
"#
      .to_string()
    },
  ));
  actions.push(FileAction::overwrite(
    &format!("src/lib/constants.{}", script),
    format!("export const APP_NAME = \"{}\";", name),
  ));

  // --- Example feature module ---
  actions.push(FileAction::overwrite(
    &format!("src/features/example/pages/ExamplePage.{}", ext),
    r#"import Card from "../../../components/common/Card";

export default function ExamplePage() {
  return (
    <Card>
      <h1>Welcome to the example feature</h1>
      <p>Replace this with your real feature pages.</p>
    </Card>
  );
}
"#
    .to_string(),
  ));
  actions.push(FileAction::overwrite(
    &format!("src/features/example/service/exampleService.{}", script),
    r#"export async function getExample() {
  return { ok: true };
}
"#
    .to_string(),
  ));
  for stub in feature_stub_actions("example", language) {
    actions.push(FileAction {
      path: PathBuf::from("src/features/example").join(stub.path),
      mode: stub.mode,
      content: stub.content,
    });
  }

  // --- Hooks and library stubs ---
  actions.push(FileAction::overwrite(
    &format!("src/hooks/useDebounce.{}", script),
    if is_ts {
      r#"import { useEffect, useState } from "react";

export function useDebounce<T>(value: T, delay = 300) {
  const [debounced, setDebounced] = useState(value);
  useEffect(() => {
    const id = setTimeout(() => setDebounced(value), delay);
    return () => clearTimeout(id);
  }, [value, delay]);
  return debounced;
}
"#
      .to_string()
    } else {
      r#"import { useEffect, useState } from "react";

export function useDebounce(value, delay = 300) {
  const [debounced, setDebounced] = useState(value);
  useEffect(() => {
    const id = setTimeout(() => setDebounced(value), delay);
    return () => clearTimeout(id);
  }, [value, delay]);
  return debounced;
}
"#
      .to_string()
    },
  ));
  actions.push(FileAction::overwrite(
    &format!("src/lib/axios.{}", script),
    r#"/** Configure axios here if you use it in your projects
import axios from "axios";
export const api = axios.create({ baseURL: import.meta.env.VITE_API_URL });
api.interceptors.response.use((r) => r, (e) => Promise.reject(e));
*/
"#
    .to_string(),
  ));
  actions.push(FileAction::overwrite(
    &format!("src/lib/toast.{}", script),
    "// configure your toast library of choice here".to_string(),
  ));

  // --- Global styles and types ---
  actions.push(FileAction::if_absent(
    "src/index.css",
    "/* global styles */".to_string(),
  ));
  if is_ts {
    actions.push(FileAction::if_absent(
      "src/type.ts",
      "// shared global types".to_string(),
    ));
  }

  // --- Lint, env, docs, compiler configs ---
  actions.push(FileAction::overwrite(
    ".eslintrc.json",
    eslint_config(language, modern_react),
  ));
  actions.push(FileAction::overwrite(
    ".env",
    "# environment variables\nVITE_API_URL=\n".to_string(),
  ));
  actions.push(FileAction::overwrite(
    ".env.sample",
    "VITE_API_URL=https://api.example.com".to_string(),
  ));
  actions.push(FileAction::overwrite("SETUP.md", setup_doc(language)));
  if is_ts {
    actions.push(FileAction::if_absent(
      "tsconfig.app.json",
      ts_app_config(),
    ));
    actions.push(FileAction::if_absent(
      "tsconfig.node.json",
      ts_node_config(),
    ));
  }

  // --- Entry normalization: rewrite only what the generator created ---
  actions.push(FileAction::if_present(
    &format!("src/main.{}", ext),
    main_entry(language, modern_react),
  ));

  actions
}

/// The validation/type stubs shared by the bootstrap example feature and the
/// standalone feature command. Paths are relative to the module directory.
/// TypeScript mode adds the per-module type file JavaScript mode omits.
pub fn feature_stub_actions(name: &str, language: Language) -> Vec<FileAction> {
  if language.is_typescript() {
    vec![
      FileAction::if_absent("type.ts", format!("// types for {}", name)),
      FileAction::if_absent(
        "validation.ts",
        "// add zod/yup schemas here when needed".to_string(),
      ),
    ]
  } else {
    vec![FileAction::if_absent(
      "validation.js",
      "// add your validation utilities here when needed".to_string(),
    )]
  }
}

/// `.eslintrc.json` body. The JSX-scope rule is disabled for React >= 18
/// (the automatic runtime) and enforced for older majors.
pub fn eslint_config(language: Language, modern_react: bool) -> String {
  let jsx_scope = if modern_react { "off" } else { "error" };
  let config = if language.is_typescript() {
    json!({
      "env": { "browser": true, "es2021": true },
      "extends": [
        "eslint:recommended",
        "plugin:react/recommended",
        "plugin:react-hooks/recommended",
        "plugin:@typescript-eslint/recommended"
      ],
      "parser": "@typescript-eslint/parser",
      "parserOptions": {
        "ecmaFeatures": { "jsx": true },
        "ecmaVersion": "latest",
        "sourceType": "module"
      },
      "plugins": ["react", "react-hooks", "@typescript-eslint"],
      "rules": { "react/react-in-jsx-scope": jsx_scope },
      "settings": { "react": { "version": "detect" } }
    })
  } else {
    json!({
      "env": { "browser": true, "es2021": true },
      "extends": [
        "eslint:recommended",
        "plugin:react/recommended",
        "plugin:react-hooks/recommended"
      ],
      "parserOptions": {
        "ecmaFeatures": { "jsx": true },
        "ecmaVersion": "latest",
        "sourceType": "module"
      },
      "plugins": ["react", "react-hooks"],
      "rules": { "react/react-in-jsx-scope": jsx_scope },
      "settings": { "react": { "version": "detect" } }
    })
  };
  serde_json::to_string_pretty(&config).expect("static eslint config serializes")
}

/// Entry file for the two generations of the root-mounting API: `createRoot`
/// for React >= 18, legacy `ReactDOM.render` below that.
pub fn main_entry(language: Language, modern_react: bool) -> String {
  let root_lookup = if language.is_typescript() {
    "document.getElementById(\"root\")!"
  } else {
    "document.getElementById(\"root\")"
  };
  if modern_react {
    format!(
      r#"import React from "react";
import ReactDOM from "react-dom/client";
import App from "./App";
import "./index.css";

ReactDOM.createRoot({}).render(
  <React.StrictMode>
    <App />
  </React.StrictMode>
);
"#,
      root_lookup
    )
  } else {
    format!(
      r#"import React from "react";
import ReactDOM from "react-dom";
import App from "./App";
import "./index.css";

ReactDOM.render(
  <React.StrictMode>
    <App />
  </React.StrictMode>,
  {}
);
"#,
      root_lookup
    )
  }
}

fn setup_doc(language: Language) -> String {
  let ext = language.component_ext();
  let ts_line = if language.is_typescript() {
    "- type.ts        -> global TS types\n"
  } else {
    ""
  };
  format!(
    r#"# Setup

## Install & Run
```bash
npm install
npm run dev
```

## Folder Structure (src)
- assets/         -> images, videos, etc.
- components/
  - common/       -> shared components used across 2-3 features (e.g., Card)
  - layout/       -> Header, Footer, MainLayout
  - icons/        -> SVG components
  - ui/           -> UI primitives (Button, Input, Modal, etc.)
- features/       -> feature modules (e.g., chat, blog)
  - <feature>/components
  - <feature>/pages
  - <feature>/service
  - <feature>/type.ts (TS only)
  - <feature>/validation.ts
- hooks/          -> global hooks (e.g., useDebounce)
- lib/            -> axios config, toast config, constants
- routes/         -> router definition (Data Router API)
- App.{}      -> renders RouterProvider
- index.css       -> global styles
{}"#,
    ext, ts_line
  )
}

/// Section appended to the generator-provided README.
pub fn readme_section(language: Language, modern_react: bool) -> String {
  let eslint_note = if modern_react {
    "off for React 18+"
  } else {
    "enforced for <18"
  };
  format!(
    r#"## Created with react-scaffold

- React + Vite
- {}
- React Router (Data Router API)
- ESLint (.eslintrc.json; JSX scope rule {})
- Opinionated folder structure
"#,
    language, eslint_note
  )
}

fn ts_app_config() -> String {
  let config = json!({
    "compilerOptions": {
      "target": "ES2020",
      "lib": ["ES2020", "DOM", "DOM.Iterable"],
      "jsx": "react-jsx",
      "module": "ESNext",
      "moduleResolution": "Bundler",
      "strict": true,
      "skipLibCheck": true,
      "noEmit": true,
      "isolatedModules": true,
      "allowSyntheticDefaultImports": true,
      "esModuleInterop": true,
      "resolveJsonModule": true,
      "noUncheckedIndexedAccess": true
    },
    "include": ["src"]
  });
  serde_json::to_string_pretty(&config).expect("static tsconfig serializes")
}

fn ts_node_config() -> String {
  let config = json!({
    "compilerOptions": {
      "target": "ES2020",
      "lib": ["ES2020"],
      "module": "ESNext",
      "moduleResolution": "Bundler",
      "types": ["node"],
      "allowSyntheticDefaultImports": true,
      "esModuleInterop": true
    },
    "include": ["vite.config.ts"]
  });
  serde_json::to_string_pretty(&config).expect("static tsconfig serializes")
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::path::Path;

  fn action<'a>(actions: &'a [FileAction], path: &str) -> &'a FileAction {
    actions
      .iter()
      .find(|a| a.path == Path::new(path))
      .unwrap_or_else(|| panic!("missing action for {}", path))
  }

  #[test]
  fn typescript_scaffold_emits_type_files_and_configs() {
    let actions = scaffold_actions("demo", Language::TypeScript, true);
    action(&actions, "src/features/example/type.ts");
    action(&actions, "src/features/example/validation.ts");
    action(&actions, "src/type.ts");
    action(&actions, "tsconfig.app.json");
    action(&actions, "tsconfig.node.json");
    action(&actions, "src/App.tsx");
  }

  #[test]
  fn javascript_scaffold_omits_type_files() {
    let actions = scaffold_actions("demo", Language::JavaScript, true);
    assert!(actions.iter().all(|a| a.path != Path::new("src/type.ts")));
    assert!(actions
      .iter()
      .all(|a| a.path != Path::new("tsconfig.app.json")));
    action(&actions, "src/features/example/validation.js");
    action(&actions, "src/App.jsx");
  }

  #[test]
  fn entry_normalization_only_touches_existing_files() {
    let actions = scaffold_actions("demo", Language::TypeScript, true);
    let entry = action(&actions, "src/main.tsx");
    assert_eq!(entry.mode, WriteMode::OverwriteIfPresent);
    assert!(entry.content.contains("ReactDOM.createRoot"));
  }

  #[test]
  fn legacy_react_gets_the_render_api() {
    let entry = main_entry(Language::JavaScript, false);
    assert!(entry.contains("ReactDOM.render("));
    assert!(entry.contains("from \"react-dom\""));
    assert!(!entry.contains("createRoot"));
  }

  #[test]
  fn entry_imports_relative_stylesheet() {
    let actions = scaffold_actions("demo", Language::TypeScript, true);
    let entry = action(&actions, "src/main.tsx");
    assert!(entry.content.contains("import \"./index.css\";"));
  }

  #[test]
  fn eslint_jsx_scope_rule_tracks_react_generation() {
    let modern = eslint_config(Language::TypeScript, true);
    assert!(modern.contains(r#""react/react-in-jsx-scope": "off""#));
    let legacy = eslint_config(Language::JavaScript, false);
    assert!(legacy.contains(r#""react/react-in-jsx-scope": "error""#));
    assert!(!legacy.contains("@typescript-eslint"));
  }

  #[test]
  fn constants_embed_the_project_name() {
    let actions = scaffold_actions("acme-shop", Language::TypeScript, true);
    let constants = action(&actions, "src/lib/constants.ts");
    assert_eq!(constants.content, "export const APP_NAME = \"acme-shop\";");
  }

  #[test]
  fn feature_stubs_match_between_scaffold_and_feature_paths() {
    let scaffold = scaffold_actions("demo", Language::TypeScript, true);
    let standalone = feature_stub_actions("example", Language::TypeScript);
    for stub in &standalone {
      let in_scaffold = action(
        &scaffold,
        &format!("src/features/example/{}", stub.path.display()),
      );
      assert_eq!(in_scaffold.content, stub.content);
      assert_eq!(in_scaffold.mode, stub.mode);
    }
  }

  #[test]
  fn index_css_is_never_clobbered() {
    let actions = scaffold_actions("demo", Language::JavaScript, true);
    assert_eq!(action(&actions, "src/index.css").mode, WriteMode::CreateIfAbsent);
  }
}
