//! `cw show`, `cw render`, `cw set` and `cw reset` command implementations.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use cw_content::{ContentDocument, Field, FieldUpdate, SectionId};
use cw_site::{ContentStore, EditorSession};
use serde_json::Value;

use super::StoreArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    #[command(flatten)]
    store: StoreArgs,

    /// Print only this field (camelCase name, e.g. `heroTitle`).
    #[arg(short, long)]
    field: Option<Field>,
}

impl ShowArgs {
    /// Execute the show command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let (_, store) = self.store.open_store()?;
        let json = show(store.document(), self.field)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    #[command(flatten)]
    store: StoreArgs,

    /// Mark this section as the one being edited.
    #[arg(short, long)]
    section: Option<SectionId>,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RenderArgs {
    /// Execute the render command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let (config, store) = self.store.open_store()?;
        let session = EditorSession::open(store, config.site.college_name.clone());
        let html = cw_renderer::render(session.document(), self.section);

        match self.output {
            Some(path) => {
                std::fs::write(&path, html)?;
                Output::new().success(&format!("Wrote {}", path.display()));
            }
            None => writeln!(io::stdout(), "{html}")?,
        }
        Ok(())
    }
}

/// Arguments for the set command.
#[derive(Args)]
pub(crate) struct SetArgs {
    #[command(flatten)]
    store: StoreArgs,

    /// Field to replace (camelCase name, e.g. `heroTitle`).
    field: Field,

    /// New value as JSON. Text that is not valid JSON is taken as a string.
    value: String,
}

impl SetArgs {
    /// Execute the set command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let (_, mut store) = self.store.open_store()?;
        set(&mut store, self.field, &self.value)?;
        Output::new().success(&format!("Updated {}", self.field));
        Ok(())
    }
}

/// Arguments for the reset command.
#[derive(Args)]
pub(crate) struct ResetArgs {
    #[command(flatten)]
    store: StoreArgs,
}

impl ResetArgs {
    /// Execute the reset command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let (_, mut store) = self.store.open_store()?;
        store.clear()?;
        Output::new().success("Content restored to defaults");
        Ok(())
    }
}

/// Pretty JSON for the whole document or one field of it.
fn show(doc: &ContentDocument, field: Option<Field>) -> Result<String, CliError> {
    let json = match field {
        Some(field) => serde_json::to_string_pretty(&doc.field_value(field))?,
        None => serde_json::to_string_pretty(doc)?,
    };
    Ok(json)
}

/// Parse a command-line value, falling back to a plain string.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()))
}

/// Replace `field` and write the document.
///
/// A value that parses as non-string JSON but does not fit the field is
/// retried as the literal text, so `set hero-title 2025` stores "2025".
fn set(store: &mut ContentStore, field: Field, raw: &str) -> Result<(), CliError> {
    let value = parse_value(raw);
    let update = match FieldUpdate::for_field(field, value.clone()) {
        Ok(update) => update,
        Err(_) if !value.is_string() => {
            FieldUpdate::for_field(field, Value::String(raw.to_owned()))?
        }
        Err(e) => return Err(e.into()),
    };
    store.apply_transient(update);
    store.save()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cw_site::DEFAULT_KEY;
    use cw_storage::{KeyValueStore, MemoryStore, StorageErrorKind};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn store_with(memory: &Arc<MemoryStore>) -> ContentStore {
        let mut store = ContentStore::new(Arc::clone(memory) as Arc<dyn KeyValueStore>, DEFAULT_KEY);
        store.load();
        store
    }

    #[test]
    fn test_parse_value_json() {
        assert_eq!(parse_value(r#"{"a": 1}"#), json!({"a": 1}));
        assert_eq!(parse_value(r#""quoted""#), json!("quoted"));
    }

    #[test]
    fn test_parse_value_bare_text() {
        assert_eq!(parse_value("Welcome to Campus"), json!("Welcome to Campus"));
    }

    #[test]
    fn test_show_single_field() {
        let doc = ContentDocument::default();

        let json = show(&doc, Some(Field::Tagline)).unwrap();

        assert_eq!(json, "\"Excellence in Education\"");
    }

    #[test]
    fn test_show_document_is_camel_case() {
        let doc = ContentDocument::default();

        let json = show(&doc, None).unwrap();

        assert!(json.contains("\"collegeName\""));
        assert!(json.contains("\"footerData\""));
    }

    #[test]
    fn test_set_persists() {
        let memory = Arc::new(MemoryStore::new());
        let mut store = store_with(&memory);

        set(&mut store, Field::HeroTitle, "Welcome").unwrap();

        let reloaded = store_with(&memory);
        assert_eq!(reloaded.document().hero_title, "Welcome");
        assert_eq!(memory.writes(), 1);
    }

    #[test]
    fn test_set_numeric_text_field() {
        let memory = Arc::new(MemoryStore::new());
        let mut store = store_with(&memory);

        set(&mut store, Field::HeroTitle, "2025").unwrap();
        set(&mut store, Field::Tagline, "true").unwrap();

        let reloaded = store_with(&memory);
        assert_eq!(reloaded.document().hero_title, "2025");
        assert_eq!(reloaded.document().tagline, "true");
    }

    #[test]
    fn test_set_rejects_wrong_shape() {
        let memory = Arc::new(MemoryStore::new());
        let mut store = store_with(&memory);

        let result = set(&mut store, Field::Departments, "not a list");

        assert!(matches!(result, Err(CliError::Content(_))));
        assert_eq!(memory.writes(), 0);
    }

    #[test]
    fn test_set_reports_storage_failure() {
        let memory =
            Arc::new(MemoryStore::new().with_write_failure(StorageErrorKind::QuotaExceeded));
        let mut store = store_with(&memory);

        let result = set(&mut store, Field::CollegeName, "Riverside");

        assert!(matches!(result, Err(CliError::Store(_))));
    }
}
