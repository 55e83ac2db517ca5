//! Template rendering and source canonicalization.
//!
//! Rendering and canonicalization are deliberately separate steps so that a
//! template mistake and a template that renders to invalid Rust stay
//! distinguishable failure modes.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use handlebars::Handlebars;
use serde_json::json;
use tracing::{debug, info};

use crate::error::{CodegenError, Result};
use crate::model::CurrencyRecord;

const TEMPLATE_NAME: &str = "currency_data";

/// Render records through the Handlebars template at `template_path` and
/// canonicalize the result as Rust source.
pub fn render(template_path: &Path, records: &[CurrencyRecord]) -> Result<Vec<u8>> {
    let template = fs::read_to_string(template_path)?;

    let mut handlebars = Handlebars::new();
    // Output is Rust source, not HTML.
    handlebars.register_escape_fn(handlebars::no_escape);
    // A field missing from the data is a template bug, not an empty string.
    handlebars.set_strict_mode(true);
    handlebars.register_helper("lowercase", Box::new(lowercase_helper));
    handlebars
        .register_template_string(TEMPLATE_NAME, template)
        .map_err(|e| CodegenError::Template(e.to_string()))?;

    let rendered = handlebars
        .render(TEMPLATE_NAME, &json!({ "currencies": records }))
        .map_err(|e| CodegenError::Template(e.to_string()))?;
    debug!(bytes = rendered.len(), "rendered template");

    canonicalize(&rendered)
}

/// Parse the rendered text as a Rust file and pretty-print it. Formatting is
/// deterministic for a given input.
fn canonicalize(source: &str) -> Result<Vec<u8>> {
    let file = syn::parse_file(source)?;
    Ok(prettyplease::unparse(&file).into_bytes())
}

/// Write generated source to `path` via buffered I/O, flushed before return.
pub fn persist(path: &Path, bytes: &[u8]) -> Result<()> {
    let out = fs::File::create(path)?;
    let mut writer = BufWriter::new(out);
    writer.write_all(bytes)?;
    writer.flush()?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote generated source");
    Ok(())
}

fn lowercase_helper(
    h: &handlebars::Helper,
    _: &Handlebars,
    _: &handlebars::Context,
    _: &mut handlebars::RenderContext,
    out: &mut dyn handlebars::Output,
) -> handlebars::HelperResult {
    let param = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");
    out.write(&param.to_lowercase())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, code: &str, num: &str, scale: &str) -> CurrencyRecord {
        CurrencyRecord {
            name: name.to_string(),
            code: code.to_string(),
            num: num.to_string(),
            scale: scale.to_string(),
        }
    }

    fn write_template(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join("currency_data.tmpl");
        fs::write(&path, body).unwrap();
        path
    }

    const SIMPLE_TEMPLATE: &str = "\
{{#each currencies}}
pub const {{code}}: &str = \"{{lowercase code}}\";
{{/each}}
";

    #[test]
    fn test_render_with_lowercase_helper() {
        let dir = tempfile::tempdir().unwrap();
        let template = write_template(&dir, SIMPLE_TEMPLATE);
        let records = vec![record("US Dollar", "USD", "840", "2")];

        let bytes = render(&template, &records).unwrap();
        let source = String::from_utf8(bytes).unwrap();
        assert!(source.contains("pub const USD: &str = \"usd\";"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let template = write_template(&dir, SIMPLE_TEMPLATE);
        let records = vec![
            record("Euro", "EUR", "978", "2"),
            record("Yen", "JPY", "392", "0"),
        ];

        let first = render(&template, &records).unwrap();
        let second = render(&template, &records).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_field_is_a_template_error() {
        let dir = tempfile::tempdir().unwrap();
        let template = write_template(&dir, "{{#each currencies}}{{no_such_field}}{{/each}}");
        let records = vec![record("Euro", "EUR", "978", "2")];

        let err = render(&template, &records).unwrap_err();
        assert!(matches!(err, CodegenError::Template(_)));
    }

    #[test]
    fn test_template_syntax_error_is_a_template_error() {
        let dir = tempfile::tempdir().unwrap();
        let template = write_template(&dir, "{{#each currencies}}unterminated");
        let err = render(&template, &[]).unwrap_err();
        assert!(matches!(err, CodegenError::Template(_)));
    }

    #[test]
    fn test_invalid_rust_output_is_a_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let template = write_template(&dir, "this is not rust");
        let err = render(&template, &[]).unwrap_err();
        assert!(matches!(err, CodegenError::Format(_)));
    }

    #[test]
    fn test_missing_template_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = render(&dir.path().join("missing.tmpl"), &[]).unwrap_err();
        assert!(matches!(err, CodegenError::Io(_)));
    }

    #[test]
    fn test_persist_writes_bytes_in_full() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("currency_data.rs");
        let bytes = b"pub const EUR: &str = \"eur\";\n";

        persist(&path, bytes).unwrap();
        assert_eq!(fs::read(&path).unwrap(), bytes);
    }
}
