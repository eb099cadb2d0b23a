//! Rendering of batch results and exit status.

use invmerge_core::BatchResult;
use serde_json::json;

/// Output rendering mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Render the result in the requested format.
pub fn render(result: &BatchResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Text => Ok(render_text(result)),
    }
}

/// Counts and output path, one per line.
pub fn render_text(result: &BatchResult) -> String {
    let mut output = format!("Processed {} invoices\n", result.invoices.len());

    if !result.errors.is_empty() {
        output.push_str(&format!("Errors: {}\n", result.errors.len()));
    }
    if let Some(path) = &result.output_file {
        output.push_str(&format!("Output saved to: {}\n", path.display()));
    }

    output
}

/// Single-line JSON object describing a fatal error.
pub fn render_fatal(error: &anyhow::Error) -> String {
    json!({ "error": format!("{:#}", error) }).to_string()
}

/// `1` when every input failed, `0` otherwise.
pub fn exit_code(result: &BatchResult) -> u8 {
    if result.is_total_failure() { 1 } else { 0 }
}
