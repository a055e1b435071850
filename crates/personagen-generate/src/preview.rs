use personagen_core::ProfileRecord;

/// Render a batch as the preview text block.
///
/// Each record gets a `🧑 Profile N:` marker line (1-based), one
/// `• Field: value` line per field in record order, then a blank separator
/// line. The result is plain text; search and statistics run over it, not
/// over the structured records.
pub fn render_preview(batch: &[ProfileRecord]) -> String {
    let mut text = String::new();
    for (index, record) in batch.iter().enumerate() {
        text.push_str(&format!("🧑 Profile {}:\n", index + 1));
        for (field, value) in record.entries() {
            text.push_str(&format!("• {}: {}\n", field.display_name(), value));
        }
        text.push('\n');
    }
    text
}
