/// Two-column table serialization for external consumption (clipboard
/// paste into a spreadsheet).
///
/// Columns are joined with a tab, rows with a newline. When the columns
/// differ in length the missing side renders as an empty string, never a
/// placeholder.
pub fn format_tsv(col1: &[String], col2: &[String]) -> String {
    let rows = col1.len().max(col2.len());
    (0..rows)
        .map(|i| {
            let a = col1.get(i).map(String::as_str).unwrap_or("");
            let b = col2.get(i).map(String::as_str).unwrap_or("");
            format!("{a}\t{b}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
