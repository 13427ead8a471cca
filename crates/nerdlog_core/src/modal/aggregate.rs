//! Project document aggregation.

/// Horizontal rule placed after the index and after every entry.
pub const ENTRY_SEPARATOR: &str = "\n\n---\n\n";

/// Concatenates a project index with its entries.
///
/// `entries` must already be in chronological (oldest-first) order. Each part
/// is trimmed and followed by [`ENTRY_SEPARATOR`].
pub fn merge_project_document<'a>(
    index_markdown: &str,
    entries: impl IntoIterator<Item = &'a str>,
) -> String {
    let mut merged = String::new();
    merged.push_str(index_markdown.trim());
    merged.push_str(ENTRY_SEPARATOR);
    for entry in entries {
        merged.push_str(entry.trim());
        merged.push_str(ENTRY_SEPARATOR);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::merge_project_document;

    #[test]
    fn merges_with_separators_after_each_part() {
        let merged = merge_project_document("  # Rover \n", ["\n# 2024-01-01\nday one\n", "# 2024-01-02"]);
        assert_eq!(
            merged,
            "# Rover\n\n---\n\n# 2024-01-01\nday one\n\n---\n\n# 2024-01-02\n\n---\n\n"
        );
    }

    #[test]
    fn project_without_entries_keeps_index_only() {
        assert_eq!(merge_project_document("intro", Vec::<&str>::new()), "intro\n\n---\n\n");
    }
}
