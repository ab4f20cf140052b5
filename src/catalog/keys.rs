/// Derives the mapping key for a display name.
///
/// Lowercases, turns spaces and hyphens into underscores, drops `|` and `.`,
/// then trims surrounding whitespace.
pub fn normalize_key(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' | '-' => Some('_'),
            '|' | '.' => None,
            c => Some(c),
        })
        .collect::<String>()
        .trim()
        .to_string()
}
