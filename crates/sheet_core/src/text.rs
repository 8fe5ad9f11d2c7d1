/// Default cut-off used by callers that do not pick their own.
pub const DEFAULT_TRUNCATE_LENGTH: usize = 50;

/// Marker appended to truncated strings.
pub const ELLIPSIS: &str = "...";

/// Shortens `input` to `length` characters plus [`ELLIPSIS`].
///
/// Counts `char`s, so combining sequences and wide glyphs are not treated
/// as single display cells.
pub fn truncate(input: &str, length: usize) -> String {
    match input.char_indices().nth(length) {
        Some((cut, _)) => format!("{}{}", &input[..cut], ELLIPSIS),
        None => input.to_string(),
    }
}
