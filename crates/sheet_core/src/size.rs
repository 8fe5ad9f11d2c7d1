const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const BASE: u64 = 1024;

/// Human-readable size with base-1024 units, rounded to two decimals.
///
/// `0` is `"0 Bytes"`. Sizes of 1 TiB and above stay in `GB`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut scale = 1u64;
    while unit < UNITS.len() - 1 && bytes / scale >= BASE {
        scale *= BASE;
        unit += 1;
    }

    let rounded = (bytes as f64 / scale as f64 * 100.0).round() / 100.0;
    // f64 Display drops trailing zeros: 1.0 -> "1", 1.50 -> "1.5".
    format!("{} {}", rounded, UNITS[unit])
}
