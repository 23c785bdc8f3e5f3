//! Human-readable byte formatting for progress labels.

/// Unit ladder, decimal (factor 1000). Suffixes carry the leading space.
const SUFFIXES: [&str; 7] = [" B", " KB", " MB", " GB", " TB", " PB", " EB"];

/// Formats a byte count with the largest unit that keeps the number >= 1,
/// rounded to `decimal_places` with trailing zeros trimmed.
///
/// Zero is always `"0 B"`. Negative counts format like their absolute value
/// with a leading minus sign. An `i64` tops out inside the EB bucket, so the
/// ladder index is clamped rather than ever running past the table.
///
/// # Examples
///
/// - `format_bytes(1000, 0)` → `"1 KB"`
/// - `format_bytes(1500, 1)` → `"1.5 KB"`
/// - `format_bytes(-1500, 1)` → `"-1.5 KB"`
/// - `format_bytes(999, 2)` → `"999 B"`
pub fn format_bytes(byte_count: i64, decimal_places: u32) -> String {
    if byte_count == 0 {
        return "0 B".to_string();
    }
    let magnitude = byte_count.unsigned_abs();
    let index = ((magnitude.ilog10() / 3) as usize).min(SUFFIXES.len() - 1);
    let scale = 1000u64.pow(index as u32) as f64;
    let precision = 10f64.powi(decimal_places as i32);
    let num = (magnitude as f64 / scale * precision).round() / precision;
    let signed = if byte_count < 0 { -num } else { num };
    format!("{}{}", signed, SUFFIXES[index])
}
