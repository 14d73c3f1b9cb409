/// Formats a running score as a whole-number percentage label.
///
/// Returns `"0%"` when nothing has been attempted yet. Halves round up, so
/// `1 / 8` (12.5%) renders as `"13%"`.
#[must_use]
pub fn format_percentage(score: u32, total: u32) -> String {
    if total == 0 {
        return "0%".to_string();
    }
    let score = u64::from(score);
    let total = u64::from(total);
    let rounded = (200 * score + total) / (2 * total);
    format!("{rounded}%")
}
