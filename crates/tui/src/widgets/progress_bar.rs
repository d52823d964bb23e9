//! Progress bar and percentage text for a current/total ratio.

/// Glyph for a filled cell.
pub const FILLED: &str = "█";

/// Glyph for an empty cell.
pub const EMPTY: &str = "░";

/// Round half up, the way the panel has always rounded (`-2.5` becomes `-2`).
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Build a bar of exactly `width` cells for `current / total`.
///
/// The filled count is `round(current / total * width)`, clamped into
/// `0..=width`; a ratio that is not a number (`0 / 0`) fills nothing.
pub fn progress_bar(current: i64, total: i64, width: usize) -> String {
    let ratio = current as f64 / total as f64;
    let filled = round_half_up(ratio * width as f64);
    let filled = if filled.is_nan() {
        0
    } else {
        filled.clamp(0.0, width as f64) as usize
    };
    format!("{}{}", FILLED.repeat(filled), EMPTY.repeat(width - filled))
}

/// Integer percentage of `current / total`, without the `%` sign.
///
/// A zero total is not guarded: it prints `Infinity`, `-Infinity` or `NaN`.
pub fn percent(current: i64, total: i64) -> String {
    let value = round_half_up(current as f64 / total as f64 * 100.0);
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        format!("{}", value as i64)
    }
}
