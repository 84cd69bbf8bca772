//! Count-up animation for the experience figures.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// Length of the count-up.
pub const DURATION_MS: f64 = 2000.0;

/// Fraction of the experience block that must be visible to start counting.
pub const TRIGGER_THRESHOLD: f64 = 0.5;

/// One animation frame's output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: i64,
    pub finished: bool,
}

/// Value shown `elapsed_ms` into a count from `start` to `end`.
#[must_use]
pub fn counter_frame(start: i64, end: i64, elapsed_ms: f64, duration_ms: f64) -> CounterFrame {
    let progress = if duration_ms <= 0.0 {
        1.0
    } else {
        (elapsed_ms / duration_ms).clamp(0.0, 1.0)
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    let value = (progress * (end - start) as f64 + start as f64).floor() as i64;
    CounterFrame { value, finished: progress >= 1.0 }
}

/// Text shown for a counter value.
#[must_use]
pub fn format_counter(value: i64) -> String {
    format!("{value}+")
}

/// Parse the leading integer of `text` the way the page markup is authored
/// (`"5"`, `" 12+ "`, `"-3"`). Returns `None` when there are no leading digits.
#[must_use]
pub fn parse_counter_target(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    rest[..digits].parse::<i64>().ok().map(|v| v * sign)
}
