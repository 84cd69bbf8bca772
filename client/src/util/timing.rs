//! Duration formatting and stagger delays shared by the page animations.

#[cfg(test)]
#[path = "timing_test.rs"]
mod timing_test;

/// Format milliseconds as a CSS seconds value without float noise
/// (`300` → `"0.3s"`, `1000` → `"1s"`, `0` → `"0s"`).
#[must_use]
pub fn format_seconds(ms: u32) -> String {
    let whole = ms / 1000;
    let frac = ms % 1000;
    if frac == 0 {
        return format!("{whole}s");
    }
    let digits = format!("{frac:03}");
    format!("{whole}.{}s", digits.trim_end_matches('0'))
}

/// Stagger delay in milliseconds for the item at `index`.
#[must_use]
pub fn stagger_ms(base_ms: u32, step_ms: u32, index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base_ms.saturating_add(step_ms.saturating_mul(index))
}
