use super::*;

#[test]
fn format_seconds_whole_values() {
    assert_eq!(format_seconds(0), "0s");
    assert_eq!(format_seconds(1000), "1s");
    assert_eq!(format_seconds(3000), "3s");
}

#[test]
fn format_seconds_trims_trailing_zeros() {
    assert_eq!(format_seconds(100), "0.1s");
    assert_eq!(format_seconds(300), "0.3s");
    assert_eq!(format_seconds(1250), "1.25s");
    assert_eq!(format_seconds(5), "0.005s");
}

#[test]
fn stagger_ms_steps_from_base() {
    assert_eq!(stagger_ms(300, 200, 0), 300);
    assert_eq!(stagger_ms(300, 200, 3), 900);
    assert_eq!(stagger_ms(0, 100, 2), 200);
}

#[test]
fn stagger_ms_saturates() {
    assert_eq!(stagger_ms(1, 100, usize::MAX), u32::MAX);
}
