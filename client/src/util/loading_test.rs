use super::*;

#[test]
fn progress_starts_empty() {
    let p = LoadingProgress::default();
    assert_eq!(p.percent(), 0);
    assert!(!p.is_complete());
    assert_eq!(p.width(), "0%");
}

#[test]
fn hundred_ticks_fill_the_bar() {
    let mut p = LoadingProgress::default();
    for _ in 0..99 {
        assert!(!p.tick());
    }
    assert!(p.tick());
    assert_eq!(p.percent(), 100);
    assert_eq!(p.width(), "100%");
}

#[test]
fn ticking_past_full_stays_at_hundred() {
    let mut p = LoadingProgress::default();
    for _ in 0..150 {
        p.tick();
    }
    assert_eq!(p.percent(), 100);
}

#[test]
fn full_run_takes_two_seconds() {
    assert_eq!(TICK_MS * 100, 2000);
}

#[test]
fn hero_children_are_staggered() {
    assert_eq!(hero_delay_ms(0), 300);
    assert_eq!(hero_delay_ms(1), 500);
    assert_eq!(hero_delay_ms(4), 1100);
}
