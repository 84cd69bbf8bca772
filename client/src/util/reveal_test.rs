use super::*;

#[test]
fn grid_stagger_starts_immediately() {
    assert_eq!(grid_stagger_delay(0), "0s");
}

#[test]
fn grid_stagger_steps_by_a_tenth() {
    assert_eq!(grid_stagger_delay(1), "0.1s");
    assert_eq!(grid_stagger_delay(3), "0.3s");
    assert_eq!(grid_stagger_delay(10), "1s");
}

#[test]
fn target_selector_joins_all_targets() {
    let selector = target_selector();
    assert!(selector.starts_with(".project-card, .service-card"));
    assert!(selector.ends_with(".contact h2"));
    assert_eq!(selector.matches(", ").count(), REVEAL_TARGETS.len() - 1);
}

#[test]
fn staggered_grids_cover_projects_and_services() {
    let grids: Vec<&str> = STAGGERED_GRIDS.iter().map(|(grid, _)| *grid).collect();
    assert_eq!(grids, vec![".projects-grid", ".services-grid"]);
}
