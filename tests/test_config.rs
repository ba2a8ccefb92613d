use std::time::Duration;

use cubes::config::*;

#[test]
fn physics_defaults() {
    let p = Physics::default();
    assert_eq!(p.max_x_velocity, 5.0);
    assert_eq!(p.max_y_velocity, 10.0);
    assert_eq!(p.gravity_acceleration, 1.0);
}

#[test]
fn default_tick_is_about_sixty_hz() {
    assert_eq!(GameConfig::default().tick, Duration::from_millis(16));
}

#[test]
fn hold_window_scales_with_tick() {
    let mut config = GameConfig::default();
    assert_eq!(config.hold_window_frames(), 9);
    config.tick = Duration::from_millis(33);
    assert_eq!(config.hold_window_frames(), 5);
    config.tick = Duration::from_millis(500);
    assert_eq!(config.hold_window_frames(), 1);
}

#[test]
fn viewport_is_cells_times_cell_size() {
    let config = GameConfig::default();
    assert_eq!(config.viewport_for(80, 24), (800.0, 600.0));
}

#[test]
fn cell_size_accepts_positive_numbers() {
    assert_eq!(parse_cell_size("10"), Ok(10.0));
    assert_eq!(parse_cell_size(" 2.5 "), Ok(2.5));
}

#[test]
fn cell_size_rejects_zero_negative_and_garbage() {
    assert!(parse_cell_size("0").is_err());
    assert!(parse_cell_size("-3").is_err());
    assert!(parse_cell_size("inf").is_err());
    assert!(parse_cell_size("NaN").is_err());
    assert!(parse_cell_size("wide").is_err());
}
