/// Tunables for the simulation and the terminal session.

use std::time::Duration;

// ── Sprite dimensions (pixels) ────────────────────────────────────────────────

pub const DEFAULT_BLOCK_WIDTH: f32 = 50.0;
pub const DEFAULT_BLOCK_HEIGHT: f32 = 50.0;
pub const PLAYER_SPRITE_WIDTH: f32 = 30.0;
pub const PLAYER_SPRITE_HEIGHT: f32 = 30.0;
pub const BULLET_SPRITE_WIDTH: f32 = 5.0;
pub const BULLET_SPRITE_HEIGHT: f32 = 5.0;

/// Where the player appears at the start of a session.
pub const PLAYER_SPAWN: (f32, f32) = (10.0, 270.0);

// ── Loop timing ───────────────────────────────────────────────────────────────

/// Roughly 60 ticks per second.
pub const DEFAULT_TICK: Duration = Duration::from_millis(16);

/// A key is considered held while its last press/repeat is this recent.
/// Covers terminals that never report key releases; OS key repeat runs
/// at ≥ 15 Hz so the window is refreshed before it lapses.
pub const HOLD_WINDOW: Duration = Duration::from_millis(133);

// ── Physics ───────────────────────────────────────────────────────────────────

/// Per-tick velocity limits and gravity, all in pixels/tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Physics {
    pub max_x_velocity: f32,
    pub max_y_velocity: f32,
    pub gravity_acceleration: f32,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            max_x_velocity: 5.0,
            max_y_velocity: 10.0,
            gravity_acceleration: 1.0,
        }
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub tick: Duration,
    pub physics: Physics,
    /// Pixels covered by one terminal column.
    pub cell_width: f32,
    /// Pixels covered by one terminal row.
    pub cell_height: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick: DEFAULT_TICK,
            physics: Physics::default(),
            cell_width: 10.0,
            cell_height: 25.0,
        }
    }
}

/// Parse a terminal cell size in pixels; must be finite and positive.
pub fn parse_cell_size(s: &str) -> Result<f32, String> {
    let value: f32 = s
        .trim()
        .parse()
        .map_err(|e| format!("`{s}` is not a number: {e}"))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("cell size must be a positive number of pixels, got {value}"));
    }
    Ok(value)
}

impl GameConfig {
    /// `HOLD_WINDOW` expressed in ticks, never less than one.
    pub fn hold_window_frames(&self) -> u64 {
        let tick_ms = self.tick.as_millis().max(1);
        let frames = HOLD_WINDOW.as_millis().div_ceil(tick_ms);
        frames.max(1) as u64
    }

    /// Viewport size in pixels for a terminal of `cols` × `rows` cells.
    pub fn viewport_for(&self, cols: u16, rows: u16) -> (f32, f32) {
        (
            cols as f32 * self.cell_width,
            rows as f32 * self.cell_height,
        )
    }
}
