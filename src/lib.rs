//! A small tile-grid platformer for the terminal.
//!
//! - `entities`: pure data (sprites, player, bullets, blocks, game state)
//! - `compute`: per-tick simulation, physics and collision resolution
//! - `level`: the hardcoded block grid
//! - `geometry`: bounding boxes and velocity integration
//! - `config`: physics constants and session tunables
//! - `input`: logical keys and the keys-pressed map
//! - `display`: the drawing surface seam and its terminal implementation

pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod geometry;
pub mod input;
pub mod level;
