/// All game entity types — pure data, no simulation logic.

use crate::config::{
    BULLET_SPRITE_HEIGHT, BULLET_SPRITE_WIDTH, PLAYER_SPAWN, PLAYER_SPRITE_HEIGHT,
    PLAYER_SPRITE_WIDTH,
};
use crate::geometry::{self, Aabb};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Blue,
    Green,
}

pub const PLAYER_COLOR: Color = Color::Blue;
pub const BULLET_COLOR: Color = Color::Green;
pub const BLOCK_COLOR: Color = Color::Green;

// ── Shared sprite state ───────────────────────────────────────────────────────

/// Position, size, velocity and color common to every entity.
///
/// Size is fixed at construction, so it is only reachable through getters.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub x: f32,
    pub y: f32,
    width: f32,
    height: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub color: Color,
}

impl Sprite {
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: Color) -> Self {
        assert!(
            width >= 0.0 && height >= 0.0,
            "sprite size must be non-negative, got {width}x{height}"
        );
        Self {
            x,
            y,
            width,
            height,
            velocity_x: 0.0,
            velocity_y: 0.0,
            color,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }

    /// Apply the current velocity to the position.
    pub fn integrate(&mut self) {
        let (x, y) = geometry::integrate(self.x, self.y, self.velocity_x, self.velocity_y);
        self.x = x;
        self.y = y;
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub sprite: Sprite,
    /// True unless a block caught the player during the last collision pass.
    pub falling: bool,
    /// Last horizontal heading; sticky while standing still.
    pub direction: Direction,
    /// Latched by a jump until SPACE is released.
    pub jumped: bool,
    /// Latched by a shot until SHOOT is released.
    pub shooting: bool,
    /// Set once the player drops below the viewport.
    pub dead: bool,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            sprite: Sprite::new(x, y, PLAYER_SPRITE_WIDTH, PLAYER_SPRITE_HEIGHT, PLAYER_COLOR),
            falling: true,
            direction: Direction::Right,
            jumped: false,
            shooting: false,
            dead: false,
        }
    }

    pub fn spawn() -> Self {
        Self::new(PLAYER_SPAWN.0, PLAYER_SPAWN.1)
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub sprite: Sprite,
    pub dead: bool,
}

impl Bullet {
    /// A bullet travelling at `speed` pixels/tick toward `direction`.
    pub fn new(x: f32, y: f32, direction: Direction, speed: f32) -> Self {
        let mut sprite = Sprite::new(x, y, BULLET_SPRITE_WIDTH, BULLET_SPRITE_HEIGHT, BULLET_COLOR);
        sprite.velocity_x = match direction {
            Direction::Left => -speed,
            Direction::Right => speed,
        };
        Self { sprite, dead: false }
    }
}

// ── Platforms ─────────────────────────────────────────────────────────────────

/// One static platform cell. Never moves.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub sprite: Sprite,
}

impl Block {
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: Color) -> Self {
        Self {
            sprite: Sprite::new(x, y, width, height, color),
        }
    }
}

// ── Closed set of live entities ───────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum Entity {
    Player(Player),
    Bullet(Bullet),
    Block(Block),
}

impl Entity {
    pub fn sprite(&self) -> &Sprite {
        match self {
            Entity::Player(p) => &p.sprite,
            Entity::Bullet(b) => &b.sprite,
            Entity::Block(b) => &b.sprite,
        }
    }

    /// Whether the cleanup step drops this entity. Only bullets despawn;
    /// a dead player stays in the live list.
    pub fn should_despawn(&self) -> bool {
        matches!(self, Entity::Bullet(b) if b.dead)
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The whole session. Cloneable so the update functions can return a new
/// copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    /// Live entities in draw order: the player, the blocks, then bullets.
    pub entities: Vec<Entity>,
    pub frame: u64,
    /// Viewport width in pixels.
    pub width: f32,
    /// Viewport height in pixels.
    pub height: f32,
}

impl GameState {
    pub fn player(&self) -> Option<&Player> {
        self.entities.iter().find_map(|e| match e {
            Entity::Player(p) => Some(p),
            _ => None,
        })
    }

    pub fn player_mut(&mut self) -> Option<&mut Player> {
        self.entities.iter_mut().find_map(|e| match e {
            Entity::Player(p) => Some(p),
            _ => None,
        })
    }

    /// Blocks in list order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.entities.iter().filter_map(|e| match e {
            Entity::Block(b) => Some(b),
            _ => None,
        })
    }

    pub fn bullets(&self) -> impl Iterator<Item = &Bullet> {
        self.entities.iter().filter_map(|e| match e {
            Entity::Bullet(b) => Some(b),
            _ => None,
        })
    }
}
