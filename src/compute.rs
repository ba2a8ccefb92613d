/// Game-logic functions.
///
/// Every public function takes an immutable view of its input and returns a
/// brand-new value; the only side effect is logging.

use crate::config::Physics;
use crate::entities::{Block, Bullet, Direction, Entity, GameState, Player};
use crate::geometry::touching;
use crate::input::{Key, KeysPressed};
use crate::level;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Session with the default level for a viewport of `width` × `height` pixels.
pub fn init_state(width: f32, height: f32) -> GameState {
    init_state_with_blocks(Player::spawn(), level::default_blocks(), width, height)
}

/// Session with an explicit player and block set. The player goes first in
/// the live list, followed by the blocks in the order given.
pub fn init_state_with_blocks(
    player: Player,
    blocks: Vec<Block>,
    width: f32,
    height: f32,
) -> GameState {
    let mut entities = Vec::with_capacity(blocks.len() + 1);
    entities.push(Entity::Player(player));
    entities.extend(blocks.into_iter().map(Entity::Block));
    GameState {
        entities,
        frame: 0,
        width,
        height,
    }
}

// ── Player physics ───────────────────────────────────────────────────────────

/// Horizontal velocity from the arrow keys, and the heading it implies.
/// Holding both directions cancels out and keeps the previous heading.
pub fn next_velocity_x(player: &Player, keys: &KeysPressed, physics: &Physics) -> (f32, Direction) {
    let mut velocity_x: f32 = 0.0;
    if keys.is_pressed(Key::Left) {
        velocity_x -= physics.max_x_velocity;
    }
    if keys.is_pressed(Key::Right) {
        velocity_x += physics.max_x_velocity;
    }

    let direction = if velocity_x > 0.0 {
        Direction::Right
    } else if velocity_x < 0.0 {
        Direction::Left
    } else {
        player.direction
    };
    (velocity_x, direction)
}

/// Vertical velocity for the coming tick. Updates the `jumped` latch and,
/// on a jump, puts the player in the air.
fn next_velocity_y(player: &mut Player, keys: &KeysPressed, physics: &Physics) -> f32 {
    let mut velocity_y: f32 = 0.0;
    if player.falling {
        velocity_y = player.sprite.velocity_y + physics.gravity_acceleration;
    } else if keys.is_pressed(Key::Space) {
        // One jump per press; a held key does not relaunch.
        if !player.jumped {
            player.jumped = true;
            player.falling = true;
            velocity_y = -physics.max_y_velocity;
        }
    } else {
        player.jumped = false;
    }
    velocity_y.min(physics.max_y_velocity)
}

/// Advance the player one tick: input → velocity → position → death check.
///
/// `falling` is always left `true`; the collision pass re-grounds the
/// player if a block is underneath.
pub fn update_player(
    player: &Player,
    keys: &KeysPressed,
    physics: &Physics,
    viewport_height: f32,
) -> Player {
    let mut next = player.clone();

    let (velocity_x, direction) = next_velocity_x(player, keys, physics);
    next.direction = direction;
    let velocity_y = next_velocity_y(&mut next, keys, physics);
    next.sprite.velocity_x = velocity_x;
    next.sprite.velocity_y = velocity_y;
    next.sprite.integrate();

    next.shooting = keys.is_pressed(Key::Shoot);

    if !next.dead && next.sprite.bounds().bottom > viewport_height {
        log::info!("Player fell out of the viewport at y={}", next.sprite.y);
        next.dead = true;
    }

    next.falling = true;
    next
}

// ── Collision resolution ─────────────────────────────────────────────────────

/// Snap the player against one block.
///
/// Four independent checks, applied in order, each overwriting what the
/// previous one wrote: landing, head bump, block to the right, block to the
/// left. Alignment allows a full player dimension of slack.
pub fn resolve_collision(player: &Player, block: &Block, physics: &Physics) -> Player {
    let mut next = player.clone();
    // Both boxes are taken before any snapping.
    let p = player.sprite.bounds();
    let b = block.sprite.bounds();
    let (width, height) = (p.width(), p.height());

    // Landing on top of the block.
    if next.sprite.velocity_y >= 0.0
        && touching(p.bottom, b.top, physics.max_y_velocity)
        && p.aligned_horizontally(&b, width)
    {
        next.falling = false;
        next.sprite.y = b.top - height;
    }

    // Head against the underside.
    if next.sprite.velocity_y < 0.0
        && touching(p.top, b.bottom, physics.max_y_velocity)
        && p.aligned_horizontally(&b, width)
    {
        next.sprite.velocity_y = 0.0;
        next.sprite.y = b.bottom;
    }

    // Walking into the block's left face.
    if next.sprite.velocity_x > 0.0
        && touching(p.right, b.left, physics.max_x_velocity)
        && p.aligned_vertically(&b, height)
    {
        next.sprite.x = b.left - width;
    }

    // Walking into the block's right face.
    if next.sprite.velocity_x < 0.0
        && touching(p.left, b.right, physics.max_x_velocity)
        && p.aligned_vertically(&b, height)
    {
        next.sprite.x = b.right;
    }

    next
}

/// Run the player against every block in order.
pub fn resolve_collisions<'a>(
    player: &Player,
    blocks: impl IntoIterator<Item = &'a Block>,
    physics: &Physics,
) -> Player {
    blocks
        .into_iter()
        .fold(player.clone(), |p, block| resolve_collision(&p, block, physics))
}

// ── Bullets ──────────────────────────────────────────────────────────────────

/// A bullet leaving the player's leading edge, a third of the way down,
/// at twice the player's top running speed.
pub fn shoot_bullet(player: &Player, physics: &Physics) -> Bullet {
    let s = &player.sprite;
    let x = match player.direction {
        Direction::Left => s.x,
        Direction::Right => s.x + s.width(),
    };
    let y = s.y + s.height() / 3.0;
    Bullet::new(x, y, player.direction, physics.max_x_velocity * 2.0)
}

/// Append one bullet fired by the player to the live list.
pub fn player_shoot(state: &GameState, physics: &Physics) -> GameState {
    let Some(player) = state.player() else {
        return state.clone();
    };
    let bullet = shoot_bullet(player, physics);
    log::debug!("Bullet spawned at ({}, {})", bullet.sprite.x, bullet.sprite.y);
    let mut entities = state.entities.clone();
    entities.push(Entity::Bullet(bullet));
    GameState {
        entities,
        ..state.clone()
    }
}

/// Move a bullet and mark it dead once its x leaves `[0, viewport_width]`.
pub fn update_bullet(bullet: &Bullet, viewport_width: f32) -> Bullet {
    let mut next = bullet.clone();
    next.sprite.integrate();
    if next.sprite.x < 0.0 || next.sprite.x > viewport_width {
        next.dead = true;
    }
    next
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame:
///
/// 1. update the player from the held keys
/// 2. resolve the player against every block, in list order
/// 3. update bullets, then spawn one if SHOOT was newly pressed
/// 4. drop dead bullets by rebuilding the live list
pub fn tick(state: &GameState, keys: &KeysPressed, physics: &Physics) -> GameState {
    let frame = state.frame + 1;
    let Some(current) = state.player() else {
        return GameState {
            frame,
            ..state.clone()
        };
    };

    let player = update_player(current, keys, physics, state.height);
    let player = resolve_collisions(&player, state.blocks(), physics);
    let fire = player.shooting && !current.shooting;

    let entities: Vec<Entity> = state
        .entities
        .iter()
        .map(|entity| match entity {
            Entity::Player(_) => Entity::Player(player.clone()),
            Entity::Bullet(b) => Entity::Bullet(update_bullet(b, state.width)),
            Entity::Block(b) => Entity::Block(b.clone()),
        })
        .collect();

    let mut next = GameState {
        entities,
        frame,
        ..state.clone()
    };
    if fire {
        next = player_shoot(&next, physics);
    }

    let before = next.entities.len();
    next.entities.retain(|e| !e.should_despawn());
    let removed = before - next.entities.len();
    if removed > 0 {
        log::debug!("Despawned {removed} bullet(s) on frame {frame}");
    }
    next
}
