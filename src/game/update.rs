use std::collections::HashSet;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use super::{
    Command, Dice, Msg, Position, World, BEAT_WRAP, ENEMY_PERIOD, PROJECTILE_PERIOD, SHIP_WIDTH,
    SPAWN_ROLL, SPAWN_THRESHOLD, TICK_DELAY,
};

/// Advances `world` by one message and tells the harness what to do next.
///
/// Ticks always ask for the next tick to be scheduled; `q` and Ctrl+C ask
/// for the program to stop. Every other message only changes the world.
pub fn update<D: Dice + ?Sized>(mut world: World, msg: Msg, dice: &mut D) -> (World, Command) {
    let command = match msg {
        Msg::Tick => {
            on_tick(&mut world, dice);
            Command::ScheduleTick(TICK_DELAY)
        }
        Msg::Key(key) => on_key(&mut world, key),
        Msg::PointerMove { column } => {
            let column = i32::from(column);
            if column > world.pos {
                step_right(&mut world);
            } else if column < world.pos {
                step_left(&mut world);
            }
            Command::None
        }
        Msg::PointerClick => {
            fire(&mut world);
            Command::None
        }
        Msg::Resize { columns, rows } => {
            info!(columns, rows, "viewport resized");
            world.columns = i32::from(columns);
            world.rows = i32::from(rows);
            Command::None
        }
    };
    (world, command)
}

fn on_key(world: &mut World, key: KeyEvent) -> Command {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Command::Quit;
    }
    match key.code {
        KeyCode::Char('q') => return Command::Quit,
        KeyCode::Char(' ') => fire(world),
        KeyCode::Left => step_left(world),
        KeyCode::Right => step_right(world),
        _ => {}
    }
    Command::None
}

fn on_tick<D: Dice + ?Sized>(world: &mut World, dice: &mut D) {
    world.beat += 1;
    if world.beat > BEAT_WRAP {
        world.beat = 0;
    }

    if world.beat % PROJECTILE_PERIOD == 0 {
        advance_projectiles(world);
        resolve_hits(world);
    }

    if world.beat % ENEMY_PERIOD == 0 {
        maybe_spawn_enemy(world, dice);
        advance_enemies(world);
    }
}

// Leaves a one column margin on the left.
fn step_left(world: &mut World) {
    if world.pos > 1 {
        world.pos -= 1;
    }
}

fn step_right(world: &mut World) {
    if world.pos < world.max_pos() {
        world.pos += 1;
    }
}

fn fire(world: &mut World) {
    let shot = world.muzzle();
    world.projectiles.push(shot);
}

fn advance_projectiles(world: &mut World) {
    for shot in &mut world.projectiles {
        shot.row -= 1;
    }
    world.projectiles.retain(|shot| shot.row > 0);

    // Shots sharing a cell collapse into the first one.
    let mut seen = HashSet::with_capacity(world.projectiles.len());
    world.projectiles.retain(|shot| seen.insert(*shot));
}

// Projectiles survive their hits.
fn resolve_hits(world: &mut World) {
    let shots = &world.projectiles;
    let before = world.enemies.len();
    world
        .enemies
        .retain(|enemy| !shots.iter().any(|shot| shot.strikes(enemy)));

    let hits = (before - world.enemies.len()) as u32;
    if hits > 0 {
        world.points += hits;
        debug!(hits, points = world.points, "enemies destroyed");
    }
}

fn maybe_spawn_enemy<D: Dice + ?Sized>(world: &mut World, dice: &mut D) {
    if dice.roll(SPAWN_ROLL) <= SPAWN_THRESHOLD {
        return;
    }
    let sides = u32::try_from(world.columns).unwrap_or(0);
    let column = (dice.roll(sides) as i32)
        .min(world.columns - SHIP_WIDTH)
        .max(SHIP_WIDTH);
    debug!(column, "enemy spawned");
    world.enemies.push(Position::new(column, 0));
}

fn advance_enemies(world: &mut World) {
    for enemy in &mut world.enemies {
        enemy.row += 1;
    }
    let rows = world.rows;
    let before = world.enemies.len();
    world.enemies.retain(|enemy| enemy.row < rows);
    let escaped = before - world.enemies.len();
    if escaped > 0 {
        debug!(escaped, "enemies left the screen");
    }
}
