pub mod dice;
pub mod render;
pub mod update;

use std::time::Duration;

use crossterm::event::KeyEvent;

pub use dice::{Dice, RandomDice, ScriptedDice};
pub use render::render;
pub use update::update;

pub const SHIP_WIDTH: i32 = 5;
pub const SHIP_HEIGHT: i32 = 3;

/// `beat` counts 0..=BEAT_WRAP and then starts over at 0.
pub const BEAT_WRAP: u32 = 100;
/// Projectiles climb one row every this many beats.
pub const PROJECTILE_PERIOD: u32 = 5;
/// Enemies may spawn and descend one row every this many beats.
pub const ENEMY_PERIOD: u32 = 50;
pub const SPAWN_ROLL: u32 = 100;
/// A spawn roll must exceed this to bring in a new enemy (roughly 9 in 100).
pub const SPAWN_THRESHOLD: u32 = 90;
pub const TICK_DELAY: Duration = Duration::from_millis(10);

pub const PROJECTILE_GLYPH: char = '*';
pub const ENEMY_GLYPH: char = '▓';

// (column offset from pos, row offset from the ship's top row, glyph)
pub const SHIP_SPRITE: [(i32, i32, char); 8] = [
    (2, 0, '_'),
    (1, 1, '/'),
    (3, 1, '\\'),
    (0, 2, '/'),
    (1, 2, '_'),
    (2, 2, '_'),
    (3, 2, '_'),
    (4, 2, '\\'),
];

/// A grid cell, origin top-left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub column: i32,
    pub row: i32,
}

impl Position {
    pub fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Whether a projectile at `self` hits an enemy at `enemy`. A projectile
    /// that just climbed past the enemy (one row above it) still counts.
    pub fn strikes(&self, enemy: &Position) -> bool {
        self.column == enemy.column && (self.row == enemy.row || self.row == enemy.row - 1)
    }
}

/// The whole game state. Starts zero-sized until the first resize arrives.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct World {
    /// Column of the ship's left edge.
    pub pos: i32,
    pub columns: i32,
    pub rows: i32,
    pub points: u32,
    pub projectiles: Vec<Position>,
    pub enemies: Vec<Position>,
    pub beat: u32,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where a freshly fired projectile appears: just above the ship's nose.
    pub fn muzzle(&self) -> Position {
        Position::new(self.pos + 2, self.rows - SHIP_HEIGHT - 1)
    }

    /// Rightmost column the ship's left edge may occupy.
    pub fn max_pos(&self) -> i32 {
        self.columns - SHIP_WIDTH
    }
}

/// Everything the update engine reacts to, one at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Msg {
    Tick,
    Key(KeyEvent),
    PointerMove { column: u16 },
    PointerClick,
    Resize { columns: u16, rows: u16 },
}

/// What the harness has to do after an update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    None,
    ScheduleTick(Duration),
    Quit,
}
