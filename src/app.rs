use std::mem;

use crate::game::{self, Command, Dice, Msg, World};

/// Owns the latest world and feeds every message through the update engine.
pub struct App<D> {
    pub should_quit: bool,
    pub world: World,
    dice: D,
}

impl<D: Dice> App<D> {
    pub fn new(dice: D) -> Self {
        Self {
            should_quit: false,
            world: World::new(),
            dice,
        }
    }

    /// Applies one message. Once a quit was requested further messages are
    /// ignored.
    pub fn dispatch(&mut self, msg: Msg) -> Command {
        if self.should_quit {
            return Command::None;
        }
        let world = mem::take(&mut self.world);
        let (world, command) = game::update(world, msg, &mut self.dice);
        self.world = world;
        if command == Command::Quit {
            self.should_quit = true;
        }
        command
    }

    /// The current frame as text.
    pub fn frame(&self) -> String {
        game::render(&self.world)
    }
}
