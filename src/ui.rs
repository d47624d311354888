use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::game::Dice;

/// Paints the current frame over the whole terminal.
pub fn render<D: Dice>(frame: &mut Frame, app: &App<D>) {
    let text = app.frame();
    frame.render_widget(Paragraph::new(text), frame.area());
}
