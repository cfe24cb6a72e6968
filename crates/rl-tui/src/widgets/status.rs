//! Status line widget

use ratatui::prelude::*;
use ratatui::widgets::Widget;

use rl_core::Snapshot;

/// Widget for rendering the status line
pub struct StatusWidget<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> StatusWidget<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot }
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let s = self.snapshot;
        let line1 = format!(
            "HP: {}/{} | Score: {} | Enemies: {} | Turn: {}",
            s.hp, s.hp_max, s.score, s.enemies_remaining, s.turns,
        );
        let line2 = "Controls: WASD/arrows to move, Q to quit | Goal: defeat all enemies!";

        let style = Style::default().fg(Color::White);
        buf.set_string(area.x, area.y, &line1, style);
        if area.height > 1 {
            buf.set_string(area.x, area.y + 1, line2, Style::default().fg(Color::DarkGray));
        }
    }
}
