//! Map display widget

use ratatui::layout::Position;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};

use rl_core::{S_FLOOR, S_PLAYER, S_WALL, Snapshot};

/// Widget for rendering the dungeon map
pub struct MapWidget<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> MapWidget<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot }
    }

    fn cell_display(&self, x: i32, y: i32) -> (char, Style) {
        let ch = self.snapshot.symbol_at(x, y);
        let style = match ch {
            S_PLAYER => Style::default().fg(Color::White).bold(),
            S_WALL => Style::default().fg(Color::Gray),
            S_FLOOR => Style::default().fg(Color::DarkGray),
            // anything else on the overlay is an enemy
            _ => Style::default().fg(Color::Red),
        };
        (ch, style)
    }
}

impl Widget for MapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title("Dungeon");

        let inner = block.inner(area);
        block.render(area, buf);

        let rows = self.snapshot.height.min(inner.height as i32);
        let cols = self.snapshot.width.min(inner.width as i32);
        for y in 0..rows {
            for x in 0..cols {
                let (ch, style) = self.cell_display(x, y);
                if let Some(cell) =
                    buf.cell_mut(Position::new(inner.x + x as u16, inner.y + y as u16))
                {
                    cell.set_char(ch);
                    cell.set_style(style);
                }
            }
        }
    }
}
