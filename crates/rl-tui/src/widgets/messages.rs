//! Message log widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Widget};

/// Widget for rendering the recent message log, oldest first.
pub struct MessagesWidget<'a> {
    messages: &'a [String],
}

impl<'a> MessagesWidget<'a> {
    pub fn new(messages: &'a [String]) -> Self {
        Self { messages }
    }
}

impl Widget for MessagesWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .messages
            .iter()
            .map(|m| ListItem::new(m.as_str()))
            .collect();
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Messages"));
        Widget::render(list, area, buf);
    }
}
