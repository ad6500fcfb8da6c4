//! Battle log panel, newest line at the bottom.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List, ListItem},
};

use crate::presentation::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, log: &[String], theme: &Theme) {
    // Inner height after the two border rows.
    let visible = usize::from(area.height.saturating_sub(2));
    let skip = log.len().saturating_sub(visible);

    let items: Vec<ListItem> = log
        .iter()
        .skip(skip)
        .map(|line| ListItem::new(line.as_str()).style(theme.log_line(line)))
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Battle Log"));
    frame.render_widget(list, area);
}
