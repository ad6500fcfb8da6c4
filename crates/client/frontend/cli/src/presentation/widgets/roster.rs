//! Hero pool table shown during party selection.

use game_core::{GameConfig, SessionSnapshot};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::Modifier,
    widgets::{Block, Borders, Row, Table},
};

use crate::presentation::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, snapshot: &SessionSnapshot, theme: &Theme) {
    let picked = snapshot.pool.iter().filter(|entry| entry.selected).count();

    let header = Row::new(["Hero", "HP", "ATK", "DEF", "MP", "Skills"]).style(theme.title());
    let rows = snapshot.pool.iter().map(|entry| {
        let template = entry.archetype.template();
        let skills = template
            .skills
            .iter()
            .map(|skill| format!("{} ({})", skill.name, skill.mana_cost))
            .collect::<Vec<_>>()
            .join(", ");
        let row = Row::new([
            entry.archetype.to_string(),
            template.health.to_string(),
            template.attack.to_string(),
            template.defense.to_string(),
            template.mana.to_string(),
            skills,
        ]);
        if entry.selected {
            row.style(theme.key().add_modifier(Modifier::BOLD))
        } else {
            row
        }
    });

    let widths = [
        Constraint::Length(9),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Min(10),
    ];
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Heroes ({picked}/{})", GameConfig::PARTY_SIZE)),
    );

    frame.render_widget(table, area);
}
