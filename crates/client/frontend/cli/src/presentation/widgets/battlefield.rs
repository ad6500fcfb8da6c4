//! Boss and party panels shown during and after a battle.

use game_core::{BossView, HeroView, MenuState, SessionSnapshot};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::presentation::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, snapshot: &SessionSnapshot, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    if let Some(boss) = &snapshot.boss {
        render_boss(frame, chunks[0], boss, snapshot.state, theme);
    }
    render_party(frame, chunks[1], &snapshot.party, theme);
}

fn render_boss(frame: &mut Frame, area: Rect, boss: &BossView, state: MenuState, theme: &Theme) {
    let title = match state {
        MenuState::Victory => format!("{} - VICTORY", boss.name),
        MenuState::Defeat => format!("{} - DEFEAT", boss.name),
        _ => boss.name.clone(),
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(format!("ATK {}  DEF {}", boss.attack, boss.defense)),
        rows[0],
    );
    frame.render_widget(
        Gauge::default()
            .gauge_style(theme.health(boss.health, boss.max_health))
            .ratio(ratio(boss.health, boss.max_health))
            .label(format!("{}/{}", boss.health, boss.max_health)),
        rows[1],
    );
}

fn render_party(frame: &mut Frame, area: Rect, party: &[HeroView], theme: &Theme) {
    let block = Block::default().borders(Borders::ALL).title("Party");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = party.iter().map(|hero| hero_line(hero, theme)).collect();
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), inner);
}

fn hero_line<'a>(hero: &'a HeroView, theme: &Theme) -> Line<'a> {
    let marker = if hero.is_protagonist { "> " } else { "  " };
    let mut name_style = theme.health(hero.health, hero.max_health);
    if hero.is_protagonist {
        name_style = name_style.add_modifier(Modifier::BOLD);
    }
    if !hero.alive {
        name_style = name_style.add_modifier(Modifier::CROSSED_OUT);
    }

    Line::from(vec![
        Span::styled(marker, theme.key()),
        Span::styled(format!("{:<8}", hero.name), name_style),
        Span::styled(
            format!(" HP {:>3}/{:<3}", hero.health, hero.max_health),
            theme.health(hero.health, hero.max_health),
        ),
        Span::styled(format!(" MP {:>2}/{:<2}", hero.mana, hero.max_mana), theme.mana()),
        Span::styled(
            format!(" ATK {:>2} DEF {:>2}", hero.attack, hero.defense),
            theme.dimmed(),
        ),
    ])
}

fn ratio(current: i32, max: i32) -> f64 {
    if max <= 0 {
        return 0.0;
    }
    (f64::from(current.max(0)) / f64::from(max)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_is_clamped() {
        assert_eq!(ratio(150, 300), 0.5);
        assert_eq!(ratio(-5, 300), 0.0);
        assert_eq!(ratio(10, 0), 0.0);
    }
}
