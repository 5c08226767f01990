//! Login screen with the biometric trigger

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, app: &App) {
    let theme = Theme::dark();
    let area = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        format!("🏦 {}", app.bank_name),
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, rows[1]);

    let subtitle = Paragraph::new(Span::styled(
        "Secure banking, in your terminal",
        Style::default().fg(theme.text_muted),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(subtitle, rows[2]);

    // the biometric trigger; dimmed while a scan runs
    let scanning = app.auth.is_scanning();
    let button_style = if scanning {
        Style::default()
            .fg(theme.text_muted)
            .add_modifier(Modifier::DIM | Modifier::ITALIC)
    } else {
        Style::default()
            .fg(theme.text)
            .add_modifier(Modifier::BOLD)
    };
    let button = Paragraph::new(Span::styled(app.auth.button_label(), button_style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(if scanning {
                    theme.border
                } else {
                    theme.accent
                })),
        );
    frame.render_widget(button, centered(rows[3], 36));

    let hint = Paragraph::new(Span::styled(
        "enter: scan  ·  q: quit",
        Style::default().fg(theme.text_muted),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(hint, rows[4]);
}

fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
