//! Dashboard screen: balance and score cards, the transaction chart,
//! insights, and the recent activity table

use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Cell, Chart, Dataset, GraphType, List, ListItem,
    Paragraph, Row, Table};
use ratatui::Frame;

use crate::app::App;
use crate::ui::theme::Theme;
use crate::utils::format;
use crate::views;

pub fn render(frame: &mut Frame, app: &App) {
    let theme = Theme::dark();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Min(8),
            Constraint::Percentage(35),
        ])
        .split(frame.area());

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("🏦 {}  ", app.bank_name),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "a: quick actions  ·  e: export chart  ·  q: quit",
            Style::default().fg(theme.text_muted),
        ),
    ]));
    frame.render_widget(header, rows[0]);

    render_cards(frame, app, &theme, rows[1]);
    render_chart(frame, app, &theme, rows[2]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[3]);
    render_insights(frame, app, &theme, bottom[0]);
    render_transactions(frame, app, &theme, bottom[1]);
}

fn render_cards(frame: &mut Frame, app: &App, theme: &Theme, area: ratatui::layout::Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let balance = app
        .registry
        .get(views::LIVE_BALANCE)
        .map(|slot| slot.read())
        .unwrap_or_default();
    let balance_card = Paragraph::new(Line::from(Span::styled(
        balance,
        Style::default()
            .fg(theme.text)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(card_block("Balance", theme));
    frame.render_widget(balance_card, cards[0]);

    let score_value = app
        .registry
        .get(views::SCORE_VALUE)
        .map(|slot| slot.read())
        .unwrap_or_default();
    let band = app.score.band;
    let score_card = Paragraph::new(Line::from(vec![
        Span::styled(
            score_value,
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(band.label(), theme.band_style(band)),
    ]))
    .alignment(Alignment::Center)
    .block(card_block("Credit Score", theme));
    frame.render_widget(score_card, cards[1]);
}

fn render_chart(frame: &mut Frame, app: &App, theme: &Theme, area: ratatui::layout::Rect) {
    let block = card_block("Recent Transactions", theme);
    if app.chart.points.len() < 2 {
        let placeholder = Paragraph::new(Span::styled(
            "Not enough transactions to chart",
            Style::default().fg(theme.text_muted),
        ))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let datasets = vec![Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(theme.accent))
        .data(&app.chart.points)];

    let (y_min, y_max) = app.chart.value_bounds();
    let x_labels: Vec<Span> = app
        .chart
        .labels
        .iter()
        .map(|l| Span::styled(l.clone(), Style::default().fg(theme.text_muted)))
        .collect();
    let y_labels = vec![
        Span::styled(format::money_exact(y_min), Style::default().fg(theme.text_muted)),
        Span::styled(
            format::money_exact((y_min + y_max) / 2.0),
            Style::default().fg(theme.text_muted),
        ),
        Span::styled(format::money_exact(y_max), Style::default().fg(theme.text_muted)),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(theme.border))
                .bounds([1.0, app.chart.labels.len() as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(theme.border))
                .bounds([y_min, y_max])
                .labels(y_labels),
        );
    frame.render_widget(chart, area);
}

fn render_insights(frame: &mut Frame, app: &App, theme: &Theme, area: ratatui::layout::Rect) {
    let items: Vec<ListItem> = app
        .insights
        .iter()
        .map(|line| {
            let style = if line.starts_with('⚠') {
                Style::default().fg(theme.warning)
            } else if line.starts_with('✅') {
                Style::default().fg(theme.positive)
            } else {
                Style::default().fg(theme.text)
            };
            ListItem::new(Span::styled(line.clone(), style))
        })
        .collect();
    let list = List::new(items).block(card_block("AI Insights", theme));
    frame.render_widget(list, area);
}

fn render_transactions(frame: &mut Frame, app: &App, theme: &Theme, area: ratatui::layout::Rect) {
    // newest first, as much as fits
    let rows: Vec<Row> = app
        .transactions
        .iter()
        .rev()
        .take(area.height.saturating_sub(3) as usize)
        .map(|tx| {
            Row::new(vec![
                Cell::from(Span::styled(
                    tx.created_at.format("%b %d").to_string(),
                    Style::default().fg(theme.text_muted),
                )),
                Cell::from(Span::styled(
                    tx.description.clone(),
                    Style::default().fg(theme.text),
                )),
                Cell::from(Span::styled(
                    tx.transaction_type.clone(),
                    Style::default().fg(theme.text_muted),
                )),
                Cell::from(Span::styled(
                    format::money_exact(tx.amount),
                    theme.amount_style(tx.amount),
                )),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Min(18),
            Constraint::Length(12),
            Constraint::Length(12),
        ],
    )
    .header(
        Row::new(vec!["Date", "Description", "Type", "Amount"]).style(
            Style::default()
                .fg(theme.text_muted)
                .add_modifier(Modifier::BOLD),
        ),
    )
    .block(card_block("Activity", theme));
    frame.render_widget(table, area);
}

fn card_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
}
