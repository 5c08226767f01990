//! Toast and notification overlays
//!
//! Drawn last so they sit on top of whichever screen is active. Toasts
//! stack down from the top-right corner; plain notifications sit at the
//! bottom-right.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::ui::theme::Theme;

const TOAST_WIDTH: u16 = 40;
const TOAST_HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame, app: &App) {
    let theme = Theme::dark();
    let area = frame.area();

    for (i, toast) in app.toasts.snapshot().iter().enumerate() {
        let slot = top_right(area, TOAST_WIDTH, TOAST_HEIGHT, i as u16);
        if slot.height == 0 {
            break;
        }
        let widget = Paragraph::new(Span::styled(
            toast.text.clone(),
            theme.toast_text_style(toast.phase),
        ))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.toast_color(toast.kind))),
        );
        frame.render_widget(Clear, slot);
        frame.render_widget(widget, slot);
    }

    for (i, notice) in app.notices.snapshot().iter().enumerate() {
        let slot = bottom_right(area, TOAST_WIDTH, TOAST_HEIGHT, i as u16);
        if slot.height == 0 {
            break;
        }
        let widget = Paragraph::new(Span::styled(
            notice.text.clone(),
            Style::default().fg(theme.text),
        ))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );
        frame.render_widget(Clear, slot);
        frame.render_widget(widget, slot);
    }
}

fn top_right(area: Rect, width: u16, height: u16, index: u16) -> Rect {
    let width = width.min(area.width);
    let y = area.y + 1 + index * height;
    if y + height > area.y + area.height {
        return Rect::default();
    }
    Rect {
        x: area.x + area.width - width,
        y,
        width,
        height,
    }
}

fn bottom_right(area: Rect, width: u16, height: u16, index: u16) -> Rect {
    let width = width.min(area.width);
    let offset = (index + 1) * height;
    if offset + 1 > area.height {
        return Rect::default();
    }
    Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - offset - 1,
        width,
        height,
    }
}
