//! Color theme for the terminal dashboard
//!
//! One dark palette with semantic colors for financial data. The accent
//! carries the chrome and the chart line; positive and negative color
//! the signed amounts.

use ratatui::style::{Color, Modifier, Style};

use crate::models::{ScoreBand, ToastKind, ToastPhase};

pub struct Theme {
    pub accent: Color,
    pub text: Color,
    pub text_muted: Color,
    pub border: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
}

impl Theme {
    /// Dark theme tuned for financial data display
    pub fn dark() -> Self {
        Theme {
            accent: Color::Rgb(59, 130, 246),
            text: Color::Rgb(245, 246, 250),
            text_muted: Color::Rgb(130, 140, 160),
            border: Color::Rgb(55, 63, 81),
            positive: Color::Rgb(52, 199, 123),
            negative: Color::Rgb(229, 77, 66),
            warning: Color::Rgb(240, 177, 50),
        }
    }

    /// Style for a transaction amount by its sign
    pub fn amount_style(&self, amount: f64) -> Style {
        if amount < 0.0 {
            Style::default().fg(self.negative)
        } else {
            Style::default().fg(self.positive)
        }
    }

    /// Style for the score band label
    pub fn band_style(&self, band: ScoreBand) -> Style {
        let color = match band {
            ScoreBand::Poor => self.negative,
            ScoreBand::Fair => self.warning,
            ScoreBand::Excellent => self.positive,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Border color of a toast by severity
    pub fn toast_color(&self, kind: ToastKind) -> Color {
        match kind {
            ToastKind::Success => self.positive,
            ToastKind::Error => self.negative,
            ToastKind::Info => self.accent,
        }
    }

    /// Text style of a toast in its current phase; the dim edges stand
    /// in for the enter and exit transitions
    pub fn toast_text_style(&self, phase: ToastPhase) -> Style {
        match phase {
            ToastPhase::Created => Style::default().fg(self.text_muted).add_modifier(Modifier::DIM),
            ToastPhase::Shown => Style::default().fg(self.text),
            ToastPhase::Hiding => Style::default()
                .fg(self.text_muted)
                .add_modifier(Modifier::DIM | Modifier::ITALIC),
        }
    }
}
