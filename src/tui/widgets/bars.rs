//! Horizontal score bars for the 0-5 scale.

use ratatui::{prelude::*, widgets::Widget};

use crate::scoring::MAX_SCORE;
use crate::tui::theme::colors;

/// A single horizontal bar for one sub-score.
pub struct ScoreBar {
    label: String,
    score: f64,
    color: Color,
}

impl ScoreBar {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score: score.clamp(0.0, MAX_SCORE),
            color: colors().primary,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Widget for ScoreBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 24 || area.height < 1 {
            return;
        }

        let scheme = colors();
        let label_width = 16usize;
        let value_width = 6usize;
        let bar_width = area.width as usize - label_width - value_width - 2;

        let y = area.y;
        let mut x = area.x;

        // Label, truncated or padded to a fixed column
        let label = if self.label.len() > label_width {
            format!("{}...", &self.label[..label_width.saturating_sub(3)])
        } else {
            format!("{:<width$}", self.label, width = label_width)
        };
        for ch in label.chars() {
            if x < area.x + area.width {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(ch).set_style(Style::default().fg(scheme.text));
                }
                x += 1;
            }
        }

        if x < area.x + area.width {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(' ');
            }
            x += 1;
        }

        // Bar
        let filled = ((self.score / MAX_SCORE) * bar_width as f64).round() as usize;
        for i in 0..bar_width {
            if x < area.x + area.width {
                let ch = if i < filled { '█' } else { '░' };
                let style = if i < filled {
                    Style::default().fg(self.color)
                } else {
                    Style::default().fg(scheme.muted)
                };
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(ch).set_style(style);
                }
                x += 1;
            }
        }

        if x < area.x + area.width {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(' ');
            }
            x += 1;
        }

        // Value
        let value = format!("{:>5.2}", self.score);
        for ch in value.chars() {
            if x < area.x + area.width {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(ch)
                        .set_style(Style::default().fg(self.color).bold());
                }
                x += 1;
            }
        }
    }
}
