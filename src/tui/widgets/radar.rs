//! Radial (radar) chart of the four sub-scores.
//!
//! Draws four axes at right angles on a braille canvas, a reference diamond
//! at the maximum score and the score polygon connecting the four values.

use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Points};
use ratatui::{prelude::*, widgets::Widget};

use crate::scoring::MAX_SCORE;
use crate::tui::theme::colors;

/// Axis directions: up, right, down, left. Matches the criterion display
/// order.
const DIRECTIONS: [(f64, f64); 4] = [(0.0, 1.0), (1.0, 0.0), (0.0, -1.0), (-1.0, 0.0)];

/// Approximate canvas units per character cell, used to center labels.
const CHAR_UNITS: f64 = 0.4;

/// Radar chart widget.
pub struct RadarChart {
    values: [f64; 4],
    labels: [&'static str; 4],
    color: Color,
}

impl RadarChart {
    pub fn new(values: [f64; 4], labels: [&'static str; 4]) -> Self {
        Self {
            values: values.map(|v| v.clamp(0.0, MAX_SCORE)),
            labels,
            color: colors().primary,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Widget for RadarChart {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 24 || area.height < 9 {
            return;
        }

        let scheme = colors();
        let values = self.values;
        let labels = self.labels;
        let color = self.color;

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-9.0, 9.0])
            .y_bounds([-6.5, 6.5])
            .paint(move |ctx| {
                // Axes and the reference diamond at the maximum score
                for (i, dir) in DIRECTIONS.iter().enumerate() {
                    ctx.draw(&CanvasLine {
                        x1: 0.0,
                        y1: 0.0,
                        x2: dir.0 * MAX_SCORE,
                        y2: dir.1 * MAX_SCORE,
                        color: scheme.muted,
                    });

                    let next = DIRECTIONS[(i + 1) % 4];
                    ctx.draw(&CanvasLine {
                        x1: dir.0 * MAX_SCORE,
                        y1: dir.1 * MAX_SCORE,
                        x2: next.0 * MAX_SCORE,
                        y2: next.1 * MAX_SCORE,
                        color: scheme.border,
                    });
                }

                // Score polygon
                let points: Vec<(f64, f64)> = DIRECTIONS
                    .iter()
                    .zip(values)
                    .map(|(dir, v)| (dir.0 * v, dir.1 * v))
                    .collect();
                for i in 0..points.len() {
                    let (x1, y1) = points[i];
                    let (x2, y2) = points[(i + 1) % points.len()];
                    ctx.draw(&CanvasLine {
                        x1,
                        y1,
                        x2,
                        y2,
                        color,
                    });
                }
                ctx.draw(&Points {
                    coords: &points,
                    color,
                });

                // Axis labels just beyond the reference diamond
                let style = Style::default().fg(scheme.text_muted);
                let half = |label: &str| label.len() as f64 * CHAR_UNITS / 2.0;
                ctx.print(
                    -half(labels[0]),
                    6.1,
                    Line::styled(labels[0], style),
                );
                ctx.print(5.4, 0.0, Line::styled(labels[1], style));
                ctx.print(
                    -half(labels[2]),
                    -6.1,
                    Line::styled(labels[2], style),
                );
                ctx.print(
                    -5.4 - 2.0 * half(labels[3]),
                    0.0,
                    Line::styled(labels[3], style),
                );
            });

        canvas.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_clamped_to_scale() {
        let chart = RadarChart::new([6.0, -1.0, 2.5, 5.0], ["A", "B", "C", "D"]);
        assert_eq!(chart.values, [5.0, 0.0, 2.5, 5.0]);
    }

    #[test]
    fn small_area_renders_nothing() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 4));
        RadarChart::new([1.0, 2.0, 3.0, 4.0], ["A", "B", "C", "D"])
            .render(Rect::new(0, 0, 10, 4), &mut buf);
        let all_blank = (0u16..10)
            .all(|x| (0u16..4).all(|y| buf.cell((x, y)).map_or(true, |c| c.symbol() == " ")));
        assert!(all_blank);
    }

    #[test]
    fn render_marks_the_canvas() {
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        RadarChart::new([5.0, 5.0, 5.0, 5.0], ["Up", "Right", "Down", "Left"]).render(area, &mut buf);
        let non_blank = (0u16..40)
            .flat_map(|x| (0u16..12).map(move |y| (x, y)))
            .filter(|&(x, y)| buf.cell((x, y)).is_some_and(|c| c.symbol() != " "))
            .count();
        assert!(non_blank > 10, "expected the chart to draw, got {non_blank}");
    }
}
