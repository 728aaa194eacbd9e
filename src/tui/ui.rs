//! TUI rendering and the main event loop.

use std::io::{self, stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
};

use super::app::App;
use super::events::{Event, EventHandler};
use super::theme::{colors, set_theme, Theme};
use super::widgets::{RadarChart, ScoreBar};
use crate::config::TuiPreferences;
use crate::model::MetricKind;
use crate::scoring::MAX_SCORE;

const MIN_WIDTH: u16 = 76;
const MIN_HEIGHT: u16 = 22;

/// Run the TUI until the user quits.
pub fn run(mut app: App) -> io::Result<()> {
    // Saved theme preference wins over the configured fallback
    let has_prefs = TuiPreferences::config_path().is_some_and(|p| p.exists());
    let theme_name = if has_prefs {
        TuiPreferences::load().theme
    } else {
        app.theme.clone()
    };
    set_theme(Theme::from_name(&theme_name));

    // Setup terminal
    enable_raw_mode()?;
    let mut out = stdout();
    if app.mouse_enabled {
        execute!(out, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(out, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::default();

    // Main loop
    loop {
        terminal.draw(|frame| render(frame, &app))?;

        match events.next()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(_) | Event::Resize(_, _) => {}
            Event::Tick => app.tick += 1,
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    if app.mouse_enabled {
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    Ok(())
}

/// Main render function
fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let scheme = colors();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let warning = Paragraph::new(format!(
            "Terminal too small: need at least {MIN_WIDTH}x{MIN_HEIGHT}"
        ))
        .style(Style::default().fg(scheme.warning))
        .alignment(Alignment::Center);
        frame.render_widget(warning, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(" Quality Scorecard ", Style::default().fg(scheme.primary).bold()),
        Span::styled(
            "— software quality evaluation",
            Style::default().fg(scheme.text_muted),
        ),
    ]));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(36), Constraint::Min(40)])
        .split(chunks[1]);

    render_form(frame, body[0], app);
    render_evaluation(frame, body[1], app);

    let hints = Paragraph::new(Line::from(Span::styled(
        " Enter evaluate · Tab next · c clear · l last · x export · t theme · ? help · q quit",
        Style::default().fg(scheme.text_muted),
    )));
    frame.render_widget(hints, chunks[2]);

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

/// Input form and status pane
fn render_form(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
        ])
        .split(area);

    for (i, field) in app.fields.iter().enumerate() {
        let focused = app.focus == i;
        let border_color = if focused {
            scheme.border_focused
        } else {
            scheme.border
        };

        let mut spans = Vec::new();
        if field.is_empty() {
            // The coercion default, shown as a ghost value
            let default = if i == 2 { "1" } else { "0" };
            spans.push(Span::styled(default, Style::default().fg(scheme.muted)));
        } else {
            spans.push(Span::styled(
                field.clone(),
                Style::default().fg(scheme.text),
            ));
        }
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(scheme.accent)));
        }

        let input = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title(format!(" {} ", App::field_label(i)))
                .title_style(Style::default().fg(if focused {
                    scheme.text
                } else {
                    scheme.text_muted
                }))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );
        frame.render_widget(input, chunks[i]);
    }

    render_status(frame, chunks[4], app);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let (text, style) = match &app.status {
        Some(status) if status.is_error => {
            (status.text.clone(), Style::default().fg(scheme.error))
        }
        Some(status) => (status.text.clone(), Style::default().fg(scheme.success)),
        None => (
            "Fill in the metrics and press Enter.".to_string(),
            Style::default().fg(scheme.text_muted),
        ),
    };

    let status = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Status ")
                .title_style(Style::default().fg(scheme.text_muted))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.border)),
        );
    frame.render_widget(status, area);
}

/// Right-hand side: gauge, bar view, radar view and recommendations
fn render_evaluation(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();

    let Some(view) = &app.view else {
        let placeholder = Paragraph::new(
            "No evaluation yet.\n\nFill in the metrics on the left and press Enter,\nor press 'l' to load the last saved evaluation.",
        )
        .style(Style::default().fg(scheme.text_muted))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.border)),
        );
        frame.render_widget(placeholder, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(9),
            Constraint::Length(8),
        ])
        .split(area);

    // Final score gauge
    let tier_color = scheme.tier(view.tier);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Final score ")
                .title_style(Style::default().bold().fg(scheme.text))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(tier_color)),
        )
        .gauge_style(Style::default().fg(tier_color).bg(scheme.muted))
        .ratio((view.final_score() / MAX_SCORE).clamp(0.0, 1.0))
        .label(format!(
            "{:.2} / 5 — {}",
            view.final_score(),
            view.tier.label()
        ));
    frame.render_widget(gauge, chunks[0]);

    // Bar view
    let bars_block = Block::default()
        .title(" Sub-scores ")
        .title_style(Style::default().fg(scheme.text_muted))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(scheme.border));
    let bars_inner = bars_block.inner(chunks[1]);
    frame.render_widget(bars_block, chunks[1]);
    for (i, rec) in view.recommendations.iter().enumerate() {
        let row = Rect::new(
            bars_inner.x,
            bars_inner.y + i as u16,
            bars_inner.width,
            1,
        );
        if row.y < bars_inner.y + bars_inner.height {
            frame.render_widget(
                ScoreBar::new(rec.kind.label(), rec.score).color(scheme.tier(rec.tier)),
                row,
            );
        }
    }

    // Radar view
    let radar_block = Block::default()
        .title(" Quality profile ")
        .title_style(Style::default().fg(scheme.text_muted))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(scheme.border));
    let radar_inner = radar_block.inner(chunks[2]);
    frame.render_widget(radar_block, chunks[2]);
    frame.render_widget(
        RadarChart::new(
            view.record.scores.as_array(),
            [
                MetricKind::ALL[0].label(),
                MetricKind::ALL[1].label(),
                MetricKind::ALL[2].label(),
                MetricKind::ALL[3].label(),
            ],
        )
        .color(scheme.primary),
        radar_inner,
    );

    // Recommendations
    let mut lines = Vec::new();
    for rec in &view.recommendations {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", rec.kind.name()),
                Style::default().fg(scheme.tier(rec.tier)).bold(),
            ),
            Span::styled(rec.tier.advice(), Style::default().fg(scheme.text)),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        view.conclusion.clone(),
        Style::default().fg(scheme.text_muted),
    )));

    let recs = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(" Recommendations ")
            .title_style(Style::default().fg(scheme.text_muted))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(scheme.border)),
    );
    frame.render_widget(recs, chunks[3]);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let scheme = colors();
    let popup = centered_rect(46, 12, area);

    let lines = vec![
        Line::from("Enter      evaluate and save"),
        Line::from("Tab / Down next field"),
        Line::from("S-Tab / Up previous field"),
        Line::from("c          clear form (keeps saved record)"),
        Line::from("l          load last saved evaluation"),
        Line::from("x          export saved evaluation to JSON"),
        Line::from("t          toggle theme"),
        Line::from("q / Esc    quit"),
        Line::default(),
        Line::from(Span::styled(
            "press any key to close",
            Style::default().fg(scheme.text_muted),
        )),
    ];

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Help ")
                .title_style(Style::default().fg(scheme.primary).bold())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.border_focused)),
        ),
        popup,
    );
}

/// Fixed-size rect centered in `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
