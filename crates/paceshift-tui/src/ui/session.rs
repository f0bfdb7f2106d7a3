use crate::app::App;
use crate::ui::big_text::BigText;
use crate::ui::helpers::{centered_rect, format_time};
use crate::ui::theme::theme_for;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_session(f: &mut Frame, app: &App, area: Rect) {
    let session = app.engine.session();
    let theme = theme_for(session.phase, session.mode);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .title(format!(" {} {} ", theme.icon, theme.label));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(7),
            Constraint::Min(0),
        ])
        .split(inner);

    draw_header(f, app, chunks[0]);
    draw_countdown(f, app, chunks[1]);
    draw_controls(f, app, chunks[2]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let session = app.engine.session();
    let theme = theme_for(session.phase, session.mode);

    let state_badge = if session.is_active {
        Span::styled(
            " RUNNING ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            " PAUSED ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{}  {}", theme.icon, theme.label),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            theme.sub_label,
            Style::default().fg(theme.primary),
        )),
        Line::from(state_badge),
    ];

    let header = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn draw_countdown(f: &mut Frame, app: &App, area: Rect) {
    let session = app.engine.session();
    let theme = theme_for(session.phase, session.mode);

    let time_text = format_time(session.remaining_seconds);
    let width = BigText::width(&time_text);
    let countdown_area = centered_rect(area, width, 5);

    let countdown = BigText::new(&time_text).style(Style::default().fg(theme.accent));
    f.render_widget(countdown, countdown_area);
}

fn draw_controls(f: &mut Frame, app: &App, area: Rect) {
    let session = app.engine.session();

    let toggle_hint = if session.is_active {
        "[Space] Pause"
    } else {
        "[Space] Start"
    };

    let lines = vec![
        Line::from(""),
        Line::from(format!("{}    [n] Next Interval", toggle_hint)),
    ];

    let controls = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(controls, area);
}
