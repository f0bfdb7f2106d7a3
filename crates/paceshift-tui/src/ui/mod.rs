pub mod big_text;
mod confirmation;
pub mod helpers;
mod session;
pub mod theme;

use crate::app::{App, InputMode};
use confirmation::draw_quit_modal;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use session::draw_session;

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    draw_title_bar(f, chunks[0]);
    draw_session(f, app, chunks[1]);
    draw_status_bar(f, app, chunks[2]);

    if app.show_help {
        draw_help_modal(f);
    }

    if app.input_mode == InputMode::ConfirmQuit {
        draw_quit_modal(f);
    }
}

fn draw_title_bar(f: &mut Frame, area: Rect) {
    let spans = vec![
        Span::styled(
            "🚶 PaceShift ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("v{} │ ", env!("CARGO_PKG_VERSION"))),
        Span::raw("[Space]Start/Pause [n]Next [m]Mute [?]Help [q]Quit"),
    ];

    let title = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(title, area);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let session = app.engine.session();

    let state_info = if session.is_active {
        Span::styled(" ▶ running ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ⏸ paused ", Style::default().fg(Color::Yellow))
    };

    let audio_info = if app.engine.cues().is_enabled() {
        Span::styled(" 🔔 cues on ", Style::default().fg(Color::Gray))
    } else {
        Span::styled(" 🔕 muted ", Style::default().fg(Color::DarkGray))
    };

    let message = if app.status_message.is_empty() {
        Span::raw("[?]Help")
    } else {
        Span::styled(
            format!(" {} ", app.status_message),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        )
    };

    let status_line = Line::from(vec![
        state_info,
        Span::raw("│"),
        audio_info,
        Span::raw("│ "),
        message,
    ]);

    let status = Paragraph::new(status_line)
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    f.render_widget(status, area);
}

fn draw_help_modal(f: &mut Frame) {
    let area = f.area();
    let modal_width = 56.min(area.width.saturating_sub(4));
    let modal_height = 14.min(area.height.saturating_sub(2));
    let modal_area = helpers::centered_rect(area, modal_width, modal_height);

    f.render_widget(Clear, modal_area);

    let help_text = vec![
        Line::from(Span::styled(
            "  🚶 PaceShift - Keyboard Shortcuts",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("    [Space]/[Enter]  Start / Pause the countdown"),
        Line::from("    [n]              Skip to the next interval"),
        Line::from("    [m]              Toggle audio cues"),
        Line::from("    [?]              Toggle this Help"),
        Line::from("    [q] / [Esc]      Quit PaceShift"),
        Line::from(""),
        Line::from("    Slow and fast walking phases alternate every"),
        Line::from("    3 minutes, with a 5 second pause in between."),
        Line::from(""),
        Line::from(Span::styled(
            "  Press any key to close this help",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("❓ Help")
                .border_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .style(Style::default().bg(Color::Black));

    f.render_widget(help_paragraph, modal_area);
}
