//! Drawing for the three screens.

use guess::{App, CHANCE_SHORTCUTS, GameState, Outcome, Screen, Setup, text};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::backend::Theme;
use crate::state::{SetupFocus, TuiState};

pub(crate) fn draw<R: Rng>(frame: &mut Frame, app: &App<R>, state: &TuiState, theme: &Theme) {
    match app.screen() {
        Screen::Setup(setup) => draw_setup(frame, app, setup, state, theme),
        Screen::Game(game) => draw_game(frame, app, game, state, theme),
        Screen::Outcome(outcome) => draw_outcome(frame, *outcome, theme),
    }
}

fn draw_setup<R: Rng>(
    frame: &mut Frame,
    app: &App<R>,
    setup: &Setup,
    state: &TuiState,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Rules
            Constraint::Length(3), // Chances field
            Constraint::Length(3), // Shortcuts
            Constraint::Length(3), // Start
            Constraint::Length(2), // Notice
            Constraint::Min(0),
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], text::SETUP_TITLE, theme);

    let rules = Paragraph::new(text::RULES)
        .style(Style::default().fg(theme.text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(rules, chunks[1]);

    let editing = state.focus == SetupFocus::Chances;
    draw_input(
        frame,
        chunks[2],
        text::CHANCES_LABEL,
        setup.input(),
        editing,
        theme,
    );
    if editing {
        set_cursor(frame, chunks[2], state.cursor_pos);
    }

    let shortcut_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(CHANCE_SHORTCUTS.map(|_| Constraint::Ratio(1, CHANCE_SHORTCUTS.len() as u32)))
        .split(chunks[3]);
    for (i, by) in CHANCE_SHORTCUTS.iter().enumerate() {
        let focused = state.focus == SetupFocus::Shortcut(i);
        draw_button(frame, shortcut_areas[i], &text::shortcut_label(*by), focused, theme);
    }

    draw_button(
        frame,
        chunks[4],
        text::START,
        state.focus == SetupFocus::Start,
        theme,
    );

    draw_notice(frame, app, chunks[5], theme);
    draw_help(
        frame,
        chunks[7],
        "Tab/↑/↓: Move  Enter: Press  Esc: Quit  Ctrl+C: Cancel",
        theme,
    );
}

fn draw_game<R: Rng>(
    frame: &mut Frame,
    app: &App<R>,
    game: &GameState,
    state: &TuiState,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Chances left
            Constraint::Length(2), // Hint
            Constraint::Length(3), // Guess field
            Constraint::Length(3), // Buttons
            Constraint::Length(2), // Notice
            Constraint::Min(0),
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], text::GAME_TITLE, theme);

    let chances = Paragraph::new(text::chances_left(game.chances_remaining()))
        .style(Style::default().fg(theme.secondary).bold())
        .alignment(Alignment::Center);
    frame.render_widget(chances, chunks[1]);

    let hint = Paragraph::new(game.last_hint().to_string())
        .style(Style::default().fg(theme.highlight))
        .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[2]);

    draw_input(
        frame,
        chunks[3],
        text::GUESS_LABEL,
        game.guess_input(),
        true,
        theme,
    );
    set_cursor(frame, chunks[3], state.cursor_pos);

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(chunks[4]);
    draw_button(
        frame,
        buttons[0],
        &format!("{} [Enter]", text::CHECK_GUESS),
        true,
        theme,
    );
    draw_button(frame, buttons[1], &format!("{} [Esc]", text::EXIT), false, theme);

    draw_notice(frame, app, chunks[5], theme);
    draw_help(
        frame,
        chunks[7],
        "Enter: Check Guess  Esc: Exit  Ctrl+C: Cancel",
        theme,
    );
}

fn draw_outcome(frame: &mut Frame, outcome: Outcome, theme: &Theme) {
    let area = frame.area();
    let color = outcome_color(outcome, theme);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(theme.background))
        .title(format!(" {} ", text::GAME_TITLE))
        .title_style(Style::default().fg(color).bold());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let message = format!(
        "{outcome}\n\nEnter: {}  Esc: {}",
        text::PLAY_AGAIN,
        text::QUIT
    );
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(theme.text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let centered = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Min(3),
            Constraint::Percentage(40),
        ])
        .split(inner);

    frame.render_widget(paragraph, centered[1]);
}

fn draw_header(frame: &mut Frame, area: Rect, title: &str, theme: &Theme) {
    let header = Paragraph::new(title.to_string())
        .style(Style::default().fg(theme.primary).bold())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(header, area);
}

fn draw_input(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    theme: &Theme,
) {
    let border = if focused { theme.highlight } else { theme.border };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(format!(" {label} "))
        .title_style(Style::default().fg(theme.secondary));

    let input_widget = Paragraph::new(value.to_string())
        .style(Style::default().fg(theme.text))
        .block(input_block);
    frame.render_widget(input_widget, area);
}

fn set_cursor(frame: &mut Frame, area: Rect, cursor_pos: usize) {
    frame.set_cursor_position(cursor_position(area, cursor_pos));
}

/// Cursor cell inside a bordered field, kept within the field's inner width.
fn cursor_position(area: Rect, cursor_pos: usize) -> (u16, u16) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let offset = cursor_pos.min(inner_width) as u16;
    (
        area.x.saturating_add(1).saturating_add(offset),
        area.y.saturating_add(1),
    )
}

fn draw_button(frame: &mut Frame, area: Rect, label: &str, focused: bool, theme: &Theme) {
    let (fg, border) = if focused {
        (theme.highlight, theme.highlight)
    } else {
        (theme.text, theme.border)
    };
    let mut style = Style::default().fg(fg);
    if focused {
        style = style.bold();
    }

    let button = Paragraph::new(label.to_string())
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
    frame.render_widget(button, area);
}

fn draw_notice<R: Rng>(frame: &mut Frame, app: &App<R>, area: Rect, theme: &Theme) {
    if let Some(notice) = app.notice() {
        let notice_widget = Paragraph::new(notice.to_string())
            .style(Style::default().fg(theme.error).bold())
            .alignment(Alignment::Center);
        frame.render_widget(notice_widget, area);
    }
}

fn draw_help(frame: &mut Frame, area: Rect, help_text: &str, theme: &Theme) {
    let help = Paragraph::new(help_text.to_string())
        .style(Style::default().fg(theme.border))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(help, area);
}

fn outcome_color(outcome: Outcome, theme: &Theme) -> Color {
    if outcome.is_winner() {
        theme.success
    } else {
        theme.error
    }
}
