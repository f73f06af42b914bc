//! Minesweeper board rendering.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::explosion::MineSprite;
use super::game_common::render_status_bar;
use super::geometry::BoardGeometry;
use crate::app::App;
use crate::game::{Cell, GameStatus};

const REVEALED_BG: Color = Color::Rgb(192, 192, 192);
const HOVER_BG: Color = Color::DarkGray;

const NUMBER_GLYPHS: [&str; 9] = [". ", "1 ", "2 ", "3 ", "4 ", "5 ", "6 ", "7 ", "8 "];

/// Colours for 1 through 8.
const NUMBER_COLORS: [Color; 8] = [
    Color::Rgb(0, 0, 255),
    Color::Rgb(0, 133, 0),
    Color::Rgb(255, 0, 0),
    Color::Rgb(0, 0, 132),
    Color::Rgb(132, 0, 0),
    Color::Rgb(0, 132, 132),
    Color::Rgb(132, 0, 132),
    Color::Rgb(32, 32, 32),
];

/// One entry per explosion stage; the spent mine is drawn as `"* "`.
const EXPLOSION_GLYPHS: [(&str, Color); 10] = [
    ("· ", Color::Yellow),
    ("+ ", Color::Yellow),
    ("x ", Color::LightYellow),
    ("X ", Color::LightYellow),
    ("✶ ", Color::LightRed),
    ("✷ ", Color::LightRed),
    ("✸ ", Color::Red),
    ("✹ ", Color::Red),
    ("░░", Color::Red),
    ("▒▒", Color::DarkGray),
];

/// Render the bordered board with its status bar above the grid.
pub fn render_minesweeper(frame: &mut Frame, geometry: &BoardGeometry, app: &App) {
    let game = app.game();
    frame.render_widget(Clear, geometry.outer);

    let border_color = match game.status() {
        GameStatus::Playing => Color::Yellow,
        GameStatus::Won => Color::Green,
        GameStatus::Lost => Color::Red,
    };
    let block = Block::default()
        .title(" Minesweeper ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, geometry.outer);

    render_status(frame, geometry, app);
    render_grid(frame, geometry, app);
}

fn render_status(frame: &mut Frame, geometry: &BoardGeometry, app: &App) {
    let game = app.game();

    let status = match app.notice() {
        Some(notice) => Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::Yellow),
        )),
        None => {
            let remaining = game.mines_remaining();
            let remaining_color = if remaining < 0 {
                Color::Red
            } else {
                Color::White
            };
            let mut spans = vec![
                Span::styled("Time: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    game.elapsed_seconds().to_string(),
                    Style::default().fg(Color::White),
                ),
                Span::styled("   Mines: ", Style::default().fg(Color::DarkGray)),
                Span::styled(remaining.to_string(), Style::default().fg(remaining_color)),
            ];
            match game.status() {
                GameStatus::Playing => {}
                GameStatus::Won => spans.push(Span::styled(
                    "   You win!",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
                GameStatus::Lost => spans.push(Span::styled(
                    "   You lost!",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
            }
            Line::from(spans)
        }
    };

    let controls: &[(&str, &str)] = if game.status().is_finished() {
        &[("[R]", "Restart"), ("[Q]", "Quit")]
    } else {
        &[
            ("[LMB]", "Reveal"),
            ("[RMB]", "Flag"),
            ("[R]", "Restart"),
            ("[Q]", "Quit"),
        ]
    };

    render_status_bar(frame, geometry.status_bar, status, controls);
}

fn render_grid(frame: &mut Frame, geometry: &BoardGeometry, app: &App) {
    let game = app.game();
    let playing = game.status() == GameStatus::Playing;
    let hover = if playing { app.hover() } else { None };

    for (row, cells) in game.board().rows().enumerate() {
        let spans: Vec<Span> = cells
            .iter()
            .map(|cell| {
                let sprite = app
                    .explosion()
                    .and_then(|explosion| explosion.sprite_at(cell.coord(), app.frame()));
                let (text, mut style) = cell_display(cell, sprite);
                if hover == Some(cell.coord()) {
                    style = style.bg(HOVER_BG);
                }
                Span::styled(text, style)
            })
            .collect();

        let mut line_area = geometry.cell_rect((0, row));
        line_area.width = geometry.grid.width;
        frame.render_widget(Paragraph::new(Line::from(spans)), line_area);
    }
}

/// Display text and style for one cell.
fn cell_display(cell: &Cell, sprite: Option<MineSprite>) -> (&'static str, Style) {
    let revealed = Style::default().bg(REVEALED_BG);

    // Disclosed mines animate whether or not they were flagged
    if cell.is_revealed() && cell.has_mine() {
        return match sprite {
            Some(MineSprite::Pending) => ("# ", Style::default().fg(Color::Gray)),
            Some(MineSprite::Exploding { stage }) => {
                let stage = usize::from(stage).min(EXPLOSION_GLYPHS.len() - 1);
                let (glyph, color) = EXPLOSION_GLYPHS[stage];
                (glyph, revealed.fg(color))
            }
            Some(MineSprite::Spent) | None => (
                "* ",
                revealed.fg(Color::Black).add_modifier(Modifier::BOLD),
            ),
        };
    }

    if cell.is_flagged() {
        let base = if cell.is_revealed() {
            revealed
        } else {
            Style::default()
        };
        return ("F ", base.fg(Color::Red).add_modifier(Modifier::BOLD));
    }

    if !cell.is_revealed() {
        return ("# ", Style::default().fg(Color::Gray));
    }

    match cell.adjacent_mines() {
        0 => (NUMBER_GLYPHS[0], revealed.fg(Color::DarkGray)),
        n => {
            let n = usize::from(n.min(8));
            (
                NUMBER_GLYPHS[n],
                revealed.fg(NUMBER_COLORS[n - 1]).add_modifier(Modifier::BOLD),
            )
        }
    }
}
