//! Line-driven play session: reads commands, applies clicks, renders the board.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use xiangqi_core::{GameState, Position};

use crate::command::{Command, Direction, ShellOption, parse_command};
use crate::error::ShellError;
use crate::render::{BoardView, GlyphStyle};

/// Display knobs adjustable via `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellConfig {
    /// Piece glyphs.
    pub glyphs: GlyphStyle,
    /// Row and column labels.
    pub coords: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            glyphs: GlyphStyle::Chinese,
            coords: true,
        }
    }
}

/// A play session holding the current state and cursor.
///
/// Commands are applied strictly one after another, each to the state the
/// previous one produced.
pub struct Session {
    state: GameState,
    cursor: Position,
    config: ShellConfig,
}

impl Session {
    /// Create a session on the starting layout.
    pub fn new(config: ShellConfig) -> Self {
        Self {
            state: GameState::new(),
            cursor: ORIGIN,
            config,
        }
    }

    /// Return the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Return the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Return the current configuration.
    pub fn config(&self) -> ShellConfig {
        self.config
    }

    /// Run until `quit` or end of input, rendering to `output`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), ShellError> {
        self.render(&mut output)?;

        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.handle(cmd, &mut output)?,
                Err(e) => {
                    warn!(error = %e, "parse error");
                    writeln!(output, "error: {e}")?;
                }
            }
            output.flush()?;
        }

        info!("session closed");
        Ok(())
    }

    /// Apply one parsed command.
    pub fn handle<W: Write>(&mut self, cmd: Command, output: &mut W) -> Result<(), ShellError> {
        match cmd {
            Command::Click(position) => {
                self.cursor = position;
                self.click();
                self.render(output)?;
            }
            Command::Cursor(direction) => {
                self.move_cursor(direction);
                self.render(output)?;
            }
            Command::Enter => {
                self.click();
                self.render(output)?;
            }
            Command::New => {
                self.state = GameState::new();
                self.cursor = ORIGIN;
                self.render(output)?;
            }
            Command::Position(state) => {
                self.state = state;
                self.render(output)?;
            }
            Command::Show => self.render(output)?,
            Command::Fen => writeln!(output, "{}", self.state.fen())?,
            Command::Set(option) => self.set_option(option),
            Command::Quit => {}
            Command::Unknown(name) => {
                debug!(%name, "ignoring unknown command");
            }
        }
        Ok(())
    }

    fn click(&mut self) {
        let before = self.state.side_to_move();
        self.state = self.state.click(self.cursor);
        if self.state.side_to_move() != before {
            info!(side = before.name(), to = %self.cursor, "ply completed");
        }
    }

    fn move_cursor(&mut self, direction: Direction) {
        let (dx, dy) = match direction {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        };
        if let Some(next) = self.cursor.offset(dx, dy) {
            self.cursor = next;
        }
    }

    fn set_option(&mut self, option: ShellOption) {
        match option {
            ShellOption::Glyphs(style) => self.config.glyphs = style,
            ShellOption::Coords(on) => self.config.coords = on,
        }
        debug!(config = ?self.config, "option updated");
    }

    fn render<W: Write>(&self, output: &mut W) -> Result<(), ShellError> {
        let view = BoardView {
            state: &self.state,
            cursor: Some(self.cursor),
            style: self.config.glyphs,
            coords: self.config.coords,
        };
        write!(output, "{view}")?;
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}

/// Where the cursor starts.
const ORIGIN: Position = match Position::new(0, 0) {
    Some(p) => p,
    None => panic!("origin is on the board"),
};

#[cfg(test)]
mod tests {
    use super::*;
    use xiangqi_core::Color;

    fn pos(x: i8, y: i8) -> Position {
        Position::new(x, y).unwrap()
    }

    #[test]
    fn cursor_is_clamped() {
        let mut session = Session::default();
        let mut sink = Vec::new();
        session.handle(Command::Cursor(Direction::Left), &mut sink).unwrap();
        session.handle(Command::Cursor(Direction::Up), &mut sink).unwrap();
        assert_eq!(session.cursor(), pos(0, 0));
        session.handle(Command::Cursor(Direction::Down), &mut sink).unwrap();
        session.handle(Command::Cursor(Direction::Right), &mut sink).unwrap();
        assert_eq!(session.cursor(), pos(1, 1));
    }

    #[test]
    fn enter_clicks_at_cursor() {
        let mut session = Session::default();
        let mut sink = Vec::new();
        session.handle(Command::Click(pos(0, 6)), &mut sink).unwrap();
        session.handle(Command::Cursor(Direction::Up), &mut sink).unwrap();
        session.handle(Command::Enter, &mut sink).unwrap();
        assert_eq!(session.state().side_to_move(), Color::Black);
        assert!(session.state().piece_at(pos(0, 5)).is_some());
    }

    #[test]
    fn new_resets_state_and_cursor() {
        let mut session = Session::default();
        let mut sink = Vec::new();
        session.handle(Command::Click(pos(0, 6)), &mut sink).unwrap();
        session.handle(Command::Click(pos(0, 5)), &mut sink).unwrap();
        session.handle(Command::New, &mut sink).unwrap();
        assert_eq!(session.state(), &GameState::new());
        assert_eq!(session.cursor(), pos(0, 0));
    }

    #[test]
    fn set_updates_config() {
        let mut session = Session::default();
        let mut sink = Vec::new();
        session
            .handle(Command::Set(ShellOption::Glyphs(GlyphStyle::Ascii)), &mut sink)
            .unwrap();
        session
            .handle(Command::Set(ShellOption::Coords(false)), &mut sink)
            .unwrap();
        assert_eq!(
            session.config(),
            ShellConfig {
                glyphs: GlyphStyle::Ascii,
                coords: false
            }
        );
    }

    #[test]
    fn fen_prints_current_state() {
        let mut session = Session::default();
        let mut out = Vec::new();
        session.handle(Command::Fen, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w\n"
        );
    }
}
