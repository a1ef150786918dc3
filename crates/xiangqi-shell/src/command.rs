//! Shell command parsing.

use xiangqi_core::{GameState, Position};

use crate::error::ShellError;
use crate::render::GlyphStyle;

/// Cursor movement directions. Up is toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// A runtime option change from the `set` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellOption {
    /// `set glyphs chinese|ascii`
    Glyphs(GlyphStyle),
    /// `set coords on|off`
    Coords(bool),
}

/// A parsed shell command.
#[derive(Debug)]
pub enum Command {
    /// `click <x> <y>` or `click <x>,<y>` -- click a board point.
    Click(Position),
    /// `left`, `right`, `up`, `down` -- move the cursor.
    Cursor(Direction),
    /// `enter` or `space` -- click at the cursor.
    Enter,
    /// `new` -- reset to the starting layout.
    New,
    /// `position` -- replace the state.
    Position(GameState),
    /// `show` -- render the board.
    Show,
    /// `fen` -- print the current FEN.
    Fen,
    /// `set` -- change a display option.
    Set(ShellOption),
    /// `quit` -- end the session.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ShellError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "click" => parse_click(&tokens[1..]),
        "left" => Ok(Command::Cursor(Direction::Left)),
        "right" => Ok(Command::Cursor(Direction::Right)),
        "up" => Ok(Command::Cursor(Direction::Up)),
        "down" => Ok(Command::Cursor(Direction::Down)),
        "enter" | "space" => Ok(Command::Enter),
        "new" => Ok(Command::New),
        "position" => parse_position(&tokens[1..]),
        "show" => Ok(Command::Show),
        "fen" => Ok(Command::Fen),
        "set" => parse_set(&tokens[1..]),
        "quit" => Ok(Command::Quit),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// Parse the `click` arguments: either `x y` or `x,y`.
fn parse_click(tokens: &[&str]) -> Result<Command, ShellError> {
    let position = match tokens {
        [] => return Err(ShellError::MissingCoordinate { command: "click" }),
        [pair] => pair.parse::<Position>().map_err(|_| ShellError::InvalidCoordinate {
            value: pair.to_string(),
        })?,
        [x, y] => {
            let x = parse_axis(x)?;
            let y = parse_axis(y)?;
            Position::new(x, y).ok_or_else(|| ShellError::InvalidCoordinate {
                value: format!("{x} {y}"),
            })?
        }
        _ => {
            return Err(ShellError::InvalidCoordinate {
                value: tokens.join(" "),
            });
        }
    };
    Ok(Command::Click(position))
}

fn parse_axis(token: &str) -> Result<i8, ShellError> {
    token.parse().map_err(|_| ShellError::InvalidCoordinate {
        value: token.to_string(),
    })
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos`
/// - `position fen <placement> <side> [- - 0 1]`
fn parse_position(tokens: &[&str]) -> Result<Command, ShellError> {
    match tokens.first() {
        Some(&"startpos") => Ok(Command::Position(GameState::new())),
        Some(&"fen") => {
            let fen = tokens[1..].join(" ");
            let state = fen
                .parse::<GameState>()
                .map_err(|source| ShellError::InvalidFen { fen, source })?;
            Ok(Command::Position(state))
        }
        _ => Err(ShellError::MalformedPosition),
    }
}

/// Parse the `set` command arguments.
fn parse_set(tokens: &[&str]) -> Result<Command, ShellError> {
    let name = tokens.first().copied().unwrap_or_default();
    let value = tokens.get(1).copied().unwrap_or_default();

    let option = match name {
        "glyphs" => match value {
            "chinese" => ShellOption::Glyphs(GlyphStyle::Chinese),
            "ascii" => ShellOption::Glyphs(GlyphStyle::Ascii),
            _ => {
                return Err(ShellError::InvalidOptionValue {
                    name: "glyphs",
                    value: value.to_string(),
                });
            }
        },
        "coords" => match value {
            "on" => ShellOption::Coords(true),
            "off" => ShellOption::Coords(false),
            _ => {
                return Err(ShellError::InvalidOptionValue {
                    name: "coords",
                    value: value.to_string(),
                });
            }
        },
        _ => {
            return Err(ShellError::UnknownOption {
                name: name.to_string(),
            });
        }
    };
    Ok(Command::Set(option))
}

#[cfg(test)]
mod tests {
    use super::*;
    use xiangqi_core::Color;

    fn pos(x: i8, y: i8) -> Position {
        Position::new(x, y).unwrap()
    }

    #[test]
    fn parse_click_two_tokens() {
        match parse_command("click 1 7").unwrap() {
            Command::Click(p) => assert_eq!(p, pos(1, 7)),
            other => panic!("expected Click, got {other:?}"),
        }
    }

    #[test]
    fn parse_click_pair() {
        match parse_command("click 0,6").unwrap() {
            Command::Click(p) => assert_eq!(p, pos(0, 6)),
            other => panic!("expected Click, got {other:?}"),
        }
    }

    #[test]
    fn parse_click_errors() {
        assert!(matches!(
            parse_command("click"),
            Err(ShellError::MissingCoordinate { .. })
        ));
        assert!(matches!(
            parse_command("click 9 0"),
            Err(ShellError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            parse_command("click a 0"),
            Err(ShellError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            parse_command("click 1 2 3"),
            Err(ShellError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            parse_command("click 1;2"),
            Err(ShellError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn parse_cursor_keys() {
        assert!(matches!(
            parse_command("left").unwrap(),
            Command::Cursor(Direction::Left)
        ));
        assert!(matches!(
            parse_command("down").unwrap(),
            Command::Cursor(Direction::Down)
        ));
        assert!(matches!(parse_command("enter").unwrap(), Command::Enter));
        assert!(matches!(parse_command("space").unwrap(), Command::Enter));
    }

    #[test]
    fn parse_simple_commands() {
        assert!(matches!(parse_command("new").unwrap(), Command::New));
        assert!(matches!(parse_command("show").unwrap(), Command::Show));
        assert!(matches!(parse_command("fen").unwrap(), Command::Fen));
        assert!(matches!(parse_command("quit").unwrap(), Command::Quit));
    }

    #[test]
    fn parse_position_startpos() {
        match parse_command("position startpos").unwrap() {
            Command::Position(state) => assert_eq!(state, GameState::new()),
            other => panic!("expected Position, got {other:?}"),
        }
    }

    #[test]
    fn parse_position_fen() {
        match parse_command("position fen 4k4/9/9/9/9/9/9/9/9/4K4 b - - 0 1").unwrap() {
            Command::Position(state) => {
                assert_eq!(state.side_to_move(), Color::Black);
                assert_eq!(state.pieces().len(), 2);
            }
            other => panic!("expected Position, got {other:?}"),
        }
    }

    #[test]
    fn parse_position_errors() {
        assert!(matches!(
            parse_command("position"),
            Err(ShellError::MalformedPosition)
        ));
        assert!(matches!(
            parse_command("position fen invalid"),
            Err(ShellError::InvalidFen { .. })
        ));
    }

    #[test]
    fn parse_set_options() {
        assert!(matches!(
            parse_command("set glyphs ascii").unwrap(),
            Command::Set(ShellOption::Glyphs(GlyphStyle::Ascii))
        ));
        assert!(matches!(
            parse_command("set coords off").unwrap(),
            Command::Set(ShellOption::Coords(false))
        ));
        assert!(matches!(
            parse_command("set glyphs klingon"),
            Err(ShellError::InvalidOptionValue { name: "glyphs", .. })
        ));
        assert!(matches!(
            parse_command("set colour red"),
            Err(ShellError::UnknownOption { .. })
        ));
    }

    #[test]
    fn parse_unknown_and_empty() {
        assert!(matches!(parse_command("foobar").unwrap(), Command::Unknown(_)));
        assert!(matches!(parse_command("   ").unwrap(), Command::Unknown(_)));
    }
}
