//! Console command parsing.

use ichess_core::{Piece, Square};

use crate::error::ConsoleError;

/// A setting changed with `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    /// `set autoshow on|off`
    AutoShow(bool),
}

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `show` -- render the board.
    Show,
    /// `reset` -- restore the standard starting position.
    Reset,
    /// `clear` -- empty the board and both trays.
    Clear,
    /// `place <glyph> <square>` -- put a new piece on an empty square.
    Place(Piece),
    /// `remove <square>` -- take a piece out of play.
    Remove(Square),
    /// `moves <square>` -- list the pseudo-legal destinations of a piece.
    Moves(Square),
    /// `move <from> <to>` -- play a move, capturing whatever stands in the way.
    Move {
        /// Origin square.
        from: Square,
        /// Destination square.
        to: Square,
    },
    /// `props` -- print the game properties.
    Props,
    /// `set <name> <value>` -- change a session setting.
    Set(Setting),
    /// `help` -- list the commands.
    Help,
    /// `quit` -- end the session.
    Quit,
    /// Unrecognized command.
    Unknown(String),
}

/// Usage lines shown by `help`.
pub const HELP: &str = "\
show                  render the board
reset                 standard starting position
clear                 remove every piece
place <glyph> <sq>    put a piece (PNBRQK white, pnbrqk black) on an empty square
remove <sq>           take the piece on a square out of play
moves <sq>            list pseudo-legal destinations of the piece on a square
move <from> <to>      move a piece to one of its destinations
props                 print castling, check, last move and pawn counter
set autoshow on|off   render the board after every change
help                  this text
quit                  leave";

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ConsoleError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    let args = &tokens[1..];
    match tokens[0] {
        "show" => Ok(Command::Show),
        "reset" => Ok(Command::Reset),
        "clear" => Ok(Command::Clear),
        "props" => Ok(Command::Props),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "place" => parse_place(args),
        "remove" => {
            let [square] = expect_args::<1>(args, "remove", "remove <square>")?;
            Ok(Command::Remove(parse_square(square)?))
        }
        "moves" => {
            let [square] = expect_args::<1>(args, "moves", "moves <square>")?;
            Ok(Command::Moves(parse_square(square)?))
        }
        "move" => parse_move(args),
        "set" => parse_set(args),
        other => Ok(Command::Unknown(other.to_string())),
    }
}

/// Parse `place <glyph> <square>`.
fn parse_place(args: &[&str]) -> Result<Command, ConsoleError> {
    let [glyph, square] = expect_args::<2>(args, "place", "place <glyph> <square>")?;
    let square = parse_square(square)?;

    let mut chars = glyph.chars();
    let piece = match (chars.next(), chars.next()) {
        (Some(c), None) => Piece::from_glyph(c, square),
        _ => None,
    };
    piece
        .map(Command::Place)
        .ok_or_else(|| ConsoleError::InvalidGlyph {
            value: glyph.to_string(),
        })
}

/// Parse `move <from> <to>`, also accepting the joined form `move e2e4`.
fn parse_move(args: &[&str]) -> Result<Command, ConsoleError> {
    const USAGE: &str = "move <from> <to>";
    let (from, to) = match args {
        [from, to] => (*from, *to),
        [joined] if joined.len() == 4 && joined.is_ascii() => joined.split_at(2),
        _ => {
            return Err(ConsoleError::MalformedCommand {
                command: "move".to_string(),
                usage: USAGE,
            });
        }
    };
    Ok(Command::Move {
        from: parse_square(from)?,
        to: parse_square(to)?,
    })
}

/// Parse `set <name> <value>`.
fn parse_set(args: &[&str]) -> Result<Command, ConsoleError> {
    let [name, value] = expect_args::<2>(args, "set", "set autoshow on|off")?;
    let flag = match value {
        "on" | "true" => Some(true),
        "off" | "false" => Some(false),
        _ => None,
    };
    match (name, flag) {
        ("autoshow", Some(on)) => Ok(Command::Set(Setting::AutoShow(on))),
        _ => Err(ConsoleError::InvalidSetting {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

fn expect_args<'a, const N: usize>(
    args: &[&'a str],
    command: &str,
    usage: &'static str,
) -> Result<[&'a str; N], ConsoleError> {
    args.try_into().map_err(|_| ConsoleError::MalformedCommand {
        command: command.to_string(),
        usage,
    })
}

fn parse_square(token: &str) -> Result<Square, ConsoleError> {
    Square::from_algebraic(token).ok_or_else(|| ConsoleError::InvalidSquare {
        value: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ichess_core::Color;

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("show").unwrap(), Command::Show);
        assert_eq!(parse_command("reset").unwrap(), Command::Reset);
        assert_eq!(parse_command("clear").unwrap(), Command::Clear);
        assert_eq!(parse_command("props").unwrap(), Command::Props);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
        assert_eq!(parse_command("  show  ").unwrap(), Command::Show);
    }

    #[test]
    fn parse_place_glyphs() {
        assert_eq!(
            parse_command("place n c6").unwrap(),
            Command::Place(Piece::knight('c', '6', Color::Black))
        );
        assert_eq!(
            parse_command("place Q d1").unwrap(),
            Command::Place(Piece::queen('d', '1', Color::White))
        );
        assert!(matches!(
            parse_command("place X d1"),
            Err(ConsoleError::InvalidGlyph { .. })
        ));
        assert!(matches!(
            parse_command("place QQ d1"),
            Err(ConsoleError::InvalidGlyph { .. })
        ));
        assert!(matches!(
            parse_command("place Q"),
            Err(ConsoleError::MalformedCommand { .. })
        ));
    }

    #[test]
    fn parse_square_commands() {
        assert_eq!(parse_command("moves e2").unwrap(), Command::Moves(Square::E2));
        assert_eq!(parse_command("remove h8").unwrap(), Command::Remove(Square::H8));
        assert!(matches!(
            parse_command("moves z9"),
            Err(ConsoleError::InvalidSquare { .. })
        ));
        assert!(matches!(
            parse_command("remove"),
            Err(ConsoleError::MalformedCommand { .. })
        ));
    }

    #[test]
    fn parse_move_forms() {
        let expected = Command::Move {
            from: Square::E2,
            to: Square::E4,
        };
        assert_eq!(parse_command("move e2 e4").unwrap(), expected);
        assert_eq!(parse_command("move e2e4").unwrap(), expected);
        assert!(matches!(
            parse_command("move e2"),
            Err(ConsoleError::MalformedCommand { .. })
        ));
        assert!(matches!(
            parse_command("move e2 e9"),
            Err(ConsoleError::InvalidSquare { .. })
        ));
    }

    #[test]
    fn parse_settings() {
        assert_eq!(
            parse_command("set autoshow off").unwrap(),
            Command::Set(Setting::AutoShow(false))
        );
        assert_eq!(
            parse_command("set autoshow on").unwrap(),
            Command::Set(Setting::AutoShow(true))
        );
        assert!(matches!(
            parse_command("set autoshow maybe"),
            Err(ConsoleError::InvalidSetting { .. })
        ));
        assert!(matches!(
            parse_command("set colour on"),
            Err(ConsoleError::InvalidSetting { .. })
        ));
    }

    #[test]
    fn parse_unknown_and_empty() {
        assert_eq!(parse_command("castle").unwrap(), Command::Unknown("castle".to_string()));
        assert_eq!(parse_command("").unwrap(), Command::Unknown(String::new()));
    }
}
