//! Console session errors.

use ichess_core::{BoardError, MoveGenError, Square};

/// Errors that can occur while parsing or executing a console command.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// A command is missing arguments or has too many.
    #[error("malformed {command} command; usage: {usage}")]
    MalformedCommand {
        /// The command keyword.
        command: String,
        /// Expected shape of the command.
        usage: &'static str,
    },

    /// A token could not be read as an algebraic square.
    #[error("invalid square: {value}")]
    InvalidSquare {
        /// The offending token.
        value: String,
    },

    /// A token could not be read as a piece glyph.
    #[error("invalid piece glyph: {value}")]
    InvalidGlyph {
        /// The offending token.
        value: String,
    },

    /// A setting name or value was not recognized.
    #[error("invalid setting: {name} {value}")]
    InvalidSetting {
        /// Setting name.
        name: String,
        /// Requested value.
        value: String,
    },

    /// No piece stands on the named square.
    #[error("no piece on {square}")]
    EmptySquare {
        /// The empty square.
        square: Square,
    },

    /// A piece already stands on the named square.
    #[error("{square} is already occupied")]
    Occupied {
        /// The occupied square.
        square: Square,
    },

    /// The destination is not among the piece's generated moves.
    #[error("{from}{to} is not a move for the piece on {from}")]
    IllegalDestination {
        /// Origin square.
        from: Square,
        /// Requested destination.
        to: Square,
    },

    /// The board rejected a structural change.
    #[error("{source}")]
    Board {
        /// The underlying board error.
        #[from]
        source: BoardError,
    },

    /// Move generation failed.
    #[error("{source}")]
    MoveGen {
        /// The underlying generator error.
        #[from]
        source: MoveGenError,
    },

    /// An I/O error occurred on the session's input or output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

impl ConsoleError {
    /// Return `true` if the session cannot continue after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ConsoleError::Io { .. })
    }
}
