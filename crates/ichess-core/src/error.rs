//! Error types for move generation and board bookkeeping.

use crate::board::PieceId;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Errors reported by move generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveGenError {
    /// A generator that needs a direction of travel was given a colorless piece.
    #[error("{kind} on {square} has no playing color")]
    InvalidColor {
        /// Kind of the offending piece.
        kind: PieceKind,
        /// Where the offending piece stands.
        square: Square,
    },
}

/// Errors from structural changes to a [`Board`](crate::board::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Only white or black pieces may be placed on a board.
    #[error("cannot place a colorless {kind} on the board")]
    ColorlessPiece {
        /// Kind of the rejected piece.
        kind: PieceKind,
    },
    /// The handle does not refer to a piece currently in play.
    #[error("no piece in play for {id}")]
    UnknownPiece {
        /// The stale or foreign handle.
        id: PieceId,
    },
    /// A side's captured-piece tray has no room left.
    #[error("{color} captured-piece tray is full")]
    TrayFull {
        /// Owner of the full tray.
        color: Color,
    },
}

#[cfg(test)]
mod tests {
    use super::{BoardError, MoveGenError};
    use crate::color::Color;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn movegen_error_display() {
        let err = MoveGenError::InvalidColor {
            kind: PieceKind::Pawn,
            square: Square::E2,
        };
        assert_eq!(format!("{err}"), "P on e2 has no playing color");
    }

    #[test]
    fn board_error_display() {
        let err = BoardError::TrayFull { color: Color::Black };
        assert_eq!(format!("{err}"), "black captured-piece tray is full");

        let err = BoardError::ColorlessPiece { kind: PieceKind::Rook };
        assert_eq!(format!("{err}"), "cannot place a colorless R on the board");
    }
}
