//! Core chess types: squares, pieces, game properties, pseudo-legal move
//! generation, and a board that owns the pieces in play.

mod board;
mod color;
mod error;
pub mod movegen;
mod piece;
mod piece_kind;
mod properties;
mod snapshot;
mod square;

pub use board::{Board, EMPTY_GLYPH, PieceId, PrettyBoard, TRAY_CAPACITY};
pub use color::Color;
pub use error::{BoardError, MoveGenError};
pub use movegen::{SquareList, generate_moves};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use properties::{CastleSide, GameProperties, MovedFlags};
pub use snapshot::Snapshot;
pub use square::Square;
