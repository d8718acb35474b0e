//! Parallel position/color sequences describing the other pieces on the board.

use crate::color::Color;
use crate::piece::Piece;
use crate::square::Square;

/// Where every other piece stands and which side it belongs to.
///
/// Index `i` of [`positions`](Snapshot::positions) and [`colors`](Snapshot::colors)
/// describe the same piece; the two sequences always have the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    positions: Vec<Square>,
    colors: Vec<Color>,
}

impl Snapshot {
    /// Create an empty snapshot (an otherwise empty board).
    pub fn new() -> Snapshot {
        Snapshot::default()
    }

    /// Build a snapshot from a collection of pieces.
    pub fn from_pieces<'a>(pieces: impl IntoIterator<Item = &'a Piece>) -> Snapshot {
        pieces
            .into_iter()
            .map(|piece| (piece.position(), piece.color()))
            .collect()
    }

    /// Append one occupant.
    pub fn push(&mut self, square: Square, color: Color) {
        self.positions.push(square);
        self.colors.push(color);
    }

    /// Occupied squares.
    #[inline]
    pub fn positions(&self) -> &[Square] {
        &self.positions
    }

    /// Occupant colors, parallel to [`positions`](Snapshot::positions).
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of occupants.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Return `true` if the snapshot describes no pieces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl FromIterator<(Square, Color)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (Square, Color)>>(iter: I) -> Snapshot {
        let (positions, colors) = iter.into_iter().unzip();
        Snapshot { positions, colors }
    }
}
