//! Pseudo-legal move generation: one generator per piece kind.
//!
//! Generators are pure. They read the mover's square and color, the positions
//! and colors of every other piece, and the [`GameProperties`]; they write only
//! to the caller's [`SquareList`]. Moves that leave the mover's own king in
//! check are not filtered out.

mod king;
mod knights;
mod pawns;
mod sliders;

use tracing::{trace, warn};

use crate::color::Color;
use crate::error::MoveGenError;
use crate::piece_kind::PieceKind;
use crate::properties::GameProperties;
use crate::square::Square;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::{gen_bishop, gen_queen, gen_rook};

/// Capacity of a [`SquareList`]. A queen reaches at most 27 squares.
const CAPACITY: usize = 32;

/// Stack-allocated buffer of destination squares.
pub struct SquareList {
    squares: [Square; CAPACITY],
    len: u8,
}

impl SquareList {
    /// Create an empty list.
    pub fn new() -> SquareList {
        SquareList {
            squares: [Square::EMPTY; CAPACITY],
            len: 0,
        }
    }

    /// Push a square onto the list.
    #[inline]
    pub fn push(&mut self, sq: Square) {
        debug_assert!((self.len as usize) < CAPACITY);
        self.squares[self.len as usize] = sq;
        self.len += 1;
    }

    /// Remove every square.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Return the number of squares in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return `true` if `sq` is in the list.
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        self.as_slice().contains(&sq)
    }

    /// Return a slice of the squares, in generation order.
    #[inline]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len as usize]
    }
}

impl Default for SquareList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SquareList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl std::ops::Index<usize> for SquareList {
    type Output = Square;
    #[inline]
    fn index(&self, index: usize) -> &Square {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a SquareList {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Read-only view of the other pieces, walked pairwise.
///
/// A length mismatch between the two sequences is tolerated: only the common
/// prefix is consulted.
pub(crate) struct Occupancy<'a> {
    positions: &'a [Square],
    colors: &'a [Color],
}

impl<'a> Occupancy<'a> {
    pub(crate) fn new(positions: &'a [Square], colors: &'a [Color]) -> Occupancy<'a> {
        if positions.len() != colors.len() {
            warn!(
                positions = positions.len(),
                colors = colors.len(),
                "occupancy sequences differ in length; ignoring the excess"
            );
        }
        Occupancy { positions, colors }
    }

    /// Return the color standing on `sq`, or `None` if the square is empty.
    pub(crate) fn color_at(&self, sq: Square) -> Option<Color> {
        self.positions
            .iter()
            .zip(self.colors)
            .find(|&(&pos, _)| pos == sq)
            .map(|(_, &color)| color)
    }

    #[inline]
    pub(crate) fn is_occupied(&self, sq: Square) -> bool {
        self.color_at(sq).is_some()
    }
}

/// Step to each `offsets` square once; keep it if empty or held by an opponent.
pub(crate) fn gen_leaper(
    from: Square,
    us: Color,
    offsets: &[(i8, i8)],
    occupancy: &Occupancy<'_>,
    list: &mut SquareList,
) {
    for &(df, dr) in offsets {
        let Some(dst) = from.offset(df, dr) else {
            continue;
        };
        match occupancy.color_at(dst) {
            None => list.push(dst),
            Some(them) if us.is_opponent_of(them) => list.push(dst),
            Some(_) => {}
        }
    }
}

/// Generate the destinations of a piece of `kind` and `color` standing on `from`.
///
/// `list` is cleared first. `positions` and `colors` describe every other piece.
pub fn generate_moves(
    kind: PieceKind,
    color: Color,
    from: Square,
    positions: &[Square],
    colors: &[Color],
    props: &GameProperties,
    list: &mut SquareList,
) -> Result<(), MoveGenError> {
    list.clear();
    let occupancy = Occupancy::new(positions, colors);

    match kind {
        PieceKind::Pawn => gen_pawn(from, color, &occupancy, props, list)?,
        PieceKind::Knight => gen_knight(from, color, &occupancy, list),
        PieceKind::Bishop => gen_bishop(from, color, &occupancy, list),
        PieceKind::Rook => gen_rook(from, color, &occupancy, list),
        PieceKind::Queen => gen_queen(from, color, &occupancy, list),
        PieceKind::King => gen_king(from, color, &occupancy, list),
    }

    trace!(%kind, %from, count = list.len(), "generated moves");
    Ok(())
}

#[cfg(test)]
pub(crate) fn sorted(list: &SquareList) -> Vec<String> {
    let mut squares: Vec<String> = list.as_slice().iter().map(|sq| sq.to_string()).collect();
    squares.sort();
    squares
}
