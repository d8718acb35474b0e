//! King move generation.

use crate::color::Color;
use crate::square::Square;

use super::{Occupancy, SquareList, gen_leaper};

/// The eight adjacent `(file, rank)` steps.
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Generate king moves. Attacked destinations are not filtered and castling is not generated.
pub(super) fn gen_king(from: Square, us: Color, occupancy: &Occupancy<'_>, list: &mut SquareList) {
    gen_leaper(from, us, &KING_OFFSETS, occupancy, list);
}
