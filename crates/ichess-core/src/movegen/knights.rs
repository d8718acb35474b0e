//! Knight move generation.

use crate::color::Color;
use crate::square::Square;

use super::{Occupancy, SquareList, gen_leaper};

/// The eight L-shaped `(file, rank)` jumps.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

/// Generate knight moves. Pieces between source and destination never block.
pub(super) fn gen_knight(from: Square, us: Color, occupancy: &Occupancy<'_>, list: &mut SquareList) {
    gen_leaper(from, us, &KNIGHT_OFFSETS, occupancy, list);
}
