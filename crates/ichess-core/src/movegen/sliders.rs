//! Sliding piece (bishop, rook, queen) move generation.

use crate::color::Color;
use crate::square::Square;

use super::{Occupancy, SquareList};

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Generate bishop moves.
pub(super) fn gen_bishop(from: Square, us: Color, occupancy: &Occupancy<'_>, list: &mut SquareList) {
    gen_rays(from, us, &DIAGONALS, occupancy, list);
}

/// Generate rook moves.
pub(super) fn gen_rook(from: Square, us: Color, occupancy: &Occupancy<'_>, list: &mut SquareList) {
    gen_rays(from, us, &ORTHOGONALS, occupancy, list);
}

/// Generate queen moves: the bishop rays followed by the rook rays.
pub(super) fn gen_queen(from: Square, us: Color, occupancy: &Occupancy<'_>, list: &mut SquareList) {
    gen_bishop(from, us, occupancy, list);
    gen_rook(from, us, occupancy, list);
}

/// Walk each direction until the edge or the first occupied square.
///
/// The blocking square is kept only when it holds an opponent.
fn gen_rays(
    from: Square,
    us: Color,
    directions: &[(i8, i8)],
    occupancy: &Occupancy<'_>,
    list: &mut SquareList,
) {
    for &(df, dr) in directions {
        let mut cursor = from;
        while let Some(dst) = cursor.offset(df, dr) {
            match occupancy.color_at(dst) {
                None => list.push(dst),
                Some(them) => {
                    if us.is_opponent_of(them) {
                        list.push(dst);
                    }
                    break;
                }
            }
            cursor = dst;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movegen::sorted;

    type Gen = fn(Square, Color, &Occupancy<'_>, &mut SquareList);

    fn run(generator: Gen, from: Square, positions: &[Square], colors: &[Color]) -> SquareList {
        let mut list = SquareList::new();
        generator(from, Color::White, &Occupancy::new(positions, colors), &mut list);
        list
    }

    #[test]
    fn empty_board_counts_from_d4() {
        assert_eq!(run(gen_rook, Square::D4, &[], &[]).len(), 14);
        assert_eq!(run(gen_bishop, Square::D4, &[], &[]).len(), 13);
        assert_eq!(run(gen_queen, Square::D4, &[], &[]).len(), 27);
    }

    #[test]
    fn bishop_rays_from_d4() {
        assert_eq!(
            sorted(&run(gen_bishop, Square::D4, &[], &[])),
            ["a1", "a7", "b2", "b6", "c3", "c5", "e3", "e5", "f2", "f6", "g1", "g7", "h8"]
        );
    }

    #[test]
    fn queen_is_union_without_duplicates() {
        let queen = run(gen_queen, Square::D4, &[], &[]);
        let mut union = sorted(&run(gen_bishop, Square::D4, &[], &[]));
        union.extend(sorted(&run(gen_rook, Square::D4, &[], &[])));
        union.sort();
        let mut deduped = union.clone();
        deduped.dedup();
        assert_eq!(union, deduped, "bishop and rook rays overlap");
        assert_eq!(sorted(&queen), union);
    }

    #[test]
    fn rook_stops_before_friend() {
        let list = run(gen_rook, Square::A1, &[Square::A4], &[Color::White]);
        let file: Vec<_> = sorted(&list).into_iter().filter(|s| s.starts_with('a')).collect();
        assert_eq!(file, ["a2", "a3"]);
    }

    #[test]
    fn rook_captures_enemy_and_stops() {
        let list = run(gen_rook, Square::A1, &[Square::A4], &[Color::Black]);
        let file: Vec<_> = sorted(&list).into_iter().filter(|s| s.starts_with('a')).collect();
        assert_eq!(file, ["a2", "a3", "a4"]);
        assert_eq!(list.len(), 3 + 7);
    }

    #[test]
    fn bishop_blocked_on_every_ray() {
        let positions = [Square::C3, Square::E5, Square::C5, Square::E3];
        let colors = [Color::White, Color::Black, Color::White, Color::Black];
        assert_eq!(sorted(&run(gen_bishop, Square::D4, &positions, &colors)), ["e3", "e5"]);
    }
}
