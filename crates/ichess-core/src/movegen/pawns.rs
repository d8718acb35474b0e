//! Pawn move generation.

use crate::color::Color;
use crate::error::MoveGenError;
use crate::piece_kind::PieceKind;
use crate::properties::GameProperties;
use crate::square::Square;

use super::{Occupancy, SquareList};

/// Generate pawn moves in a fixed order: single push, double push, capture
/// toward the a-file, capture toward the h-file, en passant toward the a-file,
/// en passant toward the h-file.
///
/// En passant is judged from `props` alone: the last move must have started one
/// rank beyond the target square and ended one rank behind it, on the ply right
/// after a pawn move. Whether a pawn actually stands on the passed square is the
/// caller's responsibility.
pub(super) fn gen_pawn(
    from: Square,
    us: Color,
    occupancy: &Occupancy<'_>,
    props: &GameProperties,
    list: &mut SquareList,
) -> Result<(), MoveGenError> {
    let (dir, start_rank): (i8, char) = match us {
        Color::White => (1, '2'),
        Color::Black => (-1, '7'),
        Color::None => {
            return Err(MoveGenError::InvalidColor {
                kind: PieceKind::Pawn,
                square: from,
            });
        }
    };

    // --- Pushes ---
    if let Some(single) = from.offset(0, dir)
        && !occupancy.is_occupied(single)
    {
        list.push(single);

        if from.rank() == start_rank
            && let Some(double) = single.offset(0, dir)
            && !occupancy.is_occupied(double)
        {
            list.push(double);
        }
    }

    // --- Captures ---
    for side in [-1, 1] {
        if let Some(target) = from.offset(side, dir)
            && occupancy
                .color_at(target)
                .is_some_and(|them| us.is_opponent_of(them))
        {
            list.push(target);
        }
    }

    // --- En passant ---
    if props.pawn_just_moved() {
        for side in [-1, 1] {
            let Some(target) = from.offset(side, dir) else {
                continue;
            };
            let passed_end = target.offset(0, -dir);
            let passed_start = target.offset(0, dir);
            if passed_end == Some(props.last_move_end) && passed_start == Some(props.last_move_start) {
                list.push(target);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pawn_moves(
        from: Square,
        us: Color,
        positions: &[Square],
        colors: &[Color],
        props: &GameProperties,
    ) -> Vec<Square> {
        let mut list = SquareList::new();
        gen_pawn(from, us, &Occupancy::new(positions, colors), props, &mut list).unwrap();
        list.as_slice().to_vec()
    }

    fn after_double_step(start: Square, end: Square) -> GameProperties {
        GameProperties {
            last_move_start: start,
            last_move_end: end,
            turns_since_pawn_move: Some(0),
            ..GameProperties::default()
        }
    }

    #[test]
    fn start_rank_single_and_double() {
        let props = GameProperties::default();
        assert_eq!(pawn_moves(Square::E2, Color::White, &[], &[], &props), [Square::E3, Square::E4]);
        assert_eq!(pawn_moves(Square::E7, Color::Black, &[], &[], &props), [Square::E6, Square::E5]);
    }

    #[test]
    fn no_double_step_off_start_rank() {
        let props = GameProperties::default();
        assert_eq!(pawn_moves(Square::E4, Color::White, &[], &[], &props), [Square::E5]);
        assert_eq!(pawn_moves(Square::E5, Color::Black, &[], &[], &props), [Square::E4]);
    }

    #[test]
    fn blocked_single_step_forbids_double() {
        let props = GameProperties::default();
        let moves = pawn_moves(Square::E2, Color::White, &[Square::E3], &[Color::Black], &props);
        assert!(moves.is_empty());
    }

    #[test]
    fn blocked_double_step_keeps_single() {
        let props = GameProperties::default();
        let moves = pawn_moves(Square::D7, Color::Black, &[Square::D5], &[Color::White], &props);
        assert_eq!(moves, [Square::D6]);
    }

    #[test]
    fn diagonal_captures_follow_pushes() {
        let props = GameProperties::default();
        let moves = pawn_moves(
            Square::E2,
            Color::White,
            &[Square::D3, Square::F3],
            &[Color::Black, Color::Black],
            &props,
        );
        assert_eq!(moves, [Square::E3, Square::E4, Square::D3, Square::F3]);

        let moves = pawn_moves(
            Square::E7,
            Color::Black,
            &[Square::D6, Square::F6],
            &[Color::White, Color::White],
            &props,
        );
        assert_eq!(moves, [Square::E6, Square::E5, Square::D6, Square::F6]);
    }

    #[test]
    fn own_pieces_are_never_captured() {
        let props = GameProperties::default();
        let moves = pawn_moves(
            Square::E2,
            Color::White,
            &[Square::D3, Square::F3, Square::E4],
            &[Color::White; 3],
            &props,
        );
        assert_eq!(moves, [Square::E3]);
    }

    #[test]
    fn edge_file_pawn_has_one_capture_side() {
        let props = GameProperties::default();
        let moves = pawn_moves(Square::A2, Color::White, &[Square::B3], &[Color::Black], &props);
        assert_eq!(moves, [Square::A3, Square::A4, Square::B3]);
    }

    #[test]
    fn last_rank_pawn_has_no_moves() {
        let props = GameProperties::default();
        assert!(pawn_moves(Square::C8, Color::White, &[], &[], &props).is_empty());
        assert!(pawn_moves(Square::C1, Color::Black, &[], &[], &props).is_empty());
    }

    #[test]
    fn en_passant_both_colors() {
        let props = after_double_step(Square::D7, Square::D5);
        let moves = pawn_moves(Square::E5, Color::White, &[Square::D5], &[Color::Black], &props);
        assert_eq!(moves, [Square::E6, Square::D6]);

        let props = after_double_step(Square::D2, Square::D4);
        let moves = pawn_moves(Square::E4, Color::Black, &[Square::D4], &[Color::White], &props);
        assert_eq!(moves, [Square::E3, Square::D3]);
    }

    #[test]
    fn en_passant_toward_h_file() {
        let props = after_double_step(Square::F7, Square::F5);
        let moves = pawn_moves(Square::E5, Color::White, &[Square::F5], &[Color::Black], &props);
        assert_eq!(moves, [Square::E6, Square::F6]);
    }

    #[test]
    fn en_passant_expires_after_one_ply() {
        let mut props = after_double_step(Square::D7, Square::D5);
        props.turns_since_pawn_move = Some(1);
        let moves = pawn_moves(Square::E5, Color::White, &[Square::D5], &[Color::Black], &props);
        assert_eq!(moves, [Square::E6]);
    }

    #[test]
    fn en_passant_needs_a_double_step() {
        let props = after_double_step(Square::D6, Square::D5);
        let moves = pawn_moves(Square::E5, Color::White, &[Square::D5], &[Color::Black], &props);
        assert_eq!(moves, [Square::E6]);
    }

    #[test]
    fn no_en_passant_at_game_start() {
        let props = GameProperties {
            turns_since_pawn_move: Some(0),
            ..GameProperties::default()
        };
        for sq in Square::all() {
            for color in Color::ALL {
                let moves = pawn_moves(sq, color, &[], &[], &props);
                assert!(moves.len() <= 2, "{color} pawn on {sq} produced {moves:?}");
            }
        }
    }

    #[test]
    fn colorless_pawn_fails_fast() {
        let mut list = SquareList::new();
        let result = gen_pawn(
            Square::E2,
            Color::None,
            &Occupancy::new(&[], &[]),
            &GameProperties::default(),
            &mut list,
        );
        assert_eq!(
            result,
            Err(MoveGenError::InvalidColor {
                kind: PieceKind::Pawn,
                square: Square::E2,
            })
        );
        assert!(list.is_empty());
    }
}
