//! The board: owns the pieces in play, a derived glyph grid, and the captured-piece trays.

use std::fmt;

use tracing::debug;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::snapshot::Snapshot;
use crate::square::Square;

/// Glyph of an empty grid cell.
pub const EMPTY_GLYPH: char = ' ';

/// Most pieces a side can lose.
pub const TRAY_CAPACITY: usize = 16;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Stable handle to a piece owned by a [`Board`].
///
/// Handles are never reused: once a piece leaves play its handle stops
/// resolving, even after the slot is recycled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId {
    index: u32,
    generation: u32,
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "piece #{}.{}", self.index, self.generation)
    }
}

#[derive(Clone, PartialEq, Eq)]
struct Slot {
    generation: u32,
    piece: Option<Piece>,
}

/// Pieces in play stored in an arena of slots, plus a display grid.
///
/// The grid is derived data: it only reflects the pieces after
/// [`update_grid`](Board::update_grid) and is never consulted for occupancy.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    slots: Vec<Slot>,
    /// Indices of empty slots, reused before the arena grows.
    free: Vec<u32>,
    /// Glyphs indexed by `[rank][file]`, rank 1 first.
    grid: [[char; 8]; 8],
    /// Captured pieces, indexed by color (White first).
    trays: [Vec<Piece>; Color::COUNT],
}

impl Board {
    /// Return an empty board.
    pub fn new() -> Board {
        Board {
            slots: Vec::new(),
            free: Vec::new(),
            grid: [[EMPTY_GLYPH; 8]; 8],
            trays: [Vec::new(), Vec::new()],
        }
    }

    /// Return a board holding the standard starting position.
    pub fn standard() -> Board {
        let mut board = Board::new();
        board.initialize_standard_setup();
        board
    }

    /// Take ownership of `piece` and return its handle.
    ///
    /// The grid is not refreshed; call [`update_grid`](Board::update_grid).
    pub fn add_piece(&mut self, piece: Piece) -> Result<PieceId, BoardError> {
        if !piece.color().is_playing() {
            return Err(BoardError::ColorlessPiece { kind: piece.kind() });
        }

        let id = self.insert(piece);
        debug!(%id, %piece, "piece added");
        Ok(id)
    }

    /// Take a piece out of play, ending its life on the board.
    pub fn remove_piece(&mut self, id: PieceId) -> Option<Piece> {
        let slot = self.live_slot_mut(id)?;
        let piece = slot.piece.take();
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        debug!(%id, "piece removed");
        piece
    }

    /// Move a piece in play to its owner's captured-piece tray.
    pub fn capture(&mut self, id: PieceId) -> Result<(), BoardError> {
        let piece = *self.piece(id).ok_or(BoardError::UnknownPiece { id })?;
        let color = piece.color();
        let Some(tray) = color.index() else {
            return Err(BoardError::ColorlessPiece { kind: piece.kind() });
        };
        if self.trays[tray].len() >= TRAY_CAPACITY {
            return Err(BoardError::TrayFull { color });
        }

        if let Some(mut captured) = self.remove_piece(id) {
            captured.set_position(' ', ' ');
            self.trays[tray].push(captured);
            debug!(%id, %color, "piece captured");
        }
        Ok(())
    }

    /// Return the pieces of `color` that have been captured, oldest first.
    pub fn captured(&self, color: Color) -> &[Piece] {
        match color.index() {
            Some(tray) => &self.trays[tray],
            None => &[],
        }
    }

    /// Return the piece behind `id`, if it is still in play.
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.piece.as_ref())
    }

    /// Reposition a piece in play. The grid is not refreshed.
    pub fn set_position(&mut self, id: PieceId, square: Square) -> Result<(), BoardError> {
        let piece = self
            .live_slot_mut(id)
            .and_then(|slot| slot.piece.as_mut())
            .ok_or(BoardError::UnknownPiece { id })?;
        piece.set_position(square.file(), square.rank());
        Ok(())
    }

    /// Return the handle of the piece standing on `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<PieceId> {
        if !square.is_in_grid_range() {
            return None;
        }
        self.pieces()
            .find(|(_, piece)| piece.position() == square)
            .map(|(id, _)| id)
    }

    /// Iterate over the pieces in play with their handles.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.piece.as_ref().map(|piece| {
                (
                    PieceId {
                        index: index as u32,
                        generation: slot.generation,
                    },
                    piece,
                )
            })
        })
    }

    /// Number of pieces in play.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.piece.is_some()).count()
    }

    /// Return `true` if no piece is in play.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Positions and colors of every piece in play except `id`.
    ///
    /// Returns `None` if `id` is not in play.
    pub fn snapshot_without(&self, id: PieceId) -> Option<Snapshot> {
        self.piece(id)?;
        Some(
            self.pieces()
                .filter(|&(other, _)| other != id)
                .map(|(_, piece)| (piece.position(), piece.color()))
                .collect(),
        )
    }

    /// Take every piece out of play, empty both trays, and blank the grid.
    ///
    /// Handles issued before the call stop resolving.
    pub fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.piece.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index as u32);
            }
        }
        for tray in &mut self.trays {
            tray.clear();
        }
        self.clear_grid();
    }

    /// Blank every grid cell.
    pub fn clear_grid(&mut self) {
        self.grid = [[EMPTY_GLYPH; 8]; 8];
    }

    /// Rebuild the whole grid from the pieces in play.
    pub fn update_grid(&mut self) {
        self.clear_grid();
        for slot in &self.slots {
            if let Some(piece) = &slot.piece
                && let Some((file, rank)) = piece.position().indices()
            {
                self.grid[rank][file] = piece.representation();
            }
        }
    }

    /// Return the grid glyph for `square` as of the last [`update_grid`](Board::update_grid).
    pub fn glyph_at(&self, square: Square) -> char {
        match square.indices() {
            Some((file, rank)) => self.grid[rank][file],
            None => EMPTY_GLYPH,
        }
    }

    /// Replace everything with the 32 pieces of the standard starting position.
    pub fn initialize_standard_setup(&mut self) {
        self.clear();

        for (color, back, front) in [(Color::White, '1', '2'), (Color::Black, '8', '7')] {
            for (file, kind) in ('a'..='h').zip(BACK_RANK) {
                self.insert(Piece::new(kind, color, file, back));
                self.insert(Piece::pawn(file, front, color));
            }
        }

        self.update_grid();
        debug!(pieces = self.len(), "standard setup initialized");
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }

    /// Print the board diagram to standard output.
    pub fn display(&self) {
        println!("{}", self.pretty());
    }

    fn insert(&mut self, piece: Piece) -> PieceId {
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.piece = Some(piece);
                PieceId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    piece: Some(piece),
                });
                PieceId { index, generation: 0 }
            }
        }
    }

    fn live_slot_mut(&mut self, id: PieceId) -> Option<&mut Slot> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation && slot.piece.is_some())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("pieces", &self.pieces().map(|(_, piece)| piece).collect::<Vec<_>>())
            .field("captured_white", &self.trays[0])
            .field("captured_black", &self.trays[1])
            .finish()
    }
}

const BORDER: &str = "  +---+---+---+---+---+---+---+---+";

/// Wrapper for pretty-printing a board as a bordered 8x8 diagram.
///
/// Captured white pieces are listed above the board, captured black pieces below.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        write_tray(f, board.captured(Color::White))?;
        writeln!(f)?;
        for row in 0..8 {
            writeln!(f, "{BORDER}")?;
            write!(f, "{} |", 8 - row)?;
            for col in 0..8 {
                let glyph = board.grid[7 - row][col];
                if (row + col) % 2 == 0 {
                    write!(f, " {glyph} |")?;
                } else {
                    write!(f, "-{glyph}-|")?;
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "{BORDER}")?;
        writeln!(f, "    a   b   c   d   e   f   g   h")?;
        writeln!(f)?;
        write_tray(f, board.captured(Color::Black))
    }
}

fn write_tray(f: &mut fmt::Formatter<'_>, tray: &[Piece]) -> fmt::Result {
    for piece in tray {
        write!(f, "{}", piece.representation())?;
    }
    Ok(())
}
