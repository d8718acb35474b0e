//! Line-oriented console session over a board and its game properties.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use ichess_core::{Board, GameProperties, MovedFlags, Piece, PieceKind, Square, SquareList};

use crate::command::{Command, HELP, Setting, parse_command};
use crate::config::SessionConfig;
use crate::error::ConsoleError;

/// Whether the session keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// An interactive session: a board, the game properties that go with it, and
/// the session settings.
///
/// Turn order is not enforced; either side may move at any time.
pub struct Session {
    board: Board,
    props: GameProperties,
    config: SessionConfig,
}

impl Session {
    /// Create a session on the standard starting position.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Create a session on the standard starting position with custom settings.
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            board: Board::standard(),
            props: GameProperties::default(),
            config,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn properties(&self) -> &GameProperties {
        &self.props
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Read commands from `input` until `quit` or end of input, writing
    /// results to `output`.
    ///
    /// Command errors are reported on `output` and the session continues;
    /// only I/O failures end it early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<(), ConsoleError> {
        info!("console session started");

        let mut lines = input.lines();
        loop {
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received console command");

            match parse_command(trimmed).and_then(|cmd| self.execute(cmd, output)) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    warn!(error = %e, "console command failed");
                    writeln!(output, "error: {e}")?;
                }
            }
        }

        info!("console session ended");
        Ok(())
    }

    /// Execute one parsed command.
    pub fn execute<W: Write>(&mut self, command: Command, output: &mut W) -> Result<Flow, ConsoleError> {
        let changed = match command {
            Command::Show => {
                writeln!(output, "{}", self.board.pretty())?;
                false
            }
            Command::Reset => {
                self.board.initialize_standard_setup();
                self.props = GameProperties::default();
                true
            }
            Command::Clear => {
                self.board.clear();
                self.props = GameProperties::default();
                true
            }
            Command::Place(piece) => {
                self.handle_place(piece)?;
                true
            }
            Command::Remove(square) => {
                self.handle_remove(square)?;
                true
            }
            Command::Moves(square) => {
                self.handle_moves(square, output)?;
                false
            }
            Command::Move { from, to } => {
                self.handle_move(from, to, output)?;
                true
            }
            Command::Props => {
                writeln!(output, "{}", self.props)?;
                false
            }
            Command::Set(setting) => {
                self.handle_set(setting, output)?;
                false
            }
            Command::Help => {
                writeln!(output, "{HELP}")?;
                false
            }
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(cmd) => {
                debug!(%cmd, "unknown console command");
                writeln!(output, "unknown command: {cmd} (try help)")?;
                false
            }
        };

        if changed && self.config.auto_show {
            writeln!(output, "{}", self.board.pretty())?;
        }
        Ok(Flow::Continue)
    }

    fn handle_place(&mut self, piece: Piece) -> Result<(), ConsoleError> {
        let square = piece.position();
        if self.board.piece_at(square).is_some() {
            return Err(ConsoleError::Occupied { square });
        }
        self.board.add_piece(piece)?;
        self.board.update_grid();
        Ok(())
    }

    fn handle_remove(&mut self, square: Square) -> Result<(), ConsoleError> {
        let id = self
            .board
            .piece_at(square)
            .ok_or(ConsoleError::EmptySquare { square })?;
        self.board.remove_piece(id);
        self.board.update_grid();
        Ok(())
    }

    /// Generate the destinations of the piece on `square`.
    fn destinations(&self, square: Square, list: &mut SquareList) -> Result<Piece, ConsoleError> {
        let empty = ConsoleError::EmptySquare { square };
        let Some(id) = self.board.piece_at(square) else {
            return Err(empty);
        };
        let (Some(piece), Some(snapshot)) = (self.board.piece(id), self.board.snapshot_without(id))
        else {
            return Err(empty);
        };
        piece.available_moves(list, snapshot.positions(), snapshot.colors(), &self.props)?;
        Ok(*piece)
    }

    fn handle_moves<W: Write>(&self, square: Square, output: &mut W) -> Result<(), ConsoleError> {
        let mut list = SquareList::new();
        let piece = self.destinations(square, &mut list)?;

        if list.is_empty() {
            writeln!(output, "{piece}: no moves")?;
        } else {
            let moves: Vec<String> = list.into_iter().map(|sq| sq.to_string()).collect();
            writeln!(output, "{piece}: {}", moves.join(" "))?;
        }
        Ok(())
    }

    fn handle_move<W: Write>(&mut self, from: Square, to: Square, output: &mut W) -> Result<(), ConsoleError> {
        let mut list = SquareList::new();
        let piece = self.destinations(from, &mut list)?;
        if !list.contains(to) {
            return Err(ConsoleError::IllegalDestination { from, to });
        }
        let Some(id) = self.board.piece_at(from) else {
            return Err(ConsoleError::EmptySquare { square: from });
        };

        // A pawn moving diagonally onto an empty square takes en passant.
        let victim_square = if self.board.piece_at(to).is_none()
            && piece.kind() == PieceKind::Pawn
            && to.file() != from.file()
        {
            Square::new(to.file(), from.rank())
        } else {
            to
        };
        let mut captured_on = None;
        if let Some(victim) = self.board.piece_at(victim_square) {
            let captured = self.board.piece(victim).copied();
            self.board.capture(victim)?;
            captured_on = Some(victim_square);
            if let Some(captured) = captured {
                writeln!(output, "{piece} takes {captured}")?;
            }
        }

        self.board.set_position(id, to)?;
        self.board.update_grid();
        self.record_move(piece.kind(), from, to, captured_on);

        writeln!(output, "{from}{to}")?;
        debug!(%piece, %from, %to, props = %self.props, "move applied");
        Ok(())
    }

    /// Advance the game properties after a move from `from` to `to`.
    fn record_move(&mut self, kind: PieceKind, from: Square, to: Square, captured_on: Option<Square>) {
        self.props.last_move_start = from;
        self.props.last_move_end = to;
        self.props.turns_since_pawn_move = if kind == PieceKind::Pawn {
            Some(0)
        } else {
            self.props.turns_since_pawn_move.map(|n| n.saturating_add(1))
        };
        self.props.moved = self.props.moved | MovedFlags::for_home_square(from);
        if let Some(square) = captured_on {
            self.props.moved = self.props.moved | MovedFlags::for_home_square(square);
        }
    }

    fn handle_set<W: Write>(&mut self, setting: Setting, output: &mut W) -> Result<(), ConsoleError> {
        match setting {
            Setting::AutoShow(on) => {
                self.config.auto_show = on;
                writeln!(output, "autoshow {}", if on { "on" } else { "off" })?;
            }
        }
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
