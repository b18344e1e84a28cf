//! Move history backed by full-board snapshots.

use std::fmt::Display;

use crate::board::{Board, Piece, Square};

/// One accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    from: Square,
    to: Square,
    captured: Option<Piece>,
    number: usize,
    notation: String,
}

impl MoveRecord {
    fn new(from: Square, to: Square, captured: Option<Piece>, number: usize) -> Self {
        Self {
            from,
            to,
            captured,
            number,
            notation: Self::notation_for(from, to),
        }
    }

    /// Coordinate notation for a move, e.g. `e2 to e4`.
    pub fn notation_for(from: Square, to: Square) -> String {
        format!("{from} to {to}")
    }

    pub fn from_square(&self) -> Square {
        self.from
    }

    pub fn to_square(&self) -> Square {
        self.to
    }

    /// The piece that stood on the destination square, if any.
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }

    /// 1-based position of this move in the game.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn notation(&self) -> &str {
        &self.notation
    }
}

impl Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.number, self.notation)
    }
}

/// Snapshots of the board at every ply boundary, and the moves between
/// them.
///
/// `snapshots[0]` is the initial position and `snapshots[i]` is the
/// position after `records[i - 1]`, so there is always exactly one more
/// snapshot than there are records once a move has been recorded and its
/// snapshot taken.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Board>,
    records: Vec<MoveRecord>,
}

impl History {
    pub fn new(initial: &Board) -> Self {
        Self {
            snapshots: vec![*initial],
            records: Vec::new(),
        }
    }

    /// Appends a copy of `board` to the snapshots.
    pub fn snapshot(&mut self, board: &Board) {
        self.snapshots.push(*board);
    }

    /// Appends a record for a move from `from` to `to`.
    pub fn record_move(
        &mut self,
        from: Square,
        to: Square,
        captured: Option<Piece>,
    ) -> &MoveRecord {
        let number = self.records.len() + 1;
        self.records.push(MoveRecord::new(from, to, captured, number));
        &self.records[number - 1]
    }

    /// Drops the latest snapshot and move record, returning the position to
    /// restore.
    ///
    /// Returns [`None`] and leaves the history unchanged if only the initial
    /// snapshot is left.
    pub fn undo(&mut self) -> Option<&Board> {
        if self.snapshots.len() <= 1 {
            return None;
        }

        self.snapshots.pop();
        self.records.pop();
        self.snapshots.last()
    }

    /// Forgets every move and starts over from `initial`.
    pub fn reset(&mut self, initial: &Board) {
        self.snapshots.clear();
        self.records.clear();
        self.snapshots.push(*initial);
    }

    pub fn list(&self) -> &[MoveRecord] {
        &self.records
    }

    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    /// Number of recorded moves.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Display for History {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Move History:")?;
        for record in &self.records {
            writeln!(f, "{record}")?;
        }
        Ok(())
    }
}
