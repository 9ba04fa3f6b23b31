//! End-of-game scoring: dead-stone marking and territory counting.
//!
//! Scoring never touches the live snapshot. Dead stones are removed from a
//! scratch copy of the board, each one credited to its opponent as a
//! capture, and every remaining empty region bordered by a single color
//! counts as that color's territory.

use rustc_hash::FxHashSet;

use crate::board::{Board, Point, Stone};
use crate::state::BoardState;

/// Stones marked dead for scoring.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeadStones {
    points: FxHashSet<Point>,
}

impl DeadStones {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    pub fn insert(&mut self, p: Point) -> bool {
        self.points.insert(p)
    }

    pub fn remove(&mut self, p: Point) -> bool {
        self.points.remove(&p)
    }

    /// Mark the whole group at `p` dead, or revive it if `p` is already marked.
    ///
    /// Empty points are ignored. Returns true if the group is now marked dead.
    pub fn toggle_group(&mut self, board: &Board, p: Point) -> bool {
        if board.get(p).is_none() {
            return false;
        }
        let group = board.group(p);
        if self.contains(p) {
            for s in group {
                self.points.remove(&s);
            }
            false
        } else {
            self.points.extend(group);
            true
        }
    }
}

impl FromIterator<Point> for DeadStones {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// Final tally.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreResult {
    /// Captures plus territory.
    pub black: f64,
    /// Captures plus territory plus komi.
    pub white: f64,
    /// `None` on an exact tie, only possible with an integer komi.
    pub winner: Option<Stone>,
    /// Territory points in row-major discovery order.
    pub black_territory: Vec<Point>,
    pub white_territory: Vec<Point>,
}

impl BoardState {
    /// Score the position with `dead` stones removed.
    ///
    /// Pure: the snapshot is left untouched and equal inputs give equal results.
    pub fn score(&self, dead: &DeadStones) -> ScoreResult {
        let mut board = self.board().clone();
        let mut black = f64::from(self.captures().black);
        let mut white = f64::from(self.captures().white);

        for p in dead.iter() {
            match board.get(p) {
                Some(Stone::Black) => white += 1.0,
                Some(Stone::White) => black += 1.0,
                None => continue,
            }
            board.set(p, None);
        }

        let (black_territory, white_territory) = territory(&board);
        black += black_territory.len() as f64;
        white += white_territory.len() as f64 + self.komi();

        let winner = if black > white {
            Some(Stone::Black)
        } else if white > black {
            Some(Stone::White)
        } else {
            None
        };

        ScoreResult {
            black,
            white,
            winner,
            black_territory,
            white_territory,
        }
    }
}

/// Split the empty regions of `board` into black and white territory.
fn territory(board: &Board) -> (Vec<Point>, Vec<Point>) {
    let mut visited = FxHashSet::default();
    let mut black = Vec::new();
    let mut white = Vec::new();

    for p in board.points() {
        if board.get(p).is_some() || visited.contains(&p) {
            continue;
        }
        let region = board.group(p);
        let mut owners = FxHashSet::default();
        for &r in &region {
            visited.insert(r);
            owners.extend(board.neighbors(r).filter_map(|n| board.get(n)));
        }
        let mut owners = owners.into_iter();
        match (owners.next(), owners.next()) {
            (Some(Stone::Black), None) => black.extend(region),
            (Some(Stone::White), None) => white.extend(region),
            _ => {}
        }
    }

    (black, white)
}
