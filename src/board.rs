//! Board grid and the rule primitives that operate on it.
//!
//! Points are `(row, col)` pairs with `(0, 0)` in the top-left corner. Every
//! primitive here works on a plain [`Board`], so the rule engine can run them
//! on a scratch copy before committing a move.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::error::CoordError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stone::Black => write!(f, "Black"),
            Stone::White => write!(f, "White"),
        }
    }
}

/// A board coordinate as `(row, col)`.
pub type Point = (usize, usize);

/// A maximal 4-connected set of same-colored stones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub color: Stone,
    pub stones: Vec<Point>,
    pub liberties: usize,
}

/// An NxN grid of cells, each empty or holding one stone.
///
/// Two boards compare equal exactly when they hold the same stones, so a
/// `Board` doubles as the canonical whole-board snapshot for superko checks.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Stone>>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn idx(&self, (row, col): Point) -> usize {
        row * self.size + col
    }

    #[inline]
    pub fn in_bounds(&self, (row, col): Point) -> bool {
        row < self.size && col < self.size
    }

    /// Stone at `p`, or `None` if the point is empty or off the board.
    pub fn get(&self, p: Point) -> Option<Stone> {
        if !self.in_bounds(p) {
            return None;
        }
        self.cells[self.idx(p)]
    }

    pub(crate) fn set(&mut self, p: Point, cell: Option<Stone>) {
        let i = self.idx(p);
        self.cells[i] = cell;
    }

    /// True if no stone is on the board.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn stone_count(&self, color: Stone) -> usize {
        self.cells.iter().filter(|&&c| c == Some(color)).count()
    }

    /// All points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let s = self.size;
        (0..s).flat_map(move |row| (0..s).map(move |col| (row, col)))
    }

    /// In-bounds orthogonal neighbors of `p`.
    pub fn neighbors(&self, (row, col): Point) -> impl Iterator<Item = Point> + use<> {
        let s = self.size;
        let mut v = Vec::with_capacity(4);
        if row > 0 {
            v.push((row - 1, col));
        }
        if row + 1 < s {
            v.push((row + 1, col));
        }
        if col > 0 {
            v.push((row, col - 1));
        }
        if col + 1 < s {
            v.push((row, col + 1));
        }
        v.into_iter()
    }

    /// Flood fill from `start` over cells with the same contents as `start`.
    ///
    /// On a stone this is its group; on an empty point it is the connected
    /// empty region. Off-board starts yield an empty vector.
    pub fn group(&self, start: Point) -> Vec<Point> {
        if !self.in_bounds(start) {
            return Vec::new();
        }
        let mut visited = vec![false; self.size * self.size];
        self.fill(start, &mut visited)
    }

    fn fill(&self, start: Point, visited: &mut [bool]) -> Vec<Point> {
        let cell = self.get(start);
        let mut stack = vec![start];
        let mut out = Vec::new();
        visited[self.idx(start)] = true;
        while let Some(p) = stack.pop() {
            out.push(p);
            for n in self.neighbors(p) {
                let ni = self.idx(n);
                if !visited[ni] && self.get(n) == cell {
                    visited[ni] = true;
                    stack.push(n);
                }
            }
        }
        out
    }

    fn liberty_set(&self, stones: &[Point]) -> FxHashSet<Point> {
        stones
            .iter()
            .flat_map(|&p| self.neighbors(p))
            .filter(|&n| self.get(n).is_none())
            .collect()
    }

    /// Number of distinct empty points adjacent to the group containing `p`.
    ///
    /// Returns 0 when `p` is empty or off the board.
    pub fn liberties(&self, p: Point) -> usize {
        if self.get(p).is_none() {
            return 0;
        }
        self.liberty_set(&self.group(p)).len()
    }

    /// Remove every `color` group adjacent to `p` that has no liberties left.
    ///
    /// Each neighboring group is examined once even if it touches `p` on
    /// several sides. Returns the removed points.
    pub fn remove_dead_groups(&mut self, p: Point, color: Stone) -> Vec<Point> {
        let mut visited = vec![false; self.size * self.size];
        let mut removed = Vec::new();
        for n in self.neighbors(p) {
            if self.get(n) != Some(color) || visited[self.idx(n)] {
                continue;
            }
            let stones = self.fill(n, &mut visited);
            if self.liberty_set(&stones).is_empty() {
                removed.extend(stones);
            }
        }
        for &r in &removed {
            self.set(r, None);
        }
        removed
    }

    /// Every group on the board, discovered in row-major order.
    pub fn groups(&self) -> Vec<Group> {
        let mut visited = vec![false; self.size * self.size];
        let mut groups = Vec::new();
        for p in self.points() {
            let Some(color) = self.get(p) else {
                continue;
            };
            if visited[self.idx(p)] {
                continue;
            }
            let stones = self.fill(p, &mut visited);
            let liberties = self.liberty_set(&stones).len();
            groups.push(Group {
                color,
                stones,
                liberties,
            });
        }
        groups
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            write!(f, "{:>2} ", self.size - row)?;
            for col in 0..self.size {
                let ch = match self.get((row, col)) {
                    Some(Stone::Black) => 'X',
                    Some(Stone::White) => 'O',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, "{} ", column_letter(col))?;
        }
        writeln!(f)
    }
}

/// Column letter in Go notation (skips 'I').
fn column_letter(col: usize) -> char {
    let c = (b'A' + col as u8) as char;
    if c >= 'I' { (c as u8 + 1) as char } else { c }
}

/// Parse a Go coordinate such as `"D4"` on a board of the given size.
///
/// Columns are letters from `A`, skipping `I`; rows count up from the bottom.
pub fn parse_point(s: &str, size: usize) -> Result<Point, CoordError> {
    let s = s.trim();
    let malformed = || CoordError::Malformed(s.to_string());
    let mut chars = s.chars();
    let col_char = chars.next().ok_or_else(malformed)?.to_ascii_uppercase();
    if !col_char.is_ascii_uppercase() || col_char == 'I' {
        return Err(malformed());
    }
    let mut col = (col_char as u8 - b'A') as usize;
    if col_char > 'I' {
        col -= 1;
    }
    let number: usize = chars.as_str().parse().map_err(|_| malformed())?;
    if number == 0 || number > size || col >= size {
        return Err(CoordError::OffBoard {
            coord: s.to_string(),
            size,
        });
    }
    Ok((size - number, col))
}

/// Format a point in Go notation, e.g. `(5, 3)` on 9x9 is `"D4"`.
pub fn point_name((row, col): Point, size: usize) -> String {
    format!("{}{}", column_letter(col), size - row)
}
