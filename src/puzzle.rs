//! Core puzzle types: sticker colors, face grids and instructions.
//!
//! A puzzle input is six N×N face grids plus an ordered instruction list.
//! Faces are always handled in the fixed input order base, back, top,
//! front, left, right; the diagnosis search enumerates positions and
//! candidate colors in exactly that order.

use std::fmt;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A sticker color: one symbol from the input alphabet, or unset.
///
/// Interior lattice cells and inward-facing slots stay `Unset`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[default]
    Unset,
    Sym(char),
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Unset => write!(f, "?"),
            Color::Sym(c) => write!(f, "{c}"),
        }
    }
}

/// One of the six named faces, in input / enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceName {
    Base,
    Back,
    Top,
    Front,
    Left,
    Right,
}

impl FaceName {
    /// The fixed input order: base, back, top, front, left, right.
    pub const ALL: [FaceName; 6] = [
        FaceName::Base,
        FaceName::Back,
        FaceName::Top,
        FaceName::Front,
        FaceName::Left,
        FaceName::Right,
    ];

    pub fn parse(s: &str) -> Option<FaceName> {
        match s {
            "base" => Some(FaceName::Base),
            "back" => Some(FaceName::Back),
            "top" => Some(FaceName::Top),
            "front" => Some(FaceName::Front),
            "left" => Some(FaceName::Left),
            "right" => Some(FaceName::Right),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FaceName::Base => "base",
            FaceName::Back => "back",
            FaceName::Top => "top",
            FaceName::Front => "front",
            FaceName::Left => "left",
            FaceName::Right => "right",
        }
    }
}

impl fmt::Display for FaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction of a targeted row/column shift. Left/right shift a row,
/// up/down shift a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftDir {
    Left,
    Right,
    Up,
    Down,
}

impl ShiftDir {
    pub fn parse(s: &str) -> Option<ShiftDir> {
        match s {
            "left" => Some(ShiftDir::Left),
            "right" => Some(ShiftDir::Right),
            "up" => Some(ShiftDir::Up),
            "down" => Some(ShiftDir::Down),
            _ => None,
        }
    }
}

/// An N×N grid of colors, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceGrid {
    n: usize,
    cells: Vec<Color>,
}

impl FaceGrid {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            cells: vec![Color::Unset; n * n],
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn get(&self, r: usize, c: usize) -> Color {
        self.cells[r * self.n + c]
    }

    pub fn set(&mut self, r: usize, c: usize, color: Color) {
        self.cells[r * self.n + c] = color;
    }

    /// A face is uniform if every cell equals its (0, 0) cell.
    pub fn is_uniform(&self) -> bool {
        self.cells.iter().all(|&c| c == self.cells[0])
    }

    /// Cyclic shift of one row (left/right) or column (up/down) by a
    /// single step. `index` is the 0-based row or column number.
    pub fn shift(&mut self, index: usize, dir: ShiftDir) {
        let n = self.n;
        let mut buf: SmallVec<[Color; 8]> = SmallVec::with_capacity(n);
        match dir {
            ShiftDir::Left | ShiftDir::Right => {
                buf.extend((0..n).map(|j| self.get(index, j)));
                for j in 0..n {
                    let src = match dir {
                        ShiftDir::Left => (j + 1) % n,
                        _ => (j + n - 1) % n,
                    };
                    self.set(index, j, buf[src]);
                }
            }
            ShiftDir::Up | ShiftDir::Down => {
                buf.extend((0..n).map(|i| self.get(i, index)));
                for i in 0..n {
                    let src = match dir {
                        ShiftDir::Up => (i + 1) % n,
                        _ => (i + n - 1) % n,
                    };
                    self.set(i, index, buf[src]);
                }
            }
        }
    }
}

/// The six face grids of one puzzle coloring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceSet {
    n: usize,
    grids: [FaceGrid; 6],
}

impl FaceSet {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            grids: std::array::from_fn(|_| FaceGrid::new(n)),
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn get(&self, face: FaceName) -> &FaceGrid {
        &self.grids[face as usize]
    }

    pub fn get_mut(&mut self, face: FaceName) -> &mut FaceGrid {
        &mut self.grids[face as usize]
    }

    pub fn any_uniform(&self) -> bool {
        self.grids.iter().any(FaceGrid::is_uniform)
    }

    /// Distinct colors across all faces, in first-encountered order over
    /// the fixed face/row/column enumeration.
    pub fn palette(&self) -> SmallVec<[Color; 8]> {
        let mut colors: SmallVec<[Color; 8]> = SmallVec::new();
        for (face, r, c) in self.positions() {
            let color = self.get(face).get(r, c);
            if !colors.contains(&color) {
                colors.push(color);
            }
        }
        colors
    }

    /// Every facelet position, face order then row-major.
    pub fn positions(&self) -> impl Iterator<Item = (FaceName, usize, usize)> + '_ {
        let n = self.n;
        FaceName::ALL
            .into_iter()
            .flat_map(move |face| (0..n).flat_map(move |r| (0..n).map(move |c| (face, r, c))))
    }

    /// Clone with a single cell replaced.
    pub fn with_cell(&self, face: FaceName, r: usize, c: usize, color: Color) -> FaceSet {
        let mut corrected = self.clone();
        corrected.get_mut(face).set(r, c, color);
        corrected
    }
}

/// Whether unrecognized instruction lines are kept as replay no-ops
/// (reference behavior) or rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsePolicy {
    Permissive,
    Strict,
}

/// A parsed instruction operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    TurnLeft,
    TurnRight,
    RotateFront,
    RotateBack,
    RotateLeft,
    RotateRight,
    /// Targeted row/column shift on one face. `index` is 0-based.
    Shift {
        face: FaceName,
        index: usize,
        dir: ShiftDir,
    },
    /// Kept only under `ParsePolicy::Permissive`; replays as a no-op.
    Unrecognized,
}

/// One instruction line: the parsed operation plus the original text,
/// which the output protocol echoes verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub op: Op,
    pub text: String,
}

impl Instruction {
    /// Parse one instruction line against a cube of size `n`.
    ///
    /// A targeted index outside [1, N] is an error under both policies.
    pub fn parse(line: &str, n: usize, policy: ParsePolicy) -> Result<Instruction> {
        let text = line.trim().to_string();
        let op = match text.as_str() {
            "turn left" => Op::TurnLeft,
            "turn right" => Op::TurnRight,
            "rotate front" => Op::RotateFront,
            "rotate back" => Op::RotateBack,
            "rotate left" => Op::RotateLeft,
            "rotate right" => Op::RotateRight,
            other => Self::parse_shift(other, n, policy)?,
        };
        Ok(Instruction { op, text })
    }

    fn parse_shift(text: &str, n: usize, policy: ParsePolicy) -> Result<Op> {
        let parts: Vec<&str> = text.split_whitespace().collect();
        if parts.len() == 3 {
            let face = FaceName::parse(parts[0]);
            let index = parts[1].parse::<usize>().ok();
            let dir = ShiftDir::parse(parts[2]);
            if let (Some(face), Some(index), Some(dir)) = (face, index, dir) {
                if index < 1 || index > n {
                    bail!("row/column index {index} out of range 1..={n} in instruction {text:?}");
                }
                return Ok(Op::Shift {
                    face,
                    index: index - 1,
                    dir,
                });
            }
        }
        match policy {
            ParsePolicy::Permissive => Ok(Op::Unrecognized),
            ParsePolicy::Strict => bail!("unrecognized instruction {text:?}"),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(c: char) -> Color {
        Color::Sym(c)
    }

    fn fill(grid: &mut FaceGrid, rows: &[&str]) {
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                grid.set(r, c, sym(ch));
            }
        }
    }

    #[test]
    fn test_parse_whole_cube_commands() {
        let cases = [
            ("turn left", Op::TurnLeft),
            ("turn right", Op::TurnRight),
            ("rotate front", Op::RotateFront),
            ("rotate back", Op::RotateBack),
            ("rotate left", Op::RotateLeft),
            ("rotate right", Op::RotateRight),
        ];
        for (text, op) in cases {
            let instr = Instruction::parse(text, 3, ParsePolicy::Strict).unwrap();
            assert_eq!(instr.op, op);
            assert_eq!(instr.to_string(), text);
        }
    }

    #[test]
    fn test_parse_shift_is_one_indexed() {
        let instr = Instruction::parse("front 2 up", 3, ParsePolicy::Strict).unwrap();
        assert_eq!(
            instr.op,
            Op::Shift {
                face: FaceName::Front,
                index: 1,
                dir: ShiftDir::Up,
            }
        );
    }

    #[test]
    fn test_parse_shift_index_out_of_range() {
        assert!(Instruction::parse("front 4 up", 3, ParsePolicy::Permissive).is_err());
        assert!(Instruction::parse("front 0 left", 3, ParsePolicy::Permissive).is_err());
        assert!(Instruction::parse("front 4 up", 3, ParsePolicy::Strict).is_err());
    }

    #[test]
    fn test_parse_policy_for_unrecognized() {
        let instr = Instruction::parse("wiggle 1 around", 3, ParsePolicy::Permissive).unwrap();
        assert_eq!(instr.op, Op::Unrecognized);
        assert_eq!(instr.text, "wiggle 1 around");

        assert!(Instruction::parse("wiggle 1 around", 3, ParsePolicy::Strict).is_err());
    }

    #[test]
    fn test_row_and_column_shifts() {
        let mut grid = FaceGrid::new(3);
        fill(&mut grid, &["ABC", "DEF", "GHI"]);

        grid.shift(0, ShiftDir::Left);
        assert_eq!(
            (grid.get(0, 0), grid.get(0, 1), grid.get(0, 2)),
            (sym('B'), sym('C'), sym('A'))
        );
        grid.shift(0, ShiftDir::Right);
        assert_eq!(
            (grid.get(0, 0), grid.get(0, 1), grid.get(0, 2)),
            (sym('A'), sym('B'), sym('C'))
        );

        grid.shift(1, ShiftDir::Up);
        assert_eq!(
            (grid.get(0, 1), grid.get(1, 1), grid.get(2, 1)),
            (sym('E'), sym('H'), sym('B'))
        );
        grid.shift(1, ShiftDir::Down);
        assert_eq!(
            (grid.get(0, 1), grid.get(1, 1), grid.get(2, 1)),
            (sym('B'), sym('E'), sym('H'))
        );
    }

    #[test]
    fn test_uniform_detection() {
        let mut grid = FaceGrid::new(2);
        fill(&mut grid, &["RR", "RR"]);
        assert!(grid.is_uniform());
        grid.set(1, 1, sym('G'));
        assert!(!grid.is_uniform());
    }

    #[test]
    fn test_palette_first_encountered_order() {
        let mut faces = FaceSet::new(1);
        faces.get_mut(FaceName::Base).set(0, 0, sym('R'));
        faces.get_mut(FaceName::Back).set(0, 0, sym('G'));
        faces.get_mut(FaceName::Top).set(0, 0, sym('R'));
        faces.get_mut(FaceName::Front).set(0, 0, sym('B'));
        faces.get_mut(FaceName::Left).set(0, 0, sym('G'));
        faces.get_mut(FaceName::Right).set(0, 0, sym('W'));

        let palette: Vec<Color> = faces.palette().into_iter().collect();
        assert_eq!(palette, vec![sym('R'), sym('G'), sym('B'), sym('W')]);
    }

    #[test]
    fn test_positions_enumeration_order() {
        let faces = FaceSet::new(2);
        let positions: Vec<_> = faces.positions().collect();
        assert_eq!(positions.len(), 24);
        assert_eq!(positions[0], (FaceName::Base, 0, 0));
        assert_eq!(positions[1], (FaceName::Base, 0, 1));
        assert_eq!(positions[2], (FaceName::Base, 1, 0));
        assert_eq!(positions[4], (FaceName::Back, 0, 0));
        assert_eq!(positions[23], (FaceName::Right, 1, 1));
    }

    #[test]
    fn test_with_cell_leaves_original_untouched() {
        let mut faces = FaceSet::new(1);
        faces.get_mut(FaceName::Front).set(0, 0, sym('R'));

        let corrected = faces.with_cell(FaceName::Front, 0, 0, sym('G'));
        assert_eq!(corrected.get(FaceName::Front).get(0, 0), sym('G'));
        assert_eq!(faces.get(FaceName::Front).get(0, 0), sym('R'));
    }
}
