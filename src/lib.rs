//! Fault diagnosis for a rotating N×N×N cube puzzle.
//!
//! Given an initial coloring of the six faces and an ordered list of
//! rotation instructions, this crate decides whether discarding exactly
//! one instruction — optionally after correcting exactly one mis-colored
//! input facelet — reaches a state with at least one monochromatic face.

pub mod cube;
pub mod executor;
pub mod input;
pub mod puzzle;
pub mod solver;

// Re-export main types
pub use cube::{facelet_target, Axis, Cube, Cubelet, Slot, Spin};
pub use executor::{apply, replay_skipping};
pub use input::{parse, PuzzleInput};
pub use puzzle::{
    Color, FaceGrid, FaceName, FaceSet, Instruction, Op, ParsePolicy, ShiftDir,
};
pub use solver::{
    analyze, correction_search, skip_search, AnalysisReport, AnalysisResult, Correction,
};
