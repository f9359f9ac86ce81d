//! Fault-diagnosis search over instruction skips and facelet corrections.
//!
//! Step 1 (`skip_search`) tries discarding each instruction in turn.
//! Step 2 (`correction_search`) additionally recolors one facelet before
//! rerunning Step 1. Both stop at the first success; the enumeration
//! order (skip index ascending; positions in face/row/column order;
//! candidate colors in first-encountered order) is the deterministic
//! tie-break when several hypotheses would solve the cube.

use std::time::Instant;

use crate::executor::replay_skipping;
use crate::puzzle::{Color, FaceName, FaceSet, Instruction};

/// The three-way diagnosis outcome. `discarded` is the index of the
/// spurious instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisResult {
    Solved { discarded: usize },
    FaultyColorAndInstruction { discarded: usize },
    NotPossible,
}

/// A successful Step 2 hypothesis: which facelet to recolor, to what,
/// and which instruction to discard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Correction {
    pub face: FaceName,
    pub row: usize,
    pub col: usize,
    pub color: Color,
    pub skip: usize,
}

/// Diagnosis outcome plus search accounting.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub result: AnalysisResult,
    pub hypotheses_tested: usize,
    pub time_elapsed_ms: u64,
}

/// Step 1: first skip index whose replay reaches a solved cube.
///
/// Every hypothesis builds its own cube from `faces`; `tested` counts
/// replays across the whole analysis.
pub fn skip_search(
    faces: &FaceSet,
    instructions: &[Instruction],
    tested: &mut usize,
) -> Option<usize> {
    for skip in 0..instructions.len() {
        *tested += 1;
        if replay_skipping(faces, instructions, Some(skip)).is_solved() {
            return Some(skip);
        }
    }
    None
}

/// Step 2: first (position, candidate color, skip) triple whose corrected
/// coloring passes the skip search.
pub fn correction_search(
    faces: &FaceSet,
    instructions: &[Instruction],
    tested: &mut usize,
) -> Option<Correction> {
    let palette = faces.palette();
    for (face, row, col) in faces.positions() {
        let original = faces.get(face).get(row, col);
        for &color in &palette {
            if color == original {
                continue;
            }
            let corrected = faces.with_cell(face, row, col, color);
            if let Some(skip) = skip_search(&corrected, instructions, tested) {
                return Some(Correction {
                    face,
                    row,
                    col,
                    color,
                    skip,
                });
            }
        }
    }
    None
}

/// Run the full diagnosis: instruction-only hypotheses first, then
/// color-plus-instruction hypotheses, else `NotPossible`.
pub fn analyze(faces: &FaceSet, instructions: &[Instruction]) -> AnalysisReport {
    let start = Instant::now();
    let mut tested: usize = 0;

    let result = if let Some(skip) = skip_search(faces, instructions, &mut tested) {
        AnalysisResult::Solved { discarded: skip }
    } else if let Some(correction) = correction_search(faces, instructions, &mut tested) {
        AnalysisResult::FaultyColorAndInstruction {
            discarded: correction.skip,
        }
    } else {
        AnalysisResult::NotPossible
    };

    AnalysisReport {
        result,
        hypotheses_tested: tested,
        time_elapsed_ms: start.elapsed().as_millis() as u64,
    }
}
