//! Reader for the plain-text puzzle protocol.
//!
//! ```text
//! N K
//! <N rows of N color tokens>   (base, back, top, front, left, right)
//! <K instruction lines>
//! ```
//!
//! Blank lines between blocks are tolerated. Input that ends before the
//! required line counts are satisfied, or a face row with fewer than N
//! tokens, is a fatal error.

use anyhow::{bail, Context, Result};

use crate::puzzle::{Color, FaceName, FaceSet, Instruction, ParsePolicy};

/// A fully parsed puzzle: size, initial coloring and instruction list.
#[derive(Debug, Clone)]
pub struct PuzzleInput {
    pub n: usize,
    pub faces: FaceSet,
    pub instructions: Vec<Instruction>,
}

/// Parse the whole input text under the given instruction policy.
pub fn parse(input: &str, policy: ParsePolicy) -> Result<PuzzleInput> {
    let mut lines = input.lines().map(str::trim).filter(|l| !l.is_empty());

    let header = lines.next().context("empty input, expected \"N K\" header")?;
    let mut header_tokens = header.split_whitespace();
    let n: usize = header_tokens
        .next()
        .context("missing cube size N in header")?
        .parse()
        .with_context(|| format!("bad cube size in header {header:?}"))?;
    let k: usize = header_tokens
        .next()
        .with_context(|| format!("missing instruction count K in header {header:?}"))?
        .parse()
        .with_context(|| format!("bad instruction count in header {header:?}"))?;
    if n == 0 {
        bail!("cube size must be at least 1");
    }

    let mut faces = FaceSet::new(n);
    for face in FaceName::ALL {
        for r in 0..n {
            let line = lines.next().with_context(|| {
                format!("input ended while reading row {} of the {face} face", r + 1)
            })?;
            let mut tokens = line.split_whitespace();
            for c in 0..n {
                let token = tokens.next().with_context(|| {
                    format!("row {} of the {face} face has fewer than {n} colors", r + 1)
                })?;
                let ch = token
                    .chars()
                    .next()
                    .with_context(|| format!("empty color token on the {face} face"))?;
                faces.get_mut(face).set(r, c, Color::Sym(ch));
            }
        }
    }

    let mut instructions = Vec::with_capacity(k);
    for i in 0..k {
        let line = lines
            .next()
            .with_context(|| format!("input ended at instruction {} of {k}", i + 1))?;
        instructions.push(Instruction::parse(line, n, policy)?);
    }

    Ok(PuzzleInput {
        n,
        faces,
        instructions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{Op, ShiftDir};

    const SAMPLE: &str = "\
2 2

R R
R R

G G
G G

B B
B B

Y Y
Y Y

O O
O O

W W
W W

turn left
front 2 down
";

    #[test]
    fn test_parse_sample() {
        let puzzle = parse(SAMPLE, ParsePolicy::Strict).unwrap();
        assert_eq!(puzzle.n, 2);
        assert_eq!(puzzle.faces.get(FaceName::Base).get(0, 0), Color::Sym('R'));
        assert_eq!(puzzle.faces.get(FaceName::Front).get(1, 1), Color::Sym('Y'));
        assert_eq!(puzzle.faces.get(FaceName::Right).get(0, 1), Color::Sym('W'));
        assert_eq!(puzzle.instructions.len(), 2);
        assert_eq!(puzzle.instructions[0].op, Op::TurnLeft);
        assert_eq!(
            puzzle.instructions[1].op,
            Op::Shift {
                face: FaceName::Front,
                index: 1,
                dir: ShiftDir::Down,
            }
        );
        assert_eq!(puzzle.instructions[1].text, "front 2 down");
    }

    #[test]
    fn test_short_face_row_is_fatal() {
        let input = "2 0\nR R\nR\n";
        let err = parse(input, ParsePolicy::Permissive).unwrap_err();
        assert!(err.to_string().contains("fewer than 2 colors"), "{err}");
    }

    #[test]
    fn test_truncated_input_is_fatal() {
        assert!(parse("", ParsePolicy::Permissive).is_err());
        assert!(parse("2 1\nR R\nR R\n", ParsePolicy::Permissive).is_err());

        // All six faces present but the promised instruction is missing.
        let missing_instruction = SAMPLE.replace("turn left\nfront 2 down\n", "turn left\n");
        let err = parse(&missing_instruction, ParsePolicy::Permissive).unwrap_err();
        assert!(err.to_string().contains("instruction 2 of 2"), "{err}");
    }

    #[test]
    fn test_index_out_of_range_is_fatal_in_both_policies() {
        let bad = SAMPLE.replace("front 2 down", "front 3 down");
        assert!(parse(&bad, ParsePolicy::Permissive).is_err());
        assert!(parse(&bad, ParsePolicy::Strict).is_err());
    }

    #[test]
    fn test_policy_controls_unrecognized_lines() {
        let garbled = SAMPLE.replace("front 2 down", "shake vigorously");
        assert!(parse(&garbled, ParsePolicy::Strict).is_err());

        let puzzle = parse(&garbled, ParsePolicy::Permissive).unwrap();
        assert_eq!(puzzle.instructions[1].op, Op::Unrecognized);
        assert_eq!(puzzle.instructions[1].text, "shake vigorously");
    }
}
