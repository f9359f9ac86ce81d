//! Instruction replay engine.
//!
//! Whole-cube instructions are rigid 3D rotations. Targeted instructions
//! are face-local cyclic shifts: the named face's grid is extracted,
//! one row or column is shifted, and all six grids are written back.
//! They deliberately do not rotate a true lattice layer; the asymmetry
//! matches the reference behavior.

use crate::cube::{Axis, Cube, Spin};
use crate::puzzle::{FaceSet, Instruction, Op};

/// Apply one instruction to the cube. Unrecognized instructions are
/// no-ops under the permissive parse policy.
pub fn apply(cube: &mut Cube, instruction: &Instruction) {
    match &instruction.op {
        Op::TurnLeft => *cube = cube.rotate_whole(Axis::Y, Spin::CounterClockwise),
        Op::TurnRight => *cube = cube.rotate_whole(Axis::Y, Spin::Clockwise),
        Op::RotateFront => *cube = cube.rotate_whole(Axis::X, Spin::Clockwise),
        Op::RotateBack => *cube = cube.rotate_whole(Axis::X, Spin::CounterClockwise),
        Op::RotateLeft => *cube = cube.rotate_whole(Axis::Z, Spin::CounterClockwise),
        Op::RotateRight => *cube = cube.rotate_whole(Axis::Z, Spin::Clockwise),
        Op::Shift { face, index, dir } => {
            let mut faces = cube.project();
            faces.get_mut(*face).shift(*index, *dir);
            cube.inject(&faces);
        }
        Op::Unrecognized => {}
    }
}

/// Build a fresh cube from `faces` and replay `instructions` in order,
/// leaving out `skip` if given. Each call owns an independent cube; the
/// input faces and instruction list are never mutated.
pub fn replay_skipping(
    faces: &FaceSet,
    instructions: &[Instruction],
    skip: Option<usize>,
) -> Cube {
    let mut cube = Cube::from_faces(faces);
    for (i, instruction) in instructions.iter().enumerate() {
        if skip == Some(i) {
            continue;
        }
        apply(&mut cube, instruction);
    }
    cube
}
