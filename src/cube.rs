//! The cubelet lattice: face↔cubelet projection, whole-cube rotation and
//! the solved-state test.
//!
//! A cubelet carries six orientation slots; only the outward-facing slots
//! of boundary cubelets hold colors. Rotations never change a color value,
//! they permute cubelet positions and relabel which slot holds each color.
//! Both steps are computed from an immutable snapshot: `Cubelet::rotated`
//! and `Cube::rotate_whole` return new values instead of mutating in place.

use crate::puzzle::{Color, FaceName, FaceSet};

/// A cubelet's six orientation slots, local to the cubelet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Up,
    Down,
    Left,
    Right,
    Front,
    Back,
}

/// Rotation axis for whole-cube rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spin {
    Clockwise,
    CounterClockwise,
}

/// One unit cell of the lattice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cubelet {
    slots: [Color; 6],
}

impl Cubelet {
    pub fn get(&self, slot: Slot) -> Color {
        self.slots[slot as usize]
    }

    pub fn set(&mut self, slot: Slot, color: Color) {
        self.slots[slot as usize] = color;
    }

    /// The relabeled cubelet after a 90° rotation around `axis`.
    ///
    /// The two slots aligned with the axis are unchanged; the other four
    /// 4-cycle in the listed clockwise order (counter-clockwise walks the
    /// cycle backwards). Each cycle agrees with the coordinate permutation
    /// in `rotate_coord`, so a sticker facing outward before a rotation
    /// still faces outward afterwards.
    pub fn rotated(&self, axis: Axis, spin: Spin) -> Cubelet {
        let cycle = match axis {
            Axis::X => [Slot::Up, Slot::Front, Slot::Down, Slot::Back],
            Axis::Y => [Slot::Front, Slot::Left, Slot::Back, Slot::Right],
            Axis::Z => [Slot::Up, Slot::Right, Slot::Down, Slot::Left],
        };
        let mut out = *self;
        for (i, &from) in cycle.iter().enumerate() {
            let to = match spin {
                Spin::Clockwise => cycle[(i + 1) % 4],
                Spin::CounterClockwise => cycle[(i + 3) % 4],
            };
            out.set(to, self.get(from));
        }
        out
    }
}

/// The N×N×N lattice. Size is an explicit field threaded through every
/// operation; there is no process-wide cube size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube {
    n: usize,
    cells: Vec<Cubelet>,
}

/// Fixed mapping from a face-grid cell to its lattice cell and slot.
///
/// The flips on back, top and left make adjacent faces share edges
/// consistently when the cube is viewed from outside. `project` and
/// `inject` both go through this single formula, so the face↔cubelet
/// correspondence stays a bijection.
pub fn facelet_target(n: usize, face: FaceName, r: usize, c: usize) -> (usize, usize, usize, Slot) {
    match face {
        FaceName::Front => (c, r, n - 1, Slot::Front),
        FaceName::Back => (n - 1 - c, r, 0, Slot::Back),
        FaceName::Top => (c, 0, n - 1 - r, Slot::Up),
        FaceName::Base => (c, n - 1, r, Slot::Down),
        FaceName::Left => (0, r, n - 1 - c, Slot::Left),
        FaceName::Right => (n - 1, r, c, Slot::Right),
    }
}

/// 90° rotation of a lattice coordinate in the plane perpendicular to `axis`.
fn rotate_coord(
    n: usize,
    axis: Axis,
    spin: Spin,
    x: usize,
    y: usize,
    z: usize,
) -> (usize, usize, usize) {
    match (axis, spin) {
        (Axis::X, Spin::Clockwise) => (x, z, n - 1 - y),
        (Axis::X, Spin::CounterClockwise) => (x, n - 1 - z, y),
        (Axis::Y, Spin::Clockwise) => (n - 1 - z, y, x),
        (Axis::Y, Spin::CounterClockwise) => (z, y, n - 1 - x),
        (Axis::Z, Spin::Clockwise) => (n - 1 - y, x, z),
        (Axis::Z, Spin::CounterClockwise) => (y, n - 1 - x, z),
    }
}

impl Cube {
    pub fn new(n: usize) -> Cube {
        Cube {
            n,
            cells: vec![Cubelet::default(); n * n * n],
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        (x * self.n + y) * self.n + z
    }

    pub fn get(&self, x: usize, y: usize, z: usize) -> Cubelet {
        self.cells[self.idx(x, y, z)]
    }

    pub fn set(&mut self, x: usize, y: usize, z: usize, cubelet: Cubelet) {
        let i = self.idx(x, y, z);
        self.cells[i] = cubelet;
    }

    /// Fresh cube with the given face coloring injected.
    pub fn from_faces(faces: &FaceSet) -> Cube {
        let mut cube = Cube::new(faces.n());
        cube.inject(faces);
        cube
    }

    /// Overwrite the boundary slots from the six face grids. Interior
    /// cells and inward-facing slots are untouched.
    pub fn inject(&mut self, faces: &FaceSet) {
        for (face, r, c) in faces.positions() {
            let (x, y, z, slot) = facelet_target(self.n, face, r, c);
            let mut cubelet = self.get(x, y, z);
            cubelet.set(slot, faces.get(face).get(r, c));
            self.set(x, y, z, cubelet);
        }
    }

    /// Read the six face grids off the boundary. Pure; the cube is not
    /// mutated.
    pub fn project(&self) -> FaceSet {
        let n = self.n;
        let mut faces = FaceSet::new(n);
        for face in FaceName::ALL {
            for r in 0..n {
                for c in 0..n {
                    let (x, y, z, slot) = facelet_target(n, face, r, c);
                    faces.get_mut(face).set(r, c, self.get(x, y, z).get(slot));
                }
            }
        }
        faces
    }

    /// Rigid 90° rotation of the whole lattice, built from a snapshot of
    /// the prior state since positions permute non-locally.
    pub fn rotate_whole(&self, axis: Axis, spin: Spin) -> Cube {
        let n = self.n;
        let mut out = Cube::new(n);
        for x in 0..n {
            for y in 0..n {
                for z in 0..n {
                    let (nx, ny, nz) = rotate_coord(n, axis, spin, x, y, z);
                    out.set(nx, ny, nz, self.get(x, y, z).rotated(axis, spin));
                }
            }
        }
        out
    }

    /// Solved means at least one extracted face is monochromatic.
    pub fn is_solved(&self) -> bool {
        self.project().any_uniform()
    }
}
