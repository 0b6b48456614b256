//! Wireframe polyhedra for comets.
//!
//! Each [`ShapeKind`] resolves through a static table to its unit
//! vertices (half-size 1) and its edge list. Edge lists index into the
//! vertex list and are fixed per shape.

use glam::Vec3;

use crate::core::math::rotate;
use crate::core::rng::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ShapeKind {
    Cube = 0,
    Tetrahedron,
    Octahedron,
    Pyramid,
    Prism,
}

/// Static geometry for one shape kind.
pub struct ShapeDef {
    pub vertices: &'static [Vec3],
    pub edges: &'static [(usize, usize)],
}

const fn v(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

const CUBE_VERTICES: [Vec3; 8] = [
    v(-1.0, -1.0, -1.0),
    v(-1.0, -1.0, 1.0),
    v(-1.0, 1.0, -1.0),
    v(-1.0, 1.0, 1.0),
    v(1.0, -1.0, -1.0),
    v(1.0, -1.0, 1.0),
    v(1.0, 1.0, -1.0),
    v(1.0, 1.0, 1.0),
];
const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1), (1, 3), (3, 2), (2, 0),
    (4, 5), (5, 7), (7, 6), (6, 4),
    (0, 4), (1, 5), (2, 6), (3, 7),
];

const TETRAHEDRON_VERTICES: [Vec3; 4] = [
    v(1.0, 1.0, 1.0),
    v(-1.0, -1.0, 1.0),
    v(-1.0, 1.0, -1.0),
    v(1.0, -1.0, -1.0),
];
const TETRAHEDRON_EDGES: [(usize, usize); 6] = [
    (0, 1), (0, 2), (0, 3), (1, 2), (2, 3), (3, 1),
];

const OCTAHEDRON_VERTICES: [Vec3; 6] = [
    v(1.0, 0.0, 0.0),
    v(-1.0, 0.0, 0.0),
    v(0.0, 1.0, 0.0),
    v(0.0, -1.0, 0.0),
    v(0.0, 0.0, 1.0),
    v(0.0, 0.0, -1.0),
];
const OCTAHEDRON_EDGES: [(usize, usize); 12] = [
    (0, 2), (0, 3), (0, 4), (0, 5),
    (1, 2), (1, 3), (1, 4), (1, 5),
    (2, 4), (4, 3), (3, 5), (5, 2),
];

const PYRAMID_VERTICES: [Vec3; 5] = [
    v(-1.0, -1.0, -1.0),
    v(1.0, -1.0, -1.0),
    v(1.0, -1.0, 1.0),
    v(-1.0, -1.0, 1.0),
    v(0.0, 1.0, 0.0),
];
const PYRAMID_EDGES: [(usize, usize); 8] = [
    (0, 1), (1, 2), (2, 3), (3, 0),
    (0, 4), (1, 4), (2, 4), (3, 4),
];

const PRISM_VERTICES: [Vec3; 6] = [
    v(-1.0, -1.0, -1.0),
    v(1.0, -1.0, -1.0),
    v(0.0, -1.0, 1.0),
    v(-1.0, 1.0, -1.0),
    v(1.0, 1.0, -1.0),
    v(0.0, 1.0, 1.0),
];
const PRISM_EDGES: [(usize, usize); 9] = [
    (0, 1), (1, 2), (2, 0),
    (3, 4), (4, 5), (5, 3),
    (0, 3), (1, 4), (2, 5),
];

/// Indexed by `ShapeKind as usize`.
static SHAPES: [ShapeDef; 5] = [
    ShapeDef { vertices: &CUBE_VERTICES, edges: &CUBE_EDGES },
    ShapeDef { vertices: &TETRAHEDRON_VERTICES, edges: &TETRAHEDRON_EDGES },
    ShapeDef { vertices: &OCTAHEDRON_VERTICES, edges: &OCTAHEDRON_EDGES },
    ShapeDef { vertices: &PYRAMID_VERTICES, edges: &PYRAMID_EDGES },
    ShapeDef { vertices: &PRISM_VERTICES, edges: &PRISM_EDGES },
];

impl ShapeKind {
    /// Largest vertex count of any kind.
    pub const MAX_VERTICES: usize = 8;

    pub const ALL: [ShapeKind; 5] = [
        Self::Cube,
        Self::Tetrahedron,
        Self::Octahedron,
        Self::Pyramid,
        Self::Prism,
    ];

    /// Uniform pick over all kinds (one draw).
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.index(Self::ALL.len())]
    }

    pub fn def(self) -> &'static ShapeDef {
        &SHAPES[self as usize]
    }

    pub fn edges(self) -> &'static [(usize, usize)] {
        self.def().edges
    }

    /// Local-space vertices scaled to half-size `size / 2` and rotated.
    pub fn vertices(self, size: f32, rotation: Vec3) -> impl ExactSizeIterator<Item = Vec3> {
        let half = size / 2.0;
        self.def()
            .vertices
            .iter()
            .map(move |&unit| rotate(unit * half, rotation))
    }
}
