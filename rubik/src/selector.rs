// selector.rs  Face selector module
//
// Copyright (c) 2024  Douglas Lau
//
use crate::error::{Error, Result};
use crate::face::Face;
use glam::{IVec3, Vec3};

/// Threshold for layer membership and normal quantization
///
/// Cubie positions and normals sit near integer values, so anything beyond
/// half a unit is on the far side of the axis.
pub const THRESHOLD: f32 = 0.5;

/// Face selector
///
/// Pairs a face with its signed rotation axis.  A cubie belongs to the face
/// layer when its position along the axis exceeds [THRESHOLD].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Selector {
    /// Face of the layer
    face: Face,

    /// Signed unit axis (outward normal)
    axis: IVec3,
}

/// All selectors, ordered by axis index, negative axes first
///
/// The pointer interpreter relies on this order for reverse lookup.
pub const SELECTORS: [Selector; 6] = [
    Selector::new(Face::Left, IVec3::NEG_X),
    Selector::new(Face::Bottom, IVec3::NEG_Y),
    Selector::new(Face::Back, IVec3::NEG_Z),
    Selector::new(Face::Right, IVec3::X),
    Selector::new(Face::Top, IVec3::Y),
    Selector::new(Face::Front, IVec3::Z),
];

impl Selector {
    const fn new(face: Face, axis: IVec3) -> Self {
        Selector { face, axis }
    }

    /// Get the selector for a face
    pub fn of(face: Face) -> &'static Selector {
        let idx = match face {
            Face::Left => 0,
            Face::Bottom => 1,
            Face::Back => 2,
            Face::Right => 3,
            Face::Top => 4,
            Face::Front => 5,
        };
        &SELECTORS[idx]
    }

    /// Get the selector for a face name
    pub fn named(name: &str) -> Result<&'static Selector> {
        Ok(Selector::of(name.parse()?))
    }

    /// Get the selector for a normal in cube-local space
    ///
    /// Each component is quantized to -1, 0 or 1; exactly one must be
    /// nonzero.
    pub fn from_normal(normal: Vec3) -> Result<&'static Selector> {
        let quantized = quantize(normal);
        let mut found = None;
        for (i, n) in quantized.to_array().into_iter().enumerate() {
            if n != 0 {
                if found.is_some() {
                    return Err(Error::AmbiguousNormal(normal));
                }
                found = Some(if n > 0 { i + 3 } else { i });
            }
        }
        found
            .map(|idx| &SELECTORS[idx])
            .ok_or(Error::AmbiguousNormal(normal))
    }

    /// Get the face
    pub fn face(&self) -> Face {
        self.face
    }

    /// Get the signed integer axis
    pub fn axis_i(&self) -> IVec3 {
        self.axis
    }

    /// Get the signed unit rotation axis
    pub fn axis(&self) -> Vec3 {
        self.axis.as_vec3()
    }

    /// Check whether a position is in the face layer
    pub fn contains(&self, pos: Vec3) -> bool {
        pos.dot(self.axis()) > THRESHOLD
    }
}

/// Quantize each component of a vector to -1, 0 or 1
fn quantize(v: Vec3) -> IVec3 {
    let q = |n: f32| {
        if n > THRESHOLD {
            1
        } else if n < -THRESHOLD {
            -1
        } else {
            0
        }
    };
    IVec3::new(q(v.x), q(v.y), q(v.z))
}
