// face.rs      Face module
//
// Copyright (c) 2024  Douglas Lau
//
use crate::error::{Error, Result};
use serde_derive::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;
use std::fmt;
use std::str::FromStr;

/// Outer face of the cube
///
/// The discriminant is the face slot, used to index per-cubie color arrays
/// and the facelet grid.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    /// Front face (+z)
    Front = 0,

    /// Back face (-z)
    Back = 1,

    /// Left face (-x)
    Left = 2,

    /// Right face (+x)
    Right = 3,

    /// Top face (+y)
    Top = 4,

    /// Bottom face (-y)
    Bottom = 5,
}

/// Turn direction, as seen looking at a face from outside the cube
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Clockwise
    Clockwise,

    /// Counter-clockwise
    CounterClockwise,
}

/// Quarter turn of one face
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub struct Turn {
    /// Face to turn
    pub face: Face,

    /// Turn direction
    pub direction: Direction,
}

impl Face {
    /// All faces, in slot order
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
        Face::Top,
        Face::Bottom,
    ];

    /// Get the face slot (0..6)
    pub const fn slot(self) -> usize {
        self as usize
    }

    /// Get the face name
    pub const fn name(self) -> &'static str {
        match self {
            Face::Front => "front",
            Face::Back => "back",
            Face::Left => "left",
            Face::Right => "right",
            Face::Top => "top",
            Face::Bottom => "bottom",
        }
    }

    /// Get the control key for the face
    pub const fn key(self) -> char {
        match self {
            Face::Front => 'f',
            Face::Back => 'b',
            Face::Left => 'l',
            Face::Right => 'r',
            Face::Top => 'u',
            Face::Bottom => 'd',
        }
    }
}

impl TryFrom<usize> for Face {
    type Error = Error;

    fn try_from(slot: usize) -> Result<Self> {
        Face::ALL
            .get(slot)
            .copied()
            .ok_or_else(|| Error::InvalidFace(slot.to_string()))
    }
}

impl FromStr for Face {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Face::ALL
            .into_iter()
            .find(|face| face.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::InvalidFace(name.into()))
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Direction {
    /// Get the opposite direction
    pub fn reverse(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// Get the rotation angle (radians) about the outward face axis
    ///
    /// Clockwise seen from outside is a negative right-handed rotation.
    pub fn angle(self) -> f32 {
        match self {
            Direction::Clockwise => -FRAC_PI_2,
            Direction::CounterClockwise => FRAC_PI_2,
        }
    }
}

impl Turn {
    /// Create a new turn
    pub const fn new(face: Face, direction: Direction) -> Self {
        Turn { face, direction }
    }

    /// Create a clockwise turn
    pub const fn clockwise(face: Face) -> Self {
        Turn::new(face, Direction::Clockwise)
    }

    /// Create a counter-clockwise turn
    pub const fn counter_clockwise(face: Face) -> Self {
        Turn::new(face, Direction::CounterClockwise)
    }

    /// Get the turn which undoes this one
    pub fn inverse(self) -> Self {
        Turn::new(self.face, self.direction.reverse())
    }

    /// Get the rotation angle (radians)
    pub fn angle(self) -> f32 {
        self.direction.angle()
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.direction {
            Direction::Clockwise => write!(f, "{}", self.face),
            Direction::CounterClockwise => write!(f, "{}'", self.face),
        }
    }
}
