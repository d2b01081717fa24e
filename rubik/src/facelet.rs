// facelet.rs   Facelet state module
//
// Copyright (c) 2024  Douglas Lau
//
use crate::face::{Direction, Face, Turn};
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// Sticker color label
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Green,
    Red,
    Orange,
    White,
    Yellow,
}

/// Strip of 3 facelets on one face
type Strip = (Face, [usize; 3]);

/// Clockwise index mapping for a face's own facelets
const CLOCKWISE: [usize; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

/// Counter-clockwise index mapping for a face's own facelets
const COUNTER_CLOCKWISE: [usize; 9] = [2, 5, 8, 1, 4, 7, 0, 3, 6];

/// Neighbor strips of each face, indexed by face slot
///
/// Strips are listed in clockwise order around the turning face; index
/// order within each strip already accounts for the neighbor's orientation.
const NEIGHBORS: [[Strip; 4]; 6] = [
    // front
    [
        (Face::Top, [6, 7, 8]),
        (Face::Right, [0, 3, 6]),
        (Face::Bottom, [2, 1, 0]),
        (Face::Left, [8, 5, 2]),
    ],
    // back
    [
        (Face::Top, [0, 1, 2]),
        (Face::Left, [6, 3, 0]),
        (Face::Bottom, [8, 7, 6]),
        (Face::Right, [2, 5, 8]),
    ],
    // left
    [
        (Face::Top, [0, 3, 6]),
        (Face::Front, [0, 3, 6]),
        (Face::Bottom, [0, 3, 6]),
        (Face::Back, [8, 5, 2]),
    ],
    // right
    [
        (Face::Top, [2, 5, 8]),
        (Face::Back, [6, 3, 0]),
        (Face::Bottom, [2, 5, 8]),
        (Face::Front, [2, 5, 8]),
    ],
    // top
    [
        (Face::Back, [0, 1, 2]),
        (Face::Right, [0, 1, 2]),
        (Face::Front, [0, 1, 2]),
        (Face::Left, [0, 1, 2]),
    ],
    // bottom
    [
        (Face::Front, [6, 7, 8]),
        (Face::Right, [6, 7, 8]),
        (Face::Back, [6, 7, 8]),
        (Face::Left, [6, 7, 8]),
    ],
];

/// Facelet state
///
/// Nine color labels per face, row-major from top-left as seen looking at
/// the face from outside.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct Facelets {
    faces: [[Color; 9]; 6],
}

impl Color {
    /// All colors, in face slot order of the solved cube
    pub const ALL: [Color; 6] = [
        Color::Blue,
        Color::Green,
        Color::Red,
        Color::Orange,
        Color::White,
        Color::Yellow,
    ];

    /// Get the color of a face on a solved cube
    pub const fn solved(face: Face) -> Self {
        Color::ALL[face.slot()]
    }

    /// Get the color index (same as solved face slot)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Get a one-letter code
    pub const fn code(self) -> char {
        match self {
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::White => 'W',
            Color::Yellow => 'Y',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Default for Facelets {
    fn default() -> Self {
        Facelets::solved()
    }
}

impl Facelets {
    /// Create solved facelets
    pub fn solved() -> Self {
        let mut faces = [[Color::Blue; 9]; 6];
        for face in Face::ALL {
            faces[face.slot()] = [Color::solved(face); 9];
        }
        Facelets { faces }
    }

    /// Get the facelets of one face
    pub fn face(&self, face: Face) -> &[Color; 9] {
        &self.faces[face.slot()]
    }

    /// Check whether every face has a single color
    pub fn is_solved(&self) -> bool {
        self.faces
            .iter()
            .all(|f| f.iter().all(|color| *color == f[4]))
    }

    /// Count facelets of each color
    pub fn counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for color in self.faces.iter().flatten() {
            counts[color.index()] += 1;
        }
        counts
    }

    /// Turn one face
    ///
    /// The face and its neighbor strips are updated together.
    pub fn rotate(&mut self, turn: Turn) {
        let mut next = *self;
        let slot = turn.face.slot();
        let mapping = match turn.direction {
            Direction::Clockwise => CLOCKWISE,
            Direction::CounterClockwise => COUNTER_CLOCKWISE,
        };
        let own = &self.faces[slot];
        next.faces[slot] = mapping.map(|i| own[i]);

        let table = NEIGHBORS[slot];
        let mut strips = table.map(|(face, idx)| self.read_strip(face, idx));
        match turn.direction {
            Direction::Clockwise => strips.rotate_right(1),
            Direction::CounterClockwise => strips.rotate_left(1),
        }
        for ((face, idx), strip) in table.into_iter().zip(strips) {
            next.write_strip(face, idx, strip);
        }
        *self = next;
    }

    /// Read one strip
    fn read_strip(&self, face: Face, idx: [usize; 3]) -> [Color; 3] {
        let colors = &self.faces[face.slot()];
        idx.map(|i| colors[i])
    }

    /// Write one strip
    fn write_strip(&mut self, face: Face, idx: [usize; 3], strip: [Color; 3]) {
        let colors = &mut self.faces[face.slot()];
        for (i, color) in idx.into_iter().zip(strip) {
            colors[i] = color;
        }
    }

    /// Write one row of a face for the unfolded net
    fn fmt_row(
        &self,
        f: &mut fmt::Formatter,
        face: Face,
        row: usize,
    ) -> fmt::Result {
        let colors = self.face(face);
        for col in 0..3 {
            write!(f, "{}", colors[row * 3 + col])?;
        }
        Ok(())
    }
}

/// Unfolded net: top above, bottom below, left front right back across
impl fmt::Display for Facelets {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..3 {
            write!(f, "    ")?;
            self.fmt_row(f, Face::Top, row)?;
            writeln!(f)?;
        }
        for row in 0..3 {
            for (i, face) in [Face::Left, Face::Front, Face::Right, Face::Back]
                .into_iter()
                .enumerate()
            {
                if i > 0 {
                    write!(f, " ")?;
                }
                self.fmt_row(f, face, row)?;
            }
            writeln!(f)?;
        }
        for row in 0..3 {
            write!(f, "    ")?;
            self.fmt_row(f, Face::Bottom, row)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
