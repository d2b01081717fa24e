// cubie.rs     Cubie position module
//
// Copyright (c) 2024  Douglas Lau
//
use crate::face::{Direction, Face, Turn};
use crate::facelet::Color;
use crate::selector::Selector;
use glam::IVec3;

/// Cubie identifier
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct CubieId(pub usize);

/// One of the 27 sub-cubes
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Cubie {
    /// Cubie ID
    id: CubieId,

    /// Starting grid position
    home: IVec3,

    /// Current grid position
    position: IVec3,
}

/// All cubies of a 3x3x3 cube
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cubies {
    cubies: Vec<Cubie>,
}

impl Cubie {
    /// Get the cubie ID
    pub fn id(&self) -> CubieId {
        self.id
    }

    /// Get the starting grid position
    pub fn home(&self) -> IVec3 {
        self.home
    }

    /// Get the current grid position
    pub fn position(&self) -> IVec3 {
        self.position
    }

    /// Get sticker colors, indexed by face slot
    ///
    /// Only faces on the outside of the cube (at home) have a sticker.
    pub fn colors(&self) -> [Option<Color>; 6] {
        let mut colors = [None; 6];
        for face in Face::ALL {
            if Selector::of(face).contains(self.home.as_vec3()) {
                colors[face.slot()] = Some(Color::solved(face));
            }
        }
        colors
    }
}

impl Default for Cubies {
    fn default() -> Self {
        Cubies::new()
    }
}

impl Cubies {
    /// Create cubies on a regular grid
    pub fn new() -> Self {
        let mut cubies = Vec::with_capacity(27);
        for x in -1..=1 {
            for y in -1..=1 {
                for z in -1..=1 {
                    let home = IVec3::new(x, y, z);
                    cubies.push(Cubie {
                        id: CubieId(cubies.len()),
                        home,
                        position: home,
                    });
                }
            }
        }
        Cubies { cubies }
    }

    /// Get an iterator of all cubies
    pub fn iter(&self) -> impl Iterator<Item = &Cubie> {
        self.cubies.iter()
    }

    /// Get a cubie by ID
    pub fn get(&self, id: CubieId) -> Option<&Cubie> {
        self.cubies.get(id.0)
    }

    /// Find the cubie at a grid position
    pub fn at(&self, pos: IVec3) -> Option<&Cubie> {
        self.cubies.iter().find(|c| c.position == pos)
    }

    /// Select cubies in a face layer (by current position)
    pub fn select(&self, selector: &Selector) -> Vec<CubieId> {
        self.cubies
            .iter()
            .filter(|c| selector.contains(c.position.as_vec3()))
            .map(|c| c.id)
            .collect()
    }

    /// Turn cubies in a face layer
    pub(crate) fn rotate(&mut self, turn: Turn) {
        let selector = Selector::of(turn.face);
        let axis = selector.axis_i();
        for cubie in &mut self.cubies {
            if selector.contains(cubie.position.as_vec3()) {
                cubie.position =
                    quarter_turn(cubie.position, axis, turn.direction);
            }
        }
    }

    /// Move all cubies back home
    pub(crate) fn reset(&mut self) {
        for cubie in &mut self.cubies {
            cubie.position = cubie.home;
        }
    }

    /// Check whether every cubie is home
    pub fn is_home(&self) -> bool {
        self.cubies.iter().all(|c| c.position == c.home)
    }
}

/// Rotate a grid position a quarter turn about a signed unit axis
pub(crate) fn quarter_turn(pos: IVec3, axis: IVec3, dir: Direction) -> IVec3 {
    let parallel = axis * axis.dot(pos);
    let cross = axis.cross(pos);
    match dir {
        Direction::Clockwise => parallel - cross,
        Direction::CounterClockwise => parallel + cross,
    }
}
