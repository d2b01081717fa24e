// input.rs     Input interpreters
//
// Copyright (c) 2024  Douglas Lau
//
use crate::cubie::CubieId;
use crate::error::{Error, Result};
use crate::face::{Face, Turn};
use crate::selector::Selector;
use glam::{Affine3A, Vec3};

/// Result of picking the cube with a pointer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pick {
    /// Cubie hit by the pointer, if any
    pub hit: Option<CubieId>,

    /// Facet normal at the hit point (world space)
    pub normal: Vec3,
}

impl Pick {
    /// Create a pick which missed the cube
    pub fn miss() -> Self {
        Pick {
            hit: None,
            normal: Vec3::ZERO,
        }
    }

    /// Create a pick which hit a cubie
    pub fn hit(id: CubieId, normal: Vec3) -> Self {
        Pick {
            hit: Some(id),
            normal,
        }
    }
}

/// Interpret a key press
///
/// Keys are the usual face letters: `u d l r f b` (any case).  Always turns
/// clockwise.
pub fn interpret_key(key: &str) -> Result<Turn> {
    let mut chars = key.chars();
    let face = match (chars.next(), chars.next()) {
        (Some(c), None) => Face::ALL
            .into_iter()
            .find(|face| face.key() == c.to_ascii_lowercase()),
        _ => None,
    };
    face.map(Turn::clockwise)
        .ok_or_else(|| Error::UnrecognizedKey(key.into()))
}

/// Interpret a pointer pick
///
/// * `pick` Pick result, normal in world space
/// * `root` Local-to-world transform of the cube root
pub fn interpret_pick(pick: &Pick, root: &Affine3A) -> Result<Turn> {
    if pick.hit.is_none() {
        return Err(Error::PointerMiss);
    }
    let normal = root
        .inverse()
        .transform_vector3(pick.normal)
        .normalize_or_zero();
    let selector = Selector::from_normal(normal)?;
    Ok(Turn::clockwise(selector.face()))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cubie::Cubies;
    use crate::face::Direction;
    use glam::{EulerRot, IVec3, Quat};
    use std::f32::consts::PI;

    #[test]
    fn keys() {
        let turn = interpret_key("u").unwrap();
        assert_eq!(turn.face, Face::Top);
        assert_eq!(turn.direction, Direction::Clockwise);
        assert_eq!(interpret_key("D").unwrap().face, Face::Bottom);
        assert_eq!(interpret_key("l").unwrap().face, Face::Left);
        assert_eq!(interpret_key("R").unwrap().face, Face::Right);
        assert_eq!(interpret_key("f").unwrap().face, Face::Front);
        assert_eq!(interpret_key("b").unwrap().face, Face::Back);
    }

    #[test]
    fn bad_keys() {
        for key in ["x", "", "uu", "Shift", "5"] {
            assert!(matches!(
                interpret_key(key),
                Err(Error::UnrecognizedKey(k)) if k == key
            ));
        }
    }

    #[test]
    fn miss() {
        let root = Affine3A::IDENTITY;
        assert!(matches!(
            interpret_pick(&Pick::miss(), &root),
            Err(Error::PointerMiss)
        ));
    }

    #[test]
    fn axis_normals() {
        let cubies = Cubies::new();
        let root = Affine3A::IDENTITY;
        for normal in [
            IVec3::X,
            IVec3::NEG_X,
            IVec3::Y,
            IVec3::NEG_Y,
            IVec3::Z,
            IVec3::NEG_Z,
        ] {
            let cubie = cubies.at(normal).unwrap();
            let pick = Pick::hit(cubie.id(), normal.as_vec3());
            let turn = interpret_pick(&pick, &root).unwrap();
            let selector = Selector::of(turn.face);
            assert!(selector.contains(normal.as_vec3()));
            assert_eq!(selector.axis_i(), normal);
        }
    }

    #[test]
    fn tilted_root() {
        let rot =
            Quat::from_euler(EulerRot::XYZ, PI / 10.0, PI / 10.0, PI / 22.0);
        let root = Affine3A::from_scale_rotation_translation(
            Vec3::splat(0.4),
            rot,
            Vec3::new(3.0, -2.0, 1.0),
        );
        for face in Face::ALL {
            let axis = Selector::of(face).axis();
            let world = rot * axis;
            let pick = Pick::hit(CubieId(0), world);
            assert_eq!(interpret_pick(&pick, &root).unwrap().face, face);
        }
    }

    #[test]
    fn edge_normal() {
        let pick = Pick::hit(CubieId(0), Vec3::new(1.0, 1.0, 0.0).normalize());
        assert!(matches!(
            interpret_pick(&pick, &Affine3A::IDENTITY),
            Err(Error::AmbiguousNormal(_))
        ));
    }
}
