// cubie.rs     Cubie mesh module
//
// Copyright (c) 2022-2024  Douglas Lau
//
use crate::config::Config;
use crate::mesh::{MeshBuilder, Quad};
use bevy::render::mesh::Mesh;
use glam::Vec3;
use rubik::{Cubie, Face, Selector};

/// Half size of cubie body
const BODY: f32 = 0.48;

/// Half size of a sticker
const STICKER: f32 = 0.42;

/// Sticker distance from cubie center
const STICKER_DIST: f32 = 0.485;

/// Body color
const BODY_COLOR: [f32; 4] = [0.05, 0.05, 0.05, 1.0];

/// Get the (normal, right, up) frame of a face, as seen from outside
pub fn face_frame(face: Face) -> (Vec3, Vec3, Vec3) {
    let normal = Selector::of(face).axis();
    let (right, up) = match face {
        Face::Front => (Vec3::X, Vec3::Y),
        Face::Back => (Vec3::NEG_X, Vec3::Y),
        Face::Left => (Vec3::Z, Vec3::Y),
        Face::Right => (Vec3::NEG_Z, Vec3::Y),
        Face::Top => (Vec3::X, Vec3::NEG_Z),
        Face::Bottom => (Vec3::X, Vec3::Z),
    };
    (normal, right, up)
}

/// Build a cubie mesh, with stickers on its outer faces
pub fn build_cubie(cubie: &Cubie, config: &Config) -> Mesh {
    let mut builder = MeshBuilder::new();
    let colors = cubie.colors();
    for face in Face::ALL {
        let (normal, right, up) = face_frame(face);
        builder.push_quad(Quad::new(
            normal * BODY,
            right * BODY,
            up * BODY,
            BODY_COLOR,
        ));
        if let Some(sticker) = colors[face.slot()] {
            builder.push_quad(Quad::new(
                normal * STICKER_DIST,
                right * STICKER,
                up * STICKER,
                config.color(sticker).as_rgba_f32(),
            ));
        }
    }
    builder.build()
}

#[cfg(test)]
mod test {
    use super::*;
    use rubik::Cubies;

    #[test]
    fn frames_face_outward() {
        for face in Face::ALL {
            let (normal, right, up) = face_frame(face);
            assert_eq!(right.cross(up), normal);
        }
    }

    #[test]
    fn corner_mesh() {
        let cubies = Cubies::new();
        let config = Config::default();
        let corner = cubies.at(glam::IVec3::ONE).unwrap();
        let mesh = build_cubie(corner, &config);
        // 6 body quads + 3 stickers
        assert_eq!(mesh.count_vertices(), 9 * 4);
    }
}
