// pick.rs      Pointer pick module
//
// Copyright (c) 2024  Douglas Lau
//
use crate::scene::{CubeRoot, CubieTag};
use crate::view::Cube;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use rubik::{CubieId, Pick};

/// Half size of a cubie for picking
const HALF: f32 = 0.5;

/// Ray in cube-local space
#[derive(Clone, Copy, Debug)]
struct LocalRay {
    origin: Vec3,
    dir: Vec3,
}

/// Hit on a cubie face
#[derive(Clone, Copy, Debug, PartialEq)]
struct Hit {
    /// Distance along ray
    dist: f32,

    /// Cubie which was hit
    id: CubieId,

    /// Outward normal of the face hit (cube-local)
    normal: Vec3,
}

impl LocalRay {
    /// Intersect with an axis-aligned box (slab method)
    ///
    /// Returns distance and normal of the entry face.
    fn hit_box(&self, center: Vec3, half: f32) -> Option<(f32, Vec3)> {
        let lo = center - Vec3::splat(half);
        let hi = center + Vec3::splat(half);
        let mut near = f32::NEG_INFINITY;
        let mut far = f32::INFINITY;
        let mut normal = Vec3::ZERO;
        for i in 0..3 {
            let (o, d) = (self.origin[i], self.dir[i]);
            if d.abs() < f32::EPSILON {
                if o < lo[i] || o > hi[i] {
                    return None;
                }
                continue;
            }
            let t0 = (lo[i] - o) / d;
            let t1 = (hi[i] - o) / d;
            let (t0, t1) = if t0 < t1 { (t0, t1) } else { (t1, t0) };
            if t0 > near {
                near = t0;
                normal = Vec3::ZERO;
                normal[i] = -d.signum();
            }
            far = far.min(t1);
            if near > far {
                return None;
            }
        }
        (near >= 0.0).then_some((near, normal))
    }

    /// Find the nearest cubie hit
    fn cast(
        &self,
        cubies: impl Iterator<Item = (CubieId, Vec3)>,
    ) -> Option<Hit> {
        cubies
            .filter_map(|(id, center)| {
                self.hit_box(center, HALF)
                    .map(|(dist, normal)| Hit { dist, id, normal })
            })
            .min_by(|a, b| a.dist.total_cmp(&b.dist))
    }
}

/// System to turn a face picked with the pointer
pub fn pick_turn(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    roots: Query<&GlobalTransform, With<CubeRoot>>,
    cubies: Query<(&CubieTag, &Transform)>,
    interactions: Query<&Interaction>,
    mut cube: ResMut<Cube>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    // clicks on the panel are not picks
    if interactions.iter().any(|i| *i != Interaction::None) {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let (Ok((camera, cam_xform)), Ok(root)) =
        (cameras.get_single(), roots.get_single())
    else {
        return;
    };
    let Some(ray) = camera.viewport_to_world(cam_xform, cursor) else {
        return;
    };
    let affine = root.affine();
    let inverse = affine.inverse();
    let local = LocalRay {
        origin: inverse.transform_point3(ray.origin),
        dir: inverse.transform_vector3(*ray.direction),
    };
    let hit =
        local.cast(cubies.iter().map(|(tag, xform)| (tag.0, xform.translation)));
    let pick = match hit {
        Some(hit) => Pick::hit(hit.id, affine.transform_vector3(hit.normal)),
        None => Pick::miss(),
    };
    cube.pointer_down(&pick, &affine);
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn box_front() {
        let ray = LocalRay {
            origin: Vec3::new(0.2, 0.1, 10.0),
            dir: Vec3::NEG_Z,
        };
        let (dist, normal) = ray.hit_box(Vec3::ZERO, 0.5).unwrap();
        assert_eq!(dist, 9.5);
        assert_eq!(normal, Vec3::Z);
    }

    #[test]
    fn box_miss() {
        let ray = LocalRay {
            origin: Vec3::new(2.0, 0.0, 10.0),
            dir: Vec3::NEG_Z,
        };
        assert_eq!(ray.hit_box(Vec3::ZERO, 0.5), None);
        let ray = LocalRay {
            origin: Vec3::new(0.0, 0.0, 10.0),
            dir: Vec3::Z,
        };
        assert_eq!(ray.hit_box(Vec3::ZERO, 0.5), None);
    }

    #[test]
    fn box_angled() {
        let ray = LocalRay {
            origin: Vec3::new(-5.0, 0.1, 0.2),
            dir: Vec3::new(1.0, 0.05, 0.0).normalize(),
        };
        let (_dist, normal) = ray.hit_box(Vec3::ZERO, 0.5).unwrap();
        assert_eq!(normal, Vec3::NEG_X);
    }

    #[test]
    fn nearest_cubie() {
        let ray = LocalRay {
            origin: Vec3::new(1.0, 3.0, 0.0),
            dir: Vec3::NEG_Y,
        };
        let cubies = [
            (CubieId(0), Vec3::new(1.0, -1.0, 0.0)),
            (CubieId(1), Vec3::new(1.0, 1.0, 0.0)),
            (CubieId(2), Vec3::new(1.0, 0.0, 0.0)),
        ];
        let hit = ray.cast(cubies.into_iter()).unwrap();
        assert_eq!(hit.id, CubieId(1));
        assert_eq!(hit.normal, Vec3::Y);
        assert_eq!(hit.dist, 1.5);
    }
}
