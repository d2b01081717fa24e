// scene.rs     Scene module
//
// Copyright (c) 2024  Douglas Lau
//
use crate::config::Config;
use crate::view::Cube;
use bevy::prelude::*;
use rubik::{CubieId, Scene};

/// Cube root component (parent of all cubies)
#[derive(Component)]
pub struct CubeRoot;

/// Cubie component
#[derive(Component)]
pub struct CubieTag(pub CubieId);

/// Turn animation in progress
#[derive(Clone, Copy, Debug)]
struct TurnAnim {
    /// Rotation axis (cube-local)
    axis: Vec3,

    /// Total angle (radians)
    angle: f32,

    /// Progress, from 0.0 to 1.0
    progress: f32,

    /// Eased progress already applied
    applied: f32,
}

/// Scene service implemented with bevy transforms
#[derive(Debug, Default)]
pub struct BevyScene {
    /// Cubies in the turning group
    members: Vec<CubieId>,

    /// Turn animation
    anim: Option<TurnAnim>,

    /// Cubies need to be moved home
    reset: bool,
}

impl Scene for BevyScene {
    fn group(&mut self, members: &[CubieId]) {
        self.members = members.to_vec();
    }

    fn begin_rotation(&mut self, axis: Vec3, angle: f32) {
        self.anim = Some(TurnAnim {
            axis,
            angle,
            progress: 0.0,
            applied: 0.0,
        });
    }

    fn ungroup(&mut self) {
        self.members.clear();
    }

    fn reset(&mut self) {
        self.reset = true;
    }
}

impl TurnAnim {
    /// Step the animation forward
    ///
    /// Returns the rotation to apply this frame, and whether it finished.
    fn step(&mut self, delta: f32, turn_secs: f32) -> (Quat, bool) {
        let mut step = delta / turn_secs;
        if !(0.0..=1.0).contains(&step) {
            step = 1.0;
        }
        self.progress = (self.progress + step).min(1.0);
        let eased = quintic_ease_out(self.progress);
        let angle = self.angle * (eased - self.applied);
        let rot = Quat::from_axis_angle(self.axis, angle);
        self.applied = eased;
        (rot, self.progress >= 1.0)
    }
}

/// Quintic ease-out interpolation
fn quintic_ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(5)
}

/// Snap a cubie transform to the grid
fn snap(xform: &mut Transform) {
    xform.translation = xform.translation.round();
    let m = Mat3::from_quat(xform.rotation);
    let m =
        Mat3::from_cols(m.x_axis.round(), m.y_axis.round(), m.z_axis.round());
    xform.rotation = Quat::from_mat3(&m).normalize();
}

/// System to animate the turning group
pub fn animate_turn(
    time: Res<Time>,
    config: Res<Config>,
    mut cube: ResMut<Cube>,
    mut query: Query<(&CubieTag, &mut Transform)>,
) {
    let scene = cube.scene_mut();
    let Some(anim) = &mut scene.anim else {
        return;
    };
    let (rot, done) = anim.step(time.delta_seconds(), config.turn_secs);
    for (tag, mut xform) in &mut query {
        if scene.members.contains(&tag.0) {
            xform.rotate_around(Vec3::ZERO, rot);
            if done {
                snap(&mut xform);
            }
        }
    }
    if done {
        scene.anim = None;
        cube.complete();
    }
}

/// System to move cubies home after a reset
pub fn reset_cubies(
    mut cube: ResMut<Cube>,
    mut query: Query<(&CubieTag, &mut Transform)>,
) {
    if !cube.scene().reset {
        return;
    }
    for (tag, mut xform) in &mut query {
        if let Some(cubie) = cube.cubies().get(tag.0) {
            *xform = Transform::from_translation(cubie.home().as_vec3());
        }
    }
    cube.scene_mut().reset = false;
}
