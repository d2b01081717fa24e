// view.rs      View module
//
// Copyright (c) 2022-2024  Douglas Lau
//
use crate::config::Config;
use crate::cubie::build_cubie;
use crate::panel::{panel_buttons, spawn_panel, update_panel, PanelState};
use crate::pick::pick_turn;
use crate::scene::{animate_turn, reset_cubies, BevyScene, CubeRoot, CubieTag};
use bevy::{
    input::mouse::{MouseMotion, MouseWheel},
    prelude::*,
    window::{PrimaryWindow, Window},
};
use glam::EulerRot;
use rubik::Engine;
use std::f32::consts::{FRAC_PI_2, PI};

/// Keys handled by the viewer (not face turns)
const VIEW_KEYS: [KeyCode; 5] = [
    KeyCode::KeyQ,
    KeyCode::KeyP,
    KeyCode::Escape,
    KeyCode::ShiftLeft,
    KeyCode::ShiftRight,
];

/// Cube engine resource
#[derive(Resource, Deref, DerefMut)]
pub struct Cube(pub Engine<BevyScene, PanelState>);

/// Orbiting camera component
#[derive(Component, Debug, PartialEq)]
struct OrbitCamera {
    /// Point the camera looks at
    focus: Vec3,

    /// Rotation about the Y axis (radians)
    yaw: f32,

    /// Elevation above the XZ plane (radians)
    pitch: f32,

    /// Distance from focus
    distance: f32,
}

/// Help text component
#[derive(Component)]
struct HelpText;

impl OrbitCamera {
    /// Closest zoom distance
    const NEAR: f32 = 3.0;

    /// Farthest zoom distance
    const FAR: f32 = 50.0;

    /// Create a camera looking at the focus from a position
    fn new(pos: Vec3, focus: Vec3) -> Self {
        let offset = pos - focus;
        let distance = offset.length();
        OrbitCamera {
            focus,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).asin(),
            distance,
        }
    }

    /// Get the camera transform
    fn transform(&self) -> Transform {
        let rotation =
            Quat::from_euler(EulerRot::YXZ, self.yaw, -self.pitch, 0.0);
        Transform {
            translation: self.focus + rotation * Vec3::Z * self.distance,
            rotation,
            ..default()
        }
    }

    /// Orbit around the focus
    fn orbit(&mut self, motion: Vec2, win_sz: Vec2) {
        let delta = motion / win_sz * PI;
        self.yaw -= delta.x * 2.0;
        self.pitch = (self.pitch + delta.y).clamp(-FRAC_PI_2, FRAC_PI_2);
    }

    /// Move the focus across the view plane
    fn pan(&mut self, motion: Vec2, win_sz: Vec2) {
        let proj = PerspectiveProjection::default();
        let scale = Vec2::new(proj.fov * proj.aspect_ratio, proj.fov) / win_sz;
        let pan = motion * scale * self.distance;
        let rotation = self.transform().rotation;
        self.focus += rotation * Vec3::new(-pan.x, pan.y, 0.0);
    }

    /// Zoom in (positive) or out (negative)
    fn zoom(&mut self, amount: f32) {
        self.distance = (self.distance * (1.0 - amount * 0.1))
            .clamp(Self::NEAR, Self::FAR);
    }
}

/// View the cube in an app window
pub fn view_cube(config: Config) {
    let mut app = App::new();
    app.insert_resource(config)
        .insert_resource(Cube(Engine::new(
            BevyScene::default(),
            PanelState::default(),
        )))
        .insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: 500.0,
        })
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "rubik".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_systems(
            Startup,
            (spawn_light, spawn_camera, spawn_cube, spawn_panel),
        )
        .add_systems(
            Update,
            (
                key_turn,
                pick_turn,
                panel_buttons,
                animate_turn,
                reset_cubies,
                update_panel,
                reset_key,
                print_state,
                drag_camera,
                zoom_camera,
                toggle_help,
            ),
        )
        .run();
}

/// System to spawn light
fn spawn_light(mut commands: Commands) {
    commands.spawn(DirectionalLightBundle {
        directional_light: DirectionalLight {
            illuminance: 2000.0,
            ..default()
        },
        transform: Transform::from_xyz(2.0, 8.0, 6.0)
            .looking_at(Vec3::ZERO, Vec3::Y),
        ..default()
    });
}

/// System to spawn camera and help text
fn spawn_camera(mut commands: Commands) {
    let camera = OrbitCamera::new(Vec3::new(0.0, 2.0, 9.0), Vec3::ZERO);
    commands.spawn((
        Camera3dBundle {
            transform: camera.transform(),
            ..default()
        },
        camera,
    ));
    commands.spawn((
        HelpText,
        TextBundle::from_section(
            "_____ Mouse _____\n\
             left: turn face\n\
             right: pan camera\n\
             middle: rotate camera\n\
             wheel: zoom camera\n\
             \n\
             _____ Keys _____\n\
             U D L R F B: turn face\n\
             Esc: reset cube\n\
             'P': print state\n\
             'Q': toggle help text",
            TextStyle {
                font_size: 18.0,
                ..default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            right: Val::Px(12.0),
            ..default()
        }),
    ));
}

/// System to spawn the cube root and cubies
fn spawn_cube(
    mut commands: Commands,
    config: Res<Config>,
    cube: Res<Cube>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        perceptual_roughness: 0.6,
        ..default()
    });
    commands
        .spawn((
            CubeRoot,
            SpatialBundle::from_transform(Transform::from_rotation(
                config.tilt,
            )),
        ))
        .with_children(|root| {
            for cubie in cube.cubies().iter() {
                root.spawn((
                    CubieTag(cubie.id()),
                    PbrBundle {
                        mesh: meshes.add(build_cubie(cubie, &config)),
                        material: material.clone(),
                        transform: Transform::from_translation(
                            cubie.position().as_vec3(),
                        ),
                        ..default()
                    },
                ));
            }
        });
}

/// Get the name of a key, as used for face turns
fn key_name(code: KeyCode) -> String {
    let name = format!("{code:?}");
    match name.strip_prefix("Key") {
        Some(letter) => letter.to_string(),
        None => name,
    }
}

/// System to turn faces with the keyboard
fn key_turn(keyboard: Res<ButtonInput<KeyCode>>, mut cube: ResMut<Cube>) {
    for code in keyboard.get_just_pressed() {
        if !VIEW_KEYS.contains(code) {
            cube.key_down(&key_name(*code));
        }
    }
}

/// System to reset the cube
fn reset_key(keyboard: Res<ButtonInput<KeyCode>>, mut cube: ResMut<Cube>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        cube.reset();
    }
}

/// System to print the facelet state
fn print_state(keyboard: Res<ButtonInput<KeyCode>>, cube: Res<Cube>) {
    if keyboard.just_pressed(KeyCode::KeyP) {
        let facelets = cube.facelets();
        match serde_json::to_string(facelets) {
            Ok(json) => info!("facelets: {json}\n{facelets}"),
            Err(err) => error!("facelets: {err}"),
        }
    }
}

/// System to orbit or pan the camera with a mouse drag
fn drag_camera(
    windows: Query<&Window, With<PrimaryWindow>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut ev_motion: EventReader<MouseMotion>,
    mut query: Query<(&mut OrbitCamera, &mut Transform)>,
) {
    let motion: Vec2 = ev_motion.read().map(|ev| ev.delta).sum();
    let panning = mouse.pressed(MouseButton::Right);
    if motion == Vec2::ZERO || !(panning || mouse.pressed(MouseButton::Middle))
    {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let win_sz = Vec2::new(window.width(), window.height());
    for (mut cam, mut xform) in &mut query {
        if panning {
            cam.pan(motion, win_sz);
        } else {
            cam.orbit(motion, win_sz);
        }
        *xform = cam.transform();
    }
}

/// System to zoom the camera with the mouse wheel
fn zoom_camera(
    mut ev_scroll: EventReader<MouseWheel>,
    mut query: Query<(&mut OrbitCamera, &mut Transform)>,
) {
    let amount: f32 = ev_scroll.read().map(|ev| ev.y).sum();
    if amount != 0.0 {
        for (mut cam, mut xform) in &mut query {
            cam.zoom(amount);
            *xform = cam.transform();
        }
    }
}

/// System to toggle help text
fn toggle_help(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<&mut Visibility, With<HelpText>>,
) {
    if keyboard.just_pressed(KeyCode::KeyQ) {
        for mut vis in &mut query {
            *vis = if *vis == Visibility::Hidden {
                Visibility::Visible
            } else {
                Visibility::Hidden
            };
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn key_names() {
        assert_eq!(key_name(KeyCode::KeyU), "U");
        assert_eq!(key_name(KeyCode::KeyX), "X");
        assert_eq!(key_name(KeyCode::Digit1), "Digit1");
    }

    #[test]
    fn orbit_start() {
        let pos = Vec3::new(0.0, 2.0, 9.0);
        let cam = OrbitCamera::new(pos, Vec3::ZERO);
        let xform = cam.transform();
        assert!(xform.translation.distance(pos) < 1e-4);
        let forward = xform.rotation * Vec3::NEG_Z;
        assert!(forward.distance(-pos.normalize()) < 1e-4);
    }

    #[test]
    fn zoom_limits() {
        let mut cam = OrbitCamera::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        cam.zoom(100.0);
        assert_eq!(cam.distance, OrbitCamera::NEAR);
        cam.zoom(-1000.0);
        assert_eq!(cam.distance, OrbitCamera::FAR);
        let xform = cam.transform();
        assert!(xform.translation.distance(Vec3::new(0.0, 0.0, 50.0)) < 1e-4);
    }

    #[test]
    fn orbit_pitch_limit() {
        let mut cam = OrbitCamera::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        cam.orbit(Vec2::new(0.0, 5000.0), Vec2::new(800.0, 600.0));
        assert_eq!(cam.pitch, FRAC_PI_2);
    }
}
