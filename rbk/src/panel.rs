// panel.rs     Control panel module
//
// Copyright (c) 2024  Douglas Lau
//
use crate::config::Config;
use crate::view::Cube;
use bevy::prelude::*;
use rubik::{Color as Sticker, Direction, Error, Face, Panel, Turn};

/// Panel rows, in display order
const ROWS: [Face; 6] = [
    Face::Top,
    Face::Bottom,
    Face::Left,
    Face::Right,
    Face::Front,
    Face::Back,
];

/// Size of one facelet cell (pixels)
const CELL: f32 = 16.0;

/// Panel service state
#[derive(Debug)]
pub struct PanelState {
    /// Latest colors of each face, by slot
    faces: [[Sticker; 9]; 6],

    /// Latest input warning
    warning: Option<String>,

    /// Display needs updating
    dirty: bool,
}

/// Facelet cell component
#[derive(Component)]
pub struct FaceletCell {
    face: Face,
    idx: usize,
}

/// Face turn button component
#[derive(Component)]
pub struct FaceButton(Face);

/// Reset button component
#[derive(Component)]
pub struct ResetButton;

/// Status text component
#[derive(Component)]
pub struct StatusText;

impl Default for PanelState {
    fn default() -> Self {
        PanelState {
            faces: Face::ALL.map(|face| [Sticker::solved(face); 9]),
            warning: None,
            dirty: true,
        }
    }
}

impl Panel for PanelState {
    fn render(&mut self, face: Face, colors: &[Sticker; 9]) {
        self.faces[face.slot()] = *colors;
        self.dirty = true;
    }

    fn warning(&mut self, err: &Error) {
        self.warning = Some(err.to_string());
        self.dirty = true;
    }
}

impl PanelState {
    /// Get the color of one facelet
    fn sticker(&self, face: Face, idx: usize) -> Sticker {
        self.faces[face.slot()][idx]
    }

    /// Get status line text
    fn status(&self, solved: bool) -> String {
        let state = if solved { "Solved" } else { "Scrambled" };
        match &self.warning {
            Some(warning) => format!("{state}\n{warning}"),
            None => state.to_string(),
        }
    }
}

/// Build a text bundle
fn text(value: impl Into<String>, font_size: f32) -> TextBundle {
    TextBundle::from_section(
        value,
        TextStyle {
            font_size,
            color: Color::WHITE,
            ..default()
        },
    )
}

/// Build a button bundle
fn button(size: Val, background: Color) -> ButtonBundle {
    ButtonBundle {
        style: Style {
            width: size,
            height: Val::Px(40.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        background_color: background.into(),
        ..default()
    }
}

/// System to spawn the control panel
pub fn spawn_panel(mut commands: Commands) {
    commands
        .spawn((
            Interaction::default(),
            NodeBundle {
                style: Style {
                    position_type: PositionType::Absolute,
                    top: Val::Px(10.0),
                    left: Val::Px(50.0),
                    flex_direction: FlexDirection::Column,
                    padding: UiRect::all(Val::Px(10.0)),
                    row_gap: Val::Px(6.0),
                    ..default()
                },
                background_color: Color::rgba(0.0, 0.0, 0.0, 0.4).into(),
                ..default()
            },
        ))
        .with_children(|board| {
            board.spawn(text("Control Board", 24.0));
            for face in ROWS {
                spawn_row(board, face);
            }
            board
                .spawn((ResetButton, button(Val::Px(180.0), Color::BLUE)))
                .with_children(|b| {
                    b.spawn(text("Reset Cube", 20.0));
                });
            board.spawn((StatusText, text("", 16.0)));
        });
}

/// Spawn one panel row: key button, arrow and facelet grid
fn spawn_row(board: &mut ChildBuilder, face: Face) {
    board
        .spawn(NodeBundle {
            style: Style {
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                column_gap: Val::Px(10.0),
                ..default()
            },
            ..default()
        })
        .with_children(|row| {
            row.spawn((FaceButton(face), button(Val::Px(40.0), Color::GRAY)))
                .with_children(|b| {
                    b.spawn(text(face.key().to_string(), 28.0));
                });
            row.spawn(text("->", 20.0));
            row.spawn(NodeBundle {
                style: Style {
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(1.0),
                    ..default()
                },
                ..default()
            })
            .with_children(|grid| {
                for r in 0..3 {
                    grid.spawn(NodeBundle {
                        style: Style {
                            flex_direction: FlexDirection::Row,
                            column_gap: Val::Px(1.0),
                            ..default()
                        },
                        ..default()
                    })
                    .with_children(|cols| {
                        for c in 0..3 {
                            cols.spawn((
                                FaceletCell {
                                    face,
                                    idx: r * 3 + c,
                                },
                                NodeBundle {
                                    style: Style {
                                        width: Val::Px(CELL),
                                        height: Val::Px(CELL),
                                        ..default()
                                    },
                                    ..default()
                                },
                            ));
                        }
                    });
                }
            });
        });
}

/// System to update the panel after facelet changes
pub fn update_panel(
    mut cube: ResMut<Cube>,
    config: Res<Config>,
    mut cells: Query<(&FaceletCell, &mut BackgroundColor)>,
    mut status: Query<&mut Text, With<StatusText>>,
) {
    if !cube.panel().dirty {
        return;
    }
    let panel = cube.panel();
    for (cell, mut bg) in &mut cells {
        *bg = config.color(panel.sticker(cell.face, cell.idx)).into();
    }
    let value = panel.status(cube.facelets().is_solved());
    for mut text in &mut status {
        text.sections[0].value = value.clone();
    }
    cube.panel_mut().dirty = false;
}

/// System to handle panel buttons
///
/// Shift-click turns counter-clockwise.
pub fn panel_buttons(
    keyboard: Res<ButtonInput<KeyCode>>,
    faces: Query<(&Interaction, &FaceButton), Changed<Interaction>>,
    resets: Query<&Interaction, (Changed<Interaction>, With<ResetButton>)>,
    mut cube: ResMut<Cube>,
) {
    let direction =
        if keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]) {
            Direction::CounterClockwise
        } else {
            Direction::Clockwise
        };
    for (interaction, button) in &faces {
        if *interaction == Interaction::Pressed {
            cube.request(Turn::new(button.0, direction));
        }
    }
    for interaction in &resets {
        if *interaction == Interaction::Pressed {
            cube.reset();
        }
    }
}
