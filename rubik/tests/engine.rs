use glam::{Affine3A, Quat, Vec3};
use rubik::{
    Color, CubieId, Direction, Engine, Error, Face, Facelets, Outcome, Panel,
    Pick, Scene, State, Turn,
};
use std::f32::consts::FRAC_PI_2;

/// Scene which records commands
#[derive(Default)]
struct Recorder {
    groups: Vec<Vec<CubieId>>,
    rotations: Vec<(Vec3, f32)>,
    ungroups: usize,
    resets: usize,
}

impl Scene for Recorder {
    fn group(&mut self, members: &[CubieId]) {
        self.groups.push(members.to_vec());
    }

    fn begin_rotation(&mut self, axis: Vec3, angle: f32) {
        self.rotations.push((axis, angle));
    }

    fn ungroup(&mut self) {
        self.ungroups += 1;
    }

    fn reset(&mut self) {
        self.resets += 1;
    }
}

/// Panel which keeps the latest colors
#[derive(Default)]
struct Board {
    faces: [[Option<Color>; 9]; 6],
    renders: usize,
    warnings: Vec<String>,
}

impl Panel for Board {
    fn render(&mut self, face: Face, colors: &[Color; 9]) {
        self.faces[face.slot()] = colors.map(Some);
        self.renders += 1;
    }

    fn warning(&mut self, err: &Error) {
        self.warnings.push(err.to_string());
    }
}

fn engine() -> Engine<Recorder, Board> {
    Engine::new(Recorder::default(), Board::default())
}

#[test]
fn publishes_initial_state() {
    let engine = engine();
    assert_eq!(engine.panel().renders, 6);
    assert_eq!(engine.panel().faces[Face::Top.slot()], [Some(Color::White); 9]);
    assert_eq!(engine.state(), State::Idle);
}

#[test]
fn turn_front() {
    let mut engine = engine();
    let turn = Turn::clockwise(Face::Front);
    assert!(matches!(engine.request(turn), Outcome::Started(t) if t == turn));
    assert_eq!(engine.state(), State::Rotating(turn));
    let scene = engine.scene();
    assert_eq!(scene.groups.len(), 1);
    assert_eq!(scene.groups[0].len(), 9);
    assert_eq!(scene.rotations, vec![(Vec3::Z, -FRAC_PI_2)]);
    // facelets are updated before the animation completes
    assert_eq!(
        engine.facelets().face(Face::Right)[0],
        Color::White,
    );
    assert_eq!(engine.panel().renders, 12);
    assert_eq!(
        engine.panel().faces[Face::Top.slot()][6..],
        [Some(Color::Red); 3]
    );
    engine.complete();
    assert_eq!(engine.state(), State::Idle);
    assert_eq!(engine.scene().ungroups, 1);
}

#[test]
fn concurrent_request_ignored() {
    let mut engine = engine();
    engine.request(Turn::clockwise(Face::Top));
    let facelets = *engine.facelets();
    let renders = engine.panel().renders;
    let outcome = engine.request(Turn::clockwise(Face::Left));
    assert!(matches!(outcome, Outcome::Ignored));
    assert_eq!(engine.facelets(), &facelets);
    assert_eq!(engine.scene().rotations.len(), 1);
    assert_eq!(engine.scene().groups.len(), 1);
    assert_eq!(engine.panel().renders, renders);
    assert!(matches!(engine.key_down("r"), Outcome::Ignored));
    let pick = Pick::hit(CubieId(0), Vec3::X);
    let outcome = engine.pointer_down(&pick, &Affine3A::IDENTITY);
    assert!(matches!(outcome, Outcome::Ignored));
    assert_eq!(engine.scene().rotations.len(), 1);
    engine.complete();
    assert!(matches!(
        engine.request(Turn::clockwise(Face::Left)),
        Outcome::Started(_)
    ));
    assert_eq!(engine.scene().rotations.len(), 2);
}

#[test]
fn complete_while_idle() {
    let mut engine = engine();
    engine.complete();
    assert_eq!(engine.state(), State::Idle);
    assert_eq!(engine.scene().ungroups, 0);
}

#[test]
fn regrouping_follows_positions() {
    let mut engine = engine();
    engine.request(Turn::clockwise(Face::Right));
    engine.complete();
    engine.request(Turn::clockwise(Face::Top));
    engine.complete();
    let groups = &engine.scene().groups;
    // the right/top edge cubie is in both layers
    let shared: Vec<_> =
        groups[0].iter().filter(|id| groups[1].contains(id)).collect();
    assert_eq!(shared.len(), 3);
    for id in &groups[1] {
        let cubie = engine.cubies().get(*id).unwrap();
        assert_eq!(cubie.position().y, 1);
    }
}

#[test]
fn key_mapping() {
    let mut engine = engine();
    let outcome = engine.key_down("u");
    assert!(matches!(
        outcome,
        Outcome::Started(Turn { face: Face::Top, direction: Direction::Clockwise })
    ));
    engine.complete();
    let rotations = engine.scene().rotations.len();
    let outcome = engine.key_down("x");
    assert!(matches!(outcome, Outcome::Warning(Error::UnrecognizedKey(_))));
    assert_eq!(engine.panel().warnings, vec!["Unrecognized key: x"]);
    assert_eq!(engine.scene().rotations.len(), rotations);
    assert_eq!(engine.state(), State::Idle);
}

#[test]
fn pointer_miss() {
    let mut engine = engine();
    let outcome = engine.pointer_down(&Pick::miss(), &Affine3A::IDENTITY);
    assert!(matches!(outcome, Outcome::Warning(Error::PointerMiss)));
    assert!(engine.scene().rotations.is_empty());
    assert_eq!(engine.panel().warnings.len(), 1);
}

#[test]
fn pointer_on_tilted_cube() {
    let mut engine = engine();
    let rot = Quat::from_rotation_y(FRAC_PI_2);
    let root = Affine3A::from_quat(rot);
    // world +x is the cube's front after a quarter turn about y
    let pick = Pick::hit(CubieId(26), Vec3::X);
    let outcome = engine.pointer_down(&pick, &root);
    assert!(matches!(
        outcome,
        Outcome::Started(Turn { face: Face::Front, .. })
    ));
    assert_eq!(engine.scene().rotations[0].0, Vec3::Z);
}

#[test]
fn invalid_face_name() {
    let mut engine = engine();
    let err = engine.request_named("middle", Direction::Clockwise);
    assert!(matches!(err, Err(Error::InvalidFace(_))));
    assert_eq!(engine.state(), State::Idle);
    assert!(engine.scene().rotations.is_empty());
    assert!(engine.facelets().is_solved());
    let outcome = engine.request_named("back", Direction::CounterClockwise);
    assert!(matches!(outcome, Ok(Outcome::Started(_))));
    assert_eq!(engine.scene().rotations[0], (Vec3::NEG_Z, FRAC_PI_2));
}

#[test]
fn turns_and_inverses() {
    let mut engine = engine();
    let turns = [
        Turn::clockwise(Face::Front),
        Turn::counter_clockwise(Face::Right),
        Turn::clockwise(Face::Bottom),
        Turn::clockwise(Face::Back),
        Turn::counter_clockwise(Face::Left),
        Turn::clockwise(Face::Top),
    ];
    for turn in turns {
        engine.request(turn);
        engine.complete();
        assert_eq!(engine.facelets().counts(), [9; 6]);
    }
    assert!(!engine.facelets().is_solved());
    for turn in turns.iter().rev() {
        engine.request(turn.inverse());
        engine.complete();
    }
    assert_eq!(engine.facelets(), &Facelets::solved());
    assert!(engine.cubies().is_home());
}

#[test]
fn reset() {
    let mut engine = engine();
    engine.request(Turn::clockwise(Face::Left));
    assert!(!engine.reset());
    engine.complete();
    assert!(engine.reset());
    assert!(engine.facelets().is_solved());
    assert!(engine.cubies().is_home());
    assert_eq!(engine.scene().resets, 1);
}

#[test]
fn serialize_facelets() {
    let facelets = Facelets::solved();
    let json = serde_json::to_string(&facelets).unwrap();
    assert!(json.starts_with(r#"{"faces":[["blue","blue""#));
    let back: Facelets = serde_json::from_str(&json).unwrap();
    assert_eq!(back, facelets);
}
