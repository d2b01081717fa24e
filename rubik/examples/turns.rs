// turns example
use glam::Vec3;
use rubik::{Color, CubieId, Direction, Engine, Face, Panel, Scene};

/// Scene which finishes every rotation at once
#[derive(Default)]
struct Instant {
    turning: bool,
}

/// Panel which does nothing
struct Quiet;

impl Scene for Instant {
    fn group(&mut self, _members: &[CubieId]) {}

    fn begin_rotation(&mut self, _axis: Vec3, _angle: f32) {
        self.turning = true;
    }

    fn ungroup(&mut self) {
        self.turning = false;
    }
}

impl Panel for Quiet {
    fn render(&mut self, _face: Face, _colors: &[Color; 9]) {}
}

fn main() -> Result<(), rubik::Error> {
    let mut engine = Engine::new(Instant::default(), Quiet);
    for name in ["right", "top", "right", "top"] {
        engine.request_named(name, Direction::Clockwise)?;
        if engine.scene().turning {
            engine.complete();
        }
    }
    println!("{}", engine.facelets());
    for key in "uuuu".chars() {
        engine.key_down(&key.to_string());
        engine.complete();
    }
    println!("{}", engine.facelets());
    println!("solved: {}", engine.facelets().is_solved());
    Ok(())
}
