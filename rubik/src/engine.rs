// engine.rs    Rotation engine
//
// Copyright (c) 2024  Douglas Lau
//
use crate::cubie::{CubieId, Cubies};
use crate::error::{Error, Result};
use crate::face::{Direction, Face, Turn};
use crate::facelet::{Color, Facelets};
use crate::input::{self, Pick};
use crate::selector::Selector;
use glam::{Affine3A, Vec3};

/// Scene service which animates the 3D cubies
pub trait Scene {
    /// Gather cubies into the turning group
    fn group(&mut self, members: &[CubieId]);

    /// Begin rotating the group about an axis (in cube-local space)
    ///
    /// When the rotation finishes, the host must call [Engine::complete].
    fn begin_rotation(&mut self, axis: Vec3, angle: f32);

    /// Return grouped cubies to the cube root
    fn ungroup(&mut self);

    /// Move all cubies back to their starting places
    fn reset(&mut self) {}
}

/// Panel service which displays the facelet state
pub trait Panel {
    /// Render the colors of one face, row-major
    fn render(&mut self, face: Face, colors: &[Color; 9]);

    /// Display a recoverable input warning
    fn warning(&mut self, _err: &Error) {}
}

/// Engine state
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum State {
    /// Waiting for a turn request
    Idle,

    /// Turn animation in progress
    Rotating(Turn),
}

/// Outcome of an input event
#[derive(Debug)]
pub enum Outcome {
    /// A turn was started
    Started(Turn),

    /// Request dropped while another turn was in progress
    Ignored,

    /// Input was not recognized (already logged)
    Warning(Error),
}

/// Rotation engine
///
/// Owns the cubie positions and facelet state; allows only one turn at a
/// time.
pub struct Engine<S: Scene, P: Panel> {
    /// Scene service
    scene: S,

    /// Panel service
    panel: P,

    /// Cubie positions
    cubies: Cubies,

    /// Facelet state
    facelets: Facelets,

    /// Current state
    state: State,
}

impl<S: Scene, P: Panel> Engine<S, P> {
    /// Create a new engine with a solved cube
    pub fn new(scene: S, panel: P) -> Self {
        let mut engine = Engine {
            scene,
            panel,
            cubies: Cubies::new(),
            facelets: Facelets::solved(),
            state: State::Idle,
        };
        engine.publish();
        engine
    }

    /// Get the scene service
    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// Get the scene service (mutable)
    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    /// Get the panel service
    pub fn panel(&self) -> &P {
        &self.panel
    }

    /// Get the panel service (mutable)
    pub fn panel_mut(&mut self) -> &mut P {
        &mut self.panel
    }

    /// Get the cubie positions
    pub fn cubies(&self) -> &Cubies {
        &self.cubies
    }

    /// Get the facelet state
    pub fn facelets(&self) -> &Facelets {
        &self.facelets
    }

    /// Get the current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Check if a turn is in progress
    pub fn is_rotating(&self) -> bool {
        matches!(self.state, State::Rotating(_))
    }

    /// Request a turn
    ///
    /// Ignored if a turn is already in progress.
    pub fn request(&mut self, turn: Turn) -> Outcome {
        if let State::Rotating(current) = self.state {
            log::debug!("{turn} ignored, {current} in progress");
            return Outcome::Ignored;
        }
        let selector = Selector::of(turn.face);
        let members = self.cubies.select(selector);
        self.scene.group(&members);
        self.scene.begin_rotation(selector.axis(), turn.angle());
        self.cubies.rotate(turn);
        self.facelets.rotate(turn);
        self.publish();
        self.state = State::Rotating(turn);
        log::debug!("turning {turn}");
        Outcome::Started(turn)
    }

    /// Request a turn by face name
    ///
    /// An invalid face name is an error; the state is left intact.
    pub fn request_named(
        &mut self,
        name: &str,
        direction: Direction,
    ) -> Result<Outcome> {
        let selector = Selector::named(name)?;
        Ok(self.request(Turn::new(selector.face(), direction)))
    }

    /// Complete the turn in progress (called when animation finishes)
    pub fn complete(&mut self) {
        match self.state {
            State::Rotating(turn) => {
                self.scene.ungroup();
                self.state = State::Idle;
                log::debug!("{turn} complete");
            }
            State::Idle => log::debug!("complete while idle"),
        }
    }

    /// Reset to a solved cube
    ///
    /// Ignored if a turn is in progress.
    pub fn reset(&mut self) -> bool {
        if self.is_rotating() {
            log::debug!("reset ignored while turning");
            return false;
        }
        self.cubies.reset();
        self.facelets = Facelets::solved();
        self.scene.reset();
        self.publish();
        log::info!("cube reset");
        true
    }

    /// Handle a key press
    pub fn key_down(&mut self, key: &str) -> Outcome {
        match input::interpret_key(key) {
            Ok(turn) => self.request(turn),
            Err(err) => self.warn(err),
        }
    }

    /// Handle a pointer press on the scene
    ///
    /// * `pick` Pick result
    /// * `root` Local-to-world transform of the cube root
    pub fn pointer_down(&mut self, pick: &Pick, root: &Affine3A) -> Outcome {
        if self.is_rotating() {
            return Outcome::Ignored;
        }
        match input::interpret_pick(pick, root) {
            Ok(turn) => self.request(turn),
            Err(err) => self.warn(err),
        }
    }

    /// Report an input warning
    fn warn(&mut self, err: Error) -> Outcome {
        log::warn!("{err}");
        self.panel.warning(&err);
        Outcome::Warning(err)
    }

    /// Publish facelet state to the panel
    fn publish(&mut self) {
        for face in Face::ALL {
            self.panel.render(face, self.facelets.face(face));
        }
    }
}
