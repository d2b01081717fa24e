// lib.rs      rubik crate.
//
// Copyright (c) 2024  Douglas Lau
//
mod cubie;
mod engine;
mod error;
mod face;
mod facelet;
mod input;
mod selector;

pub use cubie::{Cubie, CubieId, Cubies};
pub use engine::{Engine, Outcome, Panel, Scene, State};
pub use error::{Error, Result};
pub use face::{Direction, Face, Turn};
pub use facelet::{Color, Facelets};
pub use input::{interpret_key, interpret_pick, Pick};
pub use selector::{Selector, SELECTORS, THRESHOLD};
