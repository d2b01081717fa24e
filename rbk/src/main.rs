// main.rs      rbk program
//
// Copyright (c) 2022-2024  Douglas Lau
//
mod config;
mod cubie;
mod mesh;
mod panel;
mod pick;
mod scene;
mod view;

use crate::config::Config;
use anyhow::Result;
use argh::FromArgs;
use bevy::prelude::Quat;
use std::path::Path;

/// Command-line arguments
#[derive(FromArgs, PartialEq, Debug)]
struct Args {
    /// configuration file (.muon)
    #[argh(option, short = 'c')]
    config: Option<String>,

    /// do not tilt the cube
    #[argh(switch, short = 's')]
    straight: bool,
}

/// Main function
fn main() -> Result<()> {
    let args: Args = argh::from_env();
    let config = args.config()?;
    view::view_cube(config);
    Ok(())
}

impl Args {
    /// Load viewer configuration
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(Path::new(path))?,
            None => Config::default(),
        };
        if self.straight {
            config.tilt = Quat::IDENTITY;
        }
        Ok(config)
    }
}
