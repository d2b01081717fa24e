// config.rs    Configuration definitions
//
// Copyright (c) 2022-2024  Douglas Lau
//
use anyhow::{anyhow, bail, Context, Error};
use bevy::prelude::{Color, Quat, Resource};
use glam::EulerRot;
use rubik::Color as Sticker;
use serde::Deserialize;
use std::f32::consts::PI;
use std::fs::File;
use std::path::Path;

type Result<T> = std::result::Result<T, Error>;

/// Sticker color definitions (hex RGB)
#[derive(Debug, Default, Deserialize)]
pub struct ColorsDef {
    blue: Option<String>,
    green: Option<String>,
    red: Option<String>,
    orange: Option<String>,
    white: Option<String>,
    yellow: Option<String>,
}

/// Definition of viewer configuration
#[derive(Debug, Default, Deserialize)]
pub struct ConfigDef {
    /// Seconds per quarter turn
    turn_secs: Option<f32>,

    /// Cube tilt (degrees about x, y and z)
    tilt: Option<String>,

    /// Sticker colors
    colors: Option<ColorsDef>,
}

/// Viewer configuration
#[derive(Clone, Debug, Resource)]
pub struct Config {
    /// Seconds per quarter turn
    pub turn_secs: f32,

    /// Rotation of the cube root
    pub tilt: Quat,

    /// Display colors, indexed by sticker color
    palette: [Color; 6],
}

impl Default for Config {
    fn default() -> Self {
        Config {
            turn_secs: 1.0,
            tilt: Quat::from_euler(
                EulerRot::XYZ,
                PI / 10.0,
                PI / 10.0,
                PI / 22.0,
            ),
            palette: [
                Color::rgb(0.0, 0.0, 1.0),
                Color::rgb(0.0, 1.0, 0.0),
                Color::rgb(1.0, 0.0, 0.0),
                Color::rgb(1.0, 0.647, 0.0),
                Color::rgb(1.0, 1.0, 1.0),
                Color::rgb(1.0, 1.0, 0.0),
            ],
        }
    }
}

impl Config {
    /// Load configuration from a muon file
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("{} not found", path.display()))?;
        let def: ConfigDef =
            muon_rs::from_reader(file).context("Invalid config")?;
        Config::try_from(&def)
            .with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Get the display color of a sticker
    pub fn color(&self, sticker: Sticker) -> Color {
        self.palette[sticker.index()]
    }
}

impl TryFrom<&ConfigDef> for Config {
    type Error = Error;

    fn try_from(def: &ConfigDef) -> Result<Self> {
        let mut config = Config::default();
        if let Some(secs) = def.turn_secs {
            if !(secs.is_finite() && secs > 0.0) {
                bail!("Invalid turn_secs: {secs}");
            }
            config.turn_secs = secs;
        }
        if let Some(tilt) = &def.tilt {
            config.tilt = parse_tilt(tilt)?;
        }
        if let Some(colors) = &def.colors {
            colors.apply(&mut config.palette)?;
        }
        Ok(config)
    }
}

impl ColorsDef {
    /// Apply color overrides to a palette
    fn apply(&self, palette: &mut [Color; 6]) -> Result<()> {
        let defs = [
            (Sticker::Blue, &self.blue),
            (Sticker::Green, &self.green),
            (Sticker::Red, &self.red),
            (Sticker::Orange, &self.orange),
            (Sticker::White, &self.white),
            (Sticker::Yellow, &self.yellow),
        ];
        for (sticker, def) in defs {
            if let Some(hex) = def {
                palette[sticker.index()] = Color::hex(hex)
                    .map_err(|_| anyhow!("Invalid color: {hex}"))?;
            }
        }
        Ok(())
    }
}

/// Parse tilt angles ("x y z" degrees)
fn parse_tilt(tilt: &str) -> Result<Quat> {
    let mut xyz = tilt.split_whitespace();
    if let (Some(x), Some(y), Some(z), None) =
        (xyz.next(), xyz.next(), xyz.next(), xyz.next())
    {
        if let (Ok(x), Ok(y), Ok(z)) =
            (x.parse::<f32>(), y.parse::<f32>(), z.parse::<f32>())
        {
            return Ok(Quat::from_euler(
                EulerRot::XYZ,
                x.to_radians(),
                y.to_radians(),
                z.to_radians(),
            ));
        }
    }
    bail!("Invalid tilt: {tilt}")
}
