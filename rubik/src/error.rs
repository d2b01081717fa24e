// error.rs     Error definitions
//
// Copyright (c) 2024  Douglas Lau
//
use glam::Vec3;

/// Cube errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid face identifier
    #[error("Invalid face: {0}")]
    InvalidFace(String),

    /// Unrecognized key
    #[error("Unrecognized key: {0}")]
    UnrecognizedKey(String),

    /// Pointer did not hit the cube
    #[error("Pointer missed the cube")]
    PointerMiss,

    /// Normal does not point along a single axis
    #[error("Ambiguous normal: {0}")]
    AmbiguousNormal(Vec3),
}

impl Error {
    /// Check if the error is a recoverable input warning
    pub fn is_warning(&self) -> bool {
        !matches!(self, Error::InvalidFace(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn warnings() {
        assert!(!Error::InvalidFace("top2".into()).is_warning());
        assert!(Error::UnrecognizedKey("x".into()).is_warning());
        assert!(Error::PointerMiss.is_warning());
        assert!(Error::AmbiguousNormal(Vec3::ONE).is_warning());
    }
}
