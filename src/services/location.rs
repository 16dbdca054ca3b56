// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! One-shot geolocation.

use crate::models::Coordinates;

/// Supplies the user's position once, or fails once. No retries.
pub trait LocationSource {
    fn current_position(&mut self) -> Result<Coordinates, LocationError>;
}

/// Location source answering with a configured position.
#[derive(Debug, Clone)]
pub struct FixedLocation {
    position: Option<Coordinates>,
    requested: bool,
}

impl FixedLocation {
    pub fn new(position: Option<Coordinates>) -> Self {
        Self {
            position,
            requested: false,
        }
    }
}

impl LocationSource for FixedLocation {
    fn current_position(&mut self) -> Result<Coordinates, LocationError> {
        if std::mem::replace(&mut self.requested, true) {
            return Err(LocationError::AlreadyRequested);
        }
        self.position.ok_or(LocationError::Unavailable)
    }
}

/// Errors from a location source.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocationError {
    #[error("position unavailable")]
    Unavailable,

    #[error("permission denied")]
    PermissionDenied,

    #[error("position was already requested")]
    AlreadyRequested,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_location_answers_once() {
        let mut source = FixedLocation::new(Some(Coordinates::new(1.0, 2.0)));
        assert_eq!(source.current_position(), Ok(Coordinates::new(1.0, 2.0)));
        assert_eq!(
            source.current_position(),
            Err(LocationError::AlreadyRequested)
        );
    }

    #[test]
    fn test_unconfigured_location_fails() {
        let mut source = FixedLocation::new(None);
        assert_eq!(source.current_position(), Err(LocationError::Unavailable));
    }
}
