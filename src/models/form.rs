// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Raw form input and its coercion into a [`NewWorkout`].

use validator::Validate;

use crate::error::{Result, TrackerError};
use crate::models::workout::{Coordinates, NewWorkout, WorkoutDetails, WorkoutType};

/// Untyped values as typed into the workout form.
#[derive(Debug, Clone, Default)]
pub struct WorkoutForm {
    /// Variant choice ("running" / "cycling")
    pub kind: String,
    pub distance: String,
    pub duration: String,
    /// Only read for running
    pub cadence: String,
    /// Only read for cycling
    pub elevation: String,
}

impl WorkoutForm {
    /// Coerce the raw strings into a validated creation request placed at `coords`.
    pub fn parse(&self, coords: Coordinates) -> Result<NewWorkout> {
        let kind = WorkoutType::from_tag(&self.kind).ok_or_else(|| {
            TrackerError::Validation(format!("unknown workout type {:?}", self.kind))
        })?;

        let distance_km = parse_number("distance", &self.distance)?;
        let duration_min = parse_number("duration", &self.duration)?;

        let details = match kind {
            WorkoutType::Running => {
                let cadence = parse_number("cadence", &self.cadence)?;
                if cadence <= 0.0 || cadence.fract() != 0.0 || cadence > f64::from(u32::MAX) {
                    return Err(TrackerError::Validation(
                        "cadence must be a positive integer".to_string(),
                    ));
                }
                WorkoutDetails::Running {
                    cadence_spm: cadence as u32,
                }
            }
            WorkoutType::Cycling => WorkoutDetails::Cycling {
                elevation_gain_m: parse_number("elevation", &self.elevation)?,
            },
        };

        let input = NewWorkout {
            coords,
            distance_km,
            duration_min,
            details,
        };
        input.validate()?;
        Ok(input)
    }
}

/// Parse a finite number; blank, non-numeric and infinite input are rejected.
fn parse_number(field: &str, raw: &str) -> Result<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| {
        TrackerError::Validation(format!("{} must be a number, got {:?}", field, raw))
    })?;

    if !value.is_finite() {
        return Err(TrackerError::Validation(format!(
            "{} must be a finite number",
            field
        )));
    }
    Ok(value)
}
