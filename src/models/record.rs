// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Flat storage shape of a workout.
//!
//! This is the only type that crosses the persistence boundary. The `type`
//! tag is kept as a plain string: a record read from storage is untrusted
//! until it has been reconciled back into a [`Workout`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::workout::{Coordinates, Workout, WorkoutKind};

/// Stored workout record. Field names match the browser app's
/// `localStorage` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutRecord {
    pub id: String,
    /// Creation timestamp (ISO 8601)
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub date: DateTime<Utc>,
    #[cfg_attr(feature = "binding-generation", ts(type = "[number, number]"))]
    pub coords: Coordinates,
    /// Distance in km
    pub distance: f64,
    /// Duration in minutes
    pub duration: f64,
    #[serde(default)]
    pub clicks: u32,
    /// Variant tag ("running" / "cycling")
    #[serde(rename = "type")]
    pub kind: String,
    /// Not authoritative; recomputed on load
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Steps per minute (running)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cadence: Option<f64>,
    /// Not authoritative; recomputed on load
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pace: Option<f64>,
    /// Meters climbed (cycling)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_gain: Option<f64>,
    /// Not authoritative; recomputed on load
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

impl From<&Workout> for WorkoutRecord {
    fn from(workout: &Workout) -> Self {
        let mut record = WorkoutRecord {
            id: workout.id().to_string(),
            date: workout.created_at(),
            coords: workout.coords(),
            distance: workout.distance_km(),
            duration: workout.duration_min(),
            clicks: workout.clicks(),
            kind: workout.workout_type().as_str().to_string(),
            description: Some(workout.description().to_string()),
            cadence: None,
            pace: None,
            elevation_gain: None,
            speed: None,
        };

        match *workout.kind() {
            WorkoutKind::Running {
                cadence_spm,
                pace_min_per_km,
            } => {
                record.cadence = Some(f64::from(cadence_spm));
                record.pace = Some(pace_min_per_km);
            }
            WorkoutKind::Cycling {
                elevation_gain_m,
                speed_km_per_h,
            } => {
                record.elevation_gain = Some(elevation_gain_m);
                record.speed = Some(speed_km_per_h);
            }
        }

        record
    }
}
