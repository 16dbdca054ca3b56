// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout entity model: the base activity and its two variants.
//!
//! A [`Workout`] is immutable apart from its interaction counter. Derived
//! metrics and the description are computed once, at construction, from
//! the measurement fields and the creation timestamp.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::Result;
use crate::time_utils::format_month_day;

/// Latitude/longitude pair, stored as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(coords: Coordinates) -> Self {
        [coords.lat, coords.lng]
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lng)
    }
}

/// Opaque workout identifier, unique within a collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(String);

impl WorkoutId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for WorkoutId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for WorkoutId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Workout variant discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Running,
    Cycling,
}

impl WorkoutType {
    /// Storage tag ("running" / "cycling").
    pub fn as_str(self) -> &'static str {
        match self {
            WorkoutType::Running => "running",
            WorkoutType::Cycling => "cycling",
        }
    }

    /// Parse a storage or form tag. Matching is case-insensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "running" => Some(WorkoutType::Running),
            "cycling" => Some(WorkoutType::Cycling),
            _ => None,
        }
    }

    /// Capitalized name used in descriptions.
    pub fn display_name(self) -> &'static str {
        match self {
            WorkoutType::Running => "Running",
            WorkoutType::Cycling => "Cycling",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            WorkoutType::Running => "🏃‍♂️",
            WorkoutType::Cycling => "🚴‍♀️",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant-specific input supplied at creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutDetails {
    Running { cadence_spm: u32 },
    Cycling { elevation_gain_m: f64 },
}

impl WorkoutDetails {
    pub fn workout_type(&self) -> WorkoutType {
        match self {
            WorkoutDetails::Running { .. } => WorkoutType::Running,
            WorkoutDetails::Cycling { .. } => WorkoutType::Cycling,
        }
    }
}

/// A validated-on-construction request for a new workout.
#[derive(Debug, Clone, PartialEq, Validate)]
#[validate(schema(function = "validate_new_workout", skip_on_field_errors = false))]
pub struct NewWorkout {
    pub coords: Coordinates,
    #[validate(range(exclusive_min = 0.0, message = "distance must be a positive number"))]
    pub distance_km: f64,
    #[validate(range(exclusive_min = 0.0, message = "duration must be a positive number"))]
    pub duration_min: f64,
    pub details: WorkoutDetails,
}

impl NewWorkout {
    pub fn running(
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: u32,
    ) -> Self {
        Self {
            coords,
            distance_km,
            duration_min,
            details: WorkoutDetails::Running { cadence_spm },
        }
    }

    pub fn cycling(
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Self {
        Self {
            coords,
            distance_km,
            duration_min,
            details: WorkoutDetails::Cycling { elevation_gain_m },
        }
    }
}

/// Checks the range validators cannot express: finiteness (NaN passes any
/// range check) and the variant field.
fn validate_new_workout(
    input: &NewWorkout,
) -> std::result::Result<(), validator::ValidationError> {
    if !input.distance_km.is_finite() || !input.duration_min.is_finite() {
        return Err(validation_error("not_finite", "distance and duration must be finite"));
    }
    if !input.coords.lat.is_finite() || !input.coords.lng.is_finite() {
        return Err(validation_error("coords", "coordinates must be finite"));
    }
    match input.details {
        WorkoutDetails::Running { cadence_spm: 0 } => {
            Err(validation_error("cadence", "cadence must be a positive integer"))
        }
        WorkoutDetails::Cycling { elevation_gain_m }
            if !elevation_gain_m.is_finite() || elevation_gain_m < 0.0 =>
        {
            Err(validation_error("elevation", "elevation gain must be a non-negative number"))
        }
        _ => Ok(()),
    }
}

fn validation_error(code: &'static str, message: &'static str) -> validator::ValidationError {
    validator::ValidationError::new(code).with_message(message.into())
}

/// Variant-specific fields plus the derived metric computed from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutKind {
    Running {
        cadence_spm: u32,
        pace_min_per_km: f64,
    },
    Cycling {
        elevation_gain_m: f64,
        speed_km_per_h: f64,
    },
}

/// Derived metric of a workout, tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DerivedMetric {
    /// Minutes per kilometer.
    Pace(f64),
    /// Distance over duration, labeled km/h.
    Speed(f64),
}

impl DerivedMetric {
    pub fn value(self) -> f64 {
        match self {
            DerivedMetric::Pace(v) | DerivedMetric::Speed(v) => v,
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            DerivedMetric::Pace(_) => "min/km",
            DerivedMetric::Speed(_) => "km/h",
        }
    }
}

/// Running pace in minutes per kilometer.
pub fn running_pace(distance_km: f64, duration_min: f64) -> f64 {
    duration_min / distance_km
}

/// Cycling speed. The divisor is minutes even though the value is shown
/// as km/h; stored data depends on this exact formula.
pub fn cycling_speed(distance_km: f64, duration_min: f64) -> f64 {
    distance_km / duration_min
}

/// A logged workout.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    id: WorkoutId,
    created_at: DateTime<Utc>,
    coords: Coordinates,
    distance_km: f64,
    duration_min: f64,
    clicks: u32,
    description: String,
    kind: WorkoutKind,
}

impl Workout {
    /// Validate the request and build a workout stamped with the current time.
    pub fn new(input: &NewWorkout) -> Result<Self> {
        Self::new_at(input, Utc::now())
    }

    /// Validate the request and build a workout created at `created_at`.
    pub fn new_at(input: &NewWorkout, created_at: DateTime<Utc>) -> Result<Self> {
        input.validate()?;
        Ok(Self::build(input, created_at))
    }

    /// Build without validation. Used when rehydrating stored records,
    /// which are trusted as written.
    pub(crate) fn build(input: &NewWorkout, created_at: DateTime<Utc>) -> Self {
        let kind = match input.details {
            WorkoutDetails::Running { cadence_spm } => WorkoutKind::Running {
                cadence_spm,
                pace_min_per_km: running_pace(input.distance_km, input.duration_min),
            },
            WorkoutDetails::Cycling { elevation_gain_m } => WorkoutKind::Cycling {
                elevation_gain_m,
                speed_km_per_h: cycling_speed(input.distance_km, input.duration_min),
            },
        };

        let description = format!(
            "{} on {}",
            input.details.workout_type().display_name(),
            format_month_day(created_at)
        );

        Self {
            id: WorkoutId::generate(),
            created_at,
            coords: input.coords,
            distance_km: input.distance_km,
            duration_min: input.duration_min,
            clicks: 0,
            description,
            kind,
        }
    }

    /// Overwrite the identity-bearing fields with previously stored values.
    pub(crate) fn restore_identity(
        &mut self,
        id: WorkoutId,
        created_at: DateTime<Utc>,
        clicks: u32,
    ) {
        self.id = id;
        self.created_at = created_at;
        self.clicks = clicks;
    }

    pub fn id(&self) -> &WorkoutId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn coords(&self) -> Coordinates {
        self.coords
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    /// Number of times the user has selected this workout.
    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &WorkoutKind {
        &self.kind
    }

    pub fn workout_type(&self) -> WorkoutType {
        match self.kind {
            WorkoutKind::Running { .. } => WorkoutType::Running,
            WorkoutKind::Cycling { .. } => WorkoutType::Cycling,
        }
    }

    pub fn derived_metric(&self) -> DerivedMetric {
        match self.kind {
            WorkoutKind::Running {
                pace_min_per_km, ..
            } => DerivedMetric::Pace(pace_min_per_km),
            WorkoutKind::Cycling { speed_km_per_h, .. } => DerivedMetric::Speed(speed_km_per_h),
        }
    }

    /// Pace in min/km, for running workouts.
    pub fn pace(&self) -> Option<f64> {
        match self.kind {
            WorkoutKind::Running {
                pace_min_per_km, ..
            } => Some(pace_min_per_km),
            WorkoutKind::Cycling { .. } => None,
        }
    }

    /// Speed, for cycling workouts.
    pub fn speed(&self) -> Option<f64> {
        match self.kind {
            WorkoutKind::Cycling { speed_km_per_h, .. } => Some(speed_km_per_h),
            WorkoutKind::Running { .. } => None,
        }
    }

    /// Record one user selection.
    pub fn click(&mut self) {
        self.clicks = self.clicks.saturating_add(1);
    }

    /// Marker popup text: icon followed by the description.
    pub fn popup_label(&self) -> String {
        format!("{} {}", self.workout_type().icon(), self.description)
    }

    /// CSS class of the marker popup.
    pub fn popup_class(&self) -> String {
        format!("{}-popup", self.workout_type())
    }

    /// Whether `other` matches this workout in everything but the click count.
    pub(crate) fn differs_only_in_clicks(&self, other: &Workout) -> bool {
        self.id == other.id
            && self.created_at == other.created_at
            && self.coords == other.coords
            && self.distance_km == other.distance_km
            && self.duration_min == other.duration_min
            && self.description == other.description
            && self.kind == other.kind
    }
}

impl fmt::Display for Workout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let metric = self.derived_metric();
        write!(
            f,
            "{} {} | {} km | ⏱ {} min | ⚡️ {:.1} {}",
            self.workout_type().icon(),
            self.description,
            self.distance_km,
            self.duration_min,
            metric.value(),
            metric.unit()
        )?;
        match self.kind {
            WorkoutKind::Running { cadence_spm, .. } => {
                write!(f, " | 🦶🏼 {} spm", cadence_spm)
            }
            WorkoutKind::Cycling {
                elevation_gain_m, ..
            } => write!(f, " | ⛰ {} m", elevation_gain_m),
        }
    }
}
