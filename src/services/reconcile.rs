// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rehydration of stored records into capable workouts.
//!
//! Storage only keeps flat field/value data plus a `type` tag. Every record
//! read back must pass through [`reconcile`] before derived metrics or
//! variant behavior are used:
//! 1. An already-constructed [`Workout`] is returned as is
//! 2. Otherwise the tag selects the variant and a fresh workout is built
//!    from the stored measurements (description and metric are recomputed)
//! 3. The stored id, creation date and click count replace the fresh ones

use serde_json::Value;

use crate::models::{NewWorkout, Workout, WorkoutDetails, WorkoutId, WorkoutRecord, WorkoutType};

/// Something believed to represent a workout.
#[derive(Debug, Clone)]
pub enum Candidate {
    /// Already a fully constructed workout.
    Capable(Workout),
    /// A typed-but-untrusted storage record.
    Plain(WorkoutRecord),
    /// Raw JSON as read from the store.
    Raw(Value),
}

impl Candidate {
    /// Best-effort id, for reporting failures.
    pub fn id_hint(&self) -> Option<String> {
        match self {
            Candidate::Capable(workout) => Some(workout.id().to_string()),
            Candidate::Plain(record) => Some(record.id.clone()),
            Candidate::Raw(value) => value.get("id").and_then(|id| match id {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            }),
        }
    }
}

impl From<Workout> for Candidate {
    fn from(workout: Workout) -> Self {
        Candidate::Capable(workout)
    }
}

impl From<WorkoutRecord> for Candidate {
    fn from(record: WorkoutRecord) -> Self {
        Candidate::Plain(record)
    }
}

impl From<Value> for Candidate {
    fn from(value: Value) -> Self {
        Candidate::Raw(value)
    }
}

/// Errors from reconciling a stored record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReconcileError {
    #[error("unknown workout type {0:?}")]
    UnknownVariant(String),

    #[error("{variant} record is missing {field}")]
    MissingField {
        variant: WorkoutType,
        field: &'static str,
    },

    #[error("malformed record: {0}")]
    Malformed(String),

    #[error("duplicate workout id {0}")]
    DuplicateId(String),
}

/// Restore a fully capable workout, keeping the candidate's identity.
pub fn reconcile(candidate: impl Into<Candidate>) -> Result<Workout, ReconcileError> {
    match candidate.into() {
        Candidate::Capable(workout) => Ok(workout),
        Candidate::Plain(record) => from_record(record),
        Candidate::Raw(value) => {
            let record: WorkoutRecord = serde_json::from_value(value)
                .map_err(|e| ReconcileError::Malformed(e.to_string()))?;
            from_record(record)
        }
    }
}

fn from_record(record: WorkoutRecord) -> Result<Workout, ReconcileError> {
    let variant = WorkoutType::from_tag(&record.kind)
        .ok_or_else(|| ReconcileError::UnknownVariant(record.kind.clone()))?;

    let details = match variant {
        WorkoutType::Running => {
            let cadence = record.cadence.ok_or(ReconcileError::MissingField {
                variant,
                field: "cadence",
            })?;
            WorkoutDetails::Running {
                cadence_spm: stored_cadence(cadence)?,
            }
        }
        WorkoutType::Cycling => WorkoutDetails::Cycling {
            elevation_gain_m: record.elevation_gain.ok_or(ReconcileError::MissingField {
                variant,
                field: "elevationGain",
            })?,
        },
    };

    let input = NewWorkout {
        coords: record.coords,
        distance_km: record.distance,
        duration_min: record.duration,
        details,
    };

    // Stored measurements were validated when first created.
    let mut workout = Workout::build(&input, record.date);
    workout.restore_identity(WorkoutId::from(record.id), record.date, record.clicks);
    Ok(workout)
}

/// Stored cadence is a JSON number; only exact positive integers map onto
/// a running workout.
fn stored_cadence(cadence: f64) -> Result<u32, ReconcileError> {
    if !cadence.is_finite()
        || cadence <= 0.0
        || cadence.fract() != 0.0
        || cadence > f64::from(u32::MAX)
    {
        return Err(ReconcileError::Malformed(format!(
            "cadence must be a positive integer, got {}",
            cadence
        )));
    }
    Ok(cadence as u32)
}
