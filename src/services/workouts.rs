// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout collection service.
//!
//! Owns the ordered in-memory collection and is the only writer of the
//! stored snapshot. Every mutation writes the whole collection:
//! 1. Create: validate, build, append, write
//! 2. Select: reconcile, bump the click count, move to the end, write
//! 3. Reset: erase the stored key, clear memory

use std::collections::HashSet;

use crate::db::{KeyValueStore, WorkoutDb};
use crate::error::{Result, TrackerError};
use crate::models::{Coordinates, NewWorkout, Workout, WorkoutRecord};
use crate::services::reconcile::{reconcile, Candidate, ReconcileError};

/// Ordered workout collection backed by a [`WorkoutDb`].
pub struct WorkoutService<S> {
    db: WorkoutDb<S>,
    workouts: Vec<Workout>,
}

impl<S: KeyValueStore> WorkoutService<S> {
    /// Start with an empty collection without reading the store.
    pub fn new(db: WorkoutDb<S>) -> Self {
        Self {
            db,
            workouts: Vec::new(),
        }
    }

    /// Open the service and load whatever the store holds.
    pub fn open(db: WorkoutDb<S>) -> Result<(Self, LoadReport)> {
        let mut service = Self::new(db);
        let report = service.reload()?;
        Ok((service, report))
    }

    /// Re-read the stored snapshot, replacing the in-memory collection.
    pub fn reload(&mut self) -> Result<LoadReport> {
        let records = self.db.read_snapshot()?;
        Ok(self.load_from_snapshot(records))
    }

    /// Reconcile every record and replace the in-memory collection.
    ///
    /// Records that fail are skipped and listed in the report; the store is
    /// left untouched.
    pub fn load_from_snapshot<I, C>(&mut self, records: I) -> LoadReport
    where
        I: IntoIterator<Item = C>,
        C: Into<Candidate>,
    {
        let mut report = LoadReport::default();
        let mut loaded = Vec::new();
        let mut seen = HashSet::new();

        for (index, candidate) in records.into_iter().enumerate() {
            let candidate = candidate.into();
            let id_hint = candidate.id_hint();

            let result = reconcile(candidate).and_then(|workout| {
                if seen.insert(workout.id().clone()) {
                    Ok(workout)
                } else {
                    Err(ReconcileError::DuplicateId(workout.id().to_string()))
                }
            });

            match result {
                Ok(workout) => loaded.push(workout),
                Err(error) => {
                    tracing::warn!(index, id = ?id_hint, error = %error, "Skipping workout record");
                    report.failures.push(LoadFailure {
                        index,
                        id: id_hint,
                        error,
                    });
                }
            }
        }

        report.loaded = loaded.len();
        self.workouts = loaded;

        tracing::info!(
            loaded = report.loaded,
            failed = report.failures.len(),
            "Workouts loaded"
        );
        report
    }

    /// Validate and store a new workout.
    pub fn create(&mut self, input: NewWorkout) -> Result<Workout> {
        let workout = Workout::new(&input)?;
        if self.position(workout.id().as_str()).is_some() {
            return Err(TrackerError::Conflict(format!(
                "workout {} already exists",
                workout.id()
            )));
        }

        self.workouts.push(workout.clone());
        if let Err(err) = self.persist() {
            self.workouts.pop();
            return Err(err);
        }

        tracing::info!(
            id = %workout.id(),
            kind = %workout.workout_type(),
            distance_km = workout.distance_km(),
            duration_min = workout.duration_min(),
            "Workout created"
        );
        Ok(workout)
    }

    /// Workouts in display order.
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id().as_str() == id)
    }

    /// Swap in an updated copy of a stored workout and move it to the end.
    ///
    /// Only the click count may differ from the stored entry.
    pub fn replace(&mut self, updated: Workout) -> Result<Workout> {
        let position = self
            .position(updated.id().as_str())
            .ok_or_else(|| TrackerError::NotFound(updated.id().to_string()))?;

        if !self.workouts[position].differs_only_in_clicks(&updated) {
            return Err(TrackerError::Conflict(format!(
                "workout {} can only change its click count",
                updated.id()
            )));
        }

        let previous = self.workouts.remove(position);
        self.workouts.push(updated.clone());
        if let Err(err) = self.persist() {
            self.workouts.pop();
            self.workouts.insert(position, previous);
            return Err(err);
        }
        Ok(updated)
    }

    /// Record a user selection of the workout with `id`.
    pub fn select(&mut self, id: &str) -> Result<Selection> {
        let current = self
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| TrackerError::NotFound(id.to_string()))?;

        let mut workout = reconcile(current)?;
        workout.click();
        let workout = self.replace(workout)?;

        tracing::info!(id, clicks = workout.clicks(), "Workout selected");
        Ok(Selection {
            coords: workout.coords(),
            workout,
        })
    }

    /// Flat records for the whole collection, in order.
    pub fn snapshot(&self) -> Vec<WorkoutRecord> {
        self.workouts.iter().map(WorkoutRecord::from).collect()
    }

    /// Erase the stored collection and clear memory. Irreversible.
    pub fn reset(&mut self) -> Result<()> {
        self.db.erase()?;
        let removed = self.workouts.len();
        self.workouts.clear();
        tracing::info!(removed, "Workouts reset");
        Ok(())
    }

    pub fn db(&self) -> &WorkoutDb<S> {
        &self.db
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.workouts.iter().position(|w| w.id().as_str() == id)
    }

    fn persist(&mut self) -> Result<()> {
        self.db.write_snapshot(&self.workouts)?;
        Ok(())
    }
}

/// Result of a selection: the updated workout and where to center the map.
#[derive(Debug, Clone)]
pub struct Selection {
    pub workout: Workout,
    pub coords: Coordinates,
}

/// Outcome of loading a snapshot.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub failures: Vec<LoadFailure>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A stored record that could not be reconciled.
#[derive(Debug)]
pub struct LoadFailure {
    /// Position in the stored array
    pub index: usize,
    pub id: Option<String>,
    pub error: ReconcileError,
}
