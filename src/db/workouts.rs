// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Whole-collection workout persistence on top of a [`KeyValueStore`].

use serde_json::Value;

use crate::db::store::{KeyValueStore, StoreError};
use crate::db::WORKOUTS_KEY;
use crate::models::{Workout, WorkoutRecord};

/// Reads and writes the workout collection as one JSON array under a single key.
#[derive(Debug, Clone)]
pub struct WorkoutDb<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> WorkoutDb<S> {
    /// Use the default `workouts` key.
    pub fn new(store: S) -> Self {
        Self::with_key(store, WORKOUTS_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch the stored records, still untyped.
    ///
    /// An absent key (or a stored `null`) is an empty collection.
    pub fn read_snapshot(&self) -> Result<Vec<Value>, StoreError> {
        let Some(raw) = self.store.get(&self.key)? else {
            tracing::debug!(key = %self.key, "No stored workouts");
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(records)) => Ok(records),
            Ok(Value::Null) => Ok(Vec::new()),
            Ok(other) => Err(StoreError::Corrupt(format!(
                "expected an array under {:?}, found {}",
                self.key,
                json_kind(&other)
            ))),
            Err(e) => Err(StoreError::Corrupt(format!("{:?}: {}", self.key, e))),
        }
    }

    /// Replace the stored collection with `workouts`, in order.
    pub fn write_snapshot(&mut self, workouts: &[Workout]) -> Result<(), StoreError> {
        let records: Vec<WorkoutRecord> = workouts.iter().map(WorkoutRecord::from).collect();
        let payload =
            serde_json::to_string(&records).map_err(|e| StoreError::Serialize(e.to_string()))?;
        self.store.set(&self.key, payload)?;
        tracing::debug!(key = %self.key, count = records.len(), "Wrote workout snapshot");
        Ok(())
    }

    /// Remove the stored collection entirely.
    pub fn erase(&mut self) -> Result<(), StoreError> {
        self.store.remove(&self.key)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
