// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use workout_tracker::db::{KeyValueStore, MemoryStore, StoreError, WorkoutDb};
use workout_tracker::models::{Coordinates, WorkoutForm};
use workout_tracker::services::{
    LocationError, LocationSource, MapView, Marker, PanOptions, WorkoutService,
};

/// A position in Lisbon, used as the default click location.
#[allow(dead_code)]
pub fn lisbon() -> Coordinates {
    Coordinates::new(38.7223, -9.1393)
}

/// Create a service over a fresh in-memory store.
/// Returns the service and a handle sharing the same storage.
#[allow(dead_code)]
pub fn memory_service() -> (WorkoutService<MemoryStore>, MemoryStore) {
    let store = MemoryStore::new();
    let service = WorkoutService::new(WorkoutDb::new(store.clone()));
    (service, store)
}

#[allow(dead_code)]
pub fn running_form(distance: &str, duration: &str, cadence: &str) -> WorkoutForm {
    WorkoutForm {
        kind: "running".to_string(),
        distance: distance.to_string(),
        duration: duration.to_string(),
        cadence: cadence.to_string(),
        ..WorkoutForm::default()
    }
}

#[allow(dead_code)]
pub fn cycling_form(distance: &str, duration: &str, elevation: &str) -> WorkoutForm {
    WorkoutForm {
        kind: "cycling".to_string(),
        distance: distance.to_string(),
        duration: duration.to_string(),
        elevation: elevation.to_string(),
        ..WorkoutForm::default()
    }
}

/// Store that can be switched into failing writes.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub fail_writes: std::rc::Rc<std::cell::Cell<bool>>,
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        if self.fail_writes.get() {
            return Err(StoreError::Io("disk full".to_string()));
        }
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.fail_writes.get() {
            return Err(StoreError::Io("disk full".to_string()));
        }
        self.inner.remove(key)
    }
}

/// Map that records every command it receives.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct RecordingMap {
    pub views: Vec<(Coordinates, u8)>,
    pub pans: Vec<(Coordinates, u8, PanOptions)>,
    pub markers: Vec<Marker>,
}

impl MapView for RecordingMap {
    fn set_view(&mut self, center: Coordinates, zoom: u8) {
        self.views.push((center, zoom));
    }

    fn pan_to(&mut self, center: Coordinates, zoom: u8, options: PanOptions) {
        self.pans.push((center, zoom, options));
    }

    fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }
}

/// Location source that always answers the same way and counts requests.
#[allow(dead_code)]
pub struct ScriptedLocation {
    pub answer: Result<Coordinates, LocationError>,
    pub requests: usize,
}

impl LocationSource for ScriptedLocation {
    fn current_position(&mut self) -> Result<Coordinates, LocationError> {
        self.requests += 1;
        self.answer.clone()
    }
}
