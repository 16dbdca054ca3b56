// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session controller tying the workout collection to the map and form.

use crate::config::DEFAULT_MAP_ZOOM;
use crate::db::KeyValueStore;
use crate::error::{Result, TrackerError};
use crate::models::{Coordinates, Workout, WorkoutForm};
use crate::services::location::LocationSource;
use crate::services::map::{MapView, Marker, PanOptions};
use crate::services::workouts::{Selection, WorkoutService};

/// Handles the user-facing events of one session.
pub struct Tracker<S, M> {
    workouts: WorkoutService<S>,
    map: M,
    zoom: u8,
    map_ready: bool,
    pending_click: Option<Coordinates>,
}

impl<S: KeyValueStore, M: MapView> Tracker<S, M> {
    pub fn new(workouts: WorkoutService<S>, map: M) -> Self {
        Self::with_zoom(workouts, map, DEFAULT_MAP_ZOOM)
    }

    pub fn with_zoom(workouts: WorkoutService<S>, map: M, zoom: u8) -> Self {
        Self {
            workouts,
            map,
            zoom,
            map_ready: false,
            pending_click: None,
        }
    }

    /// Ask for the user's position once and, on success, show the map with
    /// a marker per loaded workout.
    ///
    /// On failure the session keeps working without map centering.
    pub fn start<L: LocationSource>(&mut self, location: &mut L) -> Result<Coordinates> {
        let position = location.current_position().map_err(|e| {
            tracing::warn!(error = %e, "Could not get current location");
            TrackerError::Location(e.to_string())
        })?;

        self.map.set_view(position, self.zoom);
        for workout in self.workouts.workouts() {
            self.map.add_marker(Marker::for_workout(workout));
        }
        self.map_ready = true;

        tracing::info!(
            lat = position.lat,
            lng = position.lng,
            markers = self.workouts.len(),
            "Map loaded"
        );
        Ok(position)
    }

    /// Remember where the next workout will be placed.
    pub fn on_map_click(&mut self, coords: Coordinates) {
        self.pending_click = Some(coords);
    }

    pub fn pending_click(&self) -> Option<Coordinates> {
        self.pending_click
    }

    /// Create a workout at the last clicked position.
    ///
    /// The clicked position is kept if the form is rejected.
    pub fn submit(&mut self, form: &WorkoutForm) -> Result<Workout> {
        let coords = self.pending_click.ok_or_else(|| {
            TrackerError::Validation("choose a position on the map first".to_string())
        })?;

        let input = form.parse(coords)?;
        let workout = self.workouts.create(input)?;

        if self.map_ready {
            self.map.add_marker(Marker::for_workout(&workout));
        }
        self.pending_click = None;
        Ok(workout)
    }

    /// Select a workout and pan the map to it.
    pub fn focus(&mut self, id: &str) -> Result<Selection> {
        let selection = self.workouts.select(id)?;
        if self.map_ready {
            self.map
                .pan_to(selection.coords, self.zoom, PanOptions::default());
        } else {
            tracing::debug!(id, "Map not loaded, skipping pan");
        }
        Ok(selection)
    }

    /// Erase every workout.
    pub fn reset(&mut self) -> Result<()> {
        self.workouts.reset()?;
        self.pending_click = None;
        Ok(())
    }

    pub fn workouts(&self) -> &WorkoutService<S> {
        &self.workouts
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn is_map_ready(&self) -> bool {
        self.map_ready
    }
}
