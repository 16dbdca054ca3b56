// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Map widget interface.

use std::time::Duration;

use crate::models::{Coordinates, Workout};

/// The parts of a map widget the tracker drives.
pub trait MapView {
    /// Center the map without animation.
    fn set_view(&mut self, center: Coordinates, zoom: u8);

    /// Move the map to `center`.
    fn pan_to(&mut self, center: Coordinates, zoom: u8, options: PanOptions);

    /// Place a marker with an open popup.
    fn add_marker(&mut self, marker: Marker);
}

/// Marker with its popup content.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub coords: Coordinates,
    pub label: String,
    pub class_name: String,
}

impl Marker {
    pub fn for_workout(workout: &Workout) -> Self {
        Self {
            coords: workout.coords(),
            label: workout.popup_label(),
            class_name: workout.popup_class(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanOptions {
    pub animate: bool,
    pub duration: Duration,
}

impl Default for PanOptions {
    fn default() -> Self {
        Self {
            animate: true,
            duration: Duration::from_secs(1),
        }
    }
}

/// Map that only emits tracing events; used by the CLI, which has no widget.
#[derive(Debug, Default)]
pub struct TracingMap;

impl MapView for TracingMap {
    fn set_view(&mut self, center: Coordinates, zoom: u8) {
        tracing::debug!(lat = center.lat, lng = center.lng, zoom, "Map centered");
    }

    fn pan_to(&mut self, center: Coordinates, zoom: u8, options: PanOptions) {
        tracing::debug!(
            lat = center.lat,
            lng = center.lng,
            zoom,
            animate = options.animate,
            "Map panned"
        );
    }

    fn add_marker(&mut self, marker: Marker) {
        tracing::debug!(
            lat = marker.coords.lat,
            lng = marker.coords.lng,
            label = %marker.label,
            "Marker placed"
        );
    }
}
