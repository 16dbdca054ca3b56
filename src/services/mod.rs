// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod location;
pub mod map;
pub mod reconcile;
pub mod session;
pub mod workouts;

pub use location::{FixedLocation, LocationError, LocationSource};
pub use map::{MapView, Marker, PanOptions, TracingMap};
pub use reconcile::{reconcile, Candidate, ReconcileError};
pub use session::Tracker;
pub use workouts::{LoadFailure, LoadReport, Selection, WorkoutService};
