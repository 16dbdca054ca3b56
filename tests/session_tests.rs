// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session flow: map start-up, form submission and focusing workouts.

use std::time::Duration;

use workout_tracker::db::{MemoryStore, WorkoutDb};
use workout_tracker::error::TrackerError;
use workout_tracker::models::{Coordinates, NewWorkout};
use workout_tracker::services::{LocationError, PanOptions, Tracker, WorkoutService};

mod common;
use common::{cycling_form, lisbon, memory_service, running_form, RecordingMap, ScriptedLocation};

fn located(at: Coordinates) -> ScriptedLocation {
    ScriptedLocation {
        answer: Ok(at),
        requests: 0,
    }
}

fn tracker() -> Tracker<MemoryStore, RecordingMap> {
    let (service, _) = memory_service();
    Tracker::new(service, RecordingMap::default())
}

#[test]
fn test_start_centers_map_and_renders_stored_workouts() {
    let (mut seed, store) = memory_service();
    let stored = seed
        .create(NewWorkout::running(lisbon(), 5.0, 25.0, 170))
        .unwrap();

    let (service, _) = WorkoutService::open(WorkoutDb::new(store)).unwrap();
    let mut tracker = Tracker::new(service, RecordingMap::default());
    let home = Coordinates::new(38.7, -9.1);
    let mut location = located(home);

    assert_eq!(tracker.start(&mut location).unwrap(), home);

    assert_eq!(location.requests, 1);
    assert!(tracker.is_map_ready());
    assert_eq!(tracker.map().views, vec![(home, 13)]);
    assert_eq!(tracker.map().markers.len(), 1);
    assert_eq!(tracker.map().markers[0].label, stored.popup_label());
    assert_eq!(tracker.map().markers[0].class_name, "running-popup");
}

#[test]
fn test_location_failure_is_reported_and_session_continues() {
    let mut tracker = tracker();
    let mut location = ScriptedLocation {
        answer: Err(LocationError::PermissionDenied),
        requests: 0,
    };

    let err = tracker.start(&mut location).unwrap_err();
    assert!(matches!(err, TrackerError::Location(_)));
    assert_eq!(err.user_notice(), "Could not get your current location");
    assert_eq!(location.requests, 1);
    assert!(!tracker.is_map_ready());

    // Still usable without a map
    tracker.on_map_click(lisbon());
    let workout = tracker.submit(&running_form("5", "25", "170")).unwrap();
    assert!(tracker.map().markers.is_empty());

    let selection = tracker.focus(workout.id().as_str()).unwrap();
    assert_eq!(selection.workout.clicks(), 1);
    assert!(tracker.map().pans.is_empty());
}

#[test]
fn test_submit_places_marker_at_clicked_position() {
    let mut tracker = tracker();
    tracker.start(&mut located(lisbon())).unwrap();

    let clicked = Coordinates::new(38.71, -9.15);
    tracker.on_map_click(clicked);
    let workout = tracker.submit(&cycling_form("27", "95", "523")).unwrap();

    assert_eq!(workout.coords(), clicked);
    assert_eq!(tracker.pending_click(), None);
    assert_eq!(tracker.map().markers.last().unwrap().coords, clicked);
    assert_eq!(tracker.workouts().len(), 1);
}

#[test]
fn test_submit_without_click_is_rejected() {
    let mut tracker = tracker();
    let err = tracker.submit(&running_form("5", "25", "170")).unwrap_err();
    assert!(err.is_validation());
    assert!(tracker.workouts().is_empty());
}

#[test]
fn test_rejected_form_keeps_click_and_collection() {
    let mut tracker = tracker();
    tracker.on_map_click(lisbon());

    for form in [
        running_form("0", "25", "170"),
        running_form("5", "-1", "170"),
        running_form("5", "25", "fast"),
    ] {
        let err = tracker.submit(&form).unwrap_err();
        assert_eq!(err.user_notice(), TrackerError::INVALID_INPUT_NOTICE);
    }

    assert_eq!(tracker.pending_click(), Some(lisbon()));
    assert!(tracker.workouts().is_empty());
}

#[test]
fn test_focus_pans_with_animation() {
    let mut tracker = tracker();
    tracker.start(&mut located(Coordinates::new(0.0, 0.0))).unwrap();
    tracker.on_map_click(lisbon());
    let workout = tracker.submit(&running_form("10", "50", "178")).unwrap();

    let selection = tracker.focus(workout.id().as_str()).unwrap();

    assert_eq!(selection.coords, lisbon());
    assert_eq!(
        tracker.map().pans,
        vec![(
            lisbon(),
            13,
            PanOptions {
                animate: true,
                duration: Duration::from_secs(1)
            }
        )]
    );
}

#[test]
fn test_reset_clears_everything() {
    let mut tracker = tracker();
    tracker.on_map_click(lisbon());
    tracker.submit(&running_form("10", "50", "178")).unwrap();
    tracker.on_map_click(lisbon());

    tracker.reset().unwrap();

    assert!(tracker.workouts().is_empty());
    assert_eq!(tracker.pending_click(), None);
}
