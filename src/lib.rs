// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout Tracker: log runs and rides on a map
//!
//! This crate provides the workout domain model, the reconciliation of
//! stored records back into typed workouts, and whole-collection
//! persistence on a plain key-value store.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;
