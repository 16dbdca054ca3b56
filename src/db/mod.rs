//! Persistence layer (key-value store).

pub mod store;
pub mod workouts;

pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use workouts::WorkoutDb;

/// Key the workout collection is stored under.
pub const WORKOUTS_KEY: &str = "workouts";
