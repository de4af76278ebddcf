//! Fitlog store layer
//!
//! Persistence for users and their exercise logs:
//! - [`DocumentStore`]: SQLite-backed JSON document collections
//! - [`UserStore`]: creates and lists user records
//! - [`ExerciseStore`]: appends exercise entries and queries filtered logs

pub mod documents;
pub mod error;
pub mod exercises;
pub mod types;
pub mod users;

pub use documents::DocumentStore;
pub use error::{StoreError, StoreResult};
pub use exercises::ExerciseStore;
pub use types::{format_date, Exercise, LogFilter, User, UserSummary};
pub use users::UserStore;
