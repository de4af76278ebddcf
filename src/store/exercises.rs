//! Exercise store accessor
//!
//! Appends exercise entries to a user's embedded log and queries them
//! with optional date-range and count filters.

use crate::store::documents::DocumentStore;
use crate::store::error::{StoreError, StoreResult};
use crate::store::types::{Exercise, LogFilter, User, UserSummary};
use crate::store::users::USERS;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;

/// Typed accessor for exercise entries embedded in user documents
pub struct ExerciseStore {
    docs: Arc<DocumentStore>,
}

impl ExerciseStore {
    pub fn new(docs: Arc<DocumentStore>) -> Self {
        Self { docs }
    }

    /// Append an exercise to a user's log
    ///
    /// The date defaults to the current UTC date when absent. Returns
    /// the updated user together with the stored entry.
    pub async fn add(
        &self,
        user_id: &str,
        description: &str,
        duration: i64,
        date: Option<NaiveDate>,
    ) -> StoreResult<(User, Exercise)> {
        let mut user = self.resolve_user(user_id).await?;

        let date = date.unwrap_or_else(|| Utc::now().date_naive());
        let exercise = Exercise::new(description, duration, date);

        user.log.push(exercise.clone());
        self.docs.update(USERS, &user.id, &user).await?;

        tracing::info!(
            user_id = %user.id,
            description = %exercise.description,
            duration = exercise.duration,
            "Added exercise"
        );

        Ok((user, exercise))
    }

    /// Query a user's log with date-range and count filtering
    pub async fn logs(
        &self,
        user_id: &str,
        filter: LogFilter,
    ) -> StoreResult<(UserSummary, Vec<Exercise>)> {
        let user = self.resolve_user(user_id).await?;
        let entries = filter.apply(&user.log);
        Ok((user.summary(), entries))
    }

    async fn resolve_user(&self, user_id: &str) -> StoreResult<User> {
        self.docs
            .find(USERS, user_id)
            .await?
            .ok_or_else(|| StoreError::UserNotFound(user_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::users::UserStore;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    async fn stores() -> (UserStore, ExerciseStore) {
        let docs = Arc::new(DocumentStore::open_in_memory().unwrap());
        (
            UserStore::new(Arc::clone(&docs)),
            ExerciseStore::new(docs),
        )
    }

    #[tokio::test]
    async fn test_add_appends_and_persists() {
        let (users, exercises) = stores().await;
        let user = users.create("alice").await.unwrap();

        let (updated, entry) = exercises
            .add(&user.id, "run", 30, Some(date("2024-01-01")))
            .await
            .unwrap();

        assert_eq!(updated.log, vec![entry.clone()]);
        assert_eq!(entry.description, "run");
        assert_eq!(entry.duration, 30);

        // Survives a fresh read
        let fetched = users.get(&user.id).await.unwrap().unwrap();
        assert_eq!(fetched.log, vec![entry]);
    }

    #[tokio::test]
    async fn test_add_unknown_user() {
        let (_users, exercises) = stores().await;
        let err = exercises.add("missing", "run", 30, None).await.unwrap_err();
        assert!(matches!(err, StoreError::UserNotFound(_)));
    }

    #[tokio::test]
    async fn test_add_defaults_date_to_today() {
        let (users, exercises) = stores().await;
        let user = users.create("alice").await.unwrap();

        let (_, entry) = exercises.add(&user.id, "run", 30, None).await.unwrap();
        assert_eq!(entry.date, Utc::now().date_naive());
    }

    #[tokio::test]
    async fn test_logs_filtering_and_order() {
        let (users, exercises) = stores().await;
        let user = users.create("alice").await.unwrap();

        for (desc, day) in [
            ("run", "2024-01-01"),
            ("swim", "2024-01-15"),
            ("lift", "2024-02-01"),
        ] {
            exercises
                .add(&user.id, desc, 30, Some(date(day)))
                .await
                .unwrap();
        }

        let filter = LogFilter {
            from: Some(date("2024-01-10")),
            to: Some(date("2024-01-31")),
            limit: None,
        };
        let (summary, entries) = exercises.logs(&user.id, filter).await.unwrap();
        assert_eq!(summary.username, "alice");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].description, "swim");

        let filter = LogFilter {
            limit: Some(1),
            ..Default::default()
        };
        let (_, entries) = exercises.logs(&user.id, filter).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].description, "run");
    }

    #[tokio::test]
    async fn test_logs_unknown_user() {
        let (_users, exercises) = stores().await;
        let err = exercises
            .logs("missing", LogFilter::unbounded())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::UserNotFound(_)));
    }

    #[tokio::test]
    async fn test_logs_unbounded_returns_full_log() {
        let (users, exercises) = stores().await;
        let user = users.create("alice").await.unwrap();

        for day in ["2024-01-01", "2024-01-02", "2024-01-03"] {
            exercises
                .add(&user.id, "run", 10, Some(date(day)))
                .await
                .unwrap();
        }

        let (_, entries) = exercises
            .logs(&user.id, LogFilter::unbounded())
            .await
            .unwrap();
        assert_eq!(entries.len(), 3);
    }
}
