use thiserror::Error;

/// Errors raised by store accessors.
///
/// The HTTP layer reports all of them the same way; the variants exist so logs can
/// tell a missing row from a broken reference from a connection problem.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no {entity} with id {id}")]
    NotFound { entity: &'static str, id: i64 },

    #[error("constraint violation: {0}")]
    Constraint(#[source] sqlx::Error),

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        let is_constraint = matches!(
            &err,
            sqlx::Error::Database(db) if db.is_foreign_key_violation() || db.is_check_violation()
        );
        if is_constraint {
            StoreError::Constraint(err)
        } else {
            StoreError::Database(err)
        }
    }
}
