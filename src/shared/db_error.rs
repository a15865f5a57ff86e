// src/shared/db_error.rs
use sea_orm::DbErr;

/// Constraint violations the repositories translate into domain errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbErrorKind {
    UniqueViolation,
    ForeignKeyViolation,
    Other,
}

pub fn classify(err: &DbErr) -> DbErrorKind {
    let msg = err.to_string().to_lowercase();

    if msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505") {
        DbErrorKind::UniqueViolation
    } else if msg.contains("foreign key") || msg.contains("23503") {
        DbErrorKind::ForeignKeyViolation
    } else {
        DbErrorKind::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_postgres_messages() {
        let unique = DbErr::Custom(
            "duplicate key value violates unique constraint \"idx_skills_cv_name_unique\"".into(),
        );
        let fk = DbErr::Custom(
            "insert or update on table \"skills\" violates foreign key constraint".into(),
        );

        assert_eq!(classify(&unique), DbErrorKind::UniqueViolation);
        assert_eq!(classify(&fk), DbErrorKind::ForeignKeyViolation);
        assert_eq!(
            classify(&DbErr::Custom("connection reset".into())),
            DbErrorKind::Other
        );
    }
}
