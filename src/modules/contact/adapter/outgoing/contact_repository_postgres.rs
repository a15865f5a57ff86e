use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter, Set,
};
use std::sync::Arc;

use crate::modules::contact::adapter::outgoing::sea_orm_entity::contacts::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError, ContactResult, CreateContactData,
    PatchContactData, UpdateContactData,
};
use crate::modules::contact::domain::ContactType;
use crate::shared::db_error::{classify, DbErrorKind};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn update_returning(
        &self,
        contact_id: i32,
        model: ActiveModel,
    ) -> Result<ContactResult, ContactRepositoryError> {
        Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(contact_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_write_err)?
            .into_iter()
            .next()
            .map(model_to_result)
            .ok_or(ContactRepositoryError::NotFound)
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn create_contact(
        &self,
        data: CreateContactData,
    ) -> Result<ContactResult, ContactRepositoryError> {
        let model = ActiveModel {
            id: NotSet,
            cv_id: Set(data.cv_id),
            contact_type: Set(data.contact_type.as_str().to_string()),
            value: Set(data.value),
            url: Set(data.url),
        };

        let result = model.insert(&*self.db).await.map_err(map_write_err)?;

        Ok(model_to_result(result))
    }

    async fn update_contact(
        &self,
        contact_id: i32,
        data: UpdateContactData,
    ) -> Result<ContactResult, ContactRepositoryError> {
        let model = ActiveModel {
            cv_id: Set(data.cv_id),
            contact_type: Set(data.contact_type.as_str().to_string()),
            value: Set(data.value),
            url: Set(data.url),
            ..Default::default()
        };

        self.update_returning(contact_id, model).await
    }

    async fn patch_contact(
        &self,
        contact_id: i32,
        data: PatchContactData,
    ) -> Result<ContactResult, ContactRepositoryError> {
        if data.is_empty() {
            return Entity::find_by_id(contact_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .map(model_to_result)
                .ok_or(ContactRepositoryError::NotFound);
        }

        let mut model = <ActiveModel as Default>::default();

        if let Some(cv_id) = data.cv_id {
            model.cv_id = Set(cv_id);
        }
        if let Some(contact_type) = data.contact_type {
            model.contact_type = Set(contact_type.as_str().to_string());
        }
        if let Some(value) = data.value {
            model.value = Set(value);
        }
        if let Some(url) = data.url {
            model.url = Set(url);
        }

        self.update_returning(contact_id, model).await
    }

    async fn delete_contact(&self, contact_id: i32) -> Result<(), ContactRepositoryError> {
        let result = Entity::delete_by_id(contact_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ContactRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

pub(crate) fn model_to_result(model: contacts::Model) -> ContactResult {
    ContactResult {
        id: model.id,
        cv_id: model.cv_id,
        contact_type: model.contact_type.parse().unwrap_or(ContactType::Other),
        value: model.value,
        url: model.url,
    }
}

fn map_write_err(e: DbErr) -> ContactRepositoryError {
    match classify(&e) {
        DbErrorKind::UniqueViolation => ContactRepositoryError::AlreadyExists,
        DbErrorKind::ForeignKeyViolation => ContactRepositoryError::CvNotFound,
        DbErrorKind::Other => ContactRepositoryError::DatabaseError(e.to_string()),
    }
}

fn map_db_err(e: DbErr) -> ContactRepositoryError {
    ContactRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn mock_model(id: i32, contact_type: &str) -> contacts::Model {
        contacts::Model {
            id,
            cv_id: 1,
            contact_type: contact_type.to_string(),
            value: "ada".to_string(),
            url: "https://github.com/ada".to_string(),
        }
    }

    fn data() -> CreateContactData {
        CreateContactData {
            cv_id: 1,
            contact_type: ContactType::Github,
            value: "ada".to_string(),
            url: "https://github.com/ada".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_contact_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model(1, "github")]])
            .into_connection();

        let repo = ContactRepositoryPostgres::new(Arc::new(db));
        let created = repo.create_contact(data()).await.unwrap();

        assert_eq!(created.contact_type, ContactType::Github);
    }

    #[tokio::test]
    async fn test_create_contact_duplicate_type() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "duplicate key value violates unique constraint \"idx_contacts_cv_type_unique\""
                    .to_string(),
            )])
            .into_connection();

        let repo = ContactRepositoryPostgres::new(Arc::new(db));

        assert_eq!(
            repo.create_contact(data()).await.unwrap_err(),
            ContactRepositoryError::AlreadyExists
        );
    }

    #[test]
    fn test_unknown_stored_type_reads_as_other() {
        let result = model_to_result(mock_model(1, "myspace"));
        assert_eq!(result.contact_type, ContactType::Other);
    }

    #[tokio::test]
    async fn test_delete_contact_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = ContactRepositoryPostgres::new(Arc::new(db));

        assert_eq!(
            repo.delete_contact(4).await.unwrap_err(),
            ContactRepositoryError::NotFound
        );
    }
}
