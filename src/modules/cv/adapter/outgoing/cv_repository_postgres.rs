use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter, Set,
};
use std::sync::Arc;

use crate::modules::cv::adapter::outgoing::sea_orm_entity::cvs::{self, ActiveModel, Column, Entity};
use crate::modules::cv::application::ports::outgoing::{
    CreateCvData, CvRepository, CvRepositoryError, CvResult, PatchCvData, UpdateCvData,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct CvRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CvRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CvRepository for CvRepositoryPostgres {
    async fn create_cv(&self, data: CreateCvData) -> Result<CvResult, CvRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: NotSet,
            firstname: Set(data.firstname),
            lastname: Set(data.lastname),
            email: Set(data.email),
            phone: Set(data.phone),
            bio: Set(data.bio),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_write_err)?;

        Ok(model_to_result(result))
    }

    async fn update_cv(&self, cv_id: i32, data: UpdateCvData) -> Result<CvResult, CvRepositoryError> {
        let model = ActiveModel {
            firstname: Set(data.firstname),
            lastname: Set(data.lastname),
            email: Set(data.email),
            phone: Set(data.phone),
            bio: Set(data.bio),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        self.update_returning(cv_id, model).await
    }

    async fn patch_cv(&self, cv_id: i32, data: PatchCvData) -> Result<CvResult, CvRepositoryError> {
        if data.is_empty() {
            let existing = Entity::find_by_id(cv_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(CvRepositoryError::NotFound)?;

            return Ok(model_to_result(existing));
        }

        let mut model = <ActiveModel as Default>::default();

        if let Some(firstname) = data.firstname {
            model.firstname = Set(firstname);
        }
        if let Some(lastname) = data.lastname {
            model.lastname = Set(lastname);
        }
        if let Some(email) = data.email {
            model.email = Set(email);
        }
        if let Some(phone) = data.phone {
            model.phone = Set(phone);
        }
        if let Some(bio) = data.bio {
            model.bio = Set(bio);
        }
        model.updated_at = Set(Utc::now().fixed_offset());

        self.update_returning(cv_id, model).await
    }

    async fn delete_cv(&self, cv_id: i32) -> Result<(), CvRepositoryError> {
        let result = Entity::delete_by_id(cv_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CvRepositoryError::NotFound);
        }

        Ok(())
    }
}

impl CvRepositoryPostgres {
    async fn update_returning(
        &self,
        cv_id: i32,
        model: ActiveModel,
    ) -> Result<CvResult, CvRepositoryError> {
        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(cv_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_write_err)?;

        results
            .into_iter()
            .next()
            .map(model_to_result)
            .ok_or(CvRepositoryError::NotFound)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_result(model: cvs::Model) -> CvResult {
    CvResult {
        id: model.id,
        firstname: model.firstname,
        lastname: model.lastname,
        email: model.email,
        phone: model.phone,
        bio: model.bio,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_write_err(e: DbErr) -> CvRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("email")
    {
        CvRepositoryError::EmailAlreadyExists
    } else {
        CvRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> CvRepositoryError {
    CvRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
