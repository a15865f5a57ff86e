use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter, Set,
};
use std::sync::Arc;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::project::application::ports::outgoing::{
    CreateProjectData, PatchProjectData, ProjectRepository, ProjectRepositoryError, ProjectResult,
    UpdateProjectData,
};
use crate::modules::project::domain::{is_ongoing, technologies_list};
use crate::shared::db_error::{classify, DbErrorKind};
use crate::shared::patch_field::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError> {
        let model = ActiveModel {
            id: NotSet,
            cv_id: Set(data.cv_id),
            title: Set(data.title),
            description: Set(data.description),
            technologies: Set(data.technologies),
            url: Set(data.url),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
        };

        let result = model.insert(&*self.db).await.map_err(map_write_err)?;

        Ok(model_to_result(result))
    }

    async fn update_project(
        &self,
        project_id: i32,
        data: UpdateProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError> {
        let model = ActiveModel {
            cv_id: Set(data.cv_id),
            title: Set(data.title),
            description: Set(data.description),
            technologies: Set(data.technologies),
            url: Set(data.url),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            ..Default::default()
        };

        self.update_returning(project_id, model).await
    }

    async fn patch_project(
        &self,
        project_id: i32,
        data: PatchProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError> {
        if data.is_empty() {
            let existing = Entity::find_by_id(project_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(ProjectRepositoryError::NotFound)?;

            return Ok(model_to_result(existing));
        }

        let mut model = <ActiveModel as Default>::default();

        if let Some(cv_id) = data.cv_id {
            model.cv_id = Set(cv_id);
        }
        if let Some(title) = data.title {
            model.title = Set(title);
        }
        if let Some(description) = data.description {
            model.description = Set(description);
        }
        if let Some(technologies) = data.technologies {
            model.technologies = Set(technologies);
        }
        match data.url {
            PatchField::Unset => {}
            PatchField::Null => model.url = Set(None),
            PatchField::Value(url) => model.url = Set(Some(url)),
        }
        if let Some(start_date) = data.start_date {
            model.start_date = Set(start_date);
        }
        match data.end_date {
            PatchField::Unset => {}
            PatchField::Null => model.end_date = Set(None),
            PatchField::Value(end_date) => model.end_date = Set(Some(end_date)),
        }

        self.update_returning(project_id, model).await
    }

    async fn delete_project(&self, project_id: i32) -> Result<(), ProjectRepositoryError> {
        let result = Entity::delete_by_id(project_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }

        Ok(())
    }
}

impl ProjectRepositoryPostgres {
    async fn update_returning(
        &self,
        project_id: i32,
        model: ActiveModel,
    ) -> Result<ProjectResult, ProjectRepositoryError> {
        Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(project_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_write_err)?
            .into_iter()
            .next()
            .map(model_to_result)
            .ok_or(ProjectRepositoryError::NotFound)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

pub(crate) fn model_to_result(model: projects::Model) -> ProjectResult {
    ProjectResult {
        id: model.id,
        cv_id: model.cv_id,
        technologies_list: technologies_list(&model.technologies),
        is_ongoing: is_ongoing(model.end_date),
        title: model.title,
        description: model.description,
        technologies: model.technologies,
        url: model.url,
        start_date: model.start_date,
        end_date: model.end_date,
    }
}

fn map_write_err(e: DbErr) -> ProjectRepositoryError {
    match classify(&e) {
        DbErrorKind::ForeignKeyViolation => ProjectRepositoryError::CvNotFound,
        _ => ProjectRepositoryError::DatabaseError(e.to_string()),
    }
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn mock_model(id: i32, end_date: Option<NaiveDate>) -> projects::Model {
        projects::Model {
            id,
            cv_id: 1,
            title: "CV Manager".to_string(),
            description: "Django app".to_string(),
            technologies: "Python, Django,".to_string(),
            url: None,
            start_date: date(2024, 1, 1),
            end_date,
        }
    }

    fn data() -> CreateProjectData {
        CreateProjectData {
            cv_id: 1,
            title: "CV Manager".to_string(),
            description: "Django app".to_string(),
            technologies: "Python, Django,".to_string(),
            url: None,
            start_date: date(2024, 1, 1),
            end_date: None,
        }
    }

    #[tokio::test]
    async fn test_create_project_derives_fields() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model(2, None)]])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let created = repo.create_project(data()).await.unwrap();

        assert!(created.is_ongoing);
        assert_eq!(created.technologies_list, vec!["Python", "Django"]);
    }

    #[tokio::test]
    async fn test_create_project_unknown_cv() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "violates foreign key constraint \"fk_projects_cv\"".to_string(),
            )])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));

        assert_eq!(
            repo.create_project(data()).await.unwrap_err(),
            ProjectRepositoryError::CvNotFound
        );
    }

    #[tokio::test]
    async fn test_patch_project_clears_end_date() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model(2, None)]])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let patched = repo
            .patch_project(
                2,
                PatchProjectData {
                    end_date: PatchField::Null,
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(patched.is_ongoing);
    }

    #[tokio::test]
    async fn test_empty_patch_reads_current_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model(2, Some(date(2024, 5, 1)))]])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let current = repo
            .patch_project(2, PatchProjectData::default())
            .await
            .unwrap();

        assert!(!current.is_ongoing);
    }

    #[tokio::test]
    async fn test_delete_project() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));

        assert!(repo.delete_project(2).await.is_ok());
    }
}
