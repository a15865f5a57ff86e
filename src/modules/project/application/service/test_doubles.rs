use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Mutex;

use crate::modules::project::application::ports::outgoing::{
    CreateProjectData, PatchProjectData, ProjectQuery, ProjectQueryError, ProjectRepository,
    ProjectRepositoryError, ProjectResult, UpdateProjectData,
};

pub fn sample_project(id: i32, cv_id: i32) -> ProjectResult {
    ProjectResult {
        id,
        cv_id,
        title: "CV Manager".to_string(),
        description: "Manages CVs".to_string(),
        technologies: "Python, Django".to_string(),
        technologies_list: vec!["Python".to_string(), "Django".to_string()],
        url: None,
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        end_date: None,
        is_ongoing: true,
    }
}

pub struct MockProjectRepo {
    pub result: Result<ProjectResult, ProjectRepositoryError>,
    pub last_patch: Mutex<Option<PatchProjectData>>,
}

impl MockProjectRepo {
    pub fn new(result: Result<ProjectResult, ProjectRepositoryError>) -> Self {
        Self {
            result,
            last_patch: Mutex::new(None),
        }
    }
}

#[async_trait]
impl ProjectRepository for MockProjectRepo {
    async fn create_project(
        &self,
        _data: CreateProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError> {
        self.result.clone()
    }

    async fn update_project(
        &self,
        _project_id: i32,
        _data: UpdateProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError> {
        self.result.clone()
    }

    async fn patch_project(
        &self,
        _project_id: i32,
        data: PatchProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError> {
        *self.last_patch.lock().unwrap() = Some(data);
        self.result.clone()
    }

    async fn delete_project(&self, _project_id: i32) -> Result<(), ProjectRepositoryError> {
        self.result.clone().map(|_| ())
    }
}

pub struct MockProjectQuery {
    pub result: Result<Vec<ProjectResult>, ProjectQueryError>,
}

#[async_trait]
impl ProjectQuery for MockProjectQuery {
    async fn get_by_id(&self, project_id: i32) -> Result<ProjectResult, ProjectQueryError> {
        self.result
            .clone()?
            .into_iter()
            .find(|p| p.id == project_id)
            .ok_or(ProjectQueryError::NotFound)
    }

    async fn list(&self, cv_id: Option<i32>) -> Result<Vec<ProjectResult>, ProjectQueryError> {
        Ok(self
            .result
            .clone()?
            .into_iter()
            .filter(|p| cv_id.map_or(true, |cv| p.cv_id == cv))
            .collect())
    }

    async fn list_for_cv(&self, cv_id: i32) -> Result<Vec<ProjectResult>, ProjectQueryError> {
        self.list(Some(cv_id)).await
    }
}
