use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;

use crate::modules::cv::application::ports::outgoing::{
    CreateCvData, CvDetailView, CvListFilter, CvQuery, CvQueryError, CvRepository,
    CvRepositoryError, CvResult, CvSummaryView, PatchCvData, UpdateCvData,
};
use crate::shared::pagination::{PageRequest, PageResult};

pub fn sample_cv_result(id: i32) -> CvResult {
    CvResult {
        id,
        firstname: "Ada".to_string(),
        lastname: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "+44 20 7946 0000".to_string(),
        bio: "Analyst of engines.".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn sample_cv_detail(id: i32) -> CvDetailView {
    let cv = sample_cv_result(id);
    CvDetailView {
        id,
        full_name: format!("{} {}", cv.firstname, cv.lastname),
        firstname: cv.firstname,
        lastname: cv.lastname,
        email: cv.email,
        phone: cv.phone,
        bio: cv.bio,
        created_at: cv.created_at,
        updated_at: cv.updated_at,
        skills: vec![],
        projects: vec![],
        contacts: vec![],
    }
}

/// Returns the configured result for every write and records the last call.
pub struct MockCvRepo {
    pub result: Result<CvResult, CvRepositoryError>,
    pub last_patch: Mutex<Option<PatchCvData>>,
}

impl MockCvRepo {
    pub fn new(result: Result<CvResult, CvRepositoryError>) -> Self {
        Self {
            result,
            last_patch: Mutex::new(None),
        }
    }
}

#[async_trait]
impl CvRepository for MockCvRepo {
    async fn create_cv(&self, _data: CreateCvData) -> Result<CvResult, CvRepositoryError> {
        self.result.clone()
    }

    async fn update_cv(&self, _cv_id: i32, _data: UpdateCvData) -> Result<CvResult, CvRepositoryError> {
        self.result.clone()
    }

    async fn patch_cv(&self, _cv_id: i32, data: PatchCvData) -> Result<CvResult, CvRepositoryError> {
        *self.last_patch.lock().unwrap() = Some(data);
        self.result.clone()
    }

    async fn delete_cv(&self, _cv_id: i32) -> Result<(), CvRepositoryError> {
        self.result.clone().map(|_| ())
    }
}

pub struct MockCvQuery {
    pub detail: Result<CvDetailView, CvQueryError>,
    pub last_filter: Mutex<Option<CvListFilter>>,
}

impl MockCvQuery {
    pub fn new(detail: Result<CvDetailView, CvQueryError>) -> Self {
        Self {
            detail,
            last_filter: Mutex::new(None),
        }
    }
}

#[async_trait]
impl CvQuery for MockCvQuery {
    async fn get_detail(&self, _cv_id: i32) -> Result<CvDetailView, CvQueryError> {
        self.detail.clone()
    }

    async fn list_details(&self, filter: CvListFilter) -> Result<Vec<CvDetailView>, CvQueryError> {
        *self.last_filter.lock().unwrap() = Some(filter);
        self.detail.clone().map(|d| vec![d])
    }

    async fn list_page(&self, page: PageRequest) -> Result<PageResult<CvSummaryView>, CvQueryError> {
        let detail = self.detail.clone()?;
        Ok(PageResult {
            items: vec![CvSummaryView {
                id: detail.id,
                full_name: detail.full_name,
                email: detail.email,
                phone: detail.phone,
                bio: detail.bio,
                created_at: detail.created_at,
                skill_count: 0,
                project_count: 0,
            }],
            page: page.page,
            per_page: page.per_page,
            total: 1,
        })
    }

    async fn count(&self) -> Result<u64, CvQueryError> {
        self.detail.clone().map(|_| 1)
    }
}
