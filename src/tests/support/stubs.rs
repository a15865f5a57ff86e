//! Default use cases for route tests: every store is empty.

use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::contact::application::ports::incoming::use_cases::{
    CreateContactCommand, CreateContactError, CreateContactUseCase, DeleteContactError,
    DeleteContactUseCase, GetContactsError, GetContactsUseCase, GetCvContactsError,
    GetCvContactsUseCase, GetSingleContactError, GetSingleContactUseCase, PatchContactCommand,
    PatchContactUseCase, UpdateContactError, UpdateContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::ContactResult;
use crate::modules::cv::application::ports::incoming::use_cases::{
    BrowseCvsError, BrowseCvsUseCase, CreateCvCommand, CreateCvError, CreateCvUseCase,
    DeleteCvError, DeleteCvUseCase, GetCvsError, GetCvsUseCase, GetSingleCvError,
    GetSingleCvUseCase, PatchCvCommand, PatchCvError, PatchCvUseCase, UpdateCvError,
    UpdateCvUseCase,
};
use crate::modules::cv::application::ports::outgoing::{
    CvDetailView, CvListFilter, CvResult, CvSummaryView,
};
use crate::modules::email::application::ports::incoming::use_cases::{
    QueuedEmail, SendCvEmailCommand, SendCvEmailError, SendCvEmailUseCase,
};
use crate::modules::jobs::application::ports::incoming::use_cases::{
    GetJobStatusError, GetJobStatusUseCase,
};
use crate::modules::jobs::domain::{JobId, JobRecord};
use crate::modules::pdf::application::ports::incoming::use_cases::{
    CvPdf, ExportCvPdfError, ExportCvPdfUseCase,
};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectCommand, CreateProjectError, CreateProjectUseCase, DeleteProjectError,
    DeleteProjectUseCase, GetCvProjectsError, GetCvProjectsUseCase, GetProjectsError,
    GetProjectsUseCase, GetSingleProjectError, GetSingleProjectUseCase, PatchProjectCommand,
    PatchProjectUseCase, UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectResult;
use crate::modules::request_log::application::ports::incoming::use_cases::{
    BrowseRequestLogsError, BrowseRequestLogsUseCase, CleanupOutcome, CleanupRequestLogsError,
    CleanupRequestLogsUseCase, RecordRequestUseCase, RequestLogPage,
};
use crate::modules::request_log::application::ports::outgoing::{
    NewRequestLog, RequestLogFilter, RequestLogStats,
};
use crate::modules::settings::application::ports::incoming::use_cases::{
    GetSettingsError, GetSettingsUseCase, SettingsOverview,
};
use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillCommand, CreateSkillError, CreateSkillUseCase, DeleteSkillError,
    DeleteSkillUseCase, GetCvSkillsError, GetCvSkillsUseCase, GetSingleSkillError,
    GetSingleSkillUseCase, GetSkillsError, GetSkillsUseCase, PatchSkillCommand,
    PatchSkillUseCase, UpdateSkillError, UpdateSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::SkillResult;
use crate::modules::translation::application::ports::incoming::use_cases::{
    QueuedTranslation, TranslateCvError, TranslateCvUseCase,
};
use crate::modules::translation::domain::TargetLanguage;
use crate::shared::pagination::{PageRequest, PageResult};

fn empty_page<T>(page: PageRequest) -> PageResult<T> {
    PageResult {
        items: Vec::new(),
        page: page.page,
        per_page: page.per_page,
        total: 0,
    }
}

// ── CV ──────────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubCv;

#[async_trait]
impl CreateCvUseCase for StubCv {
    async fn execute(&self, _command: CreateCvCommand) -> Result<CvResult, CreateCvError> {
        Err(CreateCvError::RepositoryError("stub".to_string()))
    }
}

#[async_trait]
impl GetCvsUseCase for StubCv {
    async fn execute(&self, _filter: CvListFilter) -> Result<Vec<CvDetailView>, GetCvsError> {
        Ok(Vec::new())
    }
}

#[async_trait]
impl GetSingleCvUseCase for StubCv {
    async fn execute(&self, _cv_id: i32) -> Result<CvDetailView, GetSingleCvError> {
        Err(GetSingleCvError::NotFound)
    }
}

#[async_trait]
impl BrowseCvsUseCase for StubCv {
    async fn execute(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<CvSummaryView>, BrowseCvsError> {
        Ok(empty_page(page))
    }
}

#[async_trait]
impl UpdateCvUseCase for StubCv {
    async fn execute(
        &self,
        _cv_id: i32,
        _command: CreateCvCommand,
    ) -> Result<CvResult, UpdateCvError> {
        Err(UpdateCvError::NotFound)
    }
}

#[async_trait]
impl PatchCvUseCase for StubCv {
    async fn execute(&self, _cv_id: i32, _command: PatchCvCommand) -> Result<CvResult, PatchCvError> {
        Err(PatchCvError::NotFound)
    }
}

#[async_trait]
impl DeleteCvUseCase for StubCv {
    async fn execute(&self, _cv_id: i32) -> Result<(), DeleteCvError> {
        Err(DeleteCvError::NotFound)
    }
}

/// Returns the same CV for every id.
pub struct FixedGetSingleCv(CvDetailView);

impl FixedGetSingleCv {
    pub fn found(cv: CvDetailView) -> Arc<Self> {
        Arc::new(Self(cv))
    }
}

#[async_trait]
impl GetSingleCvUseCase for FixedGetSingleCv {
    async fn execute(&self, _cv_id: i32) -> Result<CvDetailView, GetSingleCvError> {
        Ok(self.0.clone())
    }
}

// ── Skill ───────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubSkill;

#[async_trait]
impl CreateSkillUseCase for StubSkill {
    async fn execute(&self, _command: CreateSkillCommand) -> Result<SkillResult, CreateSkillError> {
        Err(CreateSkillError::CvNotFound)
    }
}

#[async_trait]
impl GetSkillsUseCase for StubSkill {
    async fn execute(&self, _cv_id: Option<i32>) -> Result<Vec<SkillResult>, GetSkillsError> {
        Ok(Vec::new())
    }
}

#[async_trait]
impl GetCvSkillsUseCase for StubSkill {
    async fn execute(&self, _cv_id: i32) -> Result<Vec<SkillResult>, GetCvSkillsError> {
        Err(GetCvSkillsError::CvNotFound)
    }
}

#[async_trait]
impl GetSingleSkillUseCase for StubSkill {
    async fn execute(&self, _skill_id: i32) -> Result<SkillResult, GetSingleSkillError> {
        Err(GetSingleSkillError::NotFound)
    }
}

#[async_trait]
impl UpdateSkillUseCase for StubSkill {
    async fn execute(
        &self,
        _skill_id: i32,
        _command: CreateSkillCommand,
    ) -> Result<SkillResult, UpdateSkillError> {
        Err(UpdateSkillError::NotFound)
    }
}

#[async_trait]
impl PatchSkillUseCase for StubSkill {
    async fn execute(
        &self,
        _skill_id: i32,
        _command: PatchSkillCommand,
    ) -> Result<SkillResult, UpdateSkillError> {
        Err(UpdateSkillError::NotFound)
    }
}

#[async_trait]
impl DeleteSkillUseCase for StubSkill {
    async fn execute(&self, _skill_id: i32) -> Result<(), DeleteSkillError> {
        Err(DeleteSkillError::NotFound)
    }
}

// ── Project ─────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubProject;

#[async_trait]
impl CreateProjectUseCase for StubProject {
    async fn execute(
        &self,
        _command: CreateProjectCommand,
    ) -> Result<ProjectResult, CreateProjectError> {
        Err(CreateProjectError::CvNotFound)
    }
}

#[async_trait]
impl GetProjectsUseCase for StubProject {
    async fn execute(&self, _cv_id: Option<i32>) -> Result<Vec<ProjectResult>, GetProjectsError> {
        Ok(Vec::new())
    }
}

#[async_trait]
impl GetCvProjectsUseCase for StubProject {
    async fn execute(&self, _cv_id: i32) -> Result<Vec<ProjectResult>, GetCvProjectsError> {
        Err(GetCvProjectsError::CvNotFound)
    }
}

#[async_trait]
impl GetSingleProjectUseCase for StubProject {
    async fn execute(&self, _project_id: i32) -> Result<ProjectResult, GetSingleProjectError> {
        Err(GetSingleProjectError::NotFound)
    }
}

#[async_trait]
impl UpdateProjectUseCase for StubProject {
    async fn execute(
        &self,
        _project_id: i32,
        _command: CreateProjectCommand,
    ) -> Result<ProjectResult, UpdateProjectError> {
        Err(UpdateProjectError::NotFound)
    }
}

#[async_trait]
impl PatchProjectUseCase for StubProject {
    async fn execute(
        &self,
        _project_id: i32,
        _command: PatchProjectCommand,
    ) -> Result<ProjectResult, UpdateProjectError> {
        Err(UpdateProjectError::NotFound)
    }
}

#[async_trait]
impl DeleteProjectUseCase for StubProject {
    async fn execute(&self, _project_id: i32) -> Result<(), DeleteProjectError> {
        Err(DeleteProjectError::NotFound)
    }
}

// ── Contact ─────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubContact;

#[async_trait]
impl CreateContactUseCase for StubContact {
    async fn execute(
        &self,
        _command: CreateContactCommand,
    ) -> Result<ContactResult, CreateContactError> {
        Err(CreateContactError::CvNotFound)
    }
}

#[async_trait]
impl GetContactsUseCase for StubContact {
    async fn execute(&self, _cv_id: Option<i32>) -> Result<Vec<ContactResult>, GetContactsError> {
        Ok(Vec::new())
    }
}

#[async_trait]
impl GetCvContactsUseCase for StubContact {
    async fn execute(&self, _cv_id: i32) -> Result<Vec<ContactResult>, GetCvContactsError> {
        Err(GetCvContactsError::CvNotFound)
    }
}

#[async_trait]
impl GetSingleContactUseCase for StubContact {
    async fn execute(&self, _contact_id: i32) -> Result<ContactResult, GetSingleContactError> {
        Err(GetSingleContactError::NotFound)
    }
}

#[async_trait]
impl UpdateContactUseCase for StubContact {
    async fn execute(
        &self,
        _contact_id: i32,
        _command: CreateContactCommand,
    ) -> Result<ContactResult, UpdateContactError> {
        Err(UpdateContactError::NotFound)
    }
}

#[async_trait]
impl PatchContactUseCase for StubContact {
    async fn execute(
        &self,
        _contact_id: i32,
        _command: PatchContactCommand,
    ) -> Result<ContactResult, UpdateContactError> {
        Err(UpdateContactError::NotFound)
    }
}

#[async_trait]
impl DeleteContactUseCase for StubContact {
    async fn execute(&self, _contact_id: i32) -> Result<(), DeleteContactError> {
        Err(DeleteContactError::NotFound)
    }
}

// ── Request log ─────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubRequestLog;

impl RecordRequestUseCase for StubRequestLog {
    fn record(&self, _entry: NewRequestLog) {}
}

#[async_trait]
impl BrowseRequestLogsUseCase for StubRequestLog {
    async fn execute(
        &self,
        _filter: RequestLogFilter,
        page: PageRequest,
    ) -> Result<RequestLogPage, BrowseRequestLogsError> {
        Ok(RequestLogPage {
            logs: empty_page(page),
            stats: RequestLogStats::default(),
        })
    }
}

#[async_trait]
impl CleanupRequestLogsUseCase for StubRequestLog {
    async fn execute(&self, _days: u32) -> Result<CleanupOutcome, CleanupRequestLogsError> {
        Err(CleanupRequestLogsError::RepositoryError("stub".to_string()))
    }
}

// ── Jobs, exports and settings ─────────────────────────────

#[derive(Default, Clone)]
pub struct StubServices;

#[async_trait]
impl GetJobStatusUseCase for StubServices {
    async fn execute(&self, job_id: JobId) -> Result<JobRecord, GetJobStatusError> {
        Ok(JobRecord::pending(job_id, None))
    }
}

#[async_trait]
impl ExportCvPdfUseCase for StubServices {
    async fn execute(&self, _cv_id: i32) -> Result<CvPdf, ExportCvPdfError> {
        Err(ExportCvPdfError::NotFound)
    }
}

#[async_trait]
impl SendCvEmailUseCase for StubServices {
    async fn execute(
        &self,
        cv_id: i32,
        _command: SendCvEmailCommand,
    ) -> Result<QueuedEmail, SendCvEmailError> {
        Err(SendCvEmailError::CvNotFound(cv_id))
    }
}

#[async_trait]
impl TranslateCvUseCase for StubServices {
    async fn execute(
        &self,
        _cv_id: i32,
        _language: TargetLanguage,
    ) -> Result<QueuedTranslation, TranslateCvError> {
        Err(TranslateCvError::NotConfigured)
    }
}

#[async_trait]
impl GetSettingsUseCase for StubServices {
    async fn execute(&self) -> Result<SettingsOverview, GetSettingsError> {
        Err(GetSettingsError::StatsFailed("stub".to_string()))
    }
}
