use std::sync::Arc;

use actix_web::web;

use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::ports::incoming::use_cases::{
    CreateContactUseCase, GetContactsUseCase, PatchContactUseCase,
};
use crate::modules::cv::application::cv_use_cases::CvUseCases;
use crate::modules::cv::application::ports::incoming::use_cases::{
    BrowseCvsUseCase, CreateCvUseCase, DeleteCvUseCase, GetCvsUseCase, GetSingleCvUseCase,
    PatchCvUseCase, UpdateCvUseCase,
};
use crate::modules::email::application::email_use_cases::EmailUseCases;
use crate::modules::email::application::ports::incoming::use_cases::SendCvEmailUseCase;
use crate::modules::jobs::application::job_use_cases::JobUseCases;
use crate::modules::jobs::application::ports::incoming::use_cases::GetJobStatusUseCase;
use crate::modules::pdf::application::pdf_use_cases::PdfUseCases;
use crate::modules::pdf::application::ports::incoming::use_cases::ExportCvPdfUseCase;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectsUseCase, PatchProjectUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::request_log::application::ports::incoming::use_cases::{
    BrowseRequestLogsUseCase, RecordRequestUseCase,
};
use crate::modules::request_log::application::request_log_use_cases::RequestLogUseCases;
use crate::modules::settings::application::ports::incoming::use_cases::GetSettingsUseCase;
use crate::modules::settings::application::settings_use_cases::SettingsUseCases;
use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillUseCase, GetCvSkillsUseCase, GetSkillsUseCase, PatchSkillUseCase,
    UpdateSkillUseCase,
};
use crate::modules::skill::application::skill_use_cases::SkillUseCases;
use crate::modules::translation::application::ports::incoming::use_cases::TranslateCvUseCase;
use crate::modules::translation::application::translation_use_cases::TranslationUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` whose use cases default to empty-store stubs.
pub struct TestAppStateBuilder {
    cv: CvUseCases,
    skill: SkillUseCases,
    project: ProjectUseCases,
    contact: ContactUseCases,
    request_log: RequestLogUseCases,
    jobs: JobUseCases,
    pdf: PdfUseCases,
    email: EmailUseCases,
    translation: TranslationUseCases,
    settings: SettingsUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let cv = Arc::new(StubCv);
        let skill = Arc::new(StubSkill);
        let project = Arc::new(StubProject);
        let contact = Arc::new(StubContact);
        let request_log = Arc::new(StubRequestLog);
        let services = Arc::new(StubServices);

        Self {
            cv: CvUseCases {
                create: cv.clone(),
                get_list: cv.clone(),
                get_single: cv.clone(),
                browse: cv.clone(),
                update: cv.clone(),
                patch: cv.clone(),
                delete: cv,
            },
            skill: SkillUseCases {
                create: skill.clone(),
                get_list: skill.clone(),
                get_for_cv: skill.clone(),
                get_single: skill.clone(),
                update: skill.clone(),
                patch: skill.clone(),
                delete: skill,
            },
            project: ProjectUseCases {
                create: project.clone(),
                get_list: project.clone(),
                get_for_cv: project.clone(),
                get_single: project.clone(),
                update: project.clone(),
                patch: project.clone(),
                delete: project,
            },
            contact: ContactUseCases {
                create: contact.clone(),
                get_list: contact.clone(),
                get_for_cv: contact.clone(),
                get_single: contact.clone(),
                update: contact.clone(),
                patch: contact.clone(),
                delete: contact,
            },
            request_log: RequestLogUseCases {
                record: request_log.clone(),
                browse: request_log.clone(),
                cleanup: request_log,
            },
            jobs: JobUseCases {
                status: services.clone(),
            },
            pdf: PdfUseCases {
                export: services.clone(),
            },
            email: EmailUseCases {
                send_cv: services.clone(),
            },
            translation: TranslationUseCases {
                translate: services.clone(),
            },
            settings: SettingsUseCases { get: services },
        }
    }
}

impl TestAppStateBuilder {
    // CV
    pub fn with_create_cv(mut self, uc: impl CreateCvUseCase + 'static) -> Self {
        self.cv.create = Arc::new(uc);
        self
    }

    pub fn with_get_cvs(mut self, uc: impl GetCvsUseCase + 'static) -> Self {
        self.cv.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_cv(mut self, uc: Arc<dyn GetSingleCvUseCase + Send + Sync>) -> Self {
        self.cv.get_single = uc;
        self
    }

    pub fn with_browse_cvs(mut self, uc: Arc<dyn BrowseCvsUseCase + Send + Sync>) -> Self {
        self.cv.browse = uc;
        self
    }

    pub fn with_update_cv(mut self, uc: impl UpdateCvUseCase + 'static) -> Self {
        self.cv.update = Arc::new(uc);
        self
    }

    pub fn with_patch_cv(mut self, uc: impl PatchCvUseCase + 'static) -> Self {
        self.cv.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_cv(mut self, uc: impl DeleteCvUseCase + 'static) -> Self {
        self.cv.delete = Arc::new(uc);
        self
    }

    // Skill
    pub fn with_create_skill(mut self, uc: impl CreateSkillUseCase + 'static) -> Self {
        self.skill.create = Arc::new(uc);
        self
    }

    pub fn with_get_skills(mut self, uc: impl GetSkillsUseCase + 'static) -> Self {
        self.skill.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_cv_skills(mut self, uc: impl GetCvSkillsUseCase + 'static) -> Self {
        self.skill.get_for_cv = Arc::new(uc);
        self
    }

    pub fn with_update_skill(mut self, uc: impl UpdateSkillUseCase + 'static) -> Self {
        self.skill.update = Arc::new(uc);
        self
    }

    pub fn with_patch_skill(mut self, uc: impl PatchSkillUseCase + 'static) -> Self {
        self.skill.patch = Arc::new(uc);
        self
    }

    // Project
    pub fn with_create_project(mut self, uc: impl CreateProjectUseCase + 'static) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + 'static) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_patch_project(mut self, uc: impl PatchProjectUseCase + 'static) -> Self {
        self.project.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_project(mut self, uc: impl DeleteProjectUseCase + 'static) -> Self {
        self.project.delete = Arc::new(uc);
        self
    }

    // Contact
    pub fn with_create_contact(mut self, uc: impl CreateContactUseCase + 'static) -> Self {
        self.contact.create = Arc::new(uc);
        self
    }

    pub fn with_get_contacts(mut self, uc: impl GetContactsUseCase + 'static) -> Self {
        self.contact.get_list = Arc::new(uc);
        self
    }

    pub fn with_patch_contact(mut self, uc: impl PatchContactUseCase + 'static) -> Self {
        self.contact.patch = Arc::new(uc);
        self
    }

    // Request log
    pub fn with_record_request(mut self, uc: Arc<dyn RecordRequestUseCase + Send + Sync>) -> Self {
        self.request_log.record = uc;
        self
    }

    pub fn with_browse_request_logs(
        mut self,
        uc: Arc<dyn BrowseRequestLogsUseCase + Send + Sync>,
    ) -> Self {
        self.request_log.browse = uc;
        self
    }

    // Jobs, exports and settings
    pub fn with_job_status(mut self, uc: Arc<dyn GetJobStatusUseCase + Send + Sync>) -> Self {
        self.jobs.status = uc;
        self
    }

    pub fn with_export_pdf(mut self, uc: Arc<dyn ExportCvPdfUseCase + Send + Sync>) -> Self {
        self.pdf.export = uc;
        self
    }

    pub fn with_send_cv_email(mut self, uc: Arc<dyn SendCvEmailUseCase + Send + Sync>) -> Self {
        self.email.send_cv = uc;
        self
    }

    pub fn with_translate_cv(mut self, uc: Arc<dyn TranslateCvUseCase + Send + Sync>) -> Self {
        self.translation.translate = uc;
        self
    }

    pub fn with_get_settings(mut self, uc: Arc<dyn GetSettingsUseCase + Send + Sync>) -> Self {
        self.settings.get = uc;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            cv: self.cv,
            skill: self.skill,
            project: self.project,
            contact: self.contact,
            request_log: self.request_log,
            jobs: self.jobs,
            pdf: self.pdf,
            email: self.email,
            translation: self.translation,
            settings: self.settings,
        })
    }
}
