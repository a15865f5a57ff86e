pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

#[cfg(test)]
mod tests;

use crate::config::AppConfig;
use crate::modules::contact::adapter::outgoing::{ContactQueryPostgres, ContactRepositoryPostgres};
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::service::{
    CreateContactService, DeleteContactService, GetContactsService, GetCvContactsService,
    GetSingleContactService, PatchContactService, UpdateContactService,
};
use crate::modules::cv::adapter::outgoing::{CvQueryPostgres, CvRepositoryPostgres};
use crate::modules::cv::application::cv_use_cases::CvUseCases;
use crate::modules::cv::application::ports::outgoing::CvQuery;
use crate::modules::cv::application::service::{
    BrowseCvsService, CreateCvService, DeleteCvService, GetCvsService, GetSingleCvService,
    PatchCvService, UpdateCvService,
};
use crate::modules::email::adapter::outgoing::{
    AskamaEmailBodyRenderer, ConsoleEmailSender, SmtpEmailSender,
};
use crate::modules::email::application::email_use_cases::EmailUseCases;
use crate::modules::email::application::ports::outgoing::EmailSender;
use crate::modules::email::application::service::{CvEmailJob, SendCvEmailService};
use crate::modules::jobs::adapter::outgoing::{MemoryJobStore, RedisJobStore};
use crate::modules::jobs::application::job_use_cases::JobUseCases;
use crate::modules::jobs::application::ports::outgoing::JobStore;
use crate::modules::jobs::application::service::{
    spawn_request_log_cleanup, GetJobStatusService, JobDispatcher, CLEANUP_PERIOD,
};
use crate::modules::pdf::adapter::outgoing::PrintPdfRenderer;
use crate::modules::pdf::application::pdf_use_cases::PdfUseCases;
use crate::modules::pdf::application::ports::outgoing::CvPdfRenderer;
use crate::modules::pdf::application::service::ExportCvPdfService;
use crate::modules::project::adapter::outgoing::{ProjectQueryPostgres, ProjectRepositoryPostgres};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::service::{
    CreateProjectService, DeleteProjectService, GetCvProjectsService, GetProjectsService,
    GetSingleProjectService, PatchProjectService, UpdateProjectService,
};
use crate::modules::request_log::adapter::incoming::web::request_logging;
use crate::modules::request_log::adapter::outgoing::{
    RequestLogQueryPostgres, RequestLogRepositoryPostgres,
};
use crate::modules::request_log::application::request_log_use_cases::RequestLogUseCases;
use crate::modules::request_log::application::service::{
    BrowseRequestLogsService, CleanupRequestLogsService, RecordRequestService,
};
use crate::modules::settings::application::service::GetSettingsService;
use crate::modules::settings::application::settings_use_cases::SettingsUseCases;
use crate::modules::settings::domain::config_entries;
use crate::modules::skill::adapter::outgoing::{SkillQueryPostgres, SkillRepositoryPostgres};
use crate::modules::skill::application::service::{
    CreateSkillService, DeleteSkillService, GetCvSkillsService, GetSingleSkillService,
    GetSkillsService, PatchSkillService, UpdateSkillService,
};
use crate::modules::skill::application::skill_use_cases::SkillUseCases;
use crate::modules::translation::adapter::outgoing::OpenAiTranslator;
use crate::modules::translation::application::service::{CvTranslationJob, TranslateCvService};
use crate::modules::translation::application::translation_use_cases::TranslationUseCases;
use crate::shared::api::custom_json_config;

use actix_web::{middleware::from_fn, web, App, HttpServer};
use anyhow::Context;
use deadpool_redis::{Config, Runtime};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone)]
pub struct AppState {
    pub cv: CvUseCases,
    pub skill: SkillUseCases,
    pub project: ProjectUseCases,
    pub contact: ContactUseCases,
    pub request_log: RequestLogUseCases,
    pub jobs: JobUseCases,
    pub pdf: PdfUseCases,
    pub email: EmailUseCases,
    pub translation: TranslationUseCases,
    pub settings: SettingsUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env()?;
    let server_url = config.server_url();
    info!(environment = %config.environment, debug = config.debug, "Configuration loaded");

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&conn, None)
        .await
        .context("Failed to run migrations")?;

    let db_arc = Arc::new(conn);

    // Job store: Redis when configured, otherwise in-process
    let redis_pool = match &config.redis_url {
        Some(url) => Some(Arc::new(
            Config::from_url(url)
                .create_pool(Some(Runtime::Tokio1))
                .context("Failed to create Redis pool")?,
        )),
        None => None,
    };

    let job_store: Arc<dyn JobStore + Send + Sync> = match &redis_pool {
        Some(pool) => Arc::new(RedisJobStore::new(Arc::clone(pool), config.jobs.result_ttl)),
        None => {
            warn!("REDIS_URL is not set, job results are kept in memory");
            Arc::new(MemoryJobStore::with_ttl(config.jobs.result_ttl))
        }
    };
    let dispatcher = JobDispatcher::new(Arc::clone(&job_store));

    // Repositories and queries
    let cv_repo = CvRepositoryPostgres::new(Arc::clone(&db_arc));
    let cv_query = CvQueryPostgres::new(Arc::clone(&db_arc));
    let skill_repo = SkillRepositoryPostgres::new(Arc::clone(&db_arc));
    let skill_query = SkillQueryPostgres::new(Arc::clone(&db_arc));
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let project_query = ProjectQueryPostgres::new(Arc::clone(&db_arc));
    let contact_repo = ContactRepositoryPostgres::new(Arc::clone(&db_arc));
    let contact_query = ContactQueryPostgres::new(Arc::clone(&db_arc));
    let log_repo = RequestLogRepositoryPostgres::new(Arc::clone(&db_arc));
    let log_query = RequestLogQueryPostgres::new(Arc::clone(&db_arc));

    let shared_cv_query: Arc<dyn CvQuery + Send + Sync> = Arc::new(cv_query.clone());
    let pdf_renderer: Arc<dyn CvPdfRenderer + Send + Sync> = Arc::new(PrintPdfRenderer);

    // Email delivery
    let email_sender: Arc<dyn EmailSender + Send + Sync> = match (
        &config.email.relay,
        config.environment.as_str(),
        &config.email.local_host,
    ) {
        (Some(relay), _, _) => Arc::new(SmtpEmailSender::new(relay, &config.email.from)?),
        (None, "test", Some(host)) => Arc::new(SmtpEmailSender::new_local(
            host,
            config.email.local_port,
            &config.email.from,
        )),
        _ => {
            warn!("No SMTP relay configured, emails are written to the log");
            Arc::new(ConsoleEmailSender::new(&config.email.from))
        }
    };

    let email_job = Arc::new(CvEmailJob::new(
        Arc::clone(&shared_cv_query),
        Arc::clone(&pdf_renderer),
        Arc::new(AskamaEmailBodyRenderer),
        email_sender,
    ));

    // Translation
    if !config.translation_enabled() {
        warn!("OPENAI_API_KEY is not set, CV translation is disabled");
    }
    let translator = OpenAiTranslator::new(
        config.translation.api_key.as_deref().unwrap_or_default(),
        &config.translation,
    );
    let translation_job = Arc::new(CvTranslationJob::new(
        Arc::clone(&shared_cv_query),
        Arc::new(translator),
    ));

    // Request log
    let cleanup = Arc::new(CleanupRequestLogsService::new(log_repo.clone()));
    let request_log = RequestLogUseCases {
        record: Arc::new(RecordRequestService::new(
            Arc::new(log_repo),
            config.request_log,
        )),
        browse: Arc::new(BrowseRequestLogsService::new(log_query.clone())),
        cleanup: cleanup.clone(),
    };

    let state = AppState {
        cv: CvUseCases {
            create: Arc::new(CreateCvService::new(cv_repo.clone())),
            get_list: Arc::new(GetCvsService::new(cv_query.clone())),
            get_single: Arc::new(GetSingleCvService::new(cv_query.clone())),
            browse: Arc::new(BrowseCvsService::new(cv_query.clone())),
            update: Arc::new(UpdateCvService::new(cv_repo.clone())),
            patch: Arc::new(PatchCvService::new(cv_repo.clone())),
            delete: Arc::new(DeleteCvService::new(cv_repo)),
        },
        skill: SkillUseCases {
            create: Arc::new(CreateSkillService::new(skill_repo.clone())),
            get_list: Arc::new(GetSkillsService::new(skill_query.clone())),
            get_for_cv: Arc::new(GetCvSkillsService::new(skill_query.clone())),
            get_single: Arc::new(GetSingleSkillService::new(skill_query)),
            update: Arc::new(UpdateSkillService::new(skill_repo.clone())),
            patch: Arc::new(PatchSkillService::new(skill_repo.clone())),
            delete: Arc::new(DeleteSkillService::new(skill_repo)),
        },
        project: ProjectUseCases {
            create: Arc::new(CreateProjectService::new(project_repo.clone())),
            get_list: Arc::new(GetProjectsService::new(project_query.clone())),
            get_for_cv: Arc::new(GetCvProjectsService::new(project_query.clone())),
            get_single: Arc::new(GetSingleProjectService::new(project_query.clone())),
            update: Arc::new(UpdateProjectService::new(project_repo.clone())),
            patch: Arc::new(PatchProjectService::new(project_repo.clone(), project_query)),
            delete: Arc::new(DeleteProjectService::new(project_repo)),
        },
        contact: ContactUseCases {
            create: Arc::new(CreateContactService::new(contact_repo.clone())),
            get_list: Arc::new(GetContactsService::new(contact_query.clone())),
            get_for_cv: Arc::new(GetCvContactsService::new(contact_query.clone())),
            get_single: Arc::new(GetSingleContactService::new(contact_query)),
            update: Arc::new(UpdateContactService::new(contact_repo.clone())),
            patch: Arc::new(PatchContactService::new(contact_repo.clone())),
            delete: Arc::new(DeleteContactService::new(contact_repo)),
        },
        request_log,
        jobs: JobUseCases {
            status: Arc::new(GetJobStatusService::new(job_store)),
        },
        pdf: PdfUseCases {
            export: Arc::new(ExportCvPdfService::new(cv_query, Arc::clone(&pdf_renderer))),
        },
        email: EmailUseCases {
            send_cv: Arc::new(SendCvEmailService::new(
                Arc::clone(&shared_cv_query),
                email_job,
                dispatcher.clone(),
                config.jobs.email.into(),
            )),
        },
        translation: TranslationUseCases {
            translate: Arc::new(TranslateCvService::new(
                config.translation_enabled(),
                Arc::clone(&shared_cv_query),
                translation_job,
                dispatcher.clone(),
                config.jobs.translation.into(),
            )),
        },
        settings: SettingsUseCases {
            get: Arc::new(GetSettingsService::new(
                config_entries(&config),
                config.debug,
                shared_cv_query,
                Arc::new(log_query),
            )),
        },
    };

    spawn_request_log_cleanup(
        dispatcher,
        cleanup,
        config.request_log.retention_days,
        CLEANUP_PERIOD,
    );

    info!("Server run on: {}", server_url);

    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .wrap(from_fn(request_logging))
            .app_data(custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(redis_pool.clone()))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::{
        contact, cv, email, pages, pdf, project, request_log, settings, skill, translation,
    };

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // CV
    cfg.service(cv::adapter::incoming::web::routes::api_overview_handler);
    cfg.service(cv::adapter::incoming::web::routes::get_cvs_handler);
    cfg.service(cv::adapter::incoming::web::routes::create_cv_handler);
    cfg.service(cv::adapter::incoming::web::routes::get_single_cv_handler);
    cfg.service(cv::adapter::incoming::web::routes::update_cv_handler);
    cfg.service(cv::adapter::incoming::web::routes::patch_cv_handler);
    cfg.service(cv::adapter::incoming::web::routes::delete_cv_handler);
    // Skill
    cfg.service(skill::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(skill::adapter::incoming::web::routes::create_skill_handler);
    cfg.service(skill::adapter::incoming::web::routes::get_single_skill_handler);
    cfg.service(skill::adapter::incoming::web::routes::update_skill_handler);
    cfg.service(skill::adapter::incoming::web::routes::patch_skill_handler);
    cfg.service(skill::adapter::incoming::web::routes::delete_skill_handler);
    cfg.service(skill::adapter::incoming::web::routes::get_cv_skills_handler);
    cfg.service(skill::adapter::incoming::web::routes::add_cv_skill_handler);
    // Project
    cfg.service(project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(project::adapter::incoming::web::routes::get_single_project_handler);
    cfg.service(project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(project::adapter::incoming::web::routes::patch_project_handler);
    cfg.service(project::adapter::incoming::web::routes::delete_project_handler);
    cfg.service(project::adapter::incoming::web::routes::get_cv_projects_handler);
    cfg.service(project::adapter::incoming::web::routes::add_cv_project_handler);
    // Contact
    cfg.service(contact::adapter::incoming::web::routes::get_contacts_handler);
    cfg.service(contact::adapter::incoming::web::routes::create_contact_handler);
    cfg.service(contact::adapter::incoming::web::routes::get_single_contact_handler);
    cfg.service(contact::adapter::incoming::web::routes::update_contact_handler);
    cfg.service(contact::adapter::incoming::web::routes::patch_contact_handler);
    cfg.service(contact::adapter::incoming::web::routes::delete_contact_handler);
    cfg.service(contact::adapter::incoming::web::routes::get_cv_contacts_handler);
    cfg.service(contact::adapter::incoming::web::routes::add_cv_contact_handler);
    // Request log
    cfg.service(request_log::adapter::incoming::web::routes::request_logs_page_handler);
    cfg.service(request_log::adapter::incoming::web::routes::request_logs_api_handler);
    // PDF, email and translation
    cfg.service(pdf::adapter::incoming::web::routes::download_cv_pdf_handler);
    cfg.service(email::adapter::incoming::web::routes::send_cv_email_handler);
    cfg.service(email::adapter::incoming::web::routes::task_status_handler);
    cfg.service(translation::adapter::incoming::web::routes::translate_cv_handler);
    cfg.service(translation::adapter::incoming::web::routes::translation_status_handler);
    // Settings
    cfg.service(settings::adapter::incoming::web::routes::settings_page_handler);
    cfg.service(settings::adapter::incoming::web::routes::settings_api_handler);
    // Pages
    cfg.service(pages::adapter::incoming::web::routes::cv_list_page_handler);
    cfg.service(pages::adapter::incoming::web::routes::cv_detail_page_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
