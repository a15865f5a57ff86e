use actix_web::{get, Responder};
use serde_json::json;

use crate::shared::api::ApiResponse;

#[get("/api/")]
pub async fn api_overview_handler() -> impl Responder {
    ApiResponse::success(json!({
        "overview": "/api/",
        "cvs": {
            "list_create": "/api/cvs/",
            "retrieve_update_delete": "/api/cvs/{id}/",
            "skills": "/api/cvs/{id}/skills/",
            "projects": "/api/cvs/{id}/projects/",
            "contacts": "/api/cvs/{id}/contacts/",
            "add_skill": "POST /api/cvs/{id}/skills/add/",
            "add_project": "POST /api/cvs/{id}/projects/add/",
            "add_contact": "POST /api/cvs/{id}/contacts/add/",
            "pdf": "/cv/{id}/pdf/",
            "email": "POST /cv/{id}/email/",
            "translate": "POST /cv/{id}/translate/",
        },
        "skills": {
            "list_create": "/api/skills/",
            "retrieve_update_delete": "/api/skills/{id}/",
        },
        "projects": {
            "list_create": "/api/projects/",
            "retrieve_update_delete": "/api/projects/{id}/",
        },
        "contacts": {
            "list_create": "/api/contacts/",
            "retrieve_update_delete": "/api/contacts/{id}/",
        },
        "jobs": {
            "email_status": "/task-status/{job_id}/",
            "translation_status": "/translation-status/{job_id}/",
        },
        "logs": "/logs/api/",
        "settings": "/api/settings/",
    }))
}
