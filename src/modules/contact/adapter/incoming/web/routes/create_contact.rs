use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::modules::contact::application::ports::incoming::use_cases::{
    CreateContactCommand, CreateContactError,
};
use crate::modules::contact::domain::ContactType;
use crate::shared::api::ApiResponse;
use crate::AppState;

pub(super) const DUPLICATE_TYPE: &str = "A contact with this type already exists for this CV.";

#[derive(Debug, Deserialize, Serialize)]
pub struct ContactRequest {
    pub cv: i32,
    pub contact_type: ContactType,
    pub value: String,
    pub url: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct NestedContactRequest {
    pub contact_type: ContactType,
    pub value: String,
    pub url: String,
}

#[post("/api/contacts/")]
pub async fn create_contact_handler(
    req: web::Json<ContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateContactCommand::new(req.cv, req.contact_type, &req.value, &req.url) {
        Ok(command) => command,
        Err(e) => return ApiResponse::invalid_field(e.field, &e.message),
    };

    match data.contact.create.execute(command).await {
        Ok(created) => ApiResponse::created(created),
        Err(CreateContactError::CvNotFound) => ApiResponse::invalid_field(
            "cv",
            &format!("Invalid pk \"{}\" - object does not exist.", req.cv),
        ),
        Err(e) => create_error_response(e),
    }
}

#[post("/api/cvs/{cv_id}/contacts/add/")]
pub async fn add_cv_contact_handler(
    path: web::Path<i32>,
    req: web::Json<NestedContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateContactCommand::new(
        path.into_inner(),
        req.contact_type,
        &req.value,
        &req.url,
    ) {
        Ok(command) => command,
        Err(e) => return ApiResponse::invalid_field(e.field, &e.message),
    };

    match data.contact.create.execute(command).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => create_error_response(e),
    }
}

fn create_error_response(err: CreateContactError) -> HttpResponse {
    match err {
        CreateContactError::AlreadyExists => {
            ApiResponse::invalid_field("non_field_errors", DUPLICATE_TYPE)
        }
        CreateContactError::CvNotFound => ApiResponse::not_found("CV_NOT_FOUND", "CV not found"),
        CreateContactError::RepositoryError(e) => {
            error!("Repository error creating contact: {}", e);
            ApiResponse::internal_error()
        }
    }
}
