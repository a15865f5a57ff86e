use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::modules::cv::application::ports::incoming::use_cases::{CreateCvCommand, CreateCvError};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Body of POST and PUT.
#[derive(Debug, Deserialize, Serialize)]
pub struct CvRequest {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub bio: String,
}

impl CvRequest {
    pub fn to_command(&self) -> Result<CreateCvCommand, crate::shared::validation::FieldError> {
        CreateCvCommand::new(
            &self.firstname,
            &self.lastname,
            &self.email,
            &self.phone,
            &self.bio,
        )
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/cvs/")]
pub async fn create_cv_handler(
    req: web::Json<CvRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match req.to_command() {
        Ok(command) => command,
        Err(e) => return ApiResponse::invalid_field(e.field, &e.message),
    };

    match data.cv.create.execute(command).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateCvError::EmailAlreadyExists) => {
            ApiResponse::invalid_field("email", "A CV with this email already exists.")
        }

        Err(CreateCvError::RepositoryError(e)) => {
            error!("Repository error creating CV: {}", e);
            ApiResponse::internal_error()
        }
    }
}
