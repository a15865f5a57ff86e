use actix_web::{delete, get, patch, put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;

use super::create_contact::{ContactRequest, DUPLICATE_TYPE};
use crate::modules::contact::application::ports::incoming::use_cases::{
    CreateContactCommand, DeleteContactError, GetCvContactsError, GetSingleContactError,
    PatchContactCommand, UpdateContactError,
};
use crate::modules::contact::application::ports::outgoing::ContactResult;
use crate::modules::contact::domain::ContactType;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ContactListQuery {
    pub cv: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PatchContactRequest {
    pub cv: Option<i32>,
    pub contact_type: Option<ContactType>,
    pub value: Option<String>,
    pub url: Option<String>,
}

// ──── Reads ────

#[get("/api/contacts/")]
pub async fn get_contacts_handler(
    query: web::Query<ContactListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.get_list.execute(query.cv).await {
        Ok(contacts) => ApiResponse::success(contacts),
        Err(e) => {
            error!("Failed to list contacts: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/cvs/{cv_id}/contacts/")]
pub async fn get_cv_contacts_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.get_for_cv.execute(path.into_inner()).await {
        Ok(contacts) => ApiResponse::success(contacts),
        Err(GetCvContactsError::CvNotFound) => {
            ApiResponse::not_found("CV_NOT_FOUND", "CV not found")
        }
        Err(GetCvContactsError::QueryFailed(e)) => {
            error!("Failed to list CV contacts: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/contacts/{id}/")]
pub async fn get_single_contact_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.get_single.execute(path.into_inner()).await {
        Ok(contact) => ApiResponse::success(contact),
        Err(GetSingleContactError::NotFound) => {
            ApiResponse::not_found("CONTACT_NOT_FOUND", "Contact not found")
        }
        Err(GetSingleContactError::QueryFailed(e)) => {
            error!("Failed to fetch contact: {}", e);
            ApiResponse::internal_error()
        }
    }
}

// ──── Writes ────

#[put("/api/contacts/{id}/")]
pub async fn update_contact_handler(
    path: web::Path<i32>,
    req: web::Json<ContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateContactCommand::new(req.cv, req.contact_type, &req.value, &req.url) {
        Ok(command) => command,
        Err(e) => return ApiResponse::invalid_field(e.field, &e.message),
    };

    let result = data.contact.update.execute(path.into_inner(), command).await;
    update_response(result, Some(req.cv))
}

#[patch("/api/contacts/{id}/")]
pub async fn patch_contact_handler(
    path: web::Path<i32>,
    req: web::Json<PatchContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match PatchContactCommand::new(
        req.cv,
        req.contact_type,
        req.value.as_deref(),
        req.url.as_deref(),
    ) {
        Ok(command) => command,
        Err(e) => return ApiResponse::invalid_field(e.field, &e.message),
    };

    let result = data.contact.patch.execute(path.into_inner(), command).await;
    update_response(result, req.cv)
}

#[delete("/api/contacts/{id}/")]
pub async fn delete_contact_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.delete.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteContactError::NotFound) => {
            ApiResponse::not_found("CONTACT_NOT_FOUND", "Contact not found")
        }
        Err(DeleteContactError::RepositoryError(e)) => {
            error!("Repository error deleting contact: {}", e);
            ApiResponse::internal_error()
        }
    }
}

fn update_response(
    result: Result<ContactResult, UpdateContactError>,
    cv: Option<i32>,
) -> HttpResponse {
    match result {
        Ok(contact) => ApiResponse::success(contact),
        Err(UpdateContactError::NotFound) => {
            ApiResponse::not_found("CONTACT_NOT_FOUND", "Contact not found")
        }
        Err(UpdateContactError::AlreadyExists) => {
            ApiResponse::invalid_field("non_field_errors", DUPLICATE_TYPE)
        }
        Err(UpdateContactError::CvNotFound) => ApiResponse::invalid_field(
            "cv",
            &format!(
                "Invalid pk \"{}\" - object does not exist.",
                cv.map(|c| c.to_string()).unwrap_or_default()
            ),
        ),
        Err(UpdateContactError::RepositoryError(e)) => {
            error!("Repository error updating contact: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::modules::contact::application::ports::incoming::use_cases::{
        GetContactsError, GetContactsUseCase, PatchContactUseCase,
    };
    use crate::modules::contact::application::service::test_doubles::sample_contact;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct OneContact;

    #[async_trait]
    impl GetContactsUseCase for OneContact {
        async fn execute(&self, cv_id: Option<i32>) -> Result<Vec<ContactResult>, GetContactsError> {
            Ok(vec![sample_contact(1, cv_id.unwrap_or(1))])
        }
    }

    #[derive(Clone)]
    struct PatchConflict;

    #[async_trait]
    impl PatchContactUseCase for PatchConflict {
        async fn execute(
            &self,
            _contact_id: i32,
            _command: PatchContactCommand,
        ) -> Result<ContactResult, UpdateContactError> {
            Err(UpdateContactError::AlreadyExists)
        }
    }

    #[actix_web::test]
    async fn test_list_contacts() {
        let app_state = TestAppStateBuilder::default()
            .with_get_contacts(OneContact)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_contacts_handler)).await;

        let req = test::TestRequest::get().uri("/api/contacts/?cv=5").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"][0]["cv"], 5);
    }

    #[actix_web::test]
    async fn test_patch_contact_conflict() {
        let app_state = TestAppStateBuilder::default()
            .with_patch_contact(PatchConflict)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(patch_contact_handler))
                .await;

        let req = test::TestRequest::patch()
            .uri("/api/contacts/1/")
            .set_json(json!({ "contact_type": "website" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_missing_contact_defaults() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_single_contact_handler)
                .service(delete_contact_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/contacts/2/").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete().uri("/api/contacts/2/").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }
}
