use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::skill::application::ports::incoming::use_cases::{
    GetCvSkillsError, GetSingleSkillError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SkillListQuery {
    pub cv: Option<i32>,
}

#[get("/api/skills/")]
pub async fn get_skills_handler(
    query: web::Query<SkillListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skill.get_list.execute(query.cv).await {
        Ok(skills) => ApiResponse::success(skills),
        Err(e) => {
            error!("Failed to list skills: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/cvs/{cv_id}/skills/")]
pub async fn get_cv_skills_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skill.get_for_cv.execute(path.into_inner()).await {
        Ok(skills) => ApiResponse::success(skills),
        Err(GetCvSkillsError::CvNotFound) => ApiResponse::not_found("CV_NOT_FOUND", "CV not found"),
        Err(GetCvSkillsError::QueryFailed(e)) => {
            error!("Failed to list CV skills: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/skills/{id}/")]
pub async fn get_single_skill_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skill.get_single.execute(path.into_inner()).await {
        Ok(skill) => ApiResponse::success(skill),
        Err(GetSingleSkillError::NotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found")
        }
        Err(GetSingleSkillError::QueryFailed(e)) => {
            error!("Failed to fetch skill: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::modules::skill::application::ports::incoming::use_cases::{
        GetCvSkillsUseCase, GetSkillsError, GetSkillsUseCase,
    };
    use crate::modules::skill::application::ports::outgoing::SkillResult;
    use crate::modules::skill::application::service::test_doubles::sample_skill;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct EchoCvFilter;

    #[async_trait]
    impl GetSkillsUseCase for EchoCvFilter {
        async fn execute(&self, cv_id: Option<i32>) -> Result<Vec<SkillResult>, GetSkillsError> {
            Ok(cv_id.map(|cv| vec![sample_skill(1, cv)]).unwrap_or_default())
        }
    }

    #[derive(Clone)]
    struct MissingCv;

    #[async_trait]
    impl GetCvSkillsUseCase for MissingCv {
        async fn execute(&self, _cv_id: i32) -> Result<Vec<SkillResult>, GetCvSkillsError> {
            Err(GetCvSkillsError::CvNotFound)
        }
    }

    #[actix_web::test]
    async fn test_list_reads_cv_filter() {
        let app_state = TestAppStateBuilder::default()
            .with_get_skills(EchoCvFilter)
            .build();

        let app = test::init_service(App::new().app_data(app_state).service(get_skills_handler)).await;

        let req = test::TestRequest::get().uri("/api/skills/?cv=3").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"][0]["cv"], 3);
    }

    #[actix_web::test]
    async fn test_cv_skills_missing_cv() {
        let app_state = TestAppStateBuilder::default()
            .with_get_cv_skills(MissingCv)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_cv_skills_handler)).await;

        let req = test::TestRequest::get().uri("/api/cvs/9/skills/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_single_skill_not_found_by_default() {
        let app_state = TestAppStateBuilder::default().build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_single_skill_handler))
                .await;

        let req = test::TestRequest::get().uri("/api/skills/9/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
