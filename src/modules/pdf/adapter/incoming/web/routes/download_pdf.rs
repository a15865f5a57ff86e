use actix_web::{
    get,
    http::header::{ContentDisposition, DispositionParam, DispositionType},
    web, HttpResponse, Responder,
};
use tracing::error;

use crate::modules::pdf::application::ports::incoming::use_cases::ExportCvPdfError;
use crate::shared::html::not_found_page;
use crate::AppState;

#[get("/cv/{id}/pdf/")]
pub async fn download_cv_pdf_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.pdf.export.execute(path.into_inner()).await {
        Ok(pdf) => HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(pdf.filename)],
            })
            .body(pdf.bytes),
        Err(ExportCvPdfError::NotFound) => not_found_page("No CV matches the given query."),
        Err(e) => {
            error!("Failed to export CV PDF: {}", e);
            HttpResponse::InternalServerError().body("Failed to generate PDF")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::pdf::application::ports::incoming::use_cases::{CvPdf, ExportCvPdfUseCase};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct FixedExport(Result<CvPdf, ExportCvPdfError>);

    #[async_trait]
    impl ExportCvPdfUseCase for FixedExport {
        async fn execute(&self, _cv_id: i32) -> Result<CvPdf, ExportCvPdfError> {
            self.0.clone()
        }
    }

    #[actix_web::test]
    async fn pdf_is_sent_as_attachment() {
        let app_state = TestAppStateBuilder::default()
            .with_export_pdf(Arc::new(FixedExport(Ok(CvPdf {
                filename: "Ada_Lovelace_CV.pdf".to_string(),
                full_name: "Ada Lovelace".to_string(),
                bytes: b"%PDF-1.3".to_vec(),
            }))))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(download_cv_pdf_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/cv/1/pdf/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get("content-type").unwrap(), "application/pdf");
        assert_eq!(
            resp.headers().get("content-disposition").unwrap(),
            "attachment; filename=\"Ada_Lovelace_CV.pdf\""
        );
        let body = test::read_body(resp).await;
        assert_eq!(&body[..], b"%PDF-1.3");
    }

    #[actix_web::test]
    async fn missing_cv_gives_404_page() {
        let app_state = TestAppStateBuilder::default()
            .with_export_pdf(Arc::new(FixedExport(Err(ExportCvPdfError::NotFound))))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(download_cv_pdf_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/cv/9/pdf/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
