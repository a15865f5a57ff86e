mod browse_cvs_service;
mod create_cv_service;
mod delete_cv_service;
mod get_cvs_service;
mod get_single_cv_service;
mod patch_cv_service;
mod update_cv_service;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use browse_cvs_service::BrowseCvsService;
pub use create_cv_service::CreateCvService;
pub use delete_cv_service::DeleteCvService;
pub use get_cvs_service::GetCvsService;
pub use get_single_cv_service::GetSingleCvService;
pub use patch_cv_service::PatchCvService;
pub use update_cv_service::UpdateCvService;
