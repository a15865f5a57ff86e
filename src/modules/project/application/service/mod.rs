mod create_project_service;
mod delete_project_service;
mod get_projects_service;
mod update_project_service;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use create_project_service::CreateProjectService;
pub use delete_project_service::DeleteProjectService;
pub use get_projects_service::{
    GetCvProjectsService, GetProjectsService, GetSingleProjectService,
};
pub use update_project_service::{PatchProjectService, UpdateProjectService};
