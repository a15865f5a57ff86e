mod create_project;
mod delete_project;
mod get_projects;
mod update_project;

pub use create_project::{CreateProjectCommand, CreateProjectError, CreateProjectUseCase};
pub use delete_project::{DeleteProjectError, DeleteProjectUseCase};
pub use get_projects::{
    GetCvProjectsError, GetCvProjectsUseCase, GetProjectsError, GetProjectsUseCase,
    GetSingleProjectError, GetSingleProjectUseCase,
};
pub use update_project::{
    PatchProjectCommand, PatchProjectUseCase, UpdateProjectError, UpdateProjectUseCase,
};
