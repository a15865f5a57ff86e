mod create_project;
mod delete_project;
mod get_projects;
mod update_project;

pub use create_project::{add_cv_project_handler, create_project_handler, ProjectRequest};
pub use delete_project::delete_project_handler;
pub use get_projects::{
    get_cv_projects_handler, get_projects_handler, get_single_project_handler,
};
pub use update_project::{patch_project_handler, update_project_handler};
