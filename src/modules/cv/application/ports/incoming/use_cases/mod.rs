mod browse_cvs;
mod create_cv;
mod delete_cv;
mod get_cvs;
mod get_single_cv;
mod patch_cv;
mod update_cv;

pub use browse_cvs::{BrowseCvsError, BrowseCvsUseCase};
pub use create_cv::{CreateCvCommand, CreateCvError, CreateCvUseCase};
pub use delete_cv::{DeleteCvError, DeleteCvUseCase};
pub use get_cvs::{GetCvsError, GetCvsUseCase};
pub use get_single_cv::{GetSingleCvError, GetSingleCvUseCase};
pub use patch_cv::{PatchCvCommand, PatchCvError, PatchCvUseCase};
pub use update_cv::{UpdateCvError, UpdateCvUseCase};
