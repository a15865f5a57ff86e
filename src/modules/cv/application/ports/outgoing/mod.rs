pub mod cv_query;
pub mod cv_repository;

pub use cv_query::{
    ContactItem, CvDetailView, CvListFilter, CvQuery, CvQueryError, CvSummaryView, ProjectItem,
    SkillItem,
};
pub use cv_repository::{
    CreateCvData, CvRepository, CvRepositoryError, CvResult, PatchCvData, UpdateCvData,
};
