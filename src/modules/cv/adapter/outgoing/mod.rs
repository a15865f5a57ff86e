pub mod cv_query_postgres;
pub mod cv_repository_postgres;
pub mod sea_orm_entity;

pub use cv_query_postgres::CvQueryPostgres;
pub use cv_repository_postgres::CvRepositoryPostgres;
