pub mod project_query_postgres;
pub mod project_repository_postgres;
pub mod sea_orm_entity;

pub use project_query_postgres::ProjectQueryPostgres;
pub use project_repository_postgres::ProjectRepositoryPostgres;
