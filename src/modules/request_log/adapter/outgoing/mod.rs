pub mod request_log_query_postgres;
pub mod request_log_repository_postgres;
pub mod sea_orm_entity;

pub use request_log_query_postgres::RequestLogQueryPostgres;
pub use request_log_repository_postgres::RequestLogRepositoryPostgres;
