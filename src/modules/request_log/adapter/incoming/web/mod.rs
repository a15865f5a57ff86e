pub mod middleware;
pub mod routes;

pub use middleware::request_logging;
