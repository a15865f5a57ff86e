pub mod memory_job_store;
pub mod redis_job_store;

pub use memory_job_store::MemoryJobStore;
pub use redis_job_store::RedisJobStore;
