//! Server-rendered CV pages. No domain of their own: they read through the cv use cases.
pub mod adapter;
