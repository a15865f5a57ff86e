use async_trait::async_trait;

use crate::modules::contact::application::ports::incoming::use_cases::{
    GetContactsError, GetContactsUseCase, GetCvContactsError, GetCvContactsUseCase,
    GetSingleContactError, GetSingleContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactQuery, ContactQueryError, ContactResult,
};

pub struct GetContactsService<Q>
where
    Q: ContactQuery,
{
    query: Q,
}

impl<Q> GetContactsService<Q>
where
    Q: ContactQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetContactsUseCase for GetContactsService<Q>
where
    Q: ContactQuery + Send + Sync,
{
    async fn execute(&self, cv_id: Option<i32>) -> Result<Vec<ContactResult>, GetContactsError> {
        self.query
            .list(cv_id)
            .await
            .map_err(|e| GetContactsError::QueryFailed(e.to_string()))
    }
}

pub struct GetCvContactsService<Q>
where
    Q: ContactQuery,
{
    query: Q,
}

impl<Q> GetCvContactsService<Q>
where
    Q: ContactQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCvContactsUseCase for GetCvContactsService<Q>
where
    Q: ContactQuery + Send + Sync,
{
    async fn execute(&self, cv_id: i32) -> Result<Vec<ContactResult>, GetCvContactsError> {
        self.query.list_for_cv(cv_id).await.map_err(|e| match e {
            ContactQueryError::CvNotFound => GetCvContactsError::CvNotFound,
            other => GetCvContactsError::QueryFailed(other.to_string()),
        })
    }
}

pub struct GetSingleContactService<Q>
where
    Q: ContactQuery,
{
    query: Q,
}

impl<Q> GetSingleContactService<Q>
where
    Q: ContactQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleContactUseCase for GetSingleContactService<Q>
where
    Q: ContactQuery + Send + Sync,
{
    async fn execute(&self, contact_id: i32) -> Result<ContactResult, GetSingleContactError> {
        self.query.get_by_id(contact_id).await.map_err(|e| match e {
            ContactQueryError::NotFound => GetSingleContactError::NotFound,
            other => GetSingleContactError::QueryFailed(other.to_string()),
        })
    }
}
