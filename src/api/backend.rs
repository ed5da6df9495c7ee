use std::fmt;

use async_trait::async_trait;

use crate::core::item::{Item, ItemId, ItemUpdate};

/// A failed call to the remote item API.
///
/// Network failures, timeouts, non-2xx responses and undecodable bodies all
/// land here. `operation` and `message` are for display only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteError {
    pub operation: &'static str,
    pub message: String,
}

impl RemoteError {
    pub fn new(operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
        }
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.operation, self.message)
    }
}

impl std::error::Error for RemoteError {}

/// The remote collection the store synchronizes against.
#[async_trait]
pub trait ItemApi: Send + Sync {
    /// Returns the name of the backend, for logs.
    fn name(&self) -> &str;

    /// `GET /items`
    async fn list_items(&self) -> Result<Vec<Item>, RemoteError>;

    /// `GET /items/{id}`
    async fn get_item(&self, id: ItemId) -> Result<Item, RemoteError>;

    /// `PUT /items/{id}`, returning the server's copy.
    async fn put_item(&self, id: ItemId, update: &ItemUpdate<'_>) -> Result<Item, RemoteError>;

    /// `DELETE /items/{id}`
    async fn delete_item(&self, id: ItemId) -> Result<(), RemoteError>;
}
