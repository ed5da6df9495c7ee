//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::api::{ItemApi, RemoteError};
use crate::core::item::{Item, ItemId, ItemStatus, ItemUpdate};
use crate::core::store::ItemStore;

#[derive(Default)]
struct FakeState {
    items: Vec<Item>,
    list_calls: usize,
    fail_next_list: bool,
    deleted: Vec<ItemId>,
    put_identifiers: Vec<String>,
}

/// An in-memory item collection that records what the store asked of it.
/// Unknown ids fail like a 404 would.
#[derive(Default)]
pub struct FakeItemApi {
    state: Mutex<FakeState>,
}

impl FakeItemApi {
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            state: Mutex::new(FakeState {
                items,
                ..Default::default()
            }),
        }
    }

    pub fn item(id: ItemId, name: &str, dish_type: &str) -> Item {
        Item {
            id,
            identifier: String::new(),
            name: name.to_string(),
            created: "2024-01-01T00:00:00Z".to_string(),
            count: 1,
            dish_type: dish_type.to_string(),
            status: ItemStatus::Available,
        }
    }

    pub fn fail_next_list(&self) {
        self.state.lock().unwrap().fail_next_list = true;
    }

    pub fn list_calls(&self) -> usize {
        self.state.lock().unwrap().list_calls
    }

    pub fn deleted(&self) -> Vec<ItemId> {
        self.state.lock().unwrap().deleted.clone()
    }

    pub fn put_identifiers(&self) -> Vec<String> {
        self.state.lock().unwrap().put_identifiers.clone()
    }
}

fn not_found(operation: &'static str, id: ItemId) -> RemoteError {
    RemoteError::new(operation, format!("HTTP 404: item {id} not found"))
}

#[async_trait]
impl ItemApi for FakeItemApi {
    fn name(&self) -> &str {
        "fake"
    }

    async fn list_items(&self) -> Result<Vec<Item>, RemoteError> {
        let mut state = self.state.lock().unwrap();
        state.list_calls += 1;
        if state.fail_next_list {
            state.fail_next_list = false;
            return Err(RemoteError::new("fetch items", "connection refused"));
        }
        Ok(state.items.clone())
    }

    async fn get_item(&self, id: ItemId) -> Result<Item, RemoteError> {
        let state = self.state.lock().unwrap();
        state
            .items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| not_found("fetch item", id))
    }

    async fn put_item(&self, id: ItemId, update: &ItemUpdate<'_>) -> Result<Item, RemoteError> {
        let mut state = self.state.lock().unwrap();
        state.put_identifiers.push(update.identifier.clone());
        let existing = state
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| not_found("update item", id))?;

        existing.identifier = update.identifier.clone();
        existing.name = update.form.name.clone();
        existing.count = update.form.count;
        existing.dish_type = update.form.dish_type.clone();
        existing.status = update.form.status;
        Ok(existing.clone())
    }

    async fn delete_item(&self, id: ItemId) -> Result<(), RemoteError> {
        let mut state = self.state.lock().unwrap();
        let before = state.items.len();
        state.items.retain(|item| item.id != id);
        if state.items.len() == before {
            return Err(not_found("remove item", id));
        }
        state.deleted.push(id);
        Ok(())
    }
}

/// The two-item collection used throughout the store tests.
pub fn sample_items() -> Vec<Item> {
    vec![
        Item {
            id: 1,
            identifier: "X_1".to_string(),
            name: "B".to_string(),
            created: "2024-01-01".to_string(),
            count: 1,
            dish_type: "x".to_string(),
            status: ItemStatus::Available,
        },
        Item {
            id: 2,
            identifier: "Y_2".to_string(),
            name: "A".to_string(),
            created: "2024-01-02".to_string(),
            count: 2,
            dish_type: "y".to_string(),
            status: ItemStatus::Unavailable,
        },
    ]
}

/// Creates a store backed by a [`FakeItemApi`] holding `items`.
pub fn test_store(items: Vec<Item>) -> (ItemStore, Arc<FakeItemApi>) {
    let api = Arc::new(FakeItemApi::with_items(items));
    (ItemStore::new(api.clone()), api)
}
