//! # Item Store
//!
//! The in-memory copy of the remote item collection plus the UI's sort and
//! filter selections.
//!
//! ```text
//! ItemStore
//! ├── api: Arc<dyn ItemApi>                  // remote collection
//! ├── list: Vec<Item>                        // server order, replaced wholesale
//! ├── current_item: Option<Item>             // last fetched/updated item
//! ├── sort_by: SortBy                        // active sort
//! ├── filter_dish_type: BTreeSet<String>     // selected dish types
//! └── filter_status_type: BTreeSet<ItemStatus>
//! ```
//!
//! Everything else (headers, facets, filtered and sorted views) is derived
//! from `list` on every call. Each remote operation returns a `Result`;
//! a failed fetch or update resets its field to empty, a failed remove
//! leaves `list` alone.

use std::collections::BTreeSet;
use std::sync::Arc;

use log::{debug, info, warn};

use crate::api::{ItemApi, RemoteError};
use crate::core::item::{Item, ItemField, ItemForm, ItemId, ItemStatus, SortBy};
use crate::core::view::{self, Header};

pub struct ItemStore {
    api: Arc<dyn ItemApi>,
    list: Vec<Item>,
    current_item: Option<Item>,
    sort_by: SortBy,
    filter_dish_type: BTreeSet<String>,
    filter_status_type: BTreeSet<ItemStatus>,
}

impl ItemStore {
    pub fn new(api: Arc<dyn ItemApi>) -> Self {
        Self {
            api,
            list: Vec::new(),
            current_item: None,
            sort_by: SortBy::default(),
            filter_dish_type: BTreeSet::new(),
            filter_status_type: BTreeSet::new(),
        }
    }

    // ------------------------------------------------------------------
    // State
    // ------------------------------------------------------------------

    pub fn list_items(&self) -> &[Item] {
        &self.list
    }

    pub fn current_item(&self) -> Option<&Item> {
        self.current_item.as_ref()
    }

    pub fn sort_by(&self) -> SortBy {
        self.sort_by
    }

    pub fn set_sort(&mut self, sort_by: SortBy) {
        debug!("Sort set to {:?}", sort_by);
        self.sort_by = sort_by;
    }

    pub fn filter_dish_type(&self) -> &BTreeSet<String> {
        &self.filter_dish_type
    }

    pub fn set_filter_dish_type(&mut self, selected: BTreeSet<String>) {
        self.filter_dish_type = selected;
    }

    pub fn filter_status_type(&self) -> &BTreeSet<ItemStatus> {
        &self.filter_status_type
    }

    pub fn set_filter_status_type(&mut self, selected: BTreeSet<ItemStatus>) {
        self.filter_status_type = selected;
    }

    // ------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------

    pub fn item_headers(&self) -> Vec<ItemField> {
        view::item_headers(&self.list)
    }

    pub fn non_sortable_headers(&self) -> &'static [Header] {
        &view::NON_SORTABLE_HEADERS
    }

    pub fn headers(&self) -> Vec<Header> {
        view::headers(&self.list)
    }

    pub fn dish_types(&self) -> Vec<String> {
        view::dish_types(&self.list)
    }

    pub fn statuses(&self) -> Vec<ItemStatus> {
        view::statuses(&self.list)
    }

    pub fn filter_by_dish(&self, item: &Item) -> bool {
        view::filter_by_dish(&self.filter_dish_type, item)
    }

    pub fn filter_by_status(&self, item: &Item) -> bool {
        view::filter_by_status(&self.filter_status_type, item)
    }

    /// Items passing both facet filters, in server order.
    pub fn filtered_items(&self) -> Vec<&Item> {
        self.list
            .iter()
            .filter(|item| self.filter_by_dish(item) && self.filter_by_status(item))
            .collect()
    }

    /// Filtered items in the active sort order.
    pub fn sorted_items(&self) -> Vec<&Item> {
        view::sort_items(self.filtered_items(), self.sort_by)
    }

    // ------------------------------------------------------------------
    // Remote operations
    // ------------------------------------------------------------------

    /// Replaces `list` with the server's collection.
    pub async fn fetch_items(&mut self) -> Result<&[Item], RemoteError> {
        match self.api.list_items().await {
            Ok(items) => {
                info!("Fetched {} items via {}", items.len(), self.api.name());
                self.list = items;
                Ok(&self.list)
            }
            Err(e) => {
                warn!("{}", e);
                self.list.clear();
                Err(e)
            }
        }
    }

    /// Replaces `current_item` with the server's copy of `id`.
    pub async fn fetch_item(&mut self, id: ItemId) -> Result<&Item, RemoteError> {
        match self.api.get_item(id).await {
            Ok(item) => {
                debug!("Fetched item {}", id);
                Ok(&*self.current_item.insert(item))
            }
            Err(e) => {
                warn!("{}", e);
                self.current_item = None;
                Err(e)
            }
        }
    }

    /// Deletes `id`, then resyncs `list` from the server.
    ///
    /// If the delete fails nothing is re-fetched and `list` is untouched.
    /// If the re-fetch fails, `list` is emptied as in [`Self::fetch_items`].
    pub async fn remove_item(&mut self, id: ItemId) -> Result<(), RemoteError> {
        if let Err(e) = self.api.delete_item(id).await {
            warn!("{}", e);
            return Err(e);
        }
        info!("Removed item {}", id);
        self.fetch_items().await?;
        Ok(())
    }

    /// Sends `form` with a freshly derived identifier and keeps the
    /// server's response as `current_item`.
    pub async fn update_item(&mut self, form: &ItemForm) -> Result<&Item, RemoteError> {
        let update = form.with_identifier();
        debug!("Updating item {} as {}", form.id, update.identifier);

        match self.api.put_item(form.id, &update).await {
            Ok(item) => {
                info!("Updated item {}", item.id);
                Ok(&*self.current_item.insert(item))
            }
            Err(e) => {
                warn!("{}", e);
                self.current_item = None;
                Err(e)
            }
        }
    }
}
