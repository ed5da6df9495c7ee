//! # Item Model
//!
//! The inventory entry as the remote API serves it, the editable subset the
//! UI sends back, and the sort selection.
//!
//! ```text
//! Item ──From<&Item>──▶ ItemForm ──with_identifier()──▶ ItemUpdate ──PUT──▶ API
//!                                     (identifier derived, never user-set)
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type ItemId = u64;

/// Availability of an item.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum ItemStatus {
    Available,
    Unavailable,
}

impl ItemStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemStatus::Available => "available",
            ItemStatus::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One inventory entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub identifier: String,
    pub name: String,
    /// ISO-8601 timestamp, assigned by the server.
    pub created: String,
    pub count: i64,
    pub dish_type: String,
    pub status: ItemStatus,
}

impl Item {
    /// Renders a single field for display.
    pub fn field_value(&self, field: ItemField) -> String {
        match field {
            ItemField::Id => self.id.to_string(),
            ItemField::Identifier => self.identifier.clone(),
            ItemField::Name => self.name.clone(),
            ItemField::Created => self.created.clone(),
            ItemField::Count => self.count.to_string(),
            ItemField::DishType => self.dish_type.clone(),
            ItemField::Status => self.status.to_string(),
        }
    }
}

/// The user-editable subset of an [`Item`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ItemForm {
    pub id: ItemId,
    pub name: String,
    pub count: i64,
    pub dish_type: String,
    pub status: ItemStatus,
}

impl From<&Item> for ItemForm {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            count: item.count,
            dish_type: item.dish_type.clone(),
            status: item.status,
        }
    }
}

impl ItemForm {
    /// Attaches the identifier derived from this form's `dish_type` and `id`.
    pub fn with_identifier(&self) -> ItemUpdate<'_> {
        ItemUpdate {
            form: self,
            identifier: derive_identifier(&self.dish_type, self.id),
        }
    }
}

/// Request body for `PUT /items/{id}`: the form plus its derived identifier.
#[derive(Serialize, Debug)]
pub struct ItemUpdate<'a> {
    #[serde(flatten)]
    pub form: &'a ItemForm,
    pub identifier: String,
}

/// `"soup"`, 42 → `"SOU_42"`.
pub fn derive_identifier(dish_type: &str, id: ItemId) -> String {
    let prefix: String = dish_type.chars().take(3).collect();
    format!("{}_{}", prefix.to_uppercase(), id)
}

/// Every field of [`Item`], in column order.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum ItemField {
    Id,
    Identifier,
    Name,
    Created,
    Count,
    DishType,
    Status,
}

impl ItemField {
    pub const ALL: [ItemField; 7] = [
        ItemField::Id,
        ItemField::Identifier,
        ItemField::Name,
        ItemField::Created,
        ItemField::Count,
        ItemField::DishType,
        ItemField::Status,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ItemField::Id => "id",
            ItemField::Identifier => "identifier",
            ItemField::Name => "name",
            ItemField::Created => "created",
            ItemField::Count => "count",
            ItemField::DishType => "dish_type",
            ItemField::Status => "status",
        }
    }
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// The active sort configuration.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortBy {
    pub sort_key: ItemField,
    pub sort_order: SortOrder,
}

impl Default for SortBy {
    fn default() -> Self {
        Self {
            sort_key: ItemField::Name,
            sort_order: SortOrder::Ascending,
        }
    }
}
