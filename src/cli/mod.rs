//! # CLI Adapter
//!
//! The command-line stand-in for the UI layer. Parses a [`Command`], drives
//! the [`ItemStore`] through it and renders the result as text.
//!
//! This is the only module that knows about clap. Rendering lives in
//! [`table`]; the store never formats anything.

pub mod table;

use std::collections::BTreeSet;

use clap::{Parser, Subcommand};
use log::info;

use crate::api::RemoteError;
use crate::core::item::{ItemField, ItemForm, ItemId, ItemStatus, SortBy, SortOrder};
use crate::core::store::ItemStore;

#[derive(Parser, Debug)]
#[command(name = "item-directory", about = "Browse and edit the item directory")]
pub struct Args {
    /// Root of the item API (overrides config and ITEMS_API_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List items, filtered and sorted
    List {
        /// Field to sort by
        #[arg(short, long, default_value_t = ItemField::Name, value_enum)]
        sort: ItemField,
        /// Sort descending instead of ascending
        #[arg(long)]
        desc: bool,
        /// Only show these dish types (repeatable)
        #[arg(long = "dish-type")]
        dish_type: Vec<String>,
        /// Only show these statuses (repeatable)
        #[arg(long, value_enum)]
        status: Vec<ItemStatus>,
    },
    /// Show a single item
    Show { id: ItemId },
    /// Edit an item; unspecified fields keep their current value
    Update {
        id: ItemId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        count: Option<i64>,
        #[arg(long = "dish-type")]
        dish_type: Option<String>,
        #[arg(long, value_enum)]
        status: Option<ItemStatus>,
    },
    /// Delete an item and resync the list
    Remove { id: ItemId },
}

/// Runs one command against the store and returns what should be printed.
pub async fn run(store: &mut ItemStore, command: Command) -> Result<String, RemoteError> {
    info!("Running {:?}", command);

    match command {
        Command::List {
            sort,
            desc,
            dish_type,
            status,
        } => {
            store.fetch_items().await?;
            store.set_sort(SortBy {
                sort_key: sort,
                sort_order: if desc {
                    SortOrder::Descending
                } else {
                    SortOrder::Ascending
                },
            });
            store.set_filter_dish_type(dish_type.into_iter().collect());
            store.set_filter_status_type(status.into_iter().collect::<BTreeSet<_>>());

            let mut out = table::render_table(&store.headers(), &store.sorted_items());
            out.push('\n');
            out.push_str(&table::render_facets(&store.dish_types(), &store.statuses()));
            Ok(out)
        }
        Command::Show { id } => {
            let item = store.fetch_item(id).await?;
            Ok(table::render_item(item))
        }
        Command::Update {
            id,
            name,
            count,
            dish_type,
            status,
        } => {
            let mut form = ItemForm::from(store.fetch_item(id).await?);
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(count) = count {
                form.count = count;
            }
            if let Some(dish_type) = dish_type {
                form.dish_type = dish_type;
            }
            if let Some(status) = status {
                form.status = status;
            }
            let item = store.update_item(&form).await?;
            Ok(table::render_item(item))
        }
        Command::Remove { id } => {
            store.remove_item(id).await?;
            Ok(format!(
                "Removed item {}; {} items remain.\n",
                id,
                store.list_items().len()
            ))
        }
    }
}
