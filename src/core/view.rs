//! # Derived Views
//!
//! Pure functions over a slice of items. The store calls these on every
//! access; nothing here holds state.
//!
//! Comparators are picked by field kind:
//!
//! | kind   | fields                                   | comparison              |
//! |--------|------------------------------------------|-------------------------|
//! | date   | `created`                                | parsed timestamp        |
//! | number | `id`, `count`                            | numeric                 |
//! | string | `name`, `identifier`, `dish_type`, `status` | [`locale_cmp`]       |

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::core::item::{Item, ItemField, ItemStatus, SortBy, SortOrder};

/// A table column: either a real item field or an action pseudo-column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Header {
    Field(ItemField),
    Remove,
}

impl Header {
    pub fn as_str(self) -> &'static str {
        match self {
            Header::Field(field) => field.as_str(),
            Header::Remove => "remove",
        }
    }

    pub fn is_sortable(self) -> bool {
        matches!(self, Header::Field(_))
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const NON_SORTABLE_HEADERS: [Header; 1] = [Header::Remove];

/// Field columns. Empty when there are no items to show.
pub fn item_headers(items: &[Item]) -> Vec<ItemField> {
    if items.is_empty() {
        return Vec::new();
    }
    ItemField::ALL.to_vec()
}

/// Field columns followed by the pseudo-columns.
pub fn headers(items: &[Item]) -> Vec<Header> {
    item_headers(items)
        .into_iter()
        .map(Header::Field)
        .chain(NON_SORTABLE_HEADERS)
        .collect()
}

/// Lowercased canonical decomposition, optionally without accents.
fn fold(value: &str, strip_marks: bool) -> String {
    value
        .nfd()
        .filter(|c| !(strip_marks && is_combining_mark(*c)))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Three-level ordering: base letters, then accents (unaccented first),
/// then case (lowercase first). Only identical strings compare equal.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    fold(a, true)
        .cmp(&fold(b, true))
        .then_with(|| fold(a, false).cmp(&fold(b, false)))
        .then_with(|| b.cmp(a))
}

/// Deduplicates and sorts facet values.
pub fn format_filters<'a, I>(values: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut unique: Vec<&str> = values
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    unique.sort_by(|a, b| locale_cmp(a, b));
    unique
}

pub fn dish_types(items: &[Item]) -> Vec<String> {
    format_filters(items.iter().map(|item| item.dish_type.as_str()))
        .into_iter()
        .map(str::to_string)
        .collect()
}

pub fn statuses(items: &[Item]) -> Vec<ItemStatus> {
    let mut unique: Vec<ItemStatus> = items
        .iter()
        .map(|item| item.status)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    unique.sort_by(|a, b| locale_cmp(a.as_str(), b.as_str()));
    unique
}

/// An empty selection lets everything through.
pub fn filter_by_dish(selected: &BTreeSet<String>, item: &Item) -> bool {
    selected.is_empty() || selected.contains(&item.dish_type)
}

/// An empty selection lets everything through.
pub fn filter_by_status(selected: &BTreeSet<ItemStatus>, item: &Item) -> bool {
    selected.is_empty() || selected.contains(&item.status)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKind {
    Date,
    Number,
    String,
}

pub fn sort_kind(field: ItemField) -> SortKind {
    match field {
        ItemField::Created => SortKind::Date,
        ItemField::Id | ItemField::Count => SortKind::Number,
        ItemField::Name | ItemField::Identifier | ItemField::DishType | ItemField::Status => {
            SortKind::String
        }
    }
}

/// Zone-less forms are read as UTC.
fn parse_created(value: &str) -> Option<NaiveDateTime> {
    const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Parsed instants first in time order, unparseable values after them;
/// the raw string breaks every tie.
fn compare_created(a: &str, b: &str) -> Ordering {
    let key = |raw: &str| {
        let parsed = parse_created(raw);
        (parsed.is_none(), parsed)
    };
    key(a).cmp(&key(b)).then_with(|| a.cmp(b))
}

/// Ascending comparison of two items on one field.
pub fn compare_by(field: ItemField, a: &Item, b: &Item) -> Ordering {
    match sort_kind(field) {
        SortKind::Date => compare_created(&a.created, &b.created),
        SortKind::Number => match field {
            ItemField::Id => a.id.cmp(&b.id),
            _ => a.count.cmp(&b.count),
        },
        SortKind::String => locale_cmp(&a.field_value(field), &b.field_value(field)),
    }
}

/// Orders items per `sort_by`. Stable, so equal keys keep their input order.
pub fn sort_items<'a>(mut items: Vec<&'a Item>, sort_by: SortBy) -> Vec<&'a Item> {
    items.sort_by(|a, b| {
        let ord = compare_by(sort_by.sort_key, a, b);
        match sort_by.sort_order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    });
    items
}
