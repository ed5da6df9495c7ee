//! Plain-text rendering of items, headers and facets.

use std::fmt::Write;

use crate::core::item::{Item, ItemStatus};
use crate::core::view::Header;

const REMOVE_CELL: &str = "[x]";

fn cell(header: Header, item: &Item) -> String {
    match header {
        Header::Field(field) => item.field_value(field),
        Header::Remove => REMOVE_CELL.to_string(),
    }
}

/// Renders `rows` under `headers`, padding every column to its widest cell.
pub fn render_table(headers: &[Header], rows: &[&Item]) -> String {
    if rows.is_empty() {
        return "No items.\n".to_string();
    }

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|item| headers.iter().map(|h| cell(*h, item)).collect())
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            cells
                .iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(header.as_str().chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let header_cells: Vec<String> = headers.iter().map(|h| h.as_str().to_string()).collect();
    push_row(&mut out, &header_cells, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in &cells {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}

pub fn render_item(item: &Item) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "id:         {}", item.id);
    let _ = writeln!(out, "identifier: {}", item.identifier);
    let _ = writeln!(out, "name:       {}", item.name);
    let _ = writeln!(out, "created:    {}", item.created);
    let _ = writeln!(out, "count:      {}", item.count);
    let _ = writeln!(out, "dish_type:  {}", item.dish_type);
    let _ = writeln!(out, "status:     {}", item.status);
    out
}

pub fn render_facets(dish_types: &[String], statuses: &[ItemStatus]) -> String {
    let statuses: Vec<&str> = statuses.iter().map(|s| s.as_str()).collect();
    format!(
        "dish types: {}\nstatuses:   {}\n",
        dish_types.join(", "),
        statuses.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::item::ItemField;
    use crate::test_support::sample_items;

    #[test]
    fn test_render_table_pads_columns() {
        let items = sample_items();
        let rows: Vec<&Item> = items.iter().collect();
        let headers = [
            Header::Field(ItemField::Id),
            Header::Field(ItemField::Status),
            Header::Remove,
        ];
        let table = render_table(&headers, &rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "id  status       remove");
        assert_eq!(lines[1], "--  -----------  ------");
        assert_eq!(lines[2], "1   available    [x]");
        assert_eq!(lines[3], "2   unavailable  [x]");
    }

    #[test]
    fn test_render_table_empty() {
        assert_eq!(render_table(&[Header::Remove], &[]), "No items.\n");
    }

    #[test]
    fn test_render_facets() {
        let text = render_facets(
            &["x".to_string(), "y".to_string()],
            &[ItemStatus::Available],
        );
        assert_eq!(text, "dish types: x, y\nstatuses:   available\n");
    }

    #[test]
    fn test_render_item_includes_identifier() {
        let text = render_item(&sample_items()[0]);
        assert!(text.contains("identifier: X_1"));
    }
}
