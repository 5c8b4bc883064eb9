//! Table rendering for command output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};
use itemdeck_model::{Record, SortConfig, SortDirection, Status};
use itemdeck_report::{ChartPoint, DashboardStats, format_currency, format_date};

/// The projected records, one row each.
pub fn items_table(items: &[Record], sort: &SortConfig) -> Table {
    let mut table = new_table();
    let headers = ["ID", "Name", "Category", "Value", "Status", "Created"];
    table.set_header(
        headers
            .iter()
            .map(|title| header_cell(title, sort_marker(title, sort)))
            .collect::<Vec<_>>(),
    );
    for item in items {
        table.add_row(vec![
            Cell::new(item.id.as_str()).fg(Color::DarkGrey),
            Cell::new(&item.name),
            Cell::new(item.category.as_str()),
            Cell::new(format_currency(item.value)),
            status_cell(item.status),
            Cell::new(format_date(&item.created_at)),
        ]);
    }
    align_column(&mut table, 3, CellAlignment::Right);
    table
}

/// Every field of one record.
pub fn detail_table(item: &Record) -> Table {
    let mut table = new_table();
    let rows = [
        ("ID", Cell::new(item.id.as_str())),
        ("Name", Cell::new(&item.name)),
        ("Category", Cell::new(item.category.as_str())),
        ("Value", Cell::new(format_currency(item.value))),
        ("Status", status_cell(item.status)),
        ("Created", Cell::new(format_date(&item.created_at))),
        (
            "Description",
            Cell::new(item.description.as_deref().unwrap_or("-")),
        ),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label).add_attribute(Attribute::Bold), value]);
    }
    table
}

pub fn stats_table(stats: &DashboardStats) -> Table {
    let mut table = new_table();
    table.set_header(vec![header_cell("Metric", None), header_cell("Value", None)]);
    table.add_row(vec![Cell::new("Total Items"), Cell::new(stats.total_items)]);
    table.add_row(vec![
        Cell::new("Total Value"),
        Cell::new(format_currency(stats.total_value)),
    ]);
    table.add_row(vec![Cell::new("Active Items"), Cell::new(stats.active_items)]);
    table.add_row(vec![
        Cell::new("Average Value"),
        Cell::new(format_currency(stats.average_value)),
    ]);
    align_column(&mut table, 1, CellAlignment::Right);
    table
}

/// A two-column breakdown; `currency` formats the values as money.
pub fn chart_table(title: &str, points: &[ChartPoint], currency: bool) -> Table {
    let mut table = new_table();
    table.set_header(vec![header_cell(title, None), header_cell("", None)]);
    for point in points {
        let value = if currency {
            format_currency(point.value)
        } else {
            point.value.to_string()
        };
        table.add_row(vec![Cell::new(&point.label), Cell::new(value)]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    table
}

/// Like [`chart_table`] for points keyed by serialized status, shown under
/// their display labels.
pub fn status_chart_table(title: &str, points: &[ChartPoint]) -> Table {
    let labelled: Vec<ChartPoint> = points
        .iter()
        .map(|point| ChartPoint {
            label: point
                .label
                .parse::<Status>()
                .map_or_else(|_| point.label.clone(), |status| status.label().to_string()),
            value: point.value,
        })
        .collect();
    chart_table(title, &labelled, false)
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS);
    table
}

fn header_cell(title: &str, marker: Option<&str>) -> Cell {
    let text = match marker {
        Some(marker) => format!("{title} {marker}"),
        None => title.to_string(),
    };
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn sort_marker(title: &str, sort: &SortConfig) -> Option<&'static str> {
    let label = match sort.field.label() {
        "Created At" => "Created",
        other => other,
    };
    (label == title).then(|| match sort.direction {
        SortDirection::Asc => "▲",
        SortDirection::Desc => "▼",
    })
}

fn status_cell(status: Status) -> Cell {
    let color = match status {
        Status::Active => Color::Green,
        Status::Inactive => Color::DarkGrey,
    };
    Cell::new(status.label()).fg(color)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

#[cfg(test)]
mod tests {
    use itemdeck_catalog::Catalog;
    use itemdeck_model::SortField;

    use super::*;

    fn plain(mut table: Table) -> String {
        table.force_no_tty();
        table.to_string()
    }

    #[test]
    fn items_table_formats_values_and_marks_sort_column() {
        let catalog = Catalog::builtin();
        let sort = SortConfig::new(SortField::Value, SortDirection::Desc);
        let text = plain(items_table(&catalog.items()[..2], &sort));
        assert!(text.contains("Value ▼"));
        assert!(text.contains("$1,500.00"));
        assert!(text.contains("Marketing Campaign"));
        assert!(text.contains("1/15/2024"));
        assert!(!text.contains("Name ▲"));
    }

    #[test]
    fn created_column_carries_default_marker() {
        let catalog = Catalog::builtin();
        let text = plain(items_table(catalog.items(), &SortConfig::default()));
        assert!(text.contains("Created ▼"));
    }

    #[test]
    fn detail_table_shows_placeholder_for_missing_description() {
        let mut item = Catalog::builtin().items()[0].clone();
        item.description = None;
        let text = plain(detail_table(&item));
        assert!(text.contains("Description"));
        assert!(text.contains(" - "));
    }

    #[test]
    fn status_chart_uses_display_labels() {
        let points = itemdeck_report::items_by_status(Catalog::builtin().items());
        let text = plain(status_chart_table("Items by Status", &points));
        assert!(text.contains("Active"));
        assert!(text.contains("Inactive"));
        assert!(!text.contains("inactive"));
    }
}
