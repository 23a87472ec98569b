//! CSV export of the "my assets" table.

use crate::Asset;

pub const CSV_HEADERS: [&str; 5] = ["Name", "Category", "Department", "Cost", "Date Purchased"];
pub const CSV_FILENAME: &str = "my-assets.csv";

/// Render assets as CSV, one row per asset in the given order.
///
/// Missing relations render as empty cells. Lines are joined with `\n`
/// without a trailing newline.
pub fn assets_to_csv(assets: &[Asset]) -> String {
    let mut lines = Vec::with_capacity(assets.len() + 1);
    lines.push(CSV_HEADERS.join(","));

    for asset in assets {
        let cells = [
            escape(&asset.name),
            escape(asset.category_name().unwrap_or_default()),
            escape(asset.department_name().unwrap_or_default()),
            asset.cost.to_string(),
            asset.date_purchased.format("%Y-%m-%d").to_string(),
        ];
        lines.push(cells.join(","));
    }

    lines.join("\n")
}

fn escape(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
