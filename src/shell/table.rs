//! Plain-text table rendering for the shell

use crate::models::record::{Column, InventoryRecord};

/// Render records as a fixed-width table with the schema header row.
/// Column widths are sized to the widest cell, header included.
pub fn render<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a InventoryRecord>,
{
    let rows: Vec<[&str; 13]> = records.into_iter().map(InventoryRecord::values).collect();

    let mut widths: [usize; 13] = Column::headers().map(str::len);
    for row in &rows {
        for (width, value) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(value.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &Column::headers(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let rule_refs: Vec<&str> = rule.iter().map(String::as_str).collect();
    push_row(&mut out, &rule_refs, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[&str], widths: &[usize]) {
    for (i, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(cell);
        for _ in cell.chars().count()..*width {
            out.push(' ');
        }
    }
    // Trailing pad spaces on the last column are noise
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::ItemType;
    use crate::models::record::RecordDraft;

    #[test]
    fn test_render_starts_with_schema_header() {
        let record = RecordDraft {
            asset_number: "A1".to_string(),
            name: "Box".to_string(),
            sector: "IT".to_string(),
            ..Default::default()
        }
        .into_record(ItemType::Desktop);

        let rendered = render([&record]);
        let mut lines = rendered.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("Asset Number"));
        assert!(header.contains("Status"));
        // Header, rule, one data row
        assert_eq!(rendered.lines().count(), 3);
        assert!(rendered.lines().last().unwrap().contains("Box"));
    }
}
