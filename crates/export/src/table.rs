use std::fmt::Write;

use stocktile_planner::ReplenishRow;

use crate::ExportScope;

/// Render plan rows as a printable HTML table document.
///
/// Same column set as the CSV export plus a total-need footer row. All text
/// fields (and the title) are escaped for `&`, `<`, `>`; the output is a pure
/// function of its inputs, with no timestamps embedded.
pub fn to_printable_table(
    rows: &[ReplenishRow],
    total_need: i64,
    title: &str,
    scope: ExportScope,
) -> String {
    let title = escape_html(title);
    let with_category = scope.includes_category();
    let column_count = if with_category { 7 } else { 6 };

    let mut out = String::new();
    out.push_str("<html><head><title>");
    out.push_str(&title);
    out.push_str("</title>\n");
    out.push_str(
        "<style>body{font-family:system-ui,sans-serif;padding:16px}\
         table{border-collapse:collapse;width:100%}\
         th,td{border:1px solid #ddd;padding:8px}\
         th{background:#f7f7f7;text-align:left}\
         tfoot td{font-weight:600}</style>\n",
    );
    out.push_str("</head><body>\n<h2>");
    out.push_str(&title);
    out.push_str("</h2>\n<table><thead><tr>");
    if with_category {
        out.push_str("<th>Category</th>");
    }
    out.push_str("<th>Item</th><th>On-hand</th><th>Unit</th><th>Max</th><th>Alert</th><th>Need</th></tr></thead>\n<tbody>");

    for row in rows {
        out.push_str("<tr>");
        if with_category {
            let _ = write!(
                out,
                "<td>{}</td>",
                escape_html(row.category.as_deref().unwrap_or(""))
            );
        }
        let _ = write!(
            out,
            "<td>{}</td><td class=\"num\">{}</td><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td>",
            escape_html(&row.name),
            row.on_hand,
            escape_html(&row.unit),
            row.max_capacity,
            row.alert_level,
            row.need,
        );
        out.push_str("</tr>");
    }

    let _ = write!(
        out,
        "</tbody>\n<tfoot><tr><td colspan=\"{}\">Total Need</td><td class=\"num\">{}</td></tr></tfoot>\n",
        column_count - 1,
        total_need,
    );
    out.push_str("</table></body></html>\n");
    out
}

/// Escape `&`, `<`, `>` — in that substitution order so each character is
/// escaped exactly once.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use stocktile_core::ItemId;

    use super::*;

    fn row(name: &str) -> ReplenishRow {
        ReplenishRow {
            item_id: ItemId::new(),
            category: Some("Pantry & Spices".to_string()),
            name: name.to_string(),
            unit: "each".to_string(),
            on_hand: 2,
            max_capacity: 10,
            alert_level: 3,
            default_need: 8,
            need: 8,
        }
    }

    #[test]
    fn escapes_amp_lt_gt_exactly_once() {
        let html = to_printable_table(&[row("<Rice & Beans>")], 8, "Replenish", ExportScope::AllCategories);
        assert!(html.contains("<td>&lt;Rice &amp; Beans&gt;</td>"));
        assert!(html.contains("<td>Pantry &amp; Spices</td>"));
        assert!(!html.contains("&amp;amp;"));
        assert!(!html.contains("&amp;lt;"));
    }

    #[test]
    fn footer_carries_the_total() {
        let html = to_printable_table(&[row("Rice")], 42, "Replenish", ExportScope::SingleCategory);
        assert!(html.contains("Total Need</td><td class=\"num\">42</td>"));
        assert!(html.contains("colspan=\"5\""));
    }

    #[test]
    fn title_is_escaped_in_head_and_heading() {
        let html = to_printable_table(&[], 0, "A <b>bold</b> title", ExportScope::SingleCategory);
        assert!(html.contains("<title>A &lt;b&gt;bold&lt;/b&gt; title</title>"));
        assert!(html.contains("<h2>A &lt;b&gt;bold&lt;/b&gt; title</h2>"));
    }

    #[test]
    fn category_column_only_in_all_scope() {
        let all = to_printable_table(&[row("Rice")], 8, "t", ExportScope::AllCategories);
        let single = to_printable_table(&[row("Rice")], 8, "t", ExportScope::SingleCategory);
        assert!(all.contains("<th>Category</th>"));
        assert!(!single.contains("<th>Category</th>"));
        assert!(!single.contains("Pantry"));
    }
}
