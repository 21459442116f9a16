use std::borrow::Cow;

use stocktile_planner::ReplenishRow;

use crate::ExportScope;

const HEADER: [&str; 6] = ["Item", "On-hand", "Unit", "Max", "Alert", "Need"];

/// Serialize plan rows as CSV text.
///
/// One header line, one line per row in plan order, `\n` separated. Totals
/// are a display concern and never appear here.
pub fn to_csv(rows: &[ReplenishRow], scope: ExportScope) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(header_line(scope, ","));

    for row in rows {
        let mut fields: Vec<String> = Vec::with_capacity(7);
        if scope.includes_category() {
            fields.push(csv_escape(row.category.as_deref().unwrap_or("")).into_owned());
        }
        fields.push(csv_escape(&row.name).into_owned());
        fields.push(row.on_hand.to_string());
        fields.push(csv_escape(&row.unit).into_owned());
        fields.push(row.max_capacity.to_string());
        fields.push(row.alert_level.to_string());
        fields.push(row.need.to_string());
        lines.push(fields.join(","));
    }

    lines.join("\n")
}

/// Serialize plan rows as tab-separated text for clipboard paste.
///
/// Spreadsheets split on tabs, so fields are emitted raw (no quoting).
pub fn to_tsv(rows: &[ReplenishRow], scope: ExportScope) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(header_line(scope, "\t"));

    for row in rows {
        let mut fields: Vec<String> = Vec::with_capacity(7);
        if scope.includes_category() {
            fields.push(row.category.clone().unwrap_or_default());
        }
        fields.push(row.name.clone());
        fields.push(row.on_hand.to_string());
        fields.push(row.unit.clone());
        fields.push(row.max_capacity.to_string());
        fields.push(row.alert_level.to_string());
        fields.push(row.need.to_string());
        lines.push(fields.join("\t"));
    }

    lines.join("\n")
}

fn header_line(scope: ExportScope, separator: &str) -> String {
    let mut columns = Vec::with_capacity(7);
    if scope.includes_category() {
        columns.push("Category");
    }
    columns.extend(HEADER);
    columns.join(separator)
}

/// Quote-wrap a field (doubling inner quotes) only when it contains a comma,
/// double-quote, or newline; everything else passes through raw.
fn csv_escape(field: &str) -> Cow<'_, str> {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

#[cfg(test)]
mod tests {
    use stocktile_core::ItemId;

    use super::*;

    fn row(name: &str, unit: &str, on_hand: i64, max: i64, alert: i64, need: i64) -> ReplenishRow {
        ReplenishRow {
            item_id: ItemId::new(),
            category: Some("Pantry".to_string()),
            name: name.to_string(),
            unit: unit.to_string(),
            on_hand,
            max_capacity: max,
            alert_level: alert,
            default_need: (max - on_hand).max(0),
            need,
        }
    }

    #[test]
    fn header_includes_category_only_in_all_scope() {
        assert_eq!(
            to_csv(&[], ExportScope::AllCategories),
            "Category,Item,On-hand,Unit,Max,Alert,Need"
        );
        assert_eq!(
            to_csv(&[], ExportScope::SingleCategory),
            "Item,On-hand,Unit,Max,Alert,Need"
        );
    }

    #[test]
    fn comma_in_name_is_quoted_and_numbers_stay_raw() {
        let rows = vec![row("Flour, 5kg", "bag", 2, 10, 3, 8)];
        let csv = to_csv(&rows, ExportScope::SingleCategory);
        assert_eq!(
            csv,
            "Item,On-hand,Unit,Max,Alert,Need\n\"Flour, 5kg\",2,bag,10,3,8"
        );
    }

    #[test]
    fn inner_quotes_are_doubled() {
        let rows = vec![row("Olives \"Kalamata\"", "jar", 1, 4, 1, 3)];
        let csv = to_csv(&rows, ExportScope::SingleCategory);
        assert!(csv.contains("\"Olives \"\"Kalamata\"\"\""));
    }

    #[test]
    fn newline_in_field_is_quoted() {
        let rows = vec![row("two\nlines", "each", 0, 1, 0, 1)];
        let csv = to_csv(&rows, ExportScope::SingleCategory);
        assert!(csv.contains("\"two\nlines\""));
    }

    #[test]
    fn category_column_comes_first_in_all_scope() {
        let rows = vec![row("Rice", "kg", 3, 10, 2, 7)];
        let csv = to_csv(&rows, ExportScope::AllCategories);
        assert_eq!(
            csv,
            "Category,Item,On-hand,Unit,Max,Alert,Need\nPantry,Rice,3,kg,10,2,7"
        );
    }

    #[test]
    fn output_is_idempotent() {
        let rows = vec![row("Flour, 5kg", "bag", 2, 10, 3, 8), row("Rice", "kg", 3, 10, 2, 7)];
        assert_eq!(
            to_csv(&rows, ExportScope::AllCategories),
            to_csv(&rows, ExportScope::AllCategories)
        );
    }

    #[test]
    fn tsv_joins_on_tabs_without_quoting() {
        let rows = vec![row("Flour, 5kg", "bag", 2, 10, 3, 8)];
        let tsv = to_tsv(&rows, ExportScope::AllCategories);
        assert_eq!(
            tsv,
            "Category\tItem\tOn-hand\tUnit\tMax\tAlert\tNeed\nPantry\tFlour, 5kg\t2\tbag\t10\t3\t8"
        );
    }

    #[test]
    fn plain_fields_are_never_quoted() {
        let rows = vec![row("Rice", "kg", 3, 10, 2, 7)];
        let csv = to_csv(&rows, ExportScope::SingleCategory);
        assert!(!csv.contains('"'));
    }

    mod proptests {
        use proptest::prelude::*;

        use super::super::csv_escape;

        proptest! {
            /// Escaping is lossless: unquoting an escaped field yields the
            /// original, and unremarkable fields pass through untouched.
            #[test]
            fn escaping_is_lossless(field in ".*") {
                let escaped = csv_escape(&field);
                if field.contains(',') || field.contains('"') || field.contains('\n') {
                    prop_assert!(escaped.starts_with('"') && escaped.ends_with('"'));
                    let inner = &escaped[1..escaped.len() - 1];
                    prop_assert_eq!(inner.replace("\"\"", "\""), field);
                } else {
                    prop_assert_eq!(escaped.as_ref(), field.as_str());
                }
            }
        }
    }
}
