use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use stocktile_core::{CategoryId, Entity};

/// A named grouping of items (a "tile" on the overview page).
///
/// `sort_order` drives display order; `None` sorts last. Reordering always
/// reassigns a dense 1..N sequence, so gaps only exist for categories created
/// since the last reorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub name: String,
    pub sort_order: Option<i64>,
}

impl Entity for CategoryRecord {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Display comparator: `sort_order` ascending with `None` last, name as the
/// tie-breaker.
pub fn display_order(a: &CategoryRecord, b: &CategoryRecord) -> Ordering {
    match (a.sort_order, b.sort_order) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.name.cmp(&b.name)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.name.cmp(&b.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(name: &str, sort_order: Option<i64>) -> CategoryRecord {
        CategoryRecord {
            id: CategoryId::new(),
            name: name.to_string(),
            sort_order,
        }
    }

    #[test]
    fn unordered_categories_sort_last() {
        let mut cats = vec![cat("new", None), cat("second", Some(2)), cat("first", Some(1))];
        cats.sort_by(display_order);
        let names: Vec<&str> = cats.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "new"]);
    }

    #[test]
    fn ties_fall_back_to_name() {
        let mut cats = vec![cat("b", None), cat("a", None)];
        cats.sort_by(display_order);
        assert_eq!(cats[0].name, "a");
    }
}
