//! Single-column sorting.

use std::cmp::Ordering;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::column::{Column, find_column};
use crate::model::{Record, Value};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

impl SortDirection {
    /// The other direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header indicator glyph.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// The active sort instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDirective {
    /// Key of the column being sorted.
    pub column: String,
    /// Sort direction.
    pub direction: SortDirection,
}

impl SortDirective {
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Next sort directive after a header click on `column_key`.
///
/// Clicking the sorted column flips its direction; any other sortable column
/// starts ascending. Returns `None` when the click does nothing (unknown or
/// non-sortable column), in which case the current directive stays.
pub fn toggle_directive(
    current: Option<&SortDirective>,
    columns: &[Column],
    column_key: &str,
) -> Option<SortDirective> {
    let column = find_column(columns, column_key).filter(|col| col.sortable)?;

    let direction = match current {
        Some(directive) if directive.column == column.key => directive.direction.toggled(),
        _ => SortDirection::Ascending,
    };

    debug!("Sort toggled: column={} direction={:?}", column.key, direction);

    Some(SortDirective {
        column: column.key.clone(),
        direction,
    })
}

/// Compare two column values under a direction.
///
/// Null sorts after every defined value in both directions; only defined
/// values are flipped by the direction.
pub fn compare_values(a: &Value, b: &Value, direction: SortDirection) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ordering = a.compare(b);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        }
    }
}

/// Ordered permutation of row indices for a directive.
///
/// Without a directive, or when the directive names an unknown column, the
/// input order is kept. The sort is stable.
pub fn sorted_indices(
    rows: &[Record],
    directive: Option<&SortDirective>,
    columns: &[Column],
) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len()).collect();

    let Some(directive) = directive else {
        return order;
    };
    let Some(column) = find_column(columns, &directive.column) else {
        warn!("Sort directive names unknown column '{}'", directive.column);
        return order;
    };

    let values: Vec<_> = rows.iter().map(|row| column.value(row)).collect();
    order.sort_by(|&a, &b| compare_values(&values[a], &values[b], directive.direction));
    order
}

/// Rows in directive order. The input slice is left untouched.
pub fn resolve<'r>(
    rows: &'r [Record],
    directive: Option<&SortDirective>,
    columns: &[Column],
) -> Vec<&'r Record> {
    sorted_indices(rows, directive, columns)
        .into_iter()
        .map(|i| &rows[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<Column> {
        vec![
            Column::new("name", "Name").sortable(),
            Column::new("age", "Age").sortable(),
            Column::new("role", "Role"),
        ]
    }

    #[test]
    fn test_first_click_sorts_ascending() {
        let next = toggle_directive(None, &columns(), "age");
        assert_eq!(next, Some(SortDirective::ascending("age")));
    }

    #[test]
    fn test_same_column_alternates() {
        let cols = columns();
        let asc = toggle_directive(None, &cols, "age").unwrap();
        let desc = toggle_directive(Some(&asc), &cols, "age").unwrap();
        assert_eq!(desc.direction, SortDirection::Descending);
        let asc_again = toggle_directive(Some(&desc), &cols, "age").unwrap();
        assert_eq!(asc_again, asc);
    }

    #[test]
    fn test_other_column_resets_to_ascending() {
        let cols = columns();
        let desc = SortDirective::descending("age");
        let next = toggle_directive(Some(&desc), &cols, "name");
        assert_eq!(next, Some(SortDirective::ascending("name")));
    }

    #[test]
    fn test_non_sortable_and_unknown_are_noops() {
        let cols = columns();
        assert_eq!(toggle_directive(None, &cols, "role"), None);
        assert_eq!(toggle_directive(None, &cols, "salary"), None);
    }

    #[test]
    fn test_resolve_leaves_input_untouched() {
        let rows = vec![
            Record::new().set("name", "Sam"),
            Record::new().set("name", "Alice"),
            Record::new().set("name", "Bob"),
        ];
        let snapshot = rows.clone();

        let ordered = resolve(&rows, Some(&SortDirective::descending("name")), &columns());
        let names: Vec<_> = ordered
            .iter()
            .map(|r| r.get_string("name").unwrap().unwrap())
            .collect();
        assert_eq!(names, vec!["Sam", "Bob", "Alice"]);
        assert_eq!(rows, snapshot);

        let unsorted = resolve(&rows, None, &columns());
        assert!(unsorted.iter().zip(&rows).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn test_mixed_kind_column_sorts_numbers_first() {
        let cols = vec![Column::new("v", "V").sortable()];
        let rows = vec![
            Record::new().set("v", 10),
            Record::new().set("v", "9"),
            Record::new().set("v", 9),
        ];

        let asc = sorted_indices(&rows, Some(&SortDirective::ascending("v")), &cols);
        assert_eq!(asc, vec![2, 0, 1]);

        let desc = sorted_indices(&rows, Some(&SortDirective::descending("v")), &cols);
        assert_eq!(desc, vec![1, 0, 2]);
    }

    #[test]
    fn test_nan_sorts_after_numbers() {
        let cols = vec![Column::new("v", "V").sortable()];
        let rows = vec![
            Record::new().set("v", f64::NAN),
            Record::new().set("v", 2.5),
            Record::new().set("v", 1),
            Record::new(),
        ];
        let asc = sorted_indices(&rows, Some(&SortDirective::ascending("v")), &cols);
        assert_eq!(asc, vec![2, 1, 0, 3]);
    }

    #[test]
    fn test_unknown_directive_column_keeps_order() {
        let rows = vec![Record::new().set("age", 2), Record::new().set("age", 1)];
        let order = sorted_indices(&rows, Some(&SortDirective::ascending("salary")), &columns());
        assert_eq!(order, vec![0, 1]);
    }

    #[test]
    fn test_compare_values_null_last_both_directions() {
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            assert_eq!(
                compare_values(&Value::Null, &Value::Int(1), direction),
                Ordering::Greater
            );
            assert_eq!(
                compare_values(&Value::Int(1), &Value::Null, direction),
                Ordering::Less
            );
        }
    }

    #[test]
    fn test_direction_deserializes_short_names() {
        let d: SortDirection = serde_json::from_str(r#""desc""#).unwrap();
        assert_eq!(d, SortDirection::Descending);
        let d: SortDirection = serde_json::from_str(r#""ascending""#).unwrap();
        assert_eq!(d, SortDirection::Ascending);
    }
}
