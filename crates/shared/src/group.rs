use std::collections::BTreeMap;

use thiserror::Error;

use crate::models::{Label, MovingUnit, StationaryObject};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GroupingError {
    #[error("item #{index} has no type discriminant")]
    MissingType { index: usize },
}

/// Items that carry a type discriminant the detail views bucket by.
pub trait Typed {
    fn type_label(&self) -> Option<&Label>;
}

impl Typed for MovingUnit {
    fn type_label(&self) -> Option<&Label> {
        self.unit_type.as_ref()
    }
}

impl Typed for StationaryObject {
    fn type_label(&self) -> Option<&Label> {
        self.object_type.as_ref()
    }
}

/// One bucket of a grouped list: the shared discriminant plus the items
/// carrying it, in their original relative order.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeGroup<'a, T> {
    pub label: &'a Label,
    pub items: Vec<&'a T>,
}

/// Group an ordered list by its type discriminant.
///
/// Keys iterate in sorted order, which keeps the rendered group order
/// deterministic. An item without a discriminant is a validation error
/// rather than a silent extra bucket.
pub fn group_by_type<T: Typed>(
    items: &[T],
) -> Result<BTreeMap<&str, TypeGroup<'_, T>>, GroupingError> {
    let mut groups: BTreeMap<&str, TypeGroup<'_, T>> = BTreeMap::new();

    for (index, item) in items.iter().enumerate() {
        let label = item
            .type_label()
            .filter(|l| !l.name.is_empty())
            .ok_or(GroupingError::MissingType { index })?;

        groups
            .entry(label.name.as_str())
            .or_insert_with(|| TypeGroup {
                label,
                items: Vec::new(),
            })
            .items
            .push(item);
    }

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pos2;

    fn label(name: &str) -> Label {
        Label {
            name: name.to_string(),
            verbose_name: name.to_uppercase(),
            help_text: None,
        }
    }

    fn stationary(id: &str, type_name: Option<&str>) -> StationaryObject {
        StationaryObject {
            id: id.to_string(),
            code: format!("code_{id}"),
            object_type: type_name.map(label),
            belligerent: label("red"),
            pos: Pos2 { x: 0.0, y: 0.0 },
            rotation_angle: None,
        }
    }

    #[test]
    fn test_groups_preserve_relative_order() {
        let items = vec![
            stationary("a", Some("ships")),
            stationary("b", Some("artillery")),
            stationary("c", Some("ships")),
            stationary("d", Some("ships")),
        ];
        let groups = group_by_type(&items).unwrap();

        let ships: Vec<&str> = groups["ships"].items.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ships, vec!["a", "c", "d"]);
        assert_eq!(groups["artillery"].items[0].id, "b");
    }

    #[test]
    fn test_grouped_total_equals_input_total() {
        let items = vec![
            stationary("a", Some("ships")),
            stationary("b", Some("planes")),
            stationary("c", Some("artillery")),
            stationary("d", Some("planes")),
            stationary("e", Some("ships")),
        ];
        let groups = group_by_type(&items).unwrap();
        let total: usize = groups.values().map(|g| g.items.len()).sum();
        assert_eq!(total, items.len());
    }

    #[test]
    fn test_keys_iterate_sorted() {
        let items = vec![
            stationary("a", Some("vehicles")),
            stationary("b", Some("artillery")),
            stationary("c", Some("planes")),
        ];
        let groups = group_by_type(&items).unwrap();
        let keys: Vec<&str> = groups.keys().copied().collect();
        assert_eq!(keys, vec!["artillery", "planes", "vehicles"]);
    }

    #[test]
    fn test_missing_type_is_an_error() {
        let items = vec![stationary("a", Some("ships")), stationary("b", None)];
        let err = group_by_type(&items).unwrap_err();
        assert_eq!(err, GroupingError::MissingType { index: 1 });
    }

    #[test]
    fn test_empty_type_name_is_an_error() {
        let items = vec![stationary("a", Some(""))];
        let err = group_by_type(&items).unwrap_err();
        assert_eq!(err, GroupingError::MissingType { index: 0 });
    }

    #[test]
    fn test_empty_input_yields_no_groups() {
        let items: Vec<StationaryObject> = vec![];
        let groups = group_by_type(&items).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_group_label_matches_first_item() {
        let items = vec![stationary("a", Some("ships"))];
        let groups = group_by_type(&items).unwrap();
        assert_eq!(groups["ships"].label.verbose_name, "SHIPS");
    }
}
