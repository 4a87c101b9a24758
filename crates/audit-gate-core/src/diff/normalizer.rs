//! Item reconciliation and numeric change detection.
//!
//! Items in a details table are matched across reports by an identifying
//! key rather than by position, so reordering a table never shows up as
//! additions and removals.

use crate::report::DetailItem;
use crate::utils::config::ITEM_KEY_FIELDS;
use serde_json::Value;
use std::collections::HashMap;

/// Result of reconciling base items against compare items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemMatch {
    /// (base index, compare index) pairs, in base order
    pub pairs: Vec<(usize, usize)>,

    /// Base indices with no counterpart, in base order
    pub removed: Vec<usize>,

    /// Compare indices with no counterpart, in compare order
    pub added: Vec<usize>,
}

/// Compute a reconciliation key for every item in a table
///
/// The key is the first identifying field present on the item. Items with
/// no identifying field fall back to their position. Repeated keys get an
/// occurrence suffix so the n-th duplicate in base pairs with the n-th
/// duplicate in compare.
pub fn item_keys(items: &[DetailItem]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let base_key = identifying_value(item).unwrap_or_else(|| format!("#{}", index));
            let occurrence = seen.entry(base_key.clone()).or_insert(0);
            let key = if *occurrence == 0 {
                base_key
            } else {
                format!("{}#{}", base_key, occurrence)
            };
            *occurrence += 1;
            key
        })
        .collect()
}

/// Pair up base and compare items by key
pub fn match_items(base: &[DetailItem], compare: &[DetailItem]) -> ItemMatch {
    let base_keys = item_keys(base);
    let compare_keys = item_keys(compare);

    let compare_index: HashMap<&str, usize> = compare_keys
        .iter()
        .enumerate()
        .map(|(index, key)| (key.as_str(), index))
        .collect();

    let mut result = ItemMatch::default();
    let mut matched_compare = vec![false; compare.len()];

    for (base_index, key) in base_keys.iter().enumerate() {
        match compare_index.get(key.as_str()) {
            Some(&compare_idx) => {
                matched_compare[compare_idx] = true;
                result.pairs.push((base_index, compare_idx));
            }
            None => result.removed.push(base_index),
        }
    }

    result.added = matched_compare
        .iter()
        .enumerate()
        .filter(|(_, matched)| !**matched)
        .map(|(index, _)| index)
        .collect();

    result
}

/// Numeric properties present on both items with differing values
///
/// Properties are visited in base key order.
/// Non-numeric properties are ignored.
pub fn numeric_changes<'a>(
    base: &'a DetailItem,
    compare: &'a DetailItem,
) -> Vec<(&'a str, f64, f64)> {
    base.iter()
        .filter_map(|(key, base_value)| {
            let base_number = base_value.as_f64()?;
            let compare_number = compare.get(key)?.as_f64()?;
            if base_number == compare_number {
                None
            } else {
                Some((key.as_str(), base_number, compare_number))
            }
        })
        .collect()
}

/// Whether a change is large enough to report
///
/// A zero base with any change always counts, since the relative change
/// is unbounded.
pub fn exceeds_threshold(base: f64, compare: f64, threshold: f64) -> bool {
    let delta = compare - base;
    if delta == 0.0 {
        return false;
    }
    if base == 0.0 {
        return true;
    }
    (delta / base).abs() > threshold
}

fn identifying_value(item: &DetailItem) -> Option<String> {
    ITEM_KEY_FIELDS.iter().find_map(|field| {
        let value = lookup(item, field)?;
        match value {
            Value::String(text) if !text.is_empty() => Some(format!("{}={}", field, text)),
            // Entities and nodes may be objects carrying a display text
            Value::Object(object) => object
                .get("text")
                .or_else(|| object.get("url"))
                .and_then(Value::as_str)
                .map(|text| format!("{}={}", field, text)),
            _ => None,
        }
    })
}

fn lookup<'a>(item: &'a DetailItem, dotted: &str) -> Option<&'a Value> {
    let mut parts = dotted.split('.');
    let mut current = item.get(parts.next()?)?;
    for part in parts {
        current = current.as_object()?.get(part)?;
    }
    Some(current)
}
