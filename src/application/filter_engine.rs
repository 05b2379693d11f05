// Substring filtering and candidate-key extraction over an in-memory list
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Distinct non-empty keys projected from `items`, sorted for display.
pub fn distinct_keys<T, F>(items: &[T], key: F) -> Vec<String>
where
    F: Fn(&T) -> Option<&str>,
{
    let unique: BTreeSet<&str> = items
        .iter()
        .filter_map(|item| key(item))
        .filter(|k| is_usable(k))
        .collect();

    let mut keys: Vec<String> = unique.into_iter().map(str::to_string).collect();
    keys.sort_by(|a, b| display_order(a, b));
    keys
}

/// Items whose key contains `query`, ignoring case. Order is preserved.
///
/// An empty query keeps everything. Items without a key never match a non-empty query.
pub fn apply<'a, T, F>(items: &'a [T], query: &str, key: F) -> Vec<&'a T>
where
    F: Fn(&T) -> Option<&str>,
{
    if query.is_empty() {
        return items.iter().collect();
    }

    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            key(*item)
                .filter(|k| is_usable(k))
                .is_some_and(|k| k.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Blank keys count as absent for both the candidate set and matching.
fn is_usable(key: &str) -> bool {
    !key.trim().is_empty()
}

/// Case-insensitive first so "ac" sits next to "AC", then codepoint order as a tiebreak.
fn display_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
