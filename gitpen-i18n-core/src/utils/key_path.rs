//! Dot-separated key path helpers over `serde_json::Value` trees.

use serde_json::Value;

/// Walks `root` one level per `.`-separated segment of `path`.
///
/// Returns `None` when `path` is empty, a segment is missing, or an
/// intermediate value is not an object.
pub fn get_nested_value<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }
    path.split('.')
        .try_fold(root, |current, segment| current.as_object()?.get(segment))
}

/// Collects the dot-separated paths of every string leaf under `root`.
pub fn leaf_paths(root: &Value) -> Vec<String> {
    let mut paths = Vec::new();
    collect_leaf_paths(root, &mut String::new(), &mut paths);
    paths.sort();
    paths
}

fn collect_leaf_paths(value: &Value, prefix: &mut String, out: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let len = prefix.len();
                if !prefix.is_empty() {
                    prefix.push('.');
                }
                prefix.push_str(key);
                collect_leaf_paths(child, prefix, out);
                prefix.truncate(len);
            }
        }
        Value::String(_) if !prefix.is_empty() => out.push(prefix.clone()),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_nested_paths() {
        let tree = json!({ "common": { "cancel": "Cancel" }, "nested": { "deep": { "key": "v" } } });
        assert_eq!(get_nested_value(&tree, "common.cancel"), Some(&json!("Cancel")));
        assert_eq!(get_nested_value(&tree, "nested.deep.key"), Some(&json!("v")));
        assert_eq!(get_nested_value(&tree, "nested.deep"), Some(&json!({ "key": "v" })));
    }

    #[test]
    fn fails_through_leaves_and_gaps() {
        let tree = json!({ "common": { "cancel": "Cancel", "none": null } });
        assert_eq!(get_nested_value(&tree, "common.cancel.more"), None);
        assert_eq!(get_nested_value(&tree, "common.none.more"), None);
        assert_eq!(get_nested_value(&tree, "common.missing"), None);
        assert_eq!(get_nested_value(&tree, "common..cancel"), None);
        assert_eq!(get_nested_value(&tree, ""), None);
    }

    #[test]
    fn lists_string_leaves_only() {
        let tree = json!({ "a": { "b": "x", "c": 1 }, "d": "y" });
        assert_eq!(leaf_paths(&tree), vec!["a.b".to_string(), "d".to_string()]);
    }
}
