//! Nested catalog tree and dotted-path operations.
//!
//! A catalog file is a nested mapping whose leaves are display strings.
//! `MessageValue` models it as a tagged variant so every traversal
//! pattern-matches instead of probing JSON types at runtime.
//!
//! Arrays are leaves: flattening stops at the array itself and path
//! resolution never descends into one.

use std::fmt;

use indexmap::IndexMap;
use serde_json::{Map, Number, Value};

/// Ordered mapping of child keys, preserving the order found on disk.
pub type Branch = IndexMap<String, MessageValue>;

/// A scalar leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Leaf {
    String(String),
    Number(Number),
    Bool(bool),
    Null,
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Leaf::String(s) => write!(f, "{}", s),
            Leaf::Number(n) => write!(f, "{}", n),
            Leaf::Bool(b) => write!(f, "{}", b),
            Leaf::Null => write!(f, "null"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MessageValue {
    Leaf(Leaf),
    Branch(Branch),
    Array(Vec<MessageValue>),
}

/// Segment path of a flattened leaf.
///
/// `dotted` is the display form (`errors.crash.title`); `segments` keeps the
/// original key names so a key containing `.` is still addressable exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyPath {
    pub dotted: String,
    pub segments: Vec<String>,
}

impl KeyPath {
    fn child(&self, segment: &str) -> Self {
        let dotted = if self.dotted.is_empty() {
            segment.to_string()
        } else {
            format!("{}.{}", self.dotted, segment)
        };
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Self { dotted, segments }
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dotted)
    }
}

impl Default for MessageValue {
    fn default() -> Self {
        MessageValue::Branch(Branch::new())
    }
}

impl MessageValue {
    /// An empty root mapping.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_branch(&self) -> Option<&Branch> {
        match self {
            MessageValue::Branch(map) => Some(map),
            _ => None,
        }
    }

    /// Every leaf as a dotted path, in document order.
    pub fn flatten(&self) -> Vec<String> {
        self.leaf_paths().into_iter().map(|p| p.dotted).collect()
    }

    /// Every leaf as a [`KeyPath`], in document order.
    pub fn leaf_paths(&self) -> Vec<KeyPath> {
        let mut paths = Vec::new();
        if let MessageValue::Branch(map) = self {
            collect_leaf_paths(map, &KeyPath::default(), &mut paths);
        }
        paths
    }

    /// Walk a dotted path through nested branches.
    ///
    /// Returns `None` at the first absent segment, or when a leaf or array is
    /// reached before the path is exhausted. A path ending on a branch is found.
    pub fn resolve(&self, dotted: &str) -> Option<&MessageValue> {
        self.resolve_segments(dotted.split('.'))
    }

    pub fn resolve_segments<I, S>(&self, segments: I) -> Option<&MessageValue>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut current = self;
        for segment in segments {
            match current {
                MessageValue::Branch(map) => current = map.get(segment.as_ref())?,
                _ => return None,
            }
        }
        Some(current)
    }

    /// Delete the value at a dotted path.
    ///
    /// Returns whether a deletion occurred. Emptied parents are left in place.
    pub fn remove_at_path(&mut self, dotted: &str) -> bool {
        let segments: Vec<&str> = dotted.split('.').collect();
        self.remove_segments(&segments)
    }

    /// Delete the value addressed by exact key segments.
    pub fn remove_segments<S: AsRef<str>>(&mut self, segments: &[S]) -> bool {
        let Some((last, parents)) = segments.split_last() else {
            return false;
        };

        let mut current = self;
        for segment in parents {
            match current {
                MessageValue::Branch(map) => match map.get_mut(segment.as_ref()) {
                    Some(child) => current = child,
                    None => return false,
                },
                _ => return false,
            }
        }

        match current {
            MessageValue::Branch(map) => map.shift_remove(last.as_ref()).is_some(),
            _ => false,
        }
    }

    /// Short display form of a value, used in reports.
    pub fn preview(&self) -> String {
        match self {
            MessageValue::Leaf(leaf) => leaf.to_string(),
            MessageValue::Array(items) => {
                let parts: Vec<String> = items.iter().map(|v| v.preview()).collect();
                format!("[{}]", parts.join(", "))
            }
            MessageValue::Branch(map) => format!("{{{} keys}}", map.len()),
        }
    }
}

fn collect_leaf_paths(map: &Branch, prefix: &KeyPath, out: &mut Vec<KeyPath>) {
    for (key, value) in map {
        let path = prefix.child(key);
        match value {
            MessageValue::Branch(child) => collect_leaf_paths(child, &path, out),
            MessageValue::Leaf(_) | MessageValue::Array(_) => out.push(path),
        }
    }
}

impl From<Value> for MessageValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => MessageValue::Branch(
                map.into_iter()
                    .map(|(k, v)| (k, MessageValue::from(v)))
                    .collect(),
            ),
            Value::Array(items) => {
                MessageValue::Array(items.into_iter().map(MessageValue::from).collect())
            }
            Value::String(s) => MessageValue::Leaf(Leaf::String(s)),
            Value::Number(n) => MessageValue::Leaf(Leaf::Number(n)),
            Value::Bool(b) => MessageValue::Leaf(Leaf::Bool(b)),
            Value::Null => MessageValue::Leaf(Leaf::Null),
        }
    }
}

impl From<&MessageValue> for Value {
    fn from(value: &MessageValue) -> Self {
        match value {
            MessageValue::Branch(map) => {
                let mut out = Map::new();
                for (k, v) in map {
                    out.insert(k.clone(), Value::from(v));
                }
                Value::Object(out)
            }
            MessageValue::Array(items) => Value::Array(items.iter().map(Value::from).collect()),
            MessageValue::Leaf(Leaf::String(s)) => Value::String(s.clone()),
            MessageValue::Leaf(Leaf::Number(n)) => Value::Number(n.clone()),
            MessageValue::Leaf(Leaf::Bool(b)) => Value::Bool(*b),
            MessageValue::Leaf(Leaf::Null) => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn tree(value: Value) -> MessageValue {
        MessageValue::from(value)
    }

    #[test]
    fn test_flatten_nested() {
        let t = tree(json!({
            "errors": {"crash": {"title": "Crashed", "body": "Oops"}},
            "save": "Save"
        }));
        assert_eq!(
            t.flatten(),
            vec!["errors.crash.title", "errors.crash.body", "save"]
        );
    }

    #[test]
    fn test_flatten_array_is_leaf() {
        let t = tree(json!({"steps": [{"title": "a"}, {"title": "b"}], "tags": []}));
        assert_eq!(t.flatten(), vec!["steps", "tags"]);
    }

    #[test]
    fn test_flatten_empty_branch_has_no_keys() {
        let t = tree(json!({"empty": {}, "x": 1}));
        assert_eq!(t.flatten(), vec!["x"]);
    }

    #[test]
    fn test_flatten_resolve_round_trip() {
        let t = tree(json!({
            "a": {"b": {"c": "deep"}, "n": 3, "flag": false},
            "list": ["x", "y"],
            "nothing": null
        }));
        for path in t.flatten() {
            let found = t.resolve(&path);
            assert!(found.is_some(), "path {} should resolve", path);
            assert!(!matches!(found, Some(MessageValue::Branch(_))));
        }
        assert_eq!(
            t.resolve("a.b.c"),
            Some(&MessageValue::Leaf(Leaf::String("deep".to_string())))
        );
        assert_eq!(
            t.resolve("list"),
            Some(&tree(json!(["x", "y"])))
        );
    }

    #[test]
    fn test_resolve_not_found() {
        let t = tree(json!({"a": {"b": "leaf"}, "arr": ["x"]}));
        assert!(t.resolve("a.c").is_none());
        assert!(t.resolve("a.b.c").is_none());
        assert!(t.resolve("arr.0").is_none());
        assert!(t.resolve("missing").is_none());
    }

    #[test]
    fn test_resolve_branch_counts_as_found() {
        let t = tree(json!({"a": {"b": "leaf"}}));
        assert!(matches!(t.resolve("a"), Some(MessageValue::Branch(_))));
    }

    #[test]
    fn test_remove_keeps_sibling_and_ancestors() {
        let mut t = tree(json!({"a": {"b": {"c": 1, "d": 2}}}));
        assert!(t.remove_at_path("a.b.c"));
        assert_eq!(t, tree(json!({"a": {"b": {"d": 2}}})));
    }

    #[test]
    fn test_remove_leaves_emptied_parent() {
        let mut t = tree(json!({"a": {"b": {"c": 1}}}));
        assert!(t.remove_at_path("a.b.c"));
        assert_eq!(t, tree(json!({"a": {"b": {}}})));
    }

    #[test]
    fn test_remove_missing_path_is_noop() {
        let original = tree(json!({"a": {"b": {"c": 1, "d": 2}}}));
        let mut t = original.clone();
        assert!(!t.remove_at_path("a.b.x"));
        assert!(!t.remove_at_path("a.b.c.d"));
        assert!(!t.remove_at_path("z"));
        assert_eq!(t, original);
    }

    #[test]
    fn test_remove_segments_with_dotted_key_name() {
        let mut t = tree(json!({"a.b": "literal", "a": {"b": "nested"}}));
        let paths = t.leaf_paths();
        assert_eq!(paths[0].segments, vec!["a.b"]);
        assert!(t.remove_segments(&paths[0].segments));
        assert_eq!(t, tree(json!({"a": {"b": "nested"}})));
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut t = tree(json!({"z": "1", "a": "2", "m": "3"}));
        t.remove_at_path("a");
        let keys: Vec<&String> = t.as_branch().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "m"]);
    }

    #[test]
    fn test_json_round_trip_keeps_scalars() {
        let original = json!({"n": 1.5, "b": true, "z": null, "s": "x", "l": [1, "two"]});
        let back = Value::from(&tree(original.clone()));
        assert_eq!(back, original);
    }

    #[test]
    fn test_preview() {
        assert_eq!(tree(json!("Save")).preview(), "Save");
        assert_eq!(tree(json!(["a", "b"])).preview(), "[a, b]");
        assert_eq!(tree(json!({"x": 1})).preview(), "{1 keys}");
    }
}
