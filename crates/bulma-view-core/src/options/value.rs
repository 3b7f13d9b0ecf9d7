//! Supplied option maps

use serde_json::Value;

/// Named values supplied when constructing a component.
///
/// Keys keep the order they were inserted in; inserting an existing key
/// replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    entries: Vec<(String, Value)>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Options
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Options::new();
        for (key, value) in iter {
            options.insert(key, value);
        }
        options
    }
}

impl IntoIterator for Options {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Everything except `null` and `false` is truthy
pub fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}

/// Join words as a sentence: `a`, `a and b`, `a, b, and c`
pub fn to_sentence<S: AsRef<str>>(words: &[S]) -> String {
    match words {
        [] => String::new(),
        [one] => one.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{}, and {}", head.join(", "), last.as_ref())
        }
    }
}

/// Build an [`Options`] map, converting each value with `serde_json::json!`.
///
/// ```
/// use bulma_view_core::options;
///
/// let opts = options! { "label" => "Save", "disabled" => true };
/// assert_eq!(opts.len(), 2);
/// ```
#[macro_export]
macro_rules! options {
    () => {
        $crate::Options::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut options = $crate::Options::new();
        $( options.insert($key, $crate::serde_json::json!($value)); )+
        options
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn insert_replaces_in_place() {
        let mut options = Options::new();
        options.insert("a", 1);
        options.insert("b", 2);
        options.insert("a", 3);

        let keys: Vec<&str> = options.keys().collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(options.get("a"), Some(&json!(3)));
    }

    #[test]
    fn macro_builds_in_order() {
        let options = crate::options! { "label" => "Save", "tags" => ["a", "b"], "size" => None::<String> };
        let keys: Vec<&str> = options.keys().collect();
        assert_eq!(keys, ["label", "tags", "size"]);
        assert_eq!(options.get("tags"), Some(&json!(["a", "b"])));
        assert_eq!(options.get("size"), Some(&Value::Null));
    }

    #[test]
    fn remove_returns_value() {
        let mut options: Options = [("x", 1)].into_iter().collect();
        assert_eq!(options.remove("x"), Some(json!(1)));
        assert!(options.is_empty());
        assert_eq!(options.remove("x"), None);
    }

    #[test_case(json!(null), false ; "null")]
    #[test_case(json!(false), false ; "false")]
    #[test_case(json!(true), true ; "true")]
    #[test_case(json!(0), true ; "zero")]
    #[test_case(json!(""), true ; "empty string")]
    #[test_case(json!([]), true ; "empty array")]
    fn truthiness(value: Value, expected: bool) {
        assert_eq!(is_truthy(&value), expected);
    }

    #[test]
    fn sentence_joining() {
        assert_eq!(to_sentence::<&str>(&[]), "");
        assert_eq!(to_sentence(&[":a"]), ":a");
        assert_eq!(to_sentence(&[":a", ":b"]), ":a and :b");
        assert_eq!(to_sentence(&[":a", ":b", ":c"]), ":a, :b, and :c");
    }
}
