/// Ordered parameter mappings for scene nodes.
///
/// Insertion order matters: it is the order in which `key=value` pairs are
/// emitted. Names are unique within one mapping.
use crate::value::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
    entries: Vec<(String, Value)>,
}

impl Properties {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a parameter, builder style.
    ///
    /// If `name` is already present its value is replaced in place, keeping
    /// the original position.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name.into(), value.into());
        self
    }

    fn insert(&mut self, name: String, value: Value) {
        match self.position(&name) {
            Some(i) => self.entries[i].1 = value,
            None => self.entries.push((name, value)),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.position(name).map(|i| &self.entries[i].1)
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Combine `defaults` with `self`, where values already on `self` win.
    ///
    /// Keys of `defaults` come first in their own order; keys only `self`
    /// has follow in `self`'s order.
    #[must_use]
    pub fn merge_defaults(&self, defaults: Self) -> Self {
        let mut merged = defaults;
        for (name, value) in &self.entries {
            merged.insert(name.clone(), value.clone());
        }
        merged
    }

    /// Render as `key=value` pairs separated by `", "`.
    #[must_use]
    pub fn render_params(&self) -> String {
        let mut out = String::new();
        for (i, (name, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(name);
            out.push('=');
            out.push_str(&value.render());
        }
        out
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |props, (k, v)| props.with(k, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(props: &Properties) -> Vec<&str> {
        props.iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let props = Properties::new().with("h", 10).with("r", 2).with("center", true);
        assert_eq!(keys(&props), ["h", "r", "center"]);
        assert_eq!(props.render_params(), "h=10, r=2, center=true");
    }

    #[test]
    fn test_duplicate_with_replaces_in_place() {
        let props = Properties::new().with("a", 1).with("b", 2).with("a", 3);
        assert_eq!(props.render_params(), "a=3, b=2");
    }

    #[test]
    fn test_merge_keeps_existing_values() {
        let existing = Properties::new().with("r", 5);
        let merged = existing.merge_defaults(Properties::new().with("r", 9));
        assert_eq!(merged.get("r"), Some(&Value::Number(5.0)));
    }

    #[test]
    fn test_merge_orders_defaults_first() {
        let existing = Properties::new().with("center", true);
        let merged = existing.merge_defaults(Properties::new().with("size", 2));
        assert_eq!(merged.render_params(), "size=2, center=true");

        let existing = Properties::new().with("size", 2).with("center", false);
        let merged = existing.merge_defaults(Properties::new().with("$fn", 32).with("center", true));
        assert_eq!(merged.render_params(), "$fn=32, center=false, size=2");
    }

    #[test]
    fn test_merge_does_not_touch_receiver() {
        let existing = Properties::new().with("r", 1);
        let _ = existing.merge_defaults(Properties::new().with("$fa", 12));
        assert_eq!(existing.len(), 1);
        assert!(!existing.contains_key("$fa"));
    }

    #[test]
    fn test_empty_renders_nothing() {
        let props = Properties::new();
        assert!(props.is_empty());
        assert_eq!(props.render_params(), "");
    }

    #[test]
    fn test_from_iter() {
        let props: Properties = [("text", "hi"), ("font", "Mono")].into_iter().collect();
        assert_eq!(props.render_params(), r#"text="hi", font="Mono""#);
    }
}
