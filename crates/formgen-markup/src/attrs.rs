//! Ordered HTML attribute maps.
//!
//! Attributes keep insertion order so rendering the same input always
//! produces the same bytes. A value may be absent; absent and empty values
//! are dropped when the attributes are rendered.

/// An insertion-ordered map of HTML attributes.
///
/// # Examples
///
/// ```
/// use formgen_markup::Attrs;
///
/// let attrs = Attrs::new().with("class", "btn").with("type", "submit");
/// assert_eq!(attrs.get("type"), Some("submit"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
    entries: Vec<(String, Option<String>)>,
}

impl Attrs {
    /// Creates an empty attribute map.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder form of [`insert_opt`](Self::insert_opt).
    #[must_use]
    pub fn with_opt(mut self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        self.insert_opt(key, value);
        self
    }

    /// Sets an attribute, keeping the position of an existing key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.insert_opt(key, Some(value));
    }

    /// Sets an attribute that may be absent.
    pub fn insert_opt(&mut self, key: impl Into<String>, value: Option<impl Into<String>>) {
        let key = key.into();
        let value = value.map(Into::into);
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Returns the value of an attribute if it is present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Removes an attribute, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        self.entries.remove(pos).1
    }

    /// Appends a class to the `class` attribute, creating it if needed.
    pub fn append_class(&mut self, class: &str) {
        let merged = match self.get("class") {
            Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        };
        self.insert("class", merged);
    }

    /// Copies every attribute of `other` into `self`, overriding duplicates.
    pub fn merge(&mut self, other: &Self) {
        for (k, v) in &other.entries {
            self.insert_opt(k.clone(), v.clone());
        }
    }

    /// Returns `true` if no attribute would be rendered.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Iterates over the attributes that would be rendered, in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().filter_map(|(k, v)| match v.as_deref() {
            Some(v) if !v.is_empty() => Some((k.as_str(), v)),
            _ => None,
        })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Attrs {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
