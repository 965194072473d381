//! Attribute storage for a single element

/// One attribute mutation as seen by the change callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeChange {
    pub name: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}

impl AttributeChange {
    /// Exact comparison; an absent value and an empty one differ
    pub fn is_noop(&self) -> bool {
        self.old_value == self.new_value
    }
}

/// Insertion-ordered attribute map
///
/// Every value is a string. Boolean attributes are presence flags: query
/// them with [`Attributes::has`] and ignore the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Value of `name`, or `default` when the attribute is missing or empty
    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        match self.get(name) {
            Some(value) if !value.is_empty() => value,
            _ => default,
        }
    }

    /// Value of `name`, or the empty string
    pub fn text(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    /// Presence-flag query
    pub fn has(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    /// Set a value, reporting the old and new value
    pub fn set(&mut self, name: &str, value: &str) -> AttributeChange {
        let old_value = match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, value.to_string())),
            None => {
                self.entries.push((name.to_string(), value.to_string()));
                None
            }
        };

        AttributeChange {
            name: name.to_string(),
            old_value,
            new_value: Some(value.to_string()),
        }
    }

    /// Remove an attribute; `None` when it was not present
    pub fn remove(&mut self, name: &str) -> Option<AttributeChange> {
        let index = self.entries.iter().position(|(key, _)| key == name)?;
        let (name, old_value) = self.entries.remove(index);
        Some(AttributeChange {
            name,
            old_value: Some(old_value),
            new_value: None,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (name, value) in iter {
            attributes.set(name.as_ref(), value.as_ref());
        }
        attributes
    }
}

/// Check an attribute name the way an HTML parser would accept it
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '='))
}
