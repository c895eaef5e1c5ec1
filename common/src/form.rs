use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::ClientError;

/// What an injected field may do when the form already carries that name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shadow {
    /// Refuse with `ClientError::FieldConflict`.
    Deny,
    /// Overwrite the user-supplied value.
    Replace,
}

/// Ordered field name → value mapping captured from a form, plus any fields
/// injected by the workflow (such as the resolved sender id).
///
/// Names are unique. Insertion order is preserved in both encodings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormRequest {
    fields: Vec<(String, String)>,
}

impl FormRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a request from the DOM's name/value pairs. A repeated name is
    /// reported as a conflict rather than letting one value win silently.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ClientError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut request = Self::new();
        for (name, value) in pairs {
            request.inject(name, value, Shadow::Deny)?;
        }
        Ok(request)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.fields[i].1.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn inject(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        shadow: Shadow,
    ) -> Result<(), ClientError> {
        let name = name.into();
        let value = value.into();
        match (self.position(&name), shadow) {
            (None, _) => self.fields.push((name, value)),
            (Some(_), Shadow::Deny) => return Err(ClientError::FieldConflict(name)),
            (Some(i), Shadow::Replace) => {
                if self.fields[i].1 != value {
                    log::warn!("field `{}` supplied by the form is replaced", name);
                }
                self.fields[i].1 = value;
            }
        }
        Ok(())
    }

    /// Drops every field whose name is not listed, keeping the original order.
    pub fn retain_only(&mut self, names: &[&str]) {
        self.fields.retain(|(name, _)| names.contains(&name.as_str()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn to_urlencoded(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (name, value) in self.iter() {
            serializer.append_pair(name, value);
        }
        serializer.finish()
    }

    /// JSON object body with the fields in insertion order.
    pub fn to_json(&self) -> Result<String, ClientError> {
        serde_json::to_string(self).map_err(|e| ClientError::InvalidInput(e.to_string()))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|(k, _)| k == name)
    }
}

impl Serialize for FormRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
