//! Declarative form definitions loaded from JSON or YAML
//!
//! ```yaml
//! form: signup
//! fields:
//!   - name: email
//!     rules: [required, email]
//!     messages: [Email is required, Email is invalid]
//!   - name: [phone_home, phone_work]
//!     rules: numeric
//!     options:
//!       onkeyup: false
//! ```

use crate::builder::{FieldName, FieldSpec};
use crate::error::{FormsError, FormsResult};
use crate::field::FieldOptionsOverride;
use crate::rules::RuleSpec;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A scalar or a list of scalars
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

/// Serialized form of a [`FieldSpec`]; rules are string specifiers only
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    #[serde(default)]
    pub name: Option<FieldName>,
    #[serde(default)]
    pub rules: OneOrMany<String>,
    #[serde(default)]
    pub messages: OneOrMany<String>,
    #[serde(default)]
    pub options: FieldOptionsOverride,
}

impl From<FieldConfig> for FieldSpec {
    fn from(config: FieldConfig) -> Self {
        FieldSpec {
            name: config.name,
            rules: config.rules.into_vec().iter().map(RuleSpec::from).collect(),
            messages: config.messages.into_vec(),
            options: config.options,
        }
    }
}

/// A whole form definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Name of the form the fields belong to
    #[serde(default)]
    pub form: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

impl FormConfig {
    pub fn from_json_str(source: &str) -> FormsResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_yaml_str(source: &str) -> FormsResult<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Load a definition, choosing the format from the file extension
    pub fn from_path(path: impl AsRef<Path>) -> FormsResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(str::to_ascii_lowercase);

        let config = match extension.as_deref() {
            Some("json") => Self::from_json_str(&std::fs::read_to_string(path)?)?,
            Some("yaml") | Some("yml") => Self::from_yaml_str(&std::fs::read_to_string(path)?)?,
            _ => return Err(FormsError::unsupported_format(path)),
        };

        tracing::debug!(
            "Loaded form definition from {} ({} field spec(s))",
            path.display(),
            config.fields.len()
        );
        Ok(config)
    }

    /// Convert the declared fields into builder specs
    pub fn into_field_specs(self) -> Vec<FieldSpec> {
        self.fields.into_iter().map(FieldSpec::from).collect()
    }
}
