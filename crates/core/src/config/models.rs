//! The parsed configuration document.
//!
//! The loader imposes no schema, so a document is a plain YAML mapping whose
//! values may be any YAML node. Consumers that want a fixed shape call
//! [`ConfigDocument::decode`].

use crate::config::error::ConfigError;
use crate::config::error::ConfigResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde::Serializer;
use serde_yaml::Mapping;
use serde_yaml::Value;
use std::ops::Deref;
use std::path::Path;
use std::path::PathBuf;

/// One parsed configuration file.
///
/// Dereferences to the underlying [`serde_yaml::Mapping`], so the usual
/// mapping accessors work directly:
///
/// ```rust,no_run
/// use tp_core::config::loader::ConfigLoader;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let model = ConfigLoader::new("config").get_model_config()?;
/// let name = model.get("model").and_then(|v| v.as_str());
/// println!("model = {name:?}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    path: PathBuf,
    mapping: Mapping,
}

impl ConfigDocument {
    pub fn new(path: impl Into<PathBuf>, mapping: Mapping) -> Self {
        Self {
            path: path.into(),
            mapping,
        }
    }

    /// File the document was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn as_mapping(&self) -> &Mapping {
        &self.mapping
    }

    pub fn into_mapping(self) -> Mapping {
        self.mapping
    }

    /// Looks up a value by a dot separated key path.
    ///
    /// Each segment selects a key in a mapping, or an index in a sequence when
    /// the segment is a number. Tagged nodes are looked through.
    ///
    /// ```rust,no_run
    /// # use tp_core::config::models::ConfigDocument;
    /// # fn example(doc: &ConfigDocument) {
    /// let temperature = doc.lookup("tasks.column_typing.temperature");
    /// let first_handler = doc.lookup("root.handlers.0");
    /// # }
    /// ```
    pub fn lookup(&self, key_path: &str) -> Option<&Value> {
        let mut segments = key_path.split('.');
        let first = segments.next()?;
        let mut current = self.mapping.get(first)?;

        for segment in segments {
            current = step(current, segment)?;
        }

        Some(current)
    }

    /// Decodes the whole document into a consumer-defined type.
    pub fn decode<T: DeserializeOwned>(&self) -> ConfigResult<T> {
        serde_yaml::from_value(Value::Mapping(self.mapping.clone())).map_err(|source| {
            ConfigError::Decode {
                path: self.path.clone(),
                source,
            }
        })
    }
}

fn step<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Mapping(mapping) => mapping.get(segment),
        Value::Sequence(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        Value::Tagged(tagged) => step(&tagged.value, segment),
        _ => None,
    }
}

impl Deref for ConfigDocument {
    type Target = Mapping;

    fn deref(&self) -> &Self::Target {
        &self.mapping
    }
}

impl Serialize for ConfigDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.mapping.serialize(serializer)
    }
}

impl From<ConfigDocument> for Mapping {
    fn from(doc: ConfigDocument) -> Self {
        doc.mapping
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn document(yaml: &str) -> ConfigDocument {
        let mapping: Mapping = serde_yaml::from_str(yaml).expect("valid test yaml");
        ConfigDocument::new("/tmp/test.yaml", mapping)
    }

    #[test]
    fn test_deref_to_mapping() {
        let doc = document("model: gpt-4\ntemperature: 0.2");
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.get("model").and_then(Value::as_str), Some("gpt-4"));
        assert_eq!(doc.get("temperature").and_then(Value::as_f64), Some(0.2));
    }

    #[test]
    fn test_lookup_nested_paths() {
        let doc = document(
            r#"
tasks:
  column_typing:
    temperature: 0.0
root:
  handlers: [console, file]
"#,
        );

        assert_eq!(
            doc.lookup("tasks.column_typing.temperature")
                .and_then(Value::as_f64),
            Some(0.0)
        );
        assert_eq!(
            doc.lookup("root.handlers.1").and_then(Value::as_str),
            Some("file")
        );
        assert!(doc.lookup("root.handlers.7").is_none());
        assert!(doc.lookup("tasks.missing").is_none());
        assert!(doc.lookup("tasks.column_typing.temperature.deeper").is_none());
    }

    #[test]
    fn test_lookup_through_tag() {
        let doc = document("secret: !env\n  name: API_KEY\n");
        assert_eq!(
            doc.lookup("secret.name").and_then(Value::as_str),
            Some("API_KEY")
        );
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct ModelSettings {
        model: String,
        temperature: f64,
    }

    #[test]
    fn test_decode_into_consumer_type() {
        let doc = document("model: gpt-4\ntemperature: 0.2\nextra: ignored");
        let settings: ModelSettings = doc.decode().unwrap();
        assert_eq!(
            settings,
            ModelSettings {
                model: "gpt-4".to_string(),
                temperature: 0.2,
            }
        );
    }

    #[test]
    fn test_decode_error_carries_path() {
        let doc = document("model: gpt-4");
        let err = doc.decode::<ModelSettings>().unwrap_err();

        match err {
            ConfigError::Decode { path, .. } => assert_eq!(path, PathBuf::from("/tmp/test.yaml")),
            other => panic!("Expected Decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_serializes_as_plain_mapping() {
        let doc = document("model: gpt-4\ntemperature: 0.2");
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"model": "gpt-4", "temperature": 0.2})
        );
    }
}
