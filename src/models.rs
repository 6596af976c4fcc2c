use std::fmt;

use serde::Deserialize;
use serde::de::{DeserializeOwned, Deserializer};
use serde_json::Value;

/// The subset of repository metadata the `repo` command prints.
///
/// Every field is optional and decoded on its own, so a bad field never blanks
/// the others. Text fields print any non-null scalar as written (`5`, `true`);
/// the star count must be an unsigned integer.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryInfo {
    #[serde(default, deserialize_with = "scalar_text")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub stargazers_count: Option<u64>,
}

impl RepositoryInfo {
    /// Decodes a response body, falling back to an empty record when the body is
    /// not a JSON object.
    pub fn from_json_bytes(body: &[u8]) -> Self {
        let value: Value = match serde_json::from_slice(body) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(error = %err, "response body is not valid JSON");
                return Self::default();
            }
        };

        if !value.is_object() {
            tracing::debug!("response body is not a JSON object");
            return Self::default();
        }

        serde_json::from_value(value).unwrap_or_default()
    }

    pub fn lines(&self) -> [String; 3] {
        [
            format!("Repository Name: {}", self.full_name.as_deref().unwrap_or_default()),
            format!("Description: {}", self.description.as_deref().unwrap_or_default()),
            format!(
                "Stars: {}",
                self.stargazers_count
                    .map(|stars| stars.to_string())
                    .unwrap_or_default()
            ),
        ]
    }
}

impl fmt::Display for RepositoryInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [name, description, stars] = self.lines();
        writeln!(f, "{name}")?;
        writeln!(f, "{description}")?;
        writeln!(f, "{stars}")
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}
