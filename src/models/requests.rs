use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use crate::models::domain::{Internship, UserProfile};

/// Payload read from standard input
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub user: UserProfile,
    #[serde(default, deserialize_with = "falsy_as_empty")]
    pub internships: Vec<Internship>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Empty values (`null`, `false`, `0`, `""`, `{}`) read as no postings
fn falsy_as_empty<'de, D>(deserializer: D) -> Result<Vec<Internship>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    let empty = match &value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Array(_) => false,
    };

    if empty {
        return Ok(Vec::new());
    }

    serde_json::from_value(value).map_err(D::Error::custom)
}
