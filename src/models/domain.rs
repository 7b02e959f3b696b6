use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

pub const DEFAULT_SKILLS: &str = "javascript html css react node express mysql";
pub const DEFAULT_PREFERRED_LOCATION: &str = "pune";
pub const DEFAULT_EXPECTED_STIPEND: i64 = 100_000;
pub const DEFAULT_INTERNSHIP_TYPE: &str = "full-time";
pub const DEFAULT_PREFERRED_ROLE: &str = "web development";

/// User profile with matching preferences
///
/// Every field is `None` when the key was missing from the input and
/// `Some` when it was present, even if the value was `null` or empty.
/// Only missing keys are filled by [`UserProfile::with_defaults`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserProfile {
    #[serde(default, deserialize_with = "present_text")]
    pub skills: Option<String>,
    #[serde(default, deserialize_with = "present_text")]
    pub preferred_role: Option<String>,
    #[serde(default, deserialize_with = "present_text")]
    pub preferred_location: Option<String>,
    #[serde(default, deserialize_with = "present_value")]
    pub expected_stipend: Option<Value>,
    #[serde(default, deserialize_with = "present_text")]
    pub internship_type: Option<String>,
}

impl UserProfile {
    /// Fill missing keys from the fixed default profile
    pub fn with_defaults(self) -> Self {
        Self {
            skills: self.skills.or_else(|| Some(DEFAULT_SKILLS.to_string())),
            preferred_role: self
                .preferred_role
                .or_else(|| Some(DEFAULT_PREFERRED_ROLE.to_string())),
            preferred_location: self
                .preferred_location
                .or_else(|| Some(DEFAULT_PREFERRED_LOCATION.to_string())),
            expected_stipend: self
                .expected_stipend
                .or_else(|| Some(Value::from(DEFAULT_EXPECTED_STIPEND))),
            internship_type: self
                .internship_type
                .or_else(|| Some(DEFAULT_INTERNSHIP_TYPE.to_string())),
        }
    }

    pub fn skills(&self) -> &str {
        self.skills.as_deref().unwrap_or_default()
    }

    pub fn preferred_role(&self) -> &str {
        self.preferred_role.as_deref().unwrap_or_default()
    }

    pub fn preferred_location(&self) -> &str {
        self.preferred_location.as_deref().unwrap_or_default()
    }

    pub fn internship_type(&self) -> &str {
        self.internship_type.as_deref().unwrap_or_default()
    }

    /// Expected stipend as a non-zero integer, if it parses as one
    pub fn expected_stipend(&self) -> Option<i64> {
        self.expected_stipend.as_ref().and_then(coerce_stipend)
    }
}

/// Internship posting as supplied by the caller
///
/// Fields are kept as raw JSON so they can be echoed back unchanged.
/// Absent keys become `null`; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Internship {
    #[serde(default)]
    pub title: Value,
    #[serde(default)]
    pub company: Value,
    #[serde(default)]
    pub location: Value,
    #[serde(default)]
    pub stipend: Value,
    #[serde(default)]
    pub field: Value,
    #[serde(default)]
    pub skills: Value,
    #[serde(rename = "type", default)]
    pub internship_type: Value,
    #[serde(default)]
    pub duration: Value,
}

impl Internship {
    pub fn location_text(&self) -> String {
        text_of(&self.location)
    }

    pub fn field_text(&self) -> String {
        text_of(&self.field)
    }

    pub fn skills_text(&self) -> String {
        text_of(&self.skills)
    }

    pub fn type_text(&self) -> String {
        text_of(&self.internship_type)
    }

    /// Offered stipend as a non-zero integer, if it parses as one
    pub fn stipend_amount(&self) -> Option<i64> {
        coerce_stipend(&self.stipend)
    }
}

/// Scored match result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredInternship {
    pub title: Value,
    pub company: Value,
    pub location: Value,
    pub stipend: Value,
    pub field: Value,
    pub skills: Value,
    #[serde(rename = "type")]
    pub internship_type: Value,
    pub duration: Value,
    pub score: Score,
    pub reasons: Vec<String>,
}

impl ScoredInternship {
    pub fn new(internship: Internship, score: Score, reasons: Vec<String>) -> Self {
        Self {
            title: internship.title,
            company: internship.company,
            location: internship.location,
            stipend: internship.stipend,
            field: internship.field,
            skills: internship.skills,
            internship_type: internship.internship_type,
            duration: internship.duration,
            score,
            reasons,
        }
    }
}

/// Final match score, 0-100, rounded to two decimals
///
/// Serialized as a float when a fractional contribution was summed
/// (`80.0`), otherwise as an integer (`80`).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Score {
    pub value: f64,
    pub fractional: bool,
}

impl Score {
    pub fn whole(value: f64) -> Self {
        Self { value, fractional: false }
    }

    /// Score that includes a fractional contribution, unless it sits on a clamp bound
    pub fn with_fraction(value: f64) -> Self {
        Self {
            value,
            fractional: value > 0.0 && value < 100.0,
        }
    }
}

impl PartialEq<f64> for Score {
    fn eq(&self, other: &f64) -> bool {
        self.value == *other
    }
}

impl Serialize for Score {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.fractional || self.value.fract() != 0.0 {
            serializer.serialize_f64(self.value)
        } else {
            serializer.serialize_i64(self.value as i64)
        }
    }
}

/// Render a JSON value as the text used for matching.
///
/// `null` reads as the empty string, scalars as their JSON text and arrays
/// as their elements joined by `", "`.
pub fn text_of(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(text_of)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => value.to_string(),
    }
}

/// Coerce a stipend value to an integer.
///
/// Returns `None` for zero and for anything that does not read as an
/// integer: floats are truncated, strings are trimmed and parsed, `true`
/// is 1 and empty values are 0.
pub fn coerce_stipend(value: &Value) -> Option<i64> {
    let amount = match value {
        Value::Null => 0,
        Value::Bool(b) => i64::from(*b),
        Value::Number(n) => match n.as_i64() {
            Some(v) => v,
            None => {
                let f = n.as_f64()?.trunc();
                if !f.is_finite() || f.abs() >= i64::MAX as f64 {
                    return None;
                }
                f as i64
            }
        },
        Value::String(s) if s.is_empty() => 0,
        Value::String(s) => s.trim().parse::<i64>().ok()?,
        Value::Array(items) if items.is_empty() => 0,
        Value::Object(map) if map.is_empty() => 0,
        Value::Array(_) | Value::Object(_) => return None,
    };

    (amount != 0).then_some(amount)
}

fn present_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(Some(text_of(&value)))
}

fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_fill_missing_keys_only() {
        let user: UserProfile =
            serde_json::from_value(json!({"skills": "", "preferred_role": null})).unwrap();
        let user = user.with_defaults();

        assert_eq!(user.skills(), "");
        assert_eq!(user.preferred_role(), "");
        assert_eq!(user.preferred_location(), DEFAULT_PREFERRED_LOCATION);
        assert_eq!(user.internship_type(), DEFAULT_INTERNSHIP_TYPE);
        assert_eq!(user.expected_stipend(), Some(DEFAULT_EXPECTED_STIPEND));
    }

    #[test]
    fn test_empty_user_gets_full_defaults() {
        let user = UserProfile::default().with_defaults();
        assert_eq!(user.skills(), DEFAULT_SKILLS);
        assert_eq!(user.preferred_role(), DEFAULT_PREFERRED_ROLE);
    }

    #[test]
    fn test_user_numeric_text_is_rendered() {
        let user: UserProfile = serde_json::from_value(json!({"preferred_location": 411001})).unwrap();
        assert_eq!(user.preferred_location(), "411001");
    }

    #[test]
    fn test_coerce_stipend() {
        assert_eq!(coerce_stipend(&json!(15000)), Some(15000));
        assert_eq!(coerce_stipend(&json!("  15000 ")), Some(15000));
        assert_eq!(coerce_stipend(&json!("+250")), Some(250));
        assert_eq!(coerce_stipend(&json!(-300)), Some(-300));
        assert_eq!(coerce_stipend(&json!(1999.9)), Some(1999));
        assert_eq!(coerce_stipend(&json!(true)), Some(1));
        assert_eq!(coerce_stipend(&json!(0)), None);
        assert_eq!(coerce_stipend(&json!("")), None);
        assert_eq!(coerce_stipend(&json!(null)), None);
        assert_eq!(coerce_stipend(&json!("15,000")), None);
        assert_eq!(coerce_stipend(&json!("1500.5")), None);
        assert_eq!(coerce_stipend(&json!("unpaid")), None);
        assert_eq!(coerce_stipend(&json!([5000])), None);
    }

    #[test]
    fn test_text_of() {
        assert_eq!(text_of(&json!(null)), "");
        assert_eq!(text_of(&json!("Pune")), "Pune");
        assert_eq!(text_of(&json!(["python", "sql"])), "python, sql");
    }

    #[test]
    fn test_internship_passes_through_unknown_shapes() {
        let internship: Internship = serde_json::from_value(json!({
            "internship_id": 7,
            "title": "Data Intern",
            "stipend": "12000",
            "type": "remote"
        }))
        .unwrap();

        assert_eq!(internship.title, json!("Data Intern"));
        assert_eq!(internship.company, Value::Null);
        assert_eq!(internship.type_text(), "remote");
        assert_eq!(internship.stipend_amount(), Some(12000));
    }

    #[test]
    fn test_score_serialization() {
        let whole = ScoredInternship::new(Internship::default(), Score::whole(80.0), vec![]);
        let weighted = ScoredInternship::new(Internship::default(), Score::with_fraction(80.0), vec![]);
        let fractional = ScoredInternship::new(Internship::default(), Score::with_fraction(72.86), vec![]);

        assert_eq!(serde_json::to_string(&whole.score).unwrap(), "80");
        assert_eq!(serde_json::to_string(&weighted.score).unwrap(), "80.0");
        assert_eq!(serde_json::to_value(&fractional).unwrap()["score"], json!(72.86));
    }

    #[test]
    fn test_clamped_score_is_whole() {
        assert_eq!(serde_json::to_string(&Score::with_fraction(100.0)).unwrap(), "100");
        assert_eq!(serde_json::to_string(&Score::with_fraction(0.0)).unwrap(), "0");
    }
}
