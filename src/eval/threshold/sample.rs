//! Scored validation samples

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single model output with its (optional) ground-truth label
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredSample {
    /// Row identifier (customer id, row index, ...)
    pub id: String,
    /// True label; absent for batches scored before the outcome is known
    #[serde(
        default,
        deserialize_with = "deserialize_label",
        serialize_with = "serialize_label",
        skip_serializing_if = "Option::is_none"
    )]
    pub label: Option<bool>,
    /// Predicted probability of the positive class
    pub probability: f64,
}

impl ScoredSample {
    /// Labelled sample
    pub fn new(id: impl Into<String>, label: bool, probability: f64) -> Self {
        Self { id: id.into(), label: Some(label), probability }
    }

    /// Sample whose outcome is not yet known
    pub fn unlabeled(id: impl Into<String>, probability: f64) -> Self {
        Self { id: id.into(), label: None, probability }
    }
}

/// Accept `0`/`1`, `true`/`false`, or their quoted forms.
fn deserialize_label<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LabelRepr {
        Bool(bool),
        Int(i64),
        Str(String),
    }

    match Option::<LabelRepr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(LabelRepr::Bool(b)) => Ok(Some(b)),
        Some(LabelRepr::Int(0)) => Ok(Some(false)),
        Some(LabelRepr::Int(1)) => Ok(Some(true)),
        Some(LabelRepr::Int(other)) => Err(serde::de::Error::custom(format!(
            "label must be 0 or 1, got {other}"
        ))),
        Some(LabelRepr::Str(s)) => match s.to_lowercase().as_str() {
            "1" | "true" => Ok(Some(true)),
            "0" | "false" => Ok(Some(false)),
            other => Err(serde::de::Error::custom(format!(
                "label must be 0 or 1, got '{other}'"
            ))),
        },
    }
}

fn serialize_label<S>(label: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match label {
        Some(l) => serializer.serialize_u8(u8::from(*l)),
        None => serializer.serialize_none(),
    }
}
