use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A video as returned by the catalog API.
///
/// The catalog has shipped both camelCase and snake_case field names, and
/// some responses carry both. Each spelling is kept separately; the accessors
/// prefer camelCase and fall back to snake_case when it is missing or empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoRecord {
    #[serde(default, deserialize_with = "de_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default, rename = "thumbnailUrl")]
    pub thumbnail_url: Option<String>,
    #[serde(default, rename = "thumbnail_url")]
    pub thumbnail_url_snake: Option<String>,
    #[serde(default, rename = "videoUrl")]
    pub video_url: Option<String>,
    #[serde(default, rename = "video_url")]
    pub video_url_snake: Option<String>,
    #[serde(default, deserialize_with = "de_price")]
    pub price: Option<u64>,
    #[serde(default, rename = "userName")]
    pub user_name: Option<String>,
    #[serde(default, rename = "user_name")]
    pub user_name_snake: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl VideoRecord {
    pub fn caption(&self) -> Option<&str> {
        non_empty(&self.caption)
    }

    pub fn thumbnail(&self) -> Option<&str> {
        non_empty(&self.thumbnail_url).or_else(|| non_empty(&self.thumbnail_url_snake))
    }

    pub fn video(&self) -> Option<&str> {
        non_empty(&self.video_url).or_else(|| non_empty(&self.video_url_snake))
    }

    pub fn seller(&self) -> Option<&str> {
        non_empty(&self.user_name).or_else(|| non_empty(&self.user_name_snake))
    }
}

/// Accepts a string or numeric id.
fn de_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Accepts an integer, a float (rounded), or a numeric string.
/// Negative, non-finite and non-numeric values are treated as absent.
fn de_price<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let as_float = |f: f64| Some(f).filter(|f| f.is_finite() && *f >= 0.0).map(|f| f.round() as u64);
    Ok(match value {
        Some(Value::Number(n)) => n.as_u64().or_else(|| n.as_f64().and_then(as_float)),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            trimmed
                .parse::<u64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(as_float))
        }
        _ => None,
    })
}
