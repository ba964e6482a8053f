use super::clip::{humanize, Clip};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Raw clip descriptor as yielded by a catalog source
///
/// Manifest entries carry `file` + `sizeBytes`; backend documents carry
/// `id`, an optional `title`, `size` and their own `url`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Size in bytes; serialized even when unknown so manifests show `null`
    #[serde(default, alias = "size", deserialize_with = "lenient_size")]
    pub size_bytes: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ClipRecord {
    /// Manifest entry for a file on disk
    pub fn for_file(file: impl Into<String>, size_bytes: Option<u64>) -> Self {
        Self {
            file: Some(file.into()),
            size_bytes,
            ..Self::default()
        }
    }

    /// Resolve into a `Clip`
    ///
    /// The id falls back to the file name, the title to the humanized file
    /// name (or id), and the URL to `asset_base` + percent-encoded file name.
    /// Returns None for records with neither an id nor a file.
    pub fn into_clip(self, asset_base: &str) -> Option<Clip> {
        let id = self.id.clone().or_else(|| self.file.clone())?;
        let name_for_title = self.file.as_deref().unwrap_or(&id);
        let title = match self.title.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => humanize(name_for_title),
        };
        let url = match (self.url, self.file.as_deref()) {
            (Some(url), _) => url,
            (None, Some(file)) => format!("{}{}", asset_base, urlencoding::encode(file)),
            (None, None) => format!("{}{}", asset_base, urlencoding::encode(&id)),
        };

        Some(Clip {
            id,
            title,
            url,
            file: self.file,
            size_bytes: self.size_bytes,
        })
    }
}

/// The `manifest.json` document listing deployed clips
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// RFC 3339 timestamp of generation
    #[serde(default)]
    pub generated_at: Option<String>,

    /// Anything other than an array reads as no clips; entries that do not
    /// decode are dropped
    #[serde(default, deserialize_with = "lenient_clips")]
    pub clips: Vec<ClipRecord>,
}

impl Manifest {
    pub fn new(generated_at: String, clips: Vec<ClipRecord>) -> Self {
        Self {
            generated_at: Some(generated_at),
            clips,
        }
    }

    /// Parse a manifest from JSON text
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Pretty-printed JSON, as written to disk and served
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Sizes that are not whole non-negative numbers count as unknown
fn lenient_size<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    let size = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        _ => None,
    };
    Ok(size)
}

fn lenient_clips<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<ClipRecord>, D::Error> {
    let entries = match Value::deserialize(deserializer)? {
        Value::Array(entries) => entries,
        Value::Null => return Ok(Vec::new()),
        other => {
            log::warn!("Manifest clips is not a list ({}), treating as empty", other);
            return Ok(Vec::new());
        }
    };

    let records = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<ClipRecord>(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("Skipping manifest entry {}: {}", index, e);
                None
            }
        })
        .collect();
    Ok(records)
}
