use std::cmp::Ordering;

/// A single playable entry on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clip {
    /// Stable identifier (manifest file name or backend document id)
    pub id: String,

    /// Display title, user-editable when a backend is attached
    pub title: String,

    /// Resolvable playable location
    pub url: String,

    /// Source file name, when the clip came from a file listing
    pub file: Option<String>,

    /// Size in bytes (None when the source cannot tell)
    pub size_bytes: Option<u64>,
}

impl Clip {
    /// Create a clip whose title is derived from its file name
    pub fn from_file(file: &str, url: String, size_bytes: Option<u64>) -> Self {
        Self {
            id: file.to_string(),
            title: humanize(file),
            url,
            file: Some(file.to_string()),
            size_bytes,
        }
    }

    /// Whether the title contains an already-normalized (lowercase) search term
    pub fn matches(&self, normalized_term: &str) -> bool {
        self.title.to_lowercase().contains(normalized_term)
    }

    /// Meta line shown under the title: `<size> • <file or id>`
    pub fn meta_line(&self) -> String {
        let label = self.file.as_deref().unwrap_or(&self.id);
        format!("{} • {}", format_bytes(self.size_bytes), label)
    }
}

/// Order names case-insensitively, with exact byte order as tiebreak
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Turn a file name into a display title
///
/// Strips the extension, replaces runs of `-`/`_` with a space and
/// capitalizes the first letter of every word.
pub fn humanize(file_name: &str) -> String {
    let stem = match file_name.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < file_name.len() && !file_name[idx + 1..].contains('/') => {
            &file_name[..idx]
        }
        _ => file_name,
    };

    let mut out = String::with_capacity(stem.len());
    let mut in_separator = false;
    for c in stem.chars() {
        if c == '-' || c == '_' {
            if !in_separator {
                out.push(' ');
            }
            in_separator = true;
        } else {
            out.push(c);
            in_separator = false;
        }
    }

    capitalize_words(&out)
}

// Word boundaries follow ASCII word characters, so "rock'n'roll" becomes "Rock'N'Roll".
fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_word = false;
    for c in text.chars() {
        let is_word = c.is_ascii_alphanumeric() || c == '_';
        if is_word && !prev_is_word {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = is_word;
    }
    out
}

/// Human-readable byte size, `Local file` when unknown
pub fn format_bytes(bytes: Option<u64>) -> String {
    let Some(bytes) = bytes else {
        return "Local file".to_string();
    };

    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit = 0;

    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if size >= 10.0 || size.fract() == 0.0 {
        format!("{:.0} {}", size, UNITS[unit])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}
