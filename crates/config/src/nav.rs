use std::fmt;

use crate::path;

const ASSET_EXTENSIONS: &[&str] = &[
    "avif", "css", "gif", "ico", "jpeg", "jpg", "js", "json", "pdf", "png", "svg", "txt", "webp",
    "xml", "zip",
];

static EXTERNAL_URL: once_cell::sync::Lazy<regex::Regex> =
    once_cell::sync::Lazy::new(|| regex::Regex::new(r"(?i)^(?:[a-z]+:|//)").unwrap());

/// Navigation target: a root-relative page path or an absolute URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Link(String);

impl Link {
    pub fn new(link: impl Into<String>) -> Self {
        Self(link.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Absolute URLs (`https://…`, `mailto:…`, `//host/…`) leave the site.
    pub fn is_external(&self) -> bool {
        EXTERNAL_URL.is_match(&self.0)
    }

    /// Markdown page this link renders from, relative to the docs root.
    ///
    /// Clean URLs are assumed: `/guides/` is `guides/index.md` and
    /// `/guides/admin-guide` is `guides/admin-guide.md`.
    pub fn source_path(&self) -> Option<String> {
        if self.is_external() {
            return None;
        }

        let link = self.0.split(['#', '?']).next().unwrap_or_default();
        let is_index = link.is_empty() || link.ends_with('/');
        let link = path::normalize_doc_path(link);
        if is_index || link.is_empty() {
            return Some(if link.is_empty() {
                "index.md".to_owned()
            } else {
                format!("{link}/index.md")
            });
        }

        let (dir, file) = link
            .rsplit_once('/')
            .map(|(d, f)| (Some(d), f))
            .unwrap_or((None, link.as_str()));
        let stem = match path::split_ext(file) {
            (stem, Some("html" | "md")) => stem,
            (_, Some(ext)) if ASSET_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) => {
                return None;
            }
            _ => file,
        };
        let source = match dir {
            Some(dir) => format!("{dir}/{stem}.md"),
            None => format!("{stem}.md"),
        };
        Some(source)
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Link {
    fn from(link: &str) -> Self {
        Self::new(link)
    }
}

impl From<String> for Link {
    fn from(link: String) -> Self {
        Self(link)
    }
}

impl AsRef<str> for Link {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// A single clickable label and target.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct NavEntry {
    pub text: String,
    pub link: Link,
}

impl NavEntry {
    pub fn new(text: impl Into<String>, link: impl Into<Link>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}
