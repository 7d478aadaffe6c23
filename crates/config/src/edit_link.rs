/// Placeholder replaced with the current document's relative path.
pub const PATH_TOKEN: &str = ":path";

/// "Edit this page" link shown on every document.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct EditLink {
    pub pattern: String,
    pub text: String,
}

impl EditLink {
    pub fn new(pattern: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            text: text.into(),
        }
    }

    pub fn has_path_token(&self) -> bool {
        self.pattern.contains(PATH_TOKEN)
    }

    /// Substitute `doc_path` (e.g. `guides/admin-guide.md`) into the pattern.
    pub fn url_for(&self, doc_path: &str) -> String {
        let doc_path = crate::path::normalize_doc_path(doc_path);
        self.pattern.replace(PATH_TOKEN, &doc_path)
    }
}
