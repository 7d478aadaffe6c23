#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Footer {
    pub message: String,
    pub copyright: String,
}

impl Footer {
    pub fn new(message: impl Into<String>, copyright: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            copyright: copyright.into(),
        }
    }
}
