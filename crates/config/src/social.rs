use crate::Link;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct SocialLink {
    pub icon: SocialIcon,
    pub link: Link,
}

impl SocialLink {
    pub fn new(icon: SocialIcon, link: impl Into<Link>) -> Self {
        Self {
            icon,
            link: link.into(),
        }
    }
}

/// Icon glyph a renderer draws for a [`SocialLink`].
///
/// Identifiers outside the known set are kept verbatim in [`SocialIcon::Other`]
/// so the renderer decides how to draw them.
#[derive(Debug, Clone, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub enum SocialIcon {
    Discord,
    Facebook,
    Github,
    Instagram,
    Linkedin,
    Mastodon,
    Npm,
    Slack,
    Twitter,
    X,
    Youtube,
    #[serde(untagged)]
    Other(String),
}

impl SocialIcon {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Discord => "discord",
            Self::Facebook => "facebook",
            Self::Github => "github",
            Self::Instagram => "instagram",
            Self::Linkedin => "linkedin",
            Self::Mastodon => "mastodon",
            Self::Npm => "npm",
            Self::Slack => "slack",
            Self::Twitter => "twitter",
            Self::X => "x",
            Self::Youtube => "youtube",
            Self::Other(icon) => icon.as_str(),
        }
    }
}
