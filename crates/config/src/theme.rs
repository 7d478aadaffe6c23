use crate::EditLink;
use crate::Footer;
use crate::NavEntry;
use crate::Sidebar;
use crate::SocialLink;

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct ThemeConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub nav: Vec<NavEntry>,
    pub sidebar: Sidebar,
    pub social_links: Vec<SocialLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_link: Option<EditLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
}
