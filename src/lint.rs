//! Authoring checks for a descriptor.
//!
//! Nothing here rejects a descriptor; the caller decides what to do with the
//! issues found.

use std::collections::HashSet;
use std::fmt;

use azukiiro_docs_config::Config;
use azukiiro_docs_config::NavEntry;
use azukiiro_docs_config::PATH_TOKEN;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Issue {
    pub location: String,
    pub message: String,
}

impl Issue {
    fn new(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

pub fn check(config: &Config) -> Vec<Issue> {
    let mut issues = Vec::new();

    if config.title.trim().is_empty() {
        issues.push(Issue::new("title", "is empty"));
    }
    if config.description.trim().is_empty() {
        issues.push(Issue::new("description", "is empty"));
    }

    let theme = &config.theme_config;
    for (i, entry) in theme.nav.iter().enumerate() {
        check_entry(&mut issues, &format!("themeConfig.nav[{i}]"), entry);
    }

    let mut headings = HashSet::new();
    for (g, group) in theme.sidebar.iter().enumerate() {
        let location = format!("themeConfig.sidebar[{g}]");
        if group.text.trim().is_empty() {
            issues.push(Issue::new(location.as_str(), "heading is empty"));
        } else if !headings.insert(group.text.as_str()) {
            issues.push(Issue::new(
                location.as_str(),
                format!("duplicate heading `{}`", group.text),
            ));
        }
        for (i, item) in group.items.iter().enumerate() {
            let item_location = format!("{location}.items[{i}]");
            check_entry(&mut issues, &item_location, item);
            if group.link.as_ref() == Some(&item.link) {
                issues.push(Issue::new(
                    item_location,
                    format!("links to the group index `{}`", item.link),
                ));
            }
        }
    }

    for (i, social) in theme.social_links.iter().enumerate() {
        if !social.link.is_external() {
            issues.push(Issue::new(
                format!("themeConfig.socialLinks[{i}]"),
                format!("`{}` is not an absolute URL", social.link),
            ));
        }
    }

    if let Some(edit_link) = &theme.edit_link {
        if !edit_link.has_path_token() {
            issues.push(Issue::new(
                "themeConfig.editLink.pattern",
                format!("missing `{PATH_TOKEN}` placeholder"),
            ));
        }
    }

    issues
}

fn check_entry(issues: &mut Vec<Issue>, location: &str, entry: &NavEntry) {
    if entry.text.trim().is_empty() {
        issues.push(Issue::new(location, "text is empty"));
    }
    if entry.link.is_empty() {
        issues.push(Issue::new(location, "link is empty"));
    }
}
