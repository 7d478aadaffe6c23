use crate::Link;
use crate::NavEntry;

/// A collapsible sidebar section: a heading, an optional index page, and its
/// entries in render order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct SidebarGroup {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    pub items: Vec<NavEntry>,
}

impl SidebarGroup {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_link(mut self, link: impl Into<Link>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = Some(collapsed);
        self
    }

    pub fn with_item(mut self, text: impl Into<String>, link: impl Into<Link>) -> Self {
        self.push_item(NavEntry::new(text, link));
        self
    }

    pub fn push_item(&mut self, item: NavEntry) {
        self.items.push(item);
    }

    /// Stable key for the heading, e.g. for remembering collapse state.
    pub fn id(&self) -> String {
        crate::path::slugify(&self.text)
    }

    /// The group's index link followed by its item links.
    pub fn links(&self) -> impl Iterator<Item = &Link> + '_ {
        self.link
            .iter()
            .chain(self.items.iter().map(|item| &item.link))
    }
}

/// Ordered sidebar groups; nesting is fixed at group → item.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Sidebar(Vec<SidebarGroup>);

impl Sidebar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group(mut self, group: SidebarGroup) -> Self {
        self.push_group(group);
        self
    }

    pub fn push_group(&mut self, group: SidebarGroup) {
        self.0.push(group);
    }

    /// First group with the given heading.
    pub fn group(&self, text: &str) -> Option<&SidebarGroup> {
        self.0.iter().find(|g| g.text == text)
    }

    pub fn group_mut(&mut self, text: &str) -> Option<&mut SidebarGroup> {
        self.0.iter_mut().find(|g| g.text == text)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SidebarGroup> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every link in render order, top to bottom.
    pub fn links(&self) -> impl Iterator<Item = &Link> + '_ {
        self.0.iter().flat_map(|g| g.links())
    }
}

impl From<Vec<SidebarGroup>> for Sidebar {
    fn from(groups: Vec<SidebarGroup>) -> Self {
        Self(groups)
    }
}

impl FromIterator<SidebarGroup> for Sidebar {
    fn from_iter<I: IntoIterator<Item = SidebarGroup>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'s> IntoIterator for &'s Sidebar {
    type Item = &'s SidebarGroup;
    type IntoIter = std::slice::Iter<'s, SidebarGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn guides() -> SidebarGroup {
        SidebarGroup::new("开始使用")
            .with_link("/guides/")
            .with_item("运维指南", "/guides/admin-guide")
            .with_item("开发指南", "/guides/dev-guide")
    }

    fn adapters() -> SidebarGroup {
        SidebarGroup::new("适配器文档")
            .with_link("/adapters/")
            .with_item("Dummy", "/adapters/dummy")
            .with_item("UOJ", "/adapters/uoj")
    }

    #[test]
    fn links_in_declaration_order() {
        let sidebar = Sidebar::new().with_group(guides()).with_group(adapters());
        let links: Vec<_> = sidebar.links().map(Link::as_str).collect();
        assert_eq!(
            links,
            [
                "/guides/",
                "/guides/admin-guide",
                "/guides/dev-guide",
                "/adapters/",
                "/adapters/dummy",
                "/adapters/uoj",
            ]
        );
    }

    #[test]
    fn group_without_index_link() {
        let group = SidebarGroup::new("教程").with_item("运维指南", "/guides/admin-guide");
        let links: Vec<_> = group.links().map(Link::as_str).collect();
        assert_eq!(links, ["/guides/admin-guide"]);
    }

    #[test]
    fn adding_group_leaves_others_untouched() {
        let before = Sidebar::new().with_group(guides()).with_group(adapters());
        let mut after = before.clone();
        after.push_group(SidebarGroup::new("部署").with_item("Docker", "/deploy/docker"));

        assert_eq!(after.len(), before.len() + 1);
        for (old, new) in before.iter().zip(after.iter()) {
            assert_eq!(old, new);
        }
    }

    #[test]
    fn adding_item_leaves_other_groups_untouched() {
        let before = Sidebar::new().with_group(guides()).with_group(adapters());
        let mut after = before.clone();
        after
            .group_mut("适配器文档")
            .unwrap()
            .push_item(NavEntry::new("Glue", "/adapters/glue"));

        assert_eq!(after.group("开始使用"), before.group("开始使用"));
        let items = &after.group("适配器文档").unwrap().items;
        assert_eq!(items.last().unwrap().link.as_str(), "/adapters/glue");
        assert_eq!(items[..2], before.group("适配器文档").unwrap().items[..]);
    }

    #[test]
    fn missing_items_default_to_empty() {
        let group: SidebarGroup = serde_yaml::from_str("text: 开始使用\nlink: /guides/\n").unwrap();
        assert!(group.items.is_empty());
        assert_eq!(group.link, Some(Link::from("/guides/")));
        assert_eq!(group.collapsed, None);
    }

    #[test]
    fn serialize_skips_absent_link() {
        let group = SidebarGroup::new("教程").with_item("运维指南", "/guides/admin-guide");
        let yaml = serde_yaml::to_string(&group).unwrap();
        assert!(!yaml.contains("link: null"));
        assert!(!yaml.contains("collapsed"));
    }

    #[test]
    fn group_id() {
        assert_eq!(guides().id(), "kai-shi-shi-yong");
    }
}
