//! Plain-text view of the navigation bar and sidebar in render order.

use std::fmt;

use azukiiro_docs_config::Config;
use azukiiro_docs_config::NavEntry;
use azukiiro_docs_config::SidebarGroup;

pub struct Outline<'c> {
    config: &'c Config,
}

impl<'c> Outline<'c> {
    pub fn new(config: &'c Config) -> Self {
        Self { config }
    }
}

impl fmt::Display for Outline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let theme = &self.config.theme_config;
        writeln!(f, "nav:")?;
        for entry in &theme.nav {
            write_entry(f, "  ", entry)?;
        }
        writeln!(f, "sidebar:")?;
        for group in &theme.sidebar {
            write_group(f, group)?;
        }
        Ok(())
    }
}

fn write_group(f: &mut fmt::Formatter<'_>, group: &SidebarGroup) -> fmt::Result {
    write!(f, "  ▸ {}", group.text)?;
    if let Some(link) = &group.link {
        write!(f, " -> {link}")?;
    }
    if group.collapsed == Some(true) {
        write!(f, " [collapsed]")?;
    }
    writeln!(f)?;
    for item in &group.items {
        write_entry(f, "    ", item)?;
    }
    Ok(())
}

fn write_entry(f: &mut fmt::Formatter<'_>, indent: &str, entry: &NavEntry) -> fmt::Result {
    writeln!(f, "{indent}- {} -> {}", entry.text, entry.link)
}

#[cfg(test)]
mod test {
    use super::*;

    use azukiiro_docs_config::Sidebar;

    #[test]
    fn outline_builtin() {
        let actual = Outline::new(crate::azukiiro()).to_string();
        let expected = "\
nav:
  - 首页 -> /
  - 指南 -> /guides/
  - 适配器 -> /adapters/
sidebar:
  ▸ 开始使用 -> /guides/
    - 运维指南 -> /guides/admin-guide
    - 开发指南 -> /guides/dev-guide
  ▸ 适配器文档 -> /adapters/
    - Dummy -> /adapters/dummy
    - UOJ -> /adapters/uoj
    - Glue -> /adapters/glue
    - VJudge -> /adapters/vjudge
";
        assert_eq!(actual, expected);
    }

    #[test]
    fn new_group_only_appends() {
        let before = Outline::new(crate::azukiiro()).to_string();

        let mut config = crate::azukiiro().clone();
        config.theme_config.sidebar.push_group(
            SidebarGroup::new("部署")
                .with_collapsed(true)
                .with_item("Docker", "/deploy/docker"),
        );
        let after = Outline::new(&config).to_string();

        let appended = after.strip_prefix(before.as_str()).unwrap();
        assert_eq!(appended, "  ▸ 部署 [collapsed]\n    - Docker -> /deploy/docker\n");
    }

    #[test]
    fn empty_menus() {
        let mut config = Config::new("Azukiiro", "docs");
        config.theme_config.sidebar = Sidebar::new();
        assert_eq!(Outline::new(&config).to_string(), "nav:\nsidebar:\n");
    }
}
