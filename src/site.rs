use azukiiro_docs_config::Config;
use azukiiro_docs_config::EditLink;
use azukiiro_docs_config::Footer;
use azukiiro_docs_config::NavEntry;
use azukiiro_docs_config::Sidebar;
use azukiiro_docs_config::SidebarGroup;
use azukiiro_docs_config::SocialIcon;
use azukiiro_docs_config::SocialLink;
use azukiiro_docs_config::ThemeConfig;

const REPOSITORY: &str = "https://github.com/fedstackjs/azukiiro";

static AZUKIIRO: once_cell::sync::Lazy<Config> = once_cell::sync::Lazy::new(build);

/// The Azukiiro documentation descriptor, built on first use.
pub fn azukiiro() -> &'static Config {
    &AZUKIIRO
}

fn build() -> Config {
    let mut theme = ThemeConfig::default();
    theme.logo = Some("/logo.svg".to_owned());
    theme.nav = vec![
        NavEntry::new("首页", "/"),
        NavEntry::new("指南", "/guides/"),
        NavEntry::new("适配器", "/adapters/"),
    ];
    theme.sidebar = sidebar();
    theme.social_links = vec![SocialLink::new(SocialIcon::Github, REPOSITORY)];
    theme.edit_link = Some(EditLink::new(
        format!("{REPOSITORY}/edit/main/docs/:path"),
        "在 GitHub 上编辑此页",
    ));
    theme.footer = Some(Footer::new(
        "Released under the AGPL-3.0 License.",
        "Copyright © 2023-present FedStack",
    ));

    Config::new("Azukiiro", "AOI 评测客户端文档")
        .with_lang("zh-CN")
        .with_theme(theme)
}

fn sidebar() -> Sidebar {
    Sidebar::new()
        .with_group(
            SidebarGroup::new("开始使用")
                .with_link("/guides/")
                .with_item("运维指南", "/guides/admin-guide")
                .with_item("开发指南", "/guides/dev-guide"),
        )
        .with_group(
            SidebarGroup::new("适配器文档")
                .with_link("/adapters/")
                .with_item("Dummy", "/adapters/dummy")
                .with_item("UOJ", "/adapters/uoj")
                .with_item("Glue", "/adapters/glue")
                .with_item("VJudge", "/adapters/vjudge"),
        )
}
