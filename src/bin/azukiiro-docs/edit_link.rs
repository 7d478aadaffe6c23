use crate::args;
use crate::error::*;

/// Print the "edit this page" URL for a document
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct EditLinkArgs {
    /// Document path relative to the docs root, e.g. `guides/admin-guide.md`
    path: String,

    #[command(flatten, next_help_heading = "CONFIG")]
    config: args::ConfigArgs,
}

impl EditLinkArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let config = self.config.load_config()?;
        let Some(edit_link) = config.theme_config.edit_link.as_ref() else {
            anyhow::bail!("No `editLink` configured");
        };
        if !edit_link.has_path_token() {
            log::warn!(
                "`{}` has no `{}` placeholder",
                edit_link.pattern,
                azukiiro_docs::config::PATH_TOKEN
            );
        }

        anstream::println!("{}", edit_link.url_for(&self.path));

        Ok(())
    }
}
