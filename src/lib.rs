//! Site descriptor for the Azukiiro documentation site.
//!
//! [`azukiiro()`] is the built-in descriptor; [`define_config`] accepts any
//! other literal.  Both are handed unchanged to the external renderer, usually
//! through [`export::render`].

pub mod export;
pub mod lint;
pub mod outline;

mod site;

pub use azukiiro_docs_config as config;
pub use azukiiro_docs_config::Config;
pub use site::azukiiro;

/// Accept a descriptor literal and return it untouched for the renderer.
pub fn define_config(config: Config) -> Config {
    config
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn define_config_is_identity() {
        let config = azukiiro().clone();
        assert_eq!(define_config(config.clone()), config);
    }
}
