//! Typed descriptor for a static documentation site.
//!
//! The descriptor is plain data: site metadata plus a [`ThemeConfig`] holding
//! the navigation bar, the two-level sidebar, social links, the edit-link
//! template and the footer.  It is loaded once and handed, read-only, to an
//! external renderer.

mod config;
mod edit_link;
mod footer;
mod nav;
mod sidebar;
mod social;
mod theme;

pub mod path;

pub use self::config::*;
pub use self::edit_link::*;
pub use self::footer::*;
pub use self::nav::*;
pub use self::sidebar::*;
pub use self::social::*;
pub use self::theme::*;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
