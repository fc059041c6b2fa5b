//! Plain-text rendering of the station site
//!
//! Contains the text views used by the binary:
//! - Header with navigation and the language switcher
//! - One view per content section
//! - Loading / error blocks shared by every section
//! - Footer
//!
//! Every label goes through the [`LocaleStore`](crate::i18n::LocaleStore).

mod sections;
mod status;

pub use sections::*;
pub use status::*;
