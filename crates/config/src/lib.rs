//! Typed site settings for a Pelican-style static-site generator.
//!
//! Settings live in a YAML document (`pelicanconf.yml`) whose top-level keys
//! are the generator's setting names (`AUTHOR`, `MENUITEMS`, ...).  Loading
//! produces an immutable [`SiteConfiguration`] that can be shared by reference
//! with every consumer.

mod address;
mod config;
mod error;
mod feed;
mod link;
mod locale;
mod markup;
mod pagination;
mod plugin;

pub mod keys;
pub mod path;

pub use self::address::*;
pub use self::config::*;
pub use self::error::*;
pub use self::feed::*;
pub use self::link::*;
pub use self::locale::*;
pub use self::markup::*;
pub use self::pagination::*;
pub use self::path::{IgnoreFiles, Theme};
pub use self::plugin::*;

type Result<T, E = Error> = std::result::Result<T, E>;
