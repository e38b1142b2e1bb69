//! HTTP User-Agent parsing.
//!
//! A User-Agent string is split into sections (`Name/Version (comment; ...)`),
//! checked for bot markers, and then classified into rendering engine,
//! browser and operating system.
//!
//! ```
//! let ua = user_agent::parse(
//!     "Mozilla/5.0 (Windows NT 6.1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/41.0.2228.0 Safari/537.36",
//! );
//! assert_eq!(ua.browser(), ("Chrome", "41.0.2228.0"));
//! assert_eq!(ua.engine(), ("AppleWebKit", "537.36"));
//! assert_eq!(ua.os(), "Windows 7");
//! ```

mod bot;
mod browser_rules;
mod db;
mod error;
mod os;
mod section;
mod substitution;
mod types;
mod user_agent;

pub use error::{Error, Result};
pub use os::{OsClassifier, OsRules};
pub use section::{tokenize, tokenize_bytes, Section};
pub use types::*;
pub use user_agent::{parse, parse_many, UserAgent};
