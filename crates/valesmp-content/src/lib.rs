//! Static site content for the `ValeSMP` website.
//!
//! Everything in this crate is compiled in: the guide entries, the guide
//! navigation, the quick command reference, the legal pages, and the
//! world map catalog.
//! There is no content database and no admin surface; editing content
//! means editing this crate and redeploying.
//!
//! [`markdown`] is the small line-based renderer the guide entries are
//! written against. It is not a markdown implementation, only the subset
//! the entries actually use.

pub mod guide;
pub mod legal;
pub mod maps;
pub mod markdown;

pub use guide::{GuideEntry, GuideItem, GuideSection, QuickCommand};
pub use legal::LegalDoc;
pub use maps::WorldMap;
