//! Feed module - RSS 2.0 document assembly.

mod rss;

pub use rss::{cdata, escape_xml, FeedChannel, FeedItem, RssDocument};
