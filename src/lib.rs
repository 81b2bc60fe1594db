//! Extract document metadata (title, description, author, Open Graph and
//! Twitter Card tags) from the head of an HTML document.
//!
//! The document is streamed through an HTML tokenizer instead of being parsed
//! into a DOM, and scanning stops at the first `<body>` tag, so only the
//! document preamble is ever looked at.
//!
//! ```
//! let html = r#"<html><head>
//!   <meta property="og:title" content="Hello">
//!   <meta name="twitter:card" content="summary">
//! </head><body></body></html>"#;
//!
//! let tags = meta_extractor::extract(html.as_bytes());
//!
//! assert_eq!(tags.title, "Hello");
//! assert_eq!(tags.og_title, "Hello");
//! assert_eq!(tags.twitter_card, "summary");
//! ```
use {
  event::{Event, Events, lossy},
  html5gum::{
    IoReader, Tokenizer,
    emitters::callback::{CallbackEmitter, CallbackEvent},
  },
  serde::{Deserialize, Serialize},
  std::{fmt, io::Read, mem, ops::ControlFlow},
  tracing::{debug, trace},
};

pub use crate::{
  error::Error,
  extraction::{Extraction, StopReason},
  extractor::Extractor,
  meta::MetaTag,
  options::{
    DEFAULT_MAX_FIELD_LENGTH, ExtractorOptions, ExtractorOptionsBuilder,
  },
  property::Property,
  tags::{Field, Tags},
  truncate::truncate,
};

mod error;
mod event;
mod extraction;
mod extractor;
mod meta;
mod options;
mod property;
mod tags;
mod truncate;

/// Extract tags from `reader` with the default options.
///
/// Never fails: malformed markup or a failing reader only yield fewer
/// populated fields.
pub fn extract<R: Read>(reader: R) -> Tags {
  Extractor::default().extract(reader)
}
