//! Convenient re-exports for glob imports.
//!
//! This module provides a single import for all common types:
//!
//! ```rust
//! use urlkit::prelude::*;
//!
//! let url = Url::parse("http://example.com/a?x=1").unwrap();
//! assert_eq!(url.to_string_with(Components::HOST), "example.com");
//! ```

pub use crate::{
    // Core types
    Components, Url,
    // Codec
    percent_decode, percent_encode,
    // Errors
    DecodeError, ParseError, ParseErrorKind,
};
