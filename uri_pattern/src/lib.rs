#![forbid(unsafe_code)]

//! URI route patterns: `/issues/:id?`-style templates with required and
//! optional parameters, inline `{pattern}` captures, and `*` wildcards.
//!
//! Patterns are rewritten into the canonical group syntax of the
//! [`path_to_regex`] compiler ([`transform_uri_path`]), their parameters
//! are extracted as ordered descriptors ([`parse_regexp_path_params`]), and
//! a pattern plus concrete values resolves back into a literal, encoded
//! path ([`regexp_path_to_path`]). Concrete paths can be matched against a
//! pattern with [`match_uri_path`].

mod error;
mod matched;
mod params;
mod resolve;
mod transform;

pub use error::PatternError;
pub use matched::*;
pub use params::*;
pub use resolve::*;
pub use transform::*;

pub use path_to_regex::{PathMatch, Value};
