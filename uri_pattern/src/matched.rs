use crate::{error::PatternError, transform::transform_uri_path};
use path_to_regex::{Matcher, PathMatch, RegexOptions};

/// Tests a concrete path against a URI pattern (raw or canonical),
/// returning the extracted parameter values on a match.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all)
)]
pub fn match_uri_path(
    pattern: &str,
    path: &str,
) -> Result<Option<PathMatch>, PatternError> {
    let canonical = transform_uri_path(pattern);
    let tokens = path_to_regex::parse(&canonical)?;
    let matcher = Matcher::new(&tokens, &RegexOptions::default())?;
    Ok(matcher.matches(path))
}
