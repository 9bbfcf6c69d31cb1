use crate::{
    error::PatternError,
    params::{parse_regexp_path_params, ResolveParams},
    transform::{transform_uri_path, CATCH_ALL_KEY, CATCH_ALL_PARAM},
};
use path_to_regex::{CompileOptions, Compiler, KeyName, Params};

/// Resolves a pattern and a set of parameter values into a literal path.
///
/// Values are checked against the pattern's parameters before anything is
/// substituted:
///
/// - every required, non-wildcard parameter must have a value;
/// - once an optional parameter is left unfilled, no optional parameter
///   after it may be filled — omitting a segment removes its separator, so
///   there is no way to express the gap in the resolved path.
///
/// The wildcard's value is supplied under the [`CATCH_ALL_KEY`] key and may
/// be a single opaque value (percent-encoded as one segment) or a list of
/// segments. Substitution and encoding are delegated to the path-template
/// compiler.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all)
)]
pub fn regexp_path_to_path(
    path: &str,
    params: &ResolveParams,
) -> Result<String, PatternError> {
    let canonical = transform_uri_path(path);
    let descriptors = parse_regexp_path_params(&canonical)?;

    let mut skipped: Option<String> = None;
    for descriptor in &descriptors {
        let key = if descriptor.name == CATCH_ALL_PARAM {
            CATCH_ALL_KEY
        } else {
            descriptor.name.as_str()
        };

        if params.contains_key(key) {
            if descriptor.optional {
                if let Some(gap) = &skipped {
                    return Err(PatternError::MissingOptionalParam(
                        gap.clone(),
                    ));
                }
            }
        } else {
            if !descriptor.optional && !descriptor.is_catch_all {
                return Err(PatternError::MissingRequiredParam(
                    descriptor.name.clone(),
                ));
            }
            if descriptor.optional
                && descriptor.name != CATCH_ALL_PARAM
                && skipped.is_none()
            {
                skipped = Some(descriptor.name.clone());
            }
        }
    }

    let tokens = path_to_regex::parse(&canonical)?;
    let compiler = Compiler::new(&tokens, &CompileOptions::default())?;

    let mut values = Params::new();
    for (name, value) in params.iter() {
        let name = if name == CATCH_ALL_KEY {
            CATCH_ALL_PARAM
        } else {
            name
        };
        values.insert(KeyName::Named(name.to_string()), value.clone());
    }

    Ok(compiler.to_path(&values)?)
}
