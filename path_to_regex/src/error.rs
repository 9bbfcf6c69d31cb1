use crate::parse::KeyName;
use thiserror::Error;

/// Errors arising while lexing or parsing a path template, or while filling
/// one with concrete parameter values.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unexpected end of pattern at {0}")]
    UnexpectedEnd(usize),
    #[error("missing parameter name at {0}")]
    MissingParamName(usize),
    #[error("pattern cannot start with \"?\" at {0}")]
    PatternStartsWithModifier(usize),
    #[error("capturing groups are not allowed at {0}")]
    CapturingGroup(usize),
    #[error("unbalanced pattern at {0}")]
    UnbalancedPattern(usize),
    #[error("missing pattern at {0}")]
    MissingPattern(usize),
    #[error("unexpected token at {0}")]
    UnexpectedToken(usize),
    #[error("expected a string value for parameter `{0}`")]
    ExpectedString(KeyName),
    #[error("expected a list of segments for parameter `{0}`")]
    ExpectedList(KeyName),
    #[error("parameter `{0}` does not repeat, but a list was provided")]
    UnexpectedList(KeyName),
    #[error("expected the list for parameter `{0}` to not be empty")]
    EmptyList(KeyName),
    #[error("expected `{value}` for parameter `{name}` to match `{pattern}`")]
    ValueMismatch {
        name: KeyName,
        pattern: String,
        value: String,
    },
    #[error(transparent)]
    Regex(#[from] regex::Error),
    #[error(transparent)]
    FancyRegex(#[from] fancy_regex::Error),
}
