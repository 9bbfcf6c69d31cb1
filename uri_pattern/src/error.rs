use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    /// A required parameter has no value in the supplied mapping.
    #[error("missing required parameter `{0}`")]
    MissingRequiredParam(String),
    /// An optional parameter was given a value while an earlier optional
    /// parameter was left unfilled. Carries the name of the unfilled
    /// parameter, since that gap is what makes the later value unreachable.
    #[error("missing optional parameter `{0}`")]
    MissingOptionalParam(String),
    #[error(transparent)]
    Template(#[from] path_to_regex::Error),
}
