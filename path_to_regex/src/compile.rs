use crate::{
    parse::{Key, KeyName, Token},
    Error,
};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use std::collections::HashMap;

/// The set of characters JavaScript's `encodeURIComponent` escapes: every
/// non-alphanumeric ASCII byte except `- _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub(crate) fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

/// A value supplied for one parameter key. `List` is only legal for
/// repeating (`*`/`+`) keys; each element becomes its own path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Single(String),
    List(Vec<String>),
}

impl Value {
    /// Reconstructs a value from a raw regex capture: repeated captures are
    /// split back into segments on the key's separator.
    pub(crate) fn from_capture(s: &str, key: &Key) -> Value {
        if key.is_repeating() {
            let separator = key.separator();
            if separator.is_empty() {
                return Value::Single(s.to_string());
            }
            return Value::List(
                s.split(&separator).map(String::from).collect(),
            );
        }
        Value::Single(s.to_string())
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Single(String::new())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Single(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Single(s)
    }
}

impl<S> From<Vec<S>> for Value
where
    S: Into<String>,
{
    fn from(list: Vec<S>) -> Self {
        Self::List(list.into_iter().map(Into::into).collect())
    }
}

/// Concrete values for the keys of a parsed template.
pub type Params = HashMap<KeyName, Value>;

#[derive(Debug)]
pub struct CompileOptions {
    /// Match key patterns case-sensitively.
    pub sensitive: bool,
    /// Check each substituted value against its key's pattern.
    pub validate: bool,
    /// Percent-encode each substituted value as a URI component.
    pub encode: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            sensitive: false,
            validate: true,
            encode: true,
        }
    }
}

/// Fills a parsed template with concrete parameter values, producing a
/// literal path. Values are encoded first and validated second, so a value
/// only has to match its key's pattern after percent-encoding.
pub struct Compiler {
    matches: Vec<Option<Regex>>,
    tokens: Vec<Token>,
    validate: bool,
    encode: bool,
}

impl Compiler {
    pub fn new(
        tokens: &[Token],
        options: &CompileOptions,
    ) -> Result<Self, Error> {
        let flags = if options.sensitive { "" } else { "(?i)" };

        let mut matches = Vec::with_capacity(tokens.len());
        for token in tokens {
            matches.push(match token {
                Token::Key(k) => {
                    Some(Regex::new(&format!("{flags}^(?:{})$", k.pattern))?)
                }
                Token::Literal(_) => None,
            });
        }

        Ok(Self {
            matches,
            tokens: tokens.to_vec(),
            validate: options.validate,
            encode: options.encode,
        })
    }

    fn encoded(&self, s: &str) -> String {
        if self.encode {
            encode_component(s)
        } else {
            s.to_string()
        }
    }

    fn check_value(
        &self,
        index: usize,
        key: &Key,
        value: &str,
    ) -> Result<(), Error> {
        if !self.validate {
            return Ok(());
        }
        if let Some(re) = &self.matches[index] {
            if !re.is_match(value) {
                return Err(Error::ValueMismatch {
                    name: key.name.clone(),
                    pattern: key.pattern.clone(),
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn to_path(&self, params: &Params) -> Result<String, Error> {
        let mut path = String::new();

        for (i, token) in self.tokens.iter().enumerate() {
            let key = match token {
                Token::Literal(s) => {
                    path.push_str(s);
                    continue;
                }
                Token::Key(k) => k,
            };
            let prefix = key.prefix.as_deref().unwrap_or_default();
            let suffix = key.suffix.as_deref().unwrap_or_default();

            match params.get(&key.name) {
                Some(Value::List(list)) => {
                    if !key.is_repeating() {
                        return Err(Error::UnexpectedList(key.name.clone()));
                    }
                    if list.is_empty() {
                        if !key.is_optional() {
                            return Err(Error::EmptyList(key.name.clone()));
                        }
                        continue;
                    }
                    for segment in list {
                        let segment = self.encoded(segment);
                        self.check_value(i, key, &segment)?;
                        path.push_str(prefix);
                        path.push_str(&segment);
                        path.push_str(suffix);
                    }
                }
                Some(Value::Single(value)) => {
                    let value = self.encoded(value);
                    self.check_value(i, key, &value)?;
                    path.push_str(prefix);
                    path.push_str(&value);
                    path.push_str(suffix);
                }
                None => {
                    if !key.is_optional() {
                        return Err(if key.is_repeating() {
                            Error::ExpectedList(key.name.clone())
                        } else {
                            Error::ExpectedString(key.name.clone())
                        });
                    }
                }
            }
        }

        Ok(path)
    }
}
