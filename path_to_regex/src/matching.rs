use crate::{
    compile::{Params, Value},
    parse::{parse_with_options, Key, KeyName, Modifier, ParseOptions, Token},
    Error,
};
use fancy_regex::Regex as FancyRegex;
use once_cell::sync::Lazy;
use regex::Regex;

static ESCAPE_STRING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([.+*?=^!:${}()\[\]|/\\])").unwrap()
});

/// Escapes regex metacharacters in a literal pattern fragment.
pub(crate) fn escape_string(s: &str) -> String {
    ESCAPE_STRING_RE.replace_all(s, r"\$1").to_string()
}

#[derive(Debug)]
pub struct RegexOptions {
    /// Match case-sensitively.
    pub sensitive: bool,
    /// Do not tolerate a trailing delimiter on matched paths.
    pub strict: bool,
    /// Anchor the regex at the end of the path.
    pub end: bool,
    /// Anchor the regex at the start of the path.
    pub start: bool,
    /// Delimiter class between segments (`/#?` if unset).
    pub delimiter: Option<String>,
    /// Characters that may terminate a non-end-anchored match.
    pub ends_with: Option<String>,
}

impl Default for RegexOptions {
    fn default() -> Self {
        Self {
            sensitive: false,
            strict: false,
            end: true,
            start: true,
            delimiter: None,
            ends_with: None,
        }
    }
}

/// Transforms parsed tokens into a regular expression over concrete paths,
/// returning the expression together with the keys its capture groups bind,
/// in capture order.
pub fn tokens_to_regex(
    tokens: &[Token],
    options: &RegexOptions,
) -> Result<(FancyRegex, Vec<Key>), Error> {
    let has_ends_with = options.ends_with.is_some();
    let ends_with = match &options.ends_with {
        Some(chars) => format!(r"[{chars}]|$"),
        None => "$".to_string(),
    };
    let delimiter = format!(
        r"[{}]",
        options.delimiter.clone().unwrap_or_else(|| "/#?".to_string())
    );
    let mut route = if options.start {
        "^".to_string()
    } else {
        String::new()
    };
    let mut keys: Vec<Key> = Vec::new();

    for token in tokens {
        let value = match token {
            Token::Literal(s) => s.clone(),
            Token::Key(key) => {
                if !key.pattern.is_empty() {
                    keys.push(key.clone());
                }

                let prefix = key
                    .prefix
                    .as_deref()
                    .map(escape_string)
                    .unwrap_or_default();
                let suffix = key
                    .suffix
                    .as_deref()
                    .map(escape_string)
                    .unwrap_or_default();

                if !key.pattern.is_empty() {
                    if !prefix.is_empty() || !suffix.is_empty() {
                        if key.is_repeating() {
                            let modifier =
                                if key.modifier == Some(Modifier::ZeroOrMore)
                                {
                                    "?"
                                } else {
                                    ""
                                };
                            format!(
                                "(?:{}((?:{})(?:{}{}(?:{}))*){}){}",
                                prefix,
                                key.pattern,
                                suffix,
                                prefix,
                                key.pattern,
                                suffix,
                                modifier
                            )
                        } else {
                            let modifier = key
                                .modifier
                                .map(Modifier::as_str)
                                .unwrap_or_default();
                            format!(
                                r"(?:{}({}){}){}",
                                prefix, key.pattern, suffix, modifier
                            )
                        }
                    } else {
                        let modifier = key
                            .modifier
                            .map(Modifier::as_str)
                            .unwrap_or_default();
                        format!(r"({}){}", key.pattern, modifier)
                    }
                } else {
                    let modifier = key
                        .modifier
                        .map(Modifier::as_str)
                        .unwrap_or_default();
                    format!(r"(?:{}{}){}", prefix, suffix, modifier)
                }
            }
        };
        route.push_str(&value);
    }

    if options.end {
        if !options.strict {
            route.push_str(&format!(r"{delimiter}?"));
        }
        if has_ends_with {
            route.push_str(&format!(r"(?={ends_with})"));
        } else {
            route.push('$');
        }
    } else {
        let is_end_delimited = match tokens.last() {
            Some(Token::Literal(s)) => s
                .chars()
                .last()
                .map(|c| delimiter.contains(c))
                .unwrap_or(false),
            Some(Token::Key(_)) => false,
            None => true,
        };

        if !options.strict {
            route.push_str(&format!(r"(?:{delimiter}(?={ends_with}))?"));
        }

        if !is_end_delimited {
            route.push_str(&format!(r"(?={delimiter}|{ends_with})"));
        }
    }

    let flags = if options.sensitive { "" } else { "(?i)" };
    let re = FancyRegex::new(&format!("{flags}{route}"))?;

    Ok((re, keys))
}

/// Converts a template string into a path-matching regular expression and
/// its ordered key schema, using the default options.
pub fn string_to_regex(path: &str) -> Result<(FancyRegex, Vec<Key>), Error> {
    let tokens = parse_with_options(path, &ParseOptions::default())?;
    tokens_to_regex(&tokens, &RegexOptions::default())
}

/// The outcome of testing one concrete path against a [`Matcher`].
#[derive(Debug)]
pub struct PathMatch {
    /// The matched portion of the tested path.
    pub path: String,
    /// Byte offset at which the match starts.
    pub index: usize,
    /// Captured values, keyed by parameter name.
    pub params: Params,
}

impl PathMatch {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.params.get(&KeyName::from(key))
    }
}

/// Tests concrete paths against a compiled template, extracting keyed
/// parameter values from the capture groups.
#[derive(Debug)]
pub struct Matcher {
    keys: Vec<Key>,
    re: FancyRegex,
}

impl Matcher {
    pub fn new(
        tokens: &[Token],
        options: &RegexOptions,
    ) -> Result<Self, Error> {
        let (re, keys) = tokens_to_regex(tokens, options)?;
        Ok(Self { keys, re })
    }

    /// The keys bound by this matcher's capture groups, in capture order.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn matches(&self, path: &str) -> Option<PathMatch> {
        let caps = self.re.captures(path).ok()??;
        let m = caps.get(0)?;
        let path = m.as_str().to_string();
        let index = m.start();
        let mut params = Params::new();
        for (i, key) in self.keys.iter().enumerate() {
            if let Some(m) = caps.get(i + 1) {
                params.insert(
                    key.name.clone(),
                    Value::from_capture(m.as_str(), key),
                );
            }
        }

        Some(PathMatch {
            path,
            index,
            params,
        })
    }
}
