use crate::{
    lexer::{lex, LexToken, TokenKind},
    Error,
};
use std::{fmt, iter::Peekable, vec};

/// The name of a parameter key: either a `:name` from the template, or a
/// positional index assigned to an unnamed `(regex)` group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyName {
    Named(String),
    Index(usize),
}

impl fmt::Display for KeyName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Named(s) => write!(f, "{s}"),
            Self::Index(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for KeyName {
    fn from(s: &str) -> Self {
        Self::Named(s.to_string())
    }
}

/// A repetition modifier trailing a parameter or group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    /// `?`: zero or one.
    Optional,
    /// `*`: zero or more.
    ZeroOrMore,
    /// `+`: one or more.
    OneOrMore,
}

impl Modifier {
    fn from_lexeme(s: &str) -> Option<Self> {
        match s {
            "?" => Some(Self::Optional),
            "*" => Some(Self::ZeroOrMore),
            "+" => Some(Self::OneOrMore),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Optional => "?",
            Self::ZeroOrMore => "*",
            Self::OneOrMore => "+",
        }
    }
}

/// The schema of one parameter key: its name, the regex fragment its values
/// must match, its positional prefix/suffix, and its modifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    pub name: KeyName,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub pattern: String,
    pub modifier: Option<Modifier>,
}

impl Key {
    /// Whether the key may be left out when filling the template.
    pub fn is_optional(&self) -> bool {
        matches!(
            self.modifier,
            Some(Modifier::Optional | Modifier::ZeroOrMore)
        )
    }

    /// Whether the key captures a repeated sequence of segments.
    pub fn is_repeating(&self) -> bool {
        matches!(
            self.modifier,
            Some(Modifier::ZeroOrMore | Modifier::OneOrMore)
        )
    }

    /// The separator a repeated capture is joined (and re-split) on.
    pub fn separator(&self) -> String {
        let mut sep = self.prefix.clone().unwrap_or_default();
        sep.push_str(self.suffix.as_deref().unwrap_or_default());
        sep
    }
}

/// One piece of a parsed template: literal text, or a parameter key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Literal(String),
    Key(Key),
}

#[derive(Debug, Default)]
pub struct ParseOptions {
    /// The default delimiter class for parameter values (`/#?` if unset).
    pub delimiter: Option<String>,
    /// Characters that act as a parameter's implicit prefix (`./` if unset).
    pub prefixes: Option<String>,
}

fn try_consume(
    kind: TokenKind,
    it: &mut Peekable<vec::IntoIter<LexToken>>,
) -> Option<String> {
    if it.peek().map(|t| t.kind) == Some(kind) {
        return it.next().map(|t| t.value);
    }
    None
}

fn must_consume(
    kind: TokenKind,
    it: &mut Peekable<vec::IntoIter<LexToken>>,
) -> Result<String, Error> {
    if let Some(value) = try_consume(kind, it) {
        return Ok(value);
    }
    Err(match it.next() {
        Some(token) => Error::UnexpectedToken(token.index),
        None => Error::UnexpectedEnd(0),
    })
}

fn consume_text(
    it: &mut Peekable<vec::IntoIter<LexToken>>,
) -> Option<String> {
    let mut result = String::new();
    loop {
        let value = try_consume(TokenKind::Char, it)
            .or_else(|| try_consume(TokenKind::EscapedChar, it));
        match value {
            Some(value) => result.push_str(&value),
            None => break,
        }
    }
    if result.is_empty() {
        None
    } else {
        Some(result)
    }
}

fn consume_modifier(
    it: &mut Peekable<vec::IntoIter<LexToken>>,
) -> Option<Modifier> {
    try_consume(TokenKind::Modifier, it)
        .and_then(|m| Modifier::from_lexeme(&m))
}

/// Parses a template string into literal and key tokens, using the default
/// options.
pub fn parse(s: &str) -> Result<Vec<Token>, Error> {
    parse_with_options(s, &ParseOptions::default())
}

/// Parses a template string into literal and key tokens.
pub fn parse_with_options(
    s: &str,
    options: &ParseOptions,
) -> Result<Vec<Token>, Error> {
    let mut tokens = lex(s)?.into_iter().peekable();
    let prefixes = options.prefixes.as_deref().unwrap_or("./");
    let default_pattern = match &options.delimiter {
        Some(delimiter) => {
            format!("[^{}]+?", crate::matching::escape_string(delimiter))
        }
        None => "[^/#?]+?".to_string(),
    };
    let mut result = Vec::new();
    let mut key = 0_usize;
    let mut path = String::new();

    loop {
        let char = try_consume(TokenKind::Char, &mut tokens);
        let name = try_consume(TokenKind::Name, &mut tokens);
        let pattern = try_consume(TokenKind::Pattern, &mut tokens);

        if name.is_some() || pattern.is_some() {
            let mut prefix = char.unwrap_or_default();
            if !prefixes.contains(&prefix) {
                path.push_str(&prefix);
                prefix = String::new();
            }

            if !path.is_empty() {
                result.push(Token::Literal(std::mem::take(&mut path)));
            }

            let name = name.map_or_else(
                || {
                    let default = KeyName::Index(key);
                    key += 1;
                    default
                },
                KeyName::Named,
            );
            result.push(Token::Key(Key {
                name,
                prefix: (!prefix.is_empty()).then_some(prefix),
                suffix: None,
                pattern: pattern.unwrap_or_else(|| default_pattern.clone()),
                modifier: consume_modifier(&mut tokens),
            }));
            continue;
        }

        if let Some(value) = char {
            path.push_str(&value);
            continue;
        } else if let Some(value) =
            try_consume(TokenKind::EscapedChar, &mut tokens)
        {
            path.push_str(&value);
            continue;
        }

        if !path.is_empty() {
            result.push(Token::Literal(std::mem::take(&mut path)));
        }

        if try_consume(TokenKind::Open, &mut tokens).is_some() {
            let prefix = consume_text(&mut tokens);
            let maybe_name = try_consume(TokenKind::Name, &mut tokens);
            let maybe_pattern = try_consume(TokenKind::Pattern, &mut tokens);
            let suffix = consume_text(&mut tokens);

            must_consume(TokenKind::Close, &mut tokens)?;

            let name = match (&maybe_name, &maybe_pattern) {
                (Some(name), _) => KeyName::Named(name.clone()),
                (None, Some(_)) => {
                    let default = KeyName::Index(key);
                    key += 1;
                    default
                }
                (None, None) => KeyName::Named(String::new()),
            };
            let pattern = if maybe_name.is_some() && maybe_pattern.is_none() {
                default_pattern.clone()
            } else {
                maybe_pattern.unwrap_or_default()
            };
            result.push(Token::Key(Key {
                name,
                prefix,
                pattern,
                suffix,
                modifier: consume_modifier(&mut tokens),
            }));
            continue;
        }

        must_consume(TokenKind::End, &mut tokens)?;
        break;
    }

    Ok(result)
}
