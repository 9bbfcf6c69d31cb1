use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    Open,
    Close,
    Pattern,
    Name,
    Char,
    EscapedChar,
    Modifier,
    End,
}

#[derive(Debug)]
pub(crate) struct LexToken {
    pub kind: TokenKind,
    pub index: usize,
    pub value: String,
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Tokenizes a template string. Always ends with a single `End` token.
pub(crate) fn lex(s: &str) -> Result<Vec<LexToken>, Error> {
    let mut tokens = Vec::new();
    let mut chars = s.chars().peekable();
    let mut index = 0_usize;

    loop {
        match chars.next() {
            None => break,
            Some(c @ ('*' | '+' | '?')) => {
                tokens.push(LexToken {
                    kind: TokenKind::Modifier,
                    index,
                    value: c.to_string(),
                });
                index += 1;
            }
            Some('\\') => {
                index += 1;
                let value =
                    chars.next().ok_or(Error::UnexpectedEnd(index))?;
                tokens.push(LexToken {
                    kind: TokenKind::EscapedChar,
                    index,
                    value: value.to_string(),
                });
                index += 1;
            }
            Some('{') => {
                tokens.push(LexToken {
                    kind: TokenKind::Open,
                    index,
                    value: '{'.to_string(),
                });
                index += 1;
            }
            Some('}') => {
                tokens.push(LexToken {
                    kind: TokenKind::Close,
                    index,
                    value: '}'.to_string(),
                });
                index += 1;
            }
            Some(':') => {
                let mut name = String::new();
                while let Some(c) = chars.peek() {
                    if is_name_char(*c) {
                        name.push(*c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                if name.is_empty() {
                    return Err(Error::MissingParamName(index));
                }
                let name_len = name.len();
                tokens.push(LexToken {
                    kind: TokenKind::Name,
                    index,
                    value: name,
                });
                index += 1 + name_len;
            }
            Some('(') => {
                let mut count = 1;
                let mut pattern = String::new();

                if chars.peek() == Some(&'?') {
                    return Err(Error::PatternStartsWithModifier(index + 1));
                }

                loop {
                    let next_char = chars.peek();
                    if next_char.is_none() {
                        break;
                    }
                    if next_char == Some(&'\\') {
                        pattern.push(chars.next().unwrap());
                        pattern.push(
                            chars
                                .next()
                                .ok_or(Error::UnexpectedEnd(index))?,
                        );
                        continue;
                    }
                    if next_char == Some(&')') {
                        count -= 1;
                        if count == 0 {
                            chars.next();
                            break;
                        }
                    } else if next_char == Some(&'(') {
                        count += 1;
                        pattern.push(chars.next().unwrap());
                        if chars.peek() != Some(&'?') {
                            return Err(Error::CapturingGroup(
                                index + pattern.len(),
                            ));
                        }
                        continue;
                    }

                    pattern.push(chars.next().unwrap());
                }

                if count > 0 {
                    return Err(Error::UnbalancedPattern(index));
                }
                if pattern.is_empty() {
                    return Err(Error::MissingPattern(index));
                }
                let pattern_len = pattern.len();
                tokens.push(LexToken {
                    kind: TokenKind::Pattern,
                    index,
                    value: pattern,
                });
                index += 2 + pattern_len;
            }
            Some(c) => {
                tokens.push(LexToken {
                    kind: TokenKind::Char,
                    index,
                    value: c.to_string(),
                });
                index += 1;
            }
        }
    }

    tokens.push(LexToken {
        kind: TokenKind::End,
        index,
        value: String::new(),
    });

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::{lex, TokenKind};

    #[test]
    fn lexes_literals_params_and_groups() {
        let tokens = lex("/issues{/:id}?").expect("couldn't lex pattern");
        let kinds = tokens.iter().map(|t| t.kind).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Char,
                TokenKind::Char,
                TokenKind::Char,
                TokenKind::Char,
                TokenKind::Char,
                TokenKind::Char,
                TokenKind::Char,
                TokenKind::Open,
                TokenKind::Char,
                TokenKind::Name,
                TokenKind::Close,
                TokenKind::Modifier,
                TokenKind::End,
            ]
        );
        assert_eq!(tokens[9].value, "id");
    }

    #[test]
    fn lexes_inline_patterns() {
        let tokens = lex("/:path(.+)").expect("couldn't lex pattern");
        let pattern = tokens
            .iter()
            .find(|t| t.kind == TokenKind::Pattern)
            .expect("no pattern token");
        assert_eq!(pattern.value, ".+");
    }

    #[test]
    fn rejects_empty_param_name() {
        assert!(lex("/:/").is_err());
    }

    #[test]
    fn rejects_unbalanced_pattern() {
        assert!(lex("/:id(abc").is_err());
    }

    #[test]
    fn rejects_capturing_group() {
        assert!(lex("/:id((.+))").is_err());
    }
}
