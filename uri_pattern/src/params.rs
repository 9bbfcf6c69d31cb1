use crate::{
    error::PatternError,
    transform::{transform_uri_path, CATCH_ALL_PARAM},
};
use path_to_regex::{Modifier, Token, Value};
use std::borrow::Cow;

/// Metadata for one parameter of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDescriptor {
    pub name: String,
    /// Whether the parameter may be left out when resolving.
    pub optional: bool,
    /// Whether the parameter captures trailing path segments: either the
    /// reserved `*` wildcard, or a repeating group derived from an inline
    /// pattern. The two canonicalize to similar-looking groups, so this is
    /// carried as an explicit tag rather than re-derived from the text.
    pub is_catch_all: bool,
}

/// The parameters of a pattern, in left-to-right pattern order. Doubles as
/// a name-keyed map; if a name appears more than once, lookups see the last
/// occurrence while iteration preserves both.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParamDescriptors(Vec<ParamDescriptor>);

impl ParamDescriptors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&ParamDescriptor> {
        self.0.iter().rev().find(|d| d.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParamDescriptor> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ParamDescriptor> for ParamDescriptors {
    fn from_iter<T: IntoIterator<Item = ParamDescriptor>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ParamDescriptors {
    type Item = ParamDescriptor;
    type IntoIter = std::vec::IntoIter<ParamDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParamDescriptors {
    type Item = &'a ParamDescriptor;
    type IntoIter = std::slice::Iter<'a, ParamDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Extracts the parameter descriptors of a pattern, raw or canonical.
///
/// The pattern is canonicalized first, then the compiler's key schema is
/// mapped onto descriptors: a `?` or `*` modifier marks the parameter
/// optional; the reserved wildcard name or a `*` modifier marks it
/// catch-all. A pattern without parameters yields an empty collection.
pub fn parse_regexp_path_params(
    path: &str,
) -> Result<ParamDescriptors, PatternError> {
    let canonical = transform_uri_path(path);
    let tokens = path_to_regex::parse(&canonical)?;
    Ok(tokens
        .into_iter()
        .filter_map(|token| match token {
            Token::Key(key) => {
                let name = key.name.to_string();
                Some(ParamDescriptor {
                    optional: key.is_optional(),
                    is_catch_all: name == CATCH_ALL_PARAM
                        || key.modifier == Some(Modifier::ZeroOrMore),
                    name,
                })
            }
            Token::Literal(_) => None,
        })
        .collect())
}

type ResolveParamsInner = Vec<(Cow<'static, str>, Value)>;

/// Concrete values supplied when resolving a pattern into a literal path.
/// Insertion-ordered; inserting an existing key replaces its value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResolveParams(ResolveParamsInner);

impl ResolveParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Value>,
    ) {
        let key = key.into();
        let value = value.into();
        if let Some(prev) = self.0.iter_mut().find(|(k, _)| *k == key) {
            prev.1 = value;
        } else {
            self.0.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0
            .iter()
            .find_map(|(k, v)| if k == key { Some(v) } else { None })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_ref(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ResolveParams
where
    K: Into<Cow<'static, str>>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// Builds a [`ResolveParams`] from `key => value` pairs.
///
/// ```
/// use uri_pattern::resolve_params;
///
/// let params = resolve_params!(
///     "user" => "rssnext",
///     "path" => vec!["a", "b"],
/// );
/// assert_eq!(params.len(), 2);
/// ```
#[macro_export]
macro_rules! resolve_params {
    () => ($crate::ResolveParams::new());
    ($($key:expr => $val:expr),+ $(,)?) => {{
        let mut params = $crate::ResolveParams::new();
        $(params.insert($key, $val);)+
        params
    }};
}
