/// Reserved parameter name a bare `*` wildcard is rewritten to.
pub const CATCH_ALL_PARAM: &str = "__catchAll__";

/// The key under which callers supply the wildcard's value when resolving.
pub const CATCH_ALL_KEY: &str = "catchAll";

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Rewrites a URI pattern into the canonical group syntax the path-template
/// compiler consumes:
///
/// - `/:name` becomes `{/:name}`, and `/:name?` becomes `{/:name}?`, so an
///   omitted optional parameter takes its separator with it;
/// - `/:name{pattern}?` (an inline pattern capturing whole sub-paths)
///   becomes the repeating group `{/:name}*`;
/// - a trailing `/*` (or a whole-pattern `*`) becomes `{/:__catchAll__}`;
/// - existing `{...}` groups and all other text copy through unchanged.
///
/// The transformation is a pure syntactic rewrite and idempotent: feeding a
/// canonical pattern back in returns it as-is. Malformed input is not
/// rejected here; whatever this pass does not recognize is left for the
/// compiler to accept or refuse.
pub fn transform_uri_path(path: &str) -> String {
    let bytes = path.as_bytes();
    let len = bytes.len();
    let mut out = String::with_capacity(len + 8);
    let mut i = 0;

    while i < len {
        // already-canonical groups copy through verbatim, modifier included
        if bytes[i] == b'{' {
            if let Some(close) = path[i..].find('}') {
                let mut j = i + close + 1;
                if matches!(bytes.get(j), Some(&(b'?' | b'*' | b'+'))) {
                    j += 1;
                }
                out.push_str(&path[i..j]);
                i = j;
                continue;
            }
        }

        // `/:name`, with an optional inline `{pattern}` and trailing `?`
        if bytes[i] == b'/' && bytes.get(i + 1) == Some(&b':') {
            let start = i + 2;
            let mut j = start;
            while j < len && is_name_byte(bytes[j]) {
                j += 1;
            }
            if j > start {
                let name = &path[start..j];
                if bytes.get(j) == Some(&b'{') {
                    if let Some(close) = path[j..].find('}') {
                        let mut k = j + close + 1;
                        if bytes.get(k) == Some(&b'?') {
                            k += 1;
                        }
                        out.push_str("{/:");
                        out.push_str(name);
                        out.push_str("}*");
                        i = k;
                        continue;
                    }
                }
                out.push_str("{/:");
                out.push_str(name);
                out.push('}');
                if bytes.get(j) == Some(&b'?') {
                    out.push('?');
                    j += 1;
                }
                i = j;
                continue;
            }
        }

        // a trailing wildcard becomes the reserved catch-all group
        if (bytes[i] == b'/'
            && bytes.get(i + 1) == Some(&b'*')
            && i + 2 == len)
            || (bytes[i] == b'*' && i == 0 && len == 1)
        {
            out.push_str("{/:");
            out.push_str(CATCH_ALL_PARAM);
            out.push('}');
            break;
        }

        if let Some(c) = path[i..].chars().next() {
            out.push(c);
            i += c.len_utf8();
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::transform_uri_path;

    #[test]
    fn leaves_plain_paths_alone() {
        assert_eq!(transform_uri_path("/issues/all"), "/issues/all");
        assert_eq!(transform_uri_path("/"), "/");
        assert_eq!(transform_uri_path(""), "");
    }

    #[test]
    fn wraps_params_in_groups() {
        assert_eq!(transform_uri_path("/issues/:id?"), "/issues{/:id}?");
        assert_eq!(
            transform_uri_path("/issue/:user/:repo/:state?/:labels?"),
            "/issue{/:user}{/:repo}{/:state}?{/:labels}?"
        );
    }

    #[test]
    fn inline_patterns_become_repeating_groups() {
        assert_eq!(transform_uri_path("/:path{.+}?"), "{/:path}*");
        assert_eq!(
            transform_uri_path("/issues/:path{.+}?"),
            "/issues{/:path}*"
        );
    }

    #[test]
    fn trailing_wildcards_become_the_reserved_group() {
        assert_eq!(
            transform_uri_path("/issues/*"),
            "/issues{/:__catchAll__}"
        );
        assert_eq!(transform_uri_path("*"), "{/:__catchAll__}");
    }

    #[test]
    fn a_wildcard_in_the_middle_passes_through() {
        assert_eq!(transform_uri_path("/a/*/b"), "/a/*/b");
    }
}
