use uri_pattern::{match_uri_path, Value};

#[test]
fn static_patterns_match_exactly() {
    let m = match_uri_path("/issues/all", "/issues/all")
        .expect("couldn't build matcher");
    assert_eq!(m.expect("no match").path, "/issues/all");

    let m = match_uri_path("/issues/all", "/issues/open")
        .expect("couldn't build matcher");
    assert!(m.is_none());
}

#[test]
fn optional_params_match_with_and_without_a_value() {
    let m = match_uri_path("/issues/:id?", "/issues/123")
        .expect("couldn't build matcher")
        .expect("no match");
    assert_eq!(m.get("id"), Some(&Value::Single("123".to_string())));

    let m = match_uri_path("/issues/:id?", "/issues")
        .expect("couldn't build matcher")
        .expect("no match");
    assert_eq!(m.get("id"), None);
}

#[test]
fn wildcard_captures_one_trailing_segment() {
    let m = match_uri_path("/issues/*", "/issues/42")
        .expect("couldn't build matcher")
        .expect("no match");
    assert_eq!(
        m.get("__catchAll__"),
        Some(&Value::Single("42".to_string()))
    );

    let m = match_uri_path("/issues/*", "/pulls/42")
        .expect("couldn't build matcher");
    assert!(m.is_none());
}

#[test]
fn inline_pattern_param_captures_whole_sub_paths() {
    let m = match_uri_path("/issues/:path{.+}?", "/issues/a/b/c")
        .expect("couldn't build matcher")
        .expect("no match");
    assert_eq!(
        m.get("path"),
        Some(&Value::List(vec![
            "a".to_string(),
            "b".to_string(),
            "c".to_string()
        ]))
    );
}
