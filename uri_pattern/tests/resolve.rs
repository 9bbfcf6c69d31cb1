use uri_pattern::{
    regexp_path_to_path, resolve_params, PatternError, ResolveParams,
};

#[test]
fn plain_path_resolves_to_itself() {
    let path = regexp_path_to_path("/issues/all", &ResolveParams::new())
        .expect("couldn't resolve");
    assert_eq!(path, "/issues/all");
}

#[test]
fn omitted_optional_takes_its_separator_with_it() {
    let path = regexp_path_to_path("/issues/:id?", &ResolveParams::new())
        .expect("couldn't resolve");
    assert_eq!(path, "/issues");
}

#[test]
fn filled_optional_keeps_its_separator() {
    let path =
        regexp_path_to_path("/issues/:id?", &resolve_params!("id" => "1"))
            .expect("couldn't resolve");
    assert_eq!(path, "/issues/1");
}

#[test]
fn a_prefix_of_the_optionals_may_be_filled() {
    let pattern = "/issue/:user/:repo/:state?/:labels?";

    let path = regexp_path_to_path(
        pattern,
        &resolve_params!("user" => "rssnext", "repo" => "follow"),
    )
    .expect("couldn't resolve");
    assert_eq!(path, "/issue/rssnext/follow");

    let path = regexp_path_to_path(
        pattern,
        &resolve_params!(
            "user" => "rssnext",
            "repo" => "follow",
            "state" => "open"
        ),
    )
    .expect("couldn't resolve");
    assert_eq!(path, "/issue/rssnext/follow/open");

    let path = regexp_path_to_path(
        pattern,
        &resolve_params!(
            "user" => "rssnext",
            "repo" => "follow",
            "state" => "open",
            "labels" => "rss"
        ),
    )
    .expect("couldn't resolve");
    assert_eq!(path, "/issue/rssnext/follow/open/rss");
}

#[test]
fn filling_past_a_gap_names_the_gap() {
    let err = regexp_path_to_path(
        "/issue/:user/:repo/:state?/:labels?",
        &resolve_params!(
            "user" => "rssnext",
            "repo" => "follow",
            "labels" => "rss"
        ),
    )
    .unwrap_err();
    assert!(
        matches!(&err, PatternError::MissingOptionalParam(name) if name == "state"),
        "unexpected error: {err:?}"
    );
}

#[test]
fn missing_required_param_names_the_param() {
    let err = regexp_path_to_path(
        "/issue/:user/:repo/:state?/:labels?",
        &ResolveParams::new(),
    )
    .unwrap_err();
    assert!(
        matches!(&err, PatternError::MissingRequiredParam(name) if name == "user"),
        "unexpected error: {err:?}"
    );
}

#[test]
fn bare_wildcard_value_is_one_opaque_segment() {
    let path =
        regexp_path_to_path("*", &resolve_params!("catchAll" => "a/b/c"))
            .expect("couldn't resolve");
    assert_eq!(path, "/a%2Fb%2Fc");
}

#[test]
fn wildcard_after_a_route_prefix() {
    let path = regexp_path_to_path(
        "/issues/*",
        &resolve_params!("catchAll" => "feed"),
    )
    .expect("couldn't resolve");
    assert_eq!(path, "/issues/feed");
}

#[test]
fn list_value_splits_into_real_segments() {
    let path = regexp_path_to_path(
        "/issues/:path{.+}?",
        &resolve_params!("path" => vec!["a", "b", "c"]),
    )
    .expect("couldn't resolve");
    assert_eq!(path, "/issues/a/b/c");
}

#[test]
fn list_segments_are_encoded_individually() {
    let path = regexp_path_to_path(
        "/issues/:path{.+}?",
        &resolve_params!("path" => vec!["a=1&b=2"]),
    )
    .expect("couldn't resolve");
    assert_eq!(path, "/issues/a%3D1%26b%3D2");
}

#[test]
fn omitted_catch_all_leaves_the_tail_out() {
    let path =
        regexp_path_to_path("/issues/:path{.+}?", &ResolveParams::new())
            .expect("couldn't resolve");
    assert_eq!(path, "/issues");
}

#[test]
fn canonical_input_resolves_the_same_as_raw() {
    let raw =
        regexp_path_to_path("/issues/:id?", &resolve_params!("id" => "7"))
            .expect("couldn't resolve");
    let canonical =
        regexp_path_to_path("/issues{/:id}?", &resolve_params!("id" => "7"))
            .expect("couldn't resolve");
    assert_eq!(raw, canonical);
}
