use uri_pattern::transform_uri_path;

#[test]
fn plain_paths_pass_through() {
    assert_eq!(transform_uri_path("/issues/all"), "/issues/all");
}

#[test]
fn trailing_optional_param() {
    assert_eq!(transform_uri_path("/issues/:id?"), "/issues{/:id}?");
}

#[test]
fn required_and_optional_params_each_get_their_own_group() {
    assert_eq!(
        transform_uri_path("/issue/:user/:repo/:state?/:labels?"),
        "/issue{/:user}{/:repo}{/:state}?{/:labels}?"
    );
}

#[test]
fn inline_pattern_becomes_a_repeating_group() {
    assert_eq!(transform_uri_path("/:path{.+}?"), "{/:path}*");
}

#[test]
fn inline_pattern_with_leading_route() {
    assert_eq!(transform_uri_path("/issues/:path{.+}?"), "/issues{/:path}*");
}

#[test]
fn wildcards_become_the_reserved_group() {
    assert_eq!(transform_uri_path("/issues/*"), "/issues{/:__catchAll__}");
    assert_eq!(transform_uri_path("*"), "{/:__catchAll__}");
}

#[test]
fn transform_is_idempotent() {
    for pattern in [
        "/issues/all",
        "/issues/:id?",
        "/issue/:user/:repo/:state?/:labels?",
        "/:path{.+}?",
        "/issues/:path{.+}?",
        "/issues/*",
        "*",
    ] {
        let once = transform_uri_path(pattern);
        assert_eq!(transform_uri_path(&once), once, "for pattern {pattern:?}");
    }
}
