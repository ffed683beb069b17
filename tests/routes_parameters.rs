use prefix_router_rs::{
    pattern::PatternError, trie::TrieError, Method, Router, RouterError,
};

#[test]
fn router_when_parameter_route_registered_then_extracts_value() {
    let mut router = Router::new();
    let key = router
        .add(Method::Get, "/users/{id}/profile", Some("profile"))
        .expect("parameter route should register");
    router.compile().expect("compile should succeed");

    let found = router
        .find(Method::Get, "/users/123/profile")
        .expect("router should be matchable")
        .expect("parameter route should match");

    assert_eq!(found.route_key(), key);
    assert_eq!(found.params().len(), 1);
    assert_eq!(found.params().get("id"), Some("123"));
}

#[test]
fn router_when_colon_parameter_used_then_behaves_like_braced() {
    let mut router: Router<()> = Router::new();
    router
        .add(Method::Get, "/users/:id/profile", None)
        .expect("colon parameter route should register");
    router.compile().expect("compile should succeed");

    let found = router
        .find(Method::Get, "/users/42/profile")
        .expect("router should be matchable")
        .expect("route should match");
    assert_eq!(found.params().get("id"), Some("42"));
}

#[test]
fn router_when_capture_spans_value_then_value_preserved_exactly() {
    let mut router: Router<()> = Router::new();
    router
        .add(Method::Any, "/files/{name}", None)
        .expect("route should register");
    router.compile().expect("compile should succeed");

    let found = router
        .find(Method::Any, "/files/a%20b.tar.gz")
        .expect("router should be matchable")
        .expect("route should match");
    assert_eq!(found.params().get("name"), Some("a%20b.tar.gz"));
}

#[test]
fn router_when_constraint_matches_then_route_resolves() {
    let mut router: Router<()> = Router::new();
    router
        .add(Method::Get, "/users/{id:[0-9]+}", None)
        .expect("constrained route should register");
    router.compile().expect("compile should succeed");

    let found = router
        .find(Method::Get, "/users/12345")
        .expect("router should be matchable")
        .expect("digits should match");
    assert_eq!(found.params().get("id"), Some("12345"));

    let miss = router
        .find(Method::Get, "/users/abc")
        .expect("router should be matchable");
    assert!(miss.is_none(), "letters must not satisfy [0-9]+");
}

#[test]
fn router_when_constraint_contains_braces_then_it_still_parses() {
    let mut router: Router<()> = Router::new();
    router
        .add(Method::Get, "/years/{year:[0-9]{4}}", None)
        .expect("brace-quantified constraint should parse");
    router.compile().expect("compile should succeed");

    assert!(router
        .find(Method::Get, "/years/2026")
        .expect("router should be matchable")
        .is_some());
    assert!(router
        .find(Method::Get, "/years/26")
        .expect("router should be matchable")
        .is_none());
}

#[test]
fn router_when_constraint_regex_invalid_then_returns_error() {
    let mut router: Router<()> = Router::new();
    let err = router.add(Method::Get, "/users/{id:[}", None);

    match err.expect_err("expected invalid regex error") {
        RouterError::Trie(TrieError::Pattern(PatternError::InvalidConstraint {
            name, ..
        })) => {
            assert_eq!(name, "id");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_literal_and_parameter_compete_then_literal_wins() {
    let mut router = Router::new();
    router
        .add(Method::Get, "/users/{id}", Some("param"))
        .expect("parameter route should register");
    router
        .add(Method::Get, "/users/new", Some("literal"))
        .expect("literal route should register");
    router.compile().expect("compile should succeed");

    let found = router
        .find(Method::Get, "/users/new")
        .expect("router should be matchable")
        .expect("route should match");
    assert_eq!(found.payload(), Some(&"literal"));
    assert!(found.params().is_empty());

    let found = router
        .find(Method::Get, "/users/newer")
        .expect("router should be matchable")
        .expect("parameter route should catch the longer value");
    assert_eq!(found.payload(), Some(&"param"));
    assert_eq!(found.params().get("id"), Some("newer"));
}

#[test]
fn router_when_pattern_has_three_parameters_then_captures_in_declaration_order() {
    let mut router: Router<()> = Router::new();
    router
        .add(Method::Any, "/{a}/{b}/{c}", None)
        .expect("route should register");
    router.compile().expect("compile should succeed");

    let found = router
        .find(Method::Any, "/1/2/3")
        .expect("router should be matchable")
        .expect("route should match");

    let captured: Vec<(&str, &str)> = found.params().iter().collect();
    assert_eq!(captured, vec![("a", "1"), ("b", "2"), ("c", "3")]);
}

#[test]
fn router_when_parameter_is_mid_segment_then_suffix_still_required() {
    let mut router: Router<()> = Router::new();
    router
        .add(Method::Get, "/files/{name}.txt", None)
        .expect("mid-segment parameter should register");
    router.compile().expect("compile should succeed");

    let found = router
        .find(Method::Get, "/files/readme.txt")
        .expect("router should be matchable")
        .expect("suffix route should match");
    assert_eq!(found.params().get("name"), Some("readme"));

    assert!(router
        .find(Method::Get, "/files/readme.md")
        .expect("router should be matchable")
        .is_none());
}

#[test]
fn router_when_shorter_and_longer_routes_share_parameter_then_both_match() {
    let mut router = Router::new();
    router
        .add(Method::Get, "/users/{id}", Some("show"))
        .expect("route should register");
    router
        .add(Method::Get, "/users/{id}/edit", Some("edit"))
        .expect("route should register");
    router.compile().expect("compile should succeed");

    let found = router
        .find(Method::Get, "/users/5")
        .expect("router should be matchable")
        .expect("short route should match");
    assert_eq!(found.payload(), Some(&"show"));

    let found = router
        .find(Method::Get, "/users/5/edit")
        .expect("router should be matchable")
        .expect("long route should match");
    assert_eq!(found.payload(), Some(&"edit"));
    assert_eq!(found.params().get("id"), Some("5"));
}

#[test]
fn router_when_duplicate_parameter_names_in_one_pattern_then_returns_error() {
    let mut router: Router<()> = Router::new();
    let err = router.add(Method::Get, "/{id}/{id}", None);

    match err.expect_err("expected duplicate parameter error") {
        RouterError::Pattern(PatternError::DuplicateParameterName { name, .. }) => {
            assert_eq!(name, "id");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_parameter_name_starts_with_digit_then_returns_error() {
    let mut router: Router<()> = Router::new();
    let err = router.add(Method::Get, "/{1id}", None);

    match err.expect_err("expected invalid start error") {
        RouterError::Pattern(PatternError::ParameterInvalidStart { name, found, .. }) => {
            assert_eq!(name, "1id");
            assert_eq!(found, '1');
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_colon_parameter_contains_invalid_character_then_returns_error() {
    let mut router: Router<()> = Router::new();
    let err = router.add(Method::Get, "/:id-raw", None);

    match err.expect_err("expected invalid character error") {
        RouterError::Pattern(PatternError::ParameterInvalidCharacter { invalid, .. }) => {
            assert_eq!(invalid, '-');
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_conflicting_parameter_names_share_position_then_returns_error() {
    let mut router: Router<()> = Router::new();
    router
        .add(Method::Get, "/users/{id}", None)
        .expect("first parameter route should register");
    let err = router.add(Method::Get, "/users/{slug}", None);

    match err.expect_err("expected parameter conflict") {
        RouterError::Trie(TrieError::ParamConflict {
            existing, incoming, ..
        }) => {
            assert_eq!(existing, "{id}");
            assert_eq!(incoming, "{slug}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
