use prefix_router_rs::{Method, Router};

#[test]
fn router_when_literal_route_registered_then_returns_payload() {
    let mut router = Router::new();
    let key = router
        .add(Method::Get, "/users/all", Some("list users"))
        .expect("literal route should register");
    router.compile().expect("compile should succeed");

    let found = router
        .find(Method::Get, "/users/all")
        .expect("router should be matchable")
        .expect("literal route should match");

    assert_eq!(found.route_key(), key);
    assert_eq!(found.payload(), Some(&"list users"));
    assert!(found.params().is_empty());
}

#[test]
fn router_when_path_unregistered_then_returns_none() {
    let mut router: Router<()> = Router::new();
    router
        .add(Method::Get, "/route", None)
        .expect("route should register");
    router.compile().expect("compile should succeed");

    let found = router
        .find(Method::Get, "/unregistered/path")
        .expect("no-match is not an error");
    assert!(found.is_none());
}

#[test]
fn router_when_request_has_trailing_slash_then_still_matches() {
    let mut router: Router<()> = Router::new();
    router
        .add(Method::Any, "/route", None)
        .expect("route should register");
    router.compile().expect("compile should succeed");

    assert!(router
        .find(Method::Any, "/route/")
        .expect("router should be matchable")
        .is_some());
    assert!(router
        .matches(Method::Get, "/route/")
        .expect("router should be matchable"));
}

#[test]
fn router_when_root_registered_then_matches_root() {
    let mut router = Router::new();
    router
        .add(Method::Get, "/", Some(0u32))
        .expect("root route should register");
    router.compile().expect("compile should succeed");

    let found = router
        .find(Method::Get, "/")
        .expect("router should be matchable")
        .expect("root should match");
    assert_eq!(found.payload(), Some(&0u32));
}

#[test]
fn router_when_identical_registration_repeats_then_payload_replaced_in_place() {
    let mut router = Router::new();
    let first = router
        .add(Method::Get, "/dup", Some("old"))
        .expect("first registration should succeed");
    let second = router
        .add(Method::Get, "/dup", Some("new"))
        .expect("duplicate registration is not an error");
    assert_eq!(first, second);

    router.compile().expect("compile should succeed");
    let found = router
        .find(Method::Get, "/dup")
        .expect("router should be matchable")
        .expect("route should match");
    assert_eq!(found.payload(), Some(&"new"));
}

#[test]
fn router_when_prefixes_overlap_then_both_routes_resolve() {
    let mut router = Router::new();
    router
        .add(Method::Get, "/users", Some(1))
        .expect("shorter route should register");
    router
        .add(Method::Get, "/userspace", Some(2))
        .expect("longer route should register");
    router
        .add(Method::Get, "/user", Some(3))
        .expect("prefix route should register");
    router.compile().expect("compile should succeed");

    for (path, payload) in [("/users", 1), ("/userspace", 2), ("/user", 3)] {
        let found = router
            .find(Method::Get, path)
            .expect("router should be matchable")
            .expect("route should match");
        assert_eq!(found.payload(), Some(&payload), "path {path}");
    }
}
