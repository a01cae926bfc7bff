use http::Method;
use routebind::router::Router;
use routebind::schema::{ParamSpec, RouteMeta};

fn example_routes() -> Vec<RouteMeta> {
    vec![
        RouteMeta::new(Method::GET, "/", "root"),
        RouteMeta::new(Method::GET, "/zoo/animals", "get_animals"),
        RouteMeta::new(Method::POST, "/zoo/animals", "create_animal"),
        RouteMeta::new(Method::GET, "/zoo/animals/{id}", "get_animal")
            .param(ParamSpec::text("id")),
        RouteMeta::new(Method::DELETE, "/zoo/animals/{id}", "delete_animal")
            .param(ParamSpec::text("id")),
        RouteMeta::new(Method::GET, "/zoo/animals/count", "count_animals"),
        RouteMeta::new(Method::GET, "/archive/{entry:path}", "get_archive_entry")
            .param(ParamSpec::text("entry")),
    ]
}

fn assert_route_match(router: &Router, method: Method, path: &str, expected_handler: &str) {
    match router.route(method.clone(), path) {
        Some(m) => {
            assert_eq!(
                m.handler_name, expected_handler,
                "Handler mismatch for {} {}: expected '{}', got '{}'",
                method, path, expected_handler, m.handler_name
            );
        }
        None => {
            assert_eq!(
                expected_handler, "<none>",
                "Expected route to match for {} {}",
                method, path
            );
        }
    }
}

#[test]
fn test_root_route() {
    let router = Router::new(example_routes());
    assert_route_match(&router, Method::GET, "/", "root");
}

#[test]
fn test_method_disambiguation() {
    let router = Router::new(example_routes());
    assert_route_match(&router, Method::GET, "/zoo/animals", "get_animals");
    assert_route_match(&router, Method::POST, "/zoo/animals", "create_animal");
    assert_route_match(&router, Method::PUT, "/zoo/animals", "<none>");
}

#[test]
fn test_path_param_extraction() {
    let router = Router::new(example_routes());
    let m = router
        .route(Method::GET, "/zoo/animals/42")
        .expect("route should match");
    assert_eq!(m.handler_name, "get_animal");
    assert_eq!(m.get_path_param("id"), Some("42"));
}

#[test]
fn test_literal_shadows_parameterized() {
    // Longest-pattern-first ordering lets /zoo/animals/count win over
    // /zoo/animals/{id}.
    let router = Router::new(example_routes());
    assert_route_match(&router, Method::GET, "/zoo/animals/count", "count_animals");
    assert_route_match(&router, Method::GET, "/zoo/animals/7", "get_animal");
}

#[test]
fn test_rest_of_path_keeps_separators() {
    let router = Router::new(example_routes());
    let m = router
        .route(Method::GET, "/archive/2024/06/report.txt")
        .expect("route should match");
    assert_eq!(m.handler_name, "get_archive_entry");
    assert_eq!(m.get_path_param("entry"), Some("2024/06/report.txt"));
}

#[test]
fn test_no_match_is_none() {
    let router = Router::new(example_routes());
    assert_route_match(&router, Method::GET, "/does/not/exist", "<none>");
}

#[test]
fn test_matched_route_always_carries_path_params() {
    let router = Router::new(example_routes());
    let m = router
        .route(Method::DELETE, "/zoo/animals/rex")
        .expect("route should match");
    assert_eq!(m.path_params.len(), 1);
    assert_eq!(m.path_params_map().get("id"), Some(&"rex".to_string()));
}
