use http::Method;
use routebind::dispatcher::{Dispatcher, HandlerResponse};
use routebind::echo_handler;
use routebind::request::RawRequest;
use routebind::router::Router;
use routebind::schema::{ParamSpec, RouteMeta};
use serde_json::json;

fn test_router() -> Router {
    Router::new(vec![RouteMeta::new(Method::GET, "/items/{item_id}", "read_item")
        .param(ParamSpec::integer("item_id"))
        .param(ParamSpec::text("q").optional())])
}

#[test]
fn test_dispatch_success() {
    let router = test_router();
    let mut dispatcher = Dispatcher::new();
    dispatcher.register_handler("read_item", |req| {
        HandlerResponse::json(200, json!({ "item_id": req.args.get("item_id") }))
    });

    let request = RawRequest::get("/items/42");
    let m = router.route(Method::GET, "/items/42").expect("match");
    let response = dispatcher.dispatch(m, &request).expect("handler registered");
    assert_eq!(response.status, 200);
    assert_eq!(response.body, json!({ "item_id": 42 }));
}

#[test]
fn test_dispatch_validation_failure_is_422() {
    let router = test_router();
    let mut dispatcher = Dispatcher::new();
    dispatcher.register_handler("read_item", |_req| {
        panic!("handler must not run on validation failure")
    });

    let request = RawRequest::get("/items/abc");
    let m = router.route(Method::GET, "/items/abc").expect("match");
    let response = dispatcher.dispatch(m, &request).expect("handler registered");
    assert_eq!(response.status, 422);
    assert_eq!(response.body["error"], json!("parameter validation failed"));

    let rejections = response.body["rejections"]
        .as_array()
        .expect("rejection list");
    assert_eq!(rejections.len(), 1);
    assert_eq!(rejections[0]["param"], json!("item_id"));
    assert_eq!(rejections[0]["kind"], json!("coercion_error"));
}

#[test]
fn test_dispatch_panic_is_500() {
    let router = test_router();
    let mut dispatcher = Dispatcher::new();
    dispatcher.register_handler("read_item", |_req| panic!("boom"));

    let request = RawRequest::get("/items/42");
    let m = router.route(Method::GET, "/items/42").expect("match");
    let response = dispatcher.dispatch(m, &request).expect("handler registered");
    assert_eq!(response.status, 500);
    assert!(response.body["error"]
        .as_str()
        .expect("error message")
        .starts_with("Handler panicked"));
}

#[test]
fn test_dispatch_unknown_handler_is_none() {
    let router = test_router();
    let dispatcher = Dispatcher::new();

    let request = RawRequest::get("/items/42");
    let m = router.route(Method::GET, "/items/42").expect("match");
    assert!(dispatcher.dispatch(m, &request).is_none());
}

#[test]
fn test_register_replaces_existing_handler() {
    let router = test_router();
    let mut dispatcher = Dispatcher::new();
    dispatcher.register_handler("read_item", |_req| HandlerResponse::json(200, json!("old")));
    dispatcher.register_handler("read_item", |_req| HandlerResponse::json(200, json!("new")));

    let request = RawRequest::get("/items/42");
    let m = router.route(Method::GET, "/items/42").expect("match");
    let response = dispatcher.dispatch(m, &request).expect("handler registered");
    assert_eq!(response.body, json!("new"));
}

#[test]
fn test_handler_names_sorted() {
    let mut dispatcher = Dispatcher::new();
    dispatcher.register_handler("zeta", |_req| HandlerResponse::json(200, json!(null)));
    dispatcher.register_handler("alpha", |_req| HandlerResponse::json(200, json!(null)));
    assert_eq!(dispatcher.handler_names(), vec!["alpha", "zeta"]);
    assert!(dispatcher.has_handler("alpha"));
    assert!(!dispatcher.has_handler("omega"));
}

#[test]
fn test_echo_handler_reflects_request() {
    let router = test_router();
    let mut dispatcher = Dispatcher::new();
    dispatcher.register_handler("read_item", echo_handler);

    let request = RawRequest::get("/items/7?q=hello");
    let m = router.route(Method::GET, "/items/7").expect("match");
    let response = dispatcher.dispatch(m, &request).expect("handler registered");
    assert_eq!(response.status, 200);
    assert_eq!(response.body["handler"], json!("read_item"));
    assert_eq!(response.body["method"], json!("GET"));
    assert_eq!(response.body["path"], json!("/items/7"));
    assert_eq!(response.body["args"]["item_id"], json!(7));
    assert_eq!(response.body["args"]["q"], json!("hello"));
}
