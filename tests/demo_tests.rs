//! End-to-end coverage of the demo route table: match, resolve, dispatch.

use http::Method;
use routebind::demo;
use routebind::dispatcher::HandlerResponse;
use routebind::request::RawRequest;
use serde_json::{json, Value};
use std::str::FromStr;

fn send(method: &str, target: &str, body: Option<Value>) -> HandlerResponse {
    let (router, dispatcher) = demo::build();
    let method = Method::from_str(method).expect("valid method");
    let mut request = RawRequest::new(method.clone(), target);
    if let Some(body) = body {
        request = request.with_json(&body);
    }
    let route_match = router
        .route(method, &request.path)
        .unwrap_or_else(|| panic!("no route for {target}"));
    dispatcher
        .dispatch(route_match, &request)
        .expect("demo handlers are all registered")
}

fn rejection_params(response: &HandlerResponse) -> Vec<String> {
    response.body["rejections"]
        .as_array()
        .expect("rejection list")
        .iter()
        .map(|r| r["param"].as_str().expect("param name").to_string())
        .collect()
}

#[test]
fn test_root() {
    let response = send("GET", "/", None);
    assert_eq!(response.status, 200);
    assert_eq!(response.body, json!({ "message": "Hello World" }));
}

#[test]
fn test_read_item_coerces_path_integer() {
    let response = send("GET", "/items/3", None);
    assert_eq!(response.status, 200);
    assert_eq!(response.body, json!({ "item_id": 3 }));

    let response = send("GET", "/items/abc", None);
    assert_eq!(response.status, 422);
    assert_eq!(rejection_params(&response), vec!["item_id"]);
}

#[test]
fn test_get_model_enumeration() {
    let response = send("GET", "/models/alexnet", None);
    assert_eq!(
        response.body,
        json!({ "model_name": "alexnet", "message": "Deep Learning FTW!" })
    );

    let response = send("GET", "/models/vgg", None);
    assert_eq!(response.status, 422);
    assert_eq!(rejection_params(&response), vec!["model_name"]);
}

#[test]
fn test_read_file_rest_of_path() {
    let response = send("GET", "/files/home/johndoe/myfile.txt", None);
    assert_eq!(
        response.body,
        json!({ "file_path": "home/johndoe/myfile.txt" })
    );
}

#[test]
fn test_list_items_defaults() {
    let response = send("GET", "/items", None);
    assert_eq!(response.body, json!({ "skip": 0, "limit": 10 }));

    let response = send("GET", "/items?skip=20&limit=5", None);
    assert_eq!(response.body, json!({ "skip": 20, "limit": 5 }));
}

#[test]
fn test_read_item_details_optional_and_boolean() {
    let response = send("GET", "/items/foo/details", None);
    assert_eq!(
        response.body,
        json!({
            "item_id": "foo",
            "description": "This is an amazing item that has a long description",
        })
    );

    let response = send("GET", "/items/foo/details?q=bar&short=yes", None);
    assert_eq!(response.body, json!({ "item_id": "foo", "q": "bar" }));
}

#[test]
fn test_read_user_item() {
    let response = send("GET", "/users/5/items/foo?short=1", None);
    assert_eq!(response.body, json!({ "item_id": "foo", "owner_id": 5 }));
}

#[test]
fn test_needy_query_required() {
    let response = send("GET", "/needy-items/foo?needy=sooooneedy", None);
    assert_eq!(
        response.body,
        json!({ "item_id": "foo", "needy": "sooooneedy" })
    );

    let response = send("GET", "/needy-items/foo", None);
    assert_eq!(response.status, 422);
    assert_eq!(rejection_params(&response), vec!["needy"]);
}

#[test]
fn test_create_item_computes_price_with_tax() {
    let response = send(
        "POST",
        "/items",
        Some(json!({ "name": "hammer", "price": 10.0, "tax": 2.5 })),
    );
    assert_eq!(response.status, 200);
    assert_eq!(response.body["name"], json!("hammer"));
    assert_eq!(response.body["price_with_tax"], json!(12.5));

    let response = send("POST", "/items", Some(json!({ "name": "saw", "price": 3.0 })));
    assert_eq!(response.status, 200);
    assert!(response.body.get("price_with_tax").is_none());
    assert_eq!(response.body["description"], Value::Null);
}

#[test]
fn test_create_item_missing_required_field() {
    let response = send("POST", "/items", Some(json!({ "price": 3.0 })));
    assert_eq!(response.status, 422);
    assert_eq!(rejection_params(&response), vec!["item.name"]);
}

#[test]
fn test_update_item_mixes_path_body_and_query() {
    let response = send(
        "PUT",
        "/items/7?q=hello",
        Some(json!({ "name": "hammer", "price": 9.5 })),
    );
    assert_eq!(response.status, 200);
    assert_eq!(response.body["item_id"], json!(7));
    assert_eq!(response.body["q"], json!("hello"));
    assert_eq!(response.body["item"]["name"], json!("hammer"));
}

#[test]
fn test_update_offer_multiple_body_params() {
    let response = send(
        "PUT",
        "/offers/1",
        Some(json!({
            "item": { "name": "hammer", "price": 9.5 },
            "user": { "username": "johndoe" },
            "importance": 5,
        })),
    );
    assert_eq!(response.status, 200);
    assert_eq!(response.body["offer_id"], json!(1));
    assert_eq!(response.body["importance"], json!(5));
    assert_eq!(response.body["user"]["username"], json!("johndoe"));

    let response = send(
        "PUT",
        "/offers/1",
        Some(json!({
            "item": { "name": "hammer", "price": 9.5 },
            "user": { "username": "johndoe" },
            "importance": 0,
        })),
    );
    assert_eq!(response.status, 422);
    assert_eq!(rejection_params(&response), vec!["importance"]);
}

#[test]
fn test_search_list_default_and_repeats() {
    let response = send("GET", "/search", None);
    assert_eq!(response.body, json!({ "q": ["foo", "bar"] }));

    let response = send("GET", "/search?q=alpha&q=beta", None);
    assert_eq!(response.body, json!({ "q": ["alpha", "beta"] }));
}

#[test]
fn test_read_items_alias_and_pattern() {
    let response = send("GET", "/read-items?item-query=fixedquery", None);
    assert_eq!(response.status, 200);
    assert_eq!(response.body["q"], json!("fixedquery"));

    let response = send("GET", "/read-items?item-query=no", None);
    assert_eq!(response.status, 422);
    // Too short and pattern mismatch, both reported.
    assert_eq!(rejection_params(&response), vec!["q", "q"]);
}

#[test]
fn test_sized_item_bounds() {
    let response = send("GET", "/sized-items/50", None);
    assert_eq!(response.body, json!({ "size": 50 }));

    let response = send("GET", "/sized-items/0", None);
    assert_eq!(response.status, 422);

    let response = send("GET", "/sized-items/101", None);
    assert_eq!(response.status, 422);
}

#[test]
fn test_malformed_body_rejects_body_params_only() {
    let (router, dispatcher) = demo::build();
    let request = RawRequest::put("/offers/1").with_body("{not json");
    let route_match = router.route(Method::PUT, "/offers/1").expect("match");
    let response = dispatcher
        .dispatch(route_match, &request)
        .expect("handler registered");
    assert_eq!(response.status, 422);
    let mut params = rejection_params(&response);
    params.sort();
    assert_eq!(params, vec!["importance", "item", "user"]);
}
