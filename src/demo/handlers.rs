use crate::dispatcher::{Dispatcher, HandlerRequest, HandlerResponse};
use serde_json::{json, Map, Value};

fn arg(req: &HandlerRequest, name: &str) -> Value {
    req.args.get(name).cloned().unwrap_or(Value::Null)
}

pub fn root(_req: &HandlerRequest) -> HandlerResponse {
    HandlerResponse::json(200, json!({ "message": "Hello World" }))
}

pub fn read_item(req: &HandlerRequest) -> HandlerResponse {
    HandlerResponse::json(200, json!({ "item_id": arg(req, "item_id") }))
}

pub fn get_model(req: &HandlerRequest) -> HandlerResponse {
    let model_name = arg(req, "model_name");
    let message = match model_name.as_str() {
        Some("alexnet") => "Deep Learning FTW!",
        Some("lenet") => "LeCNN all the images",
        _ => "Have some residuals",
    };
    HandlerResponse::json(200, json!({ "model_name": model_name, "message": message }))
}

pub fn read_file(req: &HandlerRequest) -> HandlerResponse {
    HandlerResponse::json(200, json!({ "file_path": arg(req, "file_path") }))
}

pub fn list_items(req: &HandlerRequest) -> HandlerResponse {
    HandlerResponse::json(
        200,
        json!({ "skip": arg(req, "skip"), "limit": arg(req, "limit") }),
    )
}

pub fn read_item_details(req: &HandlerRequest) -> HandlerResponse {
    let mut body = Map::new();
    body.insert("item_id".to_string(), arg(req, "item_id"));
    let q = arg(req, "q");
    if !q.is_null() {
        body.insert("q".to_string(), q);
    }
    if arg(req, "short") == json!(false) {
        body.insert(
            "description".to_string(),
            json!("This is an amazing item that has a long description"),
        );
    }
    HandlerResponse::json(200, Value::Object(body))
}

pub fn read_user_item(req: &HandlerRequest) -> HandlerResponse {
    let mut body = Map::new();
    body.insert("item_id".to_string(), arg(req, "item_id"));
    body.insert("owner_id".to_string(), arg(req, "user_id"));
    let q = arg(req, "q");
    if !q.is_null() {
        body.insert("q".to_string(), q);
    }
    if arg(req, "short") == json!(false) {
        body.insert(
            "description".to_string(),
            json!("This is an amazing item that has a long description"),
        );
    }
    HandlerResponse::json(200, Value::Object(body))
}

pub fn read_needy_item(req: &HandlerRequest) -> HandlerResponse {
    HandlerResponse::json(
        200,
        json!({ "item_id": arg(req, "item_id"), "needy": arg(req, "needy") }),
    )
}

pub fn create_item(req: &HandlerRequest) -> HandlerResponse {
    let item = arg(req, "item");
    let mut body = match &item {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };
    let price = item.get("price").and_then(Value::as_f64);
    let tax = item.get("tax").and_then(Value::as_f64);
    if let (Some(price), Some(tax)) = (price, tax) {
        body.insert("price_with_tax".to_string(), json!(price + tax));
    }
    HandlerResponse::json(200, Value::Object(body))
}

pub fn update_item(req: &HandlerRequest) -> HandlerResponse {
    let mut body = Map::new();
    body.insert("item_id".to_string(), arg(req, "item_id"));
    body.insert("item".to_string(), arg(req, "item"));
    let q = arg(req, "q");
    if !q.is_null() {
        body.insert("q".to_string(), q);
    }
    HandlerResponse::json(200, Value::Object(body))
}

pub fn update_offer(req: &HandlerRequest) -> HandlerResponse {
    HandlerResponse::json(
        200,
        json!({
            "offer_id": arg(req, "offer_id"),
            "item": arg(req, "item"),
            "user": arg(req, "user"),
            "importance": arg(req, "importance"),
        }),
    )
}

pub fn search_items(req: &HandlerRequest) -> HandlerResponse {
    HandlerResponse::json(200, json!({ "q": arg(req, "q") }))
}

pub fn read_items(req: &HandlerRequest) -> HandlerResponse {
    let mut body = Map::new();
    body.insert(
        "items".to_string(),
        json!([{ "item_id": "Foo" }, { "item_id": "Bar" }]),
    );
    let q = arg(req, "q");
    if !q.is_null() {
        body.insert("q".to_string(), q);
    }
    HandlerResponse::json(200, Value::Object(body))
}

pub fn read_sized_item(req: &HandlerRequest) -> HandlerResponse {
    HandlerResponse::json(200, json!({ "size": arg(req, "size") }))
}

/// Register every demo handler with the dispatcher.
pub fn register_all(dispatcher: &mut Dispatcher) {
    dispatcher.register_handler("root", root);
    dispatcher.register_handler("read_item", read_item);
    dispatcher.register_handler("get_model", get_model);
    dispatcher.register_handler("read_file", read_file);
    dispatcher.register_handler("list_items", list_items);
    dispatcher.register_handler("read_item_details", read_item_details);
    dispatcher.register_handler("read_user_item", read_user_item);
    dispatcher.register_handler("read_needy_item", read_needy_item);
    dispatcher.register_handler("create_item", create_item);
    dispatcher.register_handler("update_item", update_item);
    dispatcher.register_handler("update_offer", update_offer);
    dispatcher.register_handler("search_items", search_items);
    dispatcher.register_handler("read_items", read_items);
    dispatcher.register_handler("read_sized_item", read_sized_item);
}
