use crate::schema::{ObjectSchema, ParamSpec, RouteMeta};
use http::Method;
use serde_json::json;

/// Body schema for an item: `description` and `tax` default to null, so
/// omitting them is not an error.
pub fn item_schema() -> ObjectSchema {
    ObjectSchema::new("Item")
        .field(ParamSpec::text("name"))
        .field(ParamSpec::text("description").optional())
        .field(ParamSpec::float("price"))
        .field(ParamSpec::float("tax").optional())
}

/// Body schema for a user.
pub fn user_schema() -> ObjectSchema {
    ObjectSchema::new("User")
        .field(ParamSpec::text("username"))
        .field(ParamSpec::text("full_name").optional())
}

/// The demo registration table. Ordered roughly by feature introduction;
/// the router itself sorts patterns longest-first for matching.
#[must_use]
pub fn routes() -> Vec<RouteMeta> {
    vec![
        // No parameters at all.
        RouteMeta::new(Method::GET, "/", "root"),
        // Integer path parameter.
        RouteMeta::new(Method::GET, "/items/{item_id}", "read_item")
            .param(ParamSpec::integer("item_id")),
        // Enumerated path segment.
        RouteMeta::new(Method::GET, "/models/{model_name}", "get_model").param(
            ParamSpec::enumerated("model_name", &["alexnet", "resnet", "lenet"]),
        ),
        // Rest-of-path parameter, separators kept verbatim.
        RouteMeta::new(Method::GET, "/files/{file_path:path}", "read_file")
            .param(ParamSpec::text("file_path")),
        // Query parameters with defaults.
        RouteMeta::new(Method::GET, "/items", "list_items")
            .param(ParamSpec::integer("skip").default_value(json!(0)))
            .param(ParamSpec::integer("limit").default_value(json!(10))),
        // Optional query (defaults to null) and boolean coercion.
        RouteMeta::new(Method::GET, "/items/{item_id}/details", "read_item_details")
            .param(ParamSpec::text("item_id"))
            .param(ParamSpec::text("q").optional())
            .param(ParamSpec::boolean("short").default_value(json!(false))),
        // Multiple path parameters plus query parameters.
        RouteMeta::new(
            Method::GET,
            "/users/{user_id}/items/{item_id}",
            "read_user_item",
        )
        .param(ParamSpec::integer("user_id"))
        .param(ParamSpec::text("item_id"))
        .param(ParamSpec::text("q").optional())
        .param(ParamSpec::boolean("short").default_value(json!(false))),
        // Required query parameter: no default, absence is a rejection.
        RouteMeta::new(Method::GET, "/needy-items/{item_id}", "read_needy_item")
            .param(ParamSpec::text("item_id"))
            .param(ParamSpec::text("needy")),
        // Structured body; the sole object binds the whole document.
        RouteMeta::new(Method::POST, "/items", "create_item")
            .param(ParamSpec::object("item", item_schema())),
        // Body + path + query combined. `q` is explicitly query-annotated so
        // the body object does not pull it into the document.
        RouteMeta::new(Method::PUT, "/items/{item_id}", "update_item")
            .param(ParamSpec::integer("item_id"))
            .param(ParamSpec::object("item", item_schema()))
            .param(ParamSpec::text("q").optional().from_query()),
        // Multiple body parameters: the top level keys sub-documents by
        // parameter name, and the bare scalar becomes an embedded body
        // field.
        RouteMeta::new(Method::PUT, "/offers/{offer_id}", "update_offer")
            .param(ParamSpec::integer("offer_id"))
            .param(ParamSpec::object("item", item_schema()))
            .param(ParamSpec::object("user", user_schema()))
            .param(ParamSpec::integer("importance").minimum(1.0)),
        // List query: repeated occurrences collect in order, each element
        // length-checked individually.
        RouteMeta::new(Method::GET, "/search", "search_items").param(
            ParamSpec::text_list("q")
                .default_value(json!(["foo", "bar"]))
                .min_length(1)
                .max_length(50),
        ),
        // Constrained optional query with an alias and a deprecation flag.
        RouteMeta::new(Method::GET, "/read-items", "read_items").param(
            ParamSpec::text("q")
                .optional()
                .alias("item-query")
                .min_length(3)
                .max_length(50)
                .pattern("fixedquery")
                .deprecated()
                .describe("Query string for the items to search"),
        ),
        // Numeric path constraints.
        RouteMeta::new(Method::GET, "/sized-items/{size}", "read_sized_item")
            .param(ParamSpec::integer("size").minimum(1.0).maximum(100.0)),
    ]
}
