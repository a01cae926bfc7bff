use crate::dispatcher::{HandlerRequest, HandlerResponse};
use serde_json::json;

/// Default handler: echoes the bound arguments back as the response body.
pub fn echo_handler(req: &HandlerRequest) -> HandlerResponse {
    HandlerResponse::json(
        200,
        json!({
            "handler": req.handler_name,
            "method": req.method.to_string(),
            "path": req.path,
            "args": req.args.as_map(),
        }),
    )
}
