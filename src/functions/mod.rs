//! Serverless-style endpoints mounted under `/functions`.
use actix_web::http::StatusCode as ActixStatus;
use actix_web::HttpResponse;
use http::StatusCode;
use serde_json::Value;

pub mod aggregator;
pub mod gateway;

pub use aggregator::Aggregator;
pub use gateway::Gateway;

/// Status, permissive CORS headers and JSON body of a function call.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionResponse {
    pub status: StatusCode,
    pub allow_methods: &'static str,
    pub body: Value,
}

impl FunctionResponse {
    pub fn new(status: StatusCode, allow_methods: &'static str, body: Value) -> Self {
        Self {
            status,
            allow_methods,
            body,
        }
    }

    /// Answer to a CORS preflight: headers only.
    pub fn preflight(allow_methods: &'static str) -> Self {
        Self::new(StatusCode::NO_CONTENT, allow_methods, Value::Null)
    }

    pub fn headers(&self) -> [(&'static str, &'static str); 3] {
        [
            ("Access-Control-Allow-Origin", "*"),
            ("Access-Control-Allow-Methods", self.allow_methods),
            ("Content-Type", "application/json"),
        ]
    }

    pub fn into_http_response(self) -> HttpResponse {
        let status =
            ActixStatus::from_u16(self.status.as_u16()).unwrap_or(ActixStatus::INTERNAL_SERVER_ERROR);
        let mut builder = HttpResponse::build(status);
        for header in self.headers() {
            builder.insert_header(header);
        }

        if self.body.is_null() {
            builder.finish()
        } else {
            builder.body(self.body.to_string())
        }
    }
}
