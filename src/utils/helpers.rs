use actix_web::HttpRequest;
use serde::Deserialize;

/// Name reported in every response envelope.
pub fn service_name() -> String {
    std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string())
}

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

/// The `{id}` path segment, or the `id` query parameter when the route has none.
pub fn requested_id<'a>(req: &'a HttpRequest, query: &'a IdQuery) -> Option<&'a str> {
    req.match_info().get("id").or(query.id.as_deref())
}
