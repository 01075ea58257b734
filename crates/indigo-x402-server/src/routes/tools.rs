use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use x402::{encode_settlement, PAYMENT_RESPONSE_HEADER};

use crate::catalog::{self, Tool, CATEGORIES, TOOLS};
use crate::error::ServerError;
use crate::metrics::record_request;
use crate::paywall::require_payment;
use crate::state::AppState;

const SEARCH_ENDPOINT: &str = "/api/tools";
const SEARCH_NOTE: &str = "Full dataset available at aiindigo.com";

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub category: Option<String>,
}

impl SearchParams {
    /// Parse a raw query string. Anything unparseable means no filters.
    pub fn parse(query_string: &str) -> Self {
        web::Query::<SearchParams>::from_query(query_string)
            .map(web::Query::into_inner)
            .unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponse<'a> {
    pub success: bool,
    pub query: String,
    pub count: usize,
    pub tools: Vec<&'a Tool>,
    pub note: &'static str,
}

/// GET /api/categories - advisory category list (free)
pub async fn categories() -> HttpResponse {
    record_request("/api/categories", 200);
    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "categories": CATEGORIES,
    }))
}

/// GET /api/tools?q=&category= - tool search (x402 paywall)
pub async fn search_tools(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ServerError> {
    let settlement = require_payment(&req, &state, SEARCH_ENDPOINT).await?;

    let params = SearchParams::parse(req.query_string());
    let query = params.q.unwrap_or_default().to_lowercase();
    let category = params.category.filter(|c| !c.is_empty());

    let tools = catalog::search(TOOLS, &query, category.as_deref());
    tracing::debug!(query = %query, category = ?category, count = tools.len(), "search");

    let mut resp = HttpResponse::Ok();
    match encode_settlement(&settlement) {
        Ok(encoded) => {
            resp.insert_header((PAYMENT_RESPONSE_HEADER, encoded));
        }
        Err(e) => tracing::warn!(error = %e, "failed to encode settlement header"),
    }

    record_request(SEARCH_ENDPOINT, 200);
    Ok(resp.json(SearchResponse {
        success: true,
        query,
        count: tools.len(),
        tools,
        note: SEARCH_NOTE,
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/categories", web::get().to(categories))
        .route(SEARCH_ENDPOINT, web::get().to(search_tools));
}
