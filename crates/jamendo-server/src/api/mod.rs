pub mod context;
pub mod detail;
pub mod listing;
pub mod lookup;

use std::collections::HashMap;

use axum::{http::Method, response::Response};

use crate::error::ApiError;
use crate::feeds::FeedRoute;
use crate::state::AppState;

pub use detail::ShowKind;
pub use listing::ListKind;

/// Everything a view needs from the incoming request.
#[derive(Debug, Clone)]
pub struct CatalogRequest {
    pub method: Method,
    /// Named segments captured by the route.
    pub params: HashMap<String, String>,
    pub query: HashMap<String, String>,
}

impl CatalogRequest {
    pub fn get() -> Self {
        Self {
            method: Method::GET,
            params: HashMap::new(),
            query: HashMap::new(),
        }
    }

    pub fn with_param(mut self, key: &str, value: &str) -> Self {
        self.params.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.insert(key.to_string(), value.to_string());
        self
    }
}

/// A page or feed bound to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    List(ListKind),
    Show(ShowKind),
    Feed(FeedRoute),
}

impl View {
    pub async fn handle(
        &self,
        state: &AppState,
        request: CatalogRequest,
    ) -> Result<Response, ApiError> {
        if request.method != Method::GET && request.method != Method::HEAD {
            return Err(ApiError::MethodNotAllowed);
        }

        tracing::debug!(view = ?self, params = ?request.params, "dispatching catalog request");

        match self {
            View::List(kind) => kind.list(state, &request.query).await,
            View::Show(kind) => kind.show(state, &request.params).await,
            View::Feed(route) => route.serve(state, &request.params).await,
        }
    }
}
