//! Values flattened into every rendered page.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::config::CatalogConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SettingsContext {
    #[serde(rename = "ITEMS_PER_PAGE")]
    pub items_per_page: u64,
    #[serde(rename = "TAGS_PER_PAGE")]
    pub tags_per_page: u64,
}

pub fn settings_context(config: &CatalogConfig) -> SettingsContext {
    SettingsContext {
        items_per_page: config.items_per_page,
        tags_per_page: config.tags_per_page,
    }
}

/// A page context ready for the external template renderer.
#[derive(Debug, Serialize)]
pub struct Page<T: Serialize> {
    pub template: &'static str,
    #[serde(flatten)]
    pub settings: SettingsContext,
    #[serde(flatten)]
    pub context: T,
}

impl<T: Serialize> Page<T> {
    pub fn new(template: &'static str, config: &CatalogConfig, context: T) -> Self {
        Self {
            template,
            settings: settings_context(config),
            context,
        }
    }
}

impl<T: Serialize> IntoResponse for Page<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
