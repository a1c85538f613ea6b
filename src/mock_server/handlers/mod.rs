//! HTTP request handlers for the mock server.

pub mod artists;
pub mod assets;
pub mod auth;
pub mod labels;
pub mod people;
pub mod products;

pub use artists::*;
pub use assets::*;
pub use auth::*;
pub use labels::*;
pub use people::*;
pub use products::*;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Build a FUGA-style 404 envelope.
pub(crate) fn not_found(kind: &str, id: u64) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": {
                "code": "NOT_FOUND",
                "message": format!("No {kind} found with id {id}")
            }
        })),
    )
        .into_response()
}

/// Slice a full result set down to the requested page.
pub(crate) fn paginate<T: Clone>(items: Vec<&T>, page: u32, page_size: u32) -> (Vec<T>, u64) {
    let total = items.len() as u64;
    let start = (page as usize).saturating_mul(page_size as usize);
    let end = (start + page_size as usize).min(items.len());

    let page_items = if start < items.len() {
        items[start..end].iter().map(|i| (*i).clone()).collect()
    } else {
        vec![]
    };

    (page_items, total)
}

/// Query parameters shared by all list endpoints.
#[derive(Debug, Default, serde::Deserialize)]
pub(crate) struct ListQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub name: Option<String>,
}

impl ListQuery {
    pub(crate) fn page(&self) -> u32 {
        self.page.unwrap_or(0)
    }

    pub(crate) fn page_size(&self) -> u32 {
        self.page_size.unwrap_or(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_slices_pages() {
        let items: Vec<u32> = (0..25).collect();
        let refs: Vec<&u32> = items.iter().collect();

        let (page0, total) = paginate(refs.clone(), 0, 10);
        assert_eq!(total, 25);
        assert_eq!(page0.len(), 10);
        assert_eq!(page0[0], 0);

        let (page2, _) = paginate(refs.clone(), 2, 10);
        assert_eq!(page2.len(), 5);
        assert_eq!(page2[0], 20);

        let (beyond, _) = paginate(refs, 5, 10);
        assert!(beyond.is_empty());
    }
}
