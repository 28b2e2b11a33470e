//! Remote Catalog Loader
//!
//! Read-only, paginated fetch of the pedal and board tables from the
//! hosted PostgREST store. Pages are requested in a stable brand/name
//! order; if the store rejects the ordering the whole fetch restarts once
//! without it, so a collection is never half-populated.

use gloo_net::http::Request;
use thiserror::Error;

use crate::config::{CATALOG_ANON_KEY, CATALOG_PAGE_SIZE, CATALOG_URL};
use crate::models::CatalogItem;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Request(String),
    #[error("catalog returned status {0}")]
    Status(u16),
    #[error("catalog payload could not be decoded: {0}")]
    Decode(String),
}

/// Both remote collections, fetched together at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Library {
    pub pedals: Vec<CatalogItem>,
    pub boards: Vec<CatalogItem>,
}

// PostgREST answers a malformed or unknown `order` column with 400; other
// failure statuses (auth, rate limit, server error) would fail unordered too.
fn order_rejected(err: &CatalogError) -> bool {
    matches!(err, CatalogError::Status(400))
}

fn range_header(page: usize) -> String {
    let start = page * CATALOG_PAGE_SIZE;
    format!("{}-{}", start, start + CATALOG_PAGE_SIZE - 1)
}

async fn fetch_page(
    table: &str,
    page: usize,
    ordered: bool,
) -> Result<Vec<CatalogItem>, CatalogError> {
    let mut url = format!("{CATALOG_URL}/rest/v1/{table}?select=*");
    if ordered {
        url.push_str("&order=brand.asc,name.asc");
    }

    let resp = Request::get(&url)
        .header("apikey", CATALOG_ANON_KEY)
        .header("Authorization", &format!("Bearer {CATALOG_ANON_KEY}"))
        .header("Range-Unit", "items")
        .header("Range", &range_header(page))
        .send()
        .await
        .map_err(|e| CatalogError::Request(e.to_string()))?;

    // 206 is the normal PostgREST answer for a ranged request.
    if !resp.ok() {
        return Err(CatalogError::Status(resp.status()));
    }
    resp.json::<Vec<CatalogItem>>()
        .await
        .map_err(|e| CatalogError::Decode(e.to_string()))
}

async fn fetch_table_with(table: &str, ordered: bool) -> Result<Vec<CatalogItem>, CatalogError> {
    let mut rows = Vec::new();
    for page in 0.. {
        let batch = fetch_page(table, page, ordered).await?;
        let short = batch.len() < CATALOG_PAGE_SIZE;
        rows.extend(batch);
        if short {
            break;
        }
    }
    Ok(rows)
}

/// Fetch every row of one table. An ordering rejection triggers a single
/// unordered retry from the first page.
pub async fn fetch_table(table: &str) -> Result<Vec<CatalogItem>, CatalogError> {
    match fetch_table_with(table, true).await {
        Ok(rows) => Ok(rows),
        Err(err) if order_rejected(&err) => {
            log::warn!("catalog ordering rejected on {table}, retrying unordered");
            fetch_table_with(table, false).await
        }
        Err(err) => Err(err),
    }
}

pub async fn load_library() -> Result<Library, CatalogError> {
    let pedals = fetch_table("pedals").await?;
    let boards = fetch_table("boards").await?;
    log::info!(
        "catalog loaded: {} pedals, {} boards",
        pedals.len(),
        boards.len()
    );
    Ok(Library { pedals, boards })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_header_is_inclusive_per_page() {
        assert_eq!(range_header(0), "0-999");
        assert_eq!(range_header(2), "2000-2999");
    }

    #[test]
    fn only_a_bad_request_triggers_the_unordered_retry() {
        assert!(order_rejected(&CatalogError::Status(400)));
        for err in [
            CatalogError::Status(401),
            CatalogError::Status(416),
            CatalogError::Status(500),
            CatalogError::Request("network".into()),
            CatalogError::Decode("eof".into()),
        ] {
            assert!(!order_rejected(&err), "err = {err}");
        }
    }

    #[test]
    fn errors_carry_context() {
        assert_eq!(
            CatalogError::Status(416).to_string(),
            "catalog returned status 416"
        );
        assert_eq!(
            CatalogError::Decode("eof".into()).to_string(),
            "catalog payload could not be decoded: eof"
        );
    }
}
