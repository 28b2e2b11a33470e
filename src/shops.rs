//! Buy-Online Link Resolver
//!
//! Maps a detected country to a list of storefronts and builds per-item
//! outbound URLs. Discontinued items only resolve to a Reverb marketplace
//! search, whatever the jurisdiction.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;

use crate::config::GEO_URL;
use crate::models::CatalogItem;

/// Initial jurisdiction before (or without) a geolocation answer.
pub const DEFAULT_COUNTRY: &str = "FR";
/// Jurisdiction used when the geolocation call fails outright.
pub const FALLBACK_COUNTRY: &str = "DE";

const AMERICAS: &[&str] = &["US", "CA", "MX", "BR", "AR", "CL", "CO", "PE"];

// encodeURIComponent-style set for the marketplace query string.
const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shop {
    Sweetwater,
    Woodbrass,
    Thomann,
    Reverb,
}

impl Shop {
    pub fn label(&self) -> &'static str {
        match self {
            Shop::Sweetwater => "Sweetwater",
            Shop::Woodbrass => "Woodbrass",
            Shop::Thomann => "Thomann",
            Shop::Reverb => "Reverb",
        }
    }
}

/// A resolved storefront link for the details panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ShopLink {
    pub shop: Shop,
    pub url: String,
}

fn shops_for_country(country: &str) -> &'static [Shop] {
    let c = country.to_uppercase();
    if AMERICAS.contains(&c.as_str()) {
        &[Shop::Sweetwater]
    } else if c == "FR" {
        &[Shop::Woodbrass, Shop::Thomann]
    } else {
        // NL/DE/ES/IT get their own Thomann domain; everyone else thomann.de.
        &[Shop::Thomann]
    }
}

fn thomann_domain(country: &str) -> &'static str {
    match country.to_uppercase().as_str() {
        "FR" => "thomann.fr",
        "NL" => "thomann.nl",
        "ES" => "thomann.es",
        "IT" => "thomann.it",
        _ => "thomann.de",
    }
}

fn reverb_search(item: &CatalogItem) -> ShopLink {
    let query = format!("{} {}", item.brand, item.name);
    ShopLink {
        shop: Shop::Reverb,
        url: format!(
            "https://reverb.com/marketplace?query={}",
            utf8_percent_encode(&query, QUERY)
        ),
    }
}

/// Resolve the storefront links for an item in the given jurisdiction.
/// Stores without a product reference on the item are dropped.
pub fn shop_links(item: &CatalogItem, country: &str) -> Vec<ShopLink> {
    if item.is_discontinued() {
        return vec![reverb_search(item)];
    }

    shops_for_country(country)
        .iter()
        .filter_map(|shop| match shop {
            Shop::Sweetwater => item.sweetwater.clone().map(|url| ShopLink {
                shop: Shop::Sweetwater,
                url,
            }),
            Shop::Woodbrass => item.woodbrass.clone().map(|url| ShopLink {
                shop: Shop::Woodbrass,
                url,
            }),
            Shop::Thomann => item.thomann.as_ref().map(|slug| ShopLink {
                shop: Shop::Thomann,
                url: format!("https://www.{}/{}", thomann_domain(country), slug),
            }),
            Shop::Reverb => Some(reverb_search(item)),
        })
        .collect()
}

#[derive(Deserialize)]
struct GeoReply {
    country: Option<String>,
}

/// One best-effort geolocation call. Never surfaces an error: a missing
/// country defaults to [`DEFAULT_COUNTRY`], a failed request to
/// [`FALLBACK_COUNTRY`].
pub async fn detect_country() -> String {
    let resp = match gloo_net::http::Request::get(GEO_URL).send().await {
        Ok(resp) if resp.ok() => resp,
        _ => return FALLBACK_COUNTRY.to_string(),
    };
    resp.json::<GeoReply>()
        .await
        .ok()
        .and_then(|geo| geo.country)
        .unwrap_or_else(|| DEFAULT_COUNTRY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> CatalogItem {
        CatalogItem {
            brand: "BrownSound".to_string(),
            name: "Fuzz Master".to_string(),
            status: Some("Active".to_string()),
            sweetwater: Some("https://www.sweetwater.com/fuzz-master".to_string()),
            woodbrass: Some("https://www.woodbrass.com/fuzz-master".to_string()),
            thomann: Some("brownsound_fuzz_master.htm".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn americas_resolve_to_sweetwater() {
        let links = shop_links(&item(), "US");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].shop, Shop::Sweetwater);
    }

    #[test]
    fn france_gets_woodbrass_and_local_thomann() {
        let links = shop_links(&item(), "FR");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].shop, Shop::Woodbrass);
        assert_eq!(links[1].shop, Shop::Thomann);
        assert!(links[1].url.starts_with("https://www.thomann.fr/"));
    }

    #[test]
    fn unknown_country_defaults_to_german_thomann() {
        let links = shop_links(&item(), "JP");
        assert_eq!(links.len(), 1);
        assert!(links[0].url.starts_with("https://www.thomann.de/"));
    }

    #[test]
    fn discontinued_items_only_get_reverb() {
        let mut discontinued = item();
        discontinued.status = Some("Discontinued".to_string());
        let links = shop_links(&discontinued, "US");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].shop, Shop::Reverb);
        assert_eq!(
            links[0].url,
            "https://reverb.com/marketplace?query=BrownSound%20Fuzz%20Master"
        );
    }

    #[test]
    fn missing_references_drop_the_store() {
        let mut sparse = item();
        sparse.woodbrass = None;
        let links = shop_links(&sparse, "FR");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].shop, Shop::Thomann);
    }
}
