//! Nearby hospital search.
//!
//! Builds a maps search URL for hospitals near a named place, and can approximate the caller's
//! place from their public IP address. Opening the URL is left to the caller's surface.

use crate::constants::{IPINFO_TIMEOUT_SECS, IPINFO_URL, MAPS_SEARCH_URL};
use crate::{MediError, MediResult};
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;

/// A maps search for hospitals near `location`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HospitalSearch {
    pub location: String,
    pub url: String,
}

/// Build the hospital search for a user-supplied place name, city or postcode.
pub fn search_near(location: &str) -> MediResult<HospitalSearch> {
    let location = location.trim();
    if location.is_empty() {
        return Err(MediError::InvalidInput("location cannot be empty".into()));
    }

    Ok(HospitalSearch {
        location: location.to_string(),
        url: hospitals_search_url(location)?,
    })
}

/// Maps search URL for "hospitals near {location}", with spaces written as `+`.
pub fn hospitals_search_url(location: &str) -> MediResult<String> {
    let query = format!("hospitals near {}", location.trim())
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("+");

    let mut url =
        Url::parse(MAPS_SEARCH_URL).map_err(|e| MediError::InvalidConfig(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| MediError::InvalidConfig("maps search URL cannot take a path".into()))?
        .pop_if_empty()
        .push(&query);

    Ok(url.into())
}

/// Approximate place of the caller, as reported by an IP geolocation service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub city: String,
    pub region: String,
    pub country: String,
}

impl Location {
    fn from_ip_info(info: IpInfo) -> MediResult<Self> {
        let location = Self {
            city: info.city.trim().to_string(),
            region: info.region.trim().to_string(),
            country: info.country.trim().to_string(),
        };
        if location.city.is_empty() && location.region.is_empty() {
            return Err(MediError::IncompleteLocation);
        }
        Ok(location)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<&str> = [&self.city, &self.region, &self.country]
            .into_iter()
            .map(String::as_str)
            .filter(|p| !p.is_empty())
            .collect();
        f.write_str(&parts.join(", "))
    }
}

#[derive(Debug, Default, Deserialize)]
struct IpInfo {
    #[serde(default)]
    city: String,
    #[serde(default)]
    region: String,
    #[serde(default)]
    country: String,
}

/// Looks up the caller's approximate location from their public IP address.
#[derive(Clone)]
pub struct IpLocator {
    client: reqwest::Client,
    url: String,
}

impl IpLocator {
    pub fn new() -> MediResult<Self> {
        Self::with_url(IPINFO_URL)
    }

    pub fn with_url(url: impl Into<String>) -> MediResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(IPINFO_TIMEOUT_SECS))
            .build()
            .map_err(MediError::HttpClient)?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub async fn locate(&self) -> MediResult<Location> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(MediError::LocationRequest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(MediError::LocationStatus(status.as_u16()));
        }

        let info: IpInfo = response
            .json()
            .await
            .map_err(MediError::LocationResponse)?;

        let location = Location::from_ip_info(info)?;
        tracing::debug!(%location, "approximate location resolved");
        Ok(location)
    }

    /// Locate the caller and build the hospital search for that place.
    pub async fn search_nearby(&self) -> MediResult<HospitalSearch> {
        let location = self.locate().await?;
        search_near(&location.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_joins_words_with_plus() {
        assert_eq!(
            hospitals_search_url("New Delhi").unwrap(),
            "https://www.google.com/maps/search/hospitals+near+New+Delhi"
        );
        assert_eq!(
            hospitals_search_url("  Pune,  Maharashtra ").unwrap(),
            "https://www.google.com/maps/search/hospitals+near+Pune,+Maharashtra"
        );
    }

    #[test]
    fn search_url_escapes_reserved_characters() {
        let url = hospitals_search_url("#3 Main St/Apt?").unwrap();
        assert_eq!(
            url,
            "https://www.google.com/maps/search/hospitals+near+%233+Main+St%2FApt%3F"
        );
    }

    #[test]
    fn search_near_rejects_blank_location() {
        let err = search_near("   ").expect_err("blank location");
        assert!(matches!(err, MediError::InvalidInput(msg) if msg.contains("location")));
    }

    #[test]
    fn search_near_keeps_trimmed_location() {
        let search = search_near(" 560001 ").unwrap();
        assert_eq!(search.location, "560001");
        assert!(search.url.ends_with("hospitals+near+560001"));
    }

    #[test]
    fn location_display_skips_empty_parts() {
        let info: IpInfo =
            serde_json::from_str(r#"{"ip":"1.2.3.4","city":"Mumbai","region":"","country":"IN"}"#)
                .unwrap();
        let location = Location::from_ip_info(info).unwrap();
        assert_eq!(location.to_string(), "Mumbai, IN");
    }

    #[test]
    fn location_without_city_or_region_is_incomplete() {
        let info: IpInfo = serde_json::from_str(r#"{"country":"IN"}"#).unwrap();
        assert!(matches!(
            Location::from_ip_info(info),
            Err(MediError::IncompleteLocation)
        ));
    }

    mod lookup {
        use super::*;
        use crate::test_support::serve;
        use axum::http::StatusCode;
        use axum::routing::get;
        use axum::Router;

        async fn locator_at(path: &str) -> IpLocator {
            let router = Router::new()
                .route(
                    "/ok",
                    get(|| async { r#"{"ip":"1.2.3.4","city":"Pune","region":"Maharashtra","country":"IN"}"# }),
                )
                .route("/country-only", get(|| async { r#"{"country":"IN"}"# }))
                .route(
                    "/failing",
                    get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "rate limited") }),
                )
                .route("/garbled", get(|| async { "not json" }));
            let base = serve(router).await;
            IpLocator::with_url(format!("{base}/{path}")).unwrap()
        }

        #[tokio::test]
        async fn resolved_location_feeds_hospital_search() {
            let locator = locator_at("ok").await;
            assert_eq!(
                locator.locate().await.unwrap(),
                Location {
                    city: "Pune".into(),
                    region: "Maharashtra".into(),
                    country: "IN".into(),
                }
            );
            let search = locator.search_nearby().await.unwrap();
            assert_eq!(search.location, "Pune, Maharashtra, IN");
            assert!(search.url.ends_with("hospitals+near+Pune,+Maharashtra,+IN"));
        }

        #[tokio::test]
        async fn error_status_is_reported_with_code() {
            let err = locator_at("failing").await.locate().await.expect_err("500");
            assert!(matches!(err, MediError::LocationStatus(500)));
        }

        #[tokio::test]
        async fn undecodable_body_is_a_response_error() {
            let err = locator_at("garbled").await.locate().await.expect_err("non-json");
            assert!(matches!(err, MediError::LocationResponse(_)));
        }

        #[tokio::test]
        async fn country_alone_is_incomplete() {
            let err = locator_at("country-only")
                .await
                .search_nearby()
                .await
                .expect_err("no city or region");
            assert!(matches!(err, MediError::IncompleteLocation));
        }
    }
}
