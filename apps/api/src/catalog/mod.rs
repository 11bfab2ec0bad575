//! Project Catalog client — the engine's read-only view of project postings.
//!
//! The catalog service owns the data; we fetch the full posting list and
//! treat "unavailable" as "no data yet". `CatalogSource` is the seam for
//! swapping in a fixed in-memory catalog under test.

use async_trait::async_trait;
use reqwest::Client;

use crate::errors::AppError;
use crate::models::posting::ProjectPosting;

#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_postings(&self) -> Result<Vec<ProjectPosting>, AppError>;
}

/// HTTP client for the catalog service's posting list endpoint.
pub struct HttpCatalog {
    http: Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_postings(&self) -> Result<Vec<ProjectPosting>, AppError> {
        let url = format!("{}/projects", self.base_url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Catalog(format!("request to {url} failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::Catalog(format!(
                "catalog returned {} for {url}",
                response.status()
            )));
        }

        response
            .json::<Vec<ProjectPosting>>()
            .await
            .map_err(|e| AppError::Catalog(format!("invalid catalog payload: {e}")))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Fixed catalog for tests: either a posting list or a simulated outage.
    pub struct FixedCatalog {
        pub postings: Vec<ProjectPosting>,
        pub unavailable: bool,
    }

    impl FixedCatalog {
        pub fn with_postings(postings: Vec<ProjectPosting>) -> Self {
            Self {
                postings,
                unavailable: false,
            }
        }

        pub fn down() -> Self {
            Self {
                postings: Vec::new(),
                unavailable: true,
            }
        }
    }

    #[async_trait]
    impl CatalogSource for FixedCatalog {
        async fn fetch_postings(&self) -> Result<Vec<ProjectPosting>, AppError> {
            if self.unavailable {
                return Err(AppError::Catalog("catalog offline".to_string()));
            }
            Ok(self.postings.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let catalog = HttpCatalog::new("http://localhost:9000/".to_string());
        assert_eq!(catalog.base_url, "http://localhost:9000");
    }

    #[test]
    fn test_posting_payload_tolerates_missing_tag_fields() {
        // A posting missing genres/goals/vibes still deserializes, with
        // empty tag sets.
        let raw = r#"{
            "id": "12",
            "creator": "aaaa-bbbb",
            "title": "Lo-fi EP"
        }"#;
        let posting: ProjectPosting = serde_json::from_str(raw).unwrap();
        assert_eq!(posting.creator, "aaaa-bbbb");
        assert!(posting.genres.is_empty());
        assert!(posting.goals.is_empty());
        assert!(posting.vibes.is_empty());
        assert!(posting.external_links.is_empty());
    }

    #[test]
    fn test_posting_payload_full_fields() {
        let raw = r#"{
            "id": "7",
            "creator": "cccc-dddd",
            "title": "Synthwave album",
            "description": "Looking for a vocalist",
            "genres": ["Synthwave"],
            "goals": ["Paid Work"],
            "vibes": ["Dark"],
            "status": "open",
            "externalLinks": [["Bandcamp", "https://example.test"]],
            "createdAt": "2026-01-05T12:00:00Z",
            "updatedAt": "2026-01-06T12:00:00Z"
        }"#;
        let posting: ProjectPosting = serde_json::from_str(raw).unwrap();
        assert_eq!(posting.status.as_deref(), Some("open"));
        assert_eq!(posting.external_links.len(), 1);
        assert!(posting.created_at.is_some());
    }
}
