use crate::error::ApiError;
use crate::models::House;
use crate::search::FilterSelection;
use async_trait::async_trait;

/// Common trait for listing sources
/// Lets the browsing commands run against the HTTP service or a test double
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch the listings matching the given filters
    async fn search(&self, filters: &FilterSelection) -> Result<Vec<House>, ApiError>;

    /// Get the name of the backing source
    fn source_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::price_bounds;

    /// Fixed listings filtered the way the HTTP service filters
    struct CannedSource {
        houses: Vec<House>,
    }

    #[async_trait]
    impl ListingSource for CannedSource {
        async fn search(&self, filters: &FilterSelection) -> Result<Vec<House>, ApiError> {
            let (min, max) = price_bounds(filters.price_bucket.as_deref());
            Ok(self
                .houses
                .iter()
                .filter(|h| filters.location.as_deref().map_or(true, |l| h.location == l))
                .filter(|h| filters.property_type.as_deref().map_or(true, |t| h.kind == t))
                .filter(|h| h.price >= min && h.price <= max)
                .cloned()
                .collect())
        }

        fn source_name(&self) -> &'static str {
            "canned"
        }
    }

    fn house(id: u32, location: &str, kind: &str, price: i64) -> House {
        serde_json::from_value(serde_json::json!({
            "id": id, "type": kind, "location": location, "price": price
        }))
        .unwrap()
    }

    fn canned() -> Box<dyn ListingSource> {
        Box::new(CannedSource {
            houses: vec![
                house(1, "Karen", "Villa", 180_000),
                house(2, "Kasarani", "Apartment", 35_000),
                house(3, "Karen", "Townhouse", 750_000),
            ],
        })
    }

    #[tokio::test]
    async fn test_filters_narrow_the_results() {
        let filters = FilterSelection::new(
            Some("Karen".to_string()),
            None,
            Some("Ksh 101k - 200k".to_string()),
        );
        let found = canned().search(&filters).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[tokio::test]
    async fn test_default_selection_matches_everything() {
        let found = canned().search(&FilterSelection::default()).await.unwrap();
        assert_eq!(found.len(), 3);
    }
}
