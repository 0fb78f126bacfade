use serde::{Deserialize, Serialize};

/// A named price range used as a coarse search filter
#[derive(Debug, Clone, Copy)]
pub struct PriceBucket {
    pub label: &'static str,
    pub min: i64,
    pub max: i64,
}

/// Bounds applied when no bucket is chosen or the label is unknown
pub const DEFAULT_PRICE_RANGE: (i64, i64) = (0, 10_000_000);

/// Bucket table matching the search dropdown labels, in display order
pub const PRICE_BUCKETS: &[PriceBucket] = &[
    PriceBucket { label: "Ksh 0 - 50k", min: 0, max: 50_000 },
    PriceBucket { label: "Ksh 50k - 100k", min: 50_000, max: 100_000 },
    PriceBucket { label: "Ksh 101k - 200k", min: 101_000, max: 200_000 },
    PriceBucket { label: "Ksh 201k - 500k", min: 201_000, max: 500_000 },
    PriceBucket { label: "Above 500k", min: 500_000, max: 10_000_000 },
];

/// Resolve a bucket label to its price bounds.
/// Unknown labels fall back to the default wide range.
pub fn price_bounds(label: Option<&str>) -> (i64, i64) {
    label
        .and_then(|l| PRICE_BUCKETS.iter().find(|b| b.label == l))
        .map(|b| (b.min, b.max))
        .unwrap_or(DEFAULT_PRICE_RANGE)
}

/// User-chosen search filters
///
/// All three choices are independent and default to "no selection".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSelection {
    /// Neighbourhood to search in (e.g. Westlands, Karen)
    pub location: Option<String>,
    /// Property type (e.g. Apartment, Villa)
    pub property_type: Option<String>,
    /// Price bucket label, matched against [`PRICE_BUCKETS`]
    pub price_bucket: Option<String>,
}

impl FilterSelection {
    pub fn new(
        location: Option<String>,
        property_type: Option<String>,
        price_bucket: Option<String>,
    ) -> Self {
        Self {
            location,
            property_type,
            price_bucket,
        }
    }

    /// Query parameters in the order the listing service expects.
    /// `location` and `type` appear only when chosen; the price bounds
    /// are always present.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        if let Some(location) = &self.location {
            pairs.push(("location", location.clone()));
        }
        if let Some(kind) = &self.property_type {
            pairs.push(("type", kind.clone()));
        }
        let (min, max) = price_bounds(self.price_bucket.as_deref());
        pairs.push(("price_gte", min.to_string()));
        pairs.push(("price_lte", max.to_string()));
        pairs
    }

    /// Render the selection as a raw query string
    pub fn query_string(&self) -> String {
        self.pairs()
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_only_selection_keeps_price_bounds() {
        let filters = FilterSelection::default();
        assert_eq!(filters.query_string(), "price_gte=0&price_lte=10000000");
    }

    #[test]
    fn test_location_and_bucket() {
        let filters = FilterSelection::new(
            Some("Karen".to_string()),
            None,
            Some("Ksh 101k - 200k".to_string()),
        );
        assert_eq!(
            filters.query_string(),
            "location=Karen&price_gte=101000&price_lte=200000"
        );
    }

    #[test]
    fn test_full_selection_order() {
        let filters = FilterSelection::new(
            Some("Westlands".to_string()),
            Some("Apartment".to_string()),
            Some("Ksh 50k - 100k".to_string()),
        );
        assert_eq!(
            filters.pairs(),
            vec![
                ("location", "Westlands".to_string()),
                ("type", "Apartment".to_string()),
                ("price_gte", "50000".to_string()),
                ("price_lte", "100000".to_string()),
            ]
        );
    }

    #[test]
    fn test_unknown_bucket_falls_back_to_wide_range() {
        let filters = FilterSelection::new(None, None, Some("Ksh 1m+".to_string()));
        assert_eq!(filters.query_string(), "price_gte=0&price_lte=10000000");
    }

    #[test]
    fn test_type_only_selection() {
        let filters = FilterSelection::new(None, Some("Villa".to_string()), None);
        assert_eq!(
            filters.query_string(),
            "type=Villa&price_gte=0&price_lte=10000000"
        );
    }

    #[test]
    fn test_price_bounds_lookup() {
        assert_eq!(price_bounds(Some("Above 500k")), (500_000, 10_000_000));
        assert_eq!(price_bounds(Some("Ksh 0 - 50k")), (0, 50_000));
        assert_eq!(price_bounds(None), DEFAULT_PRICE_RANGE);
    }
}
