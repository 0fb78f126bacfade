use serde::{Deserialize, Deserializer, Serialize};

/// Listing agent contact shown on the detail view
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub phone: String,
}

/// Core house listing model, matching the listing service's JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct House {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    /// Free-form size description, e.g. "4200sqft"
    #[serde(default)]
    pub surface: String,
    /// Monthly rent in Ksh
    #[serde(deserialize_with = "lenient_price")]
    pub price: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, rename = "imageLg")]
    pub image_lg: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub agent: Agent,
}

/// Fields accepted by the listing service for create and update.
/// `None` fields are left out of the payload so a PATCH merges cleanly
/// with the stored record.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HouseDraft {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "imageLg", skip_serializing_if = "Option::is_none")]
    pub image_lg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<Agent>,
}

/// Older records store the price as a formatted string ("Ksh 85,000").
/// Read those as their numeric value, and anything hopeless as zero.
fn lenient_price<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        serde_json::Value::String(s) => {
            let digits: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
            digits.parse().unwrap_or(0)
        }
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "id": 3,
            "type": "Apartment",
            "location": "Westlands",
            "bedrooms": 3,
            "bathrooms": 2,
            "surface": "4200sqft",
            "price": 120000,
            "description": "Bright corner unit.",
            "image": "https://img.example/3.jpg",
            "imageLg": "https://img.example/3-lg.jpg",
            "gallery": ["https://img.example/3a.jpg"],
            "agent": {"name": "Wanjiru", "image": "", "phone": "0712 000000"}
        }"#;
        let house: House = serde_json::from_str(json).unwrap();
        assert_eq!(house.kind, "Apartment");
        assert_eq!(house.price, 120_000);
        assert_eq!(house.image_lg, "https://img.example/3-lg.jpg");
        assert_eq!(house.gallery.len(), 1);
    }

    #[test]
    fn test_deserialize_sparse_record() {
        let json = r#"{"id": 7, "type": "Villa", "location": "Karen", "price": 450000}"#;
        let house: House = serde_json::from_str(json).unwrap();
        assert_eq!(house.bedrooms, 0);
        assert!(house.gallery.is_empty());
        assert_eq!(house.agent.name, "");
    }

    #[test]
    fn test_formatted_price_string_is_read_numerically() {
        let json = r#"{"id": 9, "type": "Bungalow", "location": "Langata", "price": "Ksh 85,000"}"#;
        let house: House = serde_json::from_str(json).unwrap();
        assert_eq!(house.price, 85_000);
    }

    #[test]
    fn test_unparseable_price_reads_as_zero() {
        let json = r#"{"id": 9, "type": "Bungalow", "location": "Langata", "price": "call us"}"#;
        let house: House = serde_json::from_str(json).unwrap();
        assert_eq!(house.price, 0);
    }

    #[test]
    fn test_draft_skips_unset_fields_and_renames_type() {
        let draft = HouseDraft {
            kind: Some("Townhouse".to_string()),
            location: Some("Kilimani".to_string()),
            price: Some(95_000),
            ..Default::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["type"], "Townhouse");
        assert!(json.get("bedrooms").is_none());
        assert!(json.get("imageLg").is_none());
    }
}
