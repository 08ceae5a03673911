//! Analysis result types
//!
//! The wire shapes of the remote analysis service:
//! - AnalysisResult: outcome of /analyze/upload and /analyze/url
//! - PriceQuote: outcome of /price/{name}
//! - UrlAnalysisRequest: request body of /analyze/url

use serde::{Deserialize, Serialize};

/// Outcome of analyzing one produce image.
///
/// `price` and `quantity` travel together: both present (price lookup
/// succeeded or the result came with them) or both absent. The only way
/// to add them after construction is [`AnalysisResult::attach_price`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub name: String,

    /// Relative freshness/quality score, 0-100.
    pub quality: f64,

    /// Moisture content, percentage-like, 0-100.
    pub moisture: f64,

    /// Categorical size, e.g. "small" / "medium" / "large".
    pub size: String,

    /// Free-form commentary from the analysis service.
    pub insight: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
}

impl AnalysisResult {
    /// Attaches a price quote. Price and quantity are set as a pair.
    pub fn attach_price(&mut self, quote: PriceQuote) {
        self.price = Some(quote.price);
        self.quantity = Some(quote.quantity);
    }

    pub fn has_price(&self) -> bool {
        self.price.is_some() && self.quantity.is_some()
    }

    /// Display label combining price and quantity, e.g. "₹50 / 500 g".
    /// None when the pair is absent.
    pub fn price_label(&self) -> Option<String> {
        match (&self.price, &self.quantity) {
            (Some(price), Some(quantity)) => Some(format!("{} / {}", price, quantity)),
            _ => None,
        }
    }
}

/// Response of the price lookup endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub price: String,
    pub quantity: String,
}

/// Request body of analyze-by-URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlAnalysisRequest {
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_deserialize_with_price() {
        let json = r#"{
            "name": "Carrot",
            "quality": 90,
            "moisture": 70,
            "size": "medium",
            "insight": "Firm and vivid in color.",
            "price": "₹50",
            "quantity": "500 g"
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.name, "Carrot");
        assert_eq!(result.quality, 90.0);
        assert_eq!(result.moisture, 70.0);
        assert_eq!(result.size, "medium");
        assert_eq!(result.price.as_deref(), Some("₹50"));
        assert_eq!(result.quantity.as_deref(), Some("500 g"));
    }

    #[test]
    fn test_result_deserialize_without_price() {
        let json = r#"{
            "name": "Spinach",
            "quality": 75,
            "moisture": 88,
            "size": "small",
            "insight": "Leaves slightly wilted at the edges."
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert!(result.price.is_none());
        assert!(result.quantity.is_none());
        assert!(!result.has_price());
    }

    #[test]
    fn test_result_serialize_omits_absent_price() {
        let result = AnalysisResult {
            name: "Tomato".to_string(),
            quality: 80.0,
            moisture: 90.0,
            size: "medium".to_string(),
            insight: "Ripe.".to_string(),
            price: None,
            quantity: None,
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("price"));
        assert!(!json.contains("quantity"));
    }

    #[test]
    fn test_attach_price_sets_pair() {
        let mut result = AnalysisResult {
            name: "Potato".to_string(),
            ..Default::default()
        };
        assert!(!result.has_price());

        result.attach_price(PriceQuote {
            price: "₹30".to_string(),
            quantity: "1 kg".to_string(),
        });

        assert!(result.has_price());
        assert_eq!(result.price_label().unwrap(), "₹30 / 1 kg");
    }

    #[test]
    fn test_price_label_absent() {
        let result = AnalysisResult::default();
        assert_eq!(result.price_label(), None);
    }

    #[test]
    fn test_url_request_body_shape() {
        let request = UrlAnalysisRequest {
            image_url: "https://example.com/carrot.jpg".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"image_url":"https://example.com/carrot.jpg"}"#);
    }
}
