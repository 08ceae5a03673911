//! Degraded-mode catalog and fallback policy application
//!
//! Fixed, plausible produce results served when the client runs with
//! `FallbackPolicy::Degraded` and the remote service fails. Every entry
//! carries both price and quantity so the pairing invariant holds on
//! fallback paths too. The policy decision itself lives here as pure
//! functions; the web client only adds the transport and the logging.

use crate::config::FallbackPolicy;
use crate::error::Result;
use crate::types::{AnalysisResult, PriceQuote};

fn entry(
    name: &str,
    quality: f64,
    moisture: f64,
    size: &str,
    insight: &str,
    price: &str,
    quantity: &str,
) -> AnalysisResult {
    AnalysisResult {
        name: name.to_string(),
        quality,
        moisture,
        size: size.to_string(),
        insight: insight.to_string(),
        price: Some(price.to_string()),
        quantity: Some(quantity.to_string()),
    }
}

/// The full fallback catalog.
pub fn entries() -> Vec<AnalysisResult> {
    vec![
        entry(
            "Tomato",
            85.0,
            92.0,
            "medium",
            "Deep red with taut skin; ripe and ready for immediate use.",
            "₹40",
            "1 kg",
        ),
        entry(
            "Carrot",
            90.0,
            70.0,
            "medium",
            "Firm texture and vivid color indicate excellent freshness.",
            "₹50",
            "500 g",
        ),
        entry(
            "Spinach",
            78.0,
            88.0,
            "small",
            "Leaves are mostly crisp with slight wilting at the edges.",
            "₹30",
            "250 g",
        ),
        entry(
            "Potato",
            82.0,
            65.0,
            "large",
            "Smooth skin, no visible sprouting; stores well.",
            "₹35",
            "1 kg",
        ),
        entry(
            "Apple",
            88.0,
            84.0,
            "medium",
            "Glossy surface and even coloring; minor surface blemishes only.",
            "₹120",
            "1 kg",
        ),
    ]
}

/// Picks one catalog entry by seed. Any u64 maps into the catalog, so
/// callers can pass a clock reading for a pseudo-random pick.
pub fn sample(seed: u64) -> AnalysisResult {
    let all = entries();
    let index = (seed % all.len() as u64) as usize;
    all[index].clone()
}

/// Fixed quote served when the price lookup itself is degraded.
pub fn fallback_quote() -> PriceQuote {
    PriceQuote {
        price: "₹110".to_string(),
        quantity: "1 kg".to_string(),
    }
}

/// Applies the fallback policy to a finished analysis. Strict passes the
/// outcome through untouched; degraded replaces any failure with a
/// catalog sample, so a degraded analysis never rejects.
pub fn apply_analysis_fallback(
    policy: FallbackPolicy,
    outcome: Result<AnalysisResult>,
    seed: u64,
) -> Result<AnalysisResult> {
    match (policy, outcome) {
        (FallbackPolicy::Degraded, Err(_)) => Ok(sample(seed)),
        (_, outcome) => outcome,
    }
}

/// Same decision for the price lookup: degraded failures resolve with
/// the fixed quote.
pub fn apply_price_fallback(
    policy: FallbackPolicy,
    outcome: Result<PriceQuote>,
) -> Result<PriceQuote> {
    match (policy, outcome) {
        (FallbackPolicy::Degraded, Err(_)) => Ok(fallback_quote()),
        (_, outcome) => outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[test]
    fn test_every_entry_has_price_pair() {
        for result in entries() {
            assert!(result.has_price(), "{} lacks a price pair", result.name);
            assert!(result.price_label().is_some());
        }
    }

    #[test]
    fn test_every_entry_scores_in_range() {
        for result in entries() {
            assert!(!result.name.is_empty());
            assert!((0.0..=100.0).contains(&result.quality));
            assert!((0.0..=100.0).contains(&result.moisture));
            assert!(!result.insight.is_empty());
        }
    }

    #[test]
    fn test_sample_wraps_by_seed() {
        let all = entries();
        let count = all.len() as u64;
        assert_eq!(sample(0), all[0]);
        assert_eq!(sample(count), all[0]);
        assert_eq!(sample(count + 2), all[2]);
    }

    #[test]
    fn test_fallback_quote() {
        let quote = fallback_quote();
        assert_eq!(quote.price, "₹110");
        assert_eq!(quote.quantity, "1 kg");
    }

    #[test]
    fn test_degraded_analysis_resolves_on_failure() {
        let failed = Err(ApiError::Network("service unreachable".to_string()));
        let result = apply_analysis_fallback(FallbackPolicy::Degraded, failed, 1).unwrap();
        assert!(entries().contains(&result));
        assert!(result.has_price());
    }

    #[test]
    fn test_degraded_analysis_keeps_real_success() {
        let real = AnalysisResult {
            name: "Okra".to_string(),
            ..Default::default()
        };
        let outcome = apply_analysis_fallback(FallbackPolicy::Degraded, Ok(real.clone()), 7);
        assert_eq!(outcome, Ok(real));
    }

    #[test]
    fn test_strict_analysis_passes_failure_through() {
        let failed: Result<AnalysisResult> = Err(ApiError::Http { status: 500 });
        assert_eq!(
            apply_analysis_fallback(FallbackPolicy::Strict, failed, 1),
            Err(ApiError::Http { status: 500 })
        );
    }

    #[test]
    fn test_degraded_price_lookup_resolves_fixed_quote() {
        let failed: Result<PriceQuote> = Err(ApiError::Network("service unreachable".to_string()));
        let quote = apply_price_fallback(FallbackPolicy::Degraded, failed).unwrap();
        assert_eq!(quote.price, "₹110");
        assert_eq!(quote.quantity, "1 kg");
    }

    #[test]
    fn test_strict_price_lookup_passes_failure_through() {
        let failed: Result<PriceQuote> = Err(ApiError::Http { status: 502 });
        assert_eq!(
            apply_price_fallback(FallbackPolicy::Strict, failed),
            Err(ApiError::Http { status: 502 })
        );
    }
}
