//! Chart configuration, loaded from JSON.

use std::path::Path;

use kundli_vedic::dasha::{BalanceSubdivision, DEFAULT_SPAN_YEARS, DashaOptions, MAX_DASHA_DEPTH};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// A named place the resolver can look up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceEntry {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Zone offset applied to births at this place.
    pub utc_offset_hours: f64,
}

/// Configuration for chart operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Elapsed years the Mahadasha sequence must cover.
    pub dasha_span_years: f64,
    /// 1 = Mahadasha only, 2 = with Bhuktis, 3 = with Pratyantars.
    pub dasha_depth: u8,
    pub balance_subdivision: BalanceSubdivision,
    pub places: Vec<PlaceEntry>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            dasha_span_years: DEFAULT_SPAN_YEARS,
            dasha_depth: MAX_DASHA_DEPTH,
            balance_subdivision: BalanceSubdivision::Proportional,
            places: Vec::new(),
        }
    }
}

impl ChartConfig {
    pub fn validate(&self) -> Result<(), ChartError> {
        if !self.dasha_span_years.is_finite() || self.dasha_span_years <= 0.0 {
            return Err(ChartError::Config(
                "dasha_span_years must be finite and positive".into(),
            ));
        }
        if self.dasha_depth == 0 || self.dasha_depth > MAX_DASHA_DEPTH {
            return Err(ChartError::Config("dasha_depth must be in 1..=3".into()));
        }
        for place in &self.places {
            if place.name.trim().is_empty() {
                return Err(ChartError::Config("place name must not be empty".into()));
            }
            if !place.latitude.is_finite() || !(-90.0..=90.0).contains(&place.latitude) {
                return Err(ChartError::Config(format!(
                    "place {}: latitude out of range",
                    place.name
                )));
            }
            if !place.longitude.is_finite() || !(-180.0..=180.0).contains(&place.longitude) {
                return Err(ChartError::Config(format!(
                    "place {}: longitude out of range",
                    place.name
                )));
            }
            if !place.utc_offset_hours.is_finite() || place.utc_offset_hours.abs() > 14.0 {
                return Err(ChartError::Config(format!(
                    "place {}: utc offset out of range",
                    place.name
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ChartError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ChartError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file. A missing file yields the defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ChartError> {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                debug!("loading chart config from {}", path.display());
                Self::from_json_str(&text)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("config {} not found; using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(ChartError::Config(format!("{}: {e}", path.display()))),
        }
    }

    /// Dasha generation options derived from this config.
    pub fn dasha_options(&self) -> DashaOptions {
        DashaOptions {
            span_years: self.dasha_span_years,
            depth: self.dasha_depth,
            subdivision: self.balance_subdivision,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let c = ChartConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.dasha_depth, 3);
        assert_eq!(c.dasha_options(), DashaOptions::default());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let c = ChartConfig::from_json_str(r#"{"balance_subdivision": "elapsed_clipped"}"#)
            .unwrap();
        assert_eq!(c.balance_subdivision, BalanceSubdivision::ElapsedClipped);
        assert_eq!(c.dasha_span_years, 120.0);
    }

    #[test]
    fn places_parse() {
        let c = ChartConfig::from_json_str(
            r#"{"places": [{"name": "Chennai", "latitude": 13.08, "longitude": 80.27, "utc_offset_hours": 5.5}]}"#,
        )
        .unwrap();
        assert_eq!(c.places.len(), 1);
        assert_eq!(c.places[0].name, "Chennai");
    }

    #[test]
    fn rejects_bad_depth() {
        let err = ChartConfig::from_json_str(r#"{"dasha_depth": 5}"#).unwrap_err();
        assert!(matches!(err, ChartError::Config(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            ChartConfig::from_json_str("{not json"),
            Err(ChartError::Config(_))
        ));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let c = ChartConfig::from_json_file(Path::new("/nonexistent/kundli-config.json")).unwrap();
        assert_eq!(c, ChartConfig::default());
    }
}
