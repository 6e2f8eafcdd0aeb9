//! Widget tunables.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest width/height the widget may reach.
pub const DEFAULT_MIN_SIZE: f64 = 20.0;
/// Edge proximity that triggers resize instead of move.
pub const DEFAULT_HIT_MARGIN: f64 = 8.0;
/// Side length of the corner handle squares.
pub const DEFAULT_HANDLE_SIZE: f64 = 10.0;

/// How pointer locations are mapped to resize zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HitPolicy {
    /// Proximity test against each edge with a uniform margin.
    #[default]
    Margin,
    /// Eight fixed handle rectangles along the border. The widget also
    /// paints the handles under this policy, from the same zone geometry.
    Handles,
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("minimum size must be positive, got {0}")]
    NonPositiveMinSize(f64),
    #[error("hit margin must be positive, got {0}")]
    NonPositiveHitMargin(f64),
    #[error("handle size must be positive, got {0}")]
    NonPositiveHandleSize(f64),
}

/// Tunables for hit-testing and size clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Floor for both width and height.
    #[serde(default = "default_min_size")]
    pub min_size: f64,
    /// Edge thickness used by the margin hit policy.
    #[serde(default = "default_hit_margin")]
    pub hit_margin: f64,
    /// Corner square side used by the handle hit policy.
    #[serde(default = "default_handle_size")]
    pub handle_size: f64,
    /// Active hit policy.
    #[serde(default)]
    pub hit_policy: HitPolicy,
}

fn default_min_size() -> f64 {
    DEFAULT_MIN_SIZE
}

fn default_hit_margin() -> f64 {
    DEFAULT_HIT_MARGIN
}

fn default_handle_size() -> f64 {
    DEFAULT_HANDLE_SIZE
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
            hit_margin: DEFAULT_HIT_MARGIN,
            handle_size: DEFAULT_HANDLE_SIZE,
            hit_policy: HitPolicy::default(),
        }
    }
}

impl WidgetConfig {
    /// Check that every tunable is positive and finite.
    ///
    /// The comparisons are written so that NaN fails them too.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_size > 0.0 && self.min_size.is_finite()) {
            return Err(ConfigError::NonPositiveMinSize(self.min_size));
        }
        if !(self.hit_margin > 0.0 && self.hit_margin.is_finite()) {
            return Err(ConfigError::NonPositiveHitMargin(self.hit_margin));
        }
        if !(self.handle_size > 0.0 && self.handle_size.is_finite()) {
            return Err(ConfigError::NonPositiveHandleSize(self.handle_size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = WidgetConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.min_size - 20.0).abs() < f64::EPSILON);
        assert!((config.hit_margin - 8.0).abs() < f64::EPSILON);
        assert_eq!(config.hit_policy, HitPolicy::Margin);
    }

    #[test]
    fn test_rejects_non_positive_values() {
        let config = WidgetConfig {
            min_size: 0.0,
            ..WidgetConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveMinSize(_))
        ));

        let config = WidgetConfig {
            hit_margin: -1.0,
            ..WidgetConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveHitMargin(_))
        ));

        let config = WidgetConfig {
            handle_size: f64::NAN,
            ..WidgetConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveHandleSize(_))
        ));
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let config: WidgetConfig = serde_json::from_str(r#"{"hit_margin": 12.0}"#).unwrap();
        assert!((config.hit_margin - 12.0).abs() < f64::EPSILON);
        assert!((config.min_size - DEFAULT_MIN_SIZE).abs() < f64::EPSILON);
        assert_eq!(config.hit_policy, HitPolicy::Margin);
        assert!(config.validate().is_ok());
    }
}
