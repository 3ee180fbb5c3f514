use crate::engine::constants::{
    WEIGHT_ADVANCE, WEIGHT_DAMS, WEIGHT_LOFTS, WEIGHT_MOBILITY, WEIGHT_POTENTIAL, WEIGHT_TACTICAL,
    WEIGHT_THREATS,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // Search Parameters
    /// Search depth in plies. Even values keep the root side the maximizer
    /// at the cutoff; the classic interface offers 2 through 12.
    pub level: u8,

    // Evaluation weights, one per heuristic term
    pub weight_advance: i32,
    pub weight_potential: i32,
    pub weight_mobility: i32,
    pub weight_tactical: i32,
    pub weight_threats: i32,
    pub weight_lofts: i32,
    pub weight_dams: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            level: 8,

            weight_advance: WEIGHT_ADVANCE,
            weight_potential: WEIGHT_POTENTIAL,
            weight_mobility: WEIGHT_MOBILITY,
            weight_tactical: WEIGHT_TACTICAL,
            weight_threats: WEIGHT_THREATS,
            weight_lofts: WEIGHT_LOFTS,
            weight_dams: WEIGHT_DAMS,
        }
    }
}

#[derive(Deserialize)]
struct EngineConfigJson {
    level: Option<u8>,

    weight_advance: Option<f32>,
    weight_potential: Option<f32>,
    weight_mobility: Option<f32>,
    weight_tactical: Option<f32>,
    weight_threats: Option<f32>,
    weight_lofts: Option<f32>,
    weight_dams: Option<f32>,
}

impl EngineConfig {
    /// Loads a tuning file where each weight entry is a scale factor
    /// applied to the default, so a weight set can be described relative to
    /// the stock one. Absent keys keep their defaults.
    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        let json_config: EngineConfigJson = serde_json::from_str(json_str)?;
        let default = Self::default();

        Ok(Self {
            level: json_config.level.unwrap_or(default.level),

            weight_advance: apply_scale(default.weight_advance, json_config.weight_advance),
            weight_potential: apply_scale(default.weight_potential, json_config.weight_potential),
            weight_mobility: apply_scale(default.weight_mobility, json_config.weight_mobility),
            weight_tactical: apply_scale(default.weight_tactical, json_config.weight_tactical),
            weight_threats: apply_scale(default.weight_threats, json_config.weight_threats),
            weight_lofts: apply_scale(default.weight_lofts, json_config.weight_lofts),
            weight_dams: apply_scale(default.weight_dams, json_config.weight_dams),
        })
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn apply_scale(default_val: i32, scale: Option<f32>) -> i32 {
    scale.map_or(default_val, |s| (default_val as f32 * s) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_default() {
        let json = "{}";
        let config = EngineConfig::load_from_json(json).unwrap();
        assert_eq!(config.level, 8);
        assert_eq!(config.weight_advance, WEIGHT_ADVANCE);
        assert_eq!(config.weight_dams, WEIGHT_DAMS);
    }

    #[test]
    fn test_load_config_scaled() {
        let json = r#"{
            "weight_advance": 1.5,
            "weight_threats": 0.5
        }"#;
        let config = EngineConfig::load_from_json(json).unwrap();
        assert_eq!(config.weight_advance, 150);
        assert_eq!(config.weight_threats, 40);
        // Others keep their defaults
        assert_eq!(config.weight_mobility, WEIGHT_MOBILITY);
    }

    #[test]
    fn test_load_config_level() {
        let json = r#"{ "level": 4 }"#;
        let config = EngineConfig::load_from_json(json).unwrap();
        assert_eq!(config.level, 4);
        assert_eq!(config.weight_advance, WEIGHT_ADVANCE);
    }

    #[test]
    fn test_load_config_invalid_json() {
        let json = "{ invalid json }";
        let result = EngineConfig::load_from_json(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_edge_cases() {
        let json = r#"{
            "weight_advance": 0.0,
            "weight_mobility": -1.0
        }"#;
        let config = EngineConfig::load_from_json(json).unwrap();
        assert_eq!(config.weight_advance, 0);
        assert_eq!(config.weight_mobility, -WEIGHT_MOBILITY);
    }

    #[test]
    fn test_deserialize_absolute_config() {
        // Plain serde deserialization takes absolute values, unlike the
        // scaled loader.
        let json = r#"{
            "weight_tactical": 25,
            "level": 6
        }"#;
        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.weight_tactical, 25);
        assert_eq!(config.level, 6);
        assert_eq!(config.weight_lofts, WEIGHT_LOFTS);
    }
}
