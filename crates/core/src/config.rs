use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Budget ratios and sampling knobs used by the recommender and the assembler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Share of the daily allowance a night of lodging may cost.
    pub accommodation_share: f64,
    pub morning_share: f64,
    pub afternoon_share: f64,
    pub evening_share: f64,
    /// Activity allowance, as a share of the budget, when transport and lodging overspend.
    pub remaining_floor_share: f64,
    pub food_share: f64,
    pub miscellaneous_share: f64,
    pub long_haul_probability: f64,
    /// Top-ranked activities a time slot picks from.
    pub candidates_per_slot: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            accommodation_share: 0.35,
            morning_share: 0.3,
            afternoon_share: 0.4,
            evening_share: 0.3,
            remaining_floor_share: 0.2,
            food_share: 0.4,
            miscellaneous_share: 0.1,
            long_haul_probability: 0.7,
            candidates_per_slot: 3,
        }
    }
}

impl PlannerConfig {
    pub fn validate(&self) -> Result<()> {
        let shares = [
            ("accommodation_share", self.accommodation_share),
            ("morning_share", self.morning_share),
            ("afternoon_share", self.afternoon_share),
            ("evening_share", self.evening_share),
            ("remaining_floor_share", self.remaining_floor_share),
            ("food_share", self.food_share),
            ("miscellaneous_share", self.miscellaneous_share),
            ("long_haul_probability", self.long_haul_probability),
        ];

        for (name, value) in shares {
            if !(0.0..=1.0).contains(&value) {
                return Err(PlannerError::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }

        if self.remaining_floor_share <= 0.0 {
            return Err(PlannerError::InvalidConfig(
                "remaining_floor_share must be positive".to_string(),
            ));
        }

        if self.candidates_per_slot == 0 {
            return Err(PlannerError::InvalidConfig(
                "candidates_per_slot must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(PlannerConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: PlannerConfig =
            serde_json::from_str(r#"{ "accommodation_share": 0.5 }"#).unwrap();
        assert_eq!(config.accommodation_share, 0.5);
        assert_eq!(config.candidates_per_slot, 3);
    }

    #[test]
    fn out_of_range_share_is_rejected() {
        let config = PlannerConfig {
            food_share: 1.5,
            ..PlannerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
