//! Game configuration with documented constants
//!
//! All gameplay magic numbers are collected here with explanations of their
//! purpose and how they interact with each other.

/// Configuration for the survival game core
///
/// Changing these values affects gameplay pacing and difficulty.
#[derive(Debug, Clone)]
pub struct GameConfig {
    // === COMBAT ===
    /// Hit-bar ratio at or above which a strike is a critical hit
    ///
    /// The hit bar oscillates 0.0 -> 1.0 -> 0.0 and is clamped to exactly
    /// 1.0 at the top of its swing, so the default threshold of 1.0 is
    /// reachable. Lowering this widens the critical window.
    pub crit_threshold: f32,

    /// Base hit-bar step per tick
    ///
    /// At 0.02 per tick the bar needs 50 ticks for a full upward swing
    /// against a speed-0 enemy.
    pub hit_bar_base_step: f32,

    /// Additional hit-bar step per point of enemy speed
    ///
    /// Faster enemies make the timing window harder to catch.
    pub hit_bar_speed_step: f32,

    /// Reduction of the hit threshold per point of mental bonus
    ///
    /// A survivor with +3 mental bonus hits 0.06 earlier on the bar.
    pub mental_threshold_step: f32,

    /// Ticks of stamina-bar animation per point of damage dealt
    pub damage_anim_ticks: u32,

    /// Ticks played for the terminal win/lose animation
    pub terminal_anim_ticks: u32,

    // === SURVIVORS ===
    /// Fraction of max stamina lost per night without food
    pub starve_rate: f32,

    /// Heal-rate multiplier applied while a survivor is sick
    pub sick_heal_mult: f32,

    /// Stamina cost of a scavenge action
    pub scavenge_cost: i32,

    /// Stamina cost of a craft action
    pub craft_cost: i32,

    /// Probability of rolling each optional attribute slot at spawn
    pub attribute_prob: f64,

    // === NIGHT DEFENSE ===
    /// Maximum number of defense items deployable per night
    pub defense_limit: usize,

    /// Maximum number of survivors assignable to the night watch
    pub defender_limit: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // Combat timing
            crit_threshold: 1.0,
            hit_bar_base_step: 0.02,
            hit_bar_speed_step: 0.005,
            mental_threshold_step: 0.02,
            damage_anim_ticks: 2,
            terminal_anim_ticks: 8,

            // Survivors
            starve_rate: 0.25,
            sick_heal_mult: 0.5,
            scavenge_cost: 1,
            craft_cost: 2,
            attribute_prob: 0.25,

            // Night defense
            defense_limit: 3,
            defender_limit: 4,
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.crit_threshold <= 0.0 || self.crit_threshold > 1.0 {
            return Err(format!(
                "crit_threshold ({}) must be in (0.0, 1.0]",
                self.crit_threshold
            ));
        }

        if self.hit_bar_base_step <= 0.0 {
            return Err("hit_bar_base_step must be positive".into());
        }

        if self.starve_rate < 0.0 || self.starve_rate > 1.0 {
            return Err(format!(
                "starve_rate ({}) must be in [0.0, 1.0]",
                self.starve_rate
            ));
        }

        if self.defender_limit == 0 {
            return Err("defender_limit must allow at least one defender".into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_bad_crit_threshold_rejected() {
        let mut config = GameConfig::default();
        config.crit_threshold = 1.5;
        assert!(config.validate().is_err());

        config.crit_threshold = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_defenders_rejected() {
        let mut config = GameConfig::default();
        config.defender_limit = 0;
        assert!(config.validate().is_err());
    }
}
