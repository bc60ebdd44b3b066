use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How long a recorded contact point stays usable as the origin of the
/// fallback ground ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ContactFallback {
    /// Any contact ever recorded is used, however old.
    #[default]
    Unbounded,
    /// Only contacts recorded within the last `n` fixed steps are used.
    WithinSteps(u32),
    /// The fallback ray is never cast.
    Disabled,
}

impl ContactFallback {
    pub fn allows(self, age_steps: u32) -> bool {
        match self {
            Self::Unbounded => true,
            Self::WithinSteps(limit) => age_steps <= limit,
            Self::Disabled => false,
        }
    }
}

/// Collision volume of the actor as seen by the physics backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterDimensions {
    pub height: f32,
    pub radius: f32,
    /// Degrees from horizontal.
    pub slope_limit: f32,
    pub step_offset: f32,
}

impl Default for CharacterDimensions {
    fn default() -> Self {
        Self {
            height: 2.0,
            radius: 0.5,
            slope_limit: 45.0,
            step_offset: 0.3,
        }
    }
}

impl CharacterDimensions {
    pub fn half_height(&self) -> f32 {
        self.height * 0.5
    }

    /// Length of the straight-down ground ray cast from the actor's center.
    pub fn ground_ray_distance(&self) -> f32 {
        self.height * 0.5 + self.radius
    }

    /// Steepest ground angle that is not classified as steep.
    pub fn slide_limit(&self) -> f32 {
        self.slope_limit - 0.1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrifterConfig {
    pub walk_speed: f32,
    pub run_speed: f32,
    pub enable_running: bool,
    pub limit_diagonal_speed: bool,

    pub jump_speed: f32,
    pub gravity: f32,

    /// Distance the actor may fall before a fall damage event is raised.
    /// Set to `f32::INFINITY` to disable.
    pub falling_damage_threshold: f32,

    pub slide_when_over_slope_limit: bool,
    pub slide_on_tagged_objects: bool,
    pub slide_speed: f32,

    pub air_control: bool,

    /// Downward bias keeping the actor glued to descending slopes.
    pub anti_bump_factor: f32,
    /// Grounded fixed steps with jump released before another jump is allowed.
    pub anti_bunny_hop_factor: u32,

    pub climb_speed: f32,

    pub back_step_distance: f32,
    pub back_step_duration: f32,
    pub wall_jump_up_force: f32,
    /// Reserved for a directional wall jump; the back step does not read it.
    pub wall_jump_duration: f32,

    pub contact_fallback: ContactFallback,

    pub body: CharacterDimensions,
}

impl Default for DrifterConfig {
    fn default() -> Self {
        Self {
            walk_speed: 6.0,
            run_speed: 10.0,
            enable_running: true,
            limit_diagonal_speed: true,

            jump_speed: 4.0,
            gravity: 10.0,

            falling_damage_threshold: 10.0,

            slide_when_over_slope_limit: false,
            slide_on_tagged_objects: false,
            slide_speed: 5.0,

            air_control: true,

            anti_bump_factor: 0.75,
            anti_bunny_hop_factor: 1,

            climb_speed: 3.0,

            back_step_distance: 1.5,
            back_step_duration: 0.3,
            wall_jump_up_force: 5.0,
            wall_jump_duration: 0.3,

            contact_fallback: ContactFallback::Unbounded,

            body: CharacterDimensions::default(),
        }
    }
}

impl DrifterConfig {
    /// Parses a RON document; missing fields fall back to the defaults.
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("walk_speed", self.walk_speed)?;
        non_negative("run_speed", self.run_speed)?;
        non_negative("jump_speed", self.jump_speed)?;
        non_negative("gravity", self.gravity)?;
        non_negative("slide_speed", self.slide_speed)?;
        non_negative("anti_bump_factor", self.anti_bump_factor)?;
        non_negative("climb_speed", self.climb_speed)?;
        non_negative("back_step_distance", self.back_step_distance)?;
        non_negative("wall_jump_up_force", self.wall_jump_up_force)?;
        non_negative("wall_jump_duration", self.wall_jump_duration)?;
        positive("back_step_duration", self.back_step_duration)?;

        if self.falling_damage_threshold.is_nan() || self.falling_damage_threshold < 0.0 {
            return Err(ConfigError::invalid(
                "falling_damage_threshold",
                "must be zero, positive or infinite",
            ));
        }

        positive("body.height", self.body.height)?;
        positive("body.radius", self.body.radius)?;
        non_negative("body.step_offset", self.body.step_offset)?;

        if self.body.radius * 2.0 > self.body.height {
            return Err(ConfigError::invalid(
                "body.radius",
                "capsule diameter exceeds its height",
            ));
        }

        if !(self.body.slope_limit > 0.0 && self.body.slope_limit < 90.0) {
            return Err(ConfigError::invalid(
                "body.slope_limit",
                "must lie strictly between 0 and 90 degrees",
            ));
        }

        Ok(())
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            field,
            "must be finite and not negative",
        ))
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, "must be finite and positive"))
    }
}
