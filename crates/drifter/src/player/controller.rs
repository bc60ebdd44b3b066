use glam::{Vec2, Vec3};
use log::{debug, info, warn};

use crate::event::{ClimbExit, DrifterEvent};
use crate::physics::{CharacterPhysics, MoveOutcome, RayHit};
use crate::surface::{SurfaceId, SurfaceRegistry, TriggerVolume};

use super::{
    BackStep, DrifterConfig, DrifterState, MotionState, MoveInput, can_climb, climb_velocity,
};

/// Scale applied to both axes when moving diagonally, 1/sqrt(2).
const DIAGONAL_FACTOR: f32 = 0.7071;

/// First-person motion controller: grounded and airborne locomotion, slope
/// sliding, fall tracking, wall climbing and the back step off a wall.
pub struct Drifter {
    config: DrifterConfig,
    state: DrifterState,
    events: Vec<DrifterEvent>,
}

impl Default for Drifter {
    fn default() -> Self {
        Self::new(DrifterConfig::default())
    }
}

impl Drifter {
    pub fn new(config: DrifterConfig) -> Self {
        let state = DrifterState::new(&config);
        Self {
            config,
            state,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &DrifterConfig {
        &self.config
    }

    pub fn state(&self) -> &DrifterState {
        &self.state
    }

    pub fn motion(&self) -> MotionState {
        self.state.motion
    }

    pub fn climb_surface(&self) -> Option<SurfaceId> {
        self.state.motion.climb_surface()
    }

    pub fn is_grounded(&self) -> bool {
        self.state.grounded
    }

    pub fn move_direction(&self) -> Vec3 {
        self.state.move_direction
    }

    pub fn drain_events(&mut self) -> Vec<DrifterEvent> {
        std::mem::take(&mut self.events)
    }

    /// One fixed simulation step.
    pub fn fixed_update(
        &mut self,
        input: &MoveInput,
        physics: &mut impl CharacterPhysics,
        surfaces: &SurfaceRegistry,
        dt: f32,
    ) {
        let outcome = match self.state.motion {
            MotionState::Climbing { surface } => {
                self.climb_step(surface, input, physics, surfaces, dt)
            }
            _ => Some(self.locomotion_step(input, physics, dt)),
        };

        self.state.contact_age = self.state.contact_age.saturating_add(1);
        if let Some(point) = outcome.and_then(|o| o.contact) {
            self.state.record_contact(point);
        }
    }

    /// Once per rendered frame: jump-off detection while climbing and the
    /// back step tick.
    pub fn frame_update(
        &mut self,
        input: &MoveInput,
        physics: &mut impl CharacterPhysics,
        frame_dt: f32,
    ) {
        if input.jump_pressed && self.state.motion.is_climbing() {
            self.exit_climb_by_jump(&*physics);
        }

        if let Some(mut back_step) = self.state.back_step.take() {
            let tick = back_step.tick(physics, frame_dt);
            if let Some(point) = tick.outcome.contact {
                self.state.record_contact(point);
            }

            if tick.finished {
                let position = physics.position();
                self.state.motion = MotionState::from_grounded(self.state.grounded);
                info!(
                    "back step finished at ({:.2}, {:.2}, {:.2})",
                    position.x, position.y, position.z
                );
                self.events.push(DrifterEvent::BackStepFinished { position });
            } else {
                self.state.back_step = Some(back_step);
            }
        }
    }

    /// Contact reported by the physics world outside of the drifter's own
    /// moves.
    pub fn record_contact(&mut self, point: Vec3) {
        self.state.record_contact(point);
    }

    /// Returns whether climbing started.
    pub fn on_trigger_enter(&mut self, id: SurfaceId, volume: &TriggerVolume) -> bool {
        match self.state.motion {
            MotionState::Climbing { .. } => return false,
            MotionState::ExitingClimb => {
                debug!("ignoring trigger {} during back step", id.id());
                return false;
            }
            MotionState::Grounded | MotionState::Airborne => {}
        }

        if !can_climb(volume) {
            return false;
        }

        self.state.motion = MotionState::Climbing { surface: id };
        self.state.move_direction = Vec3::ZERO;
        info!("entered climbing mode on surface {}", id.id());
        self.events.push(DrifterEvent::ClimbEntered { surface: id });
        true
    }

    pub fn on_trigger_exit(&mut self, id: SurfaceId) {
        if self.state.motion.climb_surface() == Some(id) {
            self.leave_climb(id, ClimbExit::LeftVolume);
        }
    }

    /// Starts the back step off the current wall. No-op unless climbing.
    pub fn exit_climb_by_jump(&mut self, physics: &impl CharacterPhysics) -> bool {
        let Some(surface) = self.state.motion.climb_surface() else {
            return false;
        };

        let start = physics.position();
        let back_step = BackStep::new(
            start,
            self.config.back_step_distance,
            self.config.back_step_duration,
        );

        self.state.move_direction.y = self.config.wall_jump_up_force;
        self.state.grounded = false;
        self.state.motion = MotionState::ExitingClimb;
        self.state.back_step = Some(back_step);

        info!("jumped off surface {}", surface.id());
        self.events.push(DrifterEvent::ClimbExited {
            surface,
            reason: ClimbExit::Jumped,
        });
        self.events.push(DrifterEvent::BackStepStarted {
            start,
            target: back_step.target(),
        });
        true
    }

    fn leave_climb(&mut self, surface: SurfaceId, reason: ClimbExit) {
        self.state.motion = MotionState::from_grounded(self.state.grounded);
        info!(
            "exited climbing mode on surface {} ({reason:?})",
            surface.id()
        );
        self.events.push(DrifterEvent::ClimbExited { surface, reason });
    }

    fn climb_step(
        &mut self,
        surface: SurfaceId,
        input: &MoveInput,
        physics: &mut impl CharacterPhysics,
        surfaces: &SurfaceRegistry,
        dt: f32,
    ) -> Option<MoveOutcome> {
        let Some(volume) = surfaces.get(surface) else {
            warn!("climb surface {} vanished; releasing", surface.id());
            self.leave_climb(surface, ClimbExit::SurfaceLost);
            return None;
        };

        let velocity = climb_velocity(volume, input.axes, self.config.climb_speed);
        self.state.move_direction = Vec3::ZERO;
        let outcome = physics.move_and_slide(velocity * dt);
        self.state.grounded = outcome.grounded();
        Some(outcome)
    }

    fn locomotion_step(
        &mut self,
        input: &MoveInput,
        physics: &mut impl CharacterPhysics,
        dt: f32,
    ) -> MoveOutcome {
        let modify = self.input_modify_factor(input.axes);

        if self.state.grounded {
            self.grounded_step(input, modify, &*physics);
        } else {
            self.airborne_step(input, modify, physics.position());
        }

        self.state.move_direction.y -= self.config.gravity * dt;

        let outcome = physics.move_and_slide(self.state.move_direction * dt);
        let was_grounded = self.state.grounded;
        self.state.grounded = outcome.grounded();

        if self.state.grounded && !was_grounded {
            self.events.push(DrifterEvent::Landed {
                position: physics.position(),
            });
        }

        if matches!(
            self.state.motion,
            MotionState::Grounded | MotionState::Airborne
        ) {
            let next = MotionState::from_grounded(self.state.grounded);
            if next != self.state.motion {
                debug!("{} -> {}", self.state.motion.name(), next.name());
                self.state.motion = next;
            }
        }

        outcome
    }

    fn input_modify_factor(&self, axes: Vec2) -> f32 {
        if axes.x != 0.0 && axes.y != 0.0 && self.config.limit_diagonal_speed {
            DIAGONAL_FACTOR
        } else {
            1.0
        }
    }

    fn grounded_step(&mut self, input: &MoveInput, modify: f32, physics: &impl CharacterPhysics) {
        let position = physics.position();
        let dimensions = physics.dimensions();

        if let Some(hit) = physics
            .cast_ray(position, Vec3::NEG_Y, dimensions.ground_ray_distance())
            .or_else(|| self.fallback_ground_ray(physics))
        {
            self.state.ground = Some(hit);
        }

        let ground = self.state.ground;
        self.state.sliding = ground.is_some_and(|hit| hit.slope_angle() > dimensions.slide_limit());

        if self.state.falling {
            self.state.falling = false;
            let drop = self.state.fall_start_level - position.y;
            if drop > self.config.falling_damage_threshold {
                info!("fell {drop:.2} units");
                self.events.push(DrifterEvent::FallDamage { distance: drop });
            }
        }

        if self.config.enable_running {
            self.state.speed = if input.run {
                self.config.run_speed
            } else {
                self.config.walk_speed
            };
        }

        let slide_normal = ground
            .filter(|hit| {
                (self.state.sliding && self.config.slide_when_over_slope_limit)
                    || (self.config.slide_on_tagged_objects && hit.tag.is_slide())
            })
            .map(|hit| hit.normal);

        if let Some(normal) = slide_normal {
            self.state.move_direction = slide_direction(normal) * self.config.slide_speed;
            self.state.player_control = false;
        } else {
            let local = Vec3::new(
                input.axes.x * modify,
                -self.config.anti_bump_factor,
                input.axes.y * modify,
            );
            self.state.move_direction = input.to_world(local) * self.state.speed;
            self.state.player_control = true;
        }

        if !input.jump_held {
            self.state.jump_timer = self.state.jump_timer.saturating_add(1);
        } else if self.state.jump_timer >= self.config.anti_bunny_hop_factor {
            self.state.move_direction.y = self.config.jump_speed;
            self.state.jump_timer = 0;
            debug!("jump");
            self.events.push(DrifterEvent::Jumped { position });
        }
    }

    fn airborne_step(&mut self, input: &MoveInput, modify: f32, position: Vec3) {
        if !self.state.falling {
            self.state.falling = true;
            self.state.fall_start_level = position.y;
        }

        if self.config.air_control && self.state.player_control {
            let speed = self.state.speed * modify;
            let local = Vec3::new(input.axes.x * speed, 0.0, input.axes.y * speed);
            let horizontal = input.to_world(local);
            self.state.move_direction.x = horizontal.x;
            self.state.move_direction.z = horizontal.z;
        }
    }

    /// Straight-down ray from just above the last contact point, for steep
    /// ground where the center ray finds nothing.
    fn fallback_ground_ray(&self, physics: &impl CharacterPhysics) -> Option<RayHit> {
        let point = self.state.contact_point?;
        if !self.config.contact_fallback.allows(self.state.contact_age) {
            return None;
        }
        physics.cast_ray(point + Vec3::Y, Vec3::NEG_Y, f32::INFINITY)
    }
}

/// Unit vector pointing down the slope with the given surface normal.
fn slide_direction(normal: Vec3) -> Vec3 {
    let normal = normal.normalize_or_zero();
    let tangent = Vec3::new(normal.x, -normal.y, normal.z);
    (tangent - normal * tangent.dot(normal)).normalize_or_zero()
}
