use glam::{Quat, Vec2, Vec3};

/// Raw input for one rendered frame, as delivered by the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    pub horizontal: f32,
    pub vertical: f32,
    pub run: bool,
    pub jump: bool,
    /// Actor heading in radians around world up; 0 faces +Z.
    pub yaw: f32,
}

impl FrameInput {
    pub fn forward(amount: f32) -> Self {
        Self {
            vertical: amount,
            ..Default::default()
        }
    }

    pub fn axes(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
            ..Default::default()
        }
    }

    pub fn with_run(mut self, run: bool) -> Self {
        self.run = run;
        self
    }

    pub fn with_jump(mut self, jump: bool) -> Self {
        self.jump = jump;
        self
    }

    pub fn with_yaw(mut self, yaw: f32) -> Self {
        self.yaw = yaw;
        self
    }
}

/// Input as seen by the drifter: sanitized axes plus the jump edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoveInput {
    pub axes: Vec2,
    pub run: bool,
    pub jump_held: bool,
    pub jump_pressed: bool,
    pub yaw: f32,
}

impl MoveInput {
    pub fn heading(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }

    /// Rotates an actor-local direction into world space.
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.heading() * local
    }
}

/// Tracks the jump button across frames so a press fires exactly once.
#[derive(Debug, Default)]
pub struct InputSampler {
    jump_was_held: bool,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample(&mut self, raw: &FrameInput) -> MoveInput {
        let jump_pressed = raw.jump && !self.jump_was_held;
        self.jump_was_held = raw.jump;

        MoveInput {
            axes: Vec2::new(sanitize_axis(raw.horizontal), sanitize_axis(raw.vertical)),
            run: raw.run,
            jump_held: raw.jump,
            jump_pressed,
            yaw: if raw.yaw.is_finite() { raw.yaw } else { 0.0 },
        }
    }
}

fn sanitize_axis(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}
