use std::f32::consts::FRAC_PI_2;

use clap::ValueEnum;
use drifter::FrameInput;

/// Scripted input sequences standing in for a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// Walk, run, then a few jumps on open ground.
    Walk,
    /// Walk onto the climb wall, climb, then jump off.
    Climb,
    /// Turn towards the tagged slide ramp and walk onto it.
    Slide,
}

impl Scenario {
    pub fn input_at(self, time: f32) -> FrameInput {
        match self {
            Self::Walk => walk(time),
            Self::Climb => climb(time),
            Self::Slide => slide(time),
        }
    }
}

fn walk(time: f32) -> FrameInput {
    match time {
        t if t < 0.5 => FrameInput::default(),
        t if t < 2.0 => FrameInput::forward(1.0),
        t if t < 3.5 => FrameInput::axes(1.0, 1.0).with_run(true),
        t => FrameInput::forward(1.0).with_jump((t * 2.0).fract() < 0.1),
    }
}

fn climb(time: f32) -> FrameInput {
    match time {
        t if t < 0.5 => FrameInput::default(),
        t if t < 3.0 => FrameInput::forward(1.0),
        t if t < 3.1 => FrameInput::default().with_jump(true),
        _ => FrameInput::default(),
    }
}

fn slide(time: f32) -> FrameInput {
    match time {
        t if t < 0.5 => FrameInput::default(),
        _ => FrameInput::forward(1.0).with_yaw(FRAC_PI_2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn climb_script_presses_jump_once() {
        let presses = (0..360)
            .map(|frame| Scenario::Climb.input_at(frame as f32 / 60.0))
            .filter(|input| input.jump)
            .count();
        assert!(presses > 0 && presses < 10);
    }

    #[test]
    fn every_script_starts_idle() {
        for scenario in [Scenario::Walk, Scenario::Climb, Scenario::Slide] {
            assert_eq!(scenario.input_at(0.0), FrameInput::default());
        }
    }
}
