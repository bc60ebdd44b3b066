use log::info;

use crate::event::{DrifterEvent, EventQueue, PendingEvent};
use crate::physics::CharacterPhysics;
use crate::player::{Drifter, DrifterConfig, FrameInput, InputSampler, MotionState};
use crate::surface::{SurfaceId, SurfaceRegistry, SurfaceTag, TriggerEvent, TriggerTracker};

use super::{CollectableTally, FixedTimestep};

/// One actor in one world: drives the drifter from frame input, routes
/// trigger overlaps and owns the session-wide collectable tally.
pub struct Session<P: CharacterPhysics> {
    drifter: Drifter,
    physics: P,
    surfaces: SurfaceRegistry,
    triggers: TriggerTracker,
    timestep: FixedTimestep,
    sampler: InputSampler,
    events: EventQueue,
    collectables: CollectableTally,
    tick: u32,
}

impl<P: CharacterPhysics> Session<P> {
    pub fn new(config: DrifterConfig, physics: P, surfaces: SurfaceRegistry) -> Self {
        let total = surfaces.count_tagged(SurfaceTag::Collectable) as u32;
        Self {
            drifter: Drifter::new(config),
            physics,
            surfaces,
            triggers: TriggerTracker::new(),
            timestep: FixedTimestep::default(),
            sampler: InputSampler::new(),
            events: EventQueue::default(),
            collectables: CollectableTally::new(total),
            tick: 0,
        }
    }

    pub fn with_tick_rate(mut self, tick_rate: u32) -> Self {
        self.timestep = FixedTimestep::new(tick_rate);
        self
    }

    pub fn drifter(&self) -> &Drifter {
        &self.drifter
    }

    pub fn physics(&self) -> &P {
        &self.physics
    }

    pub fn physics_mut(&mut self) -> &mut P {
        &mut self.physics
    }

    pub fn surfaces(&self) -> &SurfaceRegistry {
        &self.surfaces
    }

    pub fn collectables(&self) -> &CollectableTally {
        &self.collectables
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn drain_events(&mut self) -> Vec<PendingEvent> {
        self.events.drain()
    }

    /// Advances one rendered frame: every due fixed step with its trigger
    /// dispatch, then the per-frame update. Returns the fixed steps run.
    pub fn frame(&mut self, raw: &FrameInput, frame_dt: f32) -> u32 {
        let input = self.sampler.sample(raw);
        self.timestep.accumulate(frame_dt);
        let dt = self.timestep.dt();

        let mut ticks_run = 0;
        while self.timestep.consume_tick() {
            self.drifter
                .fixed_update(&input, &mut self.physics, &self.surfaces, dt);
            self.physics.end_step();
            self.dispatch_triggers();
            self.flush_events();
            self.tick = self.tick.wrapping_add(1);
            ticks_run += 1;
        }

        let was_exiting = self.drifter.motion() == MotionState::ExitingClimb;
        self.drifter
            .frame_update(&input, &mut self.physics, frame_dt);
        if was_exiting && self.drifter.motion() != MotionState::ExitingClimb {
            self.reoffer_overlaps();
        }
        self.flush_events();

        ticks_run
    }

    /// Volumes entered during the back step were ignored; offer the ones the
    /// actor is still inside once it returns to locomotion.
    fn reoffer_overlaps(&mut self) {
        for (id, volume) in self.surfaces.iter() {
            if self.triggers.is_inside(id) && self.drifter.on_trigger_enter(id, volume) {
                break;
            }
        }
    }

    fn dispatch_triggers(&mut self) {
        let dimensions = self.physics.dimensions();
        let events = self
            .triggers
            .update(self.physics.position(), &dimensions, &self.surfaces);

        for event in events {
            match event {
                TriggerEvent::Entered(id) => {
                    let Some(volume) = self.surfaces.get(id) else {
                        continue;
                    };
                    if volume.tag.is_collectable() {
                        self.collect(id);
                    } else {
                        self.drifter.on_trigger_enter(id, volume);
                    }
                }
                TriggerEvent::Exited(id) => self.drifter.on_trigger_exit(id),
            }
        }
    }

    fn collect(&mut self, id: SurfaceId) {
        self.surfaces.remove(id);
        self.triggers.forget(id);
        let collected = self.collectables.collect();
        info!("collected {} ({})", id.id(), self.collectables);
        self.events.push(
            self.tick,
            DrifterEvent::Collected {
                surface: id,
                collected,
                total: self.collectables.total(),
            },
        );
    }

    fn flush_events(&mut self) {
        for event in self.drifter.drain_events() {
            self.events.push(self.tick, event);
        }
    }
}
