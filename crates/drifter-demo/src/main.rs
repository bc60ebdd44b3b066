mod config;
mod script;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use drifter::{
    CharacterPhysics, Course, DrifterConfig, DrifterEvent, PhysicsWorld, PlaneWorld,
    RapierCharacter, Session, SurfaceRegistry,
};
use log::{debug, info, warn};

use config::{DemoConfig, load_drifter_config};
use script::Scenario;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Backend {
    /// Analytic ground plane with no solid obstacles.
    Plane,
    /// Full course in a rapier world.
    Rapier,
}

#[derive(Parser)]
#[command(name = "drifter-demo")]
#[command(about = "Headless first-person drifter run over a scripted course")]
struct Args {
    #[arg(short, long, help = "RON file with drifter settings")]
    config: Option<PathBuf>,

    #[arg(short, long, default_value_t = 6.0)]
    seconds: f32,

    #[arg(short, long, default_value_t = 60)]
    frame_rate: u32,

    #[arg(short, long, default_value_t = 50)]
    tick_rate: u32,

    #[arg(long, value_enum, default_value_t = Scenario::Walk)]
    scenario: Scenario,

    #[arg(long, value_enum, default_value_t = Backend::Rapier)]
    backend: Backend,

    #[arg(long, help = "Print the effective drifter settings as RON and exit")]
    dump_config: bool,
}

fn main() -> Result<()> {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(env).init();
    let args = Args::parse();

    let mut drifter = match &args.config {
        Some(path) => load_drifter_config(path)?,
        None => DrifterConfig::default(),
    };
    if args.scenario == Scenario::Slide {
        drifter.slide_on_tagged_objects = true;
    }

    if args.dump_config {
        println!("{}", drifter.to_ron_string()?);
        return Ok(());
    }

    let config = DemoConfig {
        drifter,
        seconds: args.seconds,
        frame_rate: args.frame_rate,
        tick_rate: args.tick_rate,
    };

    let course = Course::new();
    let mut surfaces = SurfaceRegistry::new();

    match args.backend {
        Backend::Plane => {
            course.spawn_triggers(&mut surfaces);
            let world = PlaneWorld::flat(config.drifter.body);
            let session = Session::new(config.drifter.clone(), world, surfaces);
            run(session, &config, args.scenario);
        }
        Backend::Rapier => {
            let mut physics = PhysicsWorld::new();
            physics.set_timestep(1.0 / config.tick_rate.max(1) as f32);
            course.spawn(&mut physics, &mut surfaces);
            let spawn = course.spawn_point();
            let character = RapierCharacter::new(physics, spawn, config.drifter.body);
            let session = Session::new(config.drifter.clone(), character, surfaces);
            run(session, &config, args.scenario);
        }
    }

    Ok(())
}

fn run<P: CharacterPhysics>(session: Session<P>, config: &DemoConfig, scenario: Scenario) {
    let mut session = session.with_tick_rate(config.tick_rate);
    let frame_dt = config.frame_dt();

    info!(
        "running {:?} for {:.1}s at {} fps ({} ticks/s)",
        scenario, config.seconds, config.frame_rate, config.tick_rate
    );

    for frame in 0..config.frame_count() {
        let time = frame as f32 * frame_dt;
        session.frame(&scenario.input_at(time), frame_dt);

        for pending in session.drain_events() {
            match pending.event {
                DrifterEvent::FallDamage { distance } => {
                    warn!("[tick {}] fall damage after {distance:.2}", pending.tick);
                }
                DrifterEvent::Collected { collected, total, .. } => {
                    info!("[tick {}] collectables {collected}/{total}", pending.tick);
                }
                event => debug!("[tick {}] {event:?}", pending.tick),
            }
        }

        if frame % config.frame_rate.max(1) == 0 {
            let position = session.physics().position();
            info!(
                "t={time:.1}s pos=({:.2}, {:.2}, {:.2}) {}",
                position.x,
                position.y,
                position.z,
                session.drifter().motion().name()
            );
        }
    }

    let position = session.physics().position();
    info!(
        "finished at ({:.2}, {:.2}, {:.2}), collectables {}",
        position.x,
        position.y,
        position.z,
        session.collectables()
    );
}
