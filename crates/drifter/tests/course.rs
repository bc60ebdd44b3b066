use drifter::{
    CharacterPhysics, Course, DrifterConfig, FrameInput, PhysicsWorld, RapierCharacter, Session,
    SurfaceRegistry,
};

const FRAME: f32 = 1.0 / 60.0;

fn course_session() -> Session<RapierCharacter> {
    let course = Course::new();
    let mut physics = PhysicsWorld::new();
    let mut surfaces = SurfaceRegistry::new();
    course.spawn(&mut physics, &mut surfaces);

    let config = DrifterConfig::default();
    let character = RapierCharacter::new(physics, course.spawn_point(), config.body);
    Session::new(config, character, surfaces)
}

#[test]
fn actor_settles_on_course_ground() {
    let mut session = course_session();

    for _ in 0..90 {
        session.frame(&FrameInput::default(), FRAME);
    }

    assert!(session.drifter().is_grounded());
    let y = session.physics().position().y;
    assert!((0.9..1.2).contains(&y), "resting height {y}");
}

#[test]
fn walking_forward_reaches_the_climb_wall() {
    let mut session = course_session();
    for _ in 0..30 {
        session.frame(&FrameInput::default(), FRAME);
    }

    let mut climbing = false;
    for _ in 0..180 {
        session.frame(&FrameInput::forward(1.0), FRAME);
        if session.drifter().motion().is_climbing() {
            climbing = true;
            break;
        }
    }

    assert!(climbing);
    assert!(session.physics().position().z > 4.0);
}
