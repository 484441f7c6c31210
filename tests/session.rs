//! Whole-session tests: simulation steps mirrored onto a recording scene

use std::collections::{HashMap, HashSet};

use cube_dodge::Tuning;
use cube_dodge::scene::{Renderable, Scene, SceneSync};
use cube_dodge::sim::{
    BodyId, Cuboid, GROUND_ID, GameEvent, GameState, PLAYER_ID, SpawnEdge, TickInput, tick,
};
use glam::{DVec3, Vec3};
use rand::SeedableRng;
use rand_pcg::Pcg32;

#[derive(Default)]
struct RecordingScene {
    nodes: HashMap<BodyId, Renderable>,
    attach_count: HashMap<BodyId, u32>,
    detach_count: HashMap<BodyId, u32>,
}

impl Scene for RecordingScene {
    fn attach(&mut self, id: BodyId, node: Renderable) {
        *self.attach_count.entry(id).or_default() += 1;
        self.nodes.insert(id, node);
    }

    fn detach(&mut self, id: BodyId) {
        *self.detach_count.entry(id).or_default() += 1;
        self.nodes.remove(&id);
    }

    fn set_position(&mut self, id: BodyId, position: Vec3) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.position = position;
        }
    }
}

struct Session {
    state: GameState,
    rng: Pcg32,
    scene: RecordingScene,
    sync: SceneSync,
}

impl Session {
    fn new(tuning: Tuning, seed: u64) -> Self {
        let state = GameState::new(tuning);
        let mut scene = RecordingScene::default();
        let mut sync = SceneSync::new();
        sync.init(&state, &mut scene);
        Self {
            state,
            rng: Pcg32::seed_from_u64(seed),
            scene,
            sync,
        }
    }

    fn step(&mut self, input: &TickInput) -> Vec<GameEvent> {
        tick(&mut self.state, input, &mut self.rng);
        self.sync.apply(&mut self.state, &mut self.scene)
    }

    /// Park the player far outside the level so enemies never reach it
    fn park_player(&mut self) {
        self.state.player.pos = DVec3::new(500.0, 1.0, 500.0);
    }
}

#[test]
fn ten_frames_spawn_one_batch_on_the_edges() {
    let mut session = Session::new(Tuning::arena(), 2024);
    assert!(session.state.enemies().is_empty());

    for _ in 0..10 {
        session.step(&TickInput::default());
    }

    let enemies = session.state.enemies();
    assert_eq!(enemies.len(), 4);

    let by_edge = |edge: SpawnEdge| {
        enemies
            .iter()
            .find(|e| e.edge == edge)
            .expect("one enemy per edge")
    };

    // Spawned on frame 0, then moved for 9 frames
    let north = by_edge(SpawnEdge::North);
    assert_eq!(north.body.vel.z, 0.1);
    assert!((north.body.pos.z - (-40.0 + 0.9)).abs() < 1e-4);

    let south = by_edge(SpawnEdge::South);
    assert_eq!(south.body.vel.z, -0.1);
    assert!((south.body.pos.z - (40.0 - 0.9)).abs() < 1e-4);

    let east = by_edge(SpawnEdge::East);
    assert_eq!(east.body.vel.x, -0.1);
    assert!((east.body.pos.x - (40.0 - 0.9)).abs() < 1e-4);

    let west = by_edge(SpawnEdge::West);
    assert_eq!(west.body.vel.x, 0.1);
    assert!((west.body.pos.x - (-40.0 + 0.9)).abs() < 1e-4);

    // Ground, player, and the batch are on screen
    assert_eq!(session.scene.nodes.len(), 6);
}

#[test]
fn enemy_past_the_bound_is_detached_exactly_once() {
    let mut tuning = Tuning::arena();
    tuning.spawn_interval = 100_000;
    let mut session = Session::new(tuning, 1);
    session.state.frames = 1;

    let body = Cuboid::new(
        1.0,
        1.0,
        1.0,
        0xFF0000,
        DVec3::new(0.1, 0.0, 0.0),
        DVec3::new(49.85, 1.0, 10.0),
    );
    let id = session.state.add_enemy(SpawnEdge::West, body);
    session.step(&TickInput::default());
    assert!(session.scene.nodes.contains_key(&id));

    // x is now 50.05: past x_max
    let events = session.step(&TickInput::default());
    assert!(events.contains(&GameEvent::EnemyCulled { id }));
    assert!(session.state.enemies().is_empty());

    for _ in 0..20 {
        session.step(&TickInput::default());
    }
    assert_eq!(session.scene.detach_count.get(&id), Some(&1));
    assert!(!session.scene.nodes.contains_key(&id));
}

#[test]
fn long_session_keeps_scene_and_state_in_step() {
    let mut session = Session::new(Tuning::arena(), 77);
    session.park_player();

    let mut culled = HashSet::new();
    for _ in 0..1500 {
        for event in session.step(&TickInput::default()) {
            if let GameEvent::EnemyCulled { id } = event {
                assert!(culled.insert(id), "enemy {id} culled twice");
            }
        }

        let mut expected: HashSet<BodyId> =
            session.state.enemies().iter().map(|e| e.id).collect();
        expected.insert(GROUND_ID);
        expected.insert(PLAYER_ID);
        let on_screen: HashSet<BodyId> = session.scene.nodes.keys().copied().collect();
        assert_eq!(on_screen, expected);

        let bounds = session.state.tuning.level_bounds;
        for enemy in session.state.enemies() {
            assert!(!bounds.is_outside(enemy.body.pos.x, enemy.body.pos.z));
        }
    }

    assert!(!session.state.is_over());
    assert!(!culled.is_empty());
    for id in &culled {
        assert_eq!(session.scene.detach_count.get(id), Some(&1));
        assert_eq!(session.scene.attach_count.get(id), Some(&1));
    }
}

#[test]
fn collision_fires_once_and_stops_the_session() {
    let mut session = Session::new(Tuning::arena(), 5);
    let body = Cuboid::new(1.0, 1.0, 1.0, 0xFF0000, DVec3::ZERO, DVec3::new(0.5, 3.0, 0.5));
    let enemy_id = session.state.add_enemy(SpawnEdge::North, body);

    let events = session.step(&TickInput::default());
    let collisions: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, GameEvent::Collision { .. }))
        .collect();
    assert_eq!(collisions, vec![&GameEvent::Collision { enemy_id }]);
    assert!(session.state.is_over());

    let frames = session.state.frames;
    for _ in 0..10 {
        let events = session.step(&TickInput {
            move_left: true,
            ..Default::default()
        });
        assert!(events.is_empty());
    }
    assert_eq!(session.state.frames, frames);
}

#[test]
fn showcase_player_bounces_to_rest() {
    let mut session = Session::new(Tuning::showcase(), 9);
    let mut contacts = 0;
    let mut last_vy = session.state.player.vel.y;

    for _ in 0..600 {
        session.step(&TickInput::default());
        let vy = session.state.player.vel.y;
        if last_vy < 0.0 && vy > 0.0 {
            contacts += 1;
        }
        last_vy = vy;
    }

    assert!(contacts >= 2, "expected repeated bounces, saw {contacts}");
    let rest = session.state.ground.top() + session.state.player.height / 2.0;
    assert!((session.state.player.pos.y - rest).abs() < 1e-3);
    assert!(session.state.enemies().is_empty());
    assert_eq!(session.scene.nodes.len(), 2);
    assert_eq!(
        session.scene.nodes[&PLAYER_ID].position,
        session.state.player.pos.as_vec3()
    );
}
