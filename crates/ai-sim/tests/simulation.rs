use std::path::Path;

use ai_behaviors::follow_target;
use ai_nav::{BlockPos, NavWorldView, Path as NavPath, PATH, WALK_TARGET};
use ai_sim::{Scenario, Simulation};

const DOOR: BlockPos = BlockPos::new(3, 64, 1);

fn corridor(agents: &str) -> Simulation {
    let yaml = format!(
        r#"
grid:
  origin: [0, 64, 0]
  width: 7
  depth: 3
  walls: [[3, 64, 0], [3, 64, 2]]
doors:
  - at: [3, 64, 1]
agents:
{agents}
"#
    );
    let scenario = Scenario::parse(&yaml).expect("parse");
    Simulation::new(&scenario).expect("valid scenario")
}

fn path_finished(sim: &Simulation, agent: u64) -> bool {
    sim.scheduler()
        .blackboard(agent)
        .and_then(|bb| bb.get(PATH))
        .is_some_and(|path| path.is_finished())
}

#[test]
fn lone_walker_opens_the_door_and_closes_it_behind_itself() {
    let mut sim = corridor("  - { id: 1, kind: 1, start: [0, 64, 1], waypoints: [[6, 64, 1]] }");

    let report = sim.run(100);

    assert_eq!(report.transitions.len(), 2);
    let (open, close) = (report.transitions[0], report.transitions[1]);
    assert!(open.open && open.agent == 1 && open.door == DOOR);
    assert!(!close.open && close.agent == 1 && close.door == DOOR);
    assert!(close.tick > open.tick);
    assert!(report.open_doors().is_empty());
    assert!(path_finished(&sim, 1));
    let walker = sim.world().position(1).expect("walker");
    assert!(walker.x > 5.5, "{walker:?}");
}

#[test]
fn crossing_walkers_share_one_open_and_one_close() {
    let mut sim = corridor(
        "  - { id: 1, kind: 1, start: [0, 64, 1], waypoints: [[6, 64, 1]] }\n  \
         - { id: 2, kind: 1, start: [6, 64, 1], waypoints: [[0, 64, 1]] }",
    );

    let report = sim.run(100);

    assert_eq!(report.opens_of(DOOR), 1);
    assert_eq!(report.closes_of(DOOR), 1);
    assert!(report.open_doors().is_empty());
    assert!(path_finished(&sim, 1));
    assert!(path_finished(&sim, 2));
}

#[test]
fn step_reports_only_the_current_tick() {
    let mut sim = corridor("  - { id: 1, kind: 1, start: [0, 64, 1], waypoints: [[6, 64, 1]] }");

    let mut seen = 0;
    for _ in 0..100 {
        let tick = sim.tick();
        let transitions = sim.step();
        assert!(transitions.iter().all(|t| t.tick == tick));
        seen += transitions.len();
    }
    assert_eq!(seen, 2);
    assert_eq!(sim.tick(), 100);
}

#[test]
fn follower_walks_through_the_door_after_its_leader() {
    let mut sim = corridor(
        "  - { id: 1, kind: 1, start: [0, 64, 1], waypoints: [[6, 64, 1]] }\n  \
         - { id: 3, kind: 1, start: [0, 64, 0], follow: 1 }",
    );

    sim.run(300);

    let leader = sim.world().position(1).expect("leader");
    let follower = sim.world().position(3).expect("follower");
    assert!(follower.distance(leader) <= 3.0 + 1e-4, "{follower:?} vs {leader:?}");
    assert!(follower.x > 3.0);
    assert_eq!(sim.scheduler().active_tasks(3), vec!["follow"]);
}

#[test]
fn reached_walk_target_is_dropped_so_the_agent_can_walk_on() {
    let mut sim = corridor(
        "  - { id: 1, kind: 1, start: [0, 64, 1] }\n  \
         - { id: 2, kind: 1, start: [1, 64, 1], follow: 1 }",
    );

    sim.run(5);

    // Already within range of the leader: no movement, and no stale target left behind.
    let rest = sim.world().position(2).expect("follower");
    assert_eq!(BlockPos::containing(rest), BlockPos::new(1, 64, 1));
    let memory = sim.blackboard_mut(2).expect("follower memory");
    assert!(!memory.contains(WALK_TARGET));

    memory.forget(follow_target::<u64>());
    memory.set(
        PATH,
        NavPath::from_positions([BlockPos::new(1, 64, 1), BlockPos::new(2, 64, 1)]),
    );
    sim.run(10);

    assert!(!sim.scheduler().active_tasks(2).contains(&"follow"));
    assert!(path_finished(&sim, 2));
    let walked = sim.world().position(2).expect("follower");
    assert!(walked.x > 1.9, "{walked:?}");
}

#[test]
fn iron_doors_stay_shut() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios/iron_gate.yaml");
    let scenario = Scenario::load(&path).expect("load");
    let mut sim = Simulation::new(&scenario).expect("valid scenario");

    let report = sim.run(scenario.ticks);

    assert!(report.transitions.is_empty());
    let walker = sim.world().position(1).expect("walker");
    assert!(walker.x < 2.0, "walked into the gate: {walker:?}");
}

#[test]
fn shipped_doorway_scenario_runs() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios/doorway.yaml");
    let scenario = Scenario::load(&path).expect("load");
    let mut sim = Simulation::new(&scenario).expect("valid scenario");

    let report = sim.run(scenario.ticks);

    assert_eq!(report.ticks, 200);
    assert!(report.opens_of(DOOR) >= 1);
}
