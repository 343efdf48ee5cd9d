mod common;

use ai_behaviors::{follow_target, hurt_by_entity, FollowConfig, FollowTask};
use ai_brain::TaskScheduler;
use ai_core::Blackboard;
use ai_nav::{Vec3, WALK_TARGET};
use ai_tools::{tags, TraceLog, TRACE_LOG};

use common::{ctx, TestWorld, VILLAGER};

const FOLLOWER: u64 = 1;
const LEADER: u64 = 2;
const STRANGER: u64 = 3;

fn setup(target: Option<u64>) -> (TestWorld, TaskScheduler<TestWorld>) {
    let mut world = TestWorld::default();
    world.spawn(FOLLOWER, VILLAGER, Vec3::new(0.5, 64.0, 0.5));
    world.spawn(LEADER, VILLAGER, Vec3::new(6.5, 64.0, 0.5));
    world.spawn(STRANGER, VILLAGER, Vec3::new(0.5, 64.0, 8.5));

    let mut scheduler =
        TaskScheduler::<TestWorld>::new().with_task(Box::new(FollowTask::<TestWorld>::default()));
    let mut bb = Blackboard::new();
    bb.set(TRACE_LOG, TraceLog::default());
    if let Some(target) = target {
        bb.set(follow_target::<u64>(), target);
    }
    scheduler.add_agent_with(FOLLOWER, bb).expect("fresh agent");
    (world, scheduler)
}

#[test]
fn walks_toward_the_target_at_walking_speed() {
    let (mut world, mut scheduler) = setup(Some(LEADER));
    scheduler.tick(&ctx(0), &mut world);

    assert_eq!(scheduler.active_tasks(FOLLOWER), vec!["follow"]);
    let walk = scheduler
        .blackboard(FOLLOWER)
        .and_then(|bb| bb.get(WALK_TARGET))
        .copied()
        .expect("walk target");
    assert_eq!(walk.position, Vec3::new(6.5, 64.0, 0.5));
    assert_eq!(walk.speed, 0.8);
    assert_eq!(walk.completion_range, 3);

    world.positions.insert(LEADER, Vec3::new(9.5, 64.0, 3.5));
    scheduler.tick(&ctx(1), &mut world);
    let walk = scheduler.blackboard(FOLLOWER).and_then(|bb| bb.get(WALK_TARGET)).copied();
    assert_eq!(walk.map(|w| w.position), Some(Vec3::new(9.5, 64.0, 3.5)));
}

#[test]
fn mounted_followers_use_the_mounted_speed() {
    let (mut world, mut scheduler) = setup(Some(LEADER));
    world.mounted.insert(FOLLOWER);
    scheduler.tick(&ctx(0), &mut world);

    let walk = scheduler.blackboard(FOLLOWER).and_then(|bb| bb.get(WALK_TARGET)).copied();
    assert_eq!(walk.map(|w| w.speed), Some(1.7));
}

#[test]
fn custom_config_is_respected() {
    let mut world = TestWorld::default();
    world.spawn(FOLLOWER, VILLAGER, Vec3::ZERO);
    world.spawn(LEADER, VILLAGER, Vec3::new(4.0, 0.0, 0.0));
    let config = FollowConfig {
        walk_speed: 0.5,
        mounted_speed: 1.0,
        completion_range: 1,
    };
    let mut scheduler =
        TaskScheduler::<TestWorld>::new().with_task(Box::new(FollowTask::<TestWorld>::new(config)));
    let mut bb = Blackboard::new();
    bb.set(follow_target::<u64>(), LEADER);
    scheduler.add_agent_with(FOLLOWER, bb).expect("fresh agent");

    scheduler.tick(&ctx(0), &mut world);

    let walk = scheduler.blackboard(FOLLOWER).and_then(|bb| bb.get(WALK_TARGET)).copied();
    assert_eq!(walk.map(|w| (w.speed, w.completion_range)), Some((0.5, 1)));
}

#[test]
fn no_target_means_no_following() {
    let (mut world, mut scheduler) = setup(None);
    scheduler.tick(&ctx(0), &mut world);

    assert!(scheduler.active_tasks(FOLLOWER).is_empty());
    assert!(!scheduler.blackboard(FOLLOWER).unwrap().contains(WALK_TARGET));
}

#[test]
fn clearing_the_target_stops_the_task() {
    let (mut world, mut scheduler) = setup(Some(LEADER));
    scheduler.tick(&ctx(0), &mut world);
    scheduler
        .blackboard_mut(FOLLOWER)
        .unwrap()
        .forget(follow_target::<u64>());
    scheduler.tick(&ctx(1), &mut world);

    assert!(scheduler.active_tasks(FOLLOWER).is_empty());
}

#[test]
fn panicking_after_being_hurt_by_the_target_stops_following() {
    let (mut world, mut scheduler) = setup(Some(LEADER));
    scheduler.tick(&ctx(0), &mut world);

    world.panicking.insert(FOLLOWER);
    scheduler
        .blackboard_mut(FOLLOWER)
        .unwrap()
        .set(hurt_by_entity::<u64>(), LEADER);
    scheduler.tick(&ctx(1), &mut world);

    let bb = scheduler.blackboard(FOLLOWER).unwrap();
    assert!(!bb.contains(follow_target::<u64>()));
    assert_eq!(bb.get(TRACE_LOG).map(|log| log.count(tags::FOLLOW_ABORT)), Some(1));

    scheduler.tick(&ctx(2), &mut world);
    assert!(scheduler.active_tasks(FOLLOWER).is_empty());
}

#[test]
fn panicking_from_someone_else_keeps_following() {
    let (mut world, mut scheduler) = setup(Some(LEADER));
    world.panicking.insert(FOLLOWER);
    scheduler
        .blackboard_mut(FOLLOWER)
        .unwrap()
        .set(hurt_by_entity::<u64>(), STRANGER);

    scheduler.tick(&ctx(0), &mut world);
    scheduler.tick(&ctx(1), &mut world);

    let bb = scheduler.blackboard(FOLLOWER).unwrap();
    assert_eq!(bb.get(follow_target::<u64>()), Some(&LEADER));
    assert_eq!(scheduler.active_tasks(FOLLOWER), vec!["follow"]);
}

#[test]
fn hurt_by_the_target_without_panicking_keeps_following() {
    let (mut world, mut scheduler) = setup(Some(LEADER));
    scheduler
        .blackboard_mut(FOLLOWER)
        .unwrap()
        .set(hurt_by_entity::<u64>(), LEADER);

    scheduler.tick(&ctx(0), &mut world);

    assert_eq!(scheduler.active_tasks(FOLLOWER), vec!["follow"]);
    assert!(scheduler.blackboard(FOLLOWER).unwrap().contains(WALK_TARGET));
}
