mod common;

use ai_behaviors::{mobs, MobsSensorConfig, NearestMobsSensor};
use ai_brain::Sensor;
use ai_core::Blackboard;
use ai_nav::Vec3;

use common::{ctx, TestWorld, GOLEM, VILLAGER};

fn sense(world: &TestWorld, agent: u64, bb: &mut Blackboard, sensor: &NearestMobsSensor) {
    Sensor::<TestWorld>::sense(sensor, &ctx(0), agent, world, bb);
}

#[test]
fn lists_other_agents_in_range_nearest_first() {
    let mut world = TestWorld::default();
    world.spawn(1, VILLAGER, Vec3::ZERO);
    world.spawn(2, VILLAGER, Vec3::new(5.0, 0.0, 0.0));
    world.spawn(3, GOLEM, Vec3::new(0.0, 0.0, 2.0));
    world.spawn(4, VILLAGER, Vec3::new(20.0, 0.0, 0.0));
    let mut bb = Blackboard::new();

    sense(&world, 1, &mut bb, &NearestMobsSensor::default());

    assert_eq!(bb.get(mobs::<u64>()), Some(&vec![3, 2]));
}

#[test]
fn ties_break_on_agent_id_and_range_is_exclusive() {
    let mut world = TestWorld::default();
    world.spawn(1, VILLAGER, Vec3::ZERO);
    world.spawn(7, VILLAGER, Vec3::new(0.0, 0.0, 3.0));
    world.spawn(5, VILLAGER, Vec3::new(3.0, 0.0, 0.0));
    world.spawn(6, VILLAGER, Vec3::new(4.0, 0.0, 0.0));
    let sensor = NearestMobsSensor::new(MobsSensorConfig {
        range: 4.0,
        every_ticks: 1,
    });
    let mut bb = Blackboard::new();

    sense(&world, 1, &mut bb, &sensor);

    assert_eq!(bb.get(mobs::<u64>()), Some(&vec![5, 7]));
}

#[test]
fn agent_without_position_forgets_the_list() {
    let mut world = TestWorld::default();
    world.spawn(1, VILLAGER, Vec3::ZERO);
    world.spawn(2, VILLAGER, Vec3::new(1.0, 0.0, 0.0));
    let mut bb = Blackboard::new();
    let sensor = NearestMobsSensor::default();

    sense(&world, 1, &mut bb, &sensor);
    assert_eq!(bb.get(mobs::<u64>()).map(Vec::len), Some(1));

    world.positions.remove(&1);
    sense(&world, 1, &mut bb, &sensor);
    assert!(!bb.contains(mobs::<u64>()));
    assert!(bb.has_key(mobs::<u64>()));
}
