use ai_brain::Sensor;
use ai_core::{Blackboard, TickContext};
use ai_nav::NavWorldView;

use crate::memory::mobs;
use crate::MobsSensorConfig;

/// Writes every other agent within `range`, nearest first, into [`mobs`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestMobsSensor {
    config: MobsSensorConfig,
}

impl NearestMobsSensor {
    pub fn new(config: MobsSensorConfig) -> Self {
        Self { config }
    }
}

impl<W> Sensor<W> for NearestMobsSensor
where
    W: NavWorldView + 'static,
{
    fn name(&self) -> &'static str {
        "nearest_mobs"
    }

    fn every_ticks(&self) -> u32 {
        self.config.every_ticks
    }

    fn sense(&self, _ctx: &TickContext, agent: W::Agent, world: &W, blackboard: &mut Blackboard) {
        let Some(origin) = world.position(agent) else {
            blackboard.forget(mobs::<W::Agent>());
            return;
        };
        let range_sq = self.config.range * self.config.range;

        let mut nearby: Vec<(f32, W::Agent)> = world
            .agents()
            .into_iter()
            .filter(|other| *other != agent)
            .filter_map(|other| {
                let d = world.position(other)?.distance_squared(origin);
                (d < range_sq).then_some((d, other))
            })
            .collect();
        nearby.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        blackboard.set(
            mobs::<W::Agent>(),
            nearby.into_iter().map(|(_, other)| other).collect(),
        );
    }
}
