use ai_brain::{Peers, Task, TaskScheduler};
use ai_core::{Blackboard, Preconditions, TickContext, WorldMut, WorldView};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

#[derive(Default)]
struct World {
    agents: Vec<u64>,
}

impl WorldView for World {
    type Agent = u64;

    fn agents(&self) -> Vec<u64> {
        self.agents.clone()
    }
}

impl WorldMut for World {}

struct AlwaysRun(Preconditions);

impl Task<World> for AlwaysRun {
    fn name(&self) -> &'static str {
        "always_run"
    }

    fn preconditions(&self) -> &Preconditions {
        &self.0
    }

    fn should_run(
        &self,
        _ctx: &TickContext,
        _agent: u64,
        _world: &World,
        _blackboard: &mut Blackboard,
        _peers: &Peers<'_, u64>,
    ) -> bool {
        true
    }
}

fn bench_scheduler_tick(c: &mut Criterion) {
    let mut scheduler: TaskScheduler<World> = TaskScheduler::new();
    for _ in 0..32 {
        scheduler.add_task(Box::new(AlwaysRun(Preconditions::new())));
    }
    let mut world = World {
        agents: (0..64).collect(),
    };
    scheduler.sync_agents(&world);

    let mut tick: u64 = 0;
    c.bench_function("ai-brain/tick(agents=64,tasks=32)", |b| {
        b.iter(|| {
            let ctx = TickContext::new(tick, 0.05);
            scheduler.tick(&ctx, &mut world);
            black_box(scheduler.is_active(0, 0));
            tick = tick.wrapping_add(1);
        })
    });
}

criterion_group!(benches, bench_scheduler_tick);
criterion_main!(benches);
