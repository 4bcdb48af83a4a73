/// 候補者プールのランキング性能ベンチマーク。
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use roommate_compat::{
    Budget, CandidateProfile, Cleanliness, Drinking, EngineConfig, Pets, Preference, PreferenceSet,
    RankOptions, RequesterProfile, ScoreCache, SleepingHabits, Smoking, rank, rank_cached, score,
};

fn synthetic_pool(size: usize) -> Vec<CandidateProfile> {
    let sleeping = [
        SleepingHabits::EarlyRiser,
        SleepingHabits::NightOwl,
        SleepingHabits::Varies,
    ];
    let cleanliness = [
        Cleanliness::VeryNeat,
        Cleanliness::Average,
        Cleanliness::Relaxed,
    ];
    let smoking = [Smoking::NonSmoker, Smoking::OutsideOnly, Smoking::Smoker];
    let budget = [Budget::Low, Budget::Medium, Budget::High, Budget::Luxury];
    let locations = ["Queens, New York", "Austin, Texas"];

    (0..size)
        .map(|i| {
            let prefs: PreferenceSet = [
                Preference::from(sleeping[i % sleeping.len()]),
                cleanliness[(i / 3) % cleanliness.len()].into(),
                smoking[(i / 7) % smoking.len()].into(),
                budget[i % budget.len()].into(),
            ]
            .into_iter()
            .collect();
            CandidateProfile::new(format!("c-{i}"), prefs)
                .with_age(20 + (i % 30) as u32)
                .with_location(locations[i % locations.len()])
        })
        .collect()
}

fn requester() -> RequesterProfile {
    let prefs: PreferenceSet = [
        Preference::from(SleepingHabits::EarlyRiser),
        Cleanliness::VeryNeat.into(),
        Smoking::NonSmoker.into(),
        Drinking::Rarely.into(),
        Pets::Allergic.into(),
        Budget::Medium.into(),
    ]
    .into_iter()
    .collect();
    RequesterProfile::new("bench", prefs)
        .with_age(28)
        .with_location("Brooklyn, New York")
}

fn bench_single_score(c: &mut Criterion) {
    let me = requester();
    let pool = synthetic_pool(1);
    c.bench_function("score_single_pair", |b| {
        b.iter(|| black_box(score(black_box(&me), black_box(&pool[0]))));
    });
}

fn bench_rank(c: &mut Criterion) {
    let me = requester();
    let config = EngineConfig::default();
    let mut group = c.benchmark_group("rank_pool");

    for size in [32usize, 1_000, 10_000] {
        let pool = synthetic_pool(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &pool, |b, pool| {
            b.iter(|| {
                let ranking = rank(&me, pool, &config, RankOptions::default());
                black_box(ranking.len());
            });
        });
    }
    group.finish();
}

fn bench_rank_cached(c: &mut Criterion) {
    let me = requester();
    let config = EngineConfig::default();
    let pool = synthetic_pool(10_000);
    let cache = ScoreCache::new();
    rank_cached(&me, &pool, &config, RankOptions::default(), &cache);

    c.bench_function("rank_cached_warm_10k", |b| {
        b.iter(|| {
            let ranking = rank_cached(&me, &pool, &config, RankOptions::default(), &cache);
            black_box(ranking.len());
        });
    });
}

criterion_group!(benches, bench_single_score, bench_rank, bench_rank_cached);
criterion_main!(benches);
