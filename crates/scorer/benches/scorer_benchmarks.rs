//! Benchmarks for peerscore-scorer operations.
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use peerscore_primitives::{CompanyFinancials, Metrics, Sector};
use peerscore_scorer::Scorer;
use rand::Rng;
use rand_distr::{Distribution, LogNormal, Normal};

fn random_peers(n: usize) -> Vec<CompanyFinancials> {
    let mut rng = rand::thread_rng();
    let margin = Normal::new(0.15, 0.1).unwrap();
    let growth = Normal::new(0.08, 0.12).unwrap();
    let multiple = LogNormal::new(3.0, 0.4).unwrap();

    (0..n)
        .map(|i| {
            let m = Metrics {
                operating_margin: margin.sample(&mut rng),
                net_margin: margin.sample(&mut rng),
                roic: margin.sample(&mut rng),
                fcf_margin: margin.sample(&mut rng),
                revenue_growth_3y: growth.sample(&mut rng),
                earnings_growth_3y: growth.sample(&mut rng),
                fcf_growth_3y: growth.sample(&mut rng),
                debt_to_equity: rng.gen_range(0.0..5.0),
                interest_coverage: rng.gen_range(1.0..80.0),
                cashflow_volatility: rng.gen_range(0.05..0.5),
                earnings_stability: rng.gen_range(0.4..1.0),
                pe_ratio: multiple.sample(&mut rng),
                ev_ebitda: multiple.sample(&mut rng) * 0.6,
                fcf_multiple: multiple.sample(&mut rng),
            };
            let name = format!("Synthetic {i}");
            CompanyFinancials::new(format!("S{i}"), name, Sector::Technology, m).unwrap()
        })
        .collect()
}

fn bench_score_company(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_company");
    let scorer = Scorer::new();

    for size in [5, 10, 50, 200] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let peers = random_peers(size);
            b.iter(|| scorer.score_company(black_box(&peers[0]), black_box(&peers)));
        });
    }

    group.finish();
}

fn bench_score_sector(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_sector");
    let scorer = Scorer::new();

    for size in [5, 10, 50, 200] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let peers = random_peers(size);
            b.iter(|| scorer.score_sector(black_box(&peers)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_score_company, bench_score_sector);
criterion_main!(benches);
