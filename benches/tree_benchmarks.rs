use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sylva::utils::entropy;
use sylva::{Attribute, DecisionTree, Example, TreeConfig};
use std::time::Duration;

const N_EXAMPLES: usize = 5_000;
const N_ATTRIBUTES: usize = 8;

fn synthetic_data(rng: &mut StdRng, missing_rate: f64) -> (Vec<Attribute>, Vec<Example<usize>>) {
    let attributes: Vec<Attribute> = (0..N_ATTRIBUTES)
        .map(|i| {
            let values: Vec<String> = (0..(2 + i % 4)).map(|v| format!("v{}", v)).collect();
            Attribute::new(format!("a{}", i), values).unwrap()
        })
        .collect();

    let examples = (0..N_EXAMPLES)
        .map(|_| {
            let picks: Vec<usize> = attributes.iter().map(|a| rng.gen_range(0..a.n_values())).collect();
            // The label depends on the first two attributes, plus some noise.
            let label = if rng.gen::<f64>() < 0.1 {
                rng.gen_range(0..3)
            } else {
                (picks[0] + picks[1]) % 3
            };
            let mut example = Example::new(label);
            for (attr, pick) in attributes.iter().zip(picks) {
                if rng.gen::<f64>() < missing_rate {
                    example.set_missing(attr);
                } else {
                    example.set_value(attr, &attr.values()[pick]).unwrap();
                }
            }
            example
        })
        .collect();
    (attributes, examples)
}

pub fn tree_benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let (attributes, examples) = synthetic_data(&mut rng, 0.0);
    let (missing_attributes, missing_examples) = synthetic_data(&mut rng, 0.2);
    let index: Vec<usize> = (0..examples.len()).collect();

    c.bench_function("entropy", |b| b.iter(|| entropy(black_box(&examples), black_box(&index))));

    let mut train = c.benchmark_group("train_tree");
    train.sample_size(20);
    train.measurement_time(Duration::from_secs(10));
    train.bench_function("train_tree", |b| {
        b.iter(|| DecisionTree::fit(black_box(examples.clone()), black_box(&attributes)).unwrap())
    });
    train.bench_function("train_tree_missing_values", |b| {
        b.iter(|| DecisionTree::fit(black_box(missing_examples.clone()), black_box(&missing_attributes)).unwrap())
    });
    train.bench_function("train_tree_parallel_gain", |b| {
        b.iter(|| {
            let cfg = TreeConfig::default().set_num_threads(Some(2));
            DecisionTree::fit_with_config(black_box(examples.clone()), black_box(&attributes), cfg).unwrap()
        })
    });
    train.finish();

    let clean_tree = DecisionTree::fit(examples.clone(), &attributes).unwrap();
    let tree = DecisionTree::fit(missing_examples.clone(), &missing_attributes).unwrap();
    c.bench_function("classify_known", |b| {
        b.iter(|| {
            for e in examples.iter().take(500) {
                black_box(clean_tree.classify_known(black_box(e)).ok());
            }
        })
    });
    c.bench_function("classify_missing_values", |b| {
        b.iter(|| tree.classify_batch(black_box(&missing_examples[..500]), false).ok())
    });
}

criterion_group!(benches, tree_benchmarks);
criterion_main!(benches);
