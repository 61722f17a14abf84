use clubmatch::cluster::{Clustering, Kmeans};
use clubmatch::{text, Club, RecommenderConfig, Snapshot, Student, StudentId};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;

const WORDS: &[&str] = &[
    "chess", "music", "art", "soccer", "coding", "robotics", "math", "poetry", "drama", "hiking",
    "photography", "debate", "cooking", "dance", "film", "gaming",
];

fn population(n: usize, rng: &mut StdRng) -> Vec<Student> {
    (0..n)
        .map(|i| {
            let mut pick = || {
                if rng.random::<f32>() < 0.05 {
                    None
                } else {
                    Some(WORDS[rng.random_range(0..WORDS.len())].to_string())
                }
            };
            let interests = [pick(), pick(), pick()];
            Student::new(i as u64, format!("student {i}"), interests)
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    let mut rng = StdRng::seed_from_u64(42);
    let students = population(1000, &mut rng);
    let clubs: Vec<Club> = WORDS.iter().map(|w| Club::new(format!("{w} club"), *w)).collect();

    let combined: Vec<String> = students.iter().map(|s| text::combine(s, "nan")).collect();
    let (vocab, vectors) = text::fit_transform(&combined);
    let dense: Vec<Vec<f32>> = vectors.iter().map(|v| v.to_dense(vocab.len())).collect();

    group.bench_function("fit_transform_n1000", |b| {
        b.iter(|| text::fit_transform(black_box(&combined)))
    });

    group.bench_function("kmeans_n1000_k3", |b| {
        b.iter(|| {
            let model = Kmeans::new(3).with_max_iter(10).with_seed(42);
            model.fit_predict(black_box(&dense)).unwrap();
        })
    });

    let snapshot = Snapshot::build(students, clubs, &RecommenderConfig::default()).unwrap();
    let query: [StudentId; 1] = [7];
    group.bench_function("recommend_one_id", |b| {
        b.iter(|| snapshot.recommend(black_box(&query[..])))
    });

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
