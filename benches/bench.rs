// Criterion benchmarks for SkillSwap Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use skillswap_match::core::{calculate_match_score, classify, Matcher};
use skillswap_match::models::{Proficiency, ScoringWeights, Skill, User};

const SKILLS: &[(&str, &str)] = &[
    ("JavaScript", "technology"),
    ("Python", "technology"),
    ("Spanish", "languages"),
    ("Guitar", "music"),
    ("Photography", "art"),
    ("Cooking", "cooking"),
    ("Yoga", "sports"),
    ("Marketing", "business"),
];

const LEVELS: &[&str] = &["beginner", "intermediate", "expert"];

fn create_candidate(id: usize) -> User {
    let skills = (0..4)
        .map(|i| {
            let (name, category) = SKILLS[(id + i) % SKILLS.len()];
            Skill {
                id: format!("{}-{}", id, i),
                name: name.to_string(),
                category: category.to_string(),
                is_offering: i % 2 == 0,
                is_learning: i % 2 == 1,
                proficiency_level: Proficiency::from(LEVELS[(id + i) % LEVELS.len()]),
            }
        })
        .collect();

    User {
        id: id.to_string(),
        name: format!("User {}", id),
        bio: "Happy to swap skills on weekends and evenings".to_string(),
        email: format!("user{}@example.com", id),
        profile_picture: (id % 2 == 0).then(|| "pic.jpg".to_string()),
        phone: None,
        location: Some(if id % 3 == 0 { "Berlin, DE" } else { "Munich, DE" }.to_string()),
        created_at: None,
        skills,
    }
}

fn create_subject() -> User {
    let mut subject = create_candidate(usize::MAX / 2);
    subject.id = "current_user".to_string();
    subject.location = Some("Berlin".to_string());
    subject
}

fn bench_pairwise_score(c: &mut Criterion) {
    let subject = create_subject();
    let candidate = create_candidate(1);
    let weights = ScoringWeights::default();

    c.bench_function("calculate_match_score", |b| {
        b.iter(|| calculate_match_score(black_box(&subject), black_box(&candidate), black_box(&weights)));
    });
}

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify", |b| {
        b.iter(|| {
            for score in 0..=100 {
                black_box(classify(black_box(score)));
            }
        });
    });
}

fn bench_ranking(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let subject = create_subject();

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 100, 1000, 10_000].iter() {
        let candidates: Vec<User> = (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("top_matches", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| matcher.top_matches(black_box(&subject), black_box(&candidates), black_box(20)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_pairwise_score, bench_classify, bench_ranking);

criterion_main!(benches);
