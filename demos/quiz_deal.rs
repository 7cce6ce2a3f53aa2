//! Dealing a quiz round: filter by chapter, front-load missed questions,
//! and pin per-question option order for the session.
//!
//! Run with `cargo run --example quiz_deal`.

use mazeru::cache::ShuffleCache;
use mazeru::filter_sample_with_rng;
use mazeru::weighted::{weighted_shuffle_with_rng, Weighted};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone)]
struct Question {
    id: &'static str,
    chapter: &'static str,
    prompt: &'static str,
    options: Vec<&'static str>,
    misses: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let bank = vec![
        Question {
            id: "q1",
            chapter: "1",
            prompt: "Largest planet?",
            options: vec!["Jupiter", "Saturn", "Neptune", "Earth"],
            misses: 2,
        },
        Question {
            id: "q2",
            chapter: "1",
            prompt: "Closest star?",
            options: vec!["Proxima Centauri", "Sirius", "The Sun", "Vega"],
            misses: 0,
        },
        Question {
            id: "q3",
            chapter: "1",
            prompt: "Hottest planet?",
            options: vec!["Mercury", "Venus", "Mars", "Jupiter"],
            misses: 1,
        },
        Question {
            id: "q4",
            chapter: "2",
            prompt: "Speed of light?",
            options: vec!["300 km/s", "300,000 km/s", "3,000 km/s"],
            misses: 0,
        },
    ];

    let mut rng = ChaCha8Rng::seed_from_u64(7);

    // Chapter 1 only, at most three questions, random subset in random order.
    let round = filter_sample_with_rng(
        &bank,
        Some(&|q: &Question| q.chapter == "1"),
        Some(3),
        &mut rng,
    );
    println!("chapter-1 round: {} questions", round.len());

    // Questions missed before come up earlier on average.
    let weighted: Vec<Weighted<Question>> = round
        .into_iter()
        .map(|q| {
            let w = 1.0 + q.misses as f64;
            Weighted::new(q, w)
        })
        .collect();
    let ordered = weighted_shuffle_with_rng(weighted, &mut rng)?;

    // Option order is pinned per question for the whole session.
    let mut options = ShuffleCache::new();
    for entry in &ordered {
        let q = entry.item();
        let shown = options.get_or_shuffle_with_rng(q.id, &q.options, &mut rng);
        println!("  [{}] {} -> {:?}", q.id, q.prompt, shown);
    }

    // Revisiting a question renders the same option order.
    if let Some(first) = ordered.first() {
        let q = first.item();
        let again = options.get_or_shuffle_with_rng(q.id, &q.options, &mut rng);
        println!("revisit [{}] -> {:?}", q.id, again);
    }

    // A new session starts from a clean slate.
    options.clear();
    println!("cache cleared: {} entries", options.len());

    Ok(())
}
