//! Transition cost on a few long-lived patterns and a random soup

use std::time::Instant;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sparse_life::domain::{Coord, Life, Pattern, presets, random_soup};

/// Run `generations` steps, returning (ms per generation, final population)
fn benchmark(mut life: Life, generations: u32) -> (f64, usize) {
    let start = Instant::now();
    for _ in 0..generations {
        life.update();
    }
    let ms = start.elapsed().as_secs_f64() * 1000.0 / generations as f64;
    (ms, life.living_count())
}

fn seeded(pattern: &Pattern) -> Life {
    let mut life = Life::new();
    pattern.place_centered(&mut life, Coord::new(0, 0));
    life
}

fn soup(side: i64) -> Life {
    let mut life = Life::new();
    let mut rng = StdRng::seed_from_u64(0x11fe);
    let half = side / 2;
    random_soup(&mut life, Coord::new(-half, -half), Coord::new(half - 1, half - 1), 0.3, &mut rng);
    life
}

fn main() {
    println!("=== Sparse Life Benchmark ===\n");
    println!("{:>24} {:>8} {:>12} {:>12} {:>12}", "Start", "Gens", "Initial", "ms/gen", "Final");
    println!("{:-<72}", "");

    let runs: Vec<(String, Life, u32)> = vec![
        ("R-pentomino".to_string(), seeded(&presets::r_pentomino()), 1103),
        ("Acorn".to_string(), seeded(&presets::acorn()), 5206),
        ("Gosper Glider Gun".to_string(), seeded(&presets::glider_gun()), 3000),
        ("Soup 100x100".to_string(), soup(100), 500),
        ("Soup 500x500".to_string(), soup(500), 100),
    ];

    for (name, life, generations) in runs {
        let initial = life.living_count();
        let (ms, population) = benchmark(life, generations);
        println!("{name:>24} {generations:>8} {initial:>12} {ms:>12.3} {population:>12}");
    }

    println!("\n=== Cost scales with population, not area ===\n");

    // Same glider far from the origin costs the same as near it
    let far = Coord::new(i64::MAX / 2, i64::MIN / 2);
    let mut near_life = Life::new();
    let mut far_life = Life::new();
    presets::glider().place_on(&mut near_life, Coord::new(0, 0));
    presets::glider().place_on(&mut far_life, far);

    let (near_ms, _) = benchmark(near_life, 10_000);
    let (far_ms, _) = benchmark(far_life, 10_000);
    println!("Glider at origin:   {near_ms:.4} ms/gen");
    println!("Glider at {far}: {far_ms:.4} ms/gen");
}
