//! Pool generation command
//!
//! Sweeps the whole candidate space for a width and collects every valid
//! equation, with a progress bar over the `=` placements.

use crate::core::Equation;
use crate::puzzles::generator::{enumerate_split, search_space, split_space, splits};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Statistics from a generation sweep
pub struct GenerateStats {
    pub width: usize,
    pub searched: u64,
    pub pool_size: usize,
    pub duration: Duration,
    pub candidates_per_second: f64,
}

/// Enumerate the full pool for a width, reporting progress
///
/// Returns the statistics and the pool itself, sorted lexicographically.
#[must_use]
pub fn run_generate(width: usize) -> (GenerateStats, Vec<Equation>) {
    let total = search_space(width);
    println!("🔢 Sweeping {total} candidate strings of width {width}...");

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut pool: Vec<Equation> = Vec::new();

    for (left_len, right_len) in splits(width) {
        pool.extend(enumerate_split(left_len, right_len));
        pb.inc(split_space(left_len));
        pb.set_message(format!("{} equations", pool.len()));
    }

    pb.finish_and_clear();
    let duration = start.elapsed();

    pool.sort_unstable_by(|a, b| a.text().cmp(b.text()));

    let stats = GenerateStats {
        width,
        searched: total,
        pool_size: pool.len(),
        duration,
        candidates_per_second: total as f64 / duration.as_secs_f64(),
    };

    (stats, pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::is_valid_equation;

    #[test]
    fn generate_small_width() {
        let (stats, pool) = run_generate(4);

        assert_eq!(stats.width, 4);
        assert_eq!(stats.pool_size, pool.len());
        assert_eq!(stats.searched, search_space(4));
        assert!(pool.iter().all(|eq| is_valid_equation(eq.text())));
    }

    #[test]
    fn generate_pool_is_sorted() {
        let (_, pool) = run_generate(4);
        let texts: Vec<&str> = pool.iter().map(Equation::text).collect();
        let mut sorted = texts.clone();
        sorted.sort_unstable();
        assert_eq!(texts, sorted);
    }
}
