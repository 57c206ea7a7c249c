//! Input loading and synthetic data generation.
//!
//! The directory file holds one `<phone> <name>` pair per line, split on
//! the first space (names may contain spaces). The query file holds one
//! lookup name per line. Blank lines are skipped in both.

use std::fs;
use std::path::Path;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{BenchError, Entry};

pub fn load_directory(path: impl AsRef<Path>) -> Result<Vec<Entry>, BenchError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| BenchError::Input {
        path: path.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (phone, name) = line
            .split_once(' ')
            .ok_or(BenchError::MalformedLine { line: idx + 1 })?;
        entries.push(Entry::new(phone, name));
    }
    Ok(entries)
}

pub fn load_queries(path: impl AsRef<Path>) -> Result<Vec<String>, BenchError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| BenchError::Input {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}

/// Generates a shuffled synthetic directory with `count` entries.
pub fn generate_directory(count: usize, seed: u64) -> Vec<Entry> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let phone = format!("{:09}", rng.random_range(0..1_000_000_000u32));
            Entry::new(phone, random_name(&mut rng))
        })
        .collect()
}

/// Generates `count` lookup names against an existing directory: mostly
/// names that are present, with roughly one in ten guaranteed misses.
pub fn generate_queries(entries: &[Entry], count: usize, seed: u64) -> Vec<String> {
    let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
    (0..count)
        .map(|i| {
            if entries.is_empty() || rng.random_range(0..10u32) == 0 {
                format!("absent-{}", i)
            } else {
                entries[rng.random_range(0..entries.len())].name.clone()
            }
        })
        .collect()
}

fn random_name(rng: &mut SmallRng) -> String {
    let len = rng.random_range(4..10usize);
    let mut name = String::with_capacity(len);
    for i in 0..len {
        let letter = b'a' + rng.random_range(0..26u8);
        if i == 0 {
            name.push(letter.to_ascii_uppercase() as char);
        } else {
            name.push(letter as char);
        }
    }
    name
}
