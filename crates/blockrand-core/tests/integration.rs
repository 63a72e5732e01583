//! Integration tests for blockrand-core.
//!
//! These verify the full pipeline:
//! design validation → permuted blocks → bit columns → CSV files on disk.

use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use blockrand_core::{CSV_HEADER, FactorialDesign, write_factor_files};

fn parse_rows(contents: &str) -> Vec<(usize, u8)> {
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some(CSV_HEADER));
    lines
        .map(|line| {
            let (number, group) = line.split_once(',').expect("two columns");
            (number.parse().unwrap(), group.parse().unwrap())
        })
        .collect()
}

#[test]
fn ten_records_two_factors_rounds_up_to_twelve() {
    // Blocks of 4, so a request for 10 becomes 3 blocks of 12 rows.
    let design = FactorialDesign::new(10, 2).unwrap();
    let table = design.generate(&mut StdRng::seed_from_u64(20));
    assert_eq!(table.len(), 12);

    for factor_num in 1..=2 {
        let column = table.column(factor_num);
        assert_eq!(column.len(), 12);
        for block in column.chunks(4) {
            let ones: usize = block.iter().map(|&b| b as usize).sum();
            assert_eq!(ones, 2, "factor {factor_num}: block not 2 ones / 2 zeros");
        }
    }
}

#[test]
fn eight_records_three_factors_is_one_block() {
    let design = FactorialDesign::new(8, 3).unwrap();
    let table = design.generate(&mut StdRng::seed_from_u64(21));
    assert_eq!(table.len(), 8);

    // Rows read across factors (file1, file2, file3) rebuild 0..8 in binary.
    let mut values: Vec<u32> = (0..8)
        .map(|i| {
            table
                .row(i)
                .iter()
                .fold(0u32, |acc, &bit| (acc << 1) | u32::from(bit))
        })
        .collect();
    values.sort_unstable();
    assert_eq!(values, (0..8).collect::<Vec<u32>>());
}

#[test]
fn every_block_covers_every_combination() {
    let design = FactorialDesign::new(100, 4).unwrap();
    let table = design.generate(&mut StdRng::seed_from_u64(22));
    let seq_range = design.seq_range() as usize;
    assert_eq!(table.len(), 112);

    for block_start in (0..table.len()).step_by(seq_range) {
        let mut values: Vec<u32> = (block_start..block_start + seq_range)
            .map(|i| {
                table
                    .row(i)
                    .iter()
                    .fold(0u32, |acc, &bit| (acc << 1) | u32::from(bit))
            })
            .collect();
        values.sort_unstable();
        assert_eq!(values, (0..16).collect::<Vec<u32>>());
    }
}

#[test]
fn whole_output_is_exactly_balanced() {
    let design = FactorialDesign::new(300, 5).unwrap();
    let table = design.generate(&mut StdRng::seed_from_u64(23));

    for factor_num in 1..=5 {
        let ones: usize = table
            .column(factor_num)
            .iter()
            .map(|&b| b as usize)
            .sum();
        assert_eq!(ones, table.len() / 2);
    }
}

#[test]
fn csv_files_land_on_disk_with_consistent_shape() {
    let dir = tempfile::tempdir().unwrap();
    let prefix = dir.path().join("trial");

    let design = FactorialDesign::new(10, 2).unwrap();
    let table = design.generate(&mut StdRng::seed_from_u64(24));
    let written = write_factor_files(&table, prefix.to_str().unwrap()).unwrap();

    assert_eq!(written.len(), 2);
    for path in &written {
        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.ends_with('\n'), "file must be newline-terminated");
        let rows = parse_rows(&contents);
        assert_eq!(rows.len(), 12);

        let numbers: Vec<usize> = rows.iter().map(|&(n, _)| n).collect();
        assert_eq!(numbers, (1..=12).collect::<Vec<usize>>());
        assert!(rows.iter().all(|&(_, g)| g == 0 || g == 1));
    }
}

#[test]
fn same_seed_reproduces_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let design = FactorialDesign::new(40, 3).unwrap();

    let mut outputs: Vec<Vec<String>> = Vec::new();
    for run in ["first", "second"] {
        let prefix = dir.path().join(run);
        let table = design.generate(&mut StdRng::seed_from_u64(77));
        let written = write_factor_files(&table, prefix.to_str().unwrap()).unwrap();
        outputs.push(
            written
                .iter()
                .map(|p| std::fs::read_to_string(p).unwrap())
                .collect(),
        );
    }
    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn different_seeds_produce_different_files() {
    let dir = tempfile::tempdir().unwrap();
    let design = FactorialDesign::new(200, 4).unwrap();

    let mut outputs: Vec<Vec<String>> = Vec::new();
    for (run, seed) in [("a", 1u64), ("b", 2u64)] {
        let prefix = dir.path().join(run);
        let table = design.generate(&mut StdRng::seed_from_u64(seed));
        let written = write_factor_files(&table, prefix.to_str().unwrap()).unwrap();
        outputs.push(
            written
                .iter()
                .map(|p| std::fs::read_to_string(p).unwrap())
                .collect(),
        );
    }
    assert_ne!(outputs[0], outputs[1]);
}

#[test]
fn all_factor_files_share_one_row_count() {
    let dir = tempfile::tempdir().unwrap();
    let prefix: PathBuf = dir.path().join("width");

    let design = FactorialDesign::new(17, 3).unwrap();
    assert_eq!(design.actual_list_length(), 24);

    let table = design.generate(&mut StdRng::seed_from_u64(25));
    let written = write_factor_files(&table, prefix.to_str().unwrap()).unwrap();

    let counts: Vec<usize> = written
        .iter()
        .map(|p| parse_rows(&std::fs::read_to_string(p).unwrap()).len())
        .collect();
    assert_eq!(counts, vec![24, 24, 24]);
}
