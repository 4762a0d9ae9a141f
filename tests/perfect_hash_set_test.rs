// Copyright (c) 2025 Fixed Set Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the perfect hash set and the query runner.

use std::io::Write;
use std::sync::{Arc, Barrier};
use std::thread;

use fixed_set_lib::app::run_queries;
use fixed_set_lib::config::{ConfigLoader, FixedSetConfig, OutputFormat};
use fixed_set_lib::data_structures::perfect_hash_set::{
    HashFunctionFactory, Key, PerfectHashSet, PerfectHashSetConfig,
};

#[test]
fn test_set_basic() {
    let mut factory = HashFunctionFactory::from_seed(42);
    let set = PerfectHashSet::build(&[1, 2, 3, 1_000_000_007], &mut factory).unwrap();

    assert!(set.contains(2));
    assert!(!set.contains(4));
    assert!(set.contains(1_000_000_007));
    assert!(!set.contains(-5));
}

#[test]
fn test_large_set_with_spread_keys() {
    let mut factory = HashFunctionFactory::from_seed(7);
    let keys: Vec<Key> = (0..20_000i64)
        .map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15u64 as i64))
        .collect();
    let config = PerfectHashSetConfig::new().with_memory_ratio(4);
    let mut set = PerfectHashSet::with_config(config);
    set.initialize(&keys, &mut factory).unwrap();

    for key in &keys {
        assert!(set.contains(*key));
    }
    let stats = set.stats();
    assert_eq!(stats.len, keys.len());
    assert!(stats.slot_count <= 4 * keys.len());
}

#[test]
fn test_concurrent_queries() {
    let mut factory = HashFunctionFactory::from_seed(3);
    let keys: Vec<Key> = (0..1_000).map(|i| i * 3).collect();
    let set = Arc::new(PerfectHashSet::build(&keys, &mut factory).unwrap());

    let thread_count = 8;
    let barrier = Arc::new(Barrier::new(thread_count));
    let mut handles = Vec::with_capacity(thread_count);

    for t in 0..thread_count {
        let set = Arc::clone(&set);
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            let offset = t as i64 % 3;
            (0..3_000i64).filter(|x| set.contains(x - x % 3 + offset)).count()
        }));
    }

    for (t, handle) in handles.into_iter().enumerate() {
        let hits = handle.join().unwrap();
        let expected = if t % 3 == 0 { 3_000 } else { 0 };
        assert_eq!(hits, expected, "thread {t}");
    }
}

#[test]
fn test_run_queries_end_to_end() {
    let input = "4\n1 2 3 1000000007\n4\n2 4 1000000007 -5\n";
    let mut out = Vec::new();
    let summary = run_queries(input.as_bytes(), &mut out, &FixedSetConfig::default()).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "Yes\nNo\nYes\nNo\n");
    assert_eq!(summary.hits, 2);
}

#[test]
fn test_run_queries_with_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fixed_set.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        "[hash_set]\nseed = 9\nmemory_ratio = 8\n\n[output]\nformat = \"json\""
    )
    .unwrap();

    let config = ConfigLoader::new(Some(&path), "FIXED_SET_INTEGRATION")
        .load()
        .unwrap();
    assert_eq!(config.output.format, OutputFormat::Json);

    let mut out = Vec::new();
    let summary = run_queries("2 -1 1 3 -1 0 1".as_bytes(), &mut out, &config).unwrap();
    assert_eq!(summary.stats.memory_ratio, 8);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "{\"value\":-1,\"present\":true}\n{\"value\":0,\"present\":false}\n{\"value\":1,\"present\":true}\n"
    );
}

#[test]
fn test_truncated_input_is_an_error() {
    let mut out = Vec::new();
    let result = run_queries("3 1 2".as_bytes(), &mut out, &FixedSetConfig::default());
    assert!(result.is_err());
    assert!(out.is_empty());
}
