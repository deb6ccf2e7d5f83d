//! Benchmarks for binary value interpretation and conversion.
//!
//! Covers the hot paths used when decoding fields out of binary formats:
//! - Construction with length validation
//! - Integer interpretation in both byte orders
//! - Checked unsigned to signed casts
//! - Double word splitting
//! - Sequential field reads from a buffer

extern crate binvalue;

use binvalue::prelude::*;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// Benchmark constructing a double word from a slice.
fn bench_construct_dword(c: &mut Criterion) {
    let data = [0x11, 0x22, 0x33, 0x44];

    c.bench_function("construct_dword", |b| {
        b.iter(|| {
            let value = UnsignedDword::new(black_box(&data), LITTLE_ENDIAN).unwrap();
            black_box(value)
        });
    });
}

/// Benchmark interpreting signed double words in both byte orders.
fn bench_to_int_dword(c: &mut Criterion) {
    let little = Dword::new(&[0xFE, 0xFF, 0xFF, 0xFF], LITTLE_ENDIAN).unwrap();
    let big = Dword::new(&[0xFF, 0xFF, 0xFF, 0xFE], BIG_ENDIAN).unwrap();

    c.bench_function("to_int_dword_le", |b| {
        b.iter(|| black_box(black_box(&little).to_int()));
    });

    c.bench_function("to_int_dword_be", |b| {
        b.iter(|| black_box(black_box(&big).to_int()));
    });
}

/// Benchmark the checked cast on both the success and the overflow path.
fn bench_to_signed(c: &mut Criterion) {
    let fits = UnsignedWord::new(&[0xFF, 0x7F], LITTLE_ENDIAN).unwrap();
    let overflows = UnsignedWord::new(&[0xFF, 0xFF], LITTLE_ENDIAN).unwrap();

    c.bench_function("to_signed_word_ok", |b| {
        b.iter(|| black_box(black_box(&fits).to_signed()));
    });

    c.bench_function("to_signed_word_overflow", |b| {
        b.iter(|| black_box(black_box(&overflows).to_signed()));
    });
}

/// Benchmark splitting a double word into its halves.
fn bench_split_words(c: &mut Criterion) {
    let dword = UnsignedDword::new(&[0x11, 0x22, 0x33, 0x44], BIG_ENDIAN).unwrap();

    c.bench_function("split_dword", |b| {
        b.iter(|| {
            let value = black_box(&dword);
            black_box((value.high_word(), value.low_word()))
        });
    });
}

/// Benchmark reading a small header of mixed-width fields.
fn bench_read_header(c: &mut Criterion) {
    let header = [0xCA, 0xFE, 0xBA, 0xBE, 0x02, 0x00, 0x81, 0x00];

    c.bench_function("read_header_fields", |b| {
        b.iter(|| {
            let data = black_box(&header);
            let mut offset = 0;
            let magic: UnsignedDword = read_value_at(data, &mut offset, BIG_ENDIAN).unwrap();
            let version: UnsignedWord = read_value_at(data, &mut offset, LITTLE_ENDIAN).unwrap();
            let flags: Word = read_value_at(data, &mut offset, LITTLE_ENDIAN).unwrap();
            black_box((magic, version, flags))
        });
    });
}

criterion_group!(
    benches,
    bench_construct_dword,
    bench_to_int_dword,
    bench_to_signed,
    bench_split_words,
    bench_read_header
);
criterion_main!(benches);
