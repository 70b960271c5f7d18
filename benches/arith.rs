use std::hint::black_box;

use big_int::BigInt;
use criterion::{criterion_group, criterion_main, Criterion};
use rand::{distributions::Uniform, prelude::Distribution, thread_rng};

fn random_digits(len: usize) -> String {
    let digit: Uniform<u8> = Uniform::new_inclusive(0, 9);
    let mut rng = thread_rng();
    let mut text = String::with_capacity(len);
    text.push(char::from(b'1' + digit.sample(&mut rng) % 9));
    for _ in 1..len {
        text.push(char::from(b'0' + digit.sample(&mut rng)));
    }
    text
}

fn criterion_benchmark(c: &mut Criterion) {
    let a_text = random_digits(120);
    let b_text = random_digits(40);
    let a: BigInt = a_text.parse().unwrap();
    let b: BigInt = b_text.parse().unwrap();
    let two = BigInt::from(2u32);

    c.bench_function("parse_120_digits", |bench| {
        bench.iter(|| black_box(a_text.as_str()).parse::<BigInt>().unwrap())
    });

    c.bench_function("to_string_120_digits", |bench| {
        bench.iter(|| black_box(&a).to_string())
    });

    c.bench_function("add_120_40", |bench| {
        bench.iter(|| black_box(&a) + black_box(&b))
    });

    c.bench_function("mul_120_40", |bench| {
        bench.iter(|| black_box(&a) * black_box(&b))
    });

    c.bench_function("div_rem_120_40", |bench| {
        bench.iter(|| black_box(&a).div_rem(black_box(&b)).unwrap())
    });

    c.bench_function("pow_2_256", |bench| {
        bench.iter(|| black_box(&two).pow(256u32).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
