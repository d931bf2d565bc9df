use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use thai_baht::{Amount, convert_currency, convert_integer};

/// Generates amounts spread over every place value, with and without satang.
pub struct AmountGenerator {
    next: i64,
    step: i64,
    remaining: usize,
}

impl AmountGenerator {
    pub fn new(step: i64, count: usize) -> Self {
        Self {
            next: 0,
            step,
            remaining: count,
        }
    }
}

impl Iterator for AmountGenerator {
    type Item = Amount;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let satang = self.next;
        self.next = self.next.wrapping_add(self.step);
        Some(Amount::from_satang(satang))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for AmountGenerator {}

fn bench_integer(c: &mut Criterion) {
    let mut group = c.benchmark_group("integer");

    for n in [21, 1_001, 999_999, 1_000_001, 123_456_789_012, i64::MAX] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| convert_integer(black_box(n)));
        });
    }

    group.finish();
}

fn bench_currency(c: &mut Criterion) {
    let mut group = c.benchmark_group("currency");

    // small steps stay below a million baht, large steps reach the ล้าน branch
    for step in [1_i64, 7_919, 1_000_000_007] {
        group.bench_with_input(BenchmarkId::from_parameter(step), &step, |b, &step| {
            b.iter(|| {
                for amount in AmountGenerator::new(step, 10_000) {
                    black_box(convert_currency(amount));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_integer, bench_currency);
criterion_main!(benches);
