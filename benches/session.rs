use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tco_cmp::{FieldEdit, FormState, Summary};

/// Generates a repeating sequence of form edits.
///
/// Cycles through segment, duration, distance and price edits, with every
/// seventh edit invalid so the rejection path is exercised too.
pub struct EditGenerator {
    remaining: u32,
    step: u32,
}

impl EditGenerator {
    pub fn new(count: u32) -> Self {
        Self {
            remaining: count,
            step: 0,
        }
    }
}

impl Iterator for EditGenerator {
    type Item = FieldEdit;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let edit = match self.step % 7 {
            0 => {
                let segment = ["GENERALISTA", "PREMIUM", "LUXURY"][(self.step % 3) as usize];
                FieldEdit::new("segment", segment)
            }
            1 => {
                let months = ["24", "36", "48", "60"][(self.step % 4) as usize];
                FieldEdit::new("duration", months)
            }
            2 => FieldEdit::new("km", (20_000 + self.step % 100_000).to_string()),
            3 => FieldEdit::new("purchasePrice", "31500.50"),
            4 => FieldEdit::new("rentalFee", "420"),
            5 => {
                let flag = if self.step % 2 == 0 { "true" } else { "false" };
                FieldEdit::new("isBusiness", flag)
            }
            _ => FieldEdit::new("fuel", "n/a"),
        };
        self.step += 1;

        Some(edit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining as usize, Some(self.remaining as usize))
    }
}

impl ExactSizeIterator for EditGenerator {}

fn bench_edits(c: &mut Criterion) {
    let mut group = c.benchmark_group("edits");

    for count in [1_000u32, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut state = FormState::new();
                for edit in EditGenerator::new(count) {
                    let _ = black_box(state.update_field(&edit.field, &edit.value));
                }
                state
            });
        });
    }

    group.finish();
}

fn bench_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("summary");

    let private = FormState::new();
    let mut business = FormState::new();
    let _ = business.update_field("isBusiness", "true");

    group.bench_function("private", |b| b.iter(|| Summary::of(black_box(&private))));
    group.bench_function("business", |b| b.iter(|| Summary::of(black_box(&business))));

    group.finish();
}

fn bench_edit_then_read(c: &mut Criterion) {
    c.bench_function("edit_then_read_10k", |b| {
        b.iter(|| {
            let mut state = FormState::new();
            for edit in EditGenerator::new(10_000) {
                let _ = state.update_field(&edit.field, &edit.value);
                black_box(Summary::of(&state));
            }
        });
    });
}

criterion_group!(benches, bench_edits, bench_summary, bench_edit_then_read);
criterion_main!(benches);
