//! Benchmarks for validation, theme resolution and the wizard
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use onboard::profile::Field;
use onboard::store::MemoryStore;
use onboard::theme::{resolve, ThemeStyle};
use onboard::validation::validate;
use onboard::wizard::OnboardingWizard;

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    group.bench_function("name_valid", |b| {
        b.iter(|| validate(Field::Name, black_box("Ada Lovelace")))
    });

    group.bench_function("name_invalid_chars", |b| {
        b.iter(|| validate(Field::Name, black_box("R2-D2")))
    });

    group.bench_function("email_valid", |b| {
        b.iter(|| validate(Field::Email, black_box("ada@example.com")))
    });

    group.bench_function("company_long", |b| {
        let company = "x".repeat(120);
        b.iter(|| validate(Field::Company, black_box(&company)))
    });

    group.finish();
}

fn bench_theme(c: &mut Criterion) {
    let mut group = c.benchmark_group("theme");

    group.bench_function("resolve_all", |b| {
        b.iter(|| {
            for &style in ThemeStyle::all() {
                for dark in [false, true] {
                    black_box(resolve(black_box(dark), style));
                }
            }
        })
    });

    group.finish();
}

fn bench_wizard(c: &mut Criterion) {
    c.bench_function("wizard_complete_flow", |b| {
        b.iter(|| {
            let mut wizard = OnboardingWizard::new(MemoryStore::new());
            wizard.set_field(Field::Name, "Ada Lovelace");
            wizard.set_field(Field::Email, "ada@example.com");
            wizard.advance();
            wizard.set_field(Field::Company, "Analytical");
            wizard.set_field(Field::Industry, "Technology");
            wizard.set_field(Field::Size, "1-10");
            wizard.advance();
            black_box(wizard.submit())
        })
    });
}

criterion_group!(benches, bench_validation, bench_theme, bench_wizard);
criterion_main!(benches);
