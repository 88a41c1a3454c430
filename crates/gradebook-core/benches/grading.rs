use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gradebook_core::{letter_grade, GradingSystem};

fn make_system(students: usize) -> GradingSystem {
    let mut system = GradingSystem::new();
    system.add_course("BENCH", "Benchmark course").unwrap();
    for i in 0..students {
        let id = format!("S{i}");
        system.add_student(&id, "Bench", "Student").unwrap();
        system.enroll(&id, "BENCH").unwrap();
        // every fourth student stays unscored
        if i % 4 != 0 {
            system
                .assign_score(&id, "BENCH", (i % 101) as f64)
                .unwrap();
        }
    }
    system
}

fn bench_course_average(c: &mut Criterion) {
    let mut group = c.benchmark_group("course_average");

    for size in [10, 1_000, 10_000] {
        let system = make_system(size);
        group.bench_function(format!("students={size}"), |b| {
            b.iter(|| system.course_average(black_box("BENCH")))
        });
    }

    group.finish();
}

fn bench_letter_grade(c: &mut Criterion) {
    let mut group = c.benchmark_group("letter_grade");

    group.bench_function("A", |b| b.iter(|| letter_grade(black_box(95.0))));
    group.bench_function("F", |b| b.iter(|| letter_grade(black_box(12.5))));
    group.bench_function("out_of_range", |b| {
        b.iter(|| letter_grade(black_box(101.0)))
    });

    group.finish();
}

fn bench_course_summary(c: &mut Criterion) {
    let system = make_system(1_000);
    c.bench_function("course_summary/students=1000", |b| {
        b.iter(|| system.course_summary(black_box("BENCH")))
    });
}

criterion_group!(
    benches,
    bench_course_average,
    bench_letter_grade,
    bench_course_summary
);
criterion_main!(benches);
