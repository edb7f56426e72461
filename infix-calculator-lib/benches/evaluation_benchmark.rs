use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use infix_calculator::interpreter::evaluate;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let expressions = [
        "1 + 2".to_string(),
        "3+4*2/(1 - 5)^2^3".to_string(),
        "((2+3)*(4 - 1))".to_string(),
        "2^3^2 - 10 / 4 * -1.5".to_string(),
        "(((1 + 2) * (3 + 4)) / ((5 - 6) ^ 2)) + 7 * 8 - 9".to_string(),
    ];
    for expression in expressions {
        group.throughput(Throughput::Elements(expression.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(&expression),
            &expression,
            |bencher, expression| {
                bencher.iter(|| evaluate(expression));
            },
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
