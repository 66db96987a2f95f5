use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use prefix_router::{Router, RouterBuilder};

const RULES: &[&str] = &[
    "/",
    "/about",
    "/user",
    "/user/{name}",
    "/user/{name}/posts",
    "/user/{name}/posts/{id}",
    "/user/{name}/files/{*path}",
    "/static/{*path}",
    "/api/v1/{resource}/{id}",
];

fn build() -> Router<usize> {
    let mut builder = RouterBuilder::new();
    builder.add_many(RULES.iter().copied().zip(0..));
    builder.build().unwrap()
}

fn router_route(c: &mut Criterion) {
    let mut group = c.benchmark_group("router-route");

    group.bench_function("single-route", |b| {
        let mut builder = RouterBuilder::new();
        builder.add("/hello/{name}", 1_usize);
        let router = builder.build().unwrap();
        b.iter_with_large_drop(|| router.route("/hello/world"))
    });

    let router = build();

    group.bench_function("constant", |b| {
        b.iter_with_large_drop(|| router.route("/about"))
    });

    group.bench_function("captures", |b| {
        b.iter_with_large_drop(|| router.route("/user/alice/posts/42"))
    });

    group.bench_function("wildcard", |b| {
        b.iter_with_large_drop(|| router.route("/user/alice/files/a/b/c.txt"))
    });

    group.bench_function("miss", |b| {
        b.iter_with_large_drop(|| router.route("/user/alice/unknown"))
    });
}

fn router_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("router-build");

    group.bench_function("many-routes", |b| {
        b.iter_batched(
            || {
                let mut builder = RouterBuilder::new();
                builder.add_many(RULES.iter().copied().zip(0_usize..));
                builder
            },
            |builder| builder.build().unwrap(),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, router_route, router_build);
criterion_main!(benches);
