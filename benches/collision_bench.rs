use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use polygon_collision::{Ball, BallConfig, CollisionTester, Polygon, Scene, Vec2};

// --- Helper for building regular polygons ---
fn regular_polygon(center: Vec2, radius: f64, sides: usize) -> Polygon {
    let vertices = (0..sides)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::TAU / sides as f64;
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect();
    Polygon::new(vertices).unwrap()
}

// Pairwise SAT test between two overlapping N-gons
fn bench_polygon_pair(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon_pair");
    let tester = CollisionTester::new();

    for sides in [4, 16, 64].iter() {
        let a = regular_polygon(Vec2::ZERO, 10.0, *sides);
        let b = regular_polygon(Vec2::new(5.0, 3.0), 10.0, *sides);
        group.bench_with_input(BenchmarkId::from_parameter(sides), sides, |bench, _| {
            bench.iter(|| tester.test_polygons(black_box(&a), black_box(&b)));
        });
    }
    group.finish();
}

// Balls bouncing inside a box made of four walls
fn bench_scene_ticks(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_ticks");

    for num_balls in [1, 10, 50].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_balls), num_balls, |bench, &n| {
            bench.iter(|| {
                let mut scene = Scene::new();
                let wall = |x: f64, y: f64, w: f64, h: f64| {
                    Polygon::new(vec![
                        Vec2::new(x, y),
                        Vec2::new(x + w, y),
                        Vec2::new(x + w, y + h),
                        Vec2::new(x, y + h),
                    ])
                    .unwrap()
                };
                scene.add_polygon_obstacle(wall(-10.0, -10.0, 1300.0, 10.0));
                scene.add_polygon_obstacle(wall(-10.0, 1024.0, 1300.0, 10.0));
                scene.add_polygon_obstacle(wall(-10.0, 0.0, 10.0, 1024.0));
                scene.add_polygon_obstacle(wall(1280.0, 0.0, 10.0, 1024.0));

                for i in 0..n {
                    let center = Vec2::new(40.0 + (i as f64 * 23.0) % 1200.0, 40.0 + (i as f64 * 17.0) % 900.0);
                    let body = regular_polygon(center, 8.0, 12);
                    let config = BallConfig {
                        speed: 10.0,
                        direction: Vec2::new(1.0, (i % 5) as f64).normalize(),
                    };
                    scene.add_ball(Ball::with_config(body.vertices().to_vec(), &config).unwrap());
                }

                for _ in 0..30 {
                    black_box(scene.tick());
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_polygon_pair, bench_scene_ticks);
criterion_main!(benches);
