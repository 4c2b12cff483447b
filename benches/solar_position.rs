use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use sunpos::{GeoCoordinate, Instant, SolarCoordinates, almanac};

fn benchmark_single_calculation(c: &mut Criterion) {
    let instant = Instant::from_utc(2025, 10, 31, 18, 33, 0).unwrap();
    let observer = GeoCoordinate::from_degrees(51.340333, 12.37475);

    c.bench_function("solar_position_single", |b| {
        b.iter(|| almanac::solar_position(black_box(instant), black_box(&observer)))
    });

    c.bench_function("solar_coordinates_single", |b| {
        b.iter(|| SolarCoordinates::at(black_box(instant)))
    });
}

fn benchmark_time_series_fixed_location(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_series_fixed_location");

    let start = Instant::from_utc(2025, 6, 21, 0, 0, 0).unwrap();
    let observer = GeoCoordinate::from_degrees(37.7749, -122.4194);

    for &count in &[1000_i64, 10_000, 86_400] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("seconds", count), &count, |b, &count| {
            b.iter(|| {
                (0..count)
                    .map(|s| almanac::solar_position(start.add_seconds(s), &observer))
                    .filter(|position| position.is_sun_up())
                    .count()
            })
        });
    }

    group.finish();
}

fn benchmark_coordinate_sweep_fixed_time(c: &mut Criterion) {
    let mut group = c.benchmark_group("coordinate_sweep_fixed_time");

    let instant = Instant::from_utc(2025, 3, 20, 12, 0, 0).unwrap();
    let grid: Vec<GeoCoordinate> = (-90..=90)
        .step_by(2)
        .flat_map(|lat| {
            (-180..180)
                .step_by(2)
                .map(move |lon| GeoCoordinate::from_degrees(f64::from(lat), f64::from(lon)))
        })
        .collect();

    group.throughput(Throughput::Elements(grid.len() as u64));

    group.bench_function("direct", |b| {
        b.iter(|| {
            grid.iter()
                .map(|observer| almanac::solar_position(black_box(instant), observer))
                .filter(|position| position.is_sun_up())
                .count()
        })
    });

    group.bench_function("reused_coordinates", |b| {
        b.iter(|| {
            let coordinates = SolarCoordinates::at(black_box(instant));
            grid.iter()
                .map(|observer| almanac::solar_position_with_coordinates(observer, &coordinates))
                .filter(|position| position.is_sun_up())
                .count()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_calculation,
    benchmark_time_series_fixed_location,
    benchmark_coordinate_sweep_fixed_time
);
criterion_main!(benches);
