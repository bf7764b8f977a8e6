use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dewetra_reconciler::models::{SensorClass, SensorRecord, Station};
use dewetra_reconciler::processors::{CollisionPolicy, CoordinateIndex, Enricher};
use dewetra_reconciler::utils::coordinates::{coordinate_key, QuantizeMode};
use std::collections::HashMap;

// Create a synthetic station grid with sensors scattered around it
fn create_test_data(station_count: usize) -> (HashMap<String, Station>, Vec<SensorRecord>) {
    let mut stations = HashMap::with_capacity(station_count);
    let mut sensors = Vec::with_capacity(station_count * 2);

    for i in 0..station_count {
        let lat = 44.0 + ((i % 100) as f64) * 0.013;
        let lon = 8.0 + ((i / 100) as f64) * 0.017;
        let id = format!("station-{:04}", i);

        stations.insert(
            id.clone(),
            Station::new(id.clone(), lat, lon, format!("Neighborhood {}", i)),
        );

        // One sensor exactly on the station, one slightly offset
        sensors.push(SensorRecord::new(
            format!("sensor-{:04}-a", i),
            lat,
            lon,
            id.clone(),
        ));
        sensors.push(SensorRecord::new(
            format!("sensor-{:04}-b", i),
            lat + 0.00001,
            lon + 0.00001,
            id,
        ));
    }

    (stations, sensors)
}

fn benchmark_coordinate_key(c: &mut Criterion) {
    let variant = (QuantizeMode::Round, QuantizeMode::Floor);

    c.bench_function("coordinate_key", |b| {
        b.iter(|| {
            black_box(coordinate_key(
                black_box(45.12345),
                black_box(9.54321),
                black_box(100_000.0),
                variant,
            ))
        })
    });
}

fn benchmark_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");

    for station_count in [100, 1000, 5000] {
        let (stations, _) = create_test_data(station_count);

        group.bench_with_input(
            BenchmarkId::from_parameter(station_count),
            &stations,
            |b, stations| {
                b.iter(|| {
                    let index =
                        CoordinateIndex::build(stations, CollisionPolicy::LogOverwrite).unwrap();
                    black_box(index.len())
                })
            },
        );
    }

    group.finish();
}

fn benchmark_enrichment(c: &mut Criterion) {
    let mut group = c.benchmark_group("enrich_class");

    for station_count in [100, 1000] {
        let (stations, sensors) = create_test_data(station_count);
        let index = CoordinateIndex::build(&stations, CollisionPolicy::LogOverwrite).unwrap();
        let enricher = Enricher::new(index);

        group.bench_with_input(
            BenchmarkId::from_parameter(station_count),
            &sensors,
            |b, sensors| {
                b.iter(|| {
                    let mut fresh = stations.clone();
                    let outcome =
                        enricher.enrich_class(&mut fresh, SensorClass::Anemometro, sensors);
                    black_box(outcome.matched)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_coordinate_key,
    benchmark_index_build,
    benchmark_enrichment
);
criterion_main!(benches);
