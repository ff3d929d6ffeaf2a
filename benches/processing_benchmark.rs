use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use retc_processor::models::{Cell, Dataset, Record};
use retc_processor::processors::RegionFilter;
use retc_processor::readers::DatasetReader;
use retc_processor::utils::constants::EXPECTED_COLUMNS;
use retc_processor::utils::parse_locale_float;

const REGIONS: [&str; 5] = [
    "Metropolitana de Santiago",
    "Valparaíso",
    "Biobío",
    " metropolitana de santiago ",
    "Maule",
];

// Build a full-schema dataset with comma-decimal numeric fields
fn create_test_dataset(rows: usize) -> Dataset {
    let columns: Vec<String> = EXPECTED_COLUMNS.iter().map(|c| c.to_string()).collect();

    let records = (0..rows)
        .map(|i| {
            let cells = EXPECTED_COLUMNS
                .iter()
                .map(|column| match *column {
                    "region" => Cell::Text(REGIONS[i % REGIONS.len()].to_string()),
                    "latitud" => Cell::Text(format!("-33,{:04}", i % 10_000)),
                    "longitud" => Cell::Text(format!("-70,{:04}", i % 10_000)),
                    "cantidad_toneladas" => Cell::Text(format!("{} {:03},{}", i % 100, i % 1000, i % 10)),
                    other => Cell::Text(format!("{}_{}", other, i)),
                })
                .collect();
            Record::new(cells)
        })
        .collect();

    Dataset::new(columns, records)
}

fn create_test_csv(rows: usize) -> String {
    let dataset = create_test_dataset(rows);
    let mut text = dataset.columns().join(";");
    text.push('\n');
    for record in dataset.records() {
        let line: Vec<String> = record.cells().iter().map(|c| c.to_string()).collect();
        text.push_str(&line.join(";"));
        text.push('\n');
    }
    text
}

fn benchmark_locale_parsing(c: &mut Criterion) {
    let samples = vec!["33,5", "-33,4489", "1 234,0", "", "abc", "  0,001 ", "12 345 678,25"];

    c.bench_function("parse_locale_float", |b| {
        b.iter(|| {
            let parsed = samples
                .iter()
                .filter_map(|s| parse_locale_float(black_box(s)))
                .count();
            black_box(parsed)
        })
    });
}

fn benchmark_csv_parsing(c: &mut Criterion) {
    let text = create_test_csv(1_000);
    let reader = DatasetReader::new();

    c.bench_function("parse_semicolon_csv_1000", |b| {
        b.iter(|| {
            let dataset = reader.parse_csv(black_box(&text));
            black_box(dataset.map(|d| d.len()).unwrap_or(0))
        })
    });
}

fn benchmark_region_filter_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("region_filter_by_size");
    let filter = RegionFilter::new("Metropolitana de Santiago");

    for &size in &[100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("rows", size), &size, |b, &rows| {
            let dataset = create_test_dataset(rows);

            b.iter(|| {
                let filtered = filter.apply(dataset.clone(), "bench.csv");
                black_box(filtered.map(|d| d.len()).unwrap_or(0))
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_locale_parsing,
    benchmark_csv_parsing,
    benchmark_region_filter_by_size
);
criterion_main!(benches);
