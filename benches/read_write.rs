use criterion::{criterion_group, criterion_main, Criterion};
use geojson_codec::io::geojson::{from_str, read_geometry, to_string, write_geometry};
use geojson_codec::{Collection, Coordinate, Geometry, Line, Polygon, Properties};

fn create_data() -> Geometry {
    // An L shape
    let ring: Line = [
        (0.0, 0.0),
        (4.0, 0.0),
        (4.0, 1.0),
        (1.0, 1.0),
        (1.0, 4.0),
        (0.0, 4.0),
        (0.0, 0.0),
    ]
    .into_iter()
    .map(Coordinate::from)
    .collect();

    let mut properties = Properties::new();
    properties.insert("name".to_string(), "L".into());
    properties.insert("tags".to_string(), vec!["a", "b"].into());
    let poly: Geometry = Polygon::new(vec![ring])
        .with_additional_properties(properties)
        .into();

    Collection::new(vec![poly; 1000]).into()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let data = create_data();
    let text = to_string(&data).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    c.bench_function("write GeometryCollection of 1000 polygons", |b| {
        b.iter(|| to_string(&data).unwrap())
    });

    c.bench_function("write GeometryCollection to serde_json::Value", |b| {
        b.iter(|| write_geometry(serde_json::value::Serializer, &data).unwrap())
    });

    c.bench_function("read GeometryCollection from serde_json::Value", |b| {
        b.iter(|| read_geometry(&value).unwrap())
    });

    c.bench_function("parse GeometryCollection from text", |b| {
        b.iter(|| from_str(&text).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
