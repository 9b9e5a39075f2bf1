use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jyotish_ephemeris::{Config, Ephemeris, Place};
use jyotish_search::{TransitFinder, TransitLimit};
use jyotish_time::Instant;
use jyotish_zodiac::{Body, DegreeRange, House, HouseRange};

fn ujjain_ephemeris() -> Ephemeris {
    let birth = Instant::from_utc_ymd_hms(2020, 1, 1, 0, 0, 0.0);
    let place = Place::new("Ujjain", 0, 23.293, 75.626, 478.0);
    Ephemeris::new(birth, place, Config::default()).expect("ephemeris should construct")
}

fn transit_search_bench(c: &mut Criterion) {
    let ephemeris = ujjain_ephemeris();
    let finder = TransitFinder::new(&ephemeris);
    let range = DegreeRange::new(0.0, 30.0);
    let limit = TransitLimit::Count {
        from: ephemeris.birth_utc(),
        count: 3,
    };

    let mut group = c.benchmark_group("search_transits");
    group.sample_size(10);
    group.bench_function("moon_next_three_transits", |b| {
        b.iter(|| {
            finder
                .transits(black_box(Body::Moon), black_box(range), black_box(limit))
                .expect("search should succeed")
        })
    });
    group.finish();
}

fn retrograde_search_bench(c: &mut Criterion) {
    let ephemeris = ujjain_ephemeris();
    let finder = TransitFinder::new(&ephemeris);
    let birth = ephemeris.birth_utc();
    let window = jyotish_time::Interval::new(birth, birth + jyotish_time::Duration::from_days(365.0 * 2.0));

    let mut group = c.benchmark_group("search_retrogrades");
    group.sample_size(10);
    group.bench_function("mars_two_year_window", |b| {
        b.iter(|| {
            finder
                .retrogrades(black_box(Body::Mars), black_box(window), None)
                .expect("search should succeed")
        })
    });
    group.finish();
}

fn lifetime_transits_bench(c: &mut Criterion) {
    let ephemeris = ujjain_ephemeris();
    let finder = TransitFinder::new(&ephemeris);
    let range = HouseRange::new(House::from_ordinal(0), 1);

    let mut group = c.benchmark_group("search_lifetime_transits");
    group.sample_size(10);
    group.bench_function("saturn_lifetime_in_aries", |b| {
        b.iter(|| {
            finder
                .lifetime_transits(black_box(Body::Saturn), black_box(range))
                .expect("search should succeed")
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    transit_search_bench,
    retrograde_search_bench,
    lifetime_transits_bench
);
criterion_main!(benches);
