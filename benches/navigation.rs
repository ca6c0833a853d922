use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use photostack::app::types::SearchFilter;
use photostack::manifest::{Category, Image};
use photostack::navigation::Navigator;

// Helper function to generate a gallery with a single large category
fn generate_category(size: usize) -> Category {
    Category {
        id: "bench".to_string(),
        title: "Benchmark".to_string(),
        description: "Generated category for benchmarking".to_string(),
        cover_image: "/images/bench/cover.jpg".to_string(),
        images: (0..size)
            .map(|i| Image {
                id: i as u32 + 1,
                src: format!("/images/bench/{:05}.jpg", i),
                alt: format!("Generated photo number {}", i),
                caption: format!("Photo {} of the benchmark set", i),
            })
            .collect(),
    }
}

fn bench_wraparound_cycling(c: &mut Criterion) {
    let sizes = vec![100, 1000, 10000];
    let mut group = c.benchmark_group("navigation_cycle");

    for size in sizes {
        group.bench_with_input(BenchmarkId::new("next_image", size), &size, |b, &size| {
            let mut nav = Navigator::new(vec![generate_category(size)]);
            nav.select_category("bench");
            nav.open_lightbox(0);

            b.iter(|| {
                // Full wrap-around pass through the category
                for _ in 0..size {
                    nav.next_image();
                }
                black_box(nav.current_index());
            });
        });
    }

    group.finish();
}

fn bench_open_close_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation_open_close");
    let category = generate_category(1000);

    group.bench_function("open_close", |b| {
        let mut nav = Navigator::new(vec![category.clone()]);
        nav.select_category("bench");

        b.iter(|| {
            for i in (0..1000).step_by(7) {
                nav.open_lightbox(i);
                nav.close_lightbox();
            }
            black_box(nav.lightbox_open());
        });
    });

    group.finish();
}

fn bench_caption_filtering(c: &mut Criterion) {
    let sizes = vec![100, 1000, 10000];
    let mut group = c.benchmark_group("search_filter");

    for size in sizes {
        let category = generate_category(size);

        let mut literal = SearchFilter::default();
        for ch in "photo 50".chars() {
            literal.push_char(ch);
        }
        literal.apply();

        let mut regex = SearchFilter::default();
        for ch in "!^Photo 5\\d+".chars() {
            regex.push_char(ch);
        }
        regex.apply();

        group.bench_with_input(BenchmarkId::new("literal", size), &size, |b, _| {
            b.iter(|| {
                let matches: Vec<usize> = category
                    .images
                    .iter()
                    .enumerate()
                    .filter(|(_, image)| literal.matches_image(image))
                    .map(|(idx, _)| idx)
                    .collect();
                black_box(matches.len());
            });
        });

        group.bench_with_input(BenchmarkId::new("regex", size), &size, |b, _| {
            b.iter(|| {
                let matches: Vec<usize> = category
                    .images
                    .iter()
                    .enumerate()
                    .filter(|(_, image)| regex.matches_image(image))
                    .map(|(idx, _)| idx)
                    .collect();
                black_box(matches.len());
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_wraparound_cycling,
    bench_open_close_churn,
    bench_caption_filtering
);
criterion_main!(benches);
