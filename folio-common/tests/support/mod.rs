use folio_common::{Catalog, WorkItem};

/// Initialize tracing for tests with proper test output handling
#[allow(dead_code)]
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

/// Image with a hover variant, a looping video, and a five-slide slideshow
#[allow(dead_code)]
pub fn three_item_catalog() -> Catalog {
    let slides = (1..=5).map(|i| format!("/work/line art/{i}.jpg")).collect();
    Catalog::new(
        vec!["3D Art".to_string(), "Line Art".to_string()],
        vec![
            WorkItem::image(
                "3d-1",
                "Anvil practice",
                "3D Art",
                "/work/anvil-1.jpg",
                Some("/work/anvil-2.jpg"),
            ),
            WorkItem::video("3d-animation", "Donut animation", "3D Art", "/work/donut.mp4"),
            WorkItem::slideshow("line-art", "Line art collection", "Line Art", slides),
        ],
    )
    .expect("valid catalog")
}
