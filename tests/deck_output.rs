//! Deck-level output: configuration, SVG pages and generation sessions

use std::fs;

use carousel_slides::{
    find_template, CarouselSession, ConfigError, Deck, GenerationError, GenerationRequest,
    RenderConfig, SlideContent, Surface,
};

const DECK: &str = "\
Why Rust
Fast
Safe
---
In numbers
Crashes down 87% after the rewrite
---
Rust vs C++
memory safety vs manual care
";

#[test]
fn config_file_changes_canvas_and_delimiter() {
    let dir = std::env::temp_dir().join("carousel-slides-config-test");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("square.toml");
    fs::write(
        &path,
        "[pdf]\nwidth = 1080.0\nheight = 1080.0\n\n[deck]\nslide_delimiter = \"***\"\n",
    )
    .unwrap();

    let config = RenderConfig::from_file(&path).unwrap();
    let template = find_template("title-slide").unwrap();
    let deck = Deck::render("One\n***\nTwo\n---\nstill two", template, Surface::Pdf, &config);

    assert_eq!(deck.len(), 2);
    let root = deck.slides[0].node.as_element().unwrap();
    assert_eq!(root.style_value("width"), Some("1080px"));
    assert_eq!(root.style_value("height"), Some("1080px"));
}

#[test]
fn malformed_config_reports_location() {
    let source = "[pdf]\nwidth = 800\nbogus = true\n";
    let err = RenderConfig::from_str(source).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));

    let report = err.format(source, "deck.toml");
    assert!(report.contains("deck.toml"));
    assert!(report.contains("bogus"));
}

#[test]
fn svg_pages_follow_the_pdf_canvas() {
    let config = RenderConfig::default();
    let template = find_template("comparison").unwrap();
    let deck = Deck::render(DECK, template, Surface::Pdf, &config);
    let pages = deck.to_svg_pages(&config).unwrap();

    assert_eq!(pages.len(), 3);
    for (i, page) in pages.iter().enumerate() {
        assert!(page.starts_with("<?xml"), "page {}", i + 1);
        assert!(page.contains(r#"viewBox="0 0 800 600""#));
        assert!(page.contains(&format!(">{}/3</text>", i + 1)));
    }
    assert!(pages[2].contains("Rust vs C++"));
}

#[test]
fn json_round_trip_keeps_layout_payload() {
    let template = find_template("comparison").unwrap();
    let deck = Deck::render(DECK, template, Surface::Web, &RenderConfig::default());
    let json: serde_json::Value = serde_json::from_str(&deck.to_json().unwrap()).unwrap();

    let slides = json["slides"].as_array().unwrap();
    assert_eq!(slides.len(), 3);
    assert_eq!(slides[2]["content"]["left_side"], "memory safety");
    assert_eq!(slides[2]["content"]["right_side"], "manual care");
    assert_eq!(slides[2]["node"]["type"], "element");
}

#[test]
fn session_restyles_last_generation() {
    let generator = |request: &GenerationRequest| match request.slide_count() {
        Some(_) => Ok(DECK.to_string()),
        None => Err(GenerationError::failed("short text unavailable")),
    };
    let request = GenerationRequest::Carousel {
        topic: "rust".into(),
        tone: "upbeat".into(),
        slide_count: 3,
    };

    let mut session = CarouselSession::new(RenderConfig::default());
    session.generate(&generator, &request).unwrap();
    session.select_template(find_template("big-number").unwrap());

    let deck = session.deck().unwrap();
    assert_eq!(deck.len(), 3);
    match &deck.slides[1].content {
        SlideContent::BigNumber { number, .. } => assert_eq!(number, "87%"),
        other => panic!("expected big number, got {other:?}"),
    }

    let short = GenerationRequest::ShortText {
        topic: "rust".into(),
        tone: "upbeat".into(),
    };
    assert!(session.generate(&generator, &short).is_err());
    assert_eq!(session.deck().unwrap().len(), 3);
}
