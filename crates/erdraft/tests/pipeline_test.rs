//! Integration tests for the parse → render → export pipeline.
//!
//! A fake renderer stands in for Graphviz so these run without external
//! tools.

use std::{fs, io::Read, path::Path};

use tempfile::tempdir;

use erdraft::{
    DiagramBuilder, ErdraftError, GenerateError,
    config::{AppConfig, GeneratorConfig, SlideConfig},
    export::{DiagramExporter, ExportError, ExportState, Renderer, raster_path},
    structure::DiagramGraph,
};

const HOTEL: &str = "\
Entity: Hotel [id*, name, location]
Entity: Room [id*, hotel_id, room_number, price]
Entity: Customer [id*, name, email]
Entity: Booking [id*, customer_id, hotel_id, booking_date]

Relationship: Hotel -- has --> Room (1:N)
Relationship: Customer -- makes --> Booking (1:N)
Relationship: Booking -- belongs_to --> Hotel (1:1)
";

/// Returns the signature and IHDR chunk of a 200x100 PNG.
struct FakeRenderer;

impl Renderer for FakeRenderer {
    fn layout(&self, _graph: &DiagramGraph) -> Result<Vec<u8>, ExportError> {
        let mut data = vec![0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];
        data.extend_from_slice(&13u32.to_be_bytes());
        data.extend_from_slice(b"IHDR");
        data.extend_from_slice(&200u32.to_be_bytes());
        data.extend_from_slice(&100u32.to_be_bytes());
        data.extend_from_slice(&[8, 6, 0, 0, 0, 0, 0, 0, 0]);
        Ok(data)
    }
}

struct FailingRenderer;

impl Renderer for FailingRenderer {
    fn layout(&self, _graph: &DiagramGraph) -> Result<Vec<u8>, ExportError> {
        Err(ExportError::Render("dot not found".to_string()))
    }
}

fn entries(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}

#[test]
fn test_description_covers_every_declaration() {
    let builder = DiagramBuilder::default();
    let model = builder.parse(HOTEL);
    let dir = tempdir().unwrap();
    let path = dir.path().join("er.dot");

    builder
        .exporter(FakeRenderer)
        .export_description(&model, &path)
        .unwrap();
    let dot = fs::read_to_string(&path).unwrap();

    let lines: Vec<&str> = dot.lines().collect();
    assert_eq!(lines.first(), Some(&"digraph ERD {"));
    assert_eq!(lines.get(1), Some(&"rankdir=LR;"));
    assert_eq!(lines.last(), Some(&"}"));
    assert_eq!(lines.iter().filter(|l| l.contains("[shape=plaintext")).count(), 4);
    assert_eq!(lines.iter().filter(|l| l.contains(" -> ")).count(), 3);
    assert!(dot.contains("\"Booking\" -> \"Hotel\" [label=\"belongs_to\"];"));
}

#[test]
fn test_render_then_slide() {
    let builder = DiagramBuilder::default();
    let model = builder.parse(HOTEL);
    let dir = tempdir().unwrap();
    let base = dir.path().join("hotel");

    let mut exporter = builder.exporter(FakeRenderer);
    assert!(exporter.render(&model, &base));
    assert!(raster_path(&base).exists());

    let deck = dir.path().join("hotel.pptx");
    exporter.export_slide(&deck).unwrap();

    let mut archive = zip::ZipArchive::new(fs::File::open(&deck).unwrap()).unwrap();
    let mut slide = String::new();
    archive
        .by_name("ppt/slides/slide1.xml")
        .unwrap()
        .read_to_string(&mut slide)
        .unwrap();
    assert!(slide.contains("<a:t>Entity-Relationship Diagram</a:t>"));
    // 8in wide, 2:1 image
    assert!(slide.contains(r#"<a:ext cx="7315200" cy="3657600"/>"#));
}

#[test]
fn test_slide_before_render_writes_nothing() {
    let dir = tempdir().unwrap();
    let exporter = DiagramExporter::new(FakeRenderer);

    let err = exporter.export_slide(dir.path().join("deck.pptx")).unwrap_err();

    assert!(matches!(err, ExportError::NotRendered));
    assert_eq!(entries(dir.path()), 0);
}

#[test]
fn test_unknown_entity_fails_render() {
    let builder = DiagramBuilder::default();
    let model = builder.parse("Entity: Hotel [id*]\nRelationship: Hotel -- has --> Room");
    let dir = tempdir().unwrap();

    let mut exporter = builder.exporter(FakeRenderer);
    assert!(!exporter.render(&model, dir.path().join("er")));
    assert_eq!(exporter.state(), &ExportState::Unrendered);
    assert_eq!(entries(dir.path()), 0);

    let err = exporter.try_render(&model, dir.path().join("er")).unwrap_err();
    assert!(matches!(err, ExportError::UnknownEntity { ref name } if name == "Room"));
}

#[test]
fn test_failed_render_forgets_previous_image() {
    let model = DiagramBuilder::default().parse(HOTEL);
    let dir = tempdir().unwrap();

    let mut exporter = DiagramExporter::new(FakeRenderer);
    assert!(exporter.render(&model, dir.path().join("first")));

    let dangling = DiagramBuilder::default().parse("Relationship: A -- r --> B");
    assert!(!exporter.render(&dangling, dir.path().join("second")));

    assert!(matches!(
        exporter.export_slide(dir.path().join("deck.pptx")),
        Err(ExportError::NotRendered)
    ));
}

#[test]
fn test_renderer_failure_is_reported() {
    let model = DiagramBuilder::default().parse(HOTEL);
    let dir = tempdir().unwrap();

    let mut exporter = DiagramExporter::new(FailingRenderer);
    let err = exporter.try_render(&model, dir.path().join("er")).unwrap_err();

    assert!(matches!(err, ExportError::Render(_)));
    assert!(!raster_path(&dir.path().join("er")).exists());
}

#[test]
fn test_description_write_failure_is_io_error() {
    let model = DiagramBuilder::default().parse(HOTEL);
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("er.dot");

    let err = DiagramExporter::new(FakeRenderer)
        .export_description(&model, path)
        .unwrap_err();
    assert!(matches!(err, ExportError::Io(_)));
}

#[test]
fn test_extract_with_failing_generator_is_empty() {
    let builder = DiagramBuilder::default();
    let offline = |_: &str, _: &str| -> Result<String, GenerateError> {
        Err(GenerateError::Request("connection refused".to_string()))
    };

    assert!(builder.extract("A hotel has rooms", &offline).is_empty());
}

#[test]
fn test_configured_slide_title() {
    let config = AppConfig::new(GeneratorConfig::default(), SlideConfig::new("Hotel Schema"));
    let builder = DiagramBuilder::new(config);
    let model = builder.parse(HOTEL);
    let dir = tempdir().unwrap();

    let mut exporter = builder.exporter(FakeRenderer);
    exporter.try_render(&model, dir.path().join("er.png")).unwrap();
    exporter.export_slide(dir.path().join("er.pptx")).unwrap();

    let mut archive =
        zip::ZipArchive::new(fs::File::open(dir.path().join("er.pptx")).unwrap()).unwrap();
    let mut slide = String::new();
    archive
        .by_name("ppt/slides/slide1.xml")
        .unwrap()
        .read_to_string(&mut slide)
        .unwrap();
    assert!(slide.contains("<a:t>Hotel Schema</a:t>"));
}

#[test]
fn test_export_error_converts_to_crate_error() {
    let err: ErdraftError = ExportError::NotRendered.into();
    assert!(matches!(err, ErdraftError::Export(ExportError::NotRendered)));
}
