mod common;

use client_report::{PipelineBuilder, PipelineError, RecordStore};
use common::fixtures::*;
use common::pdf_assertions::{count_images, get_page_dimensions};
use common::{FOOTER_YEAR, GeneratedPdf, TestResult, generate_report, test_pipeline};

#[test]
fn test_empty_record_list_still_produces_a_report() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate_report(&[])?;
    assert!(pdf.bytes.starts_with(b"%PDF-"));
    assert_pdf_page_count!(pdf, 1);
    assert_pdf_contains_text!(pdf, "Informe de Clientes");
    assert_pdf_contains_text!(pdf, "Total de clientes: 0");
    assert_pdf_contains_text!(pdf, "Todos los derechos reservados");
    assert_eq!(count_images(&pdf.doc), 1);
    Ok(())
}

#[test]
fn test_seven_client_report() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let source = seven_clients_csv();
    let store = RecordStore::new(source.path());
    let records = store.load_all()?;
    assert_eq!(records.len(), 7);

    let per_city = store.count_by_city()?;
    let counts: Vec<(&str, usize)> = per_city.iter().collect();
    assert_eq!(
        counts,
        vec![("Madrid", 3), ("Barcelona", 2), ("Valencia", 1), ("Sevilla", 1)]
    );
    assert_eq!(store.find_by_city("madrid")?.len(), 3);

    let pdf = generate_report(&records)?;
    assert!(pdf.bytes.len() > 2048, "only {} bytes", pdf.bytes.len());
    assert_pdf_page_count!(pdf, 1);
    assert_eq!(count_images(&pdf.doc), 1);

    let text = pdf.page_text(1);
    let list_lines = text.lines().filter(|l| l.trim_start().starts_with("- ")).count();
    assert_eq!(list_lines, 7, "extracted text:\n{}", text);
    assert_pdf_contains_text!(pdf, "Pedro Sanz (Madrid)");
    assert_pdf_contains_text!(pdf, "Total de clientes: 7");
    Ok(())
}

#[test]
fn test_page_geometry_is_a4() -> TestResult {
    let pdf = generate_report(&synthetic_records(3))?;
    assert_eq!(get_page_dimensions(&pdf.doc, 1), Some((595.0, 842.0)));
    Ok(())
}

#[test]
fn test_footer_carries_configured_year() -> TestResult {
    let pdf = generate_report(&[])?;
    assert_pdf_contains_text!(pdf, &FOOTER_YEAR.to_string());
    Ok(())
}

#[test]
fn test_filtered_render_uses_only_passed_records() -> TestResult {
    let source = seven_clients_csv();
    let store = RecordStore::new(source.path());
    let barcelona = store.find_by_city("BARCELONA")?;
    assert_eq!(barcelona.len(), 2);

    let pdf = generate_report(&barcelona)?;
    assert_pdf_contains_text!(pdf, "Total de clientes: 2");
    let text = common::pdf_assertions::extract_text(&pdf.doc);
    assert!(!text.contains("(Madrid)"));
    Ok(())
}

#[test]
fn test_render_to_file() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("informe_clientes.pdf");

    let summary = test_pipeline().render_to_file(&synthetic_records(5), &path)?;
    let bytes = std::fs::read(&path)?;
    assert_eq!(summary.bytes, bytes.len());
    assert_eq!(summary.pages, 1);

    let pdf = GeneratedPdf::from_bytes(bytes)?;
    assert_pdf_contains_text!(pdf, "Total de clientes: 5");
    Ok(())
}

#[test]
fn test_unwritable_destination_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("informe.pdf");

    let err = test_pipeline()
        .render_to_file(&synthetic_records(2), &path)
        .unwrap_err();
    match err {
        PipelineError::SinkUnwritable { path: Some(p), .. } => assert_eq!(p, path),
        other => panic!("expected SinkUnwritable, got {:?}", other),
    }
    assert!(!path.exists());
}

struct FailingSink;

impl std::io::Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("disk full"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_failing_sink_is_reported() {
    let err = test_pipeline().render(&[], FailingSink).unwrap_err();
    assert!(matches!(err, PipelineError::SinkUnwritable { path: None, .. }));
    assert!(err.to_string().contains("disk full"));
}

#[test]
fn test_pipeline_is_reusable() -> TestResult {
    let pipeline = PipelineBuilder::new().with_footer_year(FOOTER_YEAR).build()?;
    let mut first = Vec::new();
    let mut second = Vec::new();
    pipeline.render(&synthetic_records(4), &mut first)?;
    pipeline.render(&synthetic_records(4), &mut second)?;
    assert_eq!(
        GeneratedPdf::from_bytes(first)?.page_count(),
        GeneratedPdf::from_bytes(second)?.page_count()
    );
    Ok(())
}
