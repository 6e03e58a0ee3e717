mod common;

use client_report::{MalformedRowPolicy, PipelineBuilder, PipelineError, ReportConfig, SourceOptions};
use common::fixtures::csv_source;
use common::pdf_assertions::get_page_dimensions;
use common::{GeneratedPdf, TestResult};
use report_types::Record;
use std::io::Write;

#[test]
fn test_config_file_overrides_texts_and_page_size() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"{{
            "text": {{ "title": "Client Report", "totalLabel": "Total clients", "footerTemplate": "(c) {{year}} ACME" }},
            "layout": {{ "pageSize": {{ "width": 612, "height": 792 }} }}
        }}"#
    )?;
    file.flush()?;

    let pipeline = PipelineBuilder::new()
        .with_config_file(file.path())?
        .with_footer_year(1999)
        .build()?;

    let mut bytes = Vec::new();
    pipeline.render(&[Record::new(1, "Ana", "a@a.es", "Madrid")], &mut bytes)?;
    let pdf = GeneratedPdf::from_bytes(bytes)?;

    assert_eq!(get_page_dimensions(&pdf.doc, 1), Some((612.0, 792.0)));
    assert_pdf_contains_text!(pdf, "Client Report");
    assert_pdf_contains_text!(pdf, "Total clients: 1");
    assert_pdf_contains_text!(pdf, "(c) 1999 ACME");
    Ok(())
}

#[test]
fn test_tighter_thresholds_change_pagination() -> TestResult {
    let records: Vec<Record> = (0..20)
        .map(|i| Record::new(i, format!("Cliente {}", i), "c@c.com", "Madrid"))
        .collect();

    let default_pages = {
        let mut bytes = Vec::new();
        PipelineBuilder::new().build()?.render(&records, &mut bytes)?;
        GeneratedPdf::from_bytes(bytes)?.page_count()
    };

    let mut config = ReportConfig::default();
    // The chart check runs with the cursor at 317.
    config.layout.required_space.chart = 300.0;
    let relaxed_pages = {
        let mut bytes = Vec::new();
        PipelineBuilder::new()
            .with_config(config)
            .build()?
            .render(&records, &mut bytes)?;
        GeneratedPdf::from_bytes(bytes)?.page_count()
    };

    assert_eq!(default_pages, 2);
    assert_eq!(relaxed_pages, 1);
    Ok(())
}

#[test]
fn test_source_options_flow_into_record_store() -> TestResult {
    let config = ReportConfig {
        source: SourceOptions::default().with_policy(MalformedRowPolicy::Skip),
        ..Default::default()
    };
    let pipeline = PipelineBuilder::new().with_config(config).build()?;

    let source = csv_source(&["1,Ana,a@a.es,Madrid", "x,Roto,r@r.es,Madrid", "3,Luis,l@l.es,Sevilla"]);
    let records = pipeline.record_store(source.path()).load_all()?;
    assert_eq!(records.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3]);

    let strict = PipelineBuilder::new().build()?;
    let err = strict.record_store(source.path()).load_all().unwrap_err();
    assert!(err.to_string().contains("3"), "{}", err);
    Ok(())
}

#[test]
fn test_malformed_config_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ \"layout\": {{ \"margin\": \"wide\" }} }}").unwrap();
    let result = PipelineBuilder::new().with_config_file(file.path());
    assert!(matches!(result, Err(PipelineError::Config(_))));
}
