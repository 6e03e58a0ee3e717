mod common;

use common::fixtures::synthetic_records;
use common::{FOOTER_YEAR, TestResult, generate_report};

const FOOTER_FRAGMENT: &str = "Todos los derechos reservados";

#[test]
fn test_thousand_records_span_many_pages() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate_report(&synthetic_records(1000))?;
    assert_pdf_min_pages!(pdf, 2);
    assert_pdf_contains_text!(pdf, "Cliente 1000 (Ciudad 9)");
    assert_pdf_contains_text!(pdf, "Total de clientes: 1000");
    Ok(())
}

#[test]
fn test_footer_appears_on_last_page_only() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate_report(&synthetic_records(1000))?;
    let pages = pdf.page_count() as u32;
    let with_footer: Vec<u32> = (1..=pages)
        .filter(|&p| pdf.page_text(p).contains(FOOTER_FRAGMENT))
        .collect();
    assert_eq!(with_footer, vec![pages]);
    assert!(pdf.page_text(pages).contains(&FOOTER_YEAR.to_string()));
    Ok(())
}

#[test]
fn test_page_count_never_decreases_with_more_records() -> TestResult {
    let mut previous = 0;
    for n in [0, 1, 10, 30, 36, 37, 80, 120, 250] {
        let pages = generate_report(&synthetic_records(n))?.page_count();
        assert!(
            pages >= previous,
            "{} records gave {} pages, fewer than {}",
            n,
            pages,
            previous
        );
        previous = pages;
    }
    Ok(())
}

#[test]
fn test_list_item_is_never_split_from_its_page_break() -> TestResult {
    // 36 items fit on the first page below the header; the 37th starts a new page.
    let pdf = generate_report(&synthetic_records(37))?;
    assert!(pdf.page_text(1).contains("Cliente 36 (Ciudad 5)"));
    assert!(!pdf.page_text(1).contains("Cliente 37 "));
    assert!(pdf.page_text(2).contains("Cliente 37 (Ciudad 6)"));
    Ok(())
}
