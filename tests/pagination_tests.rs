mod common;

use common::fixtures::*;
use common::pdf_assertions::get_page_dimensions;
use common::{TestResult, generate_pdf, generate_pdf_from_json, load_sample};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_pages_are_a4() -> TestResult {
    init();
    let pdf = generate_pdf_from_json(minimal_cv())?;

    let (width, height) = get_page_dimensions(&pdf.doc, 1).ok_or("no MediaBox")?;
    assert!((width - 595.0).abs() < 0.5, "width was {}", width);
    assert!((height - 842.0).abs() < 0.5, "height was {}", height);
    Ok(())
}

#[test]
fn test_skills_start_a_new_page() -> TestResult {
    init();
    let pdf = generate_pdf_from_json(cv_with_skills())?;

    assert_pdf_page_count!(pdf, 2);
    assert!(pdf.page_text(1).contains("Jane Doe"));
    assert!(!pdf.page_text(1).contains("Technical Skills"));
    assert!(pdf.page_text(2).contains("Technical Skills"));
    Ok(())
}

#[test]
fn test_sample_cv_spans_pages() -> TestResult {
    init();
    let pdf = generate_pdf(&load_sample()?)?;

    assert_pdf_min_pages!(pdf, 2);
    assert!(pdf.page_text(1).contains("Work Experience"));
    assert!(!pdf.page_text(1).contains("Technical Skills"));
    Ok(())
}

#[test]
fn test_long_experience_list_breaks_across_pages() -> TestResult {
    init();
    let pdf = generate_pdf_from_json(cv_with_experience(20))?;

    assert_pdf_min_pages!(pdf, 2);
    assert_pdf_contains_text!(pdf, "Engineer 0");
    assert_pdf_contains_text!(pdf, "Engineer 19");

    // An entry header is never split from its title.
    for page in 1..=pdf.page_count() as u32 {
        let text = pdf.page_text(page);
        let titles = text.matches("Engineer ").count();
        let companies = text.matches("Company ").count();
        assert_eq!(titles, companies, "page {} splits an entry header", page);
    }
    Ok(())
}

#[test]
fn test_many_languages_overflow_to_next_page() -> TestResult {
    init();
    let pdf = generate_pdf_from_json(cv_with_languages(120))?;

    assert_pdf_min_pages!(pdf, 2);
    assert_pdf_contains_text!(pdf, "Language0 - Fluent");
    assert_pdf_contains_text!(pdf, "Language119 - Fluent");
    Ok(())
}

#[test]
fn test_output_is_deterministic() -> TestResult {
    init();
    let cv = load_sample()?;
    let first = generate_pdf(&cv)?;
    let second = generate_pdf(&cv)?;

    assert_eq!(first.bytes, second.bytes);
    Ok(())
}
