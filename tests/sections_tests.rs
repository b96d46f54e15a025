mod common;

use common::fixtures::*;
use common::{TestResult, generate_pdf, generate_pdf_from_json, load_sample};
use serde_json::json;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_sample_cv_renders_every_section() -> TestResult {
    init();
    let pdf = generate_pdf(&load_sample()?)?;

    assert_pdf_contains_text!(pdf, "Jane Doe");
    assert_pdf_contains_text!(pdf, "Senior Backend Engineer");
    assert_pdf_contains_text!(pdf, "Highlights");
    assert_pdf_contains_text!(pdf, "Work Experience");
    assert_pdf_contains_text!(pdf, "Technical Skills");
    assert_pdf_contains_text!(pdf, "Education");
    assert_pdf_contains_text!(pdf, "Languages");
    assert_pdf_contains_text!(pdf, "Featured Projects");
    Ok(())
}

#[test]
fn test_highlights_keep_only_bulleted_lines() -> TestResult {
    init();
    let pdf = generate_pdf(&load_sample()?)?;

    assert_pdf_contains_text!(pdf, "Led the migration");
    assert_pdf_contains_text!(pdf, "Mentored six engineers");
    assert_pdf_not_contains_text!(pdf, "Engineer with ten years");
    assert_pdf_not_contains_text!(pdf, "Open to relocation");
    Ok(())
}

#[test]
fn test_current_position_is_marked() -> TestResult {
    init();
    let pdf = generate_pdf(&load_sample()?)?;

    assert_pdf_contains_text!(pdf, "2021 - Present (Current)");
    assert_pdf_not_contains_text!(pdf, "2017 - 2021 (Current)");
    Ok(())
}

#[test]
fn test_languages_render_name_and_level() -> TestResult {
    init();
    let pdf = generate_pdf(&load_sample()?)?;

    assert_pdf_contains_text!(pdf, "English - Native");
    assert_pdf_contains_text!(pdf, "French - Basic");
    Ok(())
}

#[test]
fn test_only_featured_projects_are_shown() -> TestResult {
    init();
    let pdf = generate_pdf(&load_sample()?)?;

    assert_pdf_contains_text!(pdf, "ledgerline");
    assert_pdf_contains_text!(pdf, "routekit");
    assert_pdf_not_contains_text!(pdf, "dotfiles");
    assert_pdf_contains_text!(pdf, "In Progress");
    Ok(())
}

#[test]
fn test_minimal_cv_has_only_header() -> TestResult {
    init();
    let pdf = generate_pdf_from_json(minimal_cv())?;

    assert_pdf_page_count!(pdf, 1);
    assert_pdf_contains_text!(pdf, "Jane Doe");
    assert_pdf_not_contains_text!(pdf, "Highlights");
    assert_pdf_not_contains_text!(pdf, "Work Experience");
    assert_pdf_not_contains_text!(pdf, "Technical Skills");
    Ok(())
}

#[test]
fn test_empty_snapshot_yields_one_blank_page() -> TestResult {
    init();
    let pdf = generate_pdf_from_json(json!({}))?;

    assert_pdf_page_count!(pdf, 1);
    assert!(pdf.page_text(1).trim().is_empty());
    Ok(())
}

#[test]
fn test_skill_groups_use_configured_titles() -> TestResult {
    init();
    let pdf = generate_pdf_from_json(cv_with_skills())?;

    assert_pdf_contains_text!(pdf, "Technologies");
    assert_pdf_contains_text!(pdf, "Tools");
    assert_pdf_contains_text!(pdf, "Methodologies");
    assert_pdf_contains_text!(pdf, "Docker");
    Ok(())
}

#[test]
fn test_standard_fonts_are_referenced() -> TestResult {
    init();
    let pdf = generate_pdf(&load_sample()?)?;

    assert_pdf_has_font!(pdf, "Helvetica");
    assert_pdf_has_font!(pdf, "Helvetica-Bold");
    Ok(())
}

#[test]
fn test_project_without_title_fails_parse() {
    let result = generate_pdf_from_json(json!({
        "projects": [{ "featured": true }]
    }));
    assert!(matches!(result, Err(vita::PipelineError::Json(_))));
}
