//! Integration tests for the wellness assistant

use lopdf::dictionary;
use lopdf::{Document, Object, Stream};
use std::io::Write;
use std::path::Path;
use wellness_assistant::config::{Config, UnknownFormatPolicy};
use wellness_assistant::input::InputManager;
use wellness_assistant::output::report::{ReportStatus, UNREADABLE_SUMMARY};
use wellness_assistant::processing::indicators::{BLOOD_PRESSURE, LDL, TOTAL_CHOLESTEROL, TRIGLYCERIDES};
use wellness_assistant::processing::ReportAnalyzer;

/// Build a PDF with one page per entry, each holding a single line of text.
fn make_pdf(pages: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let content = format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", text);
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// Build a minimal DOCX whose body holds the given paragraphs.
fn make_docx(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| format!(r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#, p))
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}<w:sectPr/></w:body></w:document>"#,
        body
    );

    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
        .unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

#[test]
fn test_docx_paragraphs_are_trimmed_and_joined() {
    let raw = make_docx(&["  Lipid panel  ", "", "   ", "Cholesterol: 250 mg/dl", "LDL: 140 mg/dl"]);
    let text = InputManager::new().extract(&raw, "Labs.DOCX");
    assert_eq!(text, "Lipid panel\nCholesterol: 250 mg/dl\nLDL: 140 mg/dl");
}

#[test]
fn test_docx_report_lists_findings_in_rule_order() {
    let raw = make_docx(&["LDL: 140 mg/dl", "Cholesterol: 250 mg/dl"]);
    let report = ReportAnalyzer::default().analyze(&raw, "labs.docx");

    assert_eq!(report.status, ReportStatus::FindingsDetected);
    let names: Vec<&str> = report.findings.iter().map(|f| f.indicator.as_str()).collect();
    assert_eq!(names, vec![TOTAL_CHOLESTEROL, LDL]);
}

#[test]
fn test_pdf_pages_are_joined_in_order() {
    let raw = make_pdf(&["BP 150/95 mmHg", "HDL 55 mg/dL"]);
    let text = InputManager::new().extract(&raw, "scan.pdf");

    let bp = text.find("150/95").expect("first page text");
    let hdl = text.find("HDL 55").expect("second page text");
    assert!(bp < hdl);

    let report = ReportAnalyzer::default().analyze(&raw, "scan.pdf");
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].indicator, BLOOD_PRESSURE);
}

#[test]
fn test_pdf_reads_only_first_five_pages() {
    let pages: Vec<String> = (1..=7).map(|n| format!("Marker page {}", n)).collect();
    let refs: Vec<&str> = pages.iter().map(String::as_str).collect();
    let raw = make_pdf(&refs);

    let text = InputManager::new().extract(&raw, "long.pdf");
    assert!(text.contains("Marker page 5"));
    assert!(!text.contains("Marker page 6"));
    assert!(!text.contains("Marker page 7"));

    let capped = InputManager::new().with_max_pdf_pages(2).extract(&raw, "long.pdf");
    assert!(capped.contains("Marker page 2"));
    assert!(!capped.contains("Marker page 3"));
}

#[test]
fn test_mislabelled_uploads_degrade_to_unreadable() {
    let docx = make_docx(&["Cholesterol: 250 mg/dl"]);
    let pdf = make_pdf(&["Cholesterol: 250 mg/dl"]);
    let analyzer = ReportAnalyzer::default();

    for (raw, name) in [(&docx, "labs.pdf"), (&pdf, "labs.docx")] {
        let report = analyzer.analyze(raw, name);
        assert_eq!(report.status, ReportStatus::Unreadable, "{}", name);
        assert_eq!(report.summary, UNREADABLE_SUMMARY);
        assert!(report.findings.is_empty());
    }
}

#[test]
fn test_text_fixture_report() {
    let raw = std::fs::read("tests/fixtures/sample_report.txt").unwrap();
    let report = ReportAnalyzer::default().analyze(&raw, "sample_report.txt");

    let names: Vec<&str> = report.findings.iter().map(|f| f.indicator.as_str()).collect();
    assert_eq!(names, vec![BLOOD_PRESSURE, TOTAL_CHOLESTEROL, TRIGLYCERIDES]);
    assert_eq!(report.findings[0].values, vec![148, 92]);
    assert_eq!(
        report.preview.as_deref(),
        Some("City Clinic Laboratory Patient: Jane Example        Date: 2024-03-02 Vital signs ...")
    );
}

#[test]
fn test_reject_policy_marks_unknown_formats_unreadable() {
    let mut config = Config::default();
    config.extraction.unknown_format = UnknownFormatPolicy::Reject;

    let report = ReportAnalyzer::new(&config).analyze(b"BP 150/95 mmHg", "notes.txt");
    assert_eq!(report.status, ReportStatus::Unreadable);

    let permissive = ReportAnalyzer::default().analyze(b"BP 150/95 mmHg", "notes.txt");
    assert_eq!(permissive.status, ReportStatus::FindingsDetected);
}

#[tokio::test]
async fn test_read_upload_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Report.PDF");
    std::fs::write(&path, make_pdf(&["Triglycerides: 220 mg/dL"])).unwrap();

    let manager = InputManager::new();
    let (raw, filename) = manager.read_upload(&path).await.unwrap();
    assert_eq!(filename, "Report.PDF");

    let report = ReportAnalyzer::default().analyze(&raw, &filename);
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].indicator, TRIGLYCERIDES);
}

#[tokio::test]
async fn test_missing_file_is_an_error() {
    let manager = InputManager::new();
    let result = manager.extract_file(Path::new("tests/fixtures/nonexistent.pdf")).await;
    assert!(result.is_err());
}

#[test]
fn test_config_round_trip_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    // First load writes defaults
    let loaded = Config::load_from(&path).unwrap();
    assert!(path.exists());
    assert_eq!(loaded, Config::default());

    let mut changed = loaded.clone();
    changed.extraction.max_pdf_pages = 2;
    changed.save_to(&path).unwrap();
    assert_eq!(Config::load_from(&path).unwrap().extraction.max_pdf_pages, 2);

    let reset = Config::reset(&path).unwrap();
    assert_eq!(reset, Config::default());
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[extraction]\nmax_pdf_pages = \"five\"\n").unwrap();
    assert!(Config::load_from(&path).is_err());
}
