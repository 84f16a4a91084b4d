//! Integration tests for the writer seam.

use pleading::model::{Paragraph, Table};
use pleading::render::write_document;
use pleading::{
    compose, to_json, to_text_proof, ComposeOptions, CompositionRequest, DocumentWriter,
    JsonFormat, LINES_PER_PAGE,
};

const REQUEST: &str = r#"{
    "kind": "answer",
    "metadata": {
        "plaintiff_names": ["Jane Roe"],
        "defendant_names": ["Acme Corp.", "John Doe"],
        "is_multiple_defendants": true,
        "attorney": { "name": "Maria Lopez", "bar_number": "123456" },
        "court": {
            "county": "Alameda",
            "case_number": "24CV000123",
            "filing_date": "2024-11-02"
        }
    },
    "content": {
        "use_general_denial": true,
        "defenses": [
            { "ordinal_label": "first", "content": "Failure to state a claim." },
            { "ordinal_label": "", "content": "Laches.", "title": "Laches" }
        ]
    }
}"#;

fn request() -> CompositionRequest {
    serde_json::from_str(REQUEST).unwrap()
}

/// Writer that records the page each numbered line lands on.
#[derive(Default)]
struct PageTracker {
    page: usize,
    lines: Vec<(usize, u8)>,
    tables: usize,
}

impl DocumentWriter for PageTracker {
    type Output = Self;

    fn paragraph(&mut self, paragraph: &Paragraph) -> pleading::Result<()> {
        if let Some(n) = paragraph.line_number {
            self.lines.push((self.page, n));
        }
        Ok(())
    }

    fn table(&mut self, _table: &Table) -> pleading::Result<()> {
        self.tables += 1;
        Ok(())
    }

    fn page_break(&mut self) -> pleading::Result<()> {
        self.page += 1;
        Ok(())
    }

    fn finish(self) -> pleading::Result<Self> {
        Ok(self)
    }
}

#[test]
fn test_request_to_json() {
    let doc = compose(&request(), &ComposeOptions::default()).unwrap();
    let json = to_json(&doc, JsonFormat::Compact).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["kind"], "answer");
    assert_eq!(value["title"], "DEFENDANTS' ANSWER TO COMPLAINT");
    assert_eq!(
        value["header_footer"]["default_header"]["reserves_line_number_margin"],
        true
    );
    assert!(value["blocks"].as_array().unwrap().len() > 20);
}

#[test]
fn test_request_to_text_proof() {
    let doc = compose(&request(), &ComposeOptions::default()).unwrap();
    let proof = to_text_proof(&doc).unwrap();

    assert!(proof.contains("Complaint Filed: November 2, 2024"));
    assert!(proof.contains("Trial Date: None Set"));
    assert!(proof.contains("FIRST AFFIRMATIVE DEFENSE"));
    assert!(proof.contains("SECOND AFFIRMATIVE DEFENSE"));
    assert!(proof.contains("(Laches)"));
    assert!(proof.contains(" 1 | Complaint Filed"));
    assert!(proof.contains("- 1 -"));
}

#[test]
fn test_custom_writer_sees_pages() {
    let mut request = request();
    if let CompositionRequest::Answer { content, .. } = &mut request {
        content.preamble = Some(
            (0..40)
                .map(|i| format!("Preliminary statement {}.", i))
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }

    let doc = compose(&request, &ComposeOptions::default()).unwrap();
    let tracker = write_document(&doc, PageTracker::default()).unwrap();

    assert_eq!(tracker.tables, 1);
    assert_eq!(tracker.page + 1, doc.page_count());
    assert!(tracker.page >= 2);

    let first_page: Vec<u8> = tracker
        .lines
        .iter()
        .filter(|(page, _)| *page == 0)
        .map(|(_, n)| *n)
        .collect();
    assert_eq!(first_page, (1..=LINES_PER_PAGE).collect::<Vec<_>>());
}
