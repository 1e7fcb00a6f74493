//! Text extraction from various file formats

use crate::error::Result;
use crate::input::pages::{collect_pages, PageSource};
use log::debug;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use zip::ZipArchive;

pub trait TextExtractor {
    fn extract(&self, raw: &[u8]) -> Result<String>;
}

/// Word-processor documents: the body paragraphs of `word/document.xml`.
pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, raw: &[u8]) -> Result<String> {
        let mut archive = ZipArchive::new(Cursor::new(raw))?;
        let mut xml = String::new();
        archive.by_name("word/document.xml")?.read_to_string(&mut xml)?;

        let paragraphs = body_paragraphs(&xml)?;
        debug!("DOCX body holds {} paragraphs", paragraphs.len());

        let kept: Vec<&str> = paragraphs
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .collect();
        Ok(kept.join("\n"))
    }
}

/// Paths below `w:body` whose text belongs to a top-level paragraph.
/// Tables, text boxes and nested content are not part of the body flow.
const RUN_PATHS: &[&[&[u8]]] = &[&[b"p", b"r"], &[b"p", b"hyperlink", b"r"]];

fn path_below_body(stack: &[Vec<u8>]) -> Option<&[Vec<u8>]> {
    let body = stack.iter().rposition(|name| name.as_slice() == b"body")?;
    Some(&stack[body + 1..])
}

fn path_is(path: &[Vec<u8>], expected: &[&[u8]]) -> bool {
    path.len() == expected.len() && path.iter().zip(expected).all(|(a, b)| a.as_slice() == *b)
}

fn in_body_run(stack: &[Vec<u8>]) -> bool {
    path_below_body(stack).is_some_and(|path| RUN_PATHS.iter().any(|run| path_is(path, run)))
}

fn in_body_text(stack: &[Vec<u8>]) -> bool {
    match stack.split_last() {
        Some((last, parent)) => last.as_slice() == b"t" && in_body_run(parent),
        None => false,
    }
}

fn body_paragraphs(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut paragraphs = Vec::new();
    let mut current: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.local_name().as_ref().to_vec();
                if name.as_slice() == b"p" && path_below_body(&stack).is_some_and(|p| p.is_empty()) {
                    current = Some(String::new());
                }
                stack.push(name);
            }
            Event::Empty(e) => {
                if let Some(text) = current.as_mut() {
                    if in_body_run(&stack) {
                        match e.local_name().as_ref() {
                            b"tab" => text.push('\t'),
                            b"br" | b"cr" => text.push('\n'),
                            _ => {}
                        }
                    }
                }
            }
            Event::Text(t) => {
                if let Some(text) = current.as_mut() {
                    if in_body_text(&stack) {
                        text.push_str(&t.unescape()?);
                    }
                }
            }
            Event::End(_) => {
                let closed = stack.pop();
                let at_body = path_below_body(&stack).is_some_and(|p| p.is_empty());
                if at_body && closed.as_deref() == Some(b"p".as_slice()) {
                    if let Some(text) = current.take() {
                        paragraphs.push(text);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

/// Portable documents, read page by page up to a hard cap.
pub struct PdfExtractor {
    max_pages: usize,
}

impl PdfExtractor {
    pub fn new(max_pages: usize) -> Self {
        Self { max_pages }
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new(5)
    }
}

struct LopdfPages {
    doc: lopdf::Document,
    page_numbers: Vec<u32>,
}

impl PageSource for LopdfPages {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, index: usize) -> Result<String> {
        Ok(self.doc.extract_text(&[self.page_numbers[index]])?)
    }
}

impl TextExtractor for PdfExtractor {
    fn extract(&self, raw: &[u8]) -> Result<String> {
        let doc = lopdf::Document::load_mem(raw)?;
        // get_pages is keyed by 1-based page number, already in order
        let page_numbers = doc.get_pages().keys().copied().collect();
        let source = LopdfPages { doc, page_numbers };
        Ok(collect_pages(&source, self.max_pages))
    }
}

/// Raw bytes decoded as UTF-8; invalid sequences are dropped.
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, raw: &[u8]) -> Result<String> {
        let mut text = String::with_capacity(raw.len());
        for chunk in raw.utf8_chunks() {
            text.push_str(chunk.valid());
        }
        Ok(text)
    }
}
