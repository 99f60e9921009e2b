//! Text extraction from the supported document formats

use crate::error::{Result, WordTallyError};
use docx_rs::{
    DocumentChild, InsertChild, Paragraph, ParagraphChild, Run, RunChild, StructuredDataTag,
    StructuredDataTagChild, Table, TableCellContent, TableChild, TableRowChild,
};
use encoding_rs::Encoding;
use log::debug;
use std::cell::Cell;
use std::panic::{self, UnwindSafe};
use std::path::Path;
use std::sync::Once;
use tokio::fs;

/// Turkish superset of Latin-1, the code page legacy `.txt` input is assumed to use
pub const DEFAULT_FALLBACK_ENCODING: &str = "windows-1254";

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Read the whole file, mapping a missing file to `NotFound`
async fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => WordTallyError::NotFound(
            format!("File does not exist: {}", path.display())
        ),
        _ => WordTallyError::Io(e),
    })
}

thread_local! {
    static IN_GUARDED_PARSER: Cell<bool> = const { Cell::new(false) };
}

static QUIET_PANIC_HOOK: Once = Once::new();

/// Panics raised inside `guard_parser` go to the debug log instead of stderr;
/// every other panic still reaches the previous hook.
fn install_quiet_panic_hook() {
    QUIET_PANIC_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if IN_GUARDED_PARSER.with(|guarded| guarded.get()) {
                debug!("Document parser panicked: {}", info);
            } else {
                previous(info);
            }
        }));
    });
}

/// Run a third-party parser, turning a panic on malformed input into `CorruptDocument`
fn guard_parser<T, F>(path: &Path, parse: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + UnwindSafe,
{
    install_quiet_panic_hook();

    IN_GUARDED_PARSER.with(|guarded| guarded.set(true));
    let outcome = panic::catch_unwind(parse);
    IN_GUARDED_PARSER.with(|guarded| guarded.set(false));

    outcome.unwrap_or_else(|_| {
        Err(WordTallyError::CorruptDocument(
            format!("Parser aborted on malformed document '{}'", path.display())
        ))
    })
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = read_bytes(path).await?;

        // pdf-extract walks the page tree in order and appends each page's text
        let text = guard_parser(path, || {
            pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
                WordTallyError::CorruptDocument(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
            })
        })?;
        debug!("Extracted {} characters from PDF", text.chars().count());
        Ok(text)
    }
}

pub struct WordPackageExtractor;

impl TextExtractor for WordPackageExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = read_bytes(path).await?;

        let docx = guard_parser(path, || {
            docx_rs::read_docx(&bytes).map_err(|e| {
                WordTallyError::CorruptDocument(format!("Failed to open Word document '{}': {}", path.display(), e))
            })
        })?;

        let mut paragraphs = Vec::new();
        for child in &docx.document.children {
            match child {
                DocumentChild::Paragraph(paragraph) => paragraphs.push(paragraph_text(paragraph)),
                DocumentChild::Table(table) => collect_table_text(table, &mut paragraphs),
                DocumentChild::StructuredDataTag(sdt) => collect_block_sdt_text(sdt, &mut paragraphs),
                _ => {}
            }
        }

        // The package stores no separator between paragraphs; a newline keeps
        // the last word of one paragraph from fusing with the first of the next.
        let text = paragraphs.join("\n");
        debug!("Extracted {} paragraphs from Word document", paragraphs.len());
        Ok(text)
    }
}

/// Concatenate the visible runs of a paragraph; runs split mid-word are joined without a separator
fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_paragraph_children(&paragraph.children, &mut text);
    text
}

fn push_paragraph_children(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run_text(run, text),
            ParagraphChild::Hyperlink(link) => push_paragraph_children(&link.children, text),
            ParagraphChild::StructuredDataTag(sdt) => push_inline_sdt_text(sdt, text),
            ParagraphChild::Insert(insert) => {
                // tracked deletions nested in an insertion are not visible
                for child in &insert.children {
                    if let InsertChild::Run(run) = child {
                        push_run_text(run, text);
                    }
                }
            }
            _ => {}
        }
    }
}

fn push_run_text(run: &Run, text: &mut String) {
    for run_child in &run.children {
        match run_child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }
}

/// Content control inside a paragraph: its runs belong to the surrounding paragraph
fn push_inline_sdt_text(sdt: &StructuredDataTag, text: &mut String) {
    for child in &sdt.children {
        match child {
            StructuredDataTagChild::Run(run) => push_run_text(run, text),
            StructuredDataTagChild::Paragraph(paragraph) => push_paragraph_children(&paragraph.children, text),
            StructuredDataTagChild::StructuredDataTag(nested) => push_inline_sdt_text(nested, text),
            _ => {}
        }
    }
}

/// Content control at block level: paragraphs and tables stay separate, loose runs form one paragraph
fn collect_block_sdt_text(sdt: &StructuredDataTag, paragraphs: &mut Vec<String>) {
    let mut inline = String::new();
    for child in &sdt.children {
        match child {
            StructuredDataTagChild::Run(run) => push_run_text(run, &mut inline),
            StructuredDataTagChild::Paragraph(paragraph) => {
                flush_inline(&mut inline, paragraphs);
                paragraphs.push(paragraph_text(paragraph));
            }
            StructuredDataTagChild::Table(table) => {
                flush_inline(&mut inline, paragraphs);
                collect_table_text(table, paragraphs);
            }
            StructuredDataTagChild::StructuredDataTag(nested) => {
                flush_inline(&mut inline, paragraphs);
                collect_block_sdt_text(nested, paragraphs);
            }
            _ => {}
        }
    }
    flush_inline(&mut inline, paragraphs);
}

fn flush_inline(inline: &mut String, paragraphs: &mut Vec<String>) {
    if !inline.is_empty() {
        paragraphs.push(std::mem::take(inline));
    }
}

fn collect_table_text(table: &Table, paragraphs: &mut Vec<String>) {
    for TableChild::TableRow(row) in &table.rows {
        for TableRowChild::TableCell(cell) in &row.cells {
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(paragraph) => paragraphs.push(paragraph_text(paragraph)),
                    TableCellContent::Table(nested) => collect_table_text(nested, paragraphs),
                    TableCellContent::StructuredDataTag(sdt) => collect_block_sdt_text(sdt, paragraphs),
                    _ => {}
                }
            }
        }
    }
}

pub struct PlainTextExtractor {
    fallback: &'static Encoding,
}

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self { fallback: encoding_rs::WINDOWS_1254 }
    }
}

impl PlainTextExtractor {
    pub fn with_fallback_encoding(label: &str) -> Result<Self> {
        let fallback = Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| {
            WordTallyError::Configuration(format!("Unknown text encoding: {}", label))
        })?;
        Ok(Self { fallback })
    }

    pub fn fallback_encoding(&self) -> &'static str {
        self.fallback.name()
    }

    /// Decode by BOM when present, then as UTF-8, then with the fallback code page
    pub fn decode(&self, bytes: &[u8]) -> String {
        if let Some((encoding, bom_length)) = Encoding::for_bom(bytes) {
            let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_length..]);
            return text.into_owned();
        }

        match std::str::from_utf8(bytes) {
            Ok(text) => text.to_string(),
            Err(_) => {
                debug!("Input is not valid UTF-8, decoding as {}", self.fallback.name());
                let (text, _) = self.fallback.decode_without_bom_handling(bytes);
                text.into_owned()
            }
        }
    }
}

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = read_bytes(path).await?;
        Ok(self.decode(&bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8_with_bom() {
        let extractor = PlainTextExtractor::default();
        let bytes = b"\xEF\xBB\xBFhello";
        assert_eq!(extractor.decode(bytes), "hello");
    }

    #[test]
    fn test_decode_falls_back_to_legacy_code_page() {
        let extractor = PlainTextExtractor::default();
        // "Çiçek" in windows-1254
        let bytes = [0xC7, b'i', 0xE7, b'e', b'k'];
        assert_eq!(extractor.decode(&bytes), "Çiçek");
    }

    #[test]
    fn test_decode_utf16_by_bom() {
        let extractor = PlainTextExtractor::default();
        let bytes = [0xFF, 0xFE, b'o', 0x00, b'k', 0x00];
        assert_eq!(extractor.decode(&bytes), "ok");
    }

    #[test]
    fn test_unknown_fallback_label_is_rejected() {
        assert!(PlainTextExtractor::with_fallback_encoding("not-an-encoding").is_err());

        let extractor = PlainTextExtractor::with_fallback_encoding("latin1").unwrap();
        assert_eq!(extractor.fallback_encoding(), "windows-1252");
    }

    #[test]
    fn test_guard_parser_converts_panic() {
        let result: Result<()> = guard_parser(Path::new("broken.pdf"), || panic!("bad xref"));
        assert!(matches!(result, Err(WordTallyError::CorruptDocument(_))));
        assert!(!IN_GUARDED_PARSER.with(|guarded| guarded.get()));
    }

    #[test]
    fn test_guard_parser_passes_through_success() {
        let result = guard_parser(Path::new("fine.pdf"), || Ok(7));
        assert_eq!(result.unwrap(), 7);
        assert!(!IN_GUARDED_PARSER.with(|guarded| guarded.get()));
    }

    #[test]
    fn test_quiet_hook_leaves_other_panics_alone() {
        install_quiet_panic_hook();
        let outcome = std::panic::catch_unwind(|| {
            assert!(!IN_GUARDED_PARSER.with(|guarded| guarded.get()));
            panic!("unrelated");
        });
        assert!(outcome.is_err());
    }
}
