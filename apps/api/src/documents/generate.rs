//! Renders plain text into PDF or DOCX files, one line of input per line of output.
//!
//! PDF layout mirrors a plain text object on A4: Helvetica 12pt, left edge at
//! 40pt, first baseline at 800pt, 14.4pt leading. When the next baseline would
//! fall below the bottom margin a new page is started.

use std::fs::File;
use std::path::Path;

use anyhow::Context;
use docx_rs::{Docx, Paragraph, Run};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::errors::AppError;

const A4_WIDTH_PT: i64 = 595;
const A4_HEIGHT_PT: i64 = 842;
const LEFT_X_PT: f32 = 40.0;
const TOP_Y_PT: f32 = 800.0;
const BOTTOM_MARGIN_PT: f32 = 40.0;
const FONT_SIZE_PT: i64 = 12;
const LEADING_PT: f32 = 14.4;

/// Number of lines drawn on one page before a page break.
pub fn lines_per_page() -> usize {
    ((TOP_Y_PT - BOTTOM_MARGIN_PT) / LEADING_PT).floor() as usize + 1
}

/// Writes `text` to `path` as a PDF. Always produces at least one page.
pub fn write_pdf(text: &str, path: &Path) -> Result<(), AppError> {
    let lines: Vec<&str> = text.split('\n').collect();
    let pages: Vec<&[&str]> = lines.chunks(lines_per_page()).collect();

    let mut doc = build_pdf(&pages)?;
    doc.save(path)
        .with_context(|| format!("Failed to write PDF '{}'", path.display()))?;
    Ok(())
}

/// Builds a document with one page per entry of `pages`, each drawing its lines
/// top-down. An empty slice yields a page with an empty content stream.
pub(crate) fn build_pdf(pages: &[&[&str]]) -> Result<Document, AppError> {
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

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for lines in pages {
        let content = page_content(lines);
        let encoded = content
            .encode()
            .context("Failed to encode PDF content stream")?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "MediaBox" => vec![0.into(), 0.into(), A4_WIDTH_PT.into(), A4_HEIGHT_PT.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    Ok(doc)
}

fn page_content(lines: &[&str]) -> Content {
    let mut operations = Vec::with_capacity(lines.len() * 4);
    for (i, line) in lines.iter().enumerate() {
        let y = TOP_Y_PT - LEADING_PT * i as f32;
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Tf",
            vec!["F1".into(), FONT_SIZE_PT.into()],
        ));
        operations.push(Operation::new("Td", vec![LEFT_X_PT.into(), y.into()]));
        operations.push(Operation::new(
            "Tj",
            vec![Object::string_literal(to_win_ansi(line))],
        ));
        operations.push(Operation::new("ET", vec![]));
    }
    Content { operations }
}

/// Encodes `line` for the WinAnsiEncoding font. Latin-1 printable characters
/// keep their code; the typographic extras live at 0x80-0x9F. Anything else
/// becomes `?`.
fn to_win_ansi(line: &str) -> Vec<u8> {
    line.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c {
        '\u{00}'..='\u{7f}' | '\u{a0}'..='\u{ff}' => c as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8a,
        '‹' => 0x8b,
        'Œ' => 0x8c,
        'Ž' => 0x8e,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9a,
        '›' => 0x9b,
        'œ' => 0x9c,
        'ž' => 0x9e,
        'Ÿ' => 0x9f,
        _ => b'?',
    }
}

/// Writes `text` to `path` as a DOCX, one paragraph per line including blank ones.
pub fn write_docx(text: &str, path: &Path) -> Result<(), AppError> {
    let docx = text.split('\n').fold(Docx::new(), |docx, line| {
        docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)))
    });

    let file = File::create(path)
        .with_context(|| format!("Failed to create DOCX '{}'", path.display()))?;
    docx.build().pack(file).map_err(|e| {
        AppError::Internal(anyhow::anyhow!(
            "Failed to write DOCX '{}': {e}",
            path.display()
        ))
    })?;
    Ok(())
}
