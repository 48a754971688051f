use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ircp_core::{DocumentExporter, ExportError, ExportReceipt};
use ircp_schema::{ExportDocument, TopicGuidance};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use tokio::io::AsyncWriteExt;

use crate::layout::{Font, PageBuilder, A4_HEIGHT, A4_WIDTH};

pub const FOOTER: &str = "Generated by IRCP (Print-First)";

const TITLE_SIZE: f32 = 16.0;
const HEADING_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 10.5;
const EMPTY: &str = "—";

/// Writes entries as A4 PDFs into a directory.
#[derive(Debug, Clone)]
pub struct PdfExporter {
    output_dir: PathBuf,
    file_prefix: String,
}

impl PdfExporter {
    pub fn new(output_dir: impl Into<PathBuf>, file_prefix: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            file_prefix: file_prefix.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

/// `<prefix>_<label>_<YYYY-MM-DD>.pdf`, with every run of non-alphanumeric
/// characters in the label collapsed to `_`.
pub fn file_name(prefix: &str, label: &str, date: DateTime<Utc>) -> String {
    let mut safe = String::with_capacity(label.len());
    let mut in_run = false;
    for c in label.chars() {
        if c.is_ascii_alphanumeric() {
            safe.push(c);
            in_run = false;
        } else if !in_run {
            safe.push('_');
            in_run = true;
        }
    }
    format!("{prefix}_{safe}_{}.pdf", date.format("%Y-%m-%d"))
}

/// Create `name` in `dir` and write `bytes` into it, suffixing `-2`, `-3`,
/// ... while the name is taken. An existing file is never opened for writing.
async fn write_new(dir: &Path, name: &str, bytes: &[u8]) -> std::io::Result<PathBuf> {
    let stem = name.trim_end_matches(".pdf");
    let mut n = 1;
    loop {
        let candidate = if n == 1 {
            dir.join(name)
        } else {
            dir.join(format!("{stem}-{n}.pdf"))
        };
        let opened = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&candidate)
            .await;
        match opened {
            Ok(mut file) => {
                file.write_all(bytes).await?;
                file.flush().await?;
                return Ok(candidate);
            }
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => n += 1,
            Err(err) => return Err(err),
        }
    }
}

fn or_empty(text: &str) -> &str {
    if text.trim().is_empty() {
        EMPTY
    } else {
        text
    }
}

fn section(builder: &mut PageBuilder, heading: &str) {
    builder.gap(6.0);
    builder.paragraph(heading, Font::Bold, HEADING_SIZE);
    builder.gap(2.0);
}

fn text_section(builder: &mut PageBuilder, heading: &str, body: &str) {
    section(builder, heading);
    builder.paragraph(or_empty(body), Font::Regular, BODY_SIZE);
}

fn bullet_section(builder: &mut PageBuilder, heading: &str, items: &[String]) {
    section(builder, heading);
    if items.is_empty() {
        builder.paragraph(EMPTY, Font::Regular, BODY_SIZE);
    }
    for item in items {
        builder.bullet(item, BODY_SIZE);
    }
}

/// One line for the experience block, or `None` when neither part is set.
fn experience_line(doc: &ExportDocument) -> Option<String> {
    let kind = doc.experience_type.as_deref().map(str::trim).unwrap_or("");
    let other = doc.experience_other.as_deref().map(str::trim).unwrap_or("");
    match (kind, other) {
        ("", "") => None,
        ("Other experience", other) if !other.is_empty() => Some(format!("{kind} — {other}")),
        ("", other) => Some(other.to_string()),
        (kind, _) => Some(kind.to_string()),
    }
}

/// Lay out the document body, one operation list per page.
pub fn layout_document(doc: &ExportDocument, guidance: &TopicGuidance) -> Vec<Vec<Operation>> {
    let mut b = PageBuilder::new();

    b.paragraph(&format!("IRCP — {}", doc.topic_label), Font::Bold, TITLE_SIZE);
    b.gap(4.0);
    b.paragraph(
        &format!("Date: {}", doc.created_at.format("%Y-%m-%d %H:%M UTC")),
        Font::Regular,
        BODY_SIZE,
    );
    b.paragraph(
        &format!("Nervous System State: {}", or_empty(&doc.ns_state)),
        Font::Regular,
        BODY_SIZE,
    );

    if let Some(line) = experience_line(doc) {
        text_section(&mut b, "Experience Type", &line);
    }

    text_section(&mut b, "Context", &doc.context);
    text_section(&mut b, "Body Signals", &doc.body_signals);

    bullet_section(&mut b, "Emotions Identified", &doc.emotions_selected);
    if !doc.emotions_other.trim().is_empty() {
        b.paragraph(
            &format!("Other: {}", doc.emotions_other),
            Font::Regular,
            BODY_SIZE,
        );
    }
    bullet_section(&mut b, "Needs Identified", &doc.needs_selected);

    section(&mut b, "Meaning → Next Move");
    let rows = [
        ("Topic", doc.snapshot_topic.clone()),
        ("Symbols", doc.snapshot_symbols.clone()),
        ("Body signals", doc.snapshot_body_signals.join(", ")),
        ("Emotions", doc.snapshot_emotions.join(", ")),
    ];
    for (label, value) in rows {
        b.paragraph(&format!("{label}: {}", or_empty(&value)), Font::Regular, BODY_SIZE);
    }

    bullet_section(&mut b, "Try One", &doc.try_one_suggestions);
    text_section(&mut b, "One Next Move", &doc.next_move_text);
    text_section(&mut b, "Lock It In", &doc.win_or_reframe);

    section(&mut b, "North Star");
    b.paragraph(&guidance.blurb, Font::Regular, BODY_SIZE);
    for point in &guidance.points {
        b.gap(2.0);
        b.paragraph(&point.label, Font::Bold, BODY_SIZE);
        b.paragraph(&point.text, Font::Regular, BODY_SIZE);
    }

    b.finish(FOOTER)
}

fn font_object(font: Font) -> Object {
    Object::Dictionary(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => font.base_font(),
        "Encoding" => "WinAnsiEncoding",
    })
}

/// Render the document to PDF bytes.
pub fn render_pdf(doc: &ExportDocument, guidance: &TopicGuidance) -> Result<Vec<u8>, ExportError> {
    let mut pdf = Document::with_version("1.5");
    let pages_id = pdf.new_object_id();
    let regular_id = pdf.add_object(font_object(Font::Regular));
    let bold_id = pdf.add_object(font_object(Font::Bold));
    let resources_id = pdf.add_object(dictionary! {
        "Font" => dictionary! {
            Font::Regular.resource() => regular_id,
            Font::Bold.resource() => bold_id,
        },
    });

    let mut kids = Vec::new();
    for operations in layout_document(doc, guidance) {
        let content = Content { operations };
        let encoded = content
            .encode()
            .map_err(|err| ExportError::Render(err.to_string()))?;
        let content_id = pdf.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = pdf.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    pdf.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                A4_WIDTH.into(),
                A4_HEIGHT.into(),
            ],
        }),
    );
    let catalog_id = pdf.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    pdf.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    pdf.save_to(&mut bytes)
        .map_err(|err| ExportError::Render(err.to_string()))?;
    Ok(bytes)
}

#[async_trait]
impl DocumentExporter for PdfExporter {
    async fn export(
        &self,
        doc: &ExportDocument,
        guidance: &TopicGuidance,
    ) -> Result<ExportReceipt, ExportError> {
        let bytes = render_pdf(doc, guidance)?;

        tokio::fs::create_dir_all(&self.output_dir).await?;
        let name = file_name(&self.file_prefix, &doc.topic_label, doc.created_at);
        let path = write_new(&self.output_dir, &name, &bytes).await?;

        tracing::debug!("wrote {} bytes to {}", bytes.len(), path.display());
        Ok(ExportReceipt {
            location: path.display().to_string(),
            bytes: bytes.len(),
        })
    }
}
