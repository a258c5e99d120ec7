//! Browser downloads for the report builders in `contracts::shared::export`.

use contracts::shared::export::{to_csv, to_html, to_text, ExportDocument, ExportSection};
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("nothing to export")]
    Empty,

    #[error("browser rejected the download: {0}")]
    Browser(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Text,
    Html,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Text => "txt",
            ExportFormat::Html => "html",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv;charset=utf-8;",
            ExportFormat::Text => "text/plain;charset=utf-8;",
            ExportFormat::Html => "text/html;charset=utf-8;",
        }
    }
}

/// Render a document and hand it to the browser as `<stem>.<ext>`.
///
/// CSV carries a single table, so only the first non-empty section is
/// written; text and HTML include every section.
pub fn export_document(
    doc: &ExportDocument,
    format: ExportFormat,
    file_stem: &str,
    lang: &str,
) -> Result<(), ExportError> {
    if doc.is_empty() {
        return Err(ExportError::Empty);
    }
    let content = match format {
        ExportFormat::Csv => first_table(doc).map(to_csv).ok_or(ExportError::Empty)?,
        ExportFormat::Text => to_text(doc),
        ExportFormat::Html => to_html(doc, lang),
    };
    let filename = format!("{}.{}", file_stem, format.extension());
    let blob = create_blob(&content, format.mime())?;
    download_blob(&blob, &filename)?;
    log::info!("Exported {}", filename);
    Ok(())
}

fn first_table(doc: &ExportDocument) -> Option<&ExportSection> {
    doc.sections.iter().find(|s| !s.rows.is_empty())
}

fn create_blob(content: &str, mime: &str) -> Result<Blob, ExportError> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| ExportError::Browser(format!("Failed to create blob: {:?}", e)))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), ExportError> {
    let browser = |message: &str| ExportError::Browser(message.to_string());
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| browser("no document"))?;
    let body = document.body().ok_or_else(|| browser("no body element"))?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| ExportError::Browser(format!("Failed to create object URL: {:?}", e)))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| ExportError::Browser(format!("Failed to create anchor: {:?}", e)))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| browser("created element is not an anchor"))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| ExportError::Browser(format!("Failed to set style: {:?}", e)))?;

    body.append_child(&anchor)
        .map_err(|e| ExportError::Browser(format!("Failed to append anchor: {:?}", e)))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| ExportError::Browser(format!("Failed to remove anchor: {:?}", e)))?;

    Url::revoke_object_url(&url)
        .map_err(|e| ExportError::Browser(format!("Failed to revoke URL: {:?}", e)))
}
