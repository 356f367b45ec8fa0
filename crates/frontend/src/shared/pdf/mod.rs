//! Растровый экспорт документов в PDF
//!
//! One capture of a rendered element, sliced across A4 pages by translating
//! the same image upwards one page height at a time.

pub mod batch;
pub mod document;
pub mod offscreen;
pub mod page_plan;
pub mod pipeline;
pub mod raster;

use thiserror::Error;

pub use batch::join_by_key;
pub use offscreen::{export_element, OffscreenDocument};
pub use page_plan::{PagePlan, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
pub use pipeline::{export_document, BrowserDownload, DocumentSink, GeneratingGuard};
pub use raster::{Html2CanvasRasterizer, RasterImage, Rasterizer};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("Failed to capture document: {0}")]
    Capture(String),
    #[error("Captured image is empty")]
    EmptyImage,
    #[error("Invalid image data: {0}")]
    Encoding(String),
    #[error("Failed to download document: {0}")]
    Download(String),
    #[error("Document is not rendered")]
    NotRendered,
}
