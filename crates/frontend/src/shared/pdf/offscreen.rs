//! Off-screen rendering target for documents that are exported, not shown.

use super::pipeline::{export_document, BrowserDownload};
use super::raster::{Html2CanvasRasterizer, RasterImage, Rasterizer};
use super::ExportError;
use async_trait::async_trait;
use leptos::html;
use leptos::prelude::*;

/// CSS width of the A4 layout at 96 dpi.
const DOCUMENT_WIDTH_PX: u32 = 794;

/// Keeps its children laid out at A4 width but outside the viewport.
#[component]
pub fn OffscreenDocument(node_ref: NodeRef<html::Div>, children: Children) -> impl IntoView {
    view! {
        <div
            class="offscreen-document"
            aria-hidden="true"
            style=format!(
                "position: fixed; left: -10000px; top: 0; width: {}px; background: #ffffff;",
                DOCUMENT_WIDTH_PX
            )
            node_ref=node_ref
        >
            {children()}
        </div>
    }
}

/// Captures whatever a `NodeRef` currently points at.
struct NodeRefRasterizer(Html2CanvasRasterizer);

#[async_trait(?Send)]
impl Rasterizer for NodeRefRasterizer {
    type Source = NodeRef<html::Div>;

    async fn capture(&self, node: &NodeRef<html::Div>) -> Result<RasterImage, ExportError> {
        let element = node.get_untracked().ok_or(ExportError::NotRendered)?;
        self.0.capture(&element).await
    }
}

/// Exports the element behind `node` as `file_name`, mirroring progress
/// into `generating`.
pub async fn export_element(
    node: NodeRef<html::Div>,
    file_name: &str,
    generating: RwSignal<bool>,
) -> Result<usize, ExportError> {
    let on_state = move |busy: bool| {
        let _ = generating.try_set(busy);
    };
    export_document(
        &NodeRefRasterizer(Html2CanvasRasterizer::default()),
        &BrowserDownload,
        &node,
        file_name,
        &on_state,
    )
    .await
}
