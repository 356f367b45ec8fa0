//! Capture → plan → write → deliver, with guaranteed loading-state cleanup.

use super::document::build_pdf;
use super::page_plan::PagePlan;
use super::raster::Rasterizer;
use super::ExportError;
use crate::shared::export::download_bytes;

/// Where finished documents go.
pub trait DocumentSink {
    fn deliver(&self, file_name: &str, bytes: Vec<u8>) -> Result<(), ExportError>;
}

/// Browser download through a temporary anchor.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDownload;

impl DocumentSink for BrowserDownload {
    fn deliver(&self, file_name: &str, bytes: Vec<u8>) -> Result<(), ExportError> {
        download_bytes(&bytes, "application/pdf", file_name).map_err(ExportError::Download)
    }
}

/// Calls `on_state(true)` when created and `on_state(false)` exactly once when
/// dropped, however the export ends.
pub struct GeneratingGuard<'a> {
    on_state: &'a dyn Fn(bool),
}

impl<'a> GeneratingGuard<'a> {
    pub fn begin(on_state: &'a dyn Fn(bool)) -> Self {
        on_state(true);
        Self { on_state }
    }
}

impl Drop for GeneratingGuard<'_> {
    fn drop(&mut self) {
        (self.on_state)(false);
    }
}

/// Exports `source` as a paged PDF named `file_name`. Returns the page count.
///
/// Failures are logged here and returned for the caller to show as a
/// notification; nothing is retried.
pub async fn export_document<R, S>(
    rasterizer: &R,
    sink: &S,
    source: &R::Source,
    file_name: &str,
    on_generating: &dyn Fn(bool),
) -> Result<usize, ExportError>
where
    R: Rasterizer + ?Sized,
    S: DocumentSink + ?Sized,
{
    let _generating = GeneratingGuard::begin(on_generating);
    log::debug!("Exporting {}", file_name);

    let result = render(rasterizer, sink, source, file_name).await;
    match &result {
        Ok(pages) => log::debug!("Exported {} ({} pages)", file_name, pages),
        Err(e) => log::error!("Failed to export {}: {}", file_name, e),
    }
    result
}

async fn render<R, S>(
    rasterizer: &R,
    sink: &S,
    source: &R::Source,
    file_name: &str,
) -> Result<usize, ExportError>
where
    R: Rasterizer + ?Sized,
    S: DocumentSink + ?Sized,
{
    let image = rasterizer.capture(source).await?;
    let plan = PagePlan::for_image(image.width_px, image.height_px)?;
    let bytes = build_pdf(&image, &plan);
    sink.deliver(file_name, bytes)?;
    Ok(plan.page_count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::pdf::RasterImage;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct FakeRasterizer {
        result: Result<RasterImage, ExportError>,
    }

    #[async_trait(?Send)]
    impl Rasterizer for FakeRasterizer {
        type Source = ();

        async fn capture(&self, _: &()) -> Result<RasterImage, ExportError> {
            self.result.clone()
        }
    }

    #[derive(Default)]
    struct MemorySink {
        delivered: RefCell<Vec<(String, usize)>>,
    }

    impl DocumentSink for MemorySink {
        fn deliver(&self, file_name: &str, bytes: Vec<u8>) -> Result<(), ExportError> {
            self.delivered
                .borrow_mut()
                .push((file_name.to_string(), bytes.len()));
            Ok(())
        }
    }

    struct FailingSink;

    impl DocumentSink for FailingSink {
        fn deliver(&self, _: &str, _: Vec<u8>) -> Result<(), ExportError> {
            Err(ExportError::Download("blocked".to_string()))
        }
    }

    fn invoice_image() -> RasterImage {
        RasterImage {
            width_px: 1588,
            height_px: 4914,
            jpeg: vec![0xFF, 0xD8, 0xFF, 0xD9],
        }
    }

    fn run<S: DocumentSink>(
        rasterizer: &FakeRasterizer,
        sink: &S,
    ) -> (Result<usize, ExportError>, Vec<bool>) {
        let states = RefCell::new(Vec::new());
        let on_state = |generating: bool| states.borrow_mut().push(generating);
        let result = block_on(export_document(rasterizer, sink, &(), "invoice.pdf", &on_state));
        (result, states.into_inner())
    }

    #[test]
    fn test_successful_export_delivers_and_clears_state() {
        let rasterizer = FakeRasterizer {
            result: Ok(invoice_image()),
        };
        let sink = MemorySink::default();
        let (result, states) = run(&rasterizer, &sink);

        assert_eq!(result, Ok(3));
        assert_eq!(states, vec![true, false]);
        let delivered = sink.delivered.borrow();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].0, "invoice.pdf");
    }

    #[test]
    fn test_capture_failure_still_clears_state() {
        let rasterizer = FakeRasterizer {
            result: Err(ExportError::Capture("tainted canvas".to_string())),
        };
        let sink = MemorySink::default();
        let (result, states) = run(&rasterizer, &sink);

        assert_eq!(
            result,
            Err(ExportError::Capture("tainted canvas".to_string()))
        );
        assert_eq!(states, vec![true, false]);
        assert!(sink.delivered.borrow().is_empty());
    }

    #[test]
    fn test_empty_capture_is_reported() {
        let rasterizer = FakeRasterizer {
            result: Ok(RasterImage {
                width_px: 0,
                height_px: 0,
                jpeg: Vec::new(),
            }),
        };
        let (result, states) = run(&rasterizer, &MemorySink::default());
        assert_eq!(result, Err(ExportError::EmptyImage));
        assert_eq!(states, vec![true, false]);
    }

    #[test]
    fn test_download_failure_still_clears_state() {
        let rasterizer = FakeRasterizer {
            result: Ok(invoice_image()),
        };
        let (result, states) = run(&rasterizer, &FailingSink);
        assert!(matches!(result, Err(ExportError::Download(_))));
        assert_eq!(states, vec![true, false]);
    }
}
