//! Захват отрисованного элемента в растровое изображение
//!
//! The browser implementation binds to the `html2canvas` script loaded by
//! `index.html` and re-encodes the canvas as JPEG for embedding.

use super::ExportError;
use async_trait::async_trait;
use base64::Engine;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlCanvasElement, HtmlElement};

/// Pixel density of the capture; 2x keeps invoice text legible when printed.
pub const CAPTURE_SCALE: f64 = 2.0;
const JPEG_QUALITY: f64 = 0.95;

/// JPEG bitmap plus its pixel size
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    pub width_px: u32,
    pub height_px: u32,
    pub jpeg: Vec<u8>,
}

#[async_trait(?Send)]
pub trait Rasterizer {
    type Source: ?Sized;

    async fn capture(&self, source: &Self::Source) -> Result<RasterImage, ExportError>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = html2canvas, catch)]
    fn html2canvas(element: &HtmlElement, options: &JsValue) -> Result<js_sys::Promise, JsValue>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CaptureOptions {
    scale: f64,
    use_cors: bool,
    background_color: &'static str,
    logging: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Html2CanvasRasterizer {
    pub scale: f64,
}

impl Default for Html2CanvasRasterizer {
    fn default() -> Self {
        Self {
            scale: CAPTURE_SCALE,
        }
    }
}

fn js_error(e: JsValue) -> ExportError {
    ExportError::Capture(format!("{:?}", e))
}

#[async_trait(?Send)]
impl Rasterizer for Html2CanvasRasterizer {
    type Source = HtmlElement;

    async fn capture(&self, element: &HtmlElement) -> Result<RasterImage, ExportError> {
        let options = serde_wasm_bindgen::to_value(&CaptureOptions {
            scale: self.scale,
            use_cors: true,
            background_color: "#ffffff",
            logging: false,
        })
        .map_err(|e| ExportError::Capture(e.to_string()))?;

        let promise = html2canvas(element, &options).map_err(js_error)?;
        let canvas: HtmlCanvasElement = JsFuture::from(promise)
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| ExportError::Capture("html2canvas did not return a canvas".to_string()))?;

        let data_url = canvas
            .to_data_url_with_type_and_encoder_options("image/jpeg", &JsValue::from_f64(JPEG_QUALITY))
            .map_err(js_error)?;

        Ok(RasterImage {
            width_px: canvas.width(),
            height_px: canvas.height(),
            jpeg: decode_data_url(&data_url)?,
        })
    }
}

/// Decodes the payload of a base64 `data:` URL.
pub fn decode_data_url(data_url: &str) -> Result<Vec<u8>, ExportError> {
    let (header, payload) = data_url
        .split_once(',')
        .ok_or_else(|| ExportError::Encoding("not a data URL".to_string()))?;
    if !header.starts_with("data:") || !header.ends_with(";base64") {
        return Err(ExportError::Encoding(format!("unsupported data URL header: {}", header)));
    }
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| ExportError::Encoding(e.to_string()))?;
    if bytes.is_empty() {
        return Err(ExportError::EmptyImage);
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_data_url() {
        let bytes = decode_data_url("data:image/jpeg;base64,/9j/4AAQ").unwrap();
        assert_eq!(&bytes[..3], &[0xFF, 0xD8, 0xFF]);
    }

    #[test]
    fn test_rejects_non_base64_urls() {
        assert!(matches!(
            decode_data_url("data:image/svg+xml,<svg/>"),
            Err(ExportError::Encoding(_))
        ));
        assert!(matches!(decode_data_url("garbage"), Err(ExportError::Encoding(_))));
    }

    #[test]
    fn test_blank_canvas_is_empty() {
        // Browsers return "data:," for a zero-sized canvas.
        assert!(decode_data_url("data:,").is_err());
        assert_eq!(decode_data_url("data:image/jpeg;base64,"), Err(ExportError::EmptyImage));
    }
}
