use super::ExportError;

/// Ширина страницы A4, мм
pub const PAGE_WIDTH_MM: f64 = 210.0;
/// Высота страницы A4, мм
pub const PAGE_HEIGHT_MM: f64 = 297.0;
pub const MM_TO_PT: f64 = 72.0 / 25.4;

/// Раскладка одного изображения по страницам
#[derive(Debug, Clone, PartialEq)]
pub struct PagePlan {
    /// Image size in mm once scaled to the page width
    pub image_width: f64,
    pub image_height: f64,
    /// Vertical offset of the image's top edge on each page, in mm
    pub offsets: Vec<f64>,
}

impl PagePlan {
    /// Scales a captured bitmap to the A4 width and plans its pages.
    pub fn for_image(width_px: u32, height_px: u32) -> Result<Self, ExportError> {
        if width_px == 0 || height_px == 0 {
            return Err(ExportError::EmptyImage);
        }
        let image_height = f64::from(height_px) * PAGE_WIDTH_MM / f64::from(width_px);
        Ok(Self::for_height(image_height))
    }

    /// `ceil(H / P)` pages, page `i` offset by `-(i * P)`. At least one page.
    pub fn for_height(image_height: f64) -> Self {
        // Tolerate float noise so an exact multiple of the page height does
        // not spill onto an empty extra page.
        let pages = ((image_height / PAGE_HEIGHT_MM) - 1e-9).ceil().max(1.0) as usize;
        let offsets = (0..pages).map(|i| -(i as f64) * PAGE_HEIGHT_MM).collect();
        Self {
            image_width: PAGE_WIDTH_MM,
            image_height,
            offsets,
        }
    }

    pub fn page_count(&self) -> usize {
        self.offsets.len()
    }

    /// Lower-left corner of the image on page `page`, in PDF points
    /// (origin at the bottom-left of the page).
    pub fn image_origin_pt(&self, page: usize) -> (f64, f64) {
        let top = self.offsets.get(page).copied().unwrap_or(0.0);
        let bottom_from_top = top + self.image_height;
        (0.0, (PAGE_HEIGHT_MM - bottom_from_top) * MM_TO_PT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-6, "{a} != {b}");
    }

    #[test]
    fn test_tall_image_spans_three_pages() {
        let plan = PagePlan::for_height(650.0);
        assert_eq!(plan.page_count(), 3);
        assert_eq!(plan.offsets, vec![0.0, -297.0, -594.0]);
    }

    #[test]
    fn test_short_image_is_one_page() {
        assert_eq!(PagePlan::for_height(120.0).page_count(), 1);
        assert_eq!(PagePlan::for_height(297.0).page_count(), 1);
        assert_eq!(PagePlan::for_height(297.5).page_count(), 2);
    }

    #[test]
    fn test_exact_multiple_has_no_extra_page() {
        assert_eq!(PagePlan::for_height(594.0).page_count(), 2);
    }

    #[test]
    fn test_image_scaled_to_page_width() {
        // 2x capture of a 794 x 2457 CSS px invoice
        let plan = PagePlan::for_image(1588, 4914).unwrap();
        assert_close(plan.image_width, 210.0);
        assert_close(plan.image_height, 4914.0 * 210.0 / 1588.0);
        assert_eq!(plan.page_count(), 3);
    }

    #[test]
    fn test_empty_capture_is_rejected() {
        assert_eq!(PagePlan::for_image(0, 100), Err(ExportError::EmptyImage));
        assert_eq!(PagePlan::for_image(100, 0), Err(ExportError::EmptyImage));
    }

    #[test]
    fn test_image_origin_moves_up_one_page_per_page() {
        let plan = PagePlan::for_height(650.0);
        let (_, first) = plan.image_origin_pt(0);
        let (_, second) = plan.image_origin_pt(1);
        assert_close(first, (297.0 - 650.0) * MM_TO_PT);
        assert_close(second - first, 297.0 * MM_TO_PT);
    }
}
