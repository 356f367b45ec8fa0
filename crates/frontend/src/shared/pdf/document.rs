//! Сборка многостраничного PDF из одного растрового изображения

use super::page_plan::{PagePlan, MM_TO_PT, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use super::raster::RasterImage;
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Ref};

const IMAGE_NAME: &[u8] = b"Im1";

/// Writes `image` once as a DCT XObject and draws it on every page of `plan`,
/// shifted by that page's offset.
pub fn build_pdf(image: &RasterImage, plan: &PagePlan) -> Vec<u8> {
    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let image_id = Ref::new(3);
    let page_ids: Vec<Ref> = (0..plan.page_count())
        .map(|i| Ref::new(4 + 2 * i as i32))
        .collect();
    let content_ids: Vec<Ref> = (0..plan.page_count())
        .map(|i| Ref::new(5 + 2 * i as i32))
        .collect();

    let page_width = (PAGE_WIDTH_MM * MM_TO_PT) as f32;
    let page_height = (PAGE_HEIGHT_MM * MM_TO_PT) as f32;
    let image_width = (plan.image_width * MM_TO_PT) as f32;
    let image_height = (plan.image_height * MM_TO_PT) as f32;

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(page_ids.iter().copied())
        .count(plan.page_count() as i32);

    for (i, (&page_id, &content_id)) in page_ids.iter().zip(&content_ids).enumerate() {
        let mut page = pdf.page(page_id);
        page.media_box(Rect::new(0.0, 0.0, page_width, page_height))
            .parent(page_tree_id)
            .contents(content_id);
        page.resources().x_objects().pair(Name(IMAGE_NAME), image_id);
        page.finish();

        let (x, y) = plan.image_origin_pt(i);
        let mut content = Content::new();
        content.save_state();
        content.transform([image_width, 0.0, 0.0, image_height, x as f32, y as f32]);
        content.x_object(Name(IMAGE_NAME));
        content.restore_state();
        pdf.stream(content_id, &content.finish());
    }

    let mut xobject = pdf.image_xobject(image_id, &image.jpeg);
    xobject.filter(Filter::DctDecode);
    xobject.width(image.width_px as i32);
    xobject.height(image.height_px as i32);
    xobject.color_space().device_rgb();
    xobject.bits_per_component(8);
    xobject.finish();

    pdf.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(haystack: &[u8], needle: &[u8]) -> usize {
        haystack.windows(needle.len()).filter(|w| *w == needle).count()
    }

    fn image() -> RasterImage {
        RasterImage {
            width_px: 1588,
            height_px: 4914,
            jpeg: vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0xFF, 0xD9],
        }
    }

    #[test]
    fn test_one_image_drawn_on_every_page() {
        let plan = PagePlan::for_height(650.0);
        let bytes = build_pdf(&image(), &plan);
        assert!(bytes.starts_with(b"%PDF-"));
        assert_eq!(count(&bytes, b"/Count 3"), 1);
        assert_eq!(count(&bytes, b"/Im1 Do"), 3);
        assert_eq!(count(&bytes, b"/DCTDecode"), 1);
    }

    #[test]
    fn test_single_page_document() {
        let plan = PagePlan::for_height(100.0);
        let bytes = build_pdf(&image(), &plan);
        assert_eq!(count(&bytes, b"/Count 1"), 1);
        assert_eq!(count(&bytes, b"/Im1 Do"), 1);
    }
}
