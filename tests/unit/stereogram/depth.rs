//! Tests for depth map construction, luma reduction and sampling

#[cfg(test)]
mod tests {
    use autostereogram::stereogram::depth::DepthMap;
    use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
    use ndarray::Array2;

    #[test]
    fn test_from_luma_preserves_samples() {
        let gray = GrayImage::from_fn(4, 3, |x, y| Luma([(x * 10 + y) as u8]));

        let depth = DepthMap::from_luma(&gray);

        assert_eq!(depth.dimensions(), (4, 3));
        assert_eq!(depth.sample(0, 0), 0);
        assert_eq!(depth.sample(3, 2), 32);
        assert_eq!(depth.sample(1, 2), 12);
    }

    #[test]
    fn test_from_image_converts_color_to_luma() {
        let mut rgb = RgbImage::from_pixel(3, 1, Rgb([0, 0, 0]));
        rgb.put_pixel(1, 0, Rgb([255, 255, 255]));
        rgb.put_pixel(2, 0, Rgb([100, 100, 100]));

        let depth = DepthMap::from_image(&DynamicImage::ImageRgb8(rgb));

        assert_eq!(depth.sample(0, 0), 0);
        assert_eq!(depth.sample(1, 0), 255);
        assert_eq!(depth.sample(2, 0), 100);
    }

    #[test]
    fn test_from_image_keeps_single_channel_input() {
        let gray = GrayImage::from_fn(5, 5, |x, y| Luma([(x + y * 5) as u8]));

        let depth = DepthMap::from_image(&DynamicImage::ImageLuma8(gray.clone()));

        assert_eq!(depth, DepthMap::from_luma(&gray));
        assert_eq!(depth.to_luma(), gray);
    }

    #[test]
    fn test_array_is_indexed_row_major() {
        let mut samples = Array2::<u8>::zeros((2, 3));
        samples[[1, 2]] = 77;

        let depth = DepthMap::from_array(samples);

        assert_eq!(depth.width(), 3);
        assert_eq!(depth.height(), 2);
        assert_eq!(depth.sample(2, 1), 77);
        assert_eq!(depth.sample(1, 2), 0);
    }

    #[test]
    fn test_out_of_range_reads() {
        let depth = DepthMap::filled(2, 2, 9);

        assert_eq!(depth.get(1, 1), Some(9));
        assert_eq!(depth.get(2, 0), None);
        assert_eq!(depth.get(0, 2), None);
        assert_eq!(depth.sample(5, 5), 0);
    }

    #[test]
    fn test_filled_map() {
        let depth = DepthMap::filled(300, 100, 100);

        assert_eq!(depth.dimensions(), (300, 100));
        assert!(depth.samples().iter().all(|&value| value == 100));
    }
}
