//! Tests for generation constants and defaults

#[cfg(test)]
mod tests {
    use autostereogram::io::configuration::{
        CIRCLE_COUNT, CIRCLE_RADIUS_DIVISOR, DEFAULT_SEED, DEFAULT_TILE_SIZE, DEMO_REGIONS,
        DEMO_SIZE, DEPTH_SHIFT_DIVISOR, MAX_INDIVIDUAL_PROGRESS_BARS, OUTPUT_SUFFIX,
        SUPPORTED_EXTENSIONS,
    };

    // Full depth range maps onto a 0-25 pixel shift
    #[test]
    fn test_shift_range() {
        assert_eq!(DEPTH_SHIFT_DIVISOR, 10);
        assert_eq!(255 / DEPTH_SHIFT_DIVISOR, 25);
    }

    #[test]
    fn test_synthetic_tile_defaults() {
        assert_eq!(DEFAULT_TILE_SIZE, 100);
        assert_eq!(CIRCLE_COUNT, 1000);
        assert_eq!(DEFAULT_TILE_SIZE / CIRCLE_RADIUS_DIVISOR, 1);
    }

    #[test]
    fn test_default_seed_is_reproducible() {
        assert_eq!(DEFAULT_SEED, 42);
    }

    #[test]
    fn test_demo_regions_fit_demo_size() {
        for ((x0, y0, x1, y1), depth) in DEMO_REGIONS {
            assert!(x0 < x1 && x1 <= DEMO_SIZE.0);
            assert!(y0 < y1 && y1 <= DEMO_SIZE.1);
            assert!(depth > 0);
        }
    }

    #[test]
    fn test_output_suffix_no_special_chars() {
        assert!(OUTPUT_SUFFIX.starts_with('_'));
        for ch in OUTPUT_SUFFIX.chars() {
            assert!(
                ch.is_alphanumeric() || ch == '_' || ch == '-',
                "Output suffix contains invalid character: {ch}"
            );
        }
    }

    #[test]
    fn test_supported_extensions_are_lowercase() {
        assert!(SUPPORTED_EXTENSIONS.contains(&"png"));
        for ext in SUPPORTED_EXTENSIONS {
            assert_eq!(ext, ext.to_lowercase());
        }
    }

    #[test]
    fn test_max_progress_bars_value() {
        assert_eq!(MAX_INDIVIDUAL_PROGRESS_BARS, 5);
    }
}
