//! Page number clamping.

/// Clamps a requested page into `[1, total_pages]`.
///
/// Out-of-range requests are disallowed at the UI trigger level, but a
/// composer receiving one anyway must never forward it upstream. When
/// `total_pages` is not yet known, the upper bound is 1.
#[must_use]
pub fn clamp_page(requested: i64, total_pages: Option<u32>) -> u32 {
    let upper = i64::from(total_pages.unwrap_or(1).max(1));
    u32::try_from(requested.clamp(1, upper)).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_page_is_unchanged() {
        // Arrange & Act & Assert
        assert_eq!(clamp_page(3, Some(10)), 3);
        assert_eq!(clamp_page(1, Some(10)), 1);
        assert_eq!(clamp_page(10, Some(10)), 10);
    }

    #[test]
    fn test_zero_and_negative_clamp_to_one() {
        // Arrange & Act & Assert
        assert_eq!(clamp_page(0, Some(10)), 1);
        assert_eq!(clamp_page(-5, Some(10)), 1);
        assert_eq!(clamp_page(i64::MIN, Some(10)), 1);
    }

    #[test]
    fn test_overshoot_clamps_to_total() {
        // Arrange & Act & Assert
        assert_eq!(clamp_page(60, Some(10)), 10);
        assert_eq!(clamp_page(i64::MAX, Some(500)), 500);
    }

    #[test]
    fn test_unknown_total_clamps_to_one() {
        // Arrange & Act & Assert
        assert_eq!(clamp_page(7, None), 1);
        assert_eq!(clamp_page(1, None), 1);
    }

    #[test]
    fn test_zero_total_pages_still_yields_one() {
        // Arrange & Act & Assert
        assert_eq!(clamp_page(3, Some(0)), 1);
    }
}
