//! Validation errors for layout input.
//!
//! The layout and extraction algorithms themselves never fail: empty input
//! produces empty output and a missing anchor produces an empty value. These
//! errors exist for orchestrators that want to reject malformed input before
//! handing it to the core.

use thiserror::Error;

use crate::geometry::PercentBBox;

/// Input that breaks the positioned-text contract.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A fragment has non-finite coordinates, negative width or non-positive height.
    #[error("fragment {index} has invalid geometry: {reason}")]
    InvalidFragment {
        /// Index of the fragment in the page's fragment list.
        index: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// The page dimensions are not positive finite numbers.
    #[error("invalid page size {width}x{height}")]
    InvalidPageSize { width: f64, height: f64 },

    /// A selection box with no area.
    #[error("selection box has no area: {0:?}")]
    DegenerateRegion(PercentBBox),
}

/// Check that a page size can host fragments.
pub fn validate_page_size(width: f64, height: f64) -> Result<(), LayoutError> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidPageSize { width, height })
    }
}
