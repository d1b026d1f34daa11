//! Layout primitives for consistent spacing

use serde::{Deserialize, Serialize};

// ============================================================================
// Padding
// ============================================================================

/// Padding around an element (top, right, bottom, left)
///
/// Defines internal spacing within UI elements, e.g. the room between a
/// label's caption and the pill drawn behind it.
///
/// # Examples
///
/// ```ignore
/// // Equal padding on all sides (8px)
/// let p = Padding::all(8);
///
/// // Different vertical (2px) and horizontal (6px)
/// let p = Padding::symmetric(2, 6);
///
/// let total_width = p.horizontal();  // left + right
/// let total_height = p.vertical();   // top + bottom
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    /// Top padding (pixels)
    pub top: u32,

    /// Right padding (pixels)
    pub right: u32,

    /// Bottom padding (pixels)
    pub bottom: u32,

    /// Left padding (pixels)
    pub left: u32,
}

impl Padding {
    /// Creates equal padding on all sides
    pub fn all(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Creates symmetric padding (vertical and horizontal)
    pub fn symmetric(vertical: u32, horizontal: u32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Creates padding with individual control for each side
    pub fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Returns total horizontal padding (left + right)
    pub fn horizontal(&self) -> u32 {
        self.left + self.right
    }

    /// Returns total vertical padding (top + bottom)
    pub fn vertical(&self) -> u32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_totals() {
        let p = Padding::symmetric(2, 6);
        assert_eq!(p.horizontal(), 12);
        assert_eq!(p.vertical(), 4);
        assert_eq!(p, Padding::new(2, 6, 2, 6));
    }
}
