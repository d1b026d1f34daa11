//! Geometry and timing configuration for the widgets.
//!
//! Defaults reproduce the stock look: 50 px avatars overlapping by 10 px, and
//! a 56 px tall field whose label floats 25 px above centre over 300 ms.

use embassy_time::Duration;
use serde::{Deserialize, Serialize};

use crate::ui::styling::Padding;

/// Maximum number of avatars an [`AvatarStack`](crate::ui::AvatarStack) renders.
pub const MAX_VISIBLE_AVATARS: usize = 4;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct AvatarStackConfig {
    /// Diameter of each avatar and of the overflow badge
    pub avatar_size: u32,
    /// How far each element slides under the previous one
    pub overlap: u32,
    /// Width of the ring drawn around each avatar
    pub border_width: u32,
}

impl Default for AvatarStackConfig {
    fn default() -> Self {
        Self {
            avatar_size: 50,
            overlap: 10,
            border_width: 1,
        }
    }
}

impl AvatarStackConfig {
    /// Horizontal distance between the leading edges of neighbouring elements.
    pub fn stride(&self) -> i32 {
        self.avatar_size.saturating_sub(self.overlap) as i32
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct FloatingFieldConfig {
    /// Height of the bordered box
    pub height: u32,
    /// Corner radius of the bordered box
    pub border_radius: u32,
    /// Inset of the text input area from the border, on every side
    pub input_inset: u32,
    /// Label distance from the leading edge while resting
    pub resting_inset: i32,
    /// Label distance from the leading edge while floating
    pub floating_inset: i32,
    /// How far the label centre rises above the box centre while floating
    pub float_offset: i32,
    /// Duration of the resting/floating transition in milliseconds
    pub animation_ms: u64,
    /// Insets between the label caption and its pill
    pub label_padding: Padding,
    /// Side length of the inline clear control
    pub clear_control_size: u32,
}

impl Default for FloatingFieldConfig {
    fn default() -> Self {
        Self {
            height: 56,
            border_radius: 8,
            input_inset: 15,
            resting_inset: 10,
            floating_inset: 12,
            float_offset: 25,
            animation_ms: 300,
            label_padding: Padding::new(2, 6, 2, 6),
            clear_control_size: 24,
        }
    }
}

impl FloatingFieldConfig {
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stride() {
        assert_eq!(AvatarStackConfig::default().stride(), 40);
    }

    #[test]
    fn test_stride_never_negative() {
        let config = AvatarStackConfig {
            avatar_size: 8,
            overlap: 20,
            border_width: 0,
        };
        assert_eq!(config.stride(), 0);
    }

    #[test]
    fn test_field_config_survives_postcard() {
        let config = FloatingFieldConfig {
            float_offset: 30,
            ..FloatingFieldConfig::default()
        };

        let bytes = postcard::to_allocvec(&config).unwrap();
        let decoded: FloatingFieldConfig = postcard::from_bytes(&bytes).unwrap();

        assert_eq!(decoded, config);
        assert_eq!(decoded.animation_duration(), Duration::from_millis(300));
    }
}
