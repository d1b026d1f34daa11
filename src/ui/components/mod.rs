// src/ui/components/mod.rs
//! UI components library

pub mod avatar_stack;
pub mod clear_button;
pub mod floating_field;
pub mod padded_label;

pub use avatar_stack::{AvatarStack, OverflowBadge};
pub use clear_button::ClearButton;
pub use floating_field::{
    FieldInput, FloatingField, LabelState, LabelVisuals, MAX_TEXT_LEN, SubmitOutcome,
};
pub use padded_label::{MAX_CAPTION_LEN, PaddedLabel};
