//! Demo pages for the components

pub mod avatar_group;
pub mod floating_field;
pub mod page;
pub mod page_manager;

pub use avatar_group::{AvatarGroupPage, MonogramAvatar};
pub use floating_field::{FieldSlot, FloatingFieldPage};
pub use page::{Page, PageWrapper};
pub use page_manager::PageManager;
