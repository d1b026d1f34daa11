// src/pages/page.rs
//! Page abstraction and the enum wrapper the [`PageManager`](super::PageManager)
//! stores pages in.
//!
//! Pages are kept in a `heapless::Vec<PageWrapper, N>` rather than behind
//! `dyn Page`, so every concrete page gets a variant in [`PageWrapper`].

use crate::ui::core::{Action, KeyEvent, PageId, TouchEvent};
use alloc::boxed::Box;
use embassy_time::Duration;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// A full-screen demo page.
///
/// The manager calls, per frame: `handle_touch`/`handle_key` for queued
/// input, `update` with the frame time, then `draw_page` when dirty.
pub trait Page {
    fn id(&self) -> PageId;

    fn title(&self) -> &str;

    /// Called once when this page becomes the active page.
    fn on_activate(&mut self) {}

    /// Called once when navigating away.
    fn on_deactivate(&mut self) {}

    /// Process a touch and optionally return an [`Action`] for the manager.
    fn handle_touch(&mut self, event: TouchEvent) -> Option<Action>;

    /// Process a key press. Returns `true` if the page consumed it.
    fn handle_key(&mut self, _key: KeyEvent) -> bool {
        false
    }

    /// Advance animations by the time since the last frame.
    fn update(&mut self, elapsed: Duration);

    fn draw_page<D: DrawTarget<Color = Rgb565>>(&mut self, display: &mut D)
    -> Result<(), D::Error>;

    fn bounds(&self) -> Rectangle;

    fn is_dirty(&self) -> bool;

    fn mark_clean(&mut self);

    fn mark_dirty(&mut self);
}

/// Every page the demo can show.
///
/// Variants are boxed so the enum stays small next to the larger field page.
pub enum PageWrapper {
    AvatarGroup(Box<crate::pages::avatar_group::AvatarGroupPage>),
    FloatingField(Box<crate::pages::floating_field::FloatingFieldPage>),
}

impl Page for PageWrapper {
    fn id(&self) -> PageId {
        match self {
            PageWrapper::AvatarGroup(page) => page.id(),
            PageWrapper::FloatingField(page) => page.id(),
        }
    }

    fn title(&self) -> &str {
        match self {
            PageWrapper::AvatarGroup(page) => page.title(),
            PageWrapper::FloatingField(page) => page.title(),
        }
    }

    fn on_activate(&mut self) {
        match self {
            PageWrapper::AvatarGroup(page) => page.on_activate(),
            PageWrapper::FloatingField(page) => page.on_activate(),
        }
    }

    fn on_deactivate(&mut self) {
        match self {
            PageWrapper::AvatarGroup(page) => page.on_deactivate(),
            PageWrapper::FloatingField(page) => page.on_deactivate(),
        }
    }

    fn handle_touch(&mut self, event: TouchEvent) -> Option<Action> {
        match self {
            PageWrapper::AvatarGroup(page) => page.handle_touch(event),
            PageWrapper::FloatingField(page) => page.handle_touch(event),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self {
            PageWrapper::AvatarGroup(page) => page.handle_key(key),
            PageWrapper::FloatingField(page) => page.handle_key(key),
        }
    }

    fn update(&mut self, elapsed: Duration) {
        match self {
            PageWrapper::AvatarGroup(page) => page.update(elapsed),
            PageWrapper::FloatingField(page) => page.update(elapsed),
        }
    }

    fn draw_page<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        match self {
            PageWrapper::AvatarGroup(page) => page.draw_page(display),
            PageWrapper::FloatingField(page) => page.draw_page(display),
        }
    }

    fn bounds(&self) -> Rectangle {
        match self {
            PageWrapper::AvatarGroup(page) => Page::bounds(page.as_ref()),
            PageWrapper::FloatingField(page) => Page::bounds(page.as_ref()),
        }
    }

    fn is_dirty(&self) -> bool {
        match self {
            PageWrapper::AvatarGroup(page) => Page::is_dirty(page.as_ref()),
            PageWrapper::FloatingField(page) => Page::is_dirty(page.as_ref()),
        }
    }

    fn mark_clean(&mut self) {
        match self {
            PageWrapper::AvatarGroup(page) => Page::mark_clean(page.as_mut()),
            PageWrapper::FloatingField(page) => Page::mark_clean(page.as_mut()),
        }
    }

    fn mark_dirty(&mut self) {
        match self {
            PageWrapper::AvatarGroup(page) => Page::mark_dirty(page.as_mut()),
            PageWrapper::FloatingField(page) => Page::mark_dirty(page.as_mut()),
        }
    }
}
