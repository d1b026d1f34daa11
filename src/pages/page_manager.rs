// src/pages/page_manager.rs
//! Page manager with navigation and input routing.

use crate::pages::page::{Page, PageWrapper};
use crate::ui::core::{Action, KeyEvent, PageId, TouchEvent};
use embassy_time::Duration;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;
use log::{debug, warn};

/// Upper bound on registered pages
const MAX_PAGES: usize = 4;

/// Owns the demo pages and forwards input, time and drawing to the active one.
pub struct PageManager {
    pages: Vec<PageWrapper, MAX_PAGES>,
    current_page: PageId,
    navigation_stack: Vec<PageId, MAX_PAGES>,
    display_bounds: Rectangle,
}

impl PageManager {
    pub fn new(initial_page: PageId, display_bounds: Rectangle) -> Self {
        Self {
            pages: Vec::new(),
            current_page: initial_page,
            navigation_stack: Vec::new(),
            display_bounds,
        }
    }

    /// Register a page. Pages past [`MAX_PAGES`] are dropped with a warning.
    pub fn register_page(&mut self, page: PageWrapper) {
        let id = page.id();
        if self.pages.push(page).is_err() {
            warn!("Page table full, dropping {:?}", id);
        }
    }

    pub fn navigate_to(&mut self, page_id: PageId) {
        if page_id == self.current_page {
            return;
        }

        if let Some(current) = self.current_page_mut() {
            current.on_deactivate();
        }

        if self.navigation_stack.is_full() {
            self.navigation_stack.remove(0);
        }
        self.navigation_stack.push(self.current_page).ok();
        self.current_page = page_id;
        debug!("Navigated to {:?}", page_id);

        if let Some(new_page) = self.current_page_mut() {
            new_page.on_activate();
        }
    }

    /// Return to the previous page. Returns `false` at the bottom of the stack.
    pub fn go_back(&mut self) -> bool {
        let Some(previous) = self.navigation_stack.pop() else {
            return false;
        };

        if let Some(current) = self.current_page_mut() {
            current.on_deactivate();
        }
        self.current_page = previous;
        if let Some(page) = self.current_page_mut() {
            page.on_activate();
        }
        true
    }

    fn current_page_mut(&mut self) -> Option<&mut PageWrapper> {
        self.pages.iter_mut().find(|p| p.id() == self.current_page)
    }

    fn current_page(&self) -> Option<&PageWrapper> {
        self.pages.iter().find(|p| p.id() == self.current_page)
    }

    /// Route a touch to the active page, following any navigation it asks for.
    pub fn handle_touch(&mut self, event: TouchEvent) -> Option<Action> {
        let action = self.current_page_mut()?.handle_touch(event);
        if let Some(Action::NavigateToPage(page_id)) = action {
            self.navigate_to(page_id);
        }
        action
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.current_page_mut()
            .is_some_and(|page| page.handle_key(key))
    }

    pub fn update(&mut self, elapsed: Duration) {
        if let Some(page) = self.current_page_mut() {
            page.update(elapsed);
        }
    }

    /// Redraw the active page if anything on it changed.
    ///
    /// Returns whether a draw happened.
    pub fn draw_dirty<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<bool, D::Error> {
        match self.current_page_mut() {
            Some(page) if page.is_dirty() => {
                page.draw_page(display)?;
                page.mark_clean();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.current_page().is_some_and(|page| page.is_dirty())
    }

    pub fn current_page_id(&self) -> PageId {
        self.current_page
    }

    pub fn current_title(&self) -> Option<&str> {
        self.current_page().map(|page| page.title())
    }

    pub fn display_bounds(&self) -> Rectangle {
        self.display_bounds
    }
}
