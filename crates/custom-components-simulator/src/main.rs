//! Desktop simulator for the custom-components widgets.
//!
//! Renders the demo pages in an SDL2 window via `embedded-graphics-simulator`.
//! Pass `--rtl` to lay the text fields out right-to-left and `--dark` for the
//! dark palette.
//!
//! # Key bindings
//!
//! | Key             | Action                          |
//! |-----------------|---------------------------------|
//! | F1              | Avatar group page               |
//! | F2              | Floating field page             |
//! | Tab             | Focus next field                |
//! | Return          | Submit focused field            |
//! | Escape          | End editing                     |
//! | a-z 0-9 . - @   | Type into the focused field     |
//!
//! Mouse clicks are forwarded as touch events.

use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
    sdl2::{Keycode, Mod},
};
use log::{error, info};

use custom_components::pages::{
    AvatarGroupPage, FloatingFieldPage, PageManager, PageWrapper,
};
use custom_components::ui::{
    DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX, KeyEvent, LayoutDirection, PageId, Theme, TouchEvent,
    TouchPoint,
};

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

/// Target frame duration (~60 FPS, smooth enough for the label tween).
const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Printable keys and the characters they type, unshifted and shifted.
const CHAR_KEYS: [(Keycode, char, char); 40] = [
    (Keycode::A, 'a', 'A'),
    (Keycode::B, 'b', 'B'),
    (Keycode::C, 'c', 'C'),
    (Keycode::D, 'd', 'D'),
    (Keycode::E, 'e', 'E'),
    (Keycode::F, 'f', 'F'),
    (Keycode::G, 'g', 'G'),
    (Keycode::H, 'h', 'H'),
    (Keycode::I, 'i', 'I'),
    (Keycode::J, 'j', 'J'),
    (Keycode::K, 'k', 'K'),
    (Keycode::L, 'l', 'L'),
    (Keycode::M, 'm', 'M'),
    (Keycode::N, 'n', 'N'),
    (Keycode::O, 'o', 'O'),
    (Keycode::P, 'p', 'P'),
    (Keycode::Q, 'q', 'Q'),
    (Keycode::R, 'r', 'R'),
    (Keycode::S, 's', 'S'),
    (Keycode::T, 't', 'T'),
    (Keycode::U, 'u', 'U'),
    (Keycode::V, 'v', 'V'),
    (Keycode::W, 'w', 'W'),
    (Keycode::X, 'x', 'X'),
    (Keycode::Y, 'y', 'Y'),
    (Keycode::Z, 'z', 'Z'),
    (Keycode::Num0, '0', ')'),
    (Keycode::Num1, '1', '!'),
    (Keycode::Num2, '2', '@'),
    (Keycode::Num3, '3', '#'),
    (Keycode::Num4, '4', '$'),
    (Keycode::Num5, '5', '%'),
    (Keycode::Num6, '6', '^'),
    (Keycode::Num7, '7', '&'),
    (Keycode::Num8, '8', '*'),
    (Keycode::Num9, '9', '('),
    (Keycode::Period, '.', '>'),
    (Keycode::Minus, '-', '_'),
    (Keycode::Space, ' ', ' '),
    (Keycode::At, '@', '@'),
];

/// Full-screen bounding rectangle.
fn screen_bounds() -> Rectangle {
    Rectangle::new(
        Point::zero(),
        Size::new(DISPLAY_WIDTH_PX as u32, DISPLAY_HEIGHT_PX as u32),
    )
}

/// Map an SDL key press to the key event the pages understand.
fn keycode_to_key(keycode: Keycode, keymod: Mod) -> Option<KeyEvent> {
    match keycode {
        Keycode::Tab => return Some(KeyEvent::Tab),
        Keycode::Backspace => return Some(KeyEvent::Backspace),
        Keycode::Return | Keycode::KpEnter => return Some(KeyEvent::Enter),
        Keycode::Escape => return Some(KeyEvent::Escape),
        _ => {}
    }

    let shifted = keymod.intersects(Mod::LSHIFTMOD | Mod::RSHIFTMOD);
    CHAR_KEYS
        .iter()
        .find(|(key, _, _)| *key == keycode)
        .map(|&(_, plain, shift)| KeyEvent::Char(if shifted { shift } else { plain }))
}

/// Map an SDL keycode to a page navigation request.
fn keycode_to_page(keycode: Keycode) -> Option<PageId> {
    match keycode {
        Keycode::F1 => Some(PageId::AvatarGroup),
        Keycode::F2 => Some(PageId::FloatingField),
        _ => None,
    }
}

/// Register both demo pages, starting on the avatar group.
fn create_manager(direction: LayoutDirection, theme: Theme) -> PageManager {
    let bounds = screen_bounds();
    let mut manager = PageManager::new(PageId::AvatarGroup, bounds);

    manager.register_page(PageWrapper::AvatarGroup(Box::new(AvatarGroupPage::new(
        bounds, theme,
    ))));

    match FloatingFieldPage::new(bounds, theme, direction) {
        Ok(page) => manager.register_page(PageWrapper::FloatingField(Box::new(page))),
        Err(e) => error!("Floating field page unavailable: {}", e),
    }

    manager
}

fn main() {
    env_logger::init();

    let direction = if std::env::args().any(|arg| arg == "--rtl") {
        LayoutDirection::RightToLeft
    } else {
        LayoutDirection::LeftToRight
    };
    let theme = if std::env::args().any(|arg| arg == "--dark") {
        Theme::dark()
    } else {
        Theme::light()
    };

    info!("Starting custom-components simulator");
    info!(
        "Display: {}×{} (scale {}×), {:?}",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, WINDOW_SCALE, direction
    );
    info!("Keys: F1=Avatars  F2=Fields  Tab=Next field  Return=Submit  Esc=Done");

    let mut manager = create_manager(direction, theme);
    let mut display = SimulatorDisplay::<Rgb565>::new(manager.display_bounds().size);

    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Custom Components", &output_settings);

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    if let Err(e) = manager.draw_dirty(&mut display) {
        error!("Draw error: {:?}", e);
    }
    window.update(&display);

    let mut last_frame = Instant::now();

    'running: loop {
        let frame_start = Instant::now();

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown {
                    keycode, keymod, ..
                } => {
                    if let Some(target) = keycode_to_page(keycode) {
                        info!("Navigating to {:?}", target);
                        manager.navigate_to(target);
                    } else if let Some(key) = keycode_to_key(keycode, keymod) {
                        manager.handle_key(key);
                    }
                }

                SimulatorEvent::MouseButtonDown { point, .. } => {
                    let touch = TouchEvent::Press(TouchPoint::new(
                        point.x.max(0) as u16,
                        point.y.max(0) as u16,
                    ));

                    if let Some(action) = manager.handle_touch(touch) {
                        info!("Touch → action {:?}", action);
                    }
                }

                _ => {}
            }
        }

        let elapsed = last_frame.elapsed();
        last_frame = Instant::now();
        manager.update(embassy_time::Duration::from_micros(
            elapsed.as_micros() as u64,
        ));

        if let Err(e) = manager.draw_dirty(&mut display) {
            error!("Draw error: {:?}", e);
        }
        window.update(&display);

        let frame_time = frame_start.elapsed();
        if frame_time < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - frame_time);
        }
    }

    info!("Simulator exiting");
}
