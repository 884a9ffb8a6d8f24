// The real window, backed by minifb.
// Visual effects provided here:
// 1) A resizable window whose client area shows the presented frame.
// 2) Close button / Escape end the run.

use std::collections::VecDeque;

use minifb::{Key, KeyRepeat, ScaleMode, Window, WindowOptions};

use crate::error::{Error, Result};
use crate::host::{Event, WindowHost};
use crate::present::PresentationTarget;

/// The window's drawable area: one `0x00RRGGBB` cell per client pixel.
pub struct WindowSurface {
    window: Window, // the on-screen window you see
    width: usize,
    height: usize,
    pixels: Vec<u32>,
    // Set when update_with_buffer already pumped the OS queue this frame.
    flushed: bool,
}

impl WindowSurface {
    /// Match the cell vector to the live client size.
    fn sync_size(&mut self) {
        let (width, height) = self.window.get_size();
        if (width, height) != (self.width, self.height) {
            self.width = width;
            self.height = height;
            self.pixels = vec![0; width * height];
        }
    }
}

impl PresentationTarget for WindowSurface {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the new image.
    fn flush(&mut self) -> Result<()> {
        self.window
            .update_with_buffer(&self.pixels, self.width, self.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        self.flushed = true;
        Ok(())
    }
}

/// What the window looked like at one pump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowState {
    pub open: bool,
    pub escape: bool,
    pub size: (usize, usize),
    pub active: bool,
}

/// Remembers the last seen window state and turns differences into events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowTracker {
    open: bool,
    focused: bool,
    client_size: (usize, usize),
}

impl WindowTracker {
    /// A freshly opened, unfocused window of `client_size`.
    pub fn new(client_size: (usize, usize)) -> Self {
        Self { open: true, focused: false, client_size }
    }

    /// Events implied by going from the remembered state to `now`.
    ///
    /// Window gone → `Destroyed` (once; nothing else after it), Escape →
    /// `CloseRequested`, new size → `Resize`, activity flip → `FocusChanged`.
    pub fn observe(&mut self, now: WindowState) -> Vec<Event> {
        let mut events = Vec::new();
        if !now.open {
            if std::mem::take(&mut self.open) {
                events.push(Event::Destroyed);
            }
            return events;
        }

        if now.escape {
            events.push(Event::CloseRequested);
        }
        if now.size != self.client_size {
            self.client_size = now.size;
            events.push(Event::Resize { width: now.size.0, height: now.size.1 });
        }
        if now.active != self.focused {
            self.focused = now.active;
            events.push(Event::FocusChanged(now.active));
        }
        events
    }
}

/// [`WindowHost`] over a minifb window.
///
/// minifb has no event queue of its own, so each drain cycle pumps the OS
/// once and lets a [`WindowTracker`] turn state changes into [`Event`]s.
pub struct MinifbHost {
    surface: WindowSurface,
    pending: VecDeque<Event>,
    pumped: bool,
    tracker: WindowTracker,
}

impl MinifbHost {
    /// Create a window with a `width x height` client area.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize, resizable: bool) -> Result<Self> {
        let options = WindowOptions {
            resize: resizable,
            scale_mode: ScaleMode::Stretch,
            ..WindowOptions::default()
        };
        let window = Window::new(title, width, height, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        let tracker = WindowTracker::new(window.get_size());

        let mut surface =
            WindowSurface { window, width: 0, height: 0, pixels: Vec::new(), flushed: false };
        surface.sync_size();

        Ok(Self { surface, pending: VecDeque::new(), pumped: false, tracker })
    }

    /// Cap presentation at `fps` frames per second; 0 removes the cap.
    pub fn set_target_fps(&mut self, fps: usize) {
        self.surface.window.set_target_fps(fps);
    }

    fn pump(&mut self) {
        let window = &mut self.surface.window;
        if !std::mem::take(&mut self.surface.flushed) {
            window.update();
        }

        let now = WindowState {
            open: window.is_open(),
            escape: window.is_key_pressed(Key::Escape, KeyRepeat::No),
            size: window.get_size(),
            active: window.is_active(),
        };
        self.pending.extend(self.tracker.observe(now));
    }
}

impl WindowHost for MinifbHost {
    fn poll_event(&mut self) -> Option<Event> {
        if !self.pumped {
            self.pump();
            self.pumped = true;
        }
        let event = self.pending.pop_front();
        if event.is_none() {
            // Next drain pumps again.
            self.pumped = false;
        }
        event
    }

    fn draw_surface(&mut self) -> &mut dyn PresentationTarget {
        self.surface.sync_size();
        &mut self.surface
    }

    fn client_size(&self) -> (usize, usize) {
        self.surface.window.get_size()
    }
}
