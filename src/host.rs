// The window side of the loop, seen from the core: a stream of lifecycle
// events, a surface to draw into and the current client size.

use std::collections::VecDeque;

use crate::present::{MemorySurface, PresentationTarget};

/// Window lifecycle notifications the run loop reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Client area changed to `width x height`.
    Resize { width: usize, height: usize },
    /// The user asked to close (close button, Escape...).
    CloseRequested,
    /// The window is gone.
    Destroyed,
    /// Gained (`true`) or lost focus. Informational.
    FocusChanged(bool),
    /// The OS wants the current frame drawn again.
    Paint,
    Other,
}

/// What the run loop needs from a native window.
pub trait WindowHost {
    /// Next queued event, or `None` once the queue is drained. Never blocks.
    fn poll_event(&mut self) -> Option<Event>;

    /// The surface frames are presented to, at the live client size.
    fn draw_surface(&mut self) -> &mut dyn PresentationTarget;

    fn client_size(&self) -> (usize, usize);
}

/// A scripted window for tests and headless runs.
///
/// Events are handed out in drain cycles: a cycle ends each time
/// [`poll_event`](WindowHost::poll_event) returns `None`. Events pushed with
/// [`push_event`](Self::push_event) show up in the next cycle; events passed
/// to [`schedule`](Self::schedule) show up in the given cycle.
#[derive(Debug, Default)]
pub struct MemoryHost {
    surface: MemorySurface,
    queue: VecDeque<Event>,
    scheduled: Vec<(usize, Event)>,
    cycle: usize,
    cycle_started: bool,
}

impl MemoryHost {
    pub fn new(width: usize, height: usize) -> Self {
        Self { surface: MemorySurface::new(width, height), ..Self::default() }
    }

    pub fn push_event(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    /// Deliver `event` during drain cycle `cycle` (0 = the first drain).
    pub fn schedule(&mut self, cycle: usize, event: Event) {
        self.scheduled.push((cycle, event));
    }

    pub fn surface(&self) -> &MemorySurface {
        &self.surface
    }

    /// Drain cycles completed so far.
    pub fn cycles(&self) -> usize {
        self.cycle
    }
}

impl WindowHost for MemoryHost {
    fn poll_event(&mut self) -> Option<Event> {
        if !self.cycle_started {
            self.cycle_started = true;
            let cycle = self.cycle;
            let (due, later): (Vec<_>, Vec<_>) =
                self.scheduled.drain(..).partition(|(at, _)| *at <= cycle);
            self.scheduled = later;
            self.queue.extend(due.into_iter().map(|(_, event)| event));
        }

        let event = self.queue.pop_front();
        match event {
            // The window has already changed size by the time it says so.
            Some(Event::Resize { width, height }) => self.surface.resize(width, height),
            Some(_) => {}
            None => {
                self.cycle += 1;
                self.cycle_started = false;
            }
        }
        event
    }

    fn draw_surface(&mut self) -> &mut dyn PresentationTarget {
        &mut self.surface
    }

    fn client_size(&self) -> (usize, usize) {
        self.surface.size()
    }
}
