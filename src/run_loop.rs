// The frame loop: drain window events, draw the pattern, present, advance.
// Visual: the gradient scrolls diagonally until the window is closed.

use crate::buffer::PixelBuffer;
use crate::clock::FrameCounter;
use crate::error::Result;
use crate::host::{Event, WindowHost};
use crate::pattern::render_weird_gradient;
use crate::present::present;
use crate::types::AnimationState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Initializing,
    Running,
    Terminated,
}

/// All state of one running window: the buffer, the scroll offsets and
/// whether we are still going.
#[derive(Debug)]
pub struct RunLoop {
    state: LoopState,
    buffer: PixelBuffer,
    animation: AnimationState,
    frames: FrameCounter,
}

impl RunLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Initializing,
            buffer: PixelBuffer::new(),
            animation: AnimationState::default(),
            frames: FrameCounter::new(),
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn animation(&self) -> AnimationState {
        self.animation
    }

    /// Frames generated so far, whether or not the window had room to show them.
    /// Paint re-presents are not frames.
    pub fn frames(&self) -> u64 {
        self.frames.total()
    }

    /// Size the buffer to the window's client area and start running.
    /// Does nothing once past `Initializing`.
    pub fn initialize<H: WindowHost + ?Sized>(&mut self, host: &H) -> Result<()> {
        if self.state != LoopState::Initializing {
            return Ok(());
        }
        let (width, height) = host.client_size();
        self.buffer.resize(width, height)?;
        self.state = LoopState::Running;
        log::info!("run loop: running at {width}x{height}");
        Ok(())
    }

    /// One iteration. Initializes on first call; a no-op after termination.
    /// Any error terminates the loop before it is returned.
    pub fn step<H: WindowHost + ?Sized>(&mut self, host: &mut H) -> Result<LoopState> {
        self.iterate(host).inspect_err(|_| self.terminate())
    }

    /// Step until the window closes.
    pub fn run<H: WindowHost + ?Sized>(&mut self, host: &mut H) -> Result<()> {
        while self.step(host)? != LoopState::Terminated {}
        Ok(())
    }

    fn iterate<H: WindowHost + ?Sized>(&mut self, host: &mut H) -> Result<LoopState> {
        match self.state {
            LoopState::Initializing => self.initialize(host)?,
            LoopState::Terminated => return Ok(LoopState::Terminated),
            LoopState::Running => {}
        }

        self.drain_events(host)?;
        if self.state == LoopState::Terminated {
            self.terminate();
            return Ok(LoopState::Terminated);
        }

        let AnimationState { x_offset, y_offset } = self.animation;
        render_weird_gradient(&mut self.buffer, x_offset, y_offset);
        present(&self.buffer, host.draw_surface())?;

        if let Some(fps) = self.frames.tick() {
            log::info!("FPS: {fps:.1}");
        }
        self.animation.advance();
        Ok(self.state)
    }

    fn drain_events<H: WindowHost + ?Sized>(&mut self, host: &mut H) -> Result<()> {
        while let Some(event) = host.poll_event() {
            match event {
                Event::Resize { width, height } => self.buffer.resize(width, height)?,
                Event::CloseRequested | Event::Destroyed => {
                    log::info!("run loop: {event:?}, stopping");
                    self.state = LoopState::Terminated;
                    break;
                }
                Event::FocusChanged(focused) => log::debug!("run loop: focused = {focused}"),
                // Redraw what we already have; the pattern does not move.
                Event::Paint => present(&self.buffer, host.draw_surface())?,
                Event::Other => {}
            }
        }
        Ok(())
    }

    fn terminate(&mut self) {
        if !self.buffer.is_empty() {
            log::debug!("run loop: releasing {} byte buffer", self.buffer.bytes().len());
        }
        self.buffer.release();
        self.state = LoopState::Terminated;
    }
}

impl Default for RunLoop {
    fn default() -> Self {
        Self::new()
    }
}
