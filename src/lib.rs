//! Software framebuffer scaffold: an off-screen BGRX bitmap, an animated test
//! pattern drawn into it, and a stretch-blit onto a window each frame.

pub mod buffer;
pub mod cli;
pub mod clock;
pub mod draw;
pub mod error;
pub mod host;
pub mod pattern;
pub mod present;
pub mod run_loop;
pub mod types;

pub use buffer::PixelBuffer;
pub use error::{Error, Result};
pub use host::{Event, MemoryHost, WindowHost};
pub use present::{MemorySurface, PresentationTarget, present};
pub use run_loop::{LoopState, RunLoop};
pub use types::{AnimationState, Bgrx};
