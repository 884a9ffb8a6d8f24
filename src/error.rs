// One error type for the whole crate.
// Every variant states *where* things went wrong.

/// Everything that can stop a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The backing block for a `width x height` buffer could not be obtained.
    /// The buffer that was being resized keeps its previous contents.
    #[error("Out of memory allocating a {width}x{height} pixel buffer")]
    OutOfMemory { width: usize, height: usize },

    /// Creating the window failed (fatal at startup).
    #[error("Window init error: {0}")]
    WindowInit(String),

    /// Pushing a finished frame to the window failed.
    #[error("Window update error: {0}")]
    WindowUpdate(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_stage() {
        let oom = Error::OutOfMemory { width: 3, height: 7 };
        assert_eq!(oom.to_string(), "Out of memory allocating a 3x7 pixel buffer");

        let init = Error::WindowInit("no display".into());
        assert_eq!(init.to_string(), "Window init error: no display");

        let update = Error::WindowUpdate("lost surface".into());
        assert_eq!(update.to_string(), "Window update error: lost surface");
    }
}
