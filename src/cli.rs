// cli.rs - Command-line configuration. Every flag is optional; with none the
// program opens a 1280x720 window, as the bare scaffold does.
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "handmade-blit")]
#[command(about = "Software framebuffer presented to a window", long_about = None)]
pub struct Cli {
    /// Initial client width in pixels
    #[arg(long, default_value_t = 1280)]
    pub width: usize,

    /// Initial client height in pixels
    #[arg(long, default_value_t = 720)]
    pub height: usize,

    /// Window title
    #[arg(long, default_value = "Handmade Hero")]
    pub title: String,

    /// Frame rate cap; 0 runs uncapped
    #[arg(long = "target-fps", default_value_t = 60)]
    pub target_fps: usize,

    /// Keep the window at its initial size
    #[arg(long = "no-resize", default_value_t = false)]
    pub no_resize: bool,
}
