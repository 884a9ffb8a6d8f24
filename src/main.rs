// What you SEE:
// • A window filled with a blue/green gradient that scrolls diagonally.
// • Resize the window: the frame is reallocated and stretched to fit.
// • Close the window or press ESC to quit.

use clap::Parser;
use handmade_blit::cli::Cli;
use handmade_blit::draw::MinifbHost;
use handmade_blit::{Error, RunLoop};

fn main() -> Result<(), Error> {
    // Info by default; RUST_LOG overrides it.
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    log::info!(
        "opening \"{}\" at {}x{} (target fps {}, resizable {})",
        cli.title,
        cli.width,
        cli.height,
        cli.target_fps,
        !cli.no_resize
    );

    /* --- Window setup ---
       Failing here is fatal: we never enter the loop. */
    let mut host = MinifbHost::new(&cli.title, cli.width, cli.height, !cli.no_resize)?;
    host.set_target_fps(cli.target_fps);

    /* --- Main loop ---
       Visual: runs until the window goes away. */
    let mut run = RunLoop::new();
    run.run(&mut host)?;

    log::info!("done after {} frames", run.frames());
    Ok(())
}
