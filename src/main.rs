use macroquad::prelude::*;
use life_canvas::{FrameLoop, Settings, input, rendering::QuadRenderer};

fn window_conf() -> Conf {
    Settings::default().window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run(Settings::default()).await {
        log::error!("failed to start: {err}");
        std::process::exit(1);
    }
}

async fn run(settings: Settings) -> life_canvas::Result<()> {
    settings.validate()?;

    let mut frame_loop = FrameLoop::new(&settings);
    let mut renderer = QuadRenderer::new(frame_loop.vertex_buffer())?;

    let (cols, rows) = frame_loop.grid().dimensions();
    log::info!(
        "{cols}x{rows} board, rule {} ({})",
        frame_loop.engine().rule().name(),
        frame_loop.engine().rule().description()
    );
    log::info!("LMB paint, RMB erase, Space run, P pause, U unpause, R back to drawing, C clear");

    // Finish the frame in flight before closing
    prevent_quit();
    while !is_quit_requested() {
        let snapshot = input::poll();
        frame_loop.frame(&snapshot, get_frame_time(), &mut renderer);
        next_frame().await;
    }

    drop(renderer);
    log::info!("closed after {} generations", frame_loop.generation());
    Ok(())
}
