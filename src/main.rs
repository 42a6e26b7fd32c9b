use tracing::metadata::LevelFilter;

mod config;
mod error;
mod geometry;
mod gui;
mod input;
mod layout;
mod raster;
mod renderer;
mod rounded_rect;
mod sprite_cache;
mod text;

use config::MenuConfig;
use error::MenuError;
use gui::MainMenuScreen;
use input::{InputSystem, MenuAction};
use renderer::{MenuRenderer, SdlRenderer};

/// Reads the log level from `RUST_LOG`, defaulting to info
fn log_level() -> LevelFilter {
    std::env::var("RUST_LOG")
        .map(|level| match level.as_str() {
            "error" | "ERROR" => LevelFilter::ERROR,
            "warn" | "WARN" => LevelFilter::WARN,
            "info" | "INFO" => LevelFilter::INFO,
            "debug" | "DEBUG" => LevelFilter::DEBUG,
            "trace" | "TRACE" => LevelFilter::TRACE,
            "off" | "OFF" => LevelFilter::OFF,
            _ => LevelFilter::INFO,
        })
        .unwrap_or(LevelFilter::INFO)
}

fn init_logging() {
    if let Err(e) = tracing_subscriber::fmt().with_max_level(log_level()).try_init() {
        eprintln!("Warning: could not install logger: {}", e);
    }
}

/// Hands a button action to the rest of the game.
///
/// Returns `false` when the host loop should stop.
fn navigate(action: MenuAction) -> bool {
    match action {
        MenuAction::StartGame => {
            // Game screen lives outside the menu
            tracing::info!("transition: start game");
            true
        }
        MenuAction::ShowHighScores => {
            tracing::info!("transition: high scores");
            true
        }
        MenuAction::Quit => false,
    }
}

fn run() -> Result<(), MenuError> {
    let config = MenuConfig::load()?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    tracing::info!(
        width = config.window_width,
        height = config.window_height,
        fps = config.target_fps,
        "opening menu window"
    );

    let window = video_subsystem
        .window(&config.window_title, config.window_width, config.window_height)
        .position_centered()
        .build()
        .map_err(|e| MenuError::Sdl(e.to_string()))?;

    let canvas = window
        .into_canvas()
        .build()
        .map_err(|e| MenuError::Sdl(e.to_string()))?;
    let texture_creator = canvas.texture_creator();
    let mut renderer = SdlRenderer::new(canvas, &texture_creator, config.text_scale);

    match config.background_path() {
        Some(path) => {
            if let Err(e) = renderer.load_background(path) {
                tracing::warn!(%e, "no background image, drawing clear color only");
            }
        }
        None => tracing::debug!("no background image configured"),
    }

    let mut event_pump = sdl_context.event_pump()?;
    let input_system = InputSystem::new();
    let mut menu = MainMenuScreen::new(&config, |text| renderer.measure_text(text));
    let frame_duration = config.frame_duration();

    'running: loop {
        let input = input_system.poll(&mut event_pump);
        if input.quit_requested {
            tracing::info!("quit requested");
            break 'running;
        }

        if let Some(action) = menu.update(input.pointer) {
            if !navigate(action) {
                break 'running;
            }
        }

        menu.draw(&mut renderer)?;
        renderer.present();

        std::thread::sleep(frame_duration);
    }

    tracing::debug!(textures = renderer.cached_textures(), "menu closed");
    Ok(())
}

fn main() -> Result<(), String> {
    init_logging();

    run().map_err(|e| {
        tracing::error!(%e, "menu failed");
        String::from(e)
    })
}
