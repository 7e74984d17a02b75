use sdl2::image::LoadTexture;

mod clock;
mod config;
mod gui;
mod input;
mod logging;
mod navigator;
mod platform;
mod render;
mod text;
mod visualizer;

use clock::FrameClock;
use config::AppConfig;
use gui::MainMenu;
use navigator::{Exit, Navigator};
use platform::SdlPlatform;
use visualizer::BoardFactory;

/// Loads a texture from the given path with consistent error handling
fn load_texture<'a>(
    texture_creator: &'a sdl2::render::TextureCreator<sdl2::video::WindowContext>,
    path: &str,
) -> Result<sdl2::render::Texture<'a>, String> {
    texture_creator
        .load_texture(path)
        .map_err(|e| format!("Failed to load {}: {}", path, e))
}

fn main() -> Result<(), String> {
    let config = AppConfig::load_or_default();
    let display = config.start().map_err(|e| e.to_string())?.display();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window(&config.window_title, display.width, display.height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();

    // The menus work without their background logo
    let logo = match load_texture(&texture_creator, &config.logo_path) {
        Ok(texture) => Some(texture),
        Err(e) => {
            logging::warn(&e);
            None
        }
    };

    let event_pump = sdl_context.event_pump()?;
    let mut platform = SdlPlatform::new(canvas, event_pump, logo);

    logging::success(&format!(
        "Window ready: {}x{} ({} columns, {} fps)",
        display.width, display.height, display.columns, config.fps
    ));

    let mut navigator = Navigator::new(
        Box::new(MainMenu::new(display)),
        FrameClock::new(config.fps),
        BoardFactory,
    );

    match navigator.run(&mut platform)? {
        Exit::Quit => logging::info("Goodbye"),
        Exit::StackEmpty => logging::info("No screens left"),
    }

    Ok(())
}
