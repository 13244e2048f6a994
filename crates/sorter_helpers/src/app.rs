use bevy::prelude::*;
use bevy::window::{PresentMode, WindowMode, WindowResolution};
use bevy_framepace::{FramepaceSettings, Limiter};

pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 600.0;

/// Rendering is paced to this rate; game logic counts frames, so it never
/// depends on the rate being hit exactly.
pub const TARGET_FRAME_RATE: f64 = 30.0;

// Creates a Bevy app with default settings shared by every game in this
// workspace. This prevents duplication / errors across games.
pub fn get_default_app(game_name: &str) -> App {
    let mut app = App::new();

    let window_plugin = WindowPlugin {
        primary_window: Some(Window {
            title: game_name.to_string(),
            present_mode: PresentMode::Fifo,
            resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            resizable: false,
            mode: WindowMode::Windowed,
            ..default()
        }),
        ..default()
    };

    app.add_plugins(DefaultPlugins.set(window_plugin));

    // Caps the frame rate so the frame-count timers run close to real time.
    // https://github.com/aevyrie/bevy_framepace
    app.add_plugins(bevy_framepace::FramepacePlugin);
    app.insert_resource(FramepaceSettings {
        limiter: Limiter::from_framerate(TARGET_FRAME_RATE),
    });

    app.insert_resource(ClearColor(Color::BLACK));

    app
}
