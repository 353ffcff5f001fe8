//! Animated particle field in an SDL2 window.
//!
//! Particles drift, bounce off the window edges, collide elastically and are
//! joined by fading lines when close. The mouse pushes them around and a
//! click drops a new one in.
//!
//! Controls: Up/Down change the particle count, Left/Right the particle
//! size, `R` resets the field and Escape quits. An optional JSON config file
//! can be given as the first argument or through `PFIELD_CONFIG`.

use pfield::surface::SdlSurface;
use pfield::{AppConfig, Error, Field, Input, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::time::Duration;

/// Colour the window starts from before the first fade
const BACKGROUND: Color = Color::RGB(10, 10, 20);
/// Particle count change per Up/Down press
const COUNT_STEP: usize = 5;
/// Particle size change per Left/Right press
const SIZE_STEP: f32 = 0.5;

/// Maps a window event to a field input, if it is one.
fn translate(event: &Event, field: &Field) -> Option<Input> {
    let config = field.config();
    match *event {
        Event::MouseMotion { x, y, .. } => Some(Input::PointerMoved {
            x: x as f32,
            y: y as f32,
        }),
        Event::MouseButtonDown {
            mouse_btn: MouseButton::Left,
            x,
            y,
            ..
        } => Some(Input::Clicked {
            x: x as f32,
            y: y as f32,
        }),
        Event::Window {
            win_event: WindowEvent::SizeChanged(width, height),
            ..
        } => Some(Input::Resized {
            width: width as f32,
            height: height as f32,
        }),
        Event::KeyDown {
            keycode: Some(Keycode::Up),
            ..
        } => Some(Input::SetParticleCount(config.particle_count + COUNT_STEP)),
        Event::KeyDown {
            keycode: Some(Keycode::Down),
            ..
        } => Some(Input::SetParticleCount(config.particle_count.saturating_sub(COUNT_STEP))),
        Event::KeyDown {
            keycode: Some(Keycode::Right),
            ..
        } => Some(Input::SetParticleSize(config.particle_size + SIZE_STEP)),
        Event::KeyDown {
            keycode: Some(Keycode::Left),
            ..
        } => Some(Input::SetParticleSize(config.particle_size - SIZE_STEP)),
        Event::KeyDown {
            keycode: Some(Keycode::R),
            ..
        } => Some(Input::Reset),
        _ => None,
    }
}

fn update_title(canvas: &mut Canvas<Window>, title: &str, field: &Field) {
    let config = field.config();
    let title = format!(
        "{title} | {} particles | size {:.1}",
        config.particle_count, config.particle_size
    );
    if let Err(e) = canvas.window_mut().set_title(&title) {
        log::warn!("could not set window title: {e}");
    }
}

fn run(config: AppConfig) -> Result<()> {
    // Initialize SDL2 and the window
    let sdl_context = sdl2::init().map_err(Error::Sdl)?;
    let video_subsystem = sdl_context.video().map_err(Error::Sdl)?;
    let window = video_subsystem
        .window(&config.title, config.window_width, config.window_height)
        .position_centered()
        .resizable()
        .build()?;

    let mut surface = SdlSurface::new(window.into_canvas().build()?);
    surface.clear(BACKGROUND);
    surface.present();

    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("seeding particle field with {seed}");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut field = Field::new(
        config.window_width as f32,
        config.window_height as f32,
        config.simulation.clone(),
        &mut rng,
    );
    update_title(surface.canvas_mut(), &config.title, &field);

    let frame_time = Duration::from_secs_f64(1.0 / config.frame_rate as f64);
    let mut event_pump = sdl_context.event_pump().map_err(Error::Sdl)?;

    // Main loop: drain events, then run one frame
    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                _ => {}
            }
            if let Some(input) = translate(&event, &field) {
                field.apply(input, &mut rng);
                if !matches!(input, Input::PointerMoved { .. }) {
                    update_title(surface.canvas_mut(), &config.title, &field);
                }
            }
        }

        field.step(&mut surface);
        surface.present();
        std::thread::sleep(frame_time);
    }

    log::info!("shutting down");
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match AppConfig::load(std::env::args().nth(1)) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    log::info!(
        "{}x{} window, {} particles of size {}, connections under {}",
        config.window_width,
        config.window_height,
        config.simulation.particle_count,
        config.simulation.particle_size,
        config.simulation.connection_distance
    );

    if let Err(e) = run(config) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
