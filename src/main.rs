use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod app;

use app::{render_world, OverheadTextures, SdlImageLoader, SYSTEM_IMAGE_DIR};
use event_names::config::OverlayConfig;
use event_names::game::{Direction, GameWorld, MapData, TILE_SIZE};

const DEFAULT_MAP_PATH: &str = "assets/maps/town.json";
const FRAMES_PER_SECOND: u32 = 60;
/// Frames between steps while an arrow key is held
const MOVE_REPEAT_FRAMES: u32 = 8;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

/// Direction for an arrow key
fn direction_for(keycode: Keycode) -> Option<Direction> {
    match keycode {
        Keycode::Up => Some(Direction::Up),
        Keycode::Down => Some(Direction::Down),
        Keycode::Left => Some(Direction::Left),
        Keycode::Right => Some(Direction::Right),
        _ => None,
    }
}

/// Switch toggled by a number key
fn switch_for(keycode: Keycode) -> Option<u32> {
    match keycode {
        Keycode::Num1 => Some(1),
        Keycode::Num2 => Some(2),
        _ => None,
    }
}

fn run(map_path: &str) -> Result<(), String> {
    let config = OverlayConfig::locate();
    let map = MapData::load_from_file(map_path).map_err(|e| e.to_string())?;
    let mut world = GameWorld::new(map, config);

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let view_width = world.width * TILE_SIZE;
    let view_height = world.height * TILE_SIZE;

    let window = video_subsystem
        .window("Event Names", view_width, view_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas.set_logical_size(view_width, view_height).map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    let mut images = SdlImageLoader::new(SYSTEM_IMAGE_DIR);
    let mut overhead_textures = OverheadTextures::new(&texture_creator);

    // Held arrow key and frames until it repeats
    let mut held: Option<Direction> = None;
    let mut repeat_timer = 0;

    info!("Controls:");
    info!("Arrows - Move player");
    info!("1 / 2  - Toggle switch 1 / 2 (changes event pages)");
    info!("ESC    - Quit");

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => {
                    if let Some(direction) = direction_for(keycode) {
                        world.move_player(direction);
                        held = Some(direction);
                        repeat_timer = MOVE_REPEAT_FRAMES;
                    } else if let Some(switch_id) = switch_for(keycode) {
                        let value = world.flags.toggle_switch(switch_id);
                        info!(switch_id, value, "switch toggled");
                    }
                }
                Event::KeyUp {
                    keycode: Some(keycode),
                    ..
                } => {
                    if direction_for(keycode) == held {
                        held = None;
                    }
                }
                _ => {}
            }
        }

        if let Some(direction) = held {
            repeat_timer -= 1;
            if repeat_timer == 0 {
                world.move_player(direction);
                repeat_timer = MOVE_REPEAT_FRAMES;
            }
        }

        world.update(&mut images);
        overhead_textures.sync(&world)?;

        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();
        render_world(&mut canvas, &world, &mut overhead_textures)?;
        canvas.present();

        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / FRAMES_PER_SECOND));
    }

    info!(frames = world.frame_count(), "exiting");
    Ok(())
}

fn main() {
    init_tracing();

    let map_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_MAP_PATH.to_string());

    if let Err(err) = run(&map_path) {
        error!(error = %err, "event_names failed");
        std::process::exit(1);
    }
}
