use anyhow::Result;
use glam::Vec2;
use log::info;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

use ten_second_dungeon::engine::game_loop::GameLoop;
use ten_second_dungeon::engine::input::{Action, InputManager};
use ten_second_dungeon::game::enemy::SwingResult;
use ten_second_dungeon::game::{EnemyConfig, PlayerConfig, Scene, SceneBuilder, TickReport};

/// Demo level: a floor, a ledge with a wall to jump off, and two patrolling enemies
fn build_level() -> Result<Scene> {
    let scene = SceneBuilder::new()
        .platform(Vec2::new(0.0, -0.5), Vec2::new(40.0, 1.0))
        .platform(Vec2::new(12.0, 3.0), Vec2::new(1.0, 6.0))
        .platform(Vec2::new(-6.0, 2.5), Vec2::new(6.0, 0.5))
        .player(Vec2::new(0.0, 1.0), PlayerConfig::default())
        .enemy(Vec2::new(6.0, 0.6), EnemyConfig::default())
        .enemy(Vec2::new(-6.0, 3.4), EnemyConfig::default())
        .build()?;
    Ok(scene)
}

fn log_report(report: &TickReport) {
    if let Some((from, to)) = report.player_state_change {
        info!("Player: {:?} -> {:?}", from, to);
    }
    for (id, event) in &report.enemy_events {
        log::debug!("{:?}: {:?}", id, event);
    }
    for (id, swing) in &report.swings {
        if let SwingResult::Hit(outcome) = swing {
            info!("{:?} hit the player: {:?}", id, outcome);
        }
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Ten Second Dungeon...");

    let mut scene = build_level()?;
    let mut input = InputManager::new();
    let mut game_loop = GameLoop::new();

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Ten Second Dungeon")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                // Keys released while unfocused never reach us
                input.reset();
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                if input.player().just_pressed(Action::Quit) {
                    info!("Quit pressed, shutting down...");
                    elwt.exit();
                    return;
                }

                let ticks = game_loop.begin_frame();
                if ticks > 0 {
                    let frame = input.frame();
                    let dt = game_loop.fixed_timestep();
                    for tick in 0..ticks {
                        // Edges belong to the first tick of the frame only
                        let tick_input = if tick == 0 { frame } else { frame.held_only() };
                        let report = scene.tick(dt, &tick_input);
                        log_report(&report);
                    }
                    input.end_frame();
                }

                if scene.player_health().is_dead() {
                    info!("Player died after {} ticks", game_loop.tick_count());
                    elwt.exit();
                }
            }
            Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
