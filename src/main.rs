use action_input::input::{
    Action, ConfigStore, InputManager, PointerConfinement, RebindOutcome, WinitDevice,
};
use anyhow::Result;
use log::{error, info};
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::KeyCode,
    window::WindowBuilder,
};

/// Simulation tick (60 ticks per second)
const TICK: Duration = Duration::from_micros(16_667);

fn save_bindings(input: &InputManager) {
    if let Err(err) = input.save() {
        error!("{err}");
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting input demo...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Input Bindings")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    let mut device = WinitDevice::new(window.clone());
    let mut input = InputManager::load(ConfigStore::new("."), &device)?;

    info!(
        "Use {} and {} to navigate, {} to accept and {} to go back",
        input.first_binding_label(Action::Up),
        input.first_binding_label(Action::Down),
        input.first_binding_label(Action::Accept),
        input.first_binding_label(Action::Back),
    );
    info!("F2 rebinds Jump, F3 toggles mouse look, F5 reloads the config file");

    let mut next_tick = Instant::now();

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => {
                device.handle_window_event(&event);
                if let WindowEvent::CloseRequested = event {
                    info!("Close requested, shutting down...");
                    save_bindings(&input);
                    elwt.exit();
                }
            }
            Event::AboutToWait => {
                let now = Instant::now();
                if now < next_tick {
                    elwt.set_control_flow(ControlFlow::WaitUntil(next_tick));
                    return;
                }
                next_tick = now + TICK;
                elwt.set_control_flow(ControlFlow::WaitUntil(next_tick));

                match input.update(&mut device) {
                    Some(RebindOutcome::Waiting) => return,
                    Some(outcome) => {
                        info!("Rebinding finished: {outcome:?}");
                        save_bindings(&input);
                        return;
                    }
                    None => {}
                }

                for action in Action::ALL {
                    if input.is_pressed(action) {
                        info!("{action} pressed");
                    }
                    if input.is_released(action) {
                        info!("{action} released");
                    }
                }

                let state = input.state();
                if state.scroll_delta() != 0 {
                    info!("Scrolled {}", state.scroll_delta());
                }

                if state.is_key_pressed(KeyCode::F2) {
                    info!("Press a key or mouse button for Jump (Escape cancels, Backspace clears)");
                    input.begin_rebind(Action::Jump, 0);
                } else if state.is_key_pressed(KeyCode::F3) {
                    let snap = !state.confinement().snap_to_center;
                    window.set_cursor_visible(!snap);
                    input.set_confinement(if snap {
                        PointerConfinement::snap_to_center()
                    } else {
                        PointerConfinement::default()
                    });
                } else if state.is_key_pressed(KeyCode::F5) {
                    match input.reload() {
                        Ok(report) => info!("Reloaded {} bindings", report.bindings_loaded),
                        Err(err) => error!("{err}"),
                    }
                } else if input.is_pressed(Action::Back) {
                    save_bindings(&input);
                    elwt.exit();
                }
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
