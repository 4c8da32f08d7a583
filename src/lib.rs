#![warn(missing_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Sandbox
//!
//! A small first-person voxel sandbox core: a dense fixed-size block grid the
//! player can walk on and edit, with pointer-lock mouse look, a nine-slot
//! hotbar, and ray-picked break/place operations.
//!
//! ## Key Modules
//!
//! * `application_state` - Window lifecycle, input intake, pointer capture,
//!   and the frame loop
//! * `engine_state` - The sandbox core: grid, player physics, hotbar, ray
//!   picking and the edit operations
//!
//! ## Architecture
//!
//! All mutable state is owned by explicit state bundles constructed once at
//! startup and threaded through the frame loop; nothing is global. The scene
//! renderer and the hotbar display are external collaborators reached through
//! narrow traits, so the core carries no rendering pipeline of its own.
//!
//! Everything runs on the single event-loop thread. Input events mutate only
//! the input snapshot; the simulation advances once per frame tick.

use std::path::Path;

use log::info;
use winit::event_loop::EventLoop;

use application_state::{settings::Settings, ApplicationState};

mod application_state;
mod engine_state;

/// Initializes logging and configuration, then runs the sandbox until the
/// window is closed.
pub fn run() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let settings = Settings::load_or_default(Path::new("settings.json"));
    info!(
        "World size {} cube, spawn at {:?}",
        settings.world_size, settings.spawn
    );

    let event_loop = EventLoop::new().unwrap();
    let mut state = ApplicationState::new(settings);

    let _ = event_loop.run_app(&mut state);
}
