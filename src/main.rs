//! # Voxel Sandbox Entry Point
//!
//! This is the entry point for the sandbox application. It simply calls into
//! the library's `run()` function to initialize and start the frame loop.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release
//! ```

fn main() {
    voxel_sandbox::run();
}
