/// Example: two independent render instances side by side
///
/// Splits the terminal into two panels and spins a cube on the left and a
/// tetrahedron on the right. Each panel has its own render instance with
/// its own angle and schedule.
///
/// Usage: cargo run --example duo

use std::io;
use std::sync::Arc;
use wire3d_core::Model;
use wire3d_terminal::TerminalApp;

fn main() -> io::Result<()> {
    env_logger::init();

    let mut app = TerminalApp::new(vec![
        ("left".to_owned(), Arc::new(Model::cube(2.0))),
        ("right".to_owned(), Arc::new(Model::tetrahedron(2.0))),
    ])?;
    app.run()
}
