/// Wire3D Terminal Demo - Spinning Cube
///
/// Renders a wireframe cube spinning about its vertical axis, one full
/// revolution every two seconds. Pass an OBJ file path to render a custom
/// model instead. Press Q or ESC to quit.

use std::env;
use std::fs;
use std::io;
use std::sync::Arc;
use wire3d_core::Model;
use wire3d_terminal::{parse_obj, TerminalApp};

fn main() -> io::Result<()> {
    env_logger::init();

    let model = match env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path).map_err(|e| {
                io::Error::new(io::ErrorKind::NotFound, format!("failed to read {path}: {e}"))
            })?;
            parse_obj(&text).map_err(|e| {
                io::Error::new(io::ErrorKind::InvalidData, format!("failed to parse {path}: {e}"))
            })?
        }
        None => Model::cube(2.0),
    };

    let mut app = TerminalApp::new(vec![("main".to_owned(), Arc::new(model))])?;
    app.run()
}
