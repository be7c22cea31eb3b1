/// Example: load and spin an OBJ file in the terminal
///
/// Usage: cargo run --example load_obj -- path/to/file.obj

use std::env;
use std::fs;
use std::io;
use std::sync::Arc;
use wire3d_core::Model;
use wire3d_terminal::{parse_obj, TerminalApp};

fn main() -> io::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let model = if args.len() < 2 {
        eprintln!("Usage: {} <obj-file>", args[0]);
        eprintln!("\nNo OBJ file provided, using default cube...");
        Model::cube(2.0)
    } else {
        let data = fs::read_to_string(&args[1]).map_err(|e| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("Failed to read OBJ file: {e}"),
            )
        })?;
        parse_obj(&data).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Failed to parse OBJ: {e}"),
            )
        })?
    };

    println!(
        "Loaded {} vertices, {} faces",
        model.vertices().len(),
        model.faces().len()
    );
    println!("Starting terminal renderer (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    let mut app = TerminalApp::new(vec![("main".to_owned(), Arc::new(model))])?;
    app.run()
}
