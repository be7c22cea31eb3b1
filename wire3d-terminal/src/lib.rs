/// Terminal host for the wireframe renderer
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use std::io::{self, stdout, Write};
use std::sync::Arc;
use std::time::{Duration, Instant};
use wire3d_core::{InstanceManager, Model, StartError};

pub mod obj;
pub mod surface;

pub use obj::{parse_obj, ObjError};
pub use surface::{CellSurface, TerminalHost};

/// Main application struct for terminal wireframe rendering.
///
/// Carves the terminal into one panel per model, starts a render instance
/// on each, and pumps the instance manager from a single-threaded loop.
pub struct TerminalApp {
    manager: InstanceManager<TerminalHost>,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(models: Vec<(String, Arc<Model>)>) -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        let panels = models.len().max(1) as u16;
        let panel_width = cols / panels;
        let panel_height = rows.saturating_sub(1) as u32;

        let mut host = TerminalHost::new();
        for (i, (id, _)) in models.iter().enumerate() {
            // Row 0 is kept for the status line.
            host.add_surface(
                id.as_str(),
                (i as u16 * panel_width, 1),
                panel_width as u32,
                panel_height,
            );
        }

        let mut manager = InstanceManager::new(host);
        for (id, model) in models {
            manager
                .start(id, model)
                .map_err(|e: StartError| io::Error::new(io::ErrorKind::NotFound, e.to_string()))?;
        }

        Ok(Self {
            manager,
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        while self.running && !self.manager.is_empty() {
            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Step every instance that is due and repaint
            let next_deadline = self.manager.pump(Instant::now());
            self.render()?;

            // Update FPS counter
            self.frame_count += 1;
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }

            // Sleep until the next instance is due
            match next_deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if deadline > now {
                        std::thread::sleep(deadline - now);
                    }
                }
                None => break,
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.manager.provider().blit_all(&mut stdout)?;

        // Status line overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Wire3D Terminal Renderer | {} running | FPS: {:.1} | Q=Quit",
                self.manager.len(),
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
