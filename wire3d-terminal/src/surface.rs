/// Cell-buffer surfaces backed by a rectangle of the terminal
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::Point2;
use std::collections::HashMap;
use std::io::Write;
use wire3d_core::{Rgb, Surface, SurfaceError, SurfaceId, SurfaceProvider, BACKGROUND};

fn to_crossterm(color: Rgb) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// One drawing surface: a grid of colored cells anchored at a terminal
/// position. Line pixels become full-block characters when blitted.
pub struct CellSurface {
    origin: (u16, u16),
    width: u32,
    height: u32,
    cells: Vec<Rgb>,
}

impl CellSurface {
    pub fn new(origin: (u16, u16), width: u32, height: u32) -> Self {
        Self {
            origin,
            width,
            height,
            cells: vec![BACKGROUND; (width * height) as usize],
        }
    }

    fn plot(&mut self, x: i64, y: i64, color: Rgb) {
        // Off-canvas pixels are simply dropped.
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        self.cells[y as usize * self.width as usize + x as usize] = color;
    }

    pub fn cell(&self, x: u32, y: u32) -> Rgb {
        self.cells[(y * self.width + x) as usize]
    }

    /// Blit the cell buffer to the terminal at this surface's origin.
    pub fn blit<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            writer.queue(cursor::MoveTo(self.origin.0, self.origin.1 + y as u16))?;
            writer.queue(SetBackgroundColor(to_crossterm(BACKGROUND)))?;
            for x in 0..self.width {
                let color = self.cell(x, y);
                if color == BACKGROUND {
                    writer.queue(Print(' '))?;
                } else {
                    writer.queue(SetForegroundColor(to_crossterm(color)))?;
                    writer.queue(Print('\u{2588}'))?;
                }
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl Surface for CellSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Rgb) -> Result<(), SurfaceError> {
        self.cells.fill(color);
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: Point2<f64>,
        to: Point2<f64>,
        color: Rgb,
    ) -> Result<(), SurfaceError> {
        // Integer Bresenham over rounded endpoints.
        let (mut x0, mut y0) = (from.x.round() as i64, from.y.round() as i64);
        let (x1, y1) = (to.x.round() as i64, to.y.round() as i64);
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.plot(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
        Ok(())
    }
}

/// The hosting environment: a set of cell surfaces addressable by id.
#[derive(Default)]
pub struct TerminalHost {
    surfaces: HashMap<SurfaceId, CellSurface>,
}

impl TerminalHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_surface(&mut self, id: impl Into<SurfaceId>, origin: (u16, u16), width: u32, height: u32) {
        self.surfaces
            .insert(id.into(), CellSurface::new(origin, width, height));
    }

    /// Tear a surface down. A renderer still bound to it stops on its next
    /// scheduled frame.
    pub fn remove_surface(&mut self, id: &SurfaceId) -> bool {
        self.surfaces.remove(id).is_some()
    }

    pub fn blit_all<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for surface in self.surfaces.values() {
            surface.blit(writer)?;
        }
        Ok(())
    }
}

impl SurfaceProvider for TerminalHost {
    type Surface = CellSurface;

    fn surface_mut(&mut self, id: &SurfaceId) -> Option<&mut CellSurface> {
        self.surfaces.get_mut(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wire3d_core::FOREGROUND;

    fn lit_cells(surface: &CellSurface) -> Vec<(u32, u32)> {
        let (width, height) = surface.size();
        let mut lit = Vec::new();
        for y in 0..height {
            for x in 0..width {
                if surface.cell(x, y) != BACKGROUND {
                    lit.push((x, y));
                }
            }
        }
        lit
    }

    #[test]
    fn test_clear_fills_every_cell() {
        let mut surface = CellSurface::new((0, 0), 4, 3);
        surface
            .draw_line(Point2::new(0.0, 0.0), Point2::new(3.0, 2.0), FOREGROUND)
            .unwrap();
        surface.clear(BACKGROUND).unwrap();
        assert!(lit_cells(&surface).is_empty());
    }

    #[test]
    fn test_horizontal_line() {
        let mut surface = CellSurface::new((0, 0), 5, 5);
        surface
            .draw_line(Point2::new(1.0, 2.0), Point2::new(3.0, 2.0), FOREGROUND)
            .unwrap();
        assert_eq!(lit_cells(&surface), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_vertical_line() {
        let mut surface = CellSurface::new((0, 0), 5, 5);
        surface
            .draw_line(Point2::new(2.0, 0.0), Point2::new(2.0, 4.0), FOREGROUND)
            .unwrap();
        assert_eq!(
            lit_cells(&surface),
            vec![(2, 0), (2, 1), (2, 2), (2, 3), (2, 4)]
        );
    }

    #[test]
    fn test_diagonal_line() {
        let mut surface = CellSurface::new((0, 0), 4, 4);
        surface
            .draw_line(Point2::new(0.0, 0.0), Point2::new(3.0, 3.0), FOREGROUND)
            .unwrap();
        assert_eq!(lit_cells(&surface), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_line_direction_does_not_matter() {
        let mut forward = CellSurface::new((0, 0), 8, 8);
        let mut backward = CellSurface::new((0, 0), 8, 8);
        forward
            .draw_line(Point2::new(0.0, 1.0), Point2::new(7.0, 4.0), FOREGROUND)
            .unwrap();
        backward
            .draw_line(Point2::new(7.0, 4.0), Point2::new(0.0, 1.0), FOREGROUND)
            .unwrap();
        assert_eq!(lit_cells(&forward), lit_cells(&backward));
    }

    #[test]
    fn test_off_canvas_pixels_are_dropped() {
        let mut surface = CellSurface::new((0, 0), 4, 4);
        surface
            .draw_line(Point2::new(-3.0, 1.0), Point2::new(6.0, 1.0), FOREGROUND)
            .unwrap();
        assert_eq!(lit_cells(&surface), vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn test_fully_off_canvas_line_draws_nothing() {
        let mut surface = CellSurface::new((0, 0), 4, 4);
        surface
            .draw_line(Point2::new(10.0, 10.0), Point2::new(20.0, 15.0), FOREGROUND)
            .unwrap();
        assert!(lit_cells(&surface).is_empty());
    }

    #[test]
    fn test_host_lookup_and_teardown() {
        let mut host = TerminalHost::new();
        host.add_surface("left", (0, 0), 10, 10);
        let id: SurfaceId = "left".into();
        assert!(host.surface_mut(&id).is_some());
        assert!(host.remove_surface(&id));
        assert!(host.surface_mut(&id).is_none());
        assert!(!host.remove_surface(&id));
    }
}
