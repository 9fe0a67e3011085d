//! Line, rectangle and circle rasterization

use kairos_core::traits::Rgb565;
use kairos_hal::LcdBus;

use crate::lcd::Lcd;

impl<B: LcdBus> Lcd<B> {
    /// Draw a line including both end points
    ///
    /// Integer incremental stepping along the longer axis; the other axis
    /// carries once its error exceeds the longer delta.
    pub fn draw_line(&mut self, x1: u16, y1: u16, x2: u16, y2: u16, color: Rgb565) {
        let mut dx = x2 as i32 - x1 as i32;
        let mut dy = y2 as i32 - y1 as i32;
        let inc_x = dx.signum();
        let inc_y = dy.signum();
        dx = dx.abs();
        dy = dy.abs();
        let distance = dx.max(dy);

        let (mut x, mut y) = (x1 as i32, y1 as i32);
        let (mut x_err, mut y_err) = (0, 0);
        for _ in 0..=distance {
            x_err += dx;
            y_err += dy;
            if x_err > distance {
                x_err -= distance;
                x += inc_x;
            }
            if y_err > distance {
                y_err -= distance;
                y += inc_y;
            }
            self.plot(x, y, color);
        }
    }

    /// Outline of the rectangle with corners (x1, y1) and (x2, y2)
    pub fn draw_rectangle(&mut self, x1: u16, y1: u16, x2: u16, y2: u16, color: Rgb565) {
        self.draw_line(x1, y1, x2, y1, color);
        self.draw_line(x1, y1, x1, y2, color);
        self.draw_line(x1, y2, x2, y2, color);
        self.draw_line(x2, y1, x2, y2, color);
    }

    /// Midpoint circle around (xc, yc)
    ///
    /// With `fill` every y between the current x and y is swept per step,
    /// so interior pixels are written more than once.
    pub fn draw_circle(&mut self, xc: i32, yc: i32, r: u16, color: Rgb565, fill: bool) {
        let mut x = 0i32;
        let mut y = r as i32;
        let mut d = 3 - 2 * y;

        while x <= y {
            if fill {
                for yi in x..=y {
                    self.plot_octants(xc, yc, x, yi, color);
                }
            } else {
                self.plot_octants(xc, yc, x, y, color);
            }
            if d < 0 {
                d += 4 * x + 6;
            } else {
                d += 4 * (x - y) + 10;
                y -= 1;
            }
            x += 1;
        }
    }

    fn plot_octants(&mut self, xc: i32, yc: i32, x: i32, y: i32, color: Rgb565) {
        self.plot(xc + x, yc + y, color);
        self.plot(xc - x, yc + y, color);
        self.plot(xc + x, yc - y, color);
        self.plot(xc - x, yc - y, color);
        self.plot(xc + y, yc + x, color);
        self.plot(xc - y, yc + x, color);
        self.plot(xc + y, yc - x, color);
        self.plot(xc - y, yc - x, color);
    }
}
