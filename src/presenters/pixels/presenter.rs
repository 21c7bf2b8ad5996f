use crate::core::interaction::state::INITIAL_SPREAD_RADIUS;
use crate::core::light::buffer::{shade_light_buffer, LightSpot, LIGHT_CHANNELS};
use crate::core::view::VisualFrame;
use crate::core::data::point::SurfacePoint;
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

/// Renders the session's visual state into a `pixels` framebuffer: the
/// radial spotlight while live, two sliding bars during the intro.
pub struct LightPresenter {
    pixels: Pixels<'static>,
    width: u32,
    height: u32,
}

impl LightPresenter {
    #[must_use]
    pub fn new(window: &'static Window) -> Self {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)
            .expect("Failed to create pixels surface");

        Self {
            pixels,
            width: size.width,
            height: size.height,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.width = width;
        self.height = height;

        if let Err(error) = self.pixels.resize_surface(width, height) {
            eprintln!("Surface resize error: {error}");
        }
        if let Err(error) = self.pixels.resize_buffer(width, height) {
            eprintln!("Buffer resize error: {error}");
        }
    }

    pub fn render_frame(&mut self, frame: &VisualFrame) -> Result<(), pixels::Error> {
        let radius = if frame.spreading {
            frame.spread_radius
        } else {
            INITIAL_SPREAD_RADIUS
        };
        let spot = LightSpot {
            position: frame.light_position,
            intensity: frame.light_intensity,
            radius,
        };

        if shade_light_buffer(&spot, self.width, self.height, self.pixels.frame_mut()).is_err() {
            // Buffer and window sizes disagree mid-resize; the next resize
            // reconciles them.
            return Ok(());
        }

        self.pixels.render()
    }

    pub fn render_intro(&mut self, offsets: (f64, f64)) -> Result<(), pixels::Error> {
        let frame = self.pixels.frame_mut();
        frame.fill(0);
        for pixel in frame.chunks_exact_mut(LIGHT_CHANNELS) {
            pixel[3] = 0xFF;
        }

        self.draw_bar(f64::from(self.height) * 0.45, offsets.0);
        self.draw_bar(f64::from(self.height) * 0.55, offsets.1);

        self.pixels.render()
    }

    fn draw_bar(&mut self, center_y: f64, offset: f64) {
        const BAR_HEIGHT: i64 = 6;

        let bar_width = i64::from((self.width / 3).max(1));
        let center = SurfacePoint {
            x: f64::from(self.width) / 2.0 + offset,
            y: center_y,
        };
        let x0 = center.x as i64 - bar_width / 2;
        let y0 = center.y as i64 - BAR_HEIGHT / 2;

        let width = i64::from(self.width);
        let height = i64::from(self.height);
        let frame = self.pixels.frame_mut();

        for y in y0..y0 + BAR_HEIGHT {
            if y < 0 || y >= height {
                continue;
            }
            for x in x0..x0 + bar_width {
                if x < 0 || x >= width {
                    continue;
                }
                let index = ((y * width + x) as usize) * LIGHT_CHANNELS;
                frame[index] = 0xFF;
                frame[index + 1] = 0xFF;
                frame[index + 2] = 0xFF;
                frame[index + 3] = 0xFF;
            }
        }
    }
}
