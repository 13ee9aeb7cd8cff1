mod font;
mod pixel_buffer;
mod transform;

pub use font::{draw_text, text_width, LINE_HEIGHT};
pub use pixel_buffer::PixelBuffer;
pub use transform::Transform;

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{FullscreenType, Window, WindowContext};
use sdl2::EventPump;

/// Logical (buffer) resolution; the window is this times the scale factor
pub const DEFAULT_WIDTH: u32 = 320;
pub const DEFAULT_HEIGHT: u32 = 240;
pub const DEFAULT_SCALE: u32 = 2;

pub struct Display {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    width: u32,
    height: u32,
}

pub struct RenderTarget<'a> {
    texture: Texture<'a>,
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Quit,
    KeyDown { key: Keycode, repeat: bool },
    /// Cursor position in logical (buffer) coordinates
    MouseMove { x: i32, y: i32 },
}

/// Window creation options
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    pub vsync: bool,
    pub fullscreen: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            title: "Geo Examples".to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scale: DEFAULT_SCALE,
            vsync: true,
            fullscreen: false,
        }
    }
}

/// Window size in screen pixels: the logical size times the scale factor
fn window_size(options: &DisplayOptions) -> Result<(u32, u32), String> {
    let scale = options.scale.max(1);
    match (options.width.checked_mul(scale), options.height.checked_mul(scale)) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(format!(
            "window size {}x{} at scale {} is too large",
            options.width, options.height, scale
        )),
    }
}

impl Display {
    /// Create the window and a texture creator for the render target.
    /// The canvas keeps a logical size equal to the buffer, so SDL scales both
    /// the presented image and incoming mouse coordinates.
    pub fn with_options(
        options: &DisplayOptions,
    ) -> Result<(Self, TextureCreator<WindowContext>), String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let (window_width, window_height) = window_size(options)?;
        let mut window_builder =
            video_subsystem.window(&options.title, window_width, window_height);
        window_builder.position_centered().resizable();
        if options.fullscreen {
            window_builder.fullscreen_desktop();
        }
        let window = window_builder.build().map_err(|e| e.to_string())?;

        let mut canvas_builder = window.into_canvas().accelerated();
        if options.vsync {
            canvas_builder = canvas_builder.present_vsync();
        }
        let mut canvas = canvas_builder.build().map_err(|e| e.to_string())?;
        canvas
            .set_logical_size(options.width, options.height)
            .map_err(|e| e.to_string())?;

        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump()?;

        Ok((
            Self {
                canvas,
                event_pump,
                width: options.width,
                height: options.height,
            },
            texture_creator,
        ))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_fullscreen(&self) -> bool {
        self.canvas.window().fullscreen_state() != FullscreenType::Off
    }

    /// Switch between windowed and desktop fullscreen
    pub fn toggle_fullscreen(&mut self) -> Result<(), String> {
        let next = if self.is_fullscreen() {
            FullscreenType::Off
        } else {
            FullscreenType::Desktop
        };
        self.canvas.window_mut().set_fullscreen(next)
    }

    pub fn present(
        &mut self,
        target: &mut RenderTarget,
        buffer: &PixelBuffer,
    ) -> Result<(), String> {
        target
            .texture
            .update(None, buffer.as_bytes(), (buffer.width() * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas.copy(&target.texture, None, None)?;
        self.canvas.present();
        Ok(())
    }

    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => events.push(InputEvent::Quit),
                Event::KeyDown {
                    keycode: Some(key),
                    repeat,
                    ..
                } => events.push(InputEvent::KeyDown { key, repeat }),
                Event::MouseMotion { x, y, .. } => events.push(InputEvent::MouseMove { x, y }),
                _ => {},
            }
        }

        events
    }
}

impl<'a> RenderTarget<'a> {
    /// Streaming texture matching the buffer resolution
    pub fn with_size(
        texture_creator: &'a TextureCreator<WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = texture_creator
            .create_texture_streaming(PixelFormatEnum::RGBA8888, width, height)
            .map_err(|e| e.to_string())?;
        Ok(Self { texture })
    }
}
