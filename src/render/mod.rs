pub mod framebuffer;
pub mod panel;
pub mod renderer;

pub use framebuffer::{BACKGROUND, BufferDescriptor, FrameBuffer, Rgb565, SNAKE, TARGET};
pub use panel::Panel;
pub use renderer::Renderer;
