pub mod device;
pub mod headless;
pub mod terminal;

pub use device::DeviceMode;
pub use headless::HeadlessMode;
pub use terminal::TerminalMode;
