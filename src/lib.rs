//! Grid Snake - the simulation and rendering core of a joystick snake game
//!
//! This library provides:
//! - Core game logic: board geometry, body ring, collisions, sessions (game module)
//! - RGB565 framebuffer painting and a terminal panel (render module)
//! - Joystick axis handling and keyboard emulation (input module)
//! - Display, heartbeat and pacing collaborators (device module)
//! - The session driver plus terminal and headless front ends (modes module)

pub mod device;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
