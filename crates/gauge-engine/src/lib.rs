//! Gauge engine crate.
//!
//! A small vector-shape and animation engine for animated gauges:
//!
//! - `coords`, `math`: points, transforms, interpolation, easing
//! - `paint`, `surface`: colors/gradients and the canvas-style drawing API
//! - `shape`, `composite`: primitives, meshes, rounded arcs and bars
//! - `time`, `anim`: fixed-step clock and animation drivers
//! - `scene`, `render`: recorded draw lists and their GPU renderer
//! - `device`, `window`, `core`: the wgpu/winit host for applications

pub mod anim;
pub mod composite;
pub mod coords;
pub mod core;
pub mod device;
pub mod logging;
pub mod math;
pub mod paint;
pub mod render;
pub mod scene;
pub mod shape;
pub mod surface;
pub mod time;
pub mod window;
