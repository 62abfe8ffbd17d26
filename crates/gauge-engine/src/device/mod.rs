//! GPU device + surface management.
//!
//! - `init`: surface/device configuration and the format/alpha choices
//! - `error`: mapping surface errors to frame-level actions
//! - `gpu`: instance/adapter/device/queue and per-frame acquisition

mod error;
mod gpu;
mod init;

pub use error::SurfaceErrorAction;
pub use gpu::{Gpu, GpuFrame};
pub use init::GpuInit;
