// Pantech EF-series lights HAL - Shared Library
// Light identifiers, board path tables, and sysfs device file access

pub mod board;
pub mod color;
pub mod error;
pub mod hal;
pub mod io;
pub mod light;
pub mod state;

pub use board::Board;
pub use color::Color;
pub use error::HalError;
pub use hal::{LightDevice, Lights, MODULE_AUTHOR, MODULE_ID, MODULE_NAME};
pub use io::{ControlBus, MemoryBus, Op, SysfsBus};
pub use light::{BrightnessMode, FlashMode, LightId, LightRequest};
pub use state::LightStates;
