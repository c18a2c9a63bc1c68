#![no_std]

#[macro_use]
mod log;

mod error;

pub mod buffer;
pub mod config;
pub mod interface;
pub mod params;
pub mod platform;
pub mod registers;
pub mod reset;

pub use crate::buffer::swap_buffer;
pub use crate::error::{Error, Result};
pub use crate::interface::i2c::I2cTransport;
pub use crate::platform::Platform;
pub use crate::registers::DeviceAddress;
pub use crate::reset::ResetLine;
