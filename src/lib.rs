//! Driver for the mikroBUS "Pressure click" board (ST LPS331AP
//! pressure/temperature sensor), built on the [`embedded-hal`] traits.
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//!
//! The sensor speaks either SPI or I2C; the transport is picked once, at
//! construction, and everything above that seam is shared: bit-level
//! control operations on the sensor's registers and the conversion of raw
//! samples into mbar and degrees Celsius.
//!
//! # Example
//!
//! Bring the sensor up, apply the board's default configuration and poll a
//! measurement (an I2C mock stands in for the peripheral here):
//!
//! ```
//! use embedded_hal_mock::eh1::digital::Mock as PinMock;
//! use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
//! use pressure_click::{DeviceAddr, Lps331ap};
//!
//! let i2c = I2cMock::new(&[
//!     // default configuration, every write read back
//!     I2cTransaction::write(0x5C, vec![0x10, 0x78]),
//!     I2cTransaction::write_read(0x5C, vec![0x10], vec![0x78]),
//!     I2cTransaction::write(0x5C, vec![0x20, 0x74]),
//!     I2cTransaction::write_read(0x5C, vec![0x20], vec![0x74]),
//!     I2cTransaction::write(0x5C, vec![0x20, 0xF4]),
//!     I2cTransaction::write_read(0x5C, vec![0x20], vec![0xF4]),
//!     I2cTransaction::write_read(0x5C, vec![0x0F], vec![0xBB]),
//!     // one polling round: pressure, then temperature
//!     I2cTransaction::write_read(0x5C, vec![0x2A], vec![0x00]),
//!     I2cTransaction::write_read(0x5C, vec![0x29], vec![0x27]),
//!     I2cTransaction::write_read(0x5C, vec![0x28], vec![0x10]),
//!     I2cTransaction::write_read(0x5C, vec![0x2C], vec![0x01]),
//!     I2cTransaction::write_read(0x5C, vec![0x2B], vec![0x2C]),
//! ]);
//! let int = PinMock::new(&[]);
//!
//! let mut sensor = Lps331ap::new_i2c(i2c, DeviceAddr::Sa0Gnd, int);
//! assert!(sensor.default_config().unwrap());
//!
//! let pressure = sensor.get_pressure().unwrap();
//! let temperature = sensor.get_temperature().unwrap();
//! println!("pressure: {pressure} mbar, temperature: {temperature}°C");
//!
//! let (iface, mut int) = sensor.release();
//! let mut i2c = iface.release();
//! i2c.done();
//! int.done();
//! ```
#![deny(unsafe_code)]

pub mod lps331ap;

pub use crate::lps331ap::config::{ConfigReport, Readback};
pub use crate::lps331ap::error::{Error, SpiError};
pub use crate::lps331ap::interface::{DeviceAddr, I2cInterface, Interface, SpiInterface};
pub use crate::lps331ap::measurement::Measurement;
pub use crate::lps331ap::register::{Register, DEVICE_ID};
pub use crate::lps331ap::{Lps331ap, SpiMode};
