//! A `no_std`, no-alloc driver for the Si4703 FM broadcast receiver.
//!
//! The driver keeps a shadow copy of the chip's sixteen 16-bit registers and
//! reconciles it with the device through whole-block transfers.
//!
//! # Features
//!
//! - **Zero heap allocation** - the register file is a fixed array with a dirty bitmap
//! - **Transport agnostic** - any `embedded-hal` I2C bus, or your own [`RegisterTransport`](radio::RegisterTransport)
//! - **Visible outcomes** - every command reports whether it was applied, clamped or skipped
//! - **Optional `defmt`** - enable the `defmt` feature to format driver types on target
//!
//! # Architecture
//!
//! The chip's register interface is asymmetric:
//!
//! ```text
//! ┌──────────────────┐  read 32 bytes from 0x0A  ┌──────────────────────┐
//! │  RegisterFile    │◀──────────────────────────│                      │
//! │  (shadow, dirty  │    0A..0F, 00..09         │   Si4703 @ 0x10      │
//! │   bitmap)        │                           │                      │
//! │                  │──────────────────────────▶│                      │
//! └──────────────────┘  write 12 bytes 02..07    └──────────────────────┘
//! ```
//!
//! - **Reads** always refresh every slot and leave the shadow clean
//! - **Writes** always send the control block 0x02..=0x07, high byte first
//! - **Commands** stage bitfields in the shadow, then write, then wait for the chip to settle
//!
//! # Example
//!
//! ```rust,no_run
//! use si4703::prelude::*;
//! # use embedded_hal::{delay::DelayNs, i2c::{ErrorType, I2c, Operation}};
//! # struct Bus;
//! # impl ErrorType for Bus { type Error = core::convert::Infallible; }
//! # impl I2c for Bus {
//! #     fn transaction(&mut self, _: u8, _: &mut [Operation<'_>]) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct Delay;
//! # impl DelayNs for Delay { fn delay_ns(&mut self, _: u32) {} }
//! # let (i2c, delay) = (Bus, Delay);
//!
//! let mut radio = Si4703::new(I2cTransport::new(i2c), delay);
//! radio.begin(BusConfig::default()).unwrap();
//!
//! // 200 MHz is out of band and lands on 108.0
//! let tuned = radio.set_frequency(200.0).unwrap();
//! assert!(tuned.was_clamped());
//!
//! radio.set_volume(8).unwrap();
//! let rssi = radio.signal_strength().unwrap().into_inner();
//! let _ = rssi;
//! ```

#![deny(unsafe_code)]
#![no_std]

pub mod radio;

pub mod prelude {
    pub use crate::radio::prelude::*;
}
