use embedded_hal::i2c::I2c;

use crate::radio::config::BusConfig;

/// Byte-oriented register transport to the chip.
///
/// Each call is one bus session addressed to `address`. The driver never
/// interprets transport errors beyond success or failure.
pub trait RegisterTransport {
    type Error;

    /// Opens the bus session described by `config`.
    ///
    /// Transports wrapping an already configured peripheral can keep the
    /// default, which does nothing.
    fn open(&mut self, config: &BusConfig) -> Result<(), Self::Error> {
        let _ = config;
        Ok(())
    }

    /// Reads up to `buf.len()` bytes in one session and returns how many were delivered.
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Writes `bytes` in one session. `Ok` means the device acknowledged the transfer.
    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error>;
}

/// [`RegisterTransport`] over any `embedded-hal` I2C bus.
///
/// The bus must already be configured for the pins and clock rate; `open`
/// only records the request in the log.
#[derive(Debug)]
pub struct I2cTransport<I> {
    i2c: I,
}

impl<I: I2c> I2cTransport<I> {
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Returns the wrapped bus.
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> RegisterTransport for I2cTransport<I> {
    type Error = I::Error;

    fn open(&mut self, config: &BusConfig) -> Result<(), Self::Error> {
        log::debug!(
            "i2c session: sda={} scl={} clock={}Hz addr={:#04x}",
            config.sda_pin,
            config.scl_pin,
            config.clock_hz,
            config.address
        );
        Ok(())
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.i2c.read(address, buf)?;
        Ok(buf.len())
    }

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(address, bytes)
    }
}
