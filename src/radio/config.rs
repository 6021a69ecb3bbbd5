/// 7-bit bus address of the Si4703.
pub const DEFAULT_ADDRESS: u8 = 0x10;

/// Bus session parameters handed to [`Si4703::begin`](crate::radio::Si4703::begin).
///
/// Pin numbers and clock rate are forwarded to
/// [`RegisterTransport::open`](crate::radio::RegisterTransport::open); transports
/// built on an already configured HAL peripheral are free to ignore them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusConfig {
    pub sda_pin: u8,
    pub scl_pin: u8,
    pub clock_hz: u32,
    pub address: u8,
}

impl BusConfig {
    pub const fn new() -> Self {
        Self {
            sda_pin: 21,
            scl_pin: 22,
            clock_hz: 100_000,
            address: DEFAULT_ADDRESS,
        }
    }

    pub const fn with_pins(mut self, sda_pin: u8, scl_pin: u8) -> Self {
        self.sda_pin = sda_pin;
        self.scl_pin = scl_pin;
        self
    }

    pub const fn with_clock_hz(mut self, clock_hz: u32) -> Self {
        self.clock_hz = clock_hz;
        self
    }

    pub const fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }
}

impl Default for BusConfig {
    fn default() -> Self {
        Self::new()
    }
}
