//! Test support utilities - only compiled in test builds.

use embedded_hal::delay::DelayNs;
use heapless::Vec;

use crate::radio::{
    config::BusConfig,
    driver::Si4703,
    regs::{CONTROL_START, CONTROL_WORDS, READ_START, REGISTER_COUNT, channel, status},
    transport::RegisterTransport,
};

/// Identity words of a real Si4703 (part 1, manufacturer 0x242).
pub const DEVICE_ID: u16 = 0x1242;
pub const CHIP_ID: u16 = 0x1253;

pub type TestRadio = Si4703<SimulatedChip, RecordingDelay>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimError;

/// One control write as seen on the wire.
pub type WireWrite = Vec<u8, 32>;

/// In-memory Si4703 serving reads from 0x0A in circular order and
/// applying control writes to 0x02..=0x07.
pub struct SimulatedChip {
    pub regs: [u16; REGISTER_COUNT],
    pub writes: Vec<WireWrite, 32>,
    pub reads: usize,
    pub opened: Option<BusConfig>,
    pub last_address: Option<u8>,
    /// Fail the n-th write (0-based) and every write after it.
    pub fail_writes_from: Option<usize>,
    /// Deliver only this many bytes per read.
    pub short_read: Option<usize>,
}

impl SimulatedChip {
    /// A responding chip at its power-on register values.
    pub fn present() -> Self {
        let mut regs = [0u16; REGISTER_COUNT];
        regs[0x00] = DEVICE_ID;
        regs[0x01] = CHIP_ID;
        regs[0x07] = 0x0100;
        Self {
            regs,
            writes: Vec::new(),
            reads: 0,
            opened: None,
            last_address: None,
            fail_writes_from: None,
            short_read: None,
        }
    }

    /// A bus with nothing answering: every read returns zeroes.
    pub fn absent() -> Self {
        Self {
            regs: [0; REGISTER_COUNT],
            ..Self::present()
        }
    }

    /// Decodes word `i` (0 = POWERCFG) of the `n`-th recorded write.
    pub fn written_word(&self, n: usize, i: usize) -> u16 {
        let bytes = &self.writes[n];
        u16::from_be_bytes([bytes[i * 2], bytes[i * 2 + 1]])
    }

    /// Decodes the POWERCFG word of the `n`-th recorded write.
    pub fn written_power_cfg(&self, n: usize) -> u16 {
        self.written_word(n, 0)
    }

    /// Decodes the CHANNEL word of the `n`-th recorded write.
    pub fn written_channel(&self, n: usize) -> u16 {
        self.written_word(n, 1)
    }

    fn apply_control(&mut self, bytes: &[u8]) {
        for (i, pair) in bytes.chunks(2).take(CONTROL_WORDS).enumerate() {
            let addr = CONTROL_START as usize + i;
            self.regs[addr] = u16::from_be_bytes([pair[0], pair[1]]);
        }

        // Emulate tune completion: the chip reports the channel and raises STC
        // while TUNE is held, and drops STC once TUNE is cleared.
        let chan = self.regs[0x03];
        if chan & channel::TUNE != 0 {
            self.regs[0x0B] = chan & channel::CHAN_MASK;
            self.regs[0x0A] |= status::STC;
        } else {
            self.regs[0x0A] &= !status::STC;
        }
    }
}

impl RegisterTransport for SimulatedChip {
    type Error = SimError;

    fn open(&mut self, config: &BusConfig) -> Result<(), Self::Error> {
        self.opened = Some(*config);
        Ok(())
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.last_address = Some(address);
        self.reads += 1;

        let n = self.short_read.unwrap_or(buf.len()).min(buf.len());
        for (k, b) in buf.iter_mut().take(n).enumerate() {
            let addr = (READ_START as usize + k / 2) % REGISTER_COUNT;
            let word = self.regs[addr].to_be_bytes();
            *b = word[k % 2];
        }
        Ok(n)
    }

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.last_address = Some(address);
        let attempt = self.writes.len();
        if self.fail_writes_from.is_some_and(|n| attempt >= n) {
            return Err(SimError);
        }
        self.writes
            .push(Vec::from_slice(bytes).unwrap())
            .unwrap();
        self.apply_control(bytes);
        Ok(())
    }
}

/// Delay that returns immediately and records every millisecond wait.
#[derive(Debug, Default)]
pub struct RecordingDelay {
    pub waits: Vec<u32, 32>,
    pub total_ns: u64,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.waits.push(ms).unwrap();
        self.total_ns += ms as u64 * 1_000_000;
    }
}

/// A driver wired to a responding chip, not yet started.
pub fn test_radio() -> TestRadio {
    Si4703::new(SimulatedChip::present(), RecordingDelay::default())
}

/// A driver that completed `begin`, with the recorded traffic cleared.
pub fn started_radio() -> TestRadio {
    let mut radio = test_radio();
    radio.begin(BusConfig::default()).unwrap();
    radio.transport_mut().writes.clear();
    radio.delay_mut().waits.clear();
    radio
}
