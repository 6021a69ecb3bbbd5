//! Reconciles the shadow register file with the device.
//!
//! The device offers two asymmetric windows:
//!
//! ```text
//! read  (32 bytes): 0A 0B 0C 0D 0E 0F 00 01 02 03 04 05 06 07 08 09
//! write (12 bytes):                   02 03 04 05 06 07
//! ```
//!
//! A full read refreshes every slot; a control write transmits exactly the
//! control block in ascending order, whatever else is staged.

use crate::radio::{
    config::{BusConfig, DEFAULT_ADDRESS},
    error::RadioError,
    helpers::{control_window, read_order_address},
    regs::{CONTROL_BYTES, READ_BYTES, REGISTER_COUNT},
    table::RegisterFile,
    transport::RegisterTransport,
};

/// Scatters a full read into the register file.
///
/// Word `k` of `bytes` (high byte first) is stored at `(0x0A + k) mod 0x10`.
pub fn scatter(bytes: &[u8; READ_BYTES], regs: &mut RegisterFile) {
    for k in 0..REGISTER_COUNT {
        let word = u16::from_be_bytes([bytes[k * 2], bytes[k * 2 + 1]]);
        regs.load(read_order_address(k), word);
    }
}

/// Encodes the control block (0x02..=0x07) for transmission, high byte first.
pub fn encode_control_block(regs: &RegisterFile) -> [u8; CONTROL_BYTES] {
    let mut out = [0u8; CONTROL_BYTES];
    for (chunk, addr) in out.chunks_exact_mut(2).zip(control_window()) {
        chunk.copy_from_slice(&regs.raw()[addr as usize].to_be_bytes());
    }
    out
}

/// Owns the transport and moves whole register blocks across it.
#[derive(Debug)]
pub struct Synchronizer<T> {
    transport: T,
    address: u8,
}

impl<T: RegisterTransport> Synchronizer<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            address: DEFAULT_ADDRESS,
        }
    }

    /// Opens the bus session and adopts its device address.
    pub fn open(&mut self, config: &BusConfig) -> Result<(), RadioError<T::Error>> {
        self.address = config.address;
        self.transport.open(config)?;
        Ok(())
    }

    /// Refreshes all sixteen slots from the device.
    ///
    /// A short read leaves the register file untouched and reports
    /// [`RadioError::ShortRead`].
    pub fn read_registers(&mut self, regs: &mut RegisterFile) -> Result<(), RadioError<T::Error>> {
        let mut buf = [0u8; READ_BYTES];
        let received = self.transport.read(self.address, &mut buf)?;
        if received < READ_BYTES {
            log::warn!("short register read: {}/{} bytes", received, READ_BYTES);
            return Err(RadioError::ShortRead {
                expected: READ_BYTES,
                received,
            });
        }

        scatter(&buf, regs);
        regs.clear_dirty();
        log::trace!("read registers: {:04x?}", regs.raw());
        Ok(())
    }

    /// Pushes the control block (0x02..=0x07) to the device in one session.
    pub fn write_registers(&mut self, regs: &mut RegisterFile) -> Result<(), RadioError<T::Error>> {
        if regs.dirty_outside_control_window() {
            regs.iter_dirty(|reg, value| {
                if !reg.is_writable() {
                    log::warn!("staged {:?}={:#06x} is outside the control block", reg, value);
                }
            });
        }

        let bytes = encode_control_block(regs);
        log::trace!("write registers: {:02x?}", bytes);
        self.transport.write(self.address, &bytes)?;
        regs.mark_control_clean();
        Ok(())
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn release(self) -> T {
        self.transport
    }
}
