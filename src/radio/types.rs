use crate::radio::{
    band,
    regs::{identity, readchan, status},
};

/// Result of a command, making the driver's silent behaviours visible.
///
/// Used as the `Ok` value of every command so callers and tests can tell an
/// applied command from a clamped or skipped one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome<R> {
    /// The command ran with the value as given.
    Applied(R),
    /// The input was out of range and was honoured at the nearest boundary.
    Clamped(R),
    /// The driver is not initialized; nothing was sent to the device and the
    /// value is a default or stale one.
    Skipped(R),
}

impl<R> Outcome<R> {
    /// Returns true if the command reached the device unchanged.
    #[inline]
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    /// Returns true if the input was clamped before being applied.
    #[inline]
    pub fn was_clamped(&self) -> bool {
        matches!(self, Outcome::Clamped(_))
    }

    /// Returns true if the command was skipped because the driver is not initialized.
    #[inline]
    pub fn is_skipped(&self) -> bool {
        matches!(self, Outcome::Skipped(_))
    }

    /// Unwraps the inner value regardless of outcome.
    #[inline]
    pub fn into_inner(self) -> R {
        match self {
            Outcome::Applied(r) | Outcome::Clamped(r) | Outcome::Skipped(r) => r,
        }
    }

    /// Maps the inner value, keeping the outcome kind.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(R) -> U) -> Outcome<U> {
        match self {
            Outcome::Applied(r) => Outcome::Applied(f(r)),
            Outcome::Clamped(r) => Outcome::Clamped(f(r)),
            Outcome::Skipped(r) => Outcome::Skipped(f(r)),
        }
    }

    pub(crate) fn clamped_if(clamped: bool, value: R) -> Self {
        if clamped {
            Outcome::Clamped(value)
        } else {
            Outcome::Applied(value)
        }
    }
}

/// Decoded STATUSRSSI (0x0A) and READCHAN (0x0B) registers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status {
    /// Received signal strength (0-255).
    pub rssi: u8,
    pub stereo: bool,
    /// Seek/tune complete.
    pub tune_complete: bool,
    /// Seek failed or hit a band limit.
    pub seek_failed: bool,
    pub rds_ready: bool,
    pub rds_synced: bool,
    pub afc_railed: bool,
    /// Channel the chip reports as tuned.
    pub channel: u16,
}

impl Status {
    /// Parse from raw STATUSRSSI and READCHAN values
    pub fn from_registers(status_rssi: u16, read_chan: u16) -> Self {
        Self {
            rssi: (status_rssi & status::RSSI_MASK) as u8,
            stereo: status_rssi & status::STEREO != 0,
            tune_complete: status_rssi & status::STC != 0,
            seek_failed: status_rssi & status::SFBL != 0,
            rds_ready: status_rssi & status::RDSR != 0,
            rds_synced: status_rssi & status::RDSS != 0,
            afc_railed: status_rssi & status::AFCRL != 0,
            channel: read_chan & readchan::CHAN_MASK,
        }
    }

    /// Frequency of the reported channel in MHz.
    pub fn frequency_mhz(&self) -> f32 {
        band::frequency_for(self.channel)
    }
}

/// Decoded DEVICEID (0x00) and CHIPID (0x01) registers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceIdentity {
    pub device_id: u16,
    pub chip_id: u16,
}

impl DeviceIdentity {
    pub fn part_number(&self) -> u8 {
        (self.device_id >> identity::PART_SHIFT) as u8
    }

    pub fn manufacturer(&self) -> u16 {
        self.device_id & identity::MFGID_MASK
    }

    pub fn revision(&self) -> u8 {
        (self.chip_id >> identity::REV_SHIFT) as u8
    }

    pub fn device(&self) -> u8 {
        ((self.chip_id >> identity::DEV_SHIFT) & identity::DEV_MASK) as u8
    }

    pub fn firmware(&self) -> u8 {
        (self.chip_id & identity::FIRMWARE_MASK) as u8
    }
}
