//! Register map and bit definitions for the Si4703.
//!
//! The chip exposes sixteen 16-bit registers. Slots 0x08 and 0x09 are
//! reserved and have no [`Register`] variant.

/// Number of 16-bit words in the register file (0x00..=0x0F).
pub const REGISTER_COUNT: usize = 16;

/// First register returned by a read session.
pub const READ_START: u8 = 0x0A;

/// First register of the writable control block.
pub const CONTROL_START: u8 = 0x02;

/// Last register of the writable control block (inclusive).
pub const CONTROL_END: u8 = 0x07;

/// Number of words in the control block.
pub const CONTROL_WORDS: usize = (CONTROL_END - CONTROL_START + 1) as usize;

/// Bytes transferred by a full read (16 words, high byte first).
pub const READ_BYTES: usize = REGISTER_COUNT * 2;

/// Bytes transferred by a control write (6 words, high byte first).
pub const CONTROL_BYTES: usize = CONTROL_WORDS * 2;

/// Addressable registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    DeviceId = 0x00,
    ChipId = 0x01,
    PowerCfg = 0x02,
    Channel = 0x03,
    SysConfig1 = 0x04,
    SysConfig2 = 0x05,
    SysConfig3 = 0x06,
    Test1 = 0x07,
    StatusRssi = 0x0A,
    ReadChan = 0x0B,
    RdsA = 0x0C,
    RdsB = 0x0D,
    RdsC = 0x0E,
    RdsD = 0x0F,
}

impl Register {
    /// Returns the register at `addr`, or `None` for reserved or out-of-range slots.
    pub const fn from_address(addr: u8) -> Option<Self> {
        match addr {
            0x00 => Some(Register::DeviceId),
            0x01 => Some(Register::ChipId),
            0x02 => Some(Register::PowerCfg),
            0x03 => Some(Register::Channel),
            0x04 => Some(Register::SysConfig1),
            0x05 => Some(Register::SysConfig2),
            0x06 => Some(Register::SysConfig3),
            0x07 => Some(Register::Test1),
            0x0A => Some(Register::StatusRssi),
            0x0B => Some(Register::ReadChan),
            0x0C => Some(Register::RdsA),
            0x0D => Some(Register::RdsB),
            0x0E => Some(Register::RdsC),
            0x0F => Some(Register::RdsD),
            _ => None,
        }
    }

    #[inline]
    pub const fn address(self) -> u8 {
        self as u8
    }

    /// Returns true if the register is part of the control block.
    #[inline]
    pub const fn is_writable(self) -> bool {
        let addr = self.address();
        addr >= CONTROL_START && addr <= CONTROL_END
    }
}

/// POWERCFG (0x02)
pub mod powercfg {
    /// Softmute disable.
    pub const DSMUTE: u16 = 1 << 15;
    /// Mute disable.
    pub const DMUTE: u16 = 1 << 14;
    pub const SKMODE: u16 = 1 << 10;
    pub const SEEKUP: u16 = 1 << 9;
    pub const SEEK: u16 = 1 << 8;
    pub const DISABLE: u16 = 1 << 6;
    pub const ENABLE: u16 = 1 << 0;
}

/// CHANNEL (0x03)
pub mod channel {
    pub const TUNE: u16 = 1 << 15;
    pub const CHAN_MASK: u16 = 0x03FF;
}

/// SYSCONFIG1 (0x04)
pub mod sysconfig1 {
    /// Seek/tune complete interrupt enable.
    pub const STCIEN: u16 = 1 << 14;
    pub const RDS: u16 = 1 << 12;
    /// De-emphasis: set = 50us (EU), clear = 75us (US).
    pub const DE: u16 = 1 << 11;
}

/// SYSCONFIG2 (0x05)
pub mod sysconfig2 {
    pub const VOLUME_MASK: u16 = 0x000F;
    pub const SPACE_MASK: u16 = 0x0030;
    pub const SPACE_200KHZ: u16 = 0 << 4;
    pub const SPACE_100KHZ: u16 = 1 << 4;
    pub const SPACE_50KHZ: u16 = 2 << 4;
}

/// SYSCONFIG3 (0x06)
pub mod sysconfig3 {
    pub const SKSNR_MASK: u16 = 0x00F0;
    pub const SKCNT_MASK: u16 = 0x000F;
}

/// TEST1 (0x07)
pub mod test1 {
    /// Crystal oscillator enabled, all other fields at their power-on values.
    pub const XOSC_ENABLE: u16 = 0x8100;
}

/// STATUSRSSI (0x0A)
pub mod status {
    pub const RDSR: u16 = 1 << 15;
    /// Seek/tune complete.
    pub const STC: u16 = 1 << 14;
    /// Seek fail / band limit.
    pub const SFBL: u16 = 1 << 13;
    pub const AFCRL: u16 = 1 << 12;
    pub const RDSS: u16 = 1 << 11;
    pub const STEREO: u16 = 1 << 8;
    pub const RSSI_MASK: u16 = 0x00FF;
}

/// READCHAN (0x0B)
pub mod readchan {
    pub const CHAN_MASK: u16 = 0x03FF;
}

/// DEVICEID (0x00) and CHIPID (0x01)
pub mod identity {
    pub const PART_SHIFT: u16 = 12;
    pub const MFGID_MASK: u16 = 0x0FFF;
    pub const REV_SHIFT: u16 = 10;
    pub const DEV_SHIFT: u16 = 6;
    pub const DEV_MASK: u16 = 0x000F;
    pub const FIRMWARE_MASK: u16 = 0x003F;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_slots_have_no_register() {
        assert_eq!(Register::from_address(0x08), None);
        assert_eq!(Register::from_address(0x09), None);
        assert_eq!(Register::from_address(0x10), None);
    }

    #[test]
    fn addresses_round_trip_for_every_valid_slot() {
        for addr in (0x00..=0x07).chain(0x0A..=0x0F) {
            let reg = Register::from_address(addr).unwrap();
            assert_eq!(reg.address(), addr);
        }
    }

    #[test]
    fn only_control_block_is_writable() {
        assert!(!Register::DeviceId.is_writable());
        assert!(!Register::ChipId.is_writable());
        assert!(Register::PowerCfg.is_writable());
        assert!(Register::Test1.is_writable());
        assert!(!Register::StatusRssi.is_writable());
        assert!(!Register::RdsD.is_writable());
    }

    #[test]
    fn block_sizes() {
        assert_eq!(CONTROL_WORDS, 6);
        assert_eq!(CONTROL_BYTES, 12);
        assert_eq!(READ_BYTES, 32);
    }
}
