use bitmaps::Bitmap;

use crate::radio::{
    error::RegisterError,
    helpers::{in_control_window, slot},
    macros::{impl_register_accessor, impl_register_accessors},
    regs::{REGISTER_COUNT, Register},
};

/// In-memory mirror of every chip register.
///
/// Command logic stages changes here and the synchronizer pushes the
/// control block to the device. Every staging write marks its register
/// dirty; refreshing from the device or pushing the control block clears
/// the corresponding dirty bits.
///
/// Slots 0x08 and 0x09 are filled by full reads but never exposed as
/// meaningful data.
pub struct RegisterFile {
    words: [u16; REGISTER_COUNT],
    dirty: Bitmap<REGISTER_COUNT>,
}

impl core::fmt::Debug for RegisterFile {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RegisterFile")
            .field("words", &self.words)
            .finish_non_exhaustive()
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates an all-zero, clean register file.
    pub fn new() -> Self {
        Self {
            words: [0; REGISTER_COUNT],
            dirty: Bitmap::new(),
        }
    }

    /// Returns the shadowed value of `reg`.
    #[inline]
    pub fn get(&self, reg: Register) -> u16 {
        self.words[reg.address() as usize]
    }

    /// Stages `value` into `reg`, marking it dirty.
    ///
    /// Only the control block (0x02..=0x07) is ever transmitted; staging
    /// any other register changes the shadow alone.
    #[inline]
    pub fn set(&mut self, reg: Register, value: u16) {
        let idx = reg.address() as usize;
        self.words[idx] = value;
        self.dirty.set(idx, true);
    }

    /// Read-modify-write of `reg`, marking it dirty.
    #[inline]
    pub fn modify<F>(&mut self, reg: Register, f: F)
    where
        F: FnOnce(u16) -> u16,
    {
        let value = f(self.get(reg));
        self.set(reg, value);
    }

    /// Reads a register by raw address.
    pub fn read(&self, addr: u8) -> Result<u16, RegisterError> {
        let idx = slot(addr)?;
        Ok(self.words[idx])
    }

    /// Stages a register by raw address, marking it dirty.
    pub fn write(&mut self, addr: u8, value: u16) -> Result<(), RegisterError> {
        let idx = slot(addr)?;
        self.words[idx] = value;
        self.dirty.set(idx, true);
        Ok(())
    }

    /// Returns all sixteen slots, including the reserved 0x08/0x09.
    #[inline]
    pub fn raw(&self) -> &[u16; REGISTER_COUNT] {
        &self.words
    }

    /// Returns true if `reg` holds a staged change not yet synchronized.
    #[inline]
    pub fn is_dirty(&self, reg: Register) -> bool {
        self.dirty.get(reg.address() as usize)
    }

    /// Returns true if any register holds a staged change.
    #[inline]
    pub fn any_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Returns true if a register outside the control block holds a staged change.
    ///
    /// Such changes are never transmitted.
    pub fn dirty_outside_control_window(&self) -> bool {
        let mut found = false;
        self.iter_dirty(|reg, _| found |= !reg.is_writable());
        found
    }

    /// Calls `f` with every dirty register and its shadowed value, in address order.
    pub fn iter_dirty<F>(&self, mut f: F)
    where
        F: FnMut(Register, u16),
    {
        let mut idx = self.dirty.first_index();
        while let Some(i) = idx {
            if let Some(reg) = Register::from_address(i as u8) {
                f(reg, self.words[i]);
            }
            idx = self.dirty.next_index(i);
        }
    }

    /// Device-side store: updates a slot without marking it dirty.
    #[inline]
    pub(crate) fn load(&mut self, addr: u8, value: u16) {
        self.words[addr as usize] = value;
    }

    /// Clears every dirty bit, e.g. after the whole file was refreshed from the device.
    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = Bitmap::new();
    }

    /// Clears the dirty bits of the control block after it was pushed to the device.
    pub(crate) fn mark_control_clean(&mut self) {
        for i in 0..REGISTER_COUNT {
            if in_control_window(i as u8) {
                self.dirty.set(i, false);
            }
        }
    }

    impl_register_accessors! {
        ro device_id => DeviceId,
        ro chip_id => ChipId,
        rw power_cfg => PowerCfg,
        rw channel => Channel,
        rw sys_config1 => SysConfig1,
        rw sys_config2 => SysConfig2,
        rw sys_config3 => SysConfig3,
        rw test1 => Test1,
        ro status_rssi => StatusRssi,
        ro read_chan => ReadChan,
        ro rds_a => RdsA,
        ro rds_b => RdsB,
        ro rds_c => RdsC,
        ro rds_d => RdsD,
    }
}
