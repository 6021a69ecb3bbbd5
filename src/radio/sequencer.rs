//! Ordered, timed register sequences.
//!
//! Each step stages its bitfields in the shadow file before the next control
//! write, and a failed write aborts the rest of the sequence.
//!
//! ```text
//! power-up : read -> TEST1/SYSCONFIG1/SYSCONFIG2/POWERCFG -> write -> 110ms
//! reset    : read -> POWERCFG |= DISABLE -> write -> 10ms -> power-up
//! tune     : read -> CHANNEL = chan | TUNE -> write -> 60ms
//!            read -> CHANNEL &= !TUNE -> write
//! ```

use embedded_hal::delay::DelayNs;

use crate::radio::{
    driver::Si4703,
    error::RadioError,
    regs::{channel, powercfg, sysconfig1, sysconfig2, test1},
    settle::{self, Settle},
    state::DriverState,
    transport::RegisterTransport,
};

impl<T, D> Si4703<T, D>
where
    T: RegisterTransport,
    D: DelayNs,
{
    /// Brings the chip from an unknown state to enabled, unmuted and receiving.
    pub(crate) fn power_up(&mut self) -> Result<(), RadioError<T::Error>> {
        self.state = DriverState::PoweringUp;
        let result = self.power_up_sequence();
        self.state = DriverState::Idle;
        result
    }

    fn power_up_sequence(&mut self) -> Result<(), RadioError<T::Error>> {
        log::debug!("power-up");
        self.sync.read_registers(&mut self.regs)?;

        // Whole-register overwrites, not bit-ORs
        self.regs.set_test1(test1::XOSC_ENABLE);
        self.regs.set_sys_config1(sysconfig1::RDS | sysconfig1::DE);
        self.regs.set_sys_config2(sysconfig2::SPACE_100KHZ);
        self.regs.set_power_cfg(powercfg::ENABLE | powercfg::DMUTE);

        self.sync.write_registers(&mut self.regs)?;
        settle::wait(&mut self.delay, Settle::PowerUp);
        Ok(())
    }

    /// Disable/re-enable cycle followed by a full power-up.
    pub(crate) fn soft_reset(&mut self) -> Result<(), RadioError<T::Error>> {
        log::debug!("soft reset");
        self.sync.read_registers(&mut self.regs)?;
        self.regs.modify_power_cfg(|v| v | powercfg::DISABLE);
        self.sync.write_registers(&mut self.regs)?;
        settle::wait(&mut self.delay, Settle::Disable);

        self.power_up()
    }

    /// Tunes to `chan` and releases the tune bit.
    ///
    /// Tune completion is not polled; the fixed [`Settle::Tune`] wait stands in for it.
    pub(crate) fn tune(&mut self, chan: u16) -> Result<(), RadioError<T::Error>> {
        log::debug!("tune: channel {}", chan);
        self.sync.read_registers(&mut self.regs)?;
        self.regs.modify_channel(|v| {
            (v & !channel::CHAN_MASK) | (chan & channel::CHAN_MASK) | channel::TUNE
        });
        self.sync.write_registers(&mut self.regs)?;

        settle::wait(&mut self.delay, Settle::Tune);

        // The chip stays busy until TUNE is de-asserted
        self.sync.read_registers(&mut self.regs)?;
        self.regs.modify_channel(|v| v & !channel::TUNE);
        self.sync.write_registers(&mut self.regs)?;
        Ok(())
    }

    /// Replaces the volume field of SYSCONFIG2, leaving its other bits as read.
    pub(crate) fn apply_volume(&mut self, level: u8) -> Result<(), RadioError<T::Error>> {
        log::debug!("volume: {}", level);
        self.sync.read_registers(&mut self.regs)?;
        self.regs.modify_sys_config2(|v| {
            (v & !sysconfig2::VOLUME_MASK) | (level as u16 & sysconfig2::VOLUME_MASK)
        });
        self.sync.write_registers(&mut self.regs)
    }

    /// Sets or clears the mute-disable bit of POWERCFG.
    pub(crate) fn apply_mute(&mut self, muted: bool) -> Result<(), RadioError<T::Error>> {
        log::debug!("mute: {}", muted);
        self.sync.read_registers(&mut self.regs)?;
        self.regs.modify_power_cfg(|v| {
            if muted {
                v & !powercfg::DMUTE
            } else {
                v | powercfg::DMUTE
            }
        });
        self.sync.write_registers(&mut self.regs)
    }
}

#[cfg(test)]
mod tests {
    use crate::radio::{
        RadioError,
        regs::{Register, channel, powercfg, sysconfig1, sysconfig2, test1},
        state::DriverState,
        test_support::{SimError, started_radio, test_radio},
    };

    #[test]
    fn power_up_stages_every_field_in_one_write() {
        let mut radio = test_radio();
        radio.power_up().unwrap();

        let chip = radio.transport();
        assert_eq!(chip.writes.len(), 1);
        assert_eq!(chip.written_power_cfg(0), powercfg::ENABLE | powercfg::DMUTE);
        assert_eq!(chip.written_word(0, 2), sysconfig1::RDS | sysconfig1::DE);
        assert_eq!(chip.written_word(0, 3), sysconfig2::SPACE_100KHZ);
        assert_eq!(chip.written_word(0, 5), test1::XOSC_ENABLE);
        assert_eq!(radio.delay().waits.as_slice(), &[110]);
        assert_eq!(radio.state(), DriverState::Idle);
    }

    #[test]
    fn power_up_overwrites_oscillator_register() {
        let mut radio = test_radio();
        radio.transport_mut().regs[0x07] = 0x3FFF;
        radio.power_up().unwrap();
        assert_eq!(radio.transport().written_word(0, 5), 0x8100);
    }

    #[test]
    fn failed_power_up_write_skips_settle() {
        let mut radio = test_radio();
        radio.transport_mut().fail_writes_from = Some(0);
        assert_eq!(radio.power_up(), Err(RadioError::Transport(SimError)));
        assert!(radio.delay().waits.is_empty());
        assert_eq!(radio.state(), DriverState::Idle);
    }

    #[test]
    fn soft_reset_disables_then_powers_up() {
        let mut radio = started_radio();
        radio.soft_reset().unwrap();

        let chip = radio.transport();
        assert_eq!(chip.writes.len(), 2);
        let disable = chip.written_power_cfg(0);
        assert_ne!(disable & powercfg::DISABLE, 0);
        // Other bits are kept as read
        assert_ne!(disable & powercfg::ENABLE, 0);
        assert_eq!(chip.written_power_cfg(1), powercfg::ENABLE | powercfg::DMUTE);
        assert_eq!(radio.delay().waits.as_slice(), &[10, 110]);
    }

    #[test]
    fn tune_sets_then_clears_tune_bit() {
        let mut radio = started_radio();
        radio.tune(125).unwrap();

        let chip = radio.transport();
        assert_eq!(chip.writes.len(), 2);
        assert_eq!(chip.written_channel(0), channel::TUNE | 125);
        assert_eq!(chip.written_channel(1), 125);
        assert_eq!(radio.delay().waits.as_slice(), &[60]);
    }

    #[test]
    fn tune_replaces_only_channel_bits() {
        let mut radio = started_radio();
        // Reserved upper bits of CHANNEL must survive the read-modify-write
        radio.transport_mut().regs[0x03] = 0x4000 | 0x03FF;
        radio.tune(7).unwrap();
        assert_eq!(radio.transport().written_channel(0), 0x4000 | channel::TUNE | 7);
        assert_eq!(radio.transport().written_channel(1), 0x4000 | 7);
    }

    #[test]
    fn tune_aborts_after_failed_first_write() {
        let mut radio = started_radio();
        radio.transport_mut().fail_writes_from = Some(0);
        assert!(radio.tune(10).is_err());
        assert!(radio.delay().waits.is_empty());
    }

    #[test]
    fn volume_keeps_other_sysconfig2_bits() {
        let mut radio = started_radio();
        radio.transport_mut().regs[0x05] = 0x1A1F;
        radio.apply_volume(9).unwrap();
        assert_eq!(radio.transport().written_word(0, 3), 0x1A19);
        assert_eq!(radio.registers().get(Register::SysConfig2), 0x1A19);
    }

    #[test]
    fn mute_toggles_dmute_only() {
        let mut radio = started_radio();
        radio.apply_mute(true).unwrap();
        assert_eq!(radio.transport().written_power_cfg(0), powercfg::ENABLE);
        radio.apply_mute(false).unwrap();
        assert_eq!(
            radio.transport().written_power_cfg(1),
            powercfg::ENABLE | powercfg::DMUTE
        );
    }
}
