use embedded_hal::delay::DelayNs;

use crate::radio::{
    band,
    config::BusConfig,
    error::RadioError,
    regs::{powercfg, sysconfig2},
    settle::{self, Settle},
    state::DriverState,
    sync::Synchronizer,
    table::RegisterFile,
    transport::RegisterTransport,
    types::{DeviceIdentity, Outcome, Status},
};

/// Highest volume level.
pub const MAX_VOLUME: u8 = 15;

/// Si4703 FM receiver driver.
///
/// Owns the transport, the delay provider and the shadow register file.
/// Every command other than [`begin`](Self::begin) is skipped while the
/// driver is not initialized; the returned [`Outcome::Skipped`] carries the
/// driver's stale cached value. Transport failures abort the running
/// sequence and are returned as [`RadioError`].
///
/// All commands block on the calling thread, for up to ~120 ms during
/// [`begin`](Self::begin)/[`reset`](Self::reset) and ~60 ms during
/// [`set_frequency`](Self::set_frequency).
pub struct Si4703<T, D> {
    pub(crate) sync: Synchronizer<T>,
    pub(crate) delay: D,
    pub(crate) regs: RegisterFile,
    pub(crate) state: DriverState,
    bus: BusConfig,
    frequency: f32,
    initialized: bool,
}

impl<T, D> core::fmt::Debug for Si4703<T, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Si4703")
            .field("state", &self.state)
            .field("initialized", &self.initialized)
            .field("frequency", &self.frequency)
            .finish_non_exhaustive()
    }
}

impl<T, D> Si4703<T, D>
where
    T: RegisterTransport,
    D: DelayNs,
{
    /// Creates an uninitialized driver. Nothing is sent until [`begin`](Self::begin).
    pub fn new(transport: T, delay: D) -> Self {
        Self {
            sync: Synchronizer::new(transport),
            delay,
            regs: RegisterFile::new(),
            state: DriverState::Idle,
            bus: BusConfig::new(),
            frequency: 0.0,
            initialized: false,
        }
    }

    /// Opens the bus session, checks that a device responds and powers it up.
    ///
    /// # Errors
    /// * [`RadioError::DeviceAbsent`] - the device-identity register read back as zero
    /// * [`RadioError::ShortRead`] / [`RadioError::Transport`] - the bus failed
    ///
    /// On any error the driver stays uninitialized.
    pub fn begin(&mut self, bus: BusConfig) -> Result<(), RadioError<T::Error>> {
        self.initialized = false;
        self.bus = bus;

        self.sync.open(&bus)?;
        settle::wait(&mut self.delay, Settle::Bus);

        self.sync.read_registers(&mut self.regs)?;
        if self.regs.device_id() == 0x0000 {
            log::warn!("no device at {:#04x}", bus.address);
            return Err(RadioError::DeviceAbsent);
        }

        self.power_up()?;
        self.initialized = true;
        log::info!("si4703 ready at {:#04x}", bus.address);
        Ok(())
    }

    /// Soft reset: disable, settle, then the full power-up sequence.
    ///
    /// If the reset fails part-way the driver drops back to uninitialized.
    pub fn reset(&mut self) -> Result<Outcome<()>, RadioError<T::Error>> {
        if !self.initialized {
            return Ok(Outcome::Skipped(()));
        }
        if let Err(e) = self.soft_reset() {
            self.initialized = false;
            return Err(e);
        }
        Ok(Outcome::Applied(()))
    }

    /// Tunes to `mhz`, clamped to 87.5-108.0 MHz.
    ///
    /// The cached frequency changes only after the whole tune sequence succeeded.
    /// Returns the frequency now cached.
    pub fn set_frequency(&mut self, mhz: f32) -> Result<Outcome<f32>, RadioError<T::Error>> {
        if !self.initialized {
            return Ok(Outcome::Skipped(self.frequency));
        }

        let (mhz, clamped) = band::clamp(mhz);
        self.tune(band::channel_for(mhz))?;
        self.frequency = mhz;
        Ok(Outcome::clamped_if(clamped, mhz))
    }

    /// Last frequency requested through a successful tune. Not read back from the chip.
    pub fn frequency(&self) -> Outcome<f32> {
        if self.initialized {
            Outcome::Applied(self.frequency)
        } else {
            Outcome::Skipped(self.frequency)
        }
    }

    /// Sets the volume, clamped to 0-15.
    pub fn set_volume(&mut self, level: u8) -> Result<Outcome<u8>, RadioError<T::Error>> {
        if !self.initialized {
            let stale = (self.regs.sys_config2() & sysconfig2::VOLUME_MASK) as u8;
            return Ok(Outcome::Skipped(stale));
        }

        let clamped = level > MAX_VOLUME;
        let level = level.min(MAX_VOLUME);
        self.apply_volume(level)?;
        Ok(Outcome::clamped_if(clamped, level))
    }

    /// Reads the live received signal strength (0-255). Zero when not initialized.
    pub fn signal_strength(&mut self) -> Result<Outcome<u8>, RadioError<T::Error>> {
        Ok(self.read_status()?.map(|s| s.rssi))
    }

    /// Reads and decodes the status and read-channel registers.
    pub fn read_status(&mut self) -> Result<Outcome<Status>, RadioError<T::Error>> {
        if !self.initialized {
            return Ok(Outcome::Skipped(Status::default()));
        }

        self.sync.read_registers(&mut self.regs)?;
        let status = Status::from_registers(self.regs.status_rssi(), self.regs.read_chan());
        Ok(Outcome::Applied(status))
    }

    /// Mutes or unmutes the audio output.
    pub fn set_mute(&mut self, muted: bool) -> Result<Outcome<bool>, RadioError<T::Error>> {
        if !self.initialized {
            let stale = self.regs.power_cfg() & powercfg::DMUTE == 0;
            return Ok(Outcome::Skipped(stale));
        }

        self.apply_mute(muted)?;
        Ok(Outcome::Applied(muted))
    }

    /// Reads the device and chip identity registers.
    pub fn identity(&mut self) -> Result<Outcome<DeviceIdentity>, RadioError<T::Error>> {
        if !self.initialized {
            return Ok(Outcome::Skipped(DeviceIdentity::default()));
        }

        self.sync.read_registers(&mut self.regs)?;
        Ok(Outcome::Applied(DeviceIdentity {
            device_id: self.regs.device_id(),
            chip_id: self.regs.chip_id(),
        }))
    }

    /// Periodic service hook for the future seek/RDS engine. Currently does nothing.
    pub fn tick(&mut self) {}

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn bus_config(&self) -> &BusConfig {
        &self.bus
    }

    /// Read-only view of the shadow register file as of the last sync.
    pub fn registers(&self) -> &RegisterFile {
        &self.regs
    }

    pub fn transport(&self) -> &T {
        self.sync.transport()
    }

    /// Consumes the driver and returns the transport and delay provider.
    pub fn release(self) -> (T, D) {
        (self.sync.release(), self.delay)
    }

    #[cfg(test)]
    pub(crate) fn transport_mut(&mut self) -> &mut T {
        self.sync.transport_mut()
    }

    #[cfg(test)]
    pub(crate) fn delay(&self) -> &D {
        &self.delay
    }

    #[cfg(test)]
    pub(crate) fn delay_mut(&mut self) -> &mut D {
        &mut self.delay
    }
}
