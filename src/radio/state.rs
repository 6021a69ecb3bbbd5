/// Lifecycle of the driver engine.
///
/// Only [`Idle`](DriverState::Idle) and [`PoweringUp`](DriverState::PoweringUp)
/// are reachable today. The remaining states belong to the seek and RDS
/// engine that [`Si4703::tick`](crate::radio::Si4703::tick) will drive.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverState {
    #[default]
    Idle,
    PoweringUp,
    Tuning,
    Seeking,
    ReadingRds,
    Error,
}

/// Direction of a seek. No seek command exists yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SeekDirection {
    Down = 0,
    Up = 1,
}
