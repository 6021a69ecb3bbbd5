pub mod band;
pub mod config;
pub mod driver;
pub mod error;
pub mod helpers;
mod macros;
pub mod regs;
mod sequencer;
pub mod settle;
pub mod state;
pub mod sync;
pub(crate) mod table;
pub mod transport;
pub mod types;

#[cfg(test)]
mod test_support;

pub use config::{BusConfig, DEFAULT_ADDRESS};
pub use driver::{MAX_VOLUME, Si4703};
pub use error::{RadioError, RegisterError};
pub use regs::Register;
pub use settle::Settle;
pub use state::{DriverState, SeekDirection};
pub use sync::Synchronizer;
pub use table::RegisterFile;
pub use transport::{I2cTransport, RegisterTransport};
pub use types::{DeviceIdentity, Outcome, Status};

pub mod prelude {
    pub use super::{
        BusConfig, DeviceIdentity, DriverState, I2cTransport, Outcome, RadioError, Register,
        RegisterFile, RegisterTransport, Si4703, Status,
    };
}
