/// Errors that can occur while talking to the receiver.
///
/// `E` is the error type of the underlying [`RegisterTransport`](crate::radio::RegisterTransport).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RadioError<E> {
    /// The transport reported a failure (write not acknowledged, bus fault).
    Transport(E),
    /// A full register read delivered fewer bytes than the register block holds.
    ShortRead {
        /// Bytes required for a full read.
        expected: usize,
        /// Bytes actually delivered by the transport.
        received: usize,
    },
    /// The device-identity register read back as zero.
    DeviceAbsent,
}

impl<E> From<E> for RadioError<E> {
    fn from(err: E) -> Self {
        RadioError::Transport(err)
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for RadioError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RadioError::Transport(e) => write!(f, "transport failure: {:?}", e),
            RadioError::ShortRead { expected, received } => write!(
                f,
                "short register read: expected {} bytes, received {}",
                expected, received
            ),
            RadioError::DeviceAbsent => write!(f, "no device responding at the bus address"),
        }
    }
}

/// Errors for raw address access to the shadow register file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterError {
    /// Address is past the last register (0x0F).
    OutOfBounds,
    /// Address is one of the reserved slots (0x08, 0x09).
    Unused,
}

impl core::fmt::Display for RegisterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RegisterError::OutOfBounds => write!(f, "register address exceeds register file"),
            RegisterError::Unused => write!(f, "register address is reserved"),
        }
    }
}
