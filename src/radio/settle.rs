use embedded_hal::delay::DelayNs;

/// Named fixed waits between hardware-affecting steps.
///
/// Every wait is an unconditional blocking sleep. A tune-complete poll can
/// later replace [`Settle::Tune`] without touching callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Settle {
    /// After opening the bus session, before the first read.
    Bus,
    /// After the power-up write; covers the chip's maximum power-up time.
    PowerUp,
    /// After the disable write of a soft reset.
    Disable,
    /// After setting the tune bit; approximates the tune-complete latency.
    Tune,
}

impl Settle {
    pub const fn millis(self) -> u32 {
        match self {
            Settle::Bus => 10,
            Settle::PowerUp => 110,
            Settle::Disable => 10,
            Settle::Tune => 60,
        }
    }
}

/// Blocks for the duration of `settle`.
pub fn wait<D: DelayNs>(delay: &mut D, settle: Settle) {
    log::trace!("settle {:?}: {}ms", settle, settle.millis());
    delay.delay_ms(settle.millis());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radio::test_support::RecordingDelay;

    #[test]
    fn durations() {
        assert_eq!(Settle::Bus.millis(), 10);
        assert_eq!(Settle::PowerUp.millis(), 110);
        assert_eq!(Settle::Disable.millis(), 10);
        assert_eq!(Settle::Tune.millis(), 60);
    }

    #[test]
    fn wait_blocks_for_named_duration() {
        let mut delay = RecordingDelay::default();
        wait(&mut delay, Settle::Tune);
        wait(&mut delay, Settle::PowerUp);
        assert_eq!(delay.waits.as_slice(), &[60, 110]);
    }
}
