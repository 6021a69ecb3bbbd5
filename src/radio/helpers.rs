//! Address arithmetic for the register file.
//!
//! The chip reads out as a circular block that starts at [`READ_START`] and
//! wraps past 0x0F back to 0x00, while writes always start at
//! [`CONTROL_START`]. These helpers keep that mapping in one place.

use crate::radio::{
    error::RegisterError,
    regs::{CONTROL_END, CONTROL_START, READ_START, REGISTER_COUNT, Register},
};

/// Maps the `k`-th word of a read session to its register address.
///
/// Word `k` lands at `(0x0A + k) mod 0x10`.
///
/// # Example
/// ```
/// use si4703::radio::helpers::read_order_address;
///
/// assert_eq!(read_order_address(0), 0x0A);
/// assert_eq!(read_order_address(5), 0x0F);
/// assert_eq!(read_order_address(6), 0x00);
/// assert_eq!(read_order_address(15), 0x09);
/// ```
#[inline]
pub const fn read_order_address(k: usize) -> u8 {
    ((READ_START as usize + k) % REGISTER_COUNT) as u8
}

/// Iterates the control block addresses in transmission order.
#[inline]
pub fn control_window() -> impl Iterator<Item = u8> {
    CONTROL_START..=CONTROL_END
}

/// Returns true if `addr` lies inside the writable control block.
#[inline]
pub const fn in_control_window(addr: u8) -> bool {
    addr >= CONTROL_START && addr <= CONTROL_END
}

/// Validates a raw register address and returns its slot index.
///
/// # Errors
/// * [`RegisterError::OutOfBounds`] - if `addr` is past 0x0F
/// * [`RegisterError::Unused`] - if `addr` is a reserved slot (0x08, 0x09)
pub fn slot(addr: u8) -> Result<usize, RegisterError> {
    if addr as usize >= REGISTER_COUNT {
        return Err(RegisterError::OutOfBounds);
    }
    match Register::from_address(addr) {
        Some(_) => Ok(addr as usize),
        None => Err(RegisterError::Unused),
    }
}

#[test]
fn read_order_covers_every_slot_once() {
    let mut seen = [false; REGISTER_COUNT];
    for k in 0..REGISTER_COUNT {
        let addr = read_order_address(k) as usize;
        assert!(!seen[addr]);
        seen[addr] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn slot_edge_cases() {
    assert_eq!(slot(0x00), Ok(0));
    assert_eq!(slot(0x07), Ok(7));
    assert_eq!(slot(0x08), Err(RegisterError::Unused));
    assert_eq!(slot(0x09), Err(RegisterError::Unused));
    assert_eq!(slot(0x0F), Ok(15));
    assert_eq!(slot(0x10), Err(RegisterError::OutOfBounds));
}

#[test]
fn control_window_is_ascending() {
    let mut expected = CONTROL_START;
    for addr in control_window() {
        assert_eq!(addr, expected);
        assert!(in_control_window(addr));
        expected += 1;
    }
    assert_eq!(expected, CONTROL_END + 1);
    assert!(!in_control_window(0x01));
    assert!(!in_control_window(0x08));
}
