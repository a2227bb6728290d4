//! Runtime pin allocation for config-driven button wiring

use embassy_rp::gpio::AnyPin;
use embassy_rp::Peri;

/// Number of GPIOs on the RP2040
pub const PIN_COUNT: usize = 30;

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin,
    /// Pin already taken or held back for the board
    AlreadyTaken,
}

/// Bank of free GPIOs that can be taken by number
///
/// Slots for board-wired pins start out empty.
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; PIN_COUNT],
}

impl PinBank {
    pub fn new(pins: [Option<Peri<'static, AnyPin>>; PIN_COUNT]) -> Self {
        Self { pins }
    }

    /// Take a pin by number
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        self.pins
            .get_mut(usize::from(pin_num))
            .ok_or(PinError::InvalidPin)?
            .take()
            .ok_or(PinError::AlreadyTaken)
    }
}

/// Move a GPIO out of the peripherals as a type-erased pin
#[macro_export]
macro_rules! bank_pin {
    ($pin:expr) => {
        Some(embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($pin))
    };
}
