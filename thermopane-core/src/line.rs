//! Input lines and pages
//!
//! Each physical button is wired to one GPIO line. Events carry the raw
//! GPIO number; the [`LineMap`] built from configuration resolves it to the
//! logical [`Line`].

use crate::traits::input::InputError;

/// Number of physical button lines
pub const LINE_COUNT: usize = 4;

/// Selectable display page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Page {
    One,
    Two,
    Three,
}

impl Page {
    /// All pages in order
    pub const ALL: [Page; 3] = [Page::One, Page::Two, Page::Three];

    /// Zero-based index, used for atomic storage
    pub const fn index(self) -> u8 {
        match self {
            Page::One => 0,
            Page::Two => 1,
            Page::Three => 2,
        }
    }

    /// Inverse of [`Page::index`]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Page::One),
            1 => Some(Page::Two),
            2 => Some(Page::Three),
            _ => None,
        }
    }

    /// One-based page number, as written in configuration
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Inverse of [`Page::number`]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            0 => None,
            n => Self::from_index(n - 1),
        }
    }
}

/// Logical button line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    Page1,
    Page2,
    Page3,
    Brightness,
}

impl Line {
    /// All lines, in wiring order
    pub const ALL: [Line; LINE_COUNT] = [Line::Page1, Line::Page2, Line::Page3, Line::Brightness];

    /// Position in [`Line::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Line::Page1 => 0,
            Line::Page2 => 1,
            Line::Page3 => 2,
            Line::Brightness => 3,
        }
    }

    /// Page selected by this line, `None` for the brightness line
    pub const fn page(self) -> Option<Page> {
        match self {
            Line::Page1 => Some(Page::One),
            Line::Page2 => Some(Page::Two),
            Line::Page3 => Some(Page::Three),
            Line::Brightness => None,
        }
    }
}

/// A single press reported by an input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvent {
    /// GPIO number of the line that fired
    pub pin: u8,
}

/// GPIO number to line mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineMap {
    pins: [u8; LINE_COUNT],
}

impl LineMap {
    /// Build a map from the pins of each line, in [`Line::ALL`] order
    pub const fn new(pins: [u8; LINE_COUNT]) -> Self {
        Self { pins }
    }

    /// GPIO number wired to a line
    pub fn pin(&self, line: Line) -> u8 {
        self.pins[line.index()]
    }

    /// Resolve an event's GPIO number to a line
    pub fn resolve(&self, pin: u8) -> Result<Line, InputError> {
        self.pins
            .iter()
            .zip(Line::ALL)
            .find(|(p, _)| **p == pin)
            .map(|(_, line)| line)
            .ok_or(InputError::UnknownChannel(pin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_index_roundtrip() {
        for page in Page::ALL {
            assert_eq!(Page::from_index(page.index()), Some(page));
        }
        assert_eq!(Page::from_index(3), None);
    }

    #[test]
    fn test_page_numbers() {
        assert_eq!(Page::from_number(1), Some(Page::One));
        assert_eq!(Page::from_number(3), Some(Page::Three));
        assert_eq!(Page::from_number(0), None);
        assert_eq!(Page::from_number(4), None);
        assert_eq!(Page::Two.number(), 2);
    }

    #[test]
    fn test_line_pages() {
        assert_eq!(Line::Page1.page(), Some(Page::One));
        assert_eq!(Line::Page2.page(), Some(Page::Two));
        assert_eq!(Line::Page3.page(), Some(Page::Three));
        assert_eq!(Line::Brightness.page(), None);
    }

    #[test]
    fn test_line_map_resolve() {
        let map = LineMap::new([17, 22, 23, 27]);
        assert_eq!(map.resolve(17), Ok(Line::Page1));
        assert_eq!(map.resolve(23), Ok(Line::Page3));
        assert_eq!(map.resolve(27), Ok(Line::Brightness));
        assert_eq!(map.resolve(5), Err(InputError::UnknownChannel(5)));
        assert_eq!(map.pin(Line::Page2), 22);
    }
}
