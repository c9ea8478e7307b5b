//! Keyboard codes
//!
//! A `KeyCode` is the raw code the keyboard controller latches, before any
//! shift or control translation. Values 0–255 are keyboard codes: the low
//! six bits pick the key, bit 6 is shift and bit 7 is control. Console keys
//! are reported as `256 + switch bits`.

/// Display code meaning "this key has no character"
const NO_MAPPING: u8 = 199;

/// Raw key code to display code, for codes below 192
#[rustfmt::skip]
const KEY_TO_DISPLAY: [u8; 192] = [
    108, 106,  59, 199, 199, 107,  43,  42, 111, 199,
    112, 117, 155, 105,  45,  61, 118, 199,  99, 199,
    199,  98, 120, 122,  52, 199,  51,  54, 199,  53,
     50,  49,  44,  32,  46, 110, 199, 109,  47, 199,
    114, 199, 101, 121, 199, 116, 119, 113,  57, 199,
     48,  55, 199,  56,  60,  62, 102, 104, 100, 199,
    199, 103, 115,  97,  76,  74,  58, 199, 199,  75,
     92,  94,  79, 199,  80,  85, 199,  73,  95, 124,
     86, 199,  67, 199, 199,  66,  88,  90,  36, 199,
     35,  38, 199,  37,  34,  33,  91,  32,  93,  78,
    199,  77,  63, 199,  82, 199,  69,  89, 199,  84,
     87,  81,  40, 199,  41,  39, 199,  64, 199, 199,
     70,  72,  68, 199, 199,  71,  83,  65,  12,  10,
    123, 199, 199,  11, 199, 199,  15, 199,  16,  21,
    199,   9, 199, 199,  22, 199,   3, 199, 199,   2,
     24,  26, 199, 199, 199, 199, 199, 199, 199, 199,
    199, 199,  96,  14, 199,  13, 199, 199,  18, 199,
      5,  25, 199,  20,  23,  17, 199, 199, 199, 199,
    199, 199, 199, 199,   6,   8,   4, 199, 199,   7,
     19,   1,
];

/// Cursor direction carried by an arrow key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Arrow {
    Left,
    Right,
    Up,
    Down,
}

/// Raw keyboard or console code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyCode(pub u16);

impl KeyCode {
    pub const ENTER: Self = Self(12);
    pub const ESC: Self = Self(28);
    pub const TAB: Self = Self(44);
    pub const SPACE: Self = Self(33);
    pub const DELETE: Self = Self(52);
    pub const DELETE_SHIFT: Self = Self(116);
    pub const DELETE_CTRL: Self = Self(180);
    pub const INSERT: Self = Self(183);

    // Arrow keycaps; the cursor arrows are the same keys with control held
    pub const PLUS: Self = Self(6);
    pub const ASTERISK: Self = Self(7);
    pub const MINUS: Self = Self(14);
    pub const EQUAL: Self = Self(15);
    pub const LEFT: Self = Self(134);
    pub const RIGHT: Self = Self(135);
    pub const UP: Self = Self(142);
    pub const DOWN: Self = Self(143);

    /// Ctrl-Shift-S, jump to start of line or list
    pub const LINE_START: Self = Self(254);
    /// Ctrl-Shift-E, jump to end of line or list
    pub const LINE_END: Self = Self(234);

    pub const KEY_X: Self = Self(22);
    pub const KEY_X_SHIFT: Self = Self(86);
    pub const KEY_Y: Self = Self(43);
    pub const KEY_Y_SHIFT: Self = Self(107);
    pub const KEY_N: Self = Self(35);
    pub const KEY_N_SHIFT: Self = Self(99);

    /// Console Start switch, reported as `256 + switch bits`
    pub const START: Self = Self(262);

    /// Build a key code from a latched keyboard byte
    pub const fn from_keyboard(byte: u8) -> Self {
        Self(byte as u16)
    }

    /// Build a key code from the console switch register
    pub const fn from_console(bits: u8) -> Self {
        Self(256 + bits as u16)
    }

    /// Raw value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Returns true for the console switches
    pub const fn is_console(self) -> bool {
        self.0 > 0xFF
    }

    pub fn is_enter(self) -> bool {
        self == Self::ENTER
    }

    pub fn is_escape(self) -> bool {
        self == Self::ESC
    }

    pub fn is_tab(self) -> bool {
        self == Self::TAB
    }

    /// Direction of an arrow key, with or without control held
    pub fn arrow(self) -> Option<Arrow> {
        match self {
            Self::LEFT | Self::PLUS => Some(Arrow::Left),
            Self::RIGHT | Self::ASTERISK => Some(Arrow::Right),
            Self::UP | Self::MINUS => Some(Arrow::Up),
            Self::DOWN | Self::EQUAL => Some(Arrow::Down),
            _ => None,
        }
    }

    /// Display code typed by this key
    ///
    /// Codes at or above 192 are control-shift combinations with no table
    /// entry and pass through unchanged. Keys without a character and
    /// console switches return `None`.
    pub fn to_display(self) -> Option<u8> {
        if self.is_console() {
            return None;
        }
        let byte = self.0 as u8;
        let code = match KEY_TO_DISPLAY.get(byte as usize) {
            Some(&mapped) => mapped,
            None => byte,
        };
        if code == NO_MAPPING {
            None
        } else {
            Some(code)
        }
    }
}
