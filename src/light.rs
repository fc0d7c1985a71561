//! Logical light identifiers and light state requests

use crate::color::Color;

/// The six logical lights the host may open, in host identifier order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightId {
    Backlight,
    Keyboard,
    Buttons,
    Battery,
    Notifications,
    Attention,
}

impl LightId {
    pub const ALL: [LightId; 6] = [
        LightId::Backlight,
        LightId::Keyboard,
        LightId::Buttons,
        LightId::Battery,
        LightId::Notifications,
        LightId::Attention,
    ];

    /// Resolve a host identifier string. Exact, case-sensitive match;
    /// anything else is rejected at open time.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "backlight" => Some(Self::Backlight),
            "keyboard" => Some(Self::Keyboard),
            "buttons" => Some(Self::Buttons),
            "battery" => Some(Self::Battery),
            "notifications" => Some(Self::Notifications),
            "attention" => Some(Self::Attention),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Backlight => "backlight",
            Self::Keyboard => "keyboard",
            Self::Buttons => "buttons",
            Self::Battery => "battery",
            Self::Notifications => "notifications",
            Self::Attention => "attention",
        }
    }
}

/// Flash behavior requested for a light
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlashMode {
    /// Steady on/off, no flashing
    #[default]
    None,
    /// Software-timed flashing using the on/off durations
    Timed,
    /// Flashing driven by the LED hardware itself
    Hardware,
}

impl FlashMode {
    /// Decode the raw host integer (0/1/2). Unknown values are rejected at
    /// the ABI edge.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::None),
            1 => Some(Self::Timed),
            2 => Some(Self::Hardware),
            _ => None,
        }
    }
}

/// How the brightness value was chosen by the host. Carried for ABI
/// completeness; no handler branches on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BrightnessMode {
    #[default]
    User,
    Sensor,
}

/// A caller-supplied description of the desired visual state for one
/// logical light. Immutable; handlers copy the latest request into the
/// state store, never a history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LightRequest {
    pub color: Color,
    pub flash: FlashMode,
    pub flash_on_ms: i32,
    pub flash_off_ms: i32,
    pub brightness: BrightnessMode,
}

impl LightRequest {
    /// A steady request for the given packed color
    pub fn solid(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    /// All channels off
    pub fn off() -> Self {
        Self::default()
    }
}
