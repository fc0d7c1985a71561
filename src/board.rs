//! Board variant tables - sysfs paths and LED controller commands
//!
//! Two EF-series boards are supported. They share the LCD backlight path
//! and differ in everything the indicator and key lights touch:
//! - EF59 drives an LP5523 eight-channel controller through per-channel
//!   brightness files plus a vendor command file.
//! - EF63 has plain discrete red/green/blue LEDs and single keyboard and
//!   button backlight files.

/// LCD backlight brightness, 0-255. Identical on both boards.
pub const LCD_FILE: &str = "/sys/class/leds/lcd-backlight/brightness";

/// EF59: LP5523 channel layout and vendor command protocol
pub mod ef59 {
    /// LED1 (right) green, channel 0
    pub const GREEN_R_LED: &str = "/sys/class/leds/lp5523:channel0/brightness";
    /// LED1 (right) blue, channel 1
    pub const BLUE_R_LED: &str = "/sys/class/leds/lp5523:channel1/brightness";
    /// LED2 (left) green, channel 2
    pub const GREEN_L_LED: &str = "/sys/class/leds/lp5523:channel2/brightness";
    /// LED2 (left) blue, channel 3
    pub const BLUE_L_LED: &str = "/sys/class/leds/lp5523:channel3/brightness";
    /// Menu key light, channel 4
    pub const MENU_LED: &str = "/sys/class/leds/lp5523:channel4/brightness";
    /// Back key light, channel 5
    pub const BACK_LED: &str = "/sys/class/leds/lp5523:channel5/brightness";
    /// LED1 (right) red, channel 6
    pub const RED_R_LED: &str = "/sys/class/leds/lp5523:channel6/brightness";
    /// LED2 (left) red, channel 7
    pub const RED_L_LED: &str = "/sys/class/leds/lp5523:channel7/brightness";

    /// Vendor command file; accepts the literal strings below
    pub const COMMAND_FILE: &str = "/dev/led_fops";

    /// Battery capacity percentage, read-only
    pub const BATTERY_CAPACITY_FILE: &str = "/sys/class/power_supply/battery/capacity";

    /// Capacity above which the "full" indicator pattern is shown
    pub const BATTERY_FULL_THRESHOLD: u32 = 95;

    pub const CMD_RESET: &str = "reset";
    pub const CMD_RED_DIM: &str = "red_dim";

    pub const MENU_CHANNEL: usize = 4;
    pub const BACK_CHANNEL: usize = 5;

    /// Indicator channels in activation order; the two key channels (4, 5)
    /// are never part of the indicator
    pub const INDICATOR_CHANNELS: [usize; 6] = [0, 1, 2, 3, 6, 7];

    /// Controller command enabling a channel. Commands are 1-based.
    pub fn on_command(channel: usize) -> String {
        format!("writeon{}", channel + 1)
    }

    /// Controller command disabling a channel
    pub fn off_command(channel: usize) -> String {
        format!("writeoff{}", channel + 1)
    }
}

/// EF63: discrete sysfs LEDs, no command file
pub mod ef63 {
    pub const RED_LED: &str = "/sys/class/leds/red/brightness";
    pub const GREEN_LED: &str = "/sys/class/leds/green/brightness";
    pub const BLUE_LED: &str = "/sys/class/leds/blue/brightness";
    pub const KEYBOARD_FILE: &str = "/sys/class/leds/keyboard-backlight/brightness";
    pub const BUTTONS_FILE: &str = "/sys/class/leds/button-backlight/brightness";
}

/// Supported board variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Board {
    Ef59,
    Ef63,
}

impl Board {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ef59" => Some(Self::Ef59),
            "ef63" => Some(Self::Ef63),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Ef59 => "ef59",
            Self::Ef63 => "ef63",
        }
    }

    pub fn backlight_path(self) -> &'static str {
        LCD_FILE
    }

    /// EF63 compatibility quirk: when the button backlight write fails, the
    /// stock vendor blob drove the keyboard backlight instead. Kept behind
    /// this accessor so the coupling stays visible.
    pub fn buttons_fallback_to_keyboard(self) -> bool {
        matches!(self, Self::Ef63)
    }
}
