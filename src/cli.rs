// CLI definitions using clap

use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "lightsctl")]
#[command(author, version, about = "Pantech EF-series lights HAL control tool")]
pub struct Cli {
    /// Board variant
    #[arg(long, value_enum, default_value_t = BoardArg::Ef63)]
    pub board: BoardArg,

    /// Print the device file operations instead of writing to sysfs
    #[arg(long)]
    pub dry_run: bool,

    /// Logical light (backlight, keyboard, buttons, battery, notifications,
    /// attention)
    pub light: String,

    /// Packed AARRGGBB color, hex (e.g. ff00ff00)
    pub color: String,

    /// Flash mode
    #[arg(long, value_enum, default_value_t = FlashArg::None)]
    pub flash: FlashArg,

    /// Flash-on duration in milliseconds
    #[arg(long, default_value_t = 0)]
    pub on_ms: i32,

    /// Flash-off duration in milliseconds
    #[arg(long, default_value_t = 0)]
    pub off_ms: i32,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum BoardArg {
    Ef59,
    Ef63,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FlashArg {
    None,
    Timed,
    Hardware,
}
