//! lightsctl - poke the EF-series lights HAL from the command line
//!
//! Mainly a bring-up and debugging aid: applies one light request against
//! the selected board, either for real through sysfs or recorded with
//! `--dry-run`.

use std::sync::Arc;

use clap::Parser;

use pantech_lights::{
    Board, Color, FlashMode, LightRequest, Lights, MemoryBus, Op, SysfsBus,
};

mod cli;
use cli::{BoardArg, Cli, FlashArg};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let board = match cli.board {
        BoardArg::Ef59 => Board::Ef59,
        BoardArg::Ef63 => Board::Ef63,
    };

    let raw = u32::from_str_radix(cli.color.trim_start_matches("0x"), 16)
        .map_err(|e| format!("invalid color {:?}: {}", cli.color, e))?;

    let request = LightRequest {
        color: Color::new(raw),
        flash: match cli.flash {
            FlashArg::None => FlashMode::None,
            FlashArg::Timed => FlashMode::Timed,
            FlashArg::Hardware => FlashMode::Hardware,
        },
        flash_on_ms: cli.on_ms,
        flash_off_ms: cli.off_ms,
        brightness: Default::default(),
    };

    let status = if cli.dry_run {
        let bus = MemoryBus::new();
        let hal = Arc::new(Lights::new(board, bus.clone()));
        let device = hal.open(&cli.light).map_err(|e| e.to_string())?;
        let status = device.set_light(&request);
        for op in bus.ops() {
            match op {
                Op::Value { path, value } => println!("{} <- {}", path, value),
                Op::Command { path, command } => println!("{} <- {:?}", path, command),
            }
        }
        status
    } else {
        let hal = Arc::new(Lights::new(board, SysfsBus::new()));
        let device = hal.open(&cli.light).map_err(|e| e.to_string())?;
        device.set_light(&request)
    };

    if status < 0 {
        return Err(format!(
            "set_light failed: {}",
            std::io::Error::from_raw_os_error(-status)
        )
        .into());
    }
    Ok(())
}
