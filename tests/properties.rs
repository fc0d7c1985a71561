// End-to-end behavior of the HAL against a recording bus: composition
// policy, factory validation, best-effort writes and lock serialization.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use pantech_lights::board::{ef59, ef63, LCD_FILE};
use pantech_lights::{
    Board, Color, ControlBus, LightId, LightRequest, Lights, MemoryBus, Op,
};

fn hal(board: Board) -> (Arc<Lights<MemoryBus>>, MemoryBus) {
    let bus = MemoryBus::new();
    (Arc::new(Lights::new(board, bus.clone())), bus)
}

fn lit(raw: u32) -> LightRequest {
    LightRequest::solid(Color::new(raw))
}

fn rgb_writes(ops: &[Op]) -> Vec<(String, u32)> {
    ops.iter()
        .filter_map(|op| match op {
            Op::Value { path, value } => Some((path.clone(), *value)),
            Op::Command { .. } => None,
        })
        .collect()
}

#[test]
fn notification_wins_over_battery() {
    let (hal, bus) = hal(Board::Ef63);

    hal.set_light(LightId::Battery, &lit(0x0000_00FF));
    bus.take_ops();

    hal.set_light(LightId::Notifications, &lit(0x00FF_0000));
    assert_eq!(
        rgb_writes(&bus.take_ops()),
        vec![
            (ef63::RED_LED.to_string(), 255),
            (ef63::GREEN_LED.to_string(), 0),
            (ef63::BLUE_LED.to_string(), 0),
        ]
    );

    // Both latest requests are retained
    let states = hal.states();
    assert_eq!(states.battery.color, Color::new(0x0000_00FF));
    assert_eq!(states.notification.color, Color::new(0x00FF_0000));
}

#[test]
fn battery_shows_when_notification_clears() {
    let (hal, bus) = hal(Board::Ef63);

    hal.set_light(LightId::Battery, &lit(0x0000_00FF));
    hal.set_light(LightId::Notifications, &lit(0x00FF_0000));
    bus.take_ops();

    hal.set_light(LightId::Notifications, &LightRequest::off());
    assert_eq!(
        rgb_writes(&bus.take_ops()),
        vec![
            (ef63::RED_LED.to_string(), 0),
            (ef63::GREEN_LED.to_string(), 0),
            (ef63::BLUE_LED.to_string(), 255),
        ]
    );
}

#[test]
fn indicator_clears_when_both_off() {
    let (hal, bus) = hal(Board::Ef63);

    hal.set_light(LightId::Battery, &lit(0x0000_00FF));
    hal.set_light(LightId::Notifications, &lit(0x00FF_0000));
    hal.set_light(LightId::Battery, &LightRequest::off());
    bus.take_ops();

    hal.set_light(LightId::Notifications, &LightRequest::off());
    assert_eq!(
        rgb_writes(&bus.take_ops()),
        vec![
            (ef63::RED_LED.to_string(), 0),
            (ef63::GREEN_LED.to_string(), 0),
            (ef63::BLUE_LED.to_string(), 0),
        ]
    );
}

#[test]
fn ef59_indicator_activates_channels() {
    let (hal, bus) = hal(Board::Ef59);

    hal.set_light(LightId::Notifications, &lit(0x0012_3456));
    let ops = bus.take_ops();

    // Six channel brightness writes, then six activation commands; the key
    // channels never appear
    assert_eq!(ops.len(), 12);
    let commands: Vec<&str> = ops
        .iter()
        .filter_map(|op| match op {
            Op::Command { command, .. } => Some(command.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(
        commands,
        vec!["writeon1", "writeon2", "writeon3", "writeon4", "writeon7", "writeon8"]
    );

    hal.set_light(LightId::Notifications, &LightRequest::off());
    let commands: Vec<Op> = bus.take_ops();
    assert!(commands.iter().all(|op| matches!(
        op,
        Op::Command { command, .. } if command.starts_with("writeoff")
    )));
}

#[test]
fn open_rejects_unknown_identifier() {
    let (hal, bus) = hal(Board::Ef63);
    let err = hal.open("flashlight").unwrap_err();
    assert_eq!(err.status(), -libc::EINVAL);
    assert!(bus.ops().is_empty());
}

#[test]
fn device_handle_routes_to_its_light() {
    let (hal, bus) = hal(Board::Ef63);
    let backlight = hal.open("backlight").unwrap();
    let notifications = hal.open("notifications").unwrap();

    assert_eq!(backlight.set_light(&lit(0x00FF_FFFF)), 0);
    assert_eq!(notifications.set_light(&lit(0x0000_FF00)), 0);

    let ops = bus.ops();
    assert_eq!(ops[0].path(), LCD_FILE);
    assert_eq!(ops[1].path(), ef63::RED_LED);
}

#[test]
fn failed_write_does_not_block_other_lights() {
    let (hal, bus) = hal(Board::Ef63);
    bus.fail_path(LCD_FILE);

    let status = hal.set_light(LightId::Backlight, &lit(0x00FF_FFFF));
    assert!(status < 0);

    // Unrelated lights keep working
    assert_eq!(hal.set_light(LightId::Notifications, &lit(0x0000_FF00)), 0);
    assert_eq!(bus.ops().len(), 3);

    // The backlight keeps attempting its write too: the failure surfaces
    // on every call, only the warning is one-shot
    let status = hal.set_light(LightId::Backlight, &lit(0x0000_0000));
    assert!(status < 0);
}

/// Delegates to a `MemoryBus` with a small delay per operation so that an
/// unserialized implementation would interleave.
struct SlowBus(MemoryBus);

impl ControlBus for SlowBus {
    fn write_value(&self, path: &str, value: u32) -> std::io::Result<()> {
        thread::sleep(Duration::from_millis(1));
        self.0.write_value(path, value)
    }

    fn write_command(&self, path: &str, command: &str) -> std::io::Result<()> {
        thread::sleep(Duration::from_millis(1));
        self.0.write_command(path, command)
    }

    fn read_value(&self, path: &str) -> std::io::Result<u32> {
        self.0.read_value(path)
    }
}

#[test]
fn concurrent_lights_never_interleave_writes() {
    for _ in 0..8 {
        let bus = MemoryBus::new();
        let hal = Arc::new(Lights::new(Board::Ef59, SlowBus(bus.clone())));

        let keyboard = {
            let hal = Arc::clone(&hal);
            thread::spawn(move || {
                hal.set_light(LightId::Keyboard, &lit(0x00FF_FFFF));
            })
        };
        let notifications = {
            let hal = Arc::clone(&hal);
            thread::spawn(move || {
                hal.set_light(LightId::Notifications, &lit(0x00FF_00FF));
            })
        };
        keyboard.join().unwrap();
        notifications.join().unwrap();

        let ops = bus.take_ops();
        assert_eq!(ops.len(), 16);

        // The keyboard handler's four operations must be contiguous in the
        // combined log; the notification indicator never touches the key
        // channels or their commands
        let keyboard_indices: Vec<usize> = ops
            .iter()
            .enumerate()
            .filter(|(_, op)| match op {
                Op::Value { path, .. } => path == ef59::MENU_LED || path == ef59::BACK_LED,
                Op::Command { command, .. } => command == "writeon5" || command == "writeon6",
            })
            .map(|(i, _)| i)
            .collect();
        assert_eq!(keyboard_indices.len(), 4);
        assert_eq!(
            keyboard_indices[3] - keyboard_indices[0],
            3,
            "keyboard writes interleaved with indicator writes: {:?}",
            ops
        );
    }
}
