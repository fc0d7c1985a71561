//! Light handlers, the shared-indicator composition policy and the device
//! factory.
//!
//! Every handler runs under the context's single lock, so hardware writes
//! from concurrent host threads never interleave. Writes are best-effort:
//! light control is cosmetic, and apart from the backlight handler a failed
//! write never changes the status reported to the host.

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::board::{ef59, ef63, Board};
use crate::color::MAX_BRIGHTNESS;
use crate::error::{write_status, HalError};
use crate::io::ControlBus;
use crate::light::{FlashMode, LightId, LightRequest};
use crate::state::LightStates;

/// Host module identifier
pub const MODULE_ID: &str = "lights";
/// Human-readable module name
pub const MODULE_NAME: &str = "Pantech lights module";
/// Module author metadata
pub const MODULE_AUTHOR: &str = "pantech-lights developers";

/// HAL context: board tables, device file access and the guarded state
/// store. One instance per process, shared with every open light handle.
#[derive(Debug)]
pub struct Lights<B> {
    board: Board,
    bus: B,
    states: Mutex<LightStates>,
}

impl<B: ControlBus> Lights<B> {
    pub fn new(board: Board, bus: B) -> Self {
        Self {
            board,
            bus,
            states: Mutex::new(LightStates::default()),
        }
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Snapshot of the current state store
    pub fn states(&self) -> LightStates {
        self.states.lock().clone()
    }

    /// Device factory: resolve a host identifier string to a light handle.
    /// Unknown identifiers fail fast; `HalError::status()` maps the error
    /// to `-EINVAL` for the host.
    pub fn open(self: &Arc<Self>, name: &str) -> Result<LightDevice<B>, HalError> {
        let id = LightId::from_name(name)
            .ok_or_else(|| HalError::InvalidLight(name.to_string()))?;
        Ok(LightDevice {
            id,
            hal: Arc::clone(self),
        })
    }

    /// Apply a light request. Returns 0 or a negative errno per the host
    /// ABI convention.
    pub fn set_light(&self, id: LightId, request: &LightRequest) -> i32 {
        debug!(
            "set_light {} color=0x{:08x}",
            id.name(),
            request.color.raw()
        );
        match id {
            LightId::Backlight => self.set_backlight(request),
            LightId::Keyboard => self.set_keyboard(request),
            LightId::Buttons => self.set_buttons(request),
            LightId::Battery => self.set_battery(request),
            LightId::Notifications => self.set_notifications(request),
            LightId::Attention => self.set_attention(request),
        }
    }

    fn set_backlight(&self, request: &LightRequest) -> i32 {
        let brightness = request.color.brightness();
        let mut states = self.states.lock();
        states.backlight = brightness as u8;
        // The only handler that surfaces its write status
        write_status(self.bus.write_value(self.board.backlight_path(), brightness))
    }

    fn set_keyboard(&self, request: &LightRequest) -> i32 {
        let _states = self.states.lock();
        self.keyboard_locked(request);
        0
    }

    // Shared between the keyboard handler and the EF59 buttons handler;
    // caller holds the lock.
    fn keyboard_locked(&self, request: &LightRequest) {
        let lit = request.color.is_lit();
        match self.board {
            Board::Ef59 => {
                if lit {
                    let brightness = request.color.brightness();
                    self.best_effort(self.bus.write_value(ef59::MENU_LED, brightness));
                    self.best_effort(
                        self.bus
                            .write_command(ef59::COMMAND_FILE, &ef59::on_command(ef59::MENU_CHANNEL)),
                    );
                    self.best_effort(self.bus.write_value(ef59::BACK_LED, brightness));
                    self.best_effort(
                        self.bus
                            .write_command(ef59::COMMAND_FILE, &ef59::on_command(ef59::BACK_CHANNEL)),
                    );
                } else {
                    self.best_effort(
                        self.bus
                            .write_command(ef59::COMMAND_FILE, &ef59::off_command(ef59::MENU_CHANNEL)),
                    );
                    self.best_effort(
                        self.bus
                            .write_command(ef59::COMMAND_FILE, &ef59::off_command(ef59::BACK_CHANNEL)),
                    );
                }
            }
            Board::Ef63 => {
                let level = if lit { MAX_BRIGHTNESS } else { 0 };
                self.best_effort(self.bus.write_value(ef63::KEYBOARD_FILE, level));
            }
        }
    }

    fn set_buttons(&self, request: &LightRequest) -> i32 {
        let lit = request.color.is_lit();
        let mut states = self.states.lock();
        match self.board {
            // EF59 button lights are the menu/back key channels
            Board::Ef59 => self.keyboard_locked(request),
            Board::Ef63 => {
                states.buttons_on = lit;
                let level = if lit { MAX_BRIGHTNESS } else { 0 };
                if let Err(e) = self.bus.write_value(ef63::BUTTONS_FILE, level) {
                    debug!("button backlight write failed: {}", e);
                    if self.board.buttons_fallback_to_keyboard() {
                        self.keyboard_locked(request);
                    }
                }
            }
        }
        0
    }

    fn set_battery(&self, request: &LightRequest) -> i32 {
        match self.board {
            Board::Ef63 => {
                let mut states = self.states.lock();
                states.battery = *request;
                self.update_indicator_locked(&states);
            }
            Board::Ef59 => {
                // Capacity is read before taking the lock, matching the
                // vendor blob's ordering
                let capacity = self
                    .bus
                    .read_value(ef59::BATTERY_CAPACITY_FILE)
                    .unwrap_or(0);
                let mut states = self.states.lock();
                states.battery = *request;
                if request.color.is_lit() {
                    if capacity > ef59::BATTERY_FULL_THRESHOLD {
                        // Full: steady green on both indicator LEDs
                        self.best_effort(self.bus.write_command(ef59::COMMAND_FILE, ef59::CMD_RESET));
                        let green = request.color.green();
                        self.best_effort(self.bus.write_value(ef59::GREEN_R_LED, green));
                        self.best_effort(self.bus.write_value(ef59::GREEN_L_LED, green));
                        self.best_effort(
                            self.bus.write_command(ef59::COMMAND_FILE, &ef59::on_command(0)),
                        );
                        self.best_effort(
                            self.bus.write_command(ef59::COMMAND_FILE, &ef59::on_command(2)),
                        );
                    } else {
                        // Charging: controller-driven dim red pattern
                        self.best_effort(
                            self.bus.write_command(ef59::COMMAND_FILE, &ef59::off_command(0)),
                        );
                        self.best_effort(
                            self.bus.write_command(ef59::COMMAND_FILE, &ef59::off_command(2)),
                        );
                        self.best_effort(
                            self.bus.write_command(ef59::COMMAND_FILE, ef59::CMD_RED_DIM),
                        );
                    }
                } else {
                    self.best_effort(self.bus.write_command(ef59::COMMAND_FILE, ef59::CMD_RESET));
                }
            }
        }
        0
    }

    fn set_notifications(&self, request: &LightRequest) -> i32 {
        let mut states = self.states.lock();
        states.notification = *request;
        self.update_indicator_locked(&states);
        0
    }

    /// No hardware behind this one; the duration is kept as accounting
    /// state only.
    fn set_attention(&self, request: &LightRequest) -> i32 {
        let mut states = self.states.lock();
        match request.flash {
            FlashMode::Hardware => states.attention_ms = request.flash_on_ms,
            FlashMode::None => states.attention_ms = 0,
            FlashMode::Timed => {}
        }
        0
    }

    /// Composition policy: the shared indicator shows the notification
    /// color while one is lit, otherwise the battery color. Caller holds
    /// the lock.
    fn update_indicator_locked(&self, states: &LightStates) {
        let shown = if states.notification.color.is_lit() {
            &states.notification
        } else {
            &states.battery
        };
        let color = shown.color;
        match self.board {
            Board::Ef63 => {
                // Zero channels clear the indicator when nothing is lit
                self.best_effort(self.bus.write_value(ef63::RED_LED, color.red()));
                self.best_effort(self.bus.write_value(ef63::GREEN_LED, color.green()));
                self.best_effort(self.bus.write_value(ef63::BLUE_LED, color.blue()));
            }
            Board::Ef59 => {
                if color.is_lit() {
                    debug!(
                        "indicator r={} g={} b={}",
                        color.red(),
                        color.green(),
                        color.blue()
                    );
                    self.best_effort(self.bus.write_value(ef59::RED_R_LED, color.red()));
                    self.best_effort(self.bus.write_value(ef59::RED_L_LED, color.red()));
                    self.best_effort(self.bus.write_value(ef59::GREEN_R_LED, color.green()));
                    self.best_effort(self.bus.write_value(ef59::GREEN_L_LED, color.green()));
                    self.best_effort(self.bus.write_value(ef59::BLUE_R_LED, color.blue()));
                    self.best_effort(self.bus.write_value(ef59::BLUE_L_LED, color.blue()));
                    for channel in ef59::INDICATOR_CHANNELS {
                        self.best_effort(
                            self.bus
                                .write_command(ef59::COMMAND_FILE, &ef59::on_command(channel)),
                        );
                    }
                } else {
                    for channel in ef59::INDICATOR_CHANNELS {
                        self.best_effort(
                            self.bus
                                .write_command(ef59::COMMAND_FILE, &ef59::off_command(channel)),
                        );
                    }
                }
            }
        }
    }

    // Light control is advisory; a failed write is logged and dropped so
    // the handler status stays 0.
    fn best_effort(&self, result: io::Result<()>) {
        if let Err(e) = result {
            debug!("ignoring failed light write: {}", e);
        }
    }
}

/// Opaque per-light handle vended by the factory. Bound to one handler at
/// open time, never re-bound. Dropping the handle releases it without
/// resetting hardware state.
#[derive(Debug)]
pub struct LightDevice<B: ControlBus> {
    id: LightId,
    hal: Arc<Lights<B>>,
}

impl<B: ControlBus> LightDevice<B> {
    pub fn id(&self) -> LightId {
        self.id
    }

    pub fn set_light(&self, request: &LightRequest) -> i32 {
        self.hal.set_light(self.id, request)
    }
}
