//! Last-known light state, one record per process

use crate::light::LightRequest;

/// Mutable record of the latest applied requests and levels. Held inside
/// the HAL context under its single lock; every slot stores the latest
/// write only, never a history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightStates {
    /// Latest battery indication request
    pub battery: LightRequest,
    /// Latest notification indication request
    pub notification: LightRequest,
    /// Current LCD backlight level
    pub backlight: u8,
    /// Button backlight on/off flag
    pub buttons_on: bool,
    /// Attention flash duration in milliseconds, 0 = off. Accounting only;
    /// no write path reads it back.
    pub attention_ms: i32,
}

impl Default for LightStates {
    fn default() -> Self {
        Self {
            battery: LightRequest::off(),
            notification: LightRequest::off(),
            // Panel comes up lit
            backlight: 255,
            buttons_on: false,
            attention_ms: 0,
        }
    }
}
