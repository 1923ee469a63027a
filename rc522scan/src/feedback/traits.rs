// rc522scan/src/feedback/traits.rs

//! Output sink traits.

use crate::Result;
use crate::constants::BEEP_FREQUENCY_HZ;

/// Something that can "type" text, e.g. a USB HID keyboard.
pub trait KeystrokeSink {
    /// Type `text` as a sequence of key presses
    fn type_text(&mut self, text: &str) -> Result<()>;

    /// Press and release Enter
    fn press_enter(&mut self) -> Result<()>;
}

/// A buzzer driven by a binary on/off duty signal.
pub trait AudioSink {
    /// Switch the tone on or off
    fn set_tone(&mut self, on: bool) -> Result<()>;

    /// Tone frequency the sink is driven at
    fn frequency_hz(&self) -> u32 {
        BEEP_FREQUENCY_HZ
    }
}
