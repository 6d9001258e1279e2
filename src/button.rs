//! A device abstraction for the rover's push button.
//!
//! Press/release edges are detected by a background task and queued, so a
//! behavior that blocks the main loop for a while cannot lose them.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel as EmbassyChannel;

use crate::shared_constants::BUTTON_EVENT_CAPACITY;

#[cfg(any(feature = "pico1", feature = "pico2"))]
use defmt::{info, warn};
#[cfg(any(feature = "pico1", feature = "pico2"))]
use embassy_executor::Spawner;
#[cfg(any(feature = "pico1", feature = "pico2"))]
use embassy_rp::Peri;
#[cfg(any(feature = "pico1", feature = "pico2"))]
use embassy_rp::gpio::{AnyPin, Input, Pin, Pull};
#[cfg(any(feature = "pico1", feature = "pico2"))]
use embassy_time::Timer;

#[cfg(any(feature = "pico1", feature = "pico2"))]
use crate::Result;
#[cfg(any(feature = "pico1", feature = "pico2"))]
use crate::shared_constants::BUTTON_DEBOUNCE_DELAY;

/// A press or release edge from the push button.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// The button went down.
    Pressed,
    /// The button came back up.
    Released,
}

/// Static type for the `Button` device abstraction: the queue of edge
/// events waiting to be drained.
pub type ButtonStatic =
    EmbassyChannel<CriticalSectionRawMutex, ButtonEvent, BUTTON_EVENT_CAPACITY>;

/// A push button whose press/release edges are queued by a background task.
///
/// Up to [`BUTTON_EVENT_CAPACITY`] events are held while the consumer is
/// busy; beyond that, new edges are dropped.
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub struct Button<'a> {
    button_static: &'a ButtonStatic,
}

#[cfg(any(feature = "pico1", feature = "pico2"))]
impl Button<'_> {
    /// Create static channel resources for button events.
    #[must_use]
    pub const fn new_static() -> ButtonStatic {
        EmbassyChannel::new()
    }

    /// Create a new button on the specified pin and spawn its edge watcher.
    ///
    /// The pin is pulled up; the button is expected to short it to ground
    /// while pressed.
    ///
    /// # Errors
    /// Returns an error if the background task cannot be spawned.
    pub fn new<P: Pin>(
        pin: Peri<'static, P>,
        button_static: &'static ButtonStatic,
        spawner: Spawner,
    ) -> Result<Self> {
        // Type erase to Peri<'static, AnyPin> (keep the Peri wrapper!)
        let any: Peri<'static, AnyPin> = pin.into();
        let token = button_task(Input::new(any, Pull::Up), button_static)?;
        spawner.spawn(token);
        Ok(Self { button_static })
    }

    /// Take the next queued event, if any. Never blocks.
    #[must_use]
    pub fn try_next(&self) -> Option<ButtonEvent> {
        self.button_static.try_receive().ok()
    }
}

#[cfg(any(feature = "pico1", feature = "pico2"))]
#[embassy_executor::task]
async fn button_task(mut pin: Input<'static>, button_static: &'static ButtonStatic) -> ! {
    info!("button task started");
    loop {
        // Active-low wiring: a falling edge is a press.
        pin.wait_for_falling_edge().await;
        enqueue(button_static, ButtonEvent::Pressed);
        Timer::after(BUTTON_DEBOUNCE_DELAY).await;

        pin.wait_for_rising_edge().await;
        enqueue(button_static, ButtonEvent::Released);
        Timer::after(BUTTON_DEBOUNCE_DELAY).await;
    }
}

#[cfg(any(feature = "pico1", feature = "pico2"))]
fn enqueue(button_static: &ButtonStatic, event: ButtonEvent) {
    if button_static.try_send(event).is_err() {
        warn!("button event queue full, dropping an edge");
    }
}
