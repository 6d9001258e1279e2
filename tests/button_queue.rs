//! The button event queue must hold events that arrive while the main
//! loop is busy (e.g. during the obstacle-avoidance pause), up to its
//! capacity, and hand them back in order.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use rover_kit::button::ButtonEvent;
use rover_kit::shared_constants::BUTTON_EVENT_CAPACITY;

type Queue = Channel<CriticalSectionRawMutex, ButtonEvent, BUTTON_EVENT_CAPACITY>;

#[test]
fn events_survive_a_busy_consumer() {
    let queue = Queue::new();

    // The consumer is "paused" while a full click arrives.
    assert!(queue.try_send(ButtonEvent::Pressed).is_ok());
    assert!(queue.try_send(ButtonEvent::Released).is_ok());

    // It drains in order afterwards.
    assert_eq!(queue.try_receive().ok(), Some(ButtonEvent::Pressed));
    assert_eq!(queue.try_receive().ok(), Some(ButtonEvent::Released));
    assert!(queue.try_receive().is_err());
}

#[test]
fn queue_holds_exactly_its_capacity() {
    let queue = Queue::new();
    for _ in 0..BUTTON_EVENT_CAPACITY / 2 {
        assert!(queue.try_send(ButtonEvent::Pressed).is_ok());
        assert!(queue.try_send(ButtonEvent::Released).is_ok());
    }

    // Full: the next edge has nowhere to go and is dropped by the
    // watcher task.
    assert!(queue.try_send(ButtonEvent::Pressed).is_err());

    // The earlier events are intact.
    assert_eq!(queue.try_receive().ok(), Some(ButtonEvent::Pressed));
}
