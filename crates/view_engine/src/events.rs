//! Event draining and quit detection
//!
//! The interactive loop drains every pending event once per frame with
//! non-blocking polls, then scans the batch in arrival order for the two
//! quit conditions: an Escape key press or a window quit request. Everything
//! else is ignored.

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;

/// Drain every pending event without blocking, preserving arrival order.
pub fn drain(pump: &mut EventPump) -> Vec<Event> {
    pump.poll_iter().collect()
}

/// Whether `event` asks the program to stop.
pub fn requests_quit(event: &Event) -> bool {
    matches!(
        event,
        Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            }
    )
}

/// Fold a drained batch into the continue-flag.
///
/// The flag is only ever cleared here; no event can set it again within the
/// same batch.
pub fn scan(events: &[Event], is_continue: &mut bool) {
    for event in events {
        if requests_quit(event) {
            log::info!("Quit requested: {:?}", event);
            *is_continue = false;
        }
    }
}
