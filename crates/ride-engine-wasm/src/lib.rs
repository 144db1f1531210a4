//! Browser bindings for ride-engine.
//!
//! Renders the next ride into six `data-*` tagged slots on the hosting
//! page. Rendering runs once at module instantiation (page load) and can
//! be re-triggered by calling [`render`]; re-rendering with an unchanged
//! clock writes identical content.

use chrono::Local;
use ride_engine::{upcoming_ride, RideEvent};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

/// The six output slots. All are located before anything is written, so
/// a missing slot aborts the render with the page untouched.
struct Slots {
    month: Element,
    day: Element,
    year: Element,
    day_name: Element,
    meet_time: Element,
    ride_time: Element,
}

fn find_slots(document: &Document) -> Option<Slots> {
    let slot = |selector: &str| document.query_selector(selector).ok().flatten();
    Some(Slots {
        month: slot("[data-month]")?,
        day: slot("[data-day]")?,
        year: slot("[data-year]")?,
        day_name: slot("[data-day-name]")?,
        meet_time: slot("[data-meet-time]")?,
        ride_time: slot("[data-ride-time]")?,
    })
}

fn write_slots(slots: &Slots, event: &RideEvent) {
    slots.month.set_inner_html(event.month_name);
    // The day slot receives the <sup> ordinal markup.
    slots.day.set_inner_html(&event.day_with_ordinal);
    slots.year.set_inner_html(&event.year.to_string());
    slots.day_name.set_inner_html(event.day_name);
    slots.meet_time.set_inner_html(event.meet_time);
    slots.ride_time.set_inner_html(event.ride_time);
}

/// Render the next ride into the page.
///
/// Reads the browser clock once, resolves the next ride, and writes all
/// six slots. If any slot is missing, logs "Required DOM elements not
/// found" and writes nothing. A core computation error is *not* caught:
/// it surfaces as a JS error, since it would indicate a resolver bug.
#[wasm_bindgen]
pub fn render() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    let event =
        upcoming_ride(Local::now().naive_local()).map_err(|e| JsValue::from_str(&e.to_string()))?;

    match find_slots(&document) {
        Some(slots) => write_slots(&slots, &event),
        None => web_sys::console::error_1(&"Required DOM elements not found".into()),
    }
    Ok(())
}

/// Runs once when the module is instantiated, i.e. at page load.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    render()
}
