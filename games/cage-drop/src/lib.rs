use cage_engine::*;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod drawing;
pub mod fetch;
pub mod game;
pub mod hint;
pub mod world;

use config::PuzzleConfig;
use fetch::FetchTransport;
use game::CageDrop;

cage_web::export_game!(CageDrop, "cage-drop");

/// Remove the cage right away.
#[wasm_bindgen]
pub fn game_release_cage() {
    with_runner(|r| {
        r.with_game(|game, ctx| game.release_cage(ctx));
        r.take_notices()
    })
    .deliver();
}

/// Route win and other notices to a JS callback taking the message text.
#[wasm_bindgen]
pub fn game_set_notifier(callback: js_sys::Function) {
    let notifier = cage_web::text_notifier(move |text| {
        if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_str(text)) {
            log::error!("notifier failed: {:?}", e);
        }
    });
    with_runner(|r| r.set_notifier(notifier));
}

/// Ask the hint service about the current board. `on_reply` gets the text to
/// show once the request settles.
#[wasm_bindgen]
pub fn game_ask_hint(message: String, on_reply: js_sys::Function) {
    let job = with_runner(|r| r.game().hint_job(r.context(), FetchTransport, message));
    let Some((requester, request)) = job else {
        log::warn!("hint requested before the world was built");
        return;
    };

    requester.ask(&request, move |text| {
        if let Err(e) = on_reply.call1(&JsValue::NULL, &JsValue::from_str(&text)) {
            log::error!("hint callback failed: {:?}", e);
        }
    });
}

/// Load puzzle tunables from JSON and rebuild the world with them.
/// Missing fields keep their defaults. A malformed config leaves the world as is.
#[wasm_bindgen]
pub fn game_configure(json: &str) -> Result<(), JsValue> {
    let config = PuzzleConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    with_runner(|r| {
        r.game_mut().set_puzzle_config(config);
        r.reset();
    });
    Ok(())
}
