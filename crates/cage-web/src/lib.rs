pub mod runner;

pub use runner::{GameRunner, Notifier, PendingNotices};

use std::rc::Rc;

use cage_engine::Notice;

/// Notifier that passes each notice's display text to `show`.
pub fn text_notifier(show: impl Fn(&str) + 'static) -> Notifier {
    Rc::new(move |notice: &Notice| show(notice.message()))
}

/// Notifier that shows every notice in a blocking browser alert.
pub fn alert_notifier() -> Notifier {
    text_notifier(|text| {
        let shown = web_sys::window().map(|w| w.alert_with_message(text));
        if !matches!(shown, Some(Ok(()))) {
            log::warn!("could not show alert: {}", text);
        }
    })
}

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (game_init, game_tick, pointer handlers, reset,
///   data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use cage_engine::*;
///
/// mod game;
/// use game::MyGame;
///
/// cage_web::export_game!(MyGame, "my-game");
/// ```
///
/// The game type needs a `new()` constructor. The calling crate must depend on
/// `wasm-bindgen`, `log`, `console_log` and `console_error_panic_hook`.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        /// Build the runner sized to the host container and start the first world.
        #[wasm_bindgen]
        pub fn game_init(width: f32, height: f32) {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let mut runner = $crate::GameRunner::new(<$game_type>::new());
            runner.set_viewport(width, height);
            runner.set_notifier($crate::alert_notifier());

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized at {}x{}", $game_name, width, height);
        }

        /// Advance one frame. Notices are shown once the runner is released,
        /// so the notifier may call any export.
        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| {
                r.tick(dt);
                r.take_notices()
            })
            .deliver();
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_leave(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerLeave { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        /// Throw the current world away and build a fresh one.
        #[wasm_bindgen]
        pub fn game_reset() {
            with_runner(|r| r.reset());
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_header_ptr() -> *const f32 {
            with_runner(|r| r.header_ptr())
        }

        #[wasm_bindgen]
        pub fn get_body_instances_ptr() -> *const f32 {
            with_runner(|r| r.body_instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_body_instance_count() -> u32 {
            with_runner(|r| r.body_instance_count())
        }

        #[wasm_bindgen]
        pub fn get_overlay_ptr() -> *const f32 {
            with_runner(|r| r.overlay_ptr())
        }

        #[wasm_bindgen]
        pub fn get_overlay_vertex_count() -> u32 {
            with_runner(|r| r.overlay_vertex_count())
        }

        #[wasm_bindgen]
        pub fn get_overlay_rgb() -> f32 {
            with_runner(|r| r.overlay_rgb())
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len())
        }

        #[wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width())
        }

        #[wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height())
        }

        #[wasm_bindgen]
        pub fn get_generation() -> u32 {
            with_runner(|r| r.generation())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}
