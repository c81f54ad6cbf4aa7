pub mod runner;

pub use runner::FlightRunner;

/// Generate all `#[wasm_bindgen]` exports for a world.
///
/// Generates:
/// - `thread_local!` storage for the FlightRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (init, frame, key handlers, config, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod world;
/// use world::MyWorld;
///
/// flight_web::export_flight!(MyWorld, "my-world");
/// ```
///
/// # Arguments
///
/// - `$world_type`: A type implementing `flight_engine::WorldBuilder` with a `new()` constructor
/// - `$world_name`: A string literal used in log messages
#[macro_export]
macro_rules! export_flight {
    ($world_type:ty, $world_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::FlightRunner<$world_type>>> = RefCell::new(None);
        }

        fn ensure_runner() {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                if borrow.is_none() {
                    console_error_panic_hook::set_once();
                    let _ = console_log::init_with_level(log::Level::Info);
                    *borrow = Some($crate::FlightRunner::new(<$world_type>::new()));
                }
            });
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::FlightRunner<$world_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Runner not created. Call flight_init() first.");
                f(runner)
            })
        }

        /// Optional. Must be called before `flight_init` to take effect.
        #[wasm_bindgen]
        pub fn flight_load_config(json: &str) -> Result<(), JsValue> {
            ensure_runner();
            with_runner(|r| r.load_config(json)).map_err(|e| {
                log::error!("{}: config rejected: {}", $world_name, e);
                JsValue::from(js_sys::Error::new(&e.to_string()))
            })
        }

        #[wasm_bindgen]
        pub fn flight_init() {
            ensure_runner();
            with_runner(|r| r.init());
            log::info!("{}: initialized", $world_name);
        }

        #[wasm_bindgen]
        pub fn flight_frame(now_ms: f64) {
            with_runner(|r| r.frame(now_ms));
        }

        #[wasm_bindgen]
        pub fn flight_key_down(code: &str) {
            with_runner(|r| r.key_down(code));
        }

        #[wasm_bindgen]
        pub fn flight_key_up(code: &str) {
            with_runner(|r| r.key_up(code));
        }

        #[wasm_bindgen]
        pub fn flight_release_all() {
            with_runner(|r| r.release_all());
        }

        #[wasm_bindgen]
        pub fn flight_scene_manifest() -> Result<String, JsValue> {
            with_runner(|r| r.scene_manifest())
                .map_err(|e| JsValue::from(js_sys::Error::new(&e.to_string())))
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn flight_frame_ptr() -> *const f32 {
            with_runner(|r| r.frame_ptr())
        }

        #[wasm_bindgen]
        pub fn flight_frame_len() -> u32 {
            with_runner(|r| r.frame_len())
        }

        #[wasm_bindgen]
        pub fn flight_instance_count() -> u32 {
            with_runner(|r| r.instance_count())
        }

        // ---- Layout accessors ----

        #[wasm_bindgen]
        pub fn flight_max_instances() -> u32 {
            with_runner(|r| r.max_instances())
        }

        #[wasm_bindgen]
        pub fn flight_camera_offset() -> u32 {
            with_runner(|r| r.camera_data_offset())
        }

        #[wasm_bindgen]
        pub fn flight_instance_offset() -> u32 {
            with_runner(|r| r.instance_data_offset())
        }
    };
}
