//! Animated sine waves drawn with WebGL from a full-screen quad.
//!
//! Setup and per-frame logic are generic over [`gl::Gl`]; the browser
//! binding and the `requestAnimationFrame` loop are only compiled for wasm32.

pub mod context;
pub mod error;
pub mod gl;
pub mod program;
pub mod settings;
pub mod shaders;
pub mod waves;

pub use error::{SetupError, ShaderStage};
pub use settings::Settings;
pub use waves::{start, SineWaves};

#[cfg(target_arch = "wasm32")]
pub use wasm::run;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use crate::{waves, SetupError, Settings};

    mod render;
    mod webgl;

    pub use render::run;

    impl From<SetupError> for JsValue {
        fn from(err: SetupError) -> Self {
            js_sys::Error::new(&err.to_string()).into()
        }
    }

    /// Sets up rendering on `canvas` and starts the animation loop.
    #[wasm_bindgen(js_name = startOnCanvas)]
    pub fn start_on_canvas(canvas: web_sys::HtmlCanvasElement) -> Result<(), JsValue> {
        let sine_waves = waves::start(&canvas, &Settings::default())?;
        run(Rc::new(RefCell::new(sine_waves)))
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        // A second init (e.g. module instantiated twice) only fails to
        // replace the logger.
        let _ = console_log::init_with_level(log::Level::Info);

        let settings = Settings::default();
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        // Pages without the canvas can still call `startOnCanvas` themselves.
        let Some(element) = document.get_element_by_id(settings.canvas_id) else {
            log::warn!("no element with id `{}`, not starting", settings.canvas_id);
            return Ok(());
        };
        let canvas = element.dyn_into::<web_sys::HtmlCanvasElement>()?;

        let sine_waves = waves::start(&canvas, &settings).map_err(|err| {
            log::error!("{err}");
            err
        })?;
        run(Rc::new(RefCell::new(sine_waves)))
    }
}
