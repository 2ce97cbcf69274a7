use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::window;

use crate::gl::Gl;
use crate::waves::SineWaves;

fn request_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window()
        .ok_or("no window")?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}

/// Draws one frame immediately, then one per display refresh, forever.
///
/// The renderer stays reachable through `waves` so callers can observe the
/// phase and frame count while the loop runs.
pub fn run<G: Gl + 'static>(waves: Rc<RefCell<SineWaves<G>>>) -> Result<(), JsValue> {
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let looped = waves.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        looped.borrow_mut().frame();

        // schedule next
        if let Some(callback) = f.borrow().as_ref() {
            if let Err(err) = request_frame(callback) {
                log::error!("animation loop stopped: {err:?}");
            }
        }
    }) as Box<dyn FnMut()>));

    waves.borrow_mut().frame();
    if let Some(callback) = g.borrow().as_ref() {
        request_frame(callback)?;
    }
    Ok(())
}
