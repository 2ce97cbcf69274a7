use crate::error::SetupError;
use crate::gl::Surface;

/// Context names tried in order: the standard one, then the prefixed name
/// older Edge/IE builds registered.
pub const CONTEXT_NAMES: [&str; 2] = ["webgl", "experimental-webgl"];

pub fn acquire_context<S: Surface>(surface: &S) -> Result<S::Context, SetupError> {
    for name in CONTEXT_NAMES {
        if let Some(gl) = surface.context(name) {
            log::debug!("acquired `{name}` context");
            return Ok(gl);
        }
    }
    Err(SetupError::ContextUnavailable)
}
