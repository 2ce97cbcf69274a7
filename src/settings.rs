/// Knobs for a renderer instance. Shader sources are deliberately not here.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Element id the wasm entry point looks up.
    pub canvas_id: &'static str,
    /// Added to `phase` once per frame.
    pub phase_step: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_id: "c",
            phase_step: 0.01,
        }
    }
}
