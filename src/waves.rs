use crate::context::acquire_context;
use crate::error::SetupError;
use crate::gl::{self, Gl, Surface};
use crate::program::build_program;
use crate::settings::Settings;
use crate::shaders::{
    COMPONENTS_PER_VERTEX, FRAGMENT_SHADER, QUAD_VERTICES, VERTEX_COUNT, VERTEX_SHADER,
};

/// GPU state for the sine-wave animation plus the phase it advances.
pub struct SineWaves<G: Gl> {
    gl: G,
    // Held so the program and buffer share the renderer's lifetime.
    _program: G::Program,
    _buffer: G::Buffer,
    phase_uniform: Option<G::UniformLocation>,
    phase: f64,
    phase_step: f64,
    frames: u64,
}

/// Acquires a context from `surface`, builds the program and performs the
/// one-time setup. Nothing is drawn until [`SineWaves::frame`] is called.
pub fn start<S: Surface>(
    surface: &S,
    settings: &Settings,
) -> Result<SineWaves<S::Context>, SetupError> {
    let gl = acquire_context(surface)?;
    let program = build_program(&gl, VERTEX_SHADER, FRAGMENT_SHADER)?;
    SineWaves::new(gl, program, surface.size(), settings)
}

impl<G: Gl> SineWaves<G> {
    pub fn new(
        gl: G,
        program: G::Program,
        (width, height): (u32, u32),
        settings: &Settings,
    ) -> Result<Self, SetupError> {
        gl.use_program(&program);

        let buffer = gl
            .create_buffer()
            .ok_or(SetupError::ResourceCreation("buffer"))?;
        gl.bind_buffer(gl::ARRAY_BUFFER, &buffer);
        gl.buffer_data_f32(gl::ARRAY_BUFFER, &QUAD_VERTICES, gl::STATIC_DRAW);

        let position = gl
            .attrib_location(&program, "position")
            .ok_or(SetupError::AttributeNotFound("position"))?;
        let stride = COMPONENTS_PER_VERTEX * std::mem::size_of::<f32>() as i32;
        gl.vertex_attrib_pointer(position, COMPONENTS_PER_VERTEX, gl::FLOAT, false, stride, 0);
        gl.enable_vertex_attrib_array(position);

        let phase_uniform = gl.uniform_location(&program, "phase");
        let screen_size = gl.uniform_location(&program, "screenSize");
        // Set once; later canvas resizes are not tracked.
        gl.uniform2f(screen_size.as_ref(), width as f32, height as f32);

        log::info!("sine waves ready on {width}x{height} surface");

        Ok(Self {
            gl,
            _program: program,
            _buffer: buffer,
            phase_uniform,
            phase: 0.0,
            phase_step: settings.phase_step,
            frames: 0,
        })
    }

    /// Advances the phase by one step and redraws the quad.
    pub fn frame(&mut self) {
        self.phase += self.phase_step;
        self.frames += 1;

        self.gl.uniform1f(self.phase_uniform.as_ref(), self.phase as f32);
        self.gl.clear_color(0.0, 0.0, 0.0, 0.0);
        self.gl.clear(gl::DEPTH_BUFFER_BIT | gl::COLOR_BUFFER_BIT);
        self.gl.draw_arrays(gl::TRIANGLE_FAN, 0, VERTEX_COUNT);
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Frames rendered since setup.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn gl(&self) -> &G {
        &self.gl
    }
}
