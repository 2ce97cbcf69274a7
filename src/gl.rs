//! The slice of the WebGL 1 API this crate talks to.
//!
//! Setup and frame logic are written against [`Gl`] rather than
//! `web_sys::WebGlRenderingContext` directly, so they can be driven on the
//! host by a fake context. The browser implementation lives in
//! `wasm::webgl` and forwards each call one-to-one.

// GL enum values, identical to the ones exposed by `WebGlRenderingContext`.
pub const VERTEX_SHADER: u32 = 0x8B31;
pub const FRAGMENT_SHADER: u32 = 0x8B30;
pub const ARRAY_BUFFER: u32 = 0x8892;
pub const STATIC_DRAW: u32 = 0x88E4;
pub const FLOAT: u32 = 0x1406;
pub const COLOR_BUFFER_BIT: u32 = 0x4000;
pub const DEPTH_BUFFER_BIT: u32 = 0x0100;
pub const TRIANGLE_FAN: u32 = 0x0006;

/// GPU command interface.
///
/// `create_*` return `None` when the context hands back a null object
/// (context lost, out of memory). Status queries return `false` for the
/// same reason.
pub trait Gl {
    type Shader;
    type Program;
    type Buffer;
    type UniformLocation;

    fn create_shader(&self, kind: u32) -> Option<Self::Shader>;
    fn shader_source(&self, shader: &Self::Shader, source: &str);
    fn compile_shader(&self, shader: &Self::Shader);
    fn shader_compile_status(&self, shader: &Self::Shader) -> bool;
    fn shader_info_log(&self, shader: &Self::Shader) -> String;
    fn delete_shader(&self, shader: &Self::Shader);

    fn create_program(&self) -> Option<Self::Program>;
    fn delete_program(&self, program: &Self::Program);
    fn attach_shader(&self, program: &Self::Program, shader: &Self::Shader);
    fn link_program(&self, program: &Self::Program);
    fn program_link_status(&self, program: &Self::Program) -> bool;
    fn validate_program(&self, program: &Self::Program);
    fn program_validate_status(&self, program: &Self::Program) -> bool;
    fn program_info_log(&self, program: &Self::Program) -> String;
    fn use_program(&self, program: &Self::Program);

    fn create_buffer(&self) -> Option<Self::Buffer>;
    fn bind_buffer(&self, target: u32, buffer: &Self::Buffer);
    fn buffer_data_f32(&self, target: u32, data: &[f32], usage: u32);

    /// `None` when the program has no active attribute called `name`.
    fn attrib_location(&self, program: &Self::Program, name: &str) -> Option<u32>;
    fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        kind: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    );
    fn enable_vertex_attrib_array(&self, index: u32);

    fn uniform_location(
        &self,
        program: &Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation>;
    fn uniform1f(&self, location: Option<&Self::UniformLocation>, x: f32);
    fn uniform2f(&self, location: Option<&Self::UniformLocation>, x: f32, y: f32);

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32);
    fn clear(&self, mask: u32);
    fn draw_arrays(&self, mode: u32, first: i32, count: i32);
}

/// Something a rendering context can be requested from, e.g. a canvas.
pub trait Surface {
    type Context: Gl;

    /// Returns the context registered under `name`, if the platform has one.
    fn context(&self, name: &str) -> Option<Self::Context>;

    /// Drawing buffer size in pixels.
    fn size(&self) -> (u32, u32);
}
