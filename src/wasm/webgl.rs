use js_sys::Float32Array;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGlBuffer, WebGlProgram, WebGlRenderingContext as GL, WebGlShader,
    WebGlUniformLocation,
};

use crate::gl::{Gl, Surface};

impl Surface for HtmlCanvasElement {
    type Context = GL;

    fn context(&self, name: &str) -> Option<GL> {
        // A throwing getContext means the name is unusable here.
        self.get_context(name).ok().flatten()?.dyn_into().ok()
    }

    fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
}

impl Gl for GL {
    type Shader = WebGlShader;
    type Program = WebGlProgram;
    type Buffer = WebGlBuffer;
    type UniformLocation = WebGlUniformLocation;

    fn create_shader(&self, kind: u32) -> Option<WebGlShader> {
        GL::create_shader(self, kind)
    }

    fn shader_source(&self, shader: &WebGlShader, source: &str) {
        GL::shader_source(self, shader, source)
    }

    fn compile_shader(&self, shader: &WebGlShader) {
        GL::compile_shader(self, shader)
    }

    fn shader_compile_status(&self, shader: &WebGlShader) -> bool {
        self.get_shader_parameter(shader, GL::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: &WebGlShader) -> String {
        self.get_shader_info_log(shader).unwrap_or_default()
    }

    fn delete_shader(&self, shader: &WebGlShader) {
        GL::delete_shader(self, Some(shader))
    }

    fn create_program(&self) -> Option<WebGlProgram> {
        GL::create_program(self)
    }

    fn delete_program(&self, program: &WebGlProgram) {
        GL::delete_program(self, Some(program))
    }

    fn attach_shader(&self, program: &WebGlProgram, shader: &WebGlShader) {
        GL::attach_shader(self, program, shader)
    }

    fn link_program(&self, program: &WebGlProgram) {
        GL::link_program(self, program)
    }

    fn program_link_status(&self, program: &WebGlProgram) -> bool {
        self.get_program_parameter(program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn validate_program(&self, program: &WebGlProgram) {
        GL::validate_program(self, program)
    }

    fn program_validate_status(&self, program: &WebGlProgram) -> bool {
        self.get_program_parameter(program, GL::VALIDATE_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn program_info_log(&self, program: &WebGlProgram) -> String {
        self.get_program_info_log(program).unwrap_or_default()
    }

    fn use_program(&self, program: &WebGlProgram) {
        GL::use_program(self, Some(program))
    }

    fn create_buffer(&self) -> Option<WebGlBuffer> {
        GL::create_buffer(self)
    }

    fn bind_buffer(&self, target: u32, buffer: &WebGlBuffer) {
        GL::bind_buffer(self, target, Some(buffer))
    }

    fn buffer_data_f32(&self, target: u32, data: &[f32], usage: u32) {
        let array = Float32Array::from(data);
        self.buffer_data_with_array_buffer_view(target, &array, usage)
    }

    fn attrib_location(&self, program: &WebGlProgram, name: &str) -> Option<u32> {
        u32::try_from(self.get_attrib_location(program, name)).ok()
    }

    fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        kind: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        self.vertex_attrib_pointer_with_i32(index, size, kind, normalized, stride, offset)
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        GL::enable_vertex_attrib_array(self, index)
    }

    fn uniform_location(
        &self,
        program: &WebGlProgram,
        name: &str,
    ) -> Option<WebGlUniformLocation> {
        self.get_uniform_location(program, name)
    }

    fn uniform1f(&self, location: Option<&WebGlUniformLocation>, x: f32) {
        GL::uniform1f(self, location, x)
    }

    fn uniform2f(&self, location: Option<&WebGlUniformLocation>, x: f32, y: f32) {
        GL::uniform2f(self, location, x, y)
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        GL::clear_color(self, r, g, b, a)
    }

    fn clear(&self, mask: u32) {
        GL::clear(self, mask)
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        GL::draw_arrays(self, mode, first, count)
    }
}
