//! Recording stand-ins for a WebGL context and a canvas.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use sine_waves_wasm::gl::{self, Gl, Surface};

pub type Id = u32;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateShader(u32),
    ShaderSource(Id, String),
    CompileShader(Id),
    DeleteShader(Id),
    CreateProgram,
    DeleteProgram(Id),
    AttachShader(Id, Id),
    LinkProgram(Id),
    ValidateProgram(Id),
    UseProgram(Id),
    CreateBuffer,
    BindBuffer(u32, Id),
    BufferData(u32, Vec<f32>, u32),
    VertexAttribPointer {
        index: u32,
        size: i32,
        kind: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    },
    EnableVertexAttribArray(u32),
    Uniform1f(Option<String>, f32),
    Uniform2f(Option<String>, f32, f32),
    ClearColor([f32; 4]),
    Clear(u32),
    DrawArrays(u32, i32, i32),
}

/// Failures the fake context should report.
#[derive(Debug, Clone, Default)]
pub struct Faults {
    /// Shader kind (`gl::VERTEX_SHADER` / `gl::FRAGMENT_SHADER`) that fails to compile.
    pub failing_stage: Option<u32>,
    pub link_log: Option<String>,
    pub validate_log: Option<String>,
    pub no_position_attribute: bool,
    pub no_buffer: bool,
}

#[derive(Default)]
struct State {
    calls: Vec<Call>,
    next_id: Id,
    shader_kinds: Vec<(Id, u32)>,
    faults: Faults,
}

/// Fake context; clones share one call log.
#[derive(Clone, Default)]
pub struct RecordingGl {
    state: Rc<RefCell<State>>,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_faults(faults: Faults) -> Self {
        let gl = Self::default();
        gl.state.borrow_mut().faults = faults;
        gl
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    fn record(&self, call: Call) {
        self.state.borrow_mut().calls.push(call);
    }

    fn next_id(&self) -> Id {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        state.next_id
    }

    fn faults(&self) -> Faults {
        self.state.borrow().faults.clone()
    }

    fn kind_of(&self, shader: Id) -> Option<u32> {
        self.state
            .borrow()
            .shader_kinds
            .iter()
            .find(|(id, _)| *id == shader)
            .map(|(_, kind)| *kind)
    }
}

impl Gl for RecordingGl {
    type Shader = Id;
    type Program = Id;
    type Buffer = Id;
    type UniformLocation = String;

    fn create_shader(&self, kind: u32) -> Option<Id> {
        self.record(Call::CreateShader(kind));
        let id = self.next_id();
        self.state.borrow_mut().shader_kinds.push((id, kind));
        Some(id)
    }

    fn shader_source(&self, shader: &Id, source: &str) {
        self.record(Call::ShaderSource(*shader, source.to_owned()));
    }

    fn compile_shader(&self, shader: &Id) {
        self.record(Call::CompileShader(*shader));
    }

    fn shader_compile_status(&self, shader: &Id) -> bool {
        self.faults().failing_stage != self.kind_of(*shader)
    }

    fn shader_info_log(&self, _shader: &Id) -> String {
        "ERROR: 0:1: syntax error".to_owned()
    }

    fn delete_shader(&self, shader: &Id) {
        self.record(Call::DeleteShader(*shader));
    }

    fn create_program(&self) -> Option<Id> {
        self.record(Call::CreateProgram);
        Some(self.next_id())
    }

    fn delete_program(&self, program: &Id) {
        self.record(Call::DeleteProgram(*program));
    }

    fn attach_shader(&self, program: &Id, shader: &Id) {
        self.record(Call::AttachShader(*program, *shader));
    }

    fn link_program(&self, program: &Id) {
        self.record(Call::LinkProgram(*program));
    }

    fn program_link_status(&self, _program: &Id) -> bool {
        self.faults().link_log.is_none()
    }

    fn validate_program(&self, program: &Id) {
        self.record(Call::ValidateProgram(*program));
    }

    fn program_validate_status(&self, _program: &Id) -> bool {
        self.faults().validate_log.is_none()
    }

    fn program_info_log(&self, _program: &Id) -> String {
        let faults = self.faults();
        faults.link_log.or(faults.validate_log).unwrap_or_default()
    }

    fn use_program(&self, program: &Id) {
        self.record(Call::UseProgram(*program));
    }

    fn create_buffer(&self) -> Option<Id> {
        self.record(Call::CreateBuffer);
        if self.faults().no_buffer {
            None
        } else {
            Some(self.next_id())
        }
    }

    fn bind_buffer(&self, target: u32, buffer: &Id) {
        self.record(Call::BindBuffer(target, *buffer));
    }

    fn buffer_data_f32(&self, target: u32, data: &[f32], usage: u32) {
        self.record(Call::BufferData(target, data.to_vec(), usage));
    }

    fn attrib_location(&self, _program: &Id, name: &str) -> Option<u32> {
        (name == "position" && !self.faults().no_position_attribute).then_some(0)
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
        self.record(Call::VertexAttribPointer {
            index,
            size,
            kind,
            normalized,
            stride,
            offset,
        });
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(Call::EnableVertexAttribArray(index));
    }

    fn uniform_location(&self, _program: &Id, name: &str) -> Option<String> {
        Some(name.to_owned())
    }

    fn uniform1f(&self, location: Option<&String>, x: f32) {
        self.record(Call::Uniform1f(location.cloned(), x));
    }

    fn uniform2f(&self, location: Option<&String>, x: f32, y: f32) {
        self.record(Call::Uniform2f(location.cloned(), x, y));
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.record(Call::ClearColor([r, g, b, a]));
    }

    fn clear(&self, mask: u32) {
        self.record(Call::Clear(mask));
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        self.record(Call::DrawArrays(mode, first, count));
    }
}

/// Canvas that only knows the context names it was built with.
pub struct FakeCanvas {
    names: Vec<&'static str>,
    size: (u32, u32),
    gl: RecordingGl,
    requested: RefCell<Vec<String>>,
}

impl FakeCanvas {
    pub fn new(names: &[&'static str], size: (u32, u32), gl: RecordingGl) -> Self {
        Self {
            names: names.to_vec(),
            size,
            gl,
            requested: RefCell::new(Vec::new()),
        }
    }

    pub fn webgl(size: (u32, u32)) -> Self {
        Self::new(&["webgl"], size, RecordingGl::new())
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }

    pub fn gl(&self) -> &RecordingGl {
        &self.gl
    }
}

impl Surface for FakeCanvas {
    type Context = RecordingGl;

    fn context(&self, name: &str) -> Option<RecordingGl> {
        self.requested.borrow_mut().push(name.to_owned());
        self.names
            .iter()
            .any(|known| *known == name)
            .then(|| self.gl.clone())
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }
}

pub fn count(calls: &[Call], pred: impl Fn(&Call) -> bool) -> usize {
    calls.iter().filter(|c| pred(c)).count()
}

pub const VERTEX: u32 = gl::VERTEX_SHADER;
pub const FRAGMENT: u32 = gl::FRAGMENT_SHADER;
