use crate::error::{SetupError, ShaderStage};
use crate::gl::Gl;

/// Compiles both stages, links them and validates the result.
///
/// The shader objects are flagged for deletion before returning, on success
/// and on failure alike; a linked program keeps its attached shaders alive.
/// A program that fails to link or validate is deleted too.
pub fn build_program<G: Gl>(
    gl: &G,
    vertex_source: &str,
    fragment_source: &str,
) -> Result<G::Program, SetupError> {
    let vertex = compile_shader(gl, ShaderStage::Vertex, vertex_source)?;
    let fragment = match compile_shader(gl, ShaderStage::Fragment, fragment_source) {
        Ok(shader) => shader,
        Err(err) => {
            gl.delete_shader(&vertex);
            return Err(err);
        }
    };

    let linked = link_program(gl, &vertex, &fragment);
    gl.delete_shader(&vertex);
    gl.delete_shader(&fragment);
    linked
}

fn link_program<G: Gl>(
    gl: &G,
    vertex: &G::Shader,
    fragment: &G::Shader,
) -> Result<G::Program, SetupError> {
    let program = gl
        .create_program()
        .ok_or(SetupError::ResourceCreation("program"))?;
    gl.attach_shader(&program, vertex);
    gl.attach_shader(&program, fragment);

    gl.link_program(&program);
    if !gl.program_link_status(&program) {
        let message = gl.program_info_log(&program);
        gl.delete_program(&program);
        return Err(SetupError::ProgramLink { message });
    }

    gl.validate_program(&program);
    if !gl.program_validate_status(&program) {
        let message = gl.program_info_log(&program);
        gl.delete_program(&program);
        return Err(SetupError::ProgramValidation { message });
    }

    log::debug!("program linked and validated");
    Ok(program)
}

fn compile_shader<G: Gl>(
    gl: &G,
    stage: ShaderStage,
    source: &str,
) -> Result<G::Shader, SetupError> {
    let shader = gl
        .create_shader(stage.gl_kind())
        .ok_or(SetupError::ResourceCreation("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl.shader_compile_status(&shader) {
        Ok(shader)
    } else {
        let message = gl.shader_info_log(&shader);
        gl.delete_shader(&shader);
        Err(SetupError::ShaderCompile { stage, message })
    }
}
