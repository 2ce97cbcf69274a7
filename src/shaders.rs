//! Embedded GLSL ES 1.00 sources and the quad they are drawn over.

pub const VERTEX_SHADER: &str = r#"
precision mediump float;
attribute vec2 position;
void main() {
  gl_Position = vec4(position, 0.5, 1.0);
}
"#;

// `white` is opaque red and `transparent` is white with zero alpha. The
// names do not match the values; the rendered output depends on the values.
pub const FRAGMENT_SHADER: &str = r#"
precision mediump float;
uniform vec2 screenSize;
uniform float phase;
vec4 white = vec4(1.0, 0.0, 0.0, 1.0);
vec4 transparent = vec4(1.0, 1.0, 1.0, 0.0);
void main() {
  float x = gl_FragCoord.x / screenSize.x;
  float y = 2.0 * gl_FragCoord.y / screenSize.y - 1.0;
  float A = sin(x + phase);
  if (abs(y) < abs(A))
    gl_FragColor = sin(y * 200.0) * white;
}
"#;

pub const COMPONENTS_PER_VERTEX: i32 = 2;
pub const VERTEX_COUNT: i32 = 4;

/// Full clip-space quad, drawn as a triangle fan.
pub const QUAD_VERTICES: [f32; 8] = [
    -1.0, -1.0, //
    1.0, -1.0, //
    1.0, 1.0, //
    -1.0, 1.0,
];
