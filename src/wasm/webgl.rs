use std::collections::HashMap;

use js_sys::{Float32Array, Object, Reflect, Uint32Array};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlUniformLocation, WebGlVertexArrayObject,
};

use crate::error::RenderError;
use crate::host::Graphics;
use crate::scene::{Blend, FrameUniforms, Layer, Primitive};
use crate::shaders::{ShaderKind, ATTR_AUX, ATTR_POSITION};

struct Uniforms {
    projection: Option<WebGlUniformLocation>,
    view: Option<WebGlUniformLocation>,
    model: Option<WebGlUniformLocation>,
    time: Option<WebGlUniformLocation>,
    pixel_ratio: Option<WebGlUniformLocation>,
    color: Option<WebGlUniformLocation>,
    opacity: Option<WebGlUniformLocation>,
    params: Option<WebGlUniformLocation>,
    point_size: Option<WebGlUniformLocation>,
    point_scale: Option<WebGlUniformLocation>,
}

impl Uniforms {
    fn locate(gl: &GL, program: &WebGlProgram) -> Self {
        let at = |name: &str| gl.get_uniform_location(program, name);
        Self {
            projection: at("uProjection"),
            view: at("uView"),
            model: at("uModel"),
            time: at("uTime"),
            pixel_ratio: at("uPixelRatio"),
            color: at("uColor"),
            opacity: at("uOpacity"),
            params: at("uParams"),
            point_size: at("uPointSize"),
            point_scale: at("uPointScale"),
        }
    }
}

struct Program {
    program: WebGlProgram,
    uniforms: Uniforms,
}

/// GPU-side state for one scene layer.
struct GpuLayer {
    shader: ShaderKind,
    vao: WebGlVertexArrayObject,
    positions: WebGlBuffer,
    count: i32,
    indexed: bool,
}

/// WebGL2 implementation of [`Graphics`] over one canvas.
pub struct WebGlGraphics {
    canvas: HtmlCanvasElement,
    gl: GL,
    programs: HashMap<ShaderKind, Program>,
    layers: Vec<GpuLayer>,
}

impl WebGlGraphics {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let options = Object::new();
        Reflect::set(&options, &"antialias".into(), &JsValue::TRUE)?;
        Reflect::set(&options, &"alpha".into(), &JsValue::TRUE)?;
        Reflect::set(&options, &"premultipliedAlpha".into(), &JsValue::TRUE)?;
        Reflect::set(&options, &"powerPreference".into(), &"high-performance".into())?;

        let gl: GL = canvas
            .get_context_with_context_options("webgl2", &options)?
            .ok_or("WebGL2 not supported")?
            .dyn_into()?;
        Ok(Self {
            canvas,
            gl,
            programs: HashMap::new(),
            layers: Vec::new(),
        })
    }

    fn program(&mut self, kind: ShaderKind, name: &'static str) -> Result<(), RenderError> {
        if self.programs.contains_key(&kind) {
            return Ok(());
        }
        let (vert_src, frag_src) = kind.sources();
        let vert = compile(&self.gl, GL::VERTEX_SHADER, vert_src, name)?;
        let frag = compile(&self.gl, GL::FRAGMENT_SHADER, frag_src, name)?;
        let program = link(&self.gl, &vert, &frag, name)?;
        let uniforms = Uniforms::locate(&self.gl, &program);
        self.programs.insert(kind, Program { program, uniforms });
        Ok(())
    }

    fn upload(&self, layer: &Layer) -> Result<GpuLayer, RenderError> {
        let gl = &self.gl;
        let vao = gl
            .create_vertex_array()
            .ok_or(RenderError::Allocation("vertex array"))?;
        gl.bind_vertex_array(Some(&vao));

        let usage = if layer.dynamic { GL::DYNAMIC_DRAW } else { GL::STATIC_DRAW };
        let positions = array_buffer(gl, &layer.positions, usage)?;
        gl.enable_vertex_attrib_array(ATTR_POSITION);
        gl.vertex_attrib_pointer_with_i32(ATTR_POSITION, 3, GL::FLOAT, false, 0, 0);

        if let Some(aux) = &layer.aux {
            array_buffer(gl, &aux.data, GL::STATIC_DRAW)?;
            gl.enable_vertex_attrib_array(ATTR_AUX);
            gl.vertex_attrib_pointer_with_i32(ATTR_AUX, aux.size, GL::FLOAT, false, 0, 0);
        }

        if let Some(indices) = &layer.indices {
            let buffer = gl
                .create_buffer()
                .ok_or(RenderError::Allocation("index buffer"))?;
            gl.bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&buffer));
            let data = Uint32Array::from(indices.as_slice());
            gl.buffer_data_with_array_buffer_view(GL::ELEMENT_ARRAY_BUFFER, &data, GL::STATIC_DRAW);
        }

        gl.bind_vertex_array(None);
        Ok(GpuLayer {
            shader: layer.shader,
            vao,
            positions,
            count: layer.element_count() as i32,
            indexed: layer.indices.is_some(),
        })
    }
}

fn array_buffer(gl: &GL, data: &[f32], usage: u32) -> Result<WebGlBuffer, RenderError> {
    let buffer = gl
        .create_buffer()
        .ok_or(RenderError::Allocation("vertex buffer"))?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    let view = Float32Array::from(data);
    gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &view, usage);
    Ok(buffer)
}

fn compile(gl: &GL, kind: u32, source: &str, layer: &'static str) -> Result<WebGlShader, RenderError> {
    let shader = gl
        .create_shader(kind)
        .ok_or(RenderError::Allocation("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        Err(RenderError::Shader { layer, log })
    }
}

fn link(
    gl: &GL,
    vert: &WebGlShader,
    frag: &WebGlShader,
    layer: &'static str,
) -> Result<WebGlProgram, RenderError> {
    let program = gl
        .create_program()
        .ok_or(RenderError::Allocation("program"))?;
    gl.attach_shader(&program, vert);
    gl.attach_shader(&program, frag);
    gl.link_program(&program);
    if gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        Err(RenderError::Link { layer, log })
    }
}

impl Graphics for WebGlGraphics {
    fn set_buffer_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.gl.viewport(0, 0, width as i32, height as i32);
    }

    fn prepare(&mut self, layers: &[Layer]) -> Result<(), RenderError> {
        for layer in layers {
            self.program(layer.shader, layer.name)?;
        }
        self.layers = layers
            .iter()
            .map(|layer| self.upload(layer))
            .collect::<Result<_, _>>()?;

        let gl = &self.gl;
        gl.enable(GL::DEPTH_TEST);
        gl.clear_color(0.0, 0.0, 0.0, 0.0);
        Ok(())
    }

    fn draw(&mut self, frame: &FrameUniforms, layers: &[Layer]) -> Result<(), RenderError> {
        let gl = &self.gl;
        gl.depth_mask(true);
        gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);

        let projection = frame.projection.to_cols_array();
        let view = frame.view.to_cols_array();

        for (layer, gpu) in layers.iter().zip(&self.layers) {
            let program = self
                .programs
                .get(&gpu.shader)
                .ok_or_else(|| RenderError::Js(format!("no program for {}", layer.name)))?;
            let u = &program.uniforms;
            gl.use_program(Some(&program.program));
            gl.bind_vertex_array(Some(&gpu.vao));

            if layer.dynamic {
                gl.bind_buffer(GL::ARRAY_BUFFER, Some(&gpu.positions));
                let data = Float32Array::from(layer.positions.as_slice());
                gl.buffer_sub_data_with_i32_and_array_buffer_view(GL::ARRAY_BUFFER, 0, &data);
            }

            match layer.blend {
                Blend::Normal => {
                    gl.enable(GL::BLEND);
                    gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA);
                    gl.depth_mask(true);
                }
                Blend::Additive => {
                    gl.enable(GL::BLEND);
                    gl.blend_func(GL::SRC_ALPHA, GL::ONE);
                    gl.depth_mask(false);
                }
            }

            gl.uniform_matrix4fv_with_f32_array(u.projection.as_ref(), false, &projection);
            gl.uniform_matrix4fv_with_f32_array(u.view.as_ref(), false, &view);
            gl.uniform_matrix4fv_with_f32_array(u.model.as_ref(), false, &layer.model.to_cols_array());
            gl.uniform1f(u.time.as_ref(), frame.time);
            gl.uniform1f(u.pixel_ratio.as_ref(), frame.pixel_ratio);
            let [r, g, b] = layer.color;
            gl.uniform3f(u.color.as_ref(), r, g, b);
            gl.uniform1f(u.opacity.as_ref(), layer.opacity);
            let [p0, p1, p2, p3] = layer.params;
            gl.uniform4f(u.params.as_ref(), p0, p1, p2, p3);
            gl.uniform1f(u.point_size.as_ref(), layer.point_size);
            gl.uniform1f(u.point_scale.as_ref(), layer.point_scale);

            let mode = match layer.primitive {
                Primitive::Points => GL::POINTS,
                Primitive::Triangles => GL::TRIANGLES,
                Primitive::Lines => GL::LINES,
            };
            if gpu.indexed {
                gl.draw_elements_with_i32(mode, gpu.count, GL::UNSIGNED_INT, 0);
            } else {
                gl.draw_arrays(mode, 0, gpu.count);
            }
        }

        gl.bind_vertex_array(None);
        Ok(())
    }
}
