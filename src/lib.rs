// SPDX-License-Identifier: LGPL-3.0-or-later OR MPL-2.0
// This file is a part of `shader-builder`.
//
// `shader-builder` is free software: you can redistribute it and/or modify it under the
// terms of either:
//
// * GNU Lesser General Public License as published by the Free Software Foundation, either
//   version 3 of the License, or (at your option) any later version.
// * Mozilla Public License as published by the Mozilla Foundation, version 2.
//
// `shader-builder` is distributed in the hope that it will be useful, but WITHOUT ANY
// WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR
// PURPOSE. See the GNU Lesser General Public License or the Mozilla Public License for more
// details.
//
// You should have received a copy of the GNU Lesser General Public License and the Mozilla
// Public License along with `shader-builder`. If not, see <https://www.gnu.org/licenses/>.

//! Compile and link GPU shader programs, with readable diagnostics.
//!
//! The centerpiece of this crate is the [`ShaderContext`] trait, which abstracts over the
//! shader and program entry points of an OpenGL or WebGL context. On top of it,
//! [`compile_shader`] and [`link_program`] build [`Shader`]s and [`Program`]s. When the
//! driver rejects a shader, the returned [`Error`] carries the source code with every line
//! numbered and the offending lines annotated with the driver's error messages.
//!
//! An implementation of [`ShaderContext`] for [`glow`] lives in the `shader-builder-glow`
//! crate.
//!
//! [`glow`]: https://crates.io/crates/glow

mod annotate;
mod context;
mod element;
mod enums;
mod error;
mod resources;

pub use annotate::annotate_source;
pub use context::{ShaderContext, FRAGMENT_SHADER, VERTEX_SHADER};
pub use element::{
    stage_from_content_type, ElementSource, ShaderElement, FRAGMENT_CONTENT_TYPE,
    VERTEX_CONTENT_TYPE,
};
pub use enums::{enum_to_string, GL_ENUM_NAMES};
pub use error::{Error, ErrorKind, Result};
pub use resources::{Program, Shader};

use resources::CallOnDrop;

use std::mem;

/// Options for linking a program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkOptions {
    /// Vertex attributes to bind before linking.
    ///
    /// When empty, no attribute locations are bound and the linker assigns them.
    pub attributes: Vec<String>,

    /// Explicit locations for `attributes`, one per attribute.
    ///
    /// When `None`, the `i`th attribute is bound to location `i`.
    pub locations: Option<Vec<u32>>,
}

impl LinkOptions {
    /// Create a new set of options that binds nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind these attributes, in order.
    pub fn with_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes = attributes.into_iter().map(Into::into).collect();
        self
    }

    /// Bind the attributes to these locations instead of their positions.
    pub fn with_locations(mut self, locations: impl IntoIterator<Item = u32>) -> Self {
        self.locations = Some(locations.into_iter().collect());
        self
    }

    /// Pair every attribute with its location.
    fn bindings(&self) -> Result<Vec<(u32, &str)>> {
        match &self.locations {
            Some(locations) if locations.len() != self.attributes.len() => {
                Err(Error::AttributeMismatch {
                    attributes: self.attributes.len(),
                    locations: locations.len(),
                })
            }
            Some(locations) => Ok(locations
                .iter()
                .copied()
                .zip(self.attributes.iter().map(String::as_str))
                .collect()),
            None => Ok((0..)
                .zip(self.attributes.iter().map(String::as_str))
                .collect()),
        }
    }
}

/// Compile `source` as a shader of the given stage.
///
/// If compilation fails, the shader object is released and the error contains the source
/// annotated with the compiler's log.
pub fn compile_shader<C: ShaderContext + ?Sized>(
    context: &C,
    source: &str,
    stage: u32,
) -> Result<Shader<C>> {
    let shader = context
        .create_shader(stage)
        .map_err(Error::ShaderCreation)?;
    let call_on_drop = CallOnDrop(|| context.delete_shader(shader));

    context.shader_source(shader, source);
    context.compile_shader(shader);

    if !context.shader_compile_status(shader) {
        let log = context.shader_info_log(shader);
        tracing::warn!(
            stage = %enum_to_string(context.enum_names(), stage),
            "failed to compile shader: {}",
            log
        );

        let annotated = annotate_source(source, &log).join("\n");
        return Err(Error::ShaderCompile { log, annotated });
    }

    mem::forget(call_on_drop);
    tracing::debug!(
        stage = %enum_to_string(context.enum_names(), stage),
        "compiled shader"
    );

    Ok(Shader::from_raw(shader, stage, source.to_owned()))
}

/// Link the given shaders into a program.
///
/// Attributes in `options` are bound before linking. If linking fails, the program object is
/// released and the error lists every shader, labeled by its stage and annotated with the
/// linker's log. The shaders themselves are left alone either way.
pub fn link_program<'a, C, I>(
    context: &C,
    shaders: I,
    options: &LinkOptions,
) -> Result<Program<C>>
where
    C: ShaderContext + ?Sized + 'a,
    I: IntoIterator<Item = &'a Shader<C>>,
{
    let shaders = shaders.into_iter().collect::<Vec<_>>();
    let bindings = options.bindings()?;

    let program = context
        .create_program()
        .map_err(Error::ProgramCreation)?;
    let call_on_drop = CallOnDrop(|| context.delete_program(program));

    for shader in &shaders {
        context.attach_shader(program, shader.raw());
    }

    for (location, name) in bindings {
        tracing::trace!("binding attribute {} to location {}", name, location);
        context.bind_attrib_location(program, location, name);
    }

    context.link_program(program);

    if !context.program_link_status(program) {
        let log = context.program_info_log(program);
        tracing::warn!("failed to link program: {}", log);

        let diagnostic = shaders
            .iter()
            .map(|shader| {
                format!(
                    "{}:\n{}",
                    enum_to_string(context.enum_names(), shader.stage()),
                    annotate_source(shader.source(), &log).join("\n")
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        return Err(Error::ProgramLink { log, diagnostic });
    }

    mem::forget(call_on_drop);
    tracing::debug!(shaders = shaders.len(), "linked program");

    Ok(Program::from_raw(program))
}

/// Compile the shader held by the element with the given identifier.
///
/// When `stage` is `None`, it is inferred from the element's content type; see
/// [`stage_from_content_type`].
pub fn load_shader_from_element<C, E>(
    context: &C,
    elements: &E,
    element_id: &str,
    stage: Option<u32>,
) -> Result<Shader<C>>
where
    C: ShaderContext + ?Sized,
    E: ElementSource + ?Sized,
{
    let element = elements
        .element_by_id(element_id)
        .ok_or_else(|| Error::ElementNotFound(element_id.to_owned()))?;

    let stage = match stage {
        Some(stage) => stage,
        None => element
            .stage()
            .ok_or_else(|| Error::UnknownStage(element.content_type.clone()))?,
    };

    compile_shader(context, &element.text, stage)
}

/// Compile a vertex and a fragment shader and link them into a program.
///
/// The intermediate shaders are released whether or not linking succeeds.
pub fn compile_program<C: ShaderContext + ?Sized>(
    context: &C,
    vertex_source: &str,
    fragment_source: &str,
    options: &LinkOptions,
) -> Result<Program<C>> {
    let vertex = compile_shader(context, vertex_source, VERTEX_SHADER)?;
    let vertex_raw = vertex.raw();
    let _delete_vertex = CallOnDrop(|| context.delete_shader(vertex_raw));

    let fragment = compile_shader(context, fragment_source, FRAGMENT_SHADER)?;
    let fragment_raw = fragment.raw();
    let _delete_fragment = CallOnDrop(|| context.delete_shader(fragment_raw));

    link_program(context, [&vertex, &fragment], options)
}
