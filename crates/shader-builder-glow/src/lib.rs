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

//! A [`shader-builder`] backend that uses the [`glow`] crate.
//!
//! [`GlowContext`] wraps anything implementing [`HasContext`] so that it can be handed to
//! [`shader_builder::compile_shader`] and friends. On the web, [`DocumentElements`] lets
//! shaders be loaded from `<script type="x-shader/x-vertex">` style elements.
//!
//! [`shader-builder`]: https://crates.io/crates/shader-builder
//! [`glow`]: https://crates.io/crates/glow

use glow::HasContext;
use shader_builder::ShaderContext;

use std::fmt;

#[cfg(target_arch = "wasm32")]
pub use web::DocumentElements;

/// A wrapper around a [`glow`] context.
///
/// [`glow`]: https://crates.io/crates/glow
pub struct GlowContext<H: HasContext + ?Sized> {
    /// The underlying context.
    context: H,
}

impl<H: HasContext> GlowContext<H> {
    /// Wrap a [`glow`] context.
    ///
    /// # Safety
    ///
    /// The context must be current whenever this wrapper is used to build shaders or
    /// programs.
    ///
    /// [`glow`]: https://crates.io/crates/glow
    pub unsafe fn new(context: H) -> Self {
        Self { context }
    }
}

impl<H: HasContext + ?Sized> fmt::Debug for GlowContext<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlowContext").finish_non_exhaustive()
    }
}

impl<H: HasContext + ?Sized> ShaderContext for GlowContext<H> {
    type Shader = H::Shader;
    type Program = H::Program;

    fn create_shader(&self, stage: u32) -> Result<Self::Shader, String> {
        unsafe { self.context.create_shader(stage) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { self.context.delete_shader(shader) }
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        unsafe { self.context.shader_source(shader, source) }
    }

    fn compile_shader(&self, shader: Self::Shader) {
        unsafe {
            self.context.compile_shader(shader);
        }

        gl_error(&self.context);
    }

    fn shader_compile_status(&self, shader: Self::Shader) -> bool {
        unsafe { self.context.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        unsafe { self.context.get_shader_info_log(shader) }
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        unsafe { self.context.create_program() }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { self.context.delete_program(program) }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { self.context.attach_shader(program, shader) }
    }

    fn bind_attrib_location(&self, program: Self::Program, index: u32, name: &str) {
        unsafe { self.context.bind_attrib_location(program, index, name) }
    }

    fn link_program(&self, program: Self::Program) {
        unsafe {
            self.context.link_program(program);
        }

        gl_error(&self.context);
    }

    fn program_link_status(&self, program: Self::Program) -> bool {
        unsafe { self.context.get_program_link_status(program) }
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        unsafe { self.context.get_program_info_log(program) }
    }
}

/// Log any pending GL error.
fn gl_error(h: &(impl HasContext + ?Sized)) {
    let err = unsafe { h.get_error() };

    if err != glow::NO_ERROR {
        let error_str = match err {
            glow::INVALID_ENUM => "GL_INVALID_ENUM",
            glow::INVALID_VALUE => "GL_INVALID_VALUE",
            glow::INVALID_OPERATION => "GL_INVALID_OPERATION",
            glow::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
            glow::CONTEXT_LOST => "GL_CONTEXT_LOST",
            _ => "Unknown GL error",
        };

        tracing::error!("GL error: {}", error_str)
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use shader_builder::{ElementSource, ShaderElement};

    /// Looks up shader elements in a DOM document.
    ///
    /// The content type comes from the element's `type` attribute, the source from its text
    /// content.
    #[derive(Debug, Clone, Copy)]
    pub struct DocumentElements<'a>(pub &'a web_sys::Document);

    impl ElementSource for DocumentElements<'_> {
        fn element_by_id(&self, id: &str) -> Option<ShaderElement> {
            let element = self.0.get_element_by_id(id)?;

            Some(ShaderElement {
                content_type: element.get_attribute("type").unwrap_or_default(),
                text: element.text_content().unwrap_or_default(),
            })
        }
    }
}
