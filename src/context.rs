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

//! Defines the graphics capability that shaders are built against.

use crate::enums::GL_ENUM_NAMES;

/// The stage constant for vertex shaders.
pub const VERTEX_SHADER: u32 = 0x8B31;

/// The stage constant for fragment shaders.
pub const FRAGMENT_SHADER: u32 = 0x8B30;

/// A context capable of compiling shaders and linking programs.
///
/// This mirrors the shader and program entry points of OpenGL and WebGL. Creation failures
/// are reported as plain strings, the same way [`glow`] reports them.
///
/// [`glow`]: https://crates.io/crates/glow
pub trait ShaderContext {
    /// The raw handle of a shader object.
    type Shader: Copy;

    /// The raw handle of a program object.
    type Program: Copy;

    /// Create a new shader object for the given stage.
    fn create_shader(&self, stage: u32) -> Result<Self::Shader, String>;

    /// Release a shader object.
    fn delete_shader(&self, shader: Self::Shader);

    /// Replace the source code of a shader object.
    fn shader_source(&self, shader: Self::Shader, source: &str);

    /// Compile a shader object.
    fn compile_shader(&self, shader: Self::Shader);

    /// Whether the last compilation of this shader succeeded.
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;

    /// The info log of a shader object.
    fn shader_info_log(&self, shader: Self::Shader) -> String;

    /// Create a new program object.
    fn create_program(&self) -> Result<Self::Program, String>;

    /// Release a program object.
    fn delete_program(&self, program: Self::Program);

    /// Attach a shader object to a program object.
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);

    /// Bind a vertex attribute name to a location.
    ///
    /// Only takes effect on the next link.
    fn bind_attrib_location(&self, program: Self::Program, index: u32, name: &str);

    /// Link a program object.
    fn link_program(&self, program: Self::Program);

    /// Whether the last link of this program succeeded.
    fn program_link_status(&self, program: Self::Program) -> bool;

    /// The info log of a program object.
    fn program_info_log(&self, program: Self::Program) -> String;

    /// Names of the numeric constants this context understands.
    ///
    /// Used to render stage constants in diagnostics. Several names may share a value.
    fn enum_names(&self) -> &[(&'static str, u32)] {
        GL_ENUM_NAMES
    }
}

impl<C: ShaderContext + ?Sized> ShaderContext for &C {
    type Shader = C::Shader;
    type Program = C::Program;

    fn create_shader(&self, stage: u32) -> Result<Self::Shader, String> {
        (**self).create_shader(stage)
    }

    fn delete_shader(&self, shader: Self::Shader) {
        (**self).delete_shader(shader)
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        (**self).shader_source(shader, source)
    }

    fn compile_shader(&self, shader: Self::Shader) {
        (**self).compile_shader(shader)
    }

    fn shader_compile_status(&self, shader: Self::Shader) -> bool {
        (**self).shader_compile_status(shader)
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        (**self).shader_info_log(shader)
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        (**self).create_program()
    }

    fn delete_program(&self, program: Self::Program) {
        (**self).delete_program(program)
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        (**self).attach_shader(program, shader)
    }

    fn bind_attrib_location(&self, program: Self::Program, index: u32, name: &str) {
        (**self).bind_attrib_location(program, index, name)
    }

    fn link_program(&self, program: Self::Program) {
        (**self).link_program(program)
    }

    fn program_link_status(&self, program: Self::Program) -> bool {
        (**self).program_link_status(program)
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        (**self).program_info_log(program)
    }

    fn enum_names(&self) -> &[(&'static str, u32)] {
        (**self).enum_names()
    }
}
