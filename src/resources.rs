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

//! Owned wrappers around shader and program objects.

use crate::context::ShaderContext;

use std::fmt;

macro_rules! define_resource_wrappers {
    ($($(#[$meta:meta])* $name:ident($res:ident) { $($field:ident: $ty:ty),* }),* $(,)?) => {
        $(
            $(#[$meta])*
            pub struct $name<C: ShaderContext + ?Sized> {
                resource: C::$res,
                $($field: $ty,)*
            }

            impl<C: ShaderContext + ?Sized> fmt::Debug for $name<C> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.debug_struct(stringify!($name))
                        $(.field(stringify!($field), &self.$field))*
                        .finish_non_exhaustive()
                }
            }

            impl<C: ShaderContext + ?Sized> $name<C> {
                /// Get the raw handle.
                pub fn raw(&self) -> C::$res {
                    self.resource
                }

                /// Give up ownership of the raw handle without releasing it.
                pub fn into_raw(self) -> C::$res {
                    self.resource
                }
            }
        )*
    };
}

define_resource_wrappers! {
    /// A successfully compiled shader.
    ///
    /// Releasing the shader is up to the caller, through [`Shader::delete`].
    Shader(Shader) { stage: u32, source: String },

    /// A successfully linked program.
    ///
    /// Releasing the program is up to the caller, through [`Program::delete`].
    Program(Program) {},
}

impl<C: ShaderContext + ?Sized> Shader<C> {
    pub(crate) fn from_raw(resource: C::Shader, stage: u32, source: String) -> Self {
        Self {
            resource,
            stage,
            source,
        }
    }

    /// The stage this shader was compiled for.
    pub fn stage(&self) -> u32 {
        self.stage
    }

    /// The source code this shader was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Release the shader.
    pub fn delete(self, context: &C) {
        context.delete_shader(self.resource);
    }
}

impl<C: ShaderContext + ?Sized> Program<C> {
    pub(crate) fn from_raw(resource: C::Program) -> Self {
        Self { resource }
    }

    /// Release the program.
    pub fn delete(self, context: &C) {
        context.delete_program(self.resource);
    }
}

/// Runs a closure on drop, unless forgotten.
pub(crate) struct CallOnDrop<F: FnMut()>(pub(crate) F);

impl<F: FnMut()> Drop for CallOnDrop<F> {
    fn drop(&mut self) {
        (self.0)();
    }
}
