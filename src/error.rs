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

//! The error type for shader and program construction.

use thiserror::Error;

/// An error that occurred while building a shader or a program.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The context could not allocate a shader object.
    #[error("failed to create shader: {0}")]
    ShaderCreation(String),

    /// The shader failed to compile.
    #[error("failed to compile shader: {log}\n{annotated}")]
    ShaderCompile {
        /// The compiler's info log.
        log: String,

        /// The source code, numbered and annotated with the errors from `log`.
        annotated: String,
    },

    /// The context could not allocate a program object.
    #[error("failed to create program: {0}")]
    ProgramCreation(String),

    /// The program failed to link.
    #[error("error in program linking: {log}\n{diagnostic}")]
    ProgramLink {
        /// The linker's info log.
        log: String,

        /// Every attached shader, labeled by stage and annotated with `log`.
        diagnostic: String,
    },

    /// No element exists with the given identifier.
    #[error("unknown shader element `{0}`")]
    ElementNotFound(String),

    /// The element's content type does not name a shader stage.
    #[error("unknown shader type `{0}`")]
    UnknownStage(String),

    /// Explicit attribute locations were given, but not one per attribute.
    #[error("{attributes} attributes were given {locations} locations")]
    AttributeMismatch {
        /// The number of attribute names.
        attributes: usize,

        /// The number of locations.
        locations: usize,
    },
}

/// The kind of an [`Error`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// See [`Error::ShaderCreation`].
    ShaderCreation,

    /// See [`Error::ShaderCompile`].
    ShaderCompile,

    /// See [`Error::ProgramCreation`].
    ProgramCreation,

    /// See [`Error::ProgramLink`].
    ProgramLink,

    /// See [`Error::ElementNotFound`].
    ElementNotFound,

    /// See [`Error::UnknownStage`].
    UnknownStage,

    /// See [`Error::AttributeMismatch`].
    AttributeMismatch,
}

impl Error {
    /// Get the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ShaderCreation(_) => ErrorKind::ShaderCreation,
            Error::ShaderCompile { .. } => ErrorKind::ShaderCompile,
            Error::ProgramCreation(_) => ErrorKind::ProgramCreation,
            Error::ProgramLink { .. } => ErrorKind::ProgramLink,
            Error::ElementNotFound(_) => ErrorKind::ElementNotFound,
            Error::UnknownStage(_) => ErrorKind::UnknownStage,
            Error::AttributeMismatch { .. } => ErrorKind::AttributeMismatch,
        }
    }
}

/// A result type defaulting to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
