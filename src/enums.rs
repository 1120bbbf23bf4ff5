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

//! Turning numeric GL constants back into names.

/// Names of the shader-related GL constants.
///
/// Extension aliases are listed next to their core names, so a lookup may return both.
pub const GL_ENUM_NAMES: &[(&str, u32)] = &[
    ("FRAGMENT_SHADER", 0x8B30),
    ("VERTEX_SHADER", 0x8B31),
    ("GEOMETRY_SHADER", 0x8DD9),
    ("GEOMETRY_SHADER_EXT", 0x8DD9),
    ("TESS_EVALUATION_SHADER", 0x8E87),
    ("TESS_EVALUATION_SHADER_EXT", 0x8E87),
    ("TESS_CONTROL_SHADER", 0x8E88),
    ("TESS_CONTROL_SHADER_EXT", 0x8E88),
    ("COMPUTE_SHADER", 0x91B9),
    ("SHADER_TYPE", 0x8B4F),
    ("DELETE_STATUS", 0x8B80),
    ("COMPILE_STATUS", 0x8B81),
    ("LINK_STATUS", 0x8B82),
    ("VALIDATE_STATUS", 0x8B83),
    ("INFO_LOG_LENGTH", 0x8B84),
    ("ATTACHED_SHADERS", 0x8B85),
    ("SHADER_SOURCE_LENGTH", 0x8B88),
];

/// Render `value` using every name in `names` that maps to it.
///
/// Aliases are joined with `" | "` in table order. If nothing matches, the decimal form of
/// `value` is returned instead.
pub fn enum_to_string(names: &[(&str, u32)], value: u32) -> String {
    let matches = names
        .iter()
        .filter(|(_, v)| *v == value)
        .map(|(name, _)| *name)
        .collect::<Vec<_>>();

    if matches.is_empty() {
        value.to_string()
    } else {
        matches.join(" | ")
    }
}
