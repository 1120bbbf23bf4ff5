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

//! Shader source embedded in markup elements.

use crate::context::{FRAGMENT_SHADER, VERTEX_SHADER};

use std::collections::HashMap as StdHashMap;
use std::hash::BuildHasher;

/// The content type of an element holding vertex shader source.
pub const VERTEX_CONTENT_TYPE: &str = "x-shader/x-vertex";

/// The content type of an element holding fragment shader source.
pub const FRAGMENT_CONTENT_TYPE: &str = "x-shader/x-fragment";

/// An element that holds shader source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderElement {
    /// The declared content type, i.e. the `type` attribute of a `<script>` tag.
    pub content_type: String,

    /// The text content of the element.
    pub text: String,
}

impl ShaderElement {
    /// Create a new element.
    pub fn new(content_type: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            text: text.into(),
        }
    }

    /// The shader stage implied by this element's content type.
    pub fn stage(&self) -> Option<u32> {
        stage_from_content_type(&self.content_type)
    }
}

/// Somewhere to look up elements by identifier.
pub trait ElementSource {
    /// Find the element with the given identifier.
    fn element_by_id(&self, id: &str) -> Option<ShaderElement>;
}

impl<E: ElementSource + ?Sized> ElementSource for &E {
    fn element_by_id(&self, id: &str) -> Option<ShaderElement> {
        (**self).element_by_id(id)
    }
}

impl<S: BuildHasher> ElementSource for StdHashMap<String, ShaderElement, S> {
    fn element_by_id(&self, id: &str) -> Option<ShaderElement> {
        self.get(id).cloned()
    }
}

impl<S: BuildHasher> ElementSource for hashbrown::HashMap<String, ShaderElement, S> {
    fn element_by_id(&self, id: &str) -> Option<ShaderElement> {
        self.get(id).cloned()
    }
}

/// Infer a shader stage from an element's content type.
pub fn stage_from_content_type(content_type: &str) -> Option<u32> {
    match content_type {
        VERTEX_CONTENT_TYPE => Some(VERTEX_SHADER),
        FRAGMENT_CONTENT_TYPE => Some(FRAGMENT_SHADER),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_content_types() {
        assert_eq!(stage_from_content_type("x-shader/x-vertex"), Some(VERTEX_SHADER));
        assert_eq!(
            stage_from_content_type("x-shader/x-fragment"),
            Some(FRAGMENT_SHADER)
        );
    }

    #[test]
    fn unknown_content_types() {
        assert_eq!(stage_from_content_type("text/javascript"), None);
        assert_eq!(stage_from_content_type("X-SHADER/X-VERTEX"), None);
        assert_eq!(stage_from_content_type(""), None);
    }

    #[test]
    fn map_lookup() {
        let mut elements = StdHashMap::new();
        elements.insert(
            "vs".to_string(),
            ShaderElement::new(VERTEX_CONTENT_TYPE, "void main() {}"),
        );

        let element = elements.element_by_id("vs").unwrap();
        assert_eq!(element.stage(), Some(VERTEX_SHADER));
        assert_eq!(element.text, "void main() {}");
        assert!(elements.element_by_id("fs").is_none());
    }

    #[test]
    fn hashbrown_map_lookup() {
        let mut elements = hashbrown::HashMap::with_hasher(ahash::RandomState::new());
        elements.insert(
            "fs".to_string(),
            ShaderElement::new(FRAGMENT_CONTENT_TYPE, "void main() {}"),
        );

        let element = elements.element_by_id("fs").unwrap();
        assert_eq!(element.stage(), Some(FRAGMENT_SHADER));
        assert!(elements.element_by_id("vs").is_none());
    }
}
