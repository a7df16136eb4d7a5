/// Material description applied to scene proxies.
///
/// A Material is pure data: a shader name, a few common surface settings
/// and a list of named typed parameters. The renderer backend decides how
/// to turn it into GPU state; the façade only passes it along.

use rustc_hash::FxHashMap;
use glam::Vec4;
use crate::error::{Error, Result};

// ===== SHADER NAMES =====

/// Lit shader for meshes with normals
pub const SHADER_DEFAULT_LIT: &str = "defaultLit";
/// Unlit shader (point clouds, gizmos)
pub const SHADER_DEFAULT_UNLIT: &str = "defaultUnlit";

// ===== PARAMETER VALUES =====

/// A typed parameter value for the material
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Float(f32),
    Vec2([f32; 2]),
    Vec3([f32; 3]),
    Vec4([f32; 4]),
    Int(i32),
    UInt(u32),
    Bool(bool),
}

// ===== MATERIAL =====

/// Material: visual description of a surface
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    shader: String,
    base_color: Vec4,
    point_size: f32,
    line_width: f32,
    params: Vec<(String, ParamValue)>,
    param_names: FxHashMap<String, usize>,
}

// ===== DESCRIPTORS =====

/// Material creation descriptor
#[derive(Debug, Clone)]
pub struct MaterialDesc {
    pub shader: String,
    pub base_color: Vec4,
    pub point_size: f32,
    pub line_width: f32,
    pub params: Vec<(String, ParamValue)>,
}

impl Default for MaterialDesc {
    fn default() -> Self {
        Self {
            shader: SHADER_DEFAULT_LIT.to_string(),
            base_color: Vec4::ONE,
            point_size: 3.0,
            line_width: 1.0,
            params: Vec::new(),
        }
    }
}

// ===== MATERIAL IMPLEMENTATION =====

impl Material {
    /// Create a material from a descriptor
    ///
    /// # Errors
    ///
    /// `Error::InvalidResource` if the shader name is empty, a size is not
    /// strictly positive, or two parameters share a name.
    pub fn from_desc(desc: MaterialDesc) -> Result<Self> {
        if desc.shader.is_empty() {
            return Err(Error::InvalidResource("Material shader name is empty".to_string()));
        }
        if !(desc.point_size > 0.0) || !(desc.line_width > 0.0) {
            return Err(Error::InvalidResource(format!(
                "Material sizes must be positive (point_size {}, line_width {})",
                desc.point_size, desc.line_width
            )));
        }

        let mut param_names = FxHashMap::default();
        for (index, (name, _)) in desc.params.iter().enumerate() {
            if param_names.insert(name.clone(), index).is_some() {
                return Err(Error::InvalidResource(format!(
                    "Duplicate material parameter name '{}'", name
                )));
            }
        }

        Ok(Self {
            shader: desc.shader,
            base_color: desc.base_color,
            point_size: desc.point_size,
            line_width: desc.line_width,
            params: desc.params,
            param_names,
        })
    }

    /// Lit white material
    pub fn default_lit() -> Self {
        Self::preset(SHADER_DEFAULT_LIT)
    }

    /// Unlit white material
    pub fn default_unlit() -> Self {
        Self::preset(SHADER_DEFAULT_UNLIT)
    }

    fn preset(shader: &str) -> Self {
        let defaults = MaterialDesc::default();
        Self {
            shader: shader.to_string(),
            base_color: defaults.base_color,
            point_size: defaults.point_size,
            line_width: defaults.line_width,
            params: Vec::new(),
            param_names: FxHashMap::default(),
        }
    }

    // ===== ACCESSORS =====

    pub fn shader(&self) -> &str {
        &self.shader
    }

    pub fn base_color(&self) -> Vec4 {
        self.base_color
    }

    pub fn point_size(&self) -> f32 {
        self.point_size
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    /// Get a parameter by name
    pub fn param(&self, name: &str) -> Option<&ParamValue> {
        self.param_names.get(name).map(|&index| &self.params[index].1)
    }

    /// Iterate parameters in declaration order
    pub fn params(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.params.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    // ===== BUILDERS =====

    /// Copy of this material with a different base color
    pub fn with_base_color(mut self, color: Vec4) -> Self {
        self.base_color = color;
        self
    }

    /// Copy of this material with a different point size (ignored if not positive)
    pub fn with_point_size(mut self, size: f32) -> Self {
        if size > 0.0 {
            self.point_size = size;
        }
        self
    }
}

#[cfg(test)]
#[path = "material_tests.rs"]
mod tests;
