//! Named, typed shader parameters.
//!
//! A [`UniformSet`] is rebuilt for every draw call. Each entry carries its
//! value together with a type tag so the render passes can check what they
//! receive before packing it into a GPU buffer.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use glam::Mat4;

/// The type tag of a uniform value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniformType {
    Float,
    Int,
    Mat4,
}

impl UniformType {
    /// Returns the shader-side type name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            UniformType::Float => "float",
            UniformType::Int => "int",
            UniformType::Mat4 => "mat4",
        }
    }
}

impl fmt::Display for UniformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A uniform value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Int(i32),
    Mat4(Mat4),
}

impl UniformValue {
    /// Returns the type tag of this value.
    #[must_use]
    pub fn ty(&self) -> UniformType {
        match self {
            UniformValue::Float(_) => UniformType::Float,
            UniformValue::Int(_) => UniformType::Int,
            UniformValue::Mat4(_) => UniformType::Mat4,
        }
    }
}

impl From<f32> for UniformValue {
    fn from(v: f32) -> Self {
        UniformValue::Float(v)
    }
}

impl From<i32> for UniformValue {
    fn from(v: i32) -> Self {
        UniformValue::Int(v)
    }
}

impl From<Mat4> for UniformValue {
    fn from(v: Mat4) -> Self {
        UniformValue::Mat4(v)
    }
}

/// Why a uniform lookup failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UniformLookupError {
    /// No uniform with this name.
    Missing(String),
    /// The uniform exists but has another type.
    WrongType {
        name: String,
        expected: UniformType,
        actual: UniformType,
    },
}

impl fmt::Display for UniformLookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniformLookupError::Missing(name) => write!(f, "uniform '{name}' is not set"),
            UniformLookupError::WrongType {
                name,
                expected,
                actual,
            } => write!(f, "uniform '{name}' is {actual}, expected {expected}"),
        }
    }
}

impl std::error::Error for UniformLookupError {}

/// Maps UI labels to uniform names, e.g. `"Size"` to `"object_radius"`.
pub type UniformLabels = &'static [(&'static str, &'static str)];

/// The named parameters for one draw call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniformSet {
    values: BTreeMap<String, UniformValue>,
}

impl UniformSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a uniform, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<UniformValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder form of [`UniformSet::set`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<UniformValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Applies labeled float options.
    ///
    /// Every label in `labels` that has a value in `options` sets the mapped
    /// uniform. Labels without a mapping are ignored.
    pub fn apply_labeled(&mut self, labels: UniformLabels, options: &HashMap<String, f32>) {
        for (label, name) in labels {
            if let Some(&value) = options.get(*label) {
                self.set(*name, value);
            }
        }
    }

    /// Returns the value of a uniform.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&UniformValue> {
        self.values.get(name)
    }

    /// Returns the type of a uniform.
    #[must_use]
    pub fn type_of(&self, name: &str) -> Option<UniformType> {
        self.values.get(name).map(UniformValue::ty)
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &UniformValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the uniform names in name order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Returns the number of uniforms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no uniform is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Reads a required float uniform.
    pub fn float(&self, name: &str) -> Result<f32, UniformLookupError> {
        match self.values.get(name) {
            Some(UniformValue::Float(v)) => Ok(*v),
            other => Err(Self::lookup_error(name, UniformType::Float, other)),
        }
    }

    /// Reads a float uniform, falling back to `default` when it is not set.
    pub fn float_or(&self, name: &str, default: f32) -> Result<f32, UniformLookupError> {
        match self.float(name) {
            Err(UniformLookupError::Missing(_)) => Ok(default),
            other => other,
        }
    }

    /// Reads a required int uniform.
    pub fn int(&self, name: &str) -> Result<i32, UniformLookupError> {
        match self.values.get(name) {
            Some(UniformValue::Int(v)) => Ok(*v),
            other => Err(Self::lookup_error(name, UniformType::Int, other)),
        }
    }

    /// Reads a required mat4 uniform.
    pub fn mat4(&self, name: &str) -> Result<Mat4, UniformLookupError> {
        match self.values.get(name) {
            Some(UniformValue::Mat4(v)) => Ok(*v),
            other => Err(Self::lookup_error(name, UniformType::Mat4, other)),
        }
    }

    fn lookup_error(
        name: &str,
        expected: UniformType,
        found: Option<&UniformValue>,
    ) -> UniformLookupError {
        match found {
            Some(value) => UniformLookupError::WrongType {
                name: name.to_string(),
                expected,
                actual: value.ty(),
            },
            None => UniformLookupError::Missing(name.to_string()),
        }
    }
}
