//! Shader program handles and name lookup
//!
//! Compilation lives outside the scene layer. The registry only needs a
//! stable handle per compiled program and a way to find one by name.

use std::collections::HashMap;
use std::fmt;

/// Handle to a compiled shader program
///
/// Handles order by their raw value; the render pass visits shader buckets in
/// that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShaderProgram(pub u32);

impl fmt::Display for ShaderProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "program#{}", self.0)
    }
}

/// Lookup of compiled shader programs by name
pub trait ShaderLibrary {
    /// Handle of the program registered under `name`, if any
    fn shader_program(&self, name: &str) -> Option<ShaderProgram>;
}

/// In-memory shader name table
#[derive(Debug, Default, Clone)]
pub struct ShaderCache {
    programs: HashMap<String, ShaderProgram>,
}

impl ShaderCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `program` under `name`, returning the handle it replaced
    pub fn insert(&mut self, name: impl Into<String>, program: ShaderProgram) -> Option<ShaderProgram> {
        let name = name.into();
        log::debug!("Registered shader '{}' as {}", name, program);
        self.programs.insert(name, program)
    }

    /// Number of registered programs
    pub fn len(&self) -> usize {
        self.programs.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}

impl ShaderLibrary for ShaderCache {
    fn shader_program(&self, name: &str) -> Option<ShaderProgram> {
        self.programs.get(name).copied()
    }
}
