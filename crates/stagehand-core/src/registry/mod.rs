// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Narrow read interfaces onto the sibling configuration registries.
//!
//! The stage attributes manager never owns or reaches into another registry.
//! It only consumes the capabilities below, injected at construction time as
//! shared, non-owning handles (`Arc<dyn ...>`).

use std::path::Path;

use crate::math::Vec3;
use crate::AttributesError;

/// Identifier returned when a template could not be registered.
pub const ID_UNDEFINED: i32 = -1;

/// The capabilities consumed from the object/primitive attributes registry.
pub trait ObjectRegistry: Send + Sync {
    /// Returns `true` if `handle` names an existing primitive-geometry template.
    fn is_valid_primitive_handle(&self, handle: &str) -> bool;

    /// Loads every object config found under `directory` into the registry.
    ///
    /// # Returns
    /// The ids of the object templates that were registered.
    ///
    /// # Errors
    /// Returns an [`AttributesError`] if the directory cannot be read.
    fn load_object_configs(&self, directory: &Path, recurse: bool)
        -> Result<Vec<i32>, AttributesError>;
}

/// Physical quantities a stage inherits from the active physics-manager template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsDefaults {
    /// Gravity vector, in meters per second squared.
    pub gravity: Vec3,
    /// Coulomb friction coefficient.
    pub friction_coefficient: f32,
    /// Coefficient of restitution.
    pub restitution_coefficient: f32,
}

/// The capabilities consumed from the physics-manager attributes registry.
pub trait PhysicsDefaultsRegistry: Send + Sync {
    /// Returns the physics defaults registered under `handle`, if any.
    fn lookup(&self, handle: &str) -> Option<PhysicsDefaults>;

    /// Returns `true` if a physics-manager template is registered under `handle`.
    fn has_handle(&self, handle: &str) -> bool {
        self.lookup(handle).is_some()
    }
}
