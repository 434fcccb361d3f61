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

//! Lanes resolving stage attribute templates.
//!
//! Data flows `DefaultsLane` → (`ConfigOverlayLane`) → `FinalizeLane`; the
//! caller decides which lanes run and owns the template between them.

mod config_lane;
mod defaults_lane;
mod file_name;
mod finalize_lane;

#[cfg(test)]
pub(crate) mod test_support;

pub use config_lane::ConfigOverlayLane;
pub use defaults_lane::DefaultsLane;
pub use file_name::{convention_for, FileNameConvention};
pub use finalize_lane::FinalizeLane;

use stagehand_core::config::{ConfigLoader, StageManagerConfig};
use stagehand_core::registry::{ObjectRegistry, PhysicsDefaultsRegistry};
use stagehand_core::vfs::FileSystem;

/// The collaborators and settings a lane may consult while resolving a template.
///
/// Every capability is borrowed: lanes never own or retain the sibling
/// registries they query.
#[derive(Clone, Copy)]
pub struct AttributesContext<'a> {
    /// Existence checks for asset and config paths.
    pub file_system: &'a dyn FileSystem,
    /// Primitive lookups and bulk object-config loading.
    pub object_registry: &'a dyn ObjectRegistry,
    /// Inherited gravity/friction/restitution values.
    pub physics_registry: &'a dyn PhysicsDefaultsRegistry,
    /// Structured config parsing.
    pub config_loader: &'a dyn ConfigLoader,
    /// Process-wide defaults for newly created templates.
    pub config: &'a StageManagerConfig,
}
