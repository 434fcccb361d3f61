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

//! Selection of the construction path for an incoming stage handle.

use stagehand_core::config::STAGE_CONFIG_PATTERN;
use stagehand_core::registry::ObjectRegistry;
use stagehand_core::vfs::FileSystem;

/// How a stage template is built from its handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreationStrategy {
    /// The handle names a primitive shape.
    Primitive,
    /// The handle names an existing structured stage config.
    ConfigFile,
    /// The handle names an existing asset file with no config.
    LegacyFile,
    /// The handle is a synthetic name with no backing file.
    Default,
}

impl CreationStrategy {
    /// Classifies `handle`. The first matching strategy wins, in declaration order.
    pub fn classify(handle: &str, objects: &dyn ObjectRegistry, file_system: &dyn FileSystem) -> Self {
        if objects.is_valid_primitive_handle(handle) {
            Self::Primitive
        } else if file_system.handle_exists(handle) {
            if handle.to_lowercase().contains(STAGE_CONFIG_PATTERN) {
                Self::ConfigFile
            } else {
                Self::LegacyFile
            }
        } else {
            Self::Default
        }
    }

    /// Describes the strategy for the creation log of `handle`.
    pub fn describe(&self, handle: &str) -> String {
        match self {
            Self::Primitive => format!("Primitive asset ({handle}) based"),
            Self::ConfigFile => format!("JSON file ({handle}) based"),
            Self::LegacyFile => format!("File ({handle}) based"),
            Self::Default => "New default".to_string(),
        }
    }
}
