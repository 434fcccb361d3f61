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

//! Process-wide defaults and the structured-config parsing contract.
//!
//! [`StageManagerConfig`] replaces ambient global settings: it is handed to the
//! stage attributes manager at construction and lives exactly as long as it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::AttributesError;

/// Light setup key meaning "render this stage without lighting".
pub const NO_LIGHT_KEY: &str = "no_lights";

/// Light setup key selecting the renderer's default lighting.
pub const DEFAULT_LIGHTING_KEY: &str = "";

/// Handle of the physics-manager template new stages inherit from by default.
pub const DEFAULT_PHYSICS_MANAGER_HANDLE: &str = "default_physics";

/// Filename fragment identifying a structured stage config (matched case-insensitively).
pub const STAGE_CONFIG_PATTERN: &str = "scene_config.json";

/// Key of the override path map selecting a navmesh file.
pub const NAVMESH_PATH_KEY: &str = "navmesh";

/// Key of the override path map selecting a house (semantic descriptor) file.
pub const HOUSE_PATH_KEY: &str = "house";

/// A parsed structured config document.
pub type ConfigDocument = serde_json::Value;

/// Parses structured config files into [`ConfigDocument`]s.
pub trait ConfigLoader: Send + Sync {
    /// Reads and parses the config at `path`.
    ///
    /// # Errors
    /// Returns [`AttributesError::Load`] if the file is unreadable or malformed.
    fn load(&self, path: &Path) -> Result<ConfigDocument, AttributesError>;
}

/// The defaults a stage attributes manager applies to every template it creates.
///
/// The values can be read from a JSON file by the embedding application; any
/// missing field keeps its built-in default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StageManagerConfig {
    /// Light setup key assigned to new templates.
    pub light_setup: String,
    /// Whether new templates enable frustum culling.
    pub frustum_culling: bool,
    /// Explicit paths overriding the filename-derived navmesh/house files.
    pub file_paths: HashMap<String, PathBuf>,
    /// Handle of the physics-manager template whose values new stages inherit.
    pub physics_manager_handle: String,
}

impl StageManagerConfig {
    /// Returns the override path registered under `key`, if any.
    ///
    /// Handles are UTF-8 strings. A path that is not valid UTF-8 is converted
    /// lossily and reported, since the converted handle will likely not exist.
    pub fn file_path(&self, key: &str) -> Option<String> {
        let path = self.file_paths.get(key)?;
        match path.to_str() {
            Some(handle) => Some(handle.to_string()),
            None => {
                let handle = path.to_string_lossy().into_owned();
                log::warn!(
                    "StageManagerConfig: Override path for '{key}' is not valid UTF-8, using '{handle}'"
                );
                Some(handle)
            }
        }
    }
}

impl Default for StageManagerConfig {
    fn default() -> Self {
        Self {
            light_setup: NO_LIGHT_KEY.to_string(),
            frustum_culling: false,
            file_paths: HashMap::new(),
            physics_manager_handle: DEFAULT_PHYSICS_MANAGER_HANDLE.to_string(),
        }
    }
}
