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

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use stagehand_agents::StageAttributesManager;
use stagehand_core::config::StageManagerConfig;
use stagehand_core::registry::{ObjectRegistry, PhysicsDefaults, PhysicsDefaultsRegistry};
use stagehand_core::AttributesError;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Knows a fixed set of primitives and records every directory it is asked to load.
#[derive(Default)]
pub struct RecordingObjectRegistry {
    pub primitives: Vec<String>,
    pub loaded: Mutex<Vec<PathBuf>>,
}

impl RecordingObjectRegistry {
    pub fn loaded_directories(&self) -> Vec<PathBuf> {
        self.loaded.lock().unwrap().clone()
    }
}

impl ObjectRegistry for RecordingObjectRegistry {
    fn is_valid_primitive_handle(&self, handle: &str) -> bool {
        self.primitives.iter().any(|p| p == handle)
    }

    fn load_object_configs(
        &self,
        directory: &Path,
        _recurse: bool,
    ) -> Result<Vec<i32>, AttributesError> {
        if !directory.is_dir() {
            return Err(AttributesError::Load {
                path: directory.to_string_lossy().into_owned(),
                reason: "not a directory".to_string(),
            });
        }
        self.loaded.lock().unwrap().push(directory.to_path_buf());
        Ok(Vec::new())
    }
}

#[derive(Default)]
pub struct MapPhysicsRegistry(pub HashMap<String, PhysicsDefaults>);

impl PhysicsDefaultsRegistry for MapPhysicsRegistry {
    fn lookup(&self, handle: &str) -> Option<PhysicsDefaults> {
        self.0.get(handle).copied()
    }
}

/// A manager backed by the real filesystem, with `primitives` registered as primitive shapes.
pub fn native_manager(primitives: &[&str]) -> (StageAttributesManager, Arc<RecordingObjectRegistry>) {
    init_logging();
    let objects = Arc::new(RecordingObjectRegistry {
        primitives: primitives.iter().map(|p| p.to_string()).collect(),
        ..Default::default()
    });
    let manager = StageAttributesManager::new(
        objects.clone(),
        Arc::new(MapPhysicsRegistry::default()),
        StageManagerConfig::default(),
    );
    (manager, objects)
}

pub fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
