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

//! In-memory stand-ins for the sibling registries, shared by the lane tests.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use stagehand_core::config::{ConfigDocument, ConfigLoader, StageManagerConfig};
use stagehand_core::registry::{ObjectRegistry, PhysicsDefaults, PhysicsDefaultsRegistry};
use stagehand_core::vfs::FileSystem;
use stagehand_core::AttributesError;

use super::AttributesContext;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Default)]
pub struct FakeFileSystem {
    files: HashSet<PathBuf>,
}

impl FakeFileSystem {
    pub fn with_files(files: &[&str]) -> Self {
        Self {
            files: files.iter().map(PathBuf::from).collect(),
        }
    }
}

impl FileSystem for FakeFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains(path)
    }
}

#[derive(Default)]
pub struct FakeObjectRegistry {
    primitives: HashSet<String>,
    unreadable: HashSet<PathBuf>,
    pub loaded: Mutex<Vec<PathBuf>>,
}

impl FakeObjectRegistry {
    pub fn with_primitives(primitives: &[&str]) -> Self {
        Self {
            primitives: primitives.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn mark_unreadable(&mut self, directory: &str) {
        self.unreadable.insert(PathBuf::from(directory));
    }

    pub fn loaded_directories(&self) -> Vec<PathBuf> {
        self.loaded.lock().unwrap().clone()
    }
}

impl ObjectRegistry for FakeObjectRegistry {
    fn is_valid_primitive_handle(&self, handle: &str) -> bool {
        self.primitives.contains(handle)
    }

    fn load_object_configs(
        &self,
        directory: &Path,
        _recurse: bool,
    ) -> Result<Vec<i32>, AttributesError> {
        if self.unreadable.contains(directory) {
            return Err(AttributesError::Load {
                path: directory.to_string_lossy().into_owned(),
                reason: "directory not found".to_string(),
            });
        }
        let mut loaded = self.loaded.lock().unwrap();
        loaded.push(directory.to_path_buf());
        Ok(vec![loaded.len() as i32 - 1])
    }
}

#[derive(Default)]
pub struct FakePhysicsRegistry {
    entries: HashMap<String, PhysicsDefaults>,
}

impl FakePhysicsRegistry {
    pub fn with_entry(handle: &str, defaults: PhysicsDefaults) -> Self {
        let mut entries = HashMap::new();
        entries.insert(handle.to_string(), defaults);
        Self { entries }
    }
}

impl PhysicsDefaultsRegistry for FakePhysicsRegistry {
    fn lookup(&self, handle: &str) -> Option<PhysicsDefaults> {
        self.entries.get(handle).copied()
    }
}

#[derive(Default)]
pub struct FakeConfigLoader {
    documents: HashMap<PathBuf, ConfigDocument>,
}

impl FakeConfigLoader {
    pub fn with_document(path: &str, document: ConfigDocument) -> Self {
        let mut documents = HashMap::new();
        documents.insert(PathBuf::from(path), document);
        Self { documents }
    }
}

impl ConfigLoader for FakeConfigLoader {
    fn load(&self, path: &Path) -> Result<ConfigDocument, AttributesError> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| AttributesError::Load {
                path: path.to_string_lossy().into_owned(),
                reason: "no such document".to_string(),
            })
    }
}

/// Owns one of each fake so tests can borrow an [`AttributesContext`] from it.
#[derive(Default)]
pub struct Fixture {
    pub file_system: FakeFileSystem,
    pub objects: FakeObjectRegistry,
    pub physics: FakePhysicsRegistry,
    pub loader: FakeConfigLoader,
    pub config: StageManagerConfig,
}

impl Fixture {
    pub fn with_files(files: &[&str]) -> Self {
        Self {
            file_system: FakeFileSystem::with_files(files),
            ..Default::default()
        }
    }

    pub fn context(&self) -> AttributesContext<'_> {
        AttributesContext {
            file_system: &self.file_system,
            object_registry: &self.objects,
            physics_registry: &self.physics,
            config_loader: &self.loader,
            config: &self.config,
        }
    }
}
