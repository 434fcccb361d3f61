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

//! The StageAttributesManager owns the stage template library and drives the
//! resolution lanes that fill it.

use std::sync::Arc;

use stagehand_core::asset::AssetType;
use stagehand_core::config::{ConfigLoader, StageManagerConfig};
use stagehand_core::registry::{ObjectRegistry, PhysicsDefaultsRegistry, ID_UNDEFINED};
use stagehand_core::vfs::FileSystem;
use stagehand_core::AttributesError;
use stagehand_data::attributes::{AttributesTemplate, StageAttributes, TemplateLibrary};
use stagehand_io::{JsonConfigLoader, NativeFileSystem};
use stagehand_lanes::attributes_lane::{
    AttributesContext, ConfigOverlayLane, DefaultsLane, FinalizeLane,
};

use super::strategy::CreationStrategy;

/// Creates, validates, and stores stage attribute templates.
///
/// A handle is classified into a [`CreationStrategy`], resolved through the
/// [`DefaultsLane`] (and the [`ConfigOverlayLane`] for structured configs),
/// then gated by the [`FinalizeLane`] before it enters the library.
///
/// The manager performs no internal locking. Mutation must be serialized by
/// the caller; copies handed out by the read API are independent of it.
pub struct StageAttributesManager {
    library: TemplateLibrary<StageAttributes>,
    object_registry: Arc<dyn ObjectRegistry>,
    physics_registry: Arc<dyn PhysicsDefaultsRegistry>,
    file_system: Arc<dyn FileSystem>,
    config_loader: Arc<dyn ConfigLoader>,
    config: StageManagerConfig,
    defaults_lane: DefaultsLane,
    config_lane: ConfigOverlayLane,
    finalize_lane: FinalizeLane,
}

impl StageAttributesManager {
    /// Creates a manager reading assets and configs from the native filesystem.
    pub fn new(
        object_registry: Arc<dyn ObjectRegistry>,
        physics_registry: Arc<dyn PhysicsDefaultsRegistry>,
        config: StageManagerConfig,
    ) -> Self {
        Self::with_services(
            object_registry,
            physics_registry,
            Arc::new(NativeFileSystem::new()),
            Arc::new(JsonConfigLoader::new()),
            config,
        )
    }

    /// Creates a manager with explicit filesystem and config-parsing services.
    pub fn with_services(
        object_registry: Arc<dyn ObjectRegistry>,
        physics_registry: Arc<dyn PhysicsDefaultsRegistry>,
        file_system: Arc<dyn FileSystem>,
        config_loader: Arc<dyn ConfigLoader>,
        config: StageManagerConfig,
    ) -> Self {
        Self {
            library: TemplateLibrary::new(),
            object_registry,
            physics_registry,
            file_system,
            config_loader,
            config,
            defaults_lane: DefaultsLane::new(),
            config_lane: ConfigOverlayLane::new(),
            finalize_lane: FinalizeLane::new(),
        }
    }

    /// Returns the defaults applied to newly created templates.
    pub fn config(&self) -> &StageManagerConfig {
        &self.config
    }

    /// Replaces the defaults applied to templates created from now on.
    pub fn set_config(&mut self, config: StageManagerConfig) {
        self.config = config;
    }

    /// Selects the physics-manager template new stages inherit physical quantities from.
    pub fn set_physics_manager_handle(&mut self, handle: impl Into<String>) {
        self.config.physics_manager_handle = handle.into();
    }

    fn context(&self) -> AttributesContext<'_> {
        AttributesContext {
            file_system: self.file_system.as_ref(),
            object_registry: self.object_registry.as_ref(),
            physics_registry: self.physics_registry.as_ref(),
            config_loader: self.config_loader.as_ref(),
            config: &self.config,
        }
    }

    // --- Creation ---

    /// Returns the strategy [`create`](Self::create) would use for `handle`.
    pub fn strategy_for(&self, handle: &str) -> CreationStrategy {
        CreationStrategy::classify(handle, self.object_registry.as_ref(), self.file_system.as_ref())
    }

    /// Creates a stage template for `handle`, choosing the construction path from the handle.
    ///
    /// With `register = true` the template is also validated and stored, and the
    /// returned value is a copy of the stored template.
    ///
    /// # Returns
    /// `None` if the chosen path fails (unknown primitive, unreadable config) or
    /// if registration was requested and the template failed validation.
    pub fn create(&mut self, handle: &str, register: bool) -> Option<StageAttributes> {
        let strategy = self.strategy_for(handle);
        let created = match strategy {
            CreationStrategy::Primitive => self.create_primitive_based(handle, register),
            CreationStrategy::ConfigFile => self.create_file_based(handle, register),
            CreationStrategy::LegacyFile => self.create_back_compat(handle, register),
            CreationStrategy::Default => self.create_default(handle, register),
        };

        if created.is_some() {
            log::info!(
                "StageAttributesManager: {} stage attributes created{}",
                strategy.describe(handle),
                if register { " and registered." } else { "." }
            );
        }
        created
    }

    /// Creates a template treating `handle` as a synthetic name with no backing file.
    pub fn create_default(&mut self, handle: &str, register: bool) -> Option<StageAttributes> {
        let attributes = self.defaults_lane.new_attributes(handle, &self.context());
        self.post_create_register(attributes, register)
    }

    /// Creates a template for the primitive shape named `handle`.
    ///
    /// Primitive stages use the primitive itself for collision, with no margin.
    pub fn create_primitive_based(&mut self, handle: &str, register: bool) -> Option<StageAttributes> {
        if !self.object_registry.is_valid_primitive_handle(handle) {
            log::error!(
                "StageAttributesManager: {}. Aborting.",
                AttributesError::PrimitiveNotFound(handle.to_string())
            );
            return None;
        }

        let mut attributes = self.defaults_lane.new_attributes(handle, &self.context());
        attributes.margin = 0.0;
        attributes.render_asset_type = AssetType::Primitive;
        attributes.collision_asset_type = AssetType::Primitive;
        attributes.use_mesh_collision = false;

        self.post_create_register(attributes, register)
    }

    /// Creates a template from the structured stage config at `path`.
    pub fn create_file_based(&mut self, path: &str, register: bool) -> Option<StageAttributes> {
        let ctx = self.context();
        let document = self.config_lane.load(path, &ctx).ok()?;

        let mut attributes = self.defaults_lane.new_attributes(path, &ctx);
        self.config_lane.apply(&mut attributes, &document, &ctx);

        self.post_create_register(attributes, register)
    }

    /// Creates a template for the asset file at `path`, which has no config of its own.
    pub fn create_back_compat(&mut self, path: &str, register: bool) -> Option<StageAttributes> {
        let attributes = self.defaults_lane.new_attributes(path, &self.context());
        self.post_create_register(attributes, register)
    }

    fn post_create_register(
        &mut self,
        attributes: StageAttributes,
        register: bool,
    ) -> Option<StageAttributes> {
        if !register {
            return Some(attributes);
        }
        let handle = attributes.handle().to_string();
        let id = self.try_register(attributes, &handle).ok()?;
        self.library.get_copy_by_id(id)
    }

    // --- Registration ---

    /// Validates `template` and stores it under `handle`.
    ///
    /// Re-registering an existing handle replaces its template and keeps its id.
    ///
    /// # Errors
    /// Returns the validation failure; the library is left unchanged.
    pub fn try_register(
        &mut self,
        mut template: StageAttributes,
        handle: &str,
    ) -> Result<i32, AttributesError> {
        self.finalize_lane
            .validate(&mut template, handle, &self.context())?;
        Ok(self.library.upsert(handle, template))
    }

    /// Validates `template` and stores it under `handle`.
    ///
    /// # Returns
    /// The template's id, or [`ID_UNDEFINED`] if validation failed.
    pub fn register_finalize(&mut self, template: StageAttributes, handle: &str) -> i32 {
        self.try_register(template, handle).unwrap_or(ID_UNDEFINED)
    }

    /// Validates `template` and stores it under its own handle.
    pub fn register(&mut self, template: StageAttributes) -> i32 {
        let handle = template.handle().to_string();
        self.register_finalize(template, &handle)
    }

    // --- Queries ---

    /// Returns the stored template registered under `handle`.
    pub fn get_by_handle(&self, handle: &str) -> Option<&StageAttributes> {
        self.library.get_by_handle(handle)
    }

    /// Returns an independent copy of the template registered under `handle`.
    pub fn get_copy_by_handle(&self, handle: &str) -> Result<StageAttributes, AttributesError> {
        self.library
            .get_copy_by_handle(handle)
            .ok_or_else(|| AttributesError::NotFound(handle.to_string()))
    }

    /// Returns an independent copy of the template registered under `id`.
    pub fn get_copy_by_id(&self, id: i32) -> Result<StageAttributes, AttributesError> {
        self.library
            .get_copy_by_id(id)
            .ok_or_else(|| AttributesError::NotFound(format!("id {id}")))
    }

    /// Removes the template registered under `handle`, handing it back to the caller.
    pub fn remove_by_handle(&mut self, handle: &str) -> Result<StageAttributes, AttributesError> {
        self.library
            .remove_by_handle(handle)
            .ok_or_else(|| AttributesError::NotFound(handle.to_string()))
    }

    /// Removes the template registered under `id`, handing it back to the caller.
    pub fn remove_by_id(&mut self, id: i32) -> Result<StageAttributes, AttributesError> {
        self.library
            .remove_by_id(id)
            .ok_or_else(|| AttributesError::NotFound(format!("id {id}")))
    }

    /// Lists registered handles, in registration order, that do (or with
    /// `contains = false`, do not) contain `substring`.
    pub fn list_handles_by_substring(
        &self,
        substring: &str,
        contains: bool,
        case_insensitive: bool,
    ) -> Vec<String> {
        self.library
            .handles_by_substring(substring, contains, case_insensitive)
    }

    /// Lists every registered handle in registration order.
    pub fn handles(&self) -> Vec<String> {
        self.library.handles().map(str::to_string).collect()
    }

    /// Returns the id of the template registered under `handle`.
    pub fn id_by_handle(&self, handle: &str) -> Option<i32> {
        self.library.id_by_handle(handle)
    }

    /// Returns `true` if a template is registered under `handle`.
    pub fn contains(&self, handle: &str) -> bool {
        self.library.contains(handle)
    }

    /// Returns the number of registered templates.
    pub fn len(&self) -> usize {
        self.library.len()
    }

    /// Returns `true` if no template is registered.
    pub fn is_empty(&self) -> bool {
        self.library.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::{Path, PathBuf};
    use stagehand_core::config::ConfigDocument;
    use stagehand_core::registry::PhysicsDefaults;

    struct Files(HashSet<PathBuf>);

    impl FileSystem for Files {
        fn exists(&self, path: &Path) -> bool {
            self.0.contains(path)
        }
    }

    struct Primitives;

    impl ObjectRegistry for Primitives {
        fn is_valid_primitive_handle(&self, handle: &str) -> bool {
            handle == "cubeSolid"
        }

        fn load_object_configs(&self, _: &Path, _: bool) -> Result<Vec<i32>, AttributesError> {
            Ok(Vec::new())
        }
    }

    struct NoPhysics;

    impl PhysicsDefaultsRegistry for NoPhysics {
        fn lookup(&self, _: &str) -> Option<PhysicsDefaults> {
            None
        }
    }

    struct NoConfigs;

    impl ConfigLoader for NoConfigs {
        fn load(&self, path: &Path) -> Result<ConfigDocument, AttributesError> {
            Err(AttributesError::Load {
                path: path.to_string_lossy().into_owned(),
                reason: "unreadable".to_string(),
            })
        }
    }

    fn manager(files: &[&str]) -> StageAttributesManager {
        let _ = env_logger::builder().is_test(true).try_init();
        StageAttributesManager::with_services(
            Arc::new(Primitives),
            Arc::new(NoPhysics),
            Arc::new(Files(files.iter().map(PathBuf::from).collect())),
            Arc::new(NoConfigs),
            StageManagerConfig::default(),
        )
    }

    #[test]
    fn test_create_without_register_leaves_library_empty() {
        let mut manager = manager(&["apt.glb"]);

        let attributes = manager.create("apt.glb", false).unwrap();

        assert!(attributes.is_dirty());
        assert!(manager.is_empty());
    }

    #[test]
    fn test_create_and_register_returns_clean_copy() {
        let mut manager = manager(&["apt.glb"]);

        let attributes = manager.create("apt.glb", true).unwrap();

        assert!(!attributes.is_dirty());
        assert_eq!(attributes.origin_handle(), "apt.glb");
        assert_eq!(manager.id_by_handle("apt.glb"), Some(0));
    }

    #[test]
    fn test_primitive_path() {
        let mut manager = manager(&[]);

        let attributes = manager.create("cubeSolid", true).unwrap();

        assert_eq!(attributes.render_asset_type, AssetType::Primitive);
        assert_eq!(attributes.collision_asset_type, AssetType::Primitive);
        assert_eq!(attributes.margin, 0.0);
        assert!(!attributes.use_mesh_collision);
        assert!(attributes.render_asset_is_primitive);
        assert!(attributes.collision_asset_is_primitive);
    }

    #[test]
    fn test_unknown_primitive_is_rejected() {
        let mut manager = manager(&[]);

        assert!(manager.create_primitive_based("sphereSolid", true).is_none());
        assert!(manager.is_empty());
    }

    #[test]
    fn test_unreadable_config_aborts_creation() {
        let mut manager = manager(&["apt.scene_config.json"]);

        assert_eq!(
            manager.strategy_for("apt.scene_config.json"),
            CreationStrategy::ConfigFile
        );
        assert!(manager.create("apt.scene_config.json", true).is_none());
        assert!(manager.is_empty());
    }

    #[test]
    fn test_failed_registration_returns_undefined() {
        let mut manager = manager(&[]);
        let attributes = manager.create("missing.glb", false).unwrap();

        assert_eq!(manager.register(attributes), ID_UNDEFINED);
        assert!(manager.create("missing.glb", true).is_none());
        assert!(manager.is_empty());
    }

    #[test]
    fn test_config_changes_apply_to_later_templates() {
        let mut manager = manager(&[]);
        let before = manager.create("stage_NONE", false).unwrap();

        let mut config = manager.config().clone();
        config.light_setup = "studio".to_string();
        manager.set_config(config);
        manager.set_physics_manager_handle("lab_physics");
        let after = manager.create("stage_NONE", false).unwrap();

        assert!(!before.requires_lighting);
        assert!(after.requires_lighting);
        assert_eq!(manager.config().physics_manager_handle, "lab_physics");
    }
}
