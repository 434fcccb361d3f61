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

//! Overlays the fields of a structured stage config onto a defaulted template.
//!
//! Every field follows the same rule: present overrides, absent preserves. A
//! field that is present but of the wrong JSON type is reported and treated as
//! absent.

use std::path::Path;

use serde_json::Value;
use stagehand_core::asset::AssetType;
use stagehand_core::config::ConfigDocument;
use stagehand_core::math::Vec3;
use stagehand_core::AttributesError;
use stagehand_data::attributes::{AttributesTemplate, StageAttributes};
use stagehand_io::path::{join, parent_directory};

use super::file_name::convention_for;
use super::AttributesContext;

/// Applies the explicit fields of a stage config on top of resolver defaults.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigOverlayLane;

impl ConfigOverlayLane {
    /// Creates a new instance of the ConfigOverlayLane.
    pub fn new() -> Self {
        Self
    }

    /// Loads the stage config stored at `path`.
    ///
    /// # Errors
    /// Returns [`AttributesError::Load`] if the config is unreadable or malformed.
    pub fn load(
        &self,
        path: &str,
        ctx: &AttributesContext<'_>,
    ) -> Result<ConfigDocument, AttributesError> {
        ctx.config_loader.load(Path::new(path)).inspect_err(|e| {
            log::error!("ConfigOverlayLane: Failure reading stage config '{path}': {e}. Aborting.")
        })
    }

    /// Overlays every field present in `document` onto `attributes`.
    ///
    /// Relative paths in the config are resolved against the directory holding
    /// the config file. Listed rigid object directories are bulk-loaded into the
    /// object registry; a failing entry is skipped without aborting the overlay.
    pub fn apply(
        &self,
        attributes: &mut StageAttributes,
        document: &ConfigDocument,
        ctx: &AttributesContext<'_>,
    ) {
        self.apply_common_fields(attributes, document);
        self.apply_stage_fields(attributes, document);
        self.load_rigid_object_paths(attributes, document, ctx);
    }

    /// Fields shared by every physics template.
    fn apply_common_fields(&self, attributes: &mut StageAttributes, document: &ConfigDocument) {
        let directory = attributes.file_directory().to_string();

        if let Some(render) = read_string(document, "render mesh") {
            let handle = join(&directory, &render);
            let convention = convention_for(&handle);
            attributes.render_asset_type = convention.asset_type;
            if let Some((up, front)) = convention.frame {
                attributes.orient_up = up;
                attributes.orient_front = front;
            }
            attributes.set_render_asset_handle(handle);
        }
        if let Some(collision) = read_string(document, "collision mesh") {
            let handle = join(&directory, &collision);
            attributes.collision_asset_type = convention_for(&handle).asset_type;
            attributes.set_collision_asset_handle(handle);
        }

        if let Some(scale) = read_vec3(document, "scale") {
            attributes.scale = scale;
        }
        if let Some(up) = read_vec3(document, "up") {
            attributes.orient_up = up;
        }
        if let Some(front) = read_vec3(document, "front") {
            attributes.orient_front = front;
        }
        if let Some(margin) = read_f32(document, "margin") {
            attributes.margin = margin;
        }
        if let Some(friction) = read_f32(document, "friction coefficient") {
            attributes.friction_coefficient = friction;
        }
        if let Some(restitution) = read_f32(document, "restitution coefficient") {
            attributes.restitution_coefficient = restitution;
        }
        if let Some(units) = read_f32(document, "units to meters") {
            attributes.units_to_meters = units;
        }
        if let Some(requires_lighting) = read_bool(document, "requires lighting") {
            attributes.requires_lighting = requires_lighting;
        }
        if let Some(use_mesh_collision) = read_bool(document, "use mesh collision") {
            attributes.use_mesh_collision = use_mesh_collision;
        }
        if let Some(frustum_culling) = read_bool(document, "frustum culling") {
            attributes.frustum_culling = frustum_culling;
        }
    }

    /// Fields specific to stages.
    fn apply_stage_fields(&self, attributes: &mut StageAttributes, document: &ConfigDocument) {
        let directory = attributes.file_directory().to_string();

        if let Some(gravity) = read_vec3(document, "gravity") {
            attributes.gravity = gravity;
        }
        if let Some(origin) = read_vec3(document, "origin") {
            attributes.origin = origin;
        }

        // Semantic meshes are currently always instance meshes, whatever the filename says.
        if let Some(semantic) = read_string(document, "semantic mesh").filter(|s| !s.is_empty()) {
            attributes.semantic_asset_handle = semantic;
            attributes.semantic_asset_type = AssetType::InstanceMesh;
        }
        if let Some(navmesh) = read_string(document, "nav mesh") {
            attributes.navmesh_asset_handle = join(&directory, &navmesh);
        }
        if let Some(house) = read_string(document, "house filename") {
            attributes.house_filename = join(&directory, &house);
        }
        if let Some(light_setup) = read_string(document, "lighting setup") {
            attributes.light_setup = light_setup;
        }
    }

    /// Bulk-loads every directory listed under `"rigid object paths"`.
    fn load_rigid_object_paths(
        &self,
        attributes: &StageAttributes,
        document: &ConfigDocument,
        ctx: &AttributesContext<'_>,
    ) {
        let Some(value) = document.get("rigid object paths") else {
            return;
        };
        let Some(paths) = value.as_array() else {
            log::warn!(
                "ConfigOverlayLane: 'rigid object paths' in '{}' is not an array, ignoring it",
                attributes.handle()
            );
            return;
        };

        let config_directory = parent_directory(attributes.handle());
        for (index, entry) in paths.iter().enumerate() {
            let Some(relative) = entry.as_str() else {
                log::warn!(
                    "ConfigOverlayLane: Invalid value in 'rigid object paths' of '{}' at index {index}, skipping",
                    attributes.handle()
                );
                continue;
            };

            let directory = join(&config_directory, relative);
            match ctx
                .object_registry
                .load_object_configs(Path::new(&directory), true)
            {
                Ok(ids) => log::debug!(
                    "ConfigOverlayLane: Loaded {} object templates from '{directory}'",
                    ids.len()
                ),
                Err(e) => log::warn!(
                    "ConfigOverlayLane: Failed to load object configs from '{directory}': {e}, skipping"
                ),
            }
        }
    }
}

/// Reads `key` as a string, warning if it is present with another type.
fn read_string(document: &ConfigDocument, key: &str) -> Option<String> {
    read_field(document, key, "a string", |value| {
        value.as_str().map(str::to_string)
    })
}

/// Reads `key` as a number.
fn read_f32(document: &ConfigDocument, key: &str) -> Option<f32> {
    read_field(document, key, "a number", |value| {
        value.as_f64().map(|number| number as f32)
    })
}

/// Reads `key` as a boolean.
fn read_bool(document: &ConfigDocument, key: &str) -> Option<bool> {
    read_field(document, key, "a boolean", Value::as_bool)
}

/// Reads `key` as an `[x, y, z]` array of numbers.
fn read_vec3(document: &ConfigDocument, key: &str) -> Option<Vec3> {
    read_field(document, key, "an array of three numbers", |value| {
        let components = value
            .as_array()?
            .iter()
            .map(|component| component.as_f64().map(|number| number as f32))
            .collect::<Option<Vec<f32>>>()?;
        Vec3::from_slice(&components)
    })
}

fn read_field<T>(
    document: &ConfigDocument,
    key: &str,
    expected: &str,
    convert: impl FnOnce(&Value) -> Option<T>,
) -> Option<T> {
    let value = document.get(key)?;
    let converted = convert(value);
    if converted.is_none() {
        log::warn!("ConfigOverlayLane: Ignoring '{key}': expected {expected}, found {value}");
    }
    converted
}
