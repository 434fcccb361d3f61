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

//! The attribute template describing a stage's render, collision and lighting setup.

use std::path::Path;

use serde::{Deserialize, Serialize};
use stagehand_core::asset::AssetType;
use stagehand_core::config::DEFAULT_LIGHTING_KEY;
use stagehand_core::math::Vec3;

use super::AttributesTemplate;

/// A named, versioned configuration record for a stage (a scene's static geometry).
///
/// The handle, asset handles, and validation state are private so that every
/// change to an asset handle flips the template back to *dirty*. A dirty
/// template must pass the registration gate again before a library will accept
/// it. All other fields are plain data and are exposed directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageAttributes {
    handle: String,
    origin_handle: String,
    file_directory: String,
    render_asset_handle: String,
    collision_asset_handle: String,
    dirty: bool,

    /// Handle of the per-instance semantic mesh.
    pub semantic_asset_handle: String,
    /// Handle of the navigation mesh, empty if the stage has none.
    pub navmesh_asset_handle: String,
    /// Handle of the house (semantic descriptor) file.
    pub house_filename: String,

    /// Category of the render asset.
    pub render_asset_type: AssetType,
    /// Category of the collision asset.
    pub collision_asset_type: AssetType,
    /// Category of the semantic asset.
    pub semantic_asset_type: AssetType,
    /// Whether the render asset is a generated primitive.
    pub render_asset_is_primitive: bool,
    /// Whether the collision asset is a generated primitive.
    pub collision_asset_is_primitive: bool,
    /// Whether collisions use the full mesh rather than a simplified shape.
    pub use_mesh_collision: bool,

    /// The asset's local "up" direction.
    pub orient_up: Vec3,
    /// The asset's local "front" direction.
    pub orient_front: Vec3,
    /// Translation applied to the stage origin.
    pub origin: Vec3,
    /// Scale applied to the stage.
    pub scale: Vec3,
    /// Gravity applied while this stage is active.
    pub gravity: Vec3,
    /// Coulomb friction coefficient of the stage surfaces.
    pub friction_coefficient: f32,
    /// Coefficient of restitution of the stage surfaces.
    pub restitution_coefficient: f32,
    /// Collision margin, in meters.
    pub margin: f32,
    /// Conversion factor from asset units to meters.
    pub units_to_meters: f32,

    /// Key of the light setup used to render the stage.
    pub light_setup: String,
    /// Whether the stage is rendered with lighting.
    pub requires_lighting: bool,
    /// Whether the renderer culls stage geometry against the view frustum.
    pub frustum_culling: bool,
}

impl StageAttributes {
    /// Creates a fresh, unvalidated template named `handle`.
    ///
    /// The file directory is derived from the handle. Physical quantities get
    /// the engine's built-in defaults, and the template starts out dirty.
    pub fn new(handle: &str) -> Self {
        let file_directory = Path::new(handle)
            .parent()
            .map(|dir| dir.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            handle: handle.to_string(),
            origin_handle: String::new(),
            file_directory,
            render_asset_handle: String::new(),
            collision_asset_handle: String::new(),
            dirty: true,
            semantic_asset_handle: String::new(),
            navmesh_asset_handle: String::new(),
            house_filename: String::new(),
            render_asset_type: AssetType::Unknown,
            collision_asset_type: AssetType::Unknown,
            semantic_asset_type: AssetType::Unknown,
            render_asset_is_primitive: false,
            collision_asset_is_primitive: false,
            use_mesh_collision: true,
            orient_up: Vec3::Y,
            orient_front: Vec3::NEG_Z,
            origin: Vec3::ZERO,
            scale: Vec3::ONE,
            gravity: Vec3::new(0.0, -9.8, 0.0),
            friction_coefficient: 0.4,
            restitution_coefficient: 0.05,
            margin: 0.04,
            units_to_meters: 1.0,
            light_setup: DEFAULT_LIGHTING_KEY.to_string(),
            requires_lighting: true,
            frustum_culling: false,
        }
    }

    /// The handle as of the last successful registration, empty if never registered.
    pub fn origin_handle(&self) -> &str {
        &self.origin_handle
    }

    /// The directory containing the file this template was built from.
    pub fn file_directory(&self) -> &str {
        &self.file_directory
    }

    /// The handle of the asset used for rendering.
    pub fn render_asset_handle(&self) -> &str {
        &self.render_asset_handle
    }

    /// Sets the render asset handle and marks the template dirty.
    pub fn set_render_asset_handle(&mut self, handle: impl Into<String>) {
        self.render_asset_handle = handle.into();
        self.dirty = true;
    }

    /// The handle of the asset used for collision.
    pub fn collision_asset_handle(&self) -> &str {
        &self.collision_asset_handle
    }

    /// Sets the collision asset handle and marks the template dirty.
    pub fn set_collision_asset_handle(&mut self, handle: impl Into<String>) {
        self.collision_asset_handle = handle.into();
        self.dirty = true;
    }

    /// Marks the template as validated.
    pub fn set_clean(&mut self) {
        self.dirty = false;
    }
}

impl AttributesTemplate for StageAttributes {
    fn handle(&self) -> &str {
        &self.handle
    }

    fn set_handle(&mut self, handle: &str) {
        self.handle = handle.to_string();
    }

    fn set_origin_handle(&mut self, handle: &str) {
        self.origin_handle = handle.to_string();
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }
}
