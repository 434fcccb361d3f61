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

//! Derives the default values of a new stage template.

use stagehand_core::config::{HOUSE_PATH_KEY, NAVMESH_PATH_KEY, NO_LIGHT_KEY};
use stagehand_data::attributes::StageAttributes;
use stagehand_io::path::{change_extension, remove_extension};

use super::file_name::convention_for;
use super::AttributesContext;

/// Populates a fresh template with every value later sources may override.
///
/// Defaults come from, in order: the handle itself and its filename
/// conventions, the manager configuration (lighting, culling, explicit
/// auxiliary paths), and finally the active physics-manager template.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultsLane;

impl DefaultsLane {
    /// Creates a new instance of the DefaultsLane.
    pub fn new() -> Self {
        Self
    }

    /// Builds a new, unregistered template for `handle` with all defaults applied.
    pub fn new_attributes(&self, handle: &str, ctx: &AttributesContext<'_>) -> StageAttributes {
        let mut attributes = StageAttributes::new(handle);

        attributes.set_render_asset_handle(handle);
        attributes.set_collision_asset_handle(handle);
        attributes.use_mesh_collision = true;

        attributes.light_setup = ctx.config.light_setup.clone();
        attributes.requires_lighting = ctx.config.light_setup != NO_LIGHT_KEY;
        attributes.frustum_culling = ctx.config.frustum_culling;

        self.apply_auxiliary_handles(&mut attributes, handle, ctx);
        self.apply_file_name_conventions(&mut attributes);
        self.apply_physics_defaults(&mut attributes, ctx);

        attributes
    }

    /// Derives the navmesh, house and semantic mesh handles from `handle`.
    fn apply_auxiliary_handles(
        &self,
        attributes: &mut StageAttributes,
        handle: &str,
        ctx: &AttributesContext<'_>,
    ) {
        let navmesh = ctx
            .config
            .file_path(NAVMESH_PATH_KEY)
            .unwrap_or_else(|| change_extension(handle, ".navmesh"));
        if ctx.file_system.handle_exists(&navmesh) {
            attributes.navmesh_asset_handle = navmesh;
        }

        let mut house = ctx
            .config
            .file_path(HOUSE_PATH_KEY)
            .unwrap_or_else(|| change_extension(handle, ".house"));
        if !ctx.file_system.handle_exists(&house) {
            house = change_extension(handle, ".scn");
        }

        // The semantic mesh always sits next to the house file.
        attributes.semantic_asset_handle = format!("{}_semantic.ply", remove_extension(&house));
        attributes.house_filename = house;
    }

    /// Tags the render, collision and semantic handles from their filenames.
    ///
    /// Only the render asset decides the template's coordinate frame.
    pub fn apply_file_name_conventions(&self, attributes: &mut StageAttributes) {
        let render = convention_for(attributes.render_asset_handle());
        attributes.render_asset_type = render.asset_type;
        if let Some((up, front)) = render.frame {
            attributes.orient_up = up;
            attributes.orient_front = front;
        }

        attributes.collision_asset_type = convention_for(attributes.collision_asset_handle()).asset_type;
        attributes.semantic_asset_type = convention_for(&attributes.semantic_asset_handle).asset_type;
    }

    /// Copies gravity, friction and restitution from the active physics-manager template.
    ///
    /// Leaves the built-in values untouched if that template is not registered.
    fn apply_physics_defaults(&self, attributes: &mut StageAttributes, ctx: &AttributesContext<'_>) {
        let handle = &ctx.config.physics_manager_handle;
        match ctx.physics_registry.lookup(handle) {
            Some(defaults) => {
                attributes.gravity = defaults.gravity;
                attributes.friction_coefficient = defaults.friction_coefficient;
                attributes.restitution_coefficient = defaults.restitution_coefficient;
            }
            None => log::debug!(
                "DefaultsLane: No physics manager template '{handle}', keeping built-in physics defaults"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes_lane::test_support::{init_logging, FakePhysicsRegistry, Fixture};
    use approx::assert_relative_eq;
    use stagehand_core::asset::AssetType;
    use stagehand_core::math::Vec3;
    use stagehand_core::registry::PhysicsDefaults;
    use stagehand_data::attributes::AttributesTemplate;
    use std::path::PathBuf;

    #[test]
    fn test_asset_handles_default_to_the_handle() {
        init_logging();
        let fixture = Fixture::default();

        let attributes = DefaultsLane::new().new_attributes("scenes/apt.glb", &fixture.context());

        assert_eq!(attributes.handle(), "scenes/apt.glb");
        assert_eq!(attributes.render_asset_handle(), "scenes/apt.glb");
        assert_eq!(attributes.collision_asset_handle(), "scenes/apt.glb");
        assert!(attributes.use_mesh_collision);
        assert!(attributes.is_dirty());
    }

    #[test]
    fn test_lighting_follows_config() {
        let mut fixture = Fixture::default();
        let lane = DefaultsLane::new();

        let unlit = lane.new_attributes("apt.glb", &fixture.context());
        assert_eq!(unlit.light_setup, NO_LIGHT_KEY);
        assert!(!unlit.requires_lighting);
        assert!(!unlit.frustum_culling);

        fixture.config.light_setup = "studio".to_string();
        fixture.config.frustum_culling = true;
        let lit = lane.new_attributes("apt.glb", &fixture.context());
        assert_eq!(lit.light_setup, "studio");
        assert!(lit.requires_lighting);
        assert!(lit.frustum_culling);
    }

    #[test]
    fn test_navmesh_only_set_when_file_exists() {
        let lane = DefaultsLane::new();

        let missing = Fixture::default();
        let attributes = lane.new_attributes("scenes/apt.glb", &missing.context());
        assert!(attributes.navmesh_asset_handle.is_empty());

        let present = Fixture::with_files(&["scenes/apt.navmesh"]);
        let attributes = lane.new_attributes("scenes/apt.glb", &present.context());
        assert_eq!(attributes.navmesh_asset_handle, "scenes/apt.navmesh");
    }

    #[test]
    fn test_navmesh_override_requires_existing_file() {
        let lane = DefaultsLane::new();

        let mut fixture = Fixture::with_files(&["scenes/apt.navmesh"]);
        fixture
            .config
            .file_paths
            .insert(NAVMESH_PATH_KEY.to_string(), PathBuf::from("nav/missing.navmesh"));
        let attributes = lane.new_attributes("scenes/apt.glb", &fixture.context());
        assert!(attributes.navmesh_asset_handle.is_empty());

        let mut fixture = Fixture::with_files(&["nav/custom.navmesh"]);
        fixture
            .config
            .file_paths
            .insert(NAVMESH_PATH_KEY.to_string(), PathBuf::from("nav/custom.navmesh"));
        let attributes = lane.new_attributes("scenes/apt.glb", &fixture.context());
        assert_eq!(attributes.navmesh_asset_handle, "nav/custom.navmesh");
    }

    #[test]
    fn test_house_falls_back_to_scn() {
        let lane = DefaultsLane::new();

        let without_house = Fixture::default();
        let attributes = lane.new_attributes("scenes/apt.glb", &without_house.context());
        assert_eq!(attributes.house_filename, "scenes/apt.scn");
        assert_eq!(attributes.semantic_asset_handle, "scenes/apt_semantic.ply");
        assert_eq!(attributes.semantic_asset_type, AssetType::InstanceMesh);

        let with_house = Fixture::with_files(&["scenes/apt.house"]);
        let attributes = lane.new_attributes("scenes/apt.glb", &with_house.context());
        assert_eq!(attributes.house_filename, "scenes/apt.house");
        assert_eq!(attributes.semantic_asset_handle, "scenes/apt_semantic.ply");
    }

    #[test]
    fn test_house_override_drives_semantic_handle() {
        let mut fixture = Fixture::with_files(&["meta/apt_v2.house"]);
        fixture
            .config
            .file_paths
            .insert(HOUSE_PATH_KEY.to_string(), PathBuf::from("meta/apt_v2.house"));

        let attributes = DefaultsLane::new().new_attributes("scenes/apt.glb", &fixture.context());

        assert_eq!(attributes.house_filename, "meta/apt_v2.house");
        assert_eq!(attributes.semantic_asset_handle, "meta/apt_v2_semantic.ply");
    }

    #[test]
    fn test_file_name_conventions_per_handle() {
        let fixture = Fixture::default();
        let lane = DefaultsLane::new();

        let cases = [
            ("apt_semantic.ply", AssetType::InstanceMesh, Vec3::Y, Vec3::NEG_Z),
            ("apt/mesh.ply", AssetType::PtexMesh, Vec3::Z, Vec3::Y),
            ("suncg/house.json", AssetType::SceneGraph, Vec3::Y, Vec3::NEG_Z),
            ("mp3d/apt.glb", AssetType::ZUpMesh, Vec3::Z, Vec3::Y),
            ("foo.obj", AssetType::Unknown, Vec3::Y, Vec3::NEG_Z),
        ];

        for (handle, asset_type, up, front) in cases {
            let attributes = lane.new_attributes(handle, &fixture.context());
            assert_eq!(attributes.render_asset_type, asset_type, "render type of {handle}");
            assert_eq!(attributes.collision_asset_type, asset_type, "collision type of {handle}");
            assert_eq!(attributes.orient_up, up, "up of {handle}");
            assert_eq!(attributes.orient_front, front, "front of {handle}");
        }
    }

    #[test]
    fn test_collision_type_evaluated_independently() {
        let fixture = Fixture::default();
        let lane = DefaultsLane::new();
        let mut attributes = lane.new_attributes("apt.glb", &fixture.context());

        attributes.set_collision_asset_handle("apt/mesh.ply");
        lane.apply_file_name_conventions(&mut attributes);

        assert_eq!(attributes.render_asset_type, AssetType::ZUpMesh);
        assert_eq!(attributes.collision_asset_type, AssetType::PtexMesh);
        assert_eq!(attributes.orient_up, Vec3::Z);
    }

    #[test]
    fn test_physics_defaults_inherited_when_registered() {
        let lane = DefaultsLane::new();

        let without = Fixture::default();
        let builtin = lane.new_attributes("apt.glb", &without.context());
        assert_eq!(builtin.gravity, Vec3::new(0.0, -9.8, 0.0));

        let mut with = Fixture::default();
        with.physics = FakePhysicsRegistry::with_entry(
            &with.config.physics_manager_handle.clone(),
            PhysicsDefaults {
                gravity: Vec3::new(0.0, 0.0, -9.81),
                friction_coefficient: 0.8,
                restitution_coefficient: 0.2,
            },
        );
        let inherited = lane.new_attributes("apt.glb", &with.context());
        assert_eq!(inherited.gravity, Vec3::new(0.0, 0.0, -9.81));
        assert_relative_eq!(inherited.friction_coefficient, 0.8);
        assert_relative_eq!(inherited.restitution_coefficient, 0.2);
    }
}
