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

//! The gate a stage template must pass before it may enter a library.

use stagehand_core::asset::{AssetType, NONE_SENTINEL};
use stagehand_core::AttributesError;
use stagehand_data::attributes::StageAttributes;

use super::AttributesContext;

/// How an asset handle resolved against the primitive registry and the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolution {
    Primitive,
    File,
    /// The template handle carries the "no asset" sentinel.
    Sentinel,
    Unresolved,
}

/// Validates the asset references of a stage template.
///
/// Render assets must resolve to a primitive, an existing file, or the
/// sentinel case; anything else rejects the template. Collision assets never
/// reject: an unresolved collision asset falls back to the render asset.
#[derive(Debug, Default, Clone, Copy)]
pub struct FinalizeLane;

impl FinalizeLane {
    /// Creates a new instance of the FinalizeLane.
    pub fn new() -> Self {
        Self
    }

    /// Resolves the asset references of `attributes` about to be registered under `handle`.
    ///
    /// On success the template is marked clean and ready for the library.
    ///
    /// # Errors
    /// - [`AttributesError::EmptyRenderAsset`] if no render asset is set.
    /// - [`AttributesError::RenderAssetUnresolved`] if the render asset resolves to nothing
    ///   and `handle` does not contain the sentinel.
    pub fn validate(
        &self,
        attributes: &mut StageAttributes,
        handle: &str,
        ctx: &AttributesContext<'_>,
    ) -> Result<(), AttributesError> {
        if attributes.render_asset_handle().is_empty() {
            log::error!(
                "FinalizeLane: Attributes template named '{handle}' does not have a render asset handle specified. Aborting."
            );
            return Err(AttributesError::EmptyRenderAsset(handle.to_string()));
        }

        match self.resolve(attributes.render_asset_handle(), handle, ctx) {
            Resolution::Primitive => attributes.render_asset_is_primitive = true,
            Resolution::File => attributes.render_asset_is_primitive = false,
            Resolution::Sentinel => {
                attributes.render_asset_type = AssetType::Unknown;
                attributes.render_asset_is_primitive = false;
            }
            Resolution::Unresolved => {
                log::error!(
                    "FinalizeLane: Render asset handle '{}' specified in stage template '{handle}' does not correspond to any existing file or primitive render asset. Aborting.",
                    attributes.render_asset_handle()
                );
                return Err(AttributesError::RenderAssetUnresolved {
                    handle: handle.to_string(),
                    render_asset: attributes.render_asset_handle().to_string(),
                });
            }
        }

        match self.resolve(attributes.collision_asset_handle(), handle, ctx) {
            Resolution::Primitive => attributes.collision_asset_is_primitive = true,
            Resolution::File => attributes.collision_asset_is_primitive = false,
            Resolution::Sentinel => {
                attributes.collision_asset_type = AssetType::Unknown;
                attributes.collision_asset_is_primitive = false;
            }
            Resolution::Unresolved => {
                log::info!(
                    "FinalizeLane: Collision asset handle '{}' specified in stage template '{handle}' does not correspond to any existing file or primitive, using render asset '{}' instead.",
                    attributes.collision_asset_handle(),
                    attributes.render_asset_handle()
                );
                let render = attributes.render_asset_handle().to_string();
                attributes.set_collision_asset_handle(render);
                attributes.collision_asset_is_primitive = attributes.render_asset_is_primitive;
            }
        }

        attributes.set_clean();
        Ok(())
    }

    /// Resolves one asset handle. The sentinel is looked for in the template
    /// `handle`, not in the asset handle itself.
    fn resolve(&self, asset: &str, handle: &str, ctx: &AttributesContext<'_>) -> Resolution {
        if ctx.object_registry.is_valid_primitive_handle(asset) {
            Resolution::Primitive
        } else if ctx.file_system.handle_exists(asset) {
            Resolution::File
        } else if handle.contains(NONE_SENTINEL) {
            Resolution::Sentinel
        } else {
            Resolution::Unresolved
        }
    }
}
