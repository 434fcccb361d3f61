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

//! Defines how the system categorizes the assets a template refers to.
//!
//! A stage template names up to three visual/physical assets (render, collision
//! and semantic). Each is tagged with an [`AssetType`] that tells the consumers
//! which loader and coordinate convention apply.

use serde::{Deserialize, Serialize};

/// Substring that marks a template handle as deliberately having no render asset.
///
/// A handle such as `"NONE"` or `"empty_NONE.glb"` registers successfully even
/// though its render asset resolves to neither a primitive nor a file.
pub const NONE_SENTINEL: &str = "NONE";

/// The category of an asset referenced by an attribute template.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetType {
    /// The asset could not be categorized from its handle.
    #[default]
    Unknown,
    /// A procedurally generated shape provided by the primitive registry.
    Primitive,
    /// A per-vertex instance-labelled mesh (`*_semantic.ply`).
    InstanceMesh,
    /// A PTex-textured reconstruction mesh (`*mesh.ply`).
    PtexMesh,
    /// A scene-graph description of a whole house (`*house.json`).
    SceneGraph,
    /// A binary glTF mesh authored with gravity along `-Z` (`*.glb`).
    ZUpMesh,
}
