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

//! Asset categorization from filename conventions.

use stagehand_core::asset::AssetType;
use stagehand_core::math::Vec3;

/// What a filename alone says about an asset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FileNameConvention {
    /// The asset category implied by the filename.
    pub asset_type: AssetType,
    /// The `(up, front)` frame implied by the filename, or `None` to leave the
    /// template's frame unchanged.
    pub frame: Option<(Vec3, Vec3)>,
}

/// The frame used by Y-up assets.
const Y_UP_FRAME: (Vec3, Vec3) = (Vec3::Y, Vec3::NEG_Z);

/// The frame used by Z-up assets (gravity along `-Z`).
const Z_UP_FRAME: (Vec3, Vec3) = (Vec3::Z, Vec3::Y);

/// Exact-suffix conventions, checked in order.
const CONVENTIONS: [(&str, AssetType, Option<(Vec3, Vec3)>); 4] = [
    ("_semantic.ply", AssetType::InstanceMesh, None),
    ("mesh.ply", AssetType::PtexMesh, Some(Z_UP_FRAME)),
    ("house.json", AssetType::SceneGraph, Some(Y_UP_FRAME)),
    (".glb", AssetType::ZUpMesh, Some(Z_UP_FRAME)),
];

/// Returns the convention matching `file_name`.
///
/// Suffixes are matched exactly and case-sensitively. Anything unmatched is
/// [`AssetType::Unknown`] with a Y-up frame.
pub fn convention_for(file_name: &str) -> FileNameConvention {
    CONVENTIONS
        .iter()
        .find(|(suffix, _, _)| file_name.ends_with(suffix))
        .map(|&(_, asset_type, frame)| FileNameConvention { asset_type, frame })
        .unwrap_or(FileNameConvention {
            asset_type: AssetType::Unknown,
            frame: Some(Y_UP_FRAME),
        })
}
