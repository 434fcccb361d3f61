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

//! The error type shared by every stage of template creation and registration.

use thiserror::Error;

/// An error raised while creating, validating, or looking up an attribute template.
///
/// None of these errors are fatal to the calling process. They are reported
/// to the caller of the failing operation and no state is retained between calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributesError {
    /// A structured config file could not be read or is not well formed.
    #[error("Failed to load config '{path}': {reason}")]
    Load {
        /// The path of the config that failed to load.
        path: String,
        /// A description of the underlying I/O or parse failure.
        reason: String,
    },
    /// A primitive-based template was requested for a handle the primitive
    /// registry does not know.
    #[error("No primitive with handle '{0}' exists")]
    PrimitiveNotFound(String),
    /// The template has no render asset handle at all.
    #[error("Template '{0}' does not have a render asset handle specified")]
    EmptyRenderAsset(String),
    /// The render asset resolves to neither a primitive nor an existing file.
    #[error(
        "Render asset '{render_asset}' of template '{handle}' does not correspond to any existing file or primitive"
    )]
    RenderAssetUnresolved {
        /// The handle of the template being registered.
        handle: String,
        /// The render asset handle that failed to resolve.
        render_asset: String,
    },
    /// No template is registered under the given handle or id.
    #[error("No template registered for '{0}'")]
    NotFound(String),
}
