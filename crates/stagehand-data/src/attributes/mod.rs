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

//! Attribute templates and their library.
//!
//! The key components are:
//! - The [`AttributesTemplate`] trait: the minimal contract the library needs
//!   from any template type (identity and validation state).
//! - [`StageAttributes`]: the template describing how a stage is rendered,
//!   collided with, and lit.
//! - [`TemplateLibrary`]: a handle-keyed store with stable integer ids and
//!   copy-on-read semantics.

mod library;
mod stage;

pub use library::TemplateLibrary;
pub use stage::StageAttributes;

/// The contract a type must fulfil to be stored in a [`TemplateLibrary`].
///
/// `Clone` is required because every read API of the library hands out an
/// independent copy rather than a reference into its storage.
pub trait AttributesTemplate: Clone {
    /// The unique handle identifying this template.
    fn handle(&self) -> &str;

    /// Renames the template. Called by the library when it takes ownership.
    fn set_handle(&mut self, handle: &str);

    /// Records the handle under which the template last passed validation.
    fn set_origin_handle(&mut self, handle: &str);

    /// Returns `true` if the template changed since it was last validated.
    fn is_dirty(&self) -> bool;
}
