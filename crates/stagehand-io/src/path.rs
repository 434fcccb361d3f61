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

//! String-level path helpers for deriving asset handles.
//!
//! Handles are plain strings that usually, but not always, name a file. These
//! helpers keep them as strings while delegating the actual path logic to
//! [`std::path`].

use std::path::Path;

/// Replaces the extension of `path` with `extension` (with or without a leading dot).
///
/// A path without an extension gains one.
///
/// # Examples
///
/// ```
/// use stagehand_io::path::change_extension;
/// assert_eq!(change_extension("data/apt.glb", ".navmesh"), "data/apt.navmesh");
/// assert_eq!(change_extension("data/apt", "house"), "data/apt.house");
/// ```
pub fn change_extension(path: &str, extension: &str) -> String {
    Path::new(path)
        .with_extension(extension.trim_start_matches('.'))
        .to_string_lossy()
        .into_owned()
}

/// Removes the extension of `path`, if any.
///
/// # Examples
///
/// ```
/// use stagehand_io::path::remove_extension;
/// assert_eq!(remove_extension("data/apt.house"), "data/apt");
/// ```
pub fn remove_extension(path: &str) -> String {
    Path::new(path)
        .with_extension("")
        .to_string_lossy()
        .into_owned()
}

/// Joins `name` onto `directory`.
///
/// An absolute `name` replaces the directory entirely, and an empty directory
/// leaves `name` untouched. An empty `name` stays empty: it never names the
/// directory itself.
pub fn join(directory: &str, name: &str) -> String {
    if directory.is_empty() || name.is_empty() {
        return name.to_string();
    }
    Path::new(directory)
        .join(name)
        .to_string_lossy()
        .into_owned()
}

/// Returns the directory portion of `path`, or an empty string if it has none.
pub fn parent_directory(path: &str) -> String {
    Path::new(path)
        .parent()
        .map(|dir| dir.to_string_lossy().into_owned())
        .unwrap_or_default()
}
