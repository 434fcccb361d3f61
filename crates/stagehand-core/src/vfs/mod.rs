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

//! The filesystem seam used to decide whether a handle names a real file.
//!
//! Template creation and validation only ever ask one question of the
//! filesystem: does this path exist? Keeping that behind [`FileSystem`] lets
//! tests describe a virtual set of files without touching the disk.

use std::path::Path;

/// Answers existence queries for asset and config paths.
pub trait FileSystem: Send + Sync {
    /// Returns `true` if `path` exists.
    fn exists(&self, path: &Path) -> bool;

    /// Convenience wrapper over [`exists`](FileSystem::exists) for string handles.
    fn handle_exists(&self, handle: &str) -> bool {
        !handle.is_empty() && self.exists(Path::new(handle))
    }
}
