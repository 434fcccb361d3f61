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

//! # Stagehand IO
//!
//! Concrete implementations of the I/O contracts declared in `stagehand-core`:
//! the native filesystem, the JSON stage config loader, and the string path
//! helpers used to derive auxiliary asset handles.

#![warn(missing_docs)]

pub mod fs;
pub mod json;
pub mod path;

pub use fs::NativeFileSystem;
pub use json::JsonConfigLoader;
