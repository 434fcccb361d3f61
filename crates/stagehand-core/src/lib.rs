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

//! # Stagehand Core
//!
//! Foundational crate containing the core types, capability traits, and error
//! contracts shared by every layer of the stage attributes system.
//!
//! Nothing in this crate touches the filesystem or parses configuration files.
//! It only describes *what* the sibling collaborators must be able to do, so that
//! the higher layers can be wired to real registries in production and to small
//! in-memory fakes in tests.

#![warn(missing_docs)]

pub mod asset;
pub mod config;
pub mod error;
pub mod math;
pub mod registry;
pub mod vfs;

pub use error::AttributesError;
