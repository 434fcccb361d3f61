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

//! Acts as the agent for stage attribute templates.
//!
//! This module is the public-facing API for turning stage handles into
//! validated templates and querying the ones already registered. The work of
//! deriving, overlaying, and validating values is delegated to the lanes in
//! `stagehand_lanes::attributes_lane`; the agent decides which lanes run and
//! owns the resulting library.

mod manager;
mod strategy;

pub use manager::StageAttributesManager;
pub use strategy::CreationStrategy;
