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

//! # Stagehand Lanes
//!
//! The pipelines that turn a handle into a validated attribute template.
//!
//! Each lane owns one step of template resolution and depends only on the
//! narrow capabilities bundled in an [`AttributesContext`](attributes_lane::AttributesContext):
//! - [`DefaultsLane`](attributes_lane::DefaultsLane) derives values from filename
//!   conventions, the manager configuration, and inherited physics defaults.
//! - [`ConfigOverlayLane`](attributes_lane::ConfigOverlayLane) overlays the
//!   fields explicitly present in a structured stage config.
//! - [`FinalizeLane`](attributes_lane::FinalizeLane) is the registration gate.

#![warn(missing_docs)]

pub mod attributes_lane;
