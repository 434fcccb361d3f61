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

//! Loads structured stage configs from JSON files.

use std::path::Path;

use stagehand_core::config::{ConfigDocument, ConfigLoader};
use stagehand_core::AttributesError;

/// A [`ConfigLoader`] reading JSON documents with `serde_json`.
///
/// Only the parse is performed here. A config must be a JSON object at its top
/// level; anything else is reported as malformed.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonConfigLoader;

impl JsonConfigLoader {
    /// Creates a new JSON config loader.
    pub fn new() -> Self {
        Self
    }

    /// Parses a config document from an in-memory string.
    ///
    /// `origin` is only used to label errors.
    pub fn parse_str(&self, text: &str, origin: &str) -> Result<ConfigDocument, AttributesError> {
        let document: ConfigDocument =
            serde_json::from_str(text).map_err(|e| AttributesError::Load {
                path: origin.to_string(),
                reason: e.to_string(),
            })?;

        if !document.is_object() {
            return Err(AttributesError::Load {
                path: origin.to_string(),
                reason: "top-level value is not a JSON object".to_string(),
            });
        }
        Ok(document)
    }
}

impl ConfigLoader for JsonConfigLoader {
    fn load(&self, path: &Path) -> Result<ConfigDocument, AttributesError> {
        let origin = path.to_string_lossy();
        let text = std::fs::read_to_string(path).map_err(|e| AttributesError::Load {
            path: origin.to_string(),
            reason: e.to_string(),
        })?;
        log::debug!("JsonConfigLoader: Parsing '{origin}'");
        self.parse_str(&text, &origin)
    }
}
