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

//! A handle-keyed store of validated attribute templates with stable ids.

use std::collections::HashMap;

use super::AttributesTemplate;

/// A library owning validated templates of type `T`.
///
/// Templates live in an arena indexed by id, with a handle → id index on the
/// side. Ids are handed out monotonically and never reused, so an id cached by
/// a caller can never silently start referring to a different template after a
/// removal.
///
/// Reads hand out copies (`get_copy_*`); the only way to change a stored
/// template is to [`upsert`](TemplateLibrary::upsert) it again.
#[derive(Debug, Clone)]
pub struct TemplateLibrary<T: AttributesTemplate> {
    /// Arena of templates; a slot's index is its id. Removed slots stay `None`.
    slots: Vec<Option<T>>,
    /// Handle → id index.
    ids_by_handle: HashMap<String, i32>,
}

impl<T: AttributesTemplate> Default for TemplateLibrary<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: AttributesTemplate> TemplateLibrary<T> {
    /// Creates a new, empty library.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            ids_by_handle: HashMap::new(),
        }
    }

    /// Inserts `template` under `handle`, or replaces the template already stored there.
    ///
    /// The stored template is renamed to `handle` and its origin handle is set
    /// to `handle`. Re-registering an existing handle keeps its id.
    ///
    /// # Returns
    /// The id of the stored template.
    ///
    /// # Panics
    /// In debug builds, if `template` is still dirty. Templates are validated
    /// before they are stored.
    pub fn upsert(&mut self, handle: &str, mut template: T) -> i32 {
        debug_assert!(
            !template.is_dirty(),
            "templates must be validated before entering the library"
        );
        template.set_handle(handle);
        template.set_origin_handle(handle);

        if let Some(&id) = self.ids_by_handle.get(handle) {
            log::debug!("TemplateLibrary: Replacing template '{handle}' (id {id})");
            self.slots[id as usize] = Some(template);
            return id;
        }

        let id = self.slots.len() as i32;
        log::debug!("TemplateLibrary: Adding template '{handle}' with id {id}");
        self.slots.push(Some(template));
        self.ids_by_handle.insert(handle.to_string(), id);
        id
    }

    /// Returns a reference to the stored template registered under `handle`.
    pub fn get_by_handle(&self, handle: &str) -> Option<&T> {
        self.id_by_handle(handle).and_then(|id| self.slot(id))
    }

    /// Returns an independent copy of the template registered under `handle`.
    pub fn get_copy_by_handle(&self, handle: &str) -> Option<T> {
        self.get_by_handle(handle).cloned()
    }

    /// Returns an independent copy of the template registered under `id`.
    pub fn get_copy_by_id(&self, id: i32) -> Option<T> {
        self.slot(id).cloned()
    }

    /// Removes the template registered under `handle`, returning it to the caller.
    ///
    /// The id it was registered under is retired, never handed out again.
    pub fn remove_by_handle(&mut self, handle: &str) -> Option<T> {
        let id = self.ids_by_handle.remove(handle)?;
        log::debug!("TemplateLibrary: Removing template '{handle}' (id {id})");
        self.slots.get_mut(id as usize).and_then(Option::take)
    }

    /// Removes the template registered under `id`, returning it to the caller.
    pub fn remove_by_id(&mut self, id: i32) -> Option<T> {
        let handle = self.handle_by_id(id)?.to_string();
        self.remove_by_handle(&handle)
    }

    /// Returns the id of the template registered under `handle`.
    pub fn id_by_handle(&self, handle: &str) -> Option<i32> {
        self.ids_by_handle.get(handle).copied()
    }

    /// Returns the handle of the template registered under `id`.
    pub fn handle_by_id(&self, id: i32) -> Option<&str> {
        self.slot(id).map(AttributesTemplate::handle)
    }

    /// Returns `true` if a template is registered under `handle`.
    pub fn contains(&self, handle: &str) -> bool {
        self.ids_by_handle.contains_key(handle)
    }

    /// Returns the number of registered templates.
    pub fn len(&self) -> usize {
        self.ids_by_handle.len()
    }

    /// Returns `true` if no templates are registered.
    pub fn is_empty(&self) -> bool {
        self.ids_by_handle.is_empty()
    }

    /// Iterates over registered handles in registration order.
    pub fn handles(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().flatten().map(AttributesTemplate::handle)
    }

    /// Lists handles, in registration order, filtered by a substring.
    ///
    /// With `contains = true` the handles containing `substring` are returned;
    /// with `contains = false`, those that do not. The empty substring is
    /// contained in every handle. For any substring the two listings partition
    /// the full set of handles.
    pub fn handles_by_substring(
        &self,
        substring: &str,
        contains: bool,
        case_insensitive: bool,
    ) -> Vec<String> {
        let needle = if case_insensitive {
            substring.to_lowercase()
        } else {
            substring.to_string()
        };

        self.handles()
            .filter(|handle| {
                let found = if case_insensitive {
                    handle.to_lowercase().contains(&needle)
                } else {
                    handle.contains(&needle)
                };
                found == contains
            })
            .map(str::to_string)
            .collect()
    }

    fn slot(&self, id: i32) -> Option<&T> {
        usize::try_from(id)
            .ok()
            .and_then(|index| self.slots.get(index))
            .and_then(Option::as_ref)
    }
}
