// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Property sets and property patches.
//!
//! A property set is the full configuration record of a UI region (header,
//! footer, ...). Templates never know the whole shape; they only carry a
//! [`PropertyPatch`] with the fields they override.
//!
//! The engine is generic over [`PropertySet`], so any record that can take a
//! patch can be templated:
//!
//! - `serde_json::Map<String, Value>` for dynamic records
//! - typed structs such as [`HeaderProps`](crate::regions::HeaderProps),
//!   which overlay through serde with [`overlay_with_serde`]

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// A partial property set: field name to replacement value.
pub type PropertyPatch = Map<String, Value>;

/// A record that templates can overlay.
///
/// Implementations must be total: a patch containing keys the record does
/// not know, or values it cannot hold, leaves those fields unchanged instead
/// of failing.
pub trait PropertySet: Clone {
    /// Overwrites every field named in `patch` with the patched value.
    fn overlay(&mut self, patch: &PropertyPatch);
}

impl PropertySet for Map<String, Value> {
    fn overlay(&mut self, patch: &PropertyPatch) {
        for (key, value) in patch {
            self.insert(key.clone(), value.clone());
        }
    }
}

/// Overlays `patch` onto a typed record by round-tripping it through JSON.
///
/// Keys are applied one at a time; a key whose value does not fit the
/// record's field type is skipped with a warning, the remaining keys still
/// apply. Keys the record does not declare are ignored by deserialization.
pub fn overlay_with_serde<T>(target: &mut T, patch: &PropertyPatch)
where
    T: Serialize + DeserializeOwned,
{
    if patch.is_empty() {
        return;
    }

    let mut fields = match serde_json::to_value(&*target) {
        Ok(Value::Object(fields)) => fields,
        Ok(_) => {
            tracing::warn!("Property set does not serialize to an object, patch ignored");
            return;
        }
        Err(e) => {
            tracing::warn!("Failed to serialize property set, patch ignored: {}", e);
            return;
        }
    };

    for (key, value) in patch {
        let previous = fields.insert(key.clone(), value.clone());
        if let Err(e) = serde_json::from_value::<T>(Value::Object(fields.clone())) {
            tracing::warn!("Skipping patch field {:?}: {}", key, e);
            match previous {
                Some(previous) => fields.insert(key.clone(), previous),
                None => fields.remove(key),
            };
        }
    }

    match serde_json::from_value(Value::Object(fields)) {
        Ok(next) => *target = next,
        Err(e) => tracing::warn!("Failed to rebuild property set, patch ignored: {}", e),
    }
}
