use rustc_hash::FxHashMap;

use crate::error::Error;
use crate::object::{Object, PropertyDescriptor};

/// Insertion-ordered mapping from property key to descriptor. Built fresh
/// per clone call and consumed exactly once by [`define_properties`].
/// Replacing an existing key keeps its position; a new key appends.
#[derive(Debug, Default)]
pub struct DescriptorMap {
    entries: FxHashMap<String, PropertyDescriptor>,
    order: Vec<String>,
}

impl DescriptorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&PropertyDescriptor> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: &str, desc: PropertyDescriptor) {
        if !self.entries.contains_key(key) {
            self.order.push(key.to_string());
        }
        self.entries.insert(key.to_string(), desc);
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyDescriptor)> {
        self.order.iter().filter_map(|k| {
            self.entries
                .get(k)
                .map(|d| (k.as_str(), d))
        })
    }
}

/// Bulk descriptor enumeration: every own property of `source`, enumerable
/// or not, data or accessor, in insertion order, exact descriptors as
/// stored. An own property literally named `__proto__` comes back as an
/// ordinary entry; the live prototype link is not a property and never
/// appears.
pub fn own_property_descriptors(source: &Object) -> DescriptorMap {
    let mut map = DescriptorMap::new();
    for key in source.own_keys() {
        if let Some(desc) = source.get_own_property(&key) {
            map.insert(&key, desc);
        }
    }
    map
}

/// Bulk descriptor installation. Validates every entry first, so a
/// malformed descriptor surfaces before `target` is touched; installation
/// itself is per-key in mapping order, and a rejection partway leaves the
/// already installed prefix in place.
pub fn define_properties(target: &Object, descriptors: DescriptorMap) -> Result<(), Error> {
    for (key, desc) in descriptors.iter() {
        desc.check_well_formed()
            .map_err(|reason| Error::InvalidDefinition {
                key: key.to_string(),
                reason,
            })?;
    }
    let DescriptorMap { mut entries, order } = descriptors;
    for key in order {
        let Some(desc) = entries.remove(&key) else {
            continue;
        };
        if !target.define_own_property(&key, desc) {
            return Err(Error::InvalidTarget(format!(
                "Cannot define property {key}, object is not extensible or property is non-configurable"
            )));
        }
    }
    Ok(())
}
