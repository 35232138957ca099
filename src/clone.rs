use crate::descriptors::{DescriptorMap, define_properties, own_property_descriptors};
use crate::error::Error;
use crate::object::{Object, PropertyDescriptor};
use crate::types::Value;

/// Per-key descriptor transformation. Receives the source's descriptor for
/// its key, or `None` when the source has no such key, and returns the
/// descriptor to install. The return value is trusted verbatim; a malformed
/// descriptor fails at the installation step.
pub type Shim = Box<dyn Fn(Option<PropertyDescriptor>) -> PropertyDescriptor>;

/// Keyed shim collection. At most one shim per key; registering a key again
/// replaces the shim but keeps its position. Shims run in registration
/// order.
#[derive(Default)]
pub struct ShimMap {
    entries: Vec<(String, Shim)>,
}

impl ShimMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        key: &str,
        f: impl Fn(Option<PropertyDescriptor>) -> PropertyDescriptor + 'static,
    ) {
        let shim: Shim = Box::new(f);
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| k == key) {
            entry.1 = shim;
        } else {
            self.entries.push((key.to_string(), shim));
        }
    }

    /// Chaining form of [`ShimMap::insert`].
    pub fn with(
        mut self,
        key: &str,
        f: impl Fn(Option<PropertyDescriptor>) -> PropertyDescriptor + 'static,
    ) -> Self {
        self.insert(key, f);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &Shim)> {
        self.entries.iter().map(|(k, s)| (k.as_str(), s))
    }
}

/// Copy every own property definition of `source` onto `target`, passing
/// the keys named in `shims` through their transformations first. Values
/// are shared, attributes are preserved exactly, and an own property named
/// `__proto__` is carried over as plain data — the live prototype of
/// `target` (and of every shared ancestor) is never touched. Returns
/// `target` for chaining.
///
/// `source` is never mutated. If installation is rejected partway, `target`
/// keeps the already installed prefix; callers needing all-or-nothing
/// semantics should clone onto a fresh object first.
pub fn clone_object(target: &Object, source: &Object, shims: &ShimMap) -> Result<Object, Error> {
    let mut descriptors = own_property_descriptors(source);
    apply_shims(&mut descriptors, shims);
    define_properties(target, descriptors)?;
    Ok(target.clone())
}

/// Value-level form of [`clone_object`], mirroring the loose calling
/// convention of the host builtins: the target must be an object, a nullish
/// source is an error, and any other primitive source enumerates to no own
/// properties.
pub fn clone(target: &Value, source: &Value, shims: &ShimMap) -> Result<Value, Error> {
    let Some(target_obj) = target.as_object() else {
        return Err(Error::InvalidTarget(
            "clone called on non-object target".to_string(),
        ));
    };
    let mut descriptors = match source {
        Value::Undefined | Value::Null => {
            return Err(Error::InvalidSource(
                "Cannot convert undefined or null to object".to_string(),
            ));
        }
        Value::Object(o) => own_property_descriptors(o),
        // ToObject on a remaining primitive yields a wrapper with no own
        // properties in this model.
        _ => DescriptorMap::new(),
    };
    apply_shims(&mut descriptors, shims);
    define_properties(target_obj, descriptors)?;
    Ok(target.clone())
}

fn apply_shims(descriptors: &mut DescriptorMap, shims: &ShimMap) {
    for (key, shim) in shims.iter() {
        let previous = descriptors.get(key).cloned();
        descriptors.insert(key, shim(previous));
    }
}
