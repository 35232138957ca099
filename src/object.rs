use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::error::Error;
use crate::types::Value;

/// Host function backing a callable object (getters, setters, methods).
pub struct NativeFunction {
    name: String,
    arity: usize,
    func: Rc<dyn Fn(&Value, &[Value]) -> Result<Value, Error>>,
}

impl NativeFunction {
    pub fn new(
        name: impl Into<String>,
        arity: usize,
        f: impl Fn(&Value, &[Value]) -> Result<Value, Error> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            arity,
            func: Rc::new(f),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn call(&self, this: &Value, args: &[Value]) -> Result<Value, Error> {
        (self.func)(this, args)
    }
}

impl Clone for NativeFunction {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            arity: self.arity,
            func: self.func.clone(),
        }
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeFunction({:?}, {})", self.name, self.arity)
    }
}

/// Full metadata for one property. Fields are optional so a descriptor can
/// be partial when handed to [`Object::define_own_property`]; a stored
/// descriptor is always completed to exactly one of the two shapes
/// (value/writable or get/set, plus both flags).
#[derive(Debug, Clone, Default)]
pub struct PropertyDescriptor {
    pub value: Option<Value>,
    pub writable: Option<bool>,
    pub get: Option<Value>,
    pub set: Option<Value>,
    pub enumerable: Option<bool>,
    pub configurable: Option<bool>,
}

impl PropertyDescriptor {
    pub fn data(value: Value, writable: bool, enumerable: bool, configurable: bool) -> Self {
        Self {
            value: Some(value),
            writable: Some(writable),
            get: None,
            set: None,
            enumerable: Some(enumerable),
            configurable: Some(configurable),
        }
    }

    pub fn data_default(value: Value) -> Self {
        Self::data(value, true, true, true)
    }

    pub fn accessor(get: Value, set: Value, enumerable: bool, configurable: bool) -> Self {
        Self {
            value: None,
            writable: None,
            get: Some(get),
            set: Some(set),
            enumerable: Some(enumerable),
            configurable: Some(configurable),
        }
    }

    pub fn is_data_descriptor(&self) -> bool {
        self.value.is_some() || self.writable.is_some()
    }

    pub fn is_accessor_descriptor(&self) -> bool {
        self.get.is_some() || self.set.is_some()
    }

    /// Rejects descriptors that mix the two shapes or carry a non-callable
    /// getter/setter. The reason string becomes an `InvalidDefinition`.
    pub fn check_well_formed(&self) -> Result<(), String> {
        if self.is_data_descriptor() && self.is_accessor_descriptor() {
            return Err(
                "Invalid property descriptor. Cannot both specify accessors and a value or writable attribute"
                    .to_string(),
            );
        }
        if let Some(ref g) = self.get
            && !g.is_undefined()
            && !g.is_callable()
        {
            return Err("Getter must be a function".to_string());
        }
        if let Some(ref s) = self.set
            && !s.is_undefined()
            && !s.is_callable()
        {
            return Err("Setter must be a function".to_string());
        }
        Ok(())
    }

    /// Fill every absent field with its default, producing a descriptor in
    /// exactly one of the two shapes. A generic descriptor completes to a
    /// data descriptor with an undefined value.
    pub fn completed(&self) -> PropertyDescriptor {
        if self.is_accessor_descriptor() {
            PropertyDescriptor {
                value: None,
                writable: None,
                get: Some(self.get.clone().unwrap_or(Value::Undefined)),
                set: Some(self.set.clone().unwrap_or(Value::Undefined)),
                enumerable: Some(self.enumerable.unwrap_or(false)),
                configurable: Some(self.configurable.unwrap_or(false)),
            }
        } else {
            PropertyDescriptor {
                value: Some(self.value.clone().unwrap_or(Value::Undefined)),
                writable: Some(self.writable.unwrap_or(false)),
                get: None,
                set: None,
                enumerable: Some(self.enumerable.unwrap_or(false)),
                configurable: Some(self.configurable.unwrap_or(false)),
            }
        }
    }
}

#[derive(Debug)]
pub struct ObjectData {
    pub properties: FxHashMap<String, PropertyDescriptor>,
    pub property_order: Vec<String>,
    pub prototype: Option<Object>,
    pub callable: Option<NativeFunction>,
    pub extensible: bool,
}

impl ObjectData {
    fn new() -> Self {
        Self {
            properties: FxHashMap::default(),
            property_order: Vec::new(),
            prototype: None,
            callable: None,
            extensible: true,
        }
    }
}

/// Shared handle to one object. Cloning the handle aliases the same object;
/// identity is pointer identity.
#[derive(Clone)]
pub struct Object(Rc<RefCell<ObjectData>>);

pub const PROTO_KEY: &str = "__proto__";

impl Object {
    pub fn new() -> Self {
        Object(Rc::new(RefCell::new(ObjectData::new())))
    }

    pub fn with_prototype(proto: &Object) -> Self {
        let obj = Object::new();
        obj.0.borrow_mut().prototype = Some(proto.clone());
        obj
    }

    pub fn function(f: NativeFunction) -> Self {
        let obj = Object::new();
        obj.0.borrow_mut().callable = Some(f);
        obj
    }

    pub fn ptr_eq(&self, other: &Object) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn is_callable(&self) -> bool {
        self.0.borrow().callable.is_some()
    }

    pub fn call(&self, this: &Value, args: &[Value]) -> Result<Value, Error> {
        let f = self.0.borrow().callable.clone();
        match f {
            Some(f) => f.call(this, args),
            None => Err(Error::NotCallable("object is not a function".to_string())),
        }
    }

    pub fn prototype(&self) -> Option<Object> {
        self.0.borrow().prototype.clone()
    }

    /// OrdinarySetPrototypeOf checks: writing the current prototype back is
    /// a no-op; otherwise the object must be extensible and the new chain
    /// must not loop back through this object.
    pub fn set_prototype_of(&self, proto: Option<Object>) -> Result<(), Error> {
        let same = match (&proto, self.prototype()) {
            (None, None) => true,
            (Some(p), Some(current)) => p.ptr_eq(&current),
            _ => false,
        };
        if same {
            return Ok(());
        }
        if !self.is_extensible() {
            return Err(Error::InvalidTarget(
                "setPrototypeOf called on non-extensible object".to_string(),
            ));
        }
        let mut cursor = proto.clone();
        while let Some(p) = cursor {
            if p.ptr_eq(self) {
                return Err(Error::InvalidTarget("Cyclic __proto__ value".to_string()));
            }
            cursor = p.prototype();
        }
        self.0.borrow_mut().prototype = proto;
        Ok(())
    }

    pub fn is_extensible(&self) -> bool {
        self.0.borrow().extensible
    }

    pub fn prevent_extensions(&self) {
        self.0.borrow_mut().extensible = false;
    }

    /// Non-extensible plus every own property non-configurable (and data
    /// properties non-writable).
    pub fn freeze(&self) {
        let mut b = self.0.borrow_mut();
        b.extensible = false;
        for desc in b.properties.values_mut() {
            desc.configurable = Some(false);
            if desc.writable.is_some() {
                desc.writable = Some(false);
            }
        }
    }

    pub fn has_own_property(&self, key: &str) -> bool {
        self.0.borrow().properties.contains_key(key)
    }

    pub fn get_own_property(&self, key: &str) -> Option<PropertyDescriptor> {
        self.0.borrow().properties.get(key).cloned()
    }

    /// Every own key, enumerable or not, in insertion order.
    pub fn own_keys(&self) -> Vec<String> {
        self.0.borrow().property_order.clone()
    }

    /// Own keys with enumerable not set to false, in insertion order.
    pub fn enumerable_keys(&self) -> Vec<String> {
        let b = self.0.borrow();
        b.property_order
            .iter()
            .filter(|k| {
                b.properties
                    .get(*k)
                    .is_some_and(|d| d.enumerable != Some(false))
            })
            .cloned()
            .collect()
    }

    /// Ordinary [[DefineOwnProperty]]. Installs `desc` as an own property of
    /// this object, `__proto__` included — the key is never interpreted as
    /// the live prototype pointer here. Returns false when the definition is
    /// rejected (non-extensible object, incompatible non-configurable
    /// current).
    pub fn define_own_property(&self, key: &str, desc: PropertyDescriptor) -> bool {
        let mut b = self.0.borrow_mut();
        let new_desc = if let Some(current) = b.properties.get(key) {
            if current.configurable == Some(false) {
                if desc.configurable == Some(true) {
                    return false;
                }
                if let Some(e) = desc.enumerable
                    && Some(e) != current.enumerable
                {
                    return false;
                }
                if current.is_data_descriptor() && desc.is_accessor_descriptor() {
                    return false;
                }
                if current.is_accessor_descriptor() && desc.is_data_descriptor() {
                    return false;
                }
                if current.is_data_descriptor()
                    && desc.is_data_descriptor()
                    && current.writable == Some(false)
                {
                    if desc.writable == Some(true) {
                        return false;
                    }
                    if let Some(ref v) = desc.value {
                        let cur_v = current.value.clone().unwrap_or(Value::Undefined);
                        if !v.same_value(&cur_v) {
                            return false;
                        }
                    }
                }
                if current.is_accessor_descriptor() && desc.is_accessor_descriptor() {
                    if let Some(ref g) = desc.get
                        && !g.same_value(current.get.as_ref().unwrap_or(&Value::Undefined))
                    {
                        return false;
                    }
                    if let Some(ref s) = desc.set
                        && !s.same_value(current.set.as_ref().unwrap_or(&Value::Undefined))
                    {
                        return false;
                    }
                }
            }
            merge_descriptor(current, &desc)
        } else {
            if !b.extensible {
                return false;
            }
            desc.completed()
        };
        if !b.properties.contains_key(key) {
            b.property_order.push(key.to_string());
        }
        b.properties.insert(key.to_string(), new_desc);
        true
    }

    /// Shorthand for defining a plain writable/enumerable/configurable data
    /// property.
    pub fn insert_value(&self, key: &str, value: Value) {
        let mut b = self.0.borrow_mut();
        if !b.properties.contains_key(key) {
            b.property_order.push(key.to_string());
        }
        b.properties
            .insert(key.to_string(), PropertyDescriptor::data_default(value));
    }

    pub fn delete(&self, key: &str) -> bool {
        let mut b = self.0.borrow_mut();
        match b.properties.get(key) {
            Some(d) if d.configurable == Some(false) => false,
            Some(_) => {
                b.properties.remove(key);
                b.property_order.retain(|k| k != key);
                true
            }
            None => true,
        }
    }

    /// Ordinary [[Get]]: own property first (invoking a getter with this
    /// object as the receiver), then the prototype chain. Reading
    /// `__proto__` with no shadowing own property yields the live prototype.
    pub fn get(&self, key: &str) -> Result<Value, Error> {
        self.get_with_receiver(key, &Value::Object(self.clone()))
    }

    fn get_with_receiver(&self, key: &str, receiver: &Value) -> Result<Value, Error> {
        let own = self.0.borrow().properties.get(key).cloned();
        if let Some(desc) = own {
            if desc.is_accessor_descriptor() {
                let getter = desc.get.unwrap_or(Value::Undefined);
                return invoke_accessor(&getter, receiver, &[]);
            }
            return Ok(desc.value.unwrap_or(Value::Undefined));
        }
        if key == PROTO_KEY {
            return Ok(match self.prototype() {
                Some(p) => Value::Object(p),
                None => Value::Null,
            });
        }
        let proto = self.0.borrow().prototype.clone();
        match proto {
            Some(p) => p.get_with_receiver(key, receiver),
            None => Ok(Value::Undefined),
        }
    }

    /// Ordinary assignment. Assigning `__proto__` with no shadowing own
    /// property rewires the live prototype when the value is an object or
    /// null — the exact behavior a descriptor-level copy must never trigger.
    pub fn set(&self, key: &str, value: Value) -> Result<(), Error> {
        if key == PROTO_KEY && !self.has_own_property(key) {
            match value {
                Value::Object(p) => self.set_prototype_of(Some(p))?,
                Value::Null => self.set_prototype_of(None)?,
                // Primitive assignment leaves the prototype slot alone.
                _ => {}
            }
            return Ok(());
        }

        let own = self.0.borrow().properties.get(key).cloned();
        if let Some(desc) = own {
            if desc.is_accessor_descriptor() {
                let setter = desc.set.unwrap_or(Value::Undefined);
                if setter.is_undefined() {
                    return Err(Error::InvalidTarget(format!(
                        "Cannot set property '{key}' which has only a getter"
                    )));
                }
                invoke_accessor(&setter, &Value::Object(self.clone()), &[value])?;
                return Ok(());
            }
            if desc.writable == Some(false) {
                return Err(Error::InvalidTarget(format!(
                    "Cannot assign to read only property '{key}'"
                )));
            }
            let mut b = self.0.borrow_mut();
            if let Some(d) = b.properties.get_mut(key) {
                d.value = Some(value);
            }
            return Ok(());
        }

        // Inherited accessors and non-writable data properties block the
        // assignment before an own property is created.
        let mut cursor = self.0.borrow().prototype.clone();
        while let Some(p) = cursor {
            let found = p.0.borrow().properties.get(key).cloned();
            if let Some(desc) = found {
                if desc.is_accessor_descriptor() {
                    let setter = desc.set.unwrap_or(Value::Undefined);
                    if setter.is_undefined() {
                        return Err(Error::InvalidTarget(format!(
                            "Cannot set property '{key}' which has only a getter"
                        )));
                    }
                    invoke_accessor(&setter, &Value::Object(self.clone()), &[value])?;
                    return Ok(());
                }
                if desc.writable == Some(false) {
                    return Err(Error::InvalidTarget(format!(
                        "Cannot assign to read only property '{key}'"
                    )));
                }
                break;
            }
            cursor = p.0.borrow().prototype.clone();
        }

        if !self.is_extensible() {
            return Err(Error::InvalidTarget(format!(
                "Cannot add property {key}, object is not extensible"
            )));
        }
        self.insert_value(key, value);
        Ok(())
    }
}

impl Default for Object {
    fn default() -> Self {
        Object::new()
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Property values may cycle back to this object, so print identity
        // and keys only.
        write!(f, "Object@{:p}", Rc::as_ptr(&self.0))
    }
}

/// JS-style replacement semantics: fields absent from `desc` keep the
/// current descriptor's values when the shapes agree; a shape change starts
/// from defaults instead of leaking value slots across shapes.
fn merge_descriptor(current: &PropertyDescriptor, desc: &PropertyDescriptor) -> PropertyDescriptor {
    let same_shape = (current.is_data_descriptor() && !desc.is_accessor_descriptor())
        || (current.is_accessor_descriptor() && !desc.is_data_descriptor());
    if !same_shape {
        return desc.completed();
    }
    PropertyDescriptor {
        value: desc.value.clone().or_else(|| current.value.clone()),
        writable: desc.writable.or(current.writable),
        get: desc.get.clone().or_else(|| current.get.clone()),
        set: desc.set.clone().or_else(|| current.set.clone()),
        enumerable: desc.enumerable.or(current.enumerable),
        configurable: desc.configurable.or(current.configurable),
    }
    .completed()
}

pub(crate) fn invoke_accessor(f: &Value, this: &Value, args: &[Value]) -> Result<Value, Error> {
    match f {
        Value::Undefined => Ok(Value::Undefined),
        Value::Object(o) if o.is_callable() => o.call(this, args),
        _ => Err(Error::NotCallable("accessor is not a function".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn getter(n: f64) -> Value {
        Value::Object(Object::function(NativeFunction::new("get", 0, move |_, _| {
            Ok(Value::Number(n))
        })))
    }

    #[test]
    fn define_and_get_data_property() {
        let obj = Object::new();
        assert!(obj.define_own_property("a", PropertyDescriptor::data_default(Value::Number(1.0))));
        assert!(obj.has_own_property("a"));
        assert!(matches!(obj.get("a").unwrap(), Value::Number(n) if n == 1.0));
        assert!(obj.get("missing").unwrap().is_undefined());
    }

    #[test]
    fn completed_descriptor_fills_defaults() {
        let obj = Object::new();
        let partial = PropertyDescriptor {
            value: Some(Value::Number(1.0)),
            ..Default::default()
        };
        assert!(obj.define_own_property("a", partial));
        let stored = obj.get_own_property("a").unwrap();
        assert_eq!(stored.writable, Some(false));
        assert_eq!(stored.enumerable, Some(false));
        assert_eq!(stored.configurable, Some(false));
    }

    #[test]
    fn accessor_property_invokes_getter() {
        let obj = Object::new();
        obj.define_own_property(
            "g",
            PropertyDescriptor::accessor(getter(3.0), Value::Undefined, true, false),
        );
        assert!(matches!(obj.get("g").unwrap(), Value::Number(n) if n == 3.0));
        // Getter-only property rejects assignment.
        assert!(obj.set("g", Value::Number(9.0)).is_err());
    }

    #[test]
    fn non_configurable_rejects_redefinition() {
        let obj = Object::new();
        obj.define_own_property(
            "a",
            PropertyDescriptor::data(Value::Number(1.0), false, true, false),
        );
        // configurable:true escalation
        assert!(!obj.define_own_property(
            "a",
            PropertyDescriptor::data(Value::Number(1.0), false, true, true)
        ));
        // enumerable flip
        assert!(!obj.define_own_property(
            "a",
            PropertyDescriptor::data(Value::Number(1.0), false, false, false)
        ));
        // writable escalation
        assert!(!obj.define_own_property(
            "a",
            PropertyDescriptor::data(Value::Number(1.0), true, true, false)
        ));
        // value change on non-writable
        assert!(!obj.define_own_property(
            "a",
            PropertyDescriptor::data(Value::Number(2.0), false, true, false)
        ));
        // same value is allowed
        assert!(obj.define_own_property(
            "a",
            PropertyDescriptor::data(Value::Number(1.0), false, true, false)
        ));
        // data -> accessor flip
        assert!(!obj.define_own_property(
            "a",
            PropertyDescriptor::accessor(getter(1.0), Value::Undefined, true, false)
        ));
    }

    #[test]
    fn non_extensible_rejects_new_keys() {
        let obj = Object::new();
        obj.insert_value("a", Value::Number(1.0));
        obj.prevent_extensions();
        assert!(!obj.define_own_property("b", PropertyDescriptor::data_default(Value::Null)));
        // Existing configurable keys can still be redefined.
        assert!(obj.define_own_property("a", PropertyDescriptor::data_default(Value::Number(2.0))));
    }

    #[test]
    fn set_honors_writable_flag() {
        let obj = Object::new();
        obj.insert_value("a", Value::Number(1.0));
        obj.define_own_property(
            "b",
            PropertyDescriptor::data(Value::Number(2.0), false, true, true),
        );
        obj.set("a", Value::Number(42.0)).unwrap();
        assert!(matches!(obj.get("a").unwrap(), Value::Number(n) if n == 42.0));
        assert!(obj.set("b", Value::Number(42.0)).is_err());
    }

    #[test]
    fn set_proto_key_rewires_prototype() {
        let proto = Object::new();
        proto.insert_value("inherited", Value::Number(7.0));
        let obj = Object::new();
        obj.set(PROTO_KEY, Value::Object(proto.clone())).unwrap();
        assert!(obj.prototype().is_some_and(|p| p.ptr_eq(&proto)));
        assert!(matches!(obj.get("inherited").unwrap(), Value::Number(n) if n == 7.0));
        obj.set(PROTO_KEY, Value::Null).unwrap();
        assert!(obj.prototype().is_none());
    }

    #[test]
    fn non_extensible_rejects_prototype_rewire() {
        let obj = Object::new();
        obj.prevent_extensions();
        let err = obj.set(PROTO_KEY, Value::Object(Object::new())).unwrap_err();
        assert!(matches!(err, Error::InvalidTarget(_)));
        assert!(obj.prototype().is_none());
        // Writing the current prototype back is a no-op, not an error.
        obj.set(PROTO_KEY, Value::Null).unwrap();

        let proto = Object::new();
        let fixed = Object::with_prototype(&proto);
        fixed.prevent_extensions();
        fixed.set_prototype_of(Some(proto.clone())).unwrap();
        assert!(fixed.set_prototype_of(None).is_err());
        assert!(fixed.prototype().is_some_and(|p| p.ptr_eq(&proto)));
    }

    #[test]
    fn cyclic_prototype_is_rejected() {
        let a = Object::new();
        let b = Object::new();
        a.set(PROTO_KEY, Value::Object(b.clone())).unwrap();
        let err = b.set(PROTO_KEY, Value::Object(a.clone())).unwrap_err();
        assert!(matches!(err, Error::InvalidTarget(ref m) if m == "Cyclic __proto__ value"));
        assert!(b.prototype().is_none());
        assert!(matches!(
            a.set_prototype_of(Some(a.clone())),
            Err(Error::InvalidTarget(_))
        ));
        // The chain stayed acyclic, so a missing-key lookup terminates.
        assert!(a.get("missing").unwrap().is_undefined());
    }

    #[test]
    fn own_proto_key_shadows_prototype_slot() {
        let obj = Object::new();
        let data = Object::new();
        data.insert_value("foo", Value::Number(42.0));
        obj.define_own_property(
            PROTO_KEY,
            PropertyDescriptor::data_default(Value::Object(data.clone())),
        );
        // The define path never touched the live prototype.
        assert!(obj.prototype().is_none());
        let read = obj.get(PROTO_KEY).unwrap();
        assert!(read.as_object().is_some_and(|o| o.ptr_eq(&data)));
        // Assignment now updates the own data property, not the prototype.
        obj.set(PROTO_KEY, Value::Number(1.0)).unwrap();
        assert!(obj.prototype().is_none());
        assert!(matches!(obj.get(PROTO_KEY).unwrap(), Value::Number(n) if n == 1.0));
    }

    #[test]
    fn reading_proto_key_yields_live_prototype() {
        let proto = Object::new();
        let obj = Object::with_prototype(&proto);
        let read = obj.get(PROTO_KEY).unwrap();
        assert!(read.as_object().is_some_and(|o| o.ptr_eq(&proto)));
        assert!(Object::new().get(PROTO_KEY).unwrap().is_null());
    }

    #[test]
    fn inherited_non_writable_blocks_assignment() {
        let proto = Object::new();
        proto.define_own_property(
            "a",
            PropertyDescriptor::data(Value::Number(1.0), false, true, true),
        );
        let obj = Object::with_prototype(&proto);
        assert!(obj.set("a", Value::Number(2.0)).is_err());
        assert!(!obj.has_own_property("a"));
    }

    #[test]
    fn enumerable_keys_skip_hidden_properties() {
        let obj = Object::new();
        obj.insert_value("a", Value::Number(1.0));
        obj.define_own_property(
            "hidden",
            PropertyDescriptor::data(Value::Number(2.0), true, false, true),
        );
        obj.insert_value("b", Value::Number(3.0));
        assert_eq!(obj.own_keys(), vec!["a", "hidden", "b"]);
        assert_eq!(obj.enumerable_keys(), vec!["a", "b"]);
    }

    #[test]
    fn delete_respects_configurable() {
        let obj = Object::new();
        obj.insert_value("a", Value::Number(1.0));
        obj.define_own_property(
            "b",
            PropertyDescriptor::data(Value::Number(2.0), true, true, false),
        );
        assert!(obj.delete("a"));
        assert!(!obj.delete("b"));
        assert!(obj.delete("missing"));
        assert_eq!(obj.own_keys(), vec!["b"]);
    }

    #[test]
    fn freeze_blocks_everything() {
        let obj = Object::new();
        obj.insert_value("a", Value::Number(1.0));
        obj.freeze();
        assert!(obj.set("a", Value::Number(2.0)).is_err());
        assert!(obj.set("b", Value::Number(2.0)).is_err());
        assert!(!obj.delete("a"));
        assert!(!obj.define_own_property("c", PropertyDescriptor::data_default(Value::Null)));
    }

    #[test]
    fn call_non_callable_fails() {
        let obj = Object::new();
        assert!(matches!(
            obj.call(&Value::Undefined, &[]),
            Err(Error::NotCallable(_))
        ));
        let f = Object::function(NativeFunction::new("id", 1, |_, args| {
            Ok(args.first().cloned().unwrap_or(Value::Undefined))
        }));
        let out = f.call(&Value::Undefined, &[Value::Number(5.0)]).unwrap();
        assert!(matches!(out, Value::Number(n) if n == 5.0));
    }

    #[test]
    fn malformed_descriptors_are_detected() {
        let mixed = PropertyDescriptor {
            value: Some(Value::Number(1.0)),
            get: Some(getter(1.0)),
            ..Default::default()
        };
        assert!(mixed.check_well_formed().is_err());

        let bad_getter = PropertyDescriptor::accessor(Value::Number(1.0), Value::Undefined, true, true);
        assert_eq!(
            bad_getter.check_well_formed().unwrap_err(),
            "Getter must be a function"
        );

        let bad_setter = PropertyDescriptor::accessor(Value::Undefined, Value::Boolean(true), true, true);
        assert_eq!(
            bad_setter.check_well_formed().unwrap_err(),
            "Setter must be a function"
        );

        assert!(PropertyDescriptor::data_default(Value::Null)
            .check_well_formed()
            .is_ok());
        assert!(PropertyDescriptor::accessor(getter(1.0), Value::Undefined, true, false)
            .check_well_formed()
            .is_ok());
    }
}
