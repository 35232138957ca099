//! Descriptor-preserving property clone for a JS-style object model.
//!
//! A naive shallow copy (`for key in source { target.set(key, source.get(key)) }`)
//! loses every non-default attribute: non-writable and non-enumerable flags
//! disappear, getters are flattened into snapshots, and an own property
//! literally named `__proto__` either vanishes or — worse — rewires the
//! target's live prototype, polluting shared ancestors. [`clone`] instead
//! enumerates the source's full own-property descriptors, optionally passes
//! individual descriptors through caller-supplied [`Shim`]s, and installs
//! the resulting set onto the target with attributes intact and the
//! inheritance-link key treated strictly as data.
//!
//! ```
//! use propclone::{clone_object, Object, PropertyDescriptor, ShimMap, Value};
//!
//! let source = Object::new();
//! source.define_own_property(
//!     "answer",
//!     PropertyDescriptor::data(Value::Number(21.0), false, true, true),
//! );
//!
//! let shims = ShimMap::new().with("answer", |desc| {
//!     let mut desc = desc.expect("source has the key");
//!     desc.value = Some(Value::Number(42.0));
//!     desc.writable = Some(true);
//!     desc
//! });
//!
//! let copy = clone_object(&Object::new(), &source, &shims).unwrap();
//! assert!(matches!(copy.get("answer").unwrap(), Value::Number(n) if n == 42.0));
//! // The source's descriptor is untouched and still non-writable.
//! assert_eq!(source.get_own_property("answer").unwrap().writable, Some(false));
//! ```

pub mod clone;
pub mod descriptors;
pub mod error;
pub mod object;
pub mod types;

pub use clone::{Shim, ShimMap, clone, clone_object};
pub use descriptors::{DescriptorMap, define_properties, own_property_descriptors};
pub use error::Error;
pub use object::{NativeFunction, Object, PROTO_KEY, PropertyDescriptor};
pub use types::{JsBigInt, JsString, Value};
