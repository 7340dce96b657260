//! Boxed values and the coercion table.
//!
//! Builder slots store values in a single boxed representation so that one
//! slot layout serves every property. Coercion converts between that boxed
//! form and a property's declared kind; it never truncates and never turns
//! a null into a primitive.

use std::{any::Any, fmt, sync::Arc};

use thiserror::Error;

use crate::{DeclaredType, PrimitiveKind};

/// Error raised when a value cannot be assigned to a declared type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoercionError {
    #[error("expected {expected}, found {found}")]
    Mismatch { expected: String, found: String },

    #[error("value {value} does not fit in {expected}")]
    OutOfRange { expected: String, value: String },

    #[error("cannot assign null to primitive {expected}")]
    NullPrimitive { expected: String },
}

impl CoercionError {
    fn mismatch(expected: impl fmt::Display, found: &Value) -> Self {
        CoercionError::Mismatch {
            expected: expected.to_string(),
            found: found.type_name().to_string(),
        }
    }
}

/// A shared, type-erased reference value.
#[derive(Clone)]
pub struct ObjectValue {
    type_name: &'static str,
    inner: Arc<dyn Any + Send + Sync>,
}

impl ObjectValue {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            inner: Arc::new(value),
        }
    }

    /// The Rust type name of the wrapped value.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Borrow the wrapped value as `T`, if it is one.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Returns true if both handles point at the same allocation.
    pub fn ptr_eq(&self, other: &ObjectValue) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Object<{}>", self.type_name)
    }
}

/// The boxed representation of a property value.
#[derive(Debug, Clone)]
pub enum Value {
    Int(i32),
    Boolean(bool),
    Byte(i8),
    Char(char),
    Double(f64),
    Float(f32),
    Long(i64),
    Short(i16),
    String(String),
    Object(ObjectValue),
    Null,
}

impl Value {
    /// Box an arbitrary reference value.
    pub fn object<T: Any + Send + Sync>(value: T) -> Self {
        Value::Object(ObjectValue::new(value))
    }

    /// The primitive kind of this value, if it is a primitive.
    pub fn kind(&self) -> Option<PrimitiveKind> {
        match self {
            Value::Int(_) => Some(PrimitiveKind::Int),
            Value::Boolean(_) => Some(PrimitiveKind::Boolean),
            Value::Byte(_) => Some(PrimitiveKind::Byte),
            Value::Char(_) => Some(PrimitiveKind::Char),
            Value::Double(_) => Some(PrimitiveKind::Double),
            Value::Float(_) => Some(PrimitiveKind::Float),
            Value::Long(_) => Some(PrimitiveKind::Long),
            Value::Short(_) => Some(PrimitiveKind::Short),
            Value::String(_) | Value::Object(_) | Value::Null => None,
        }
    }

    /// A human readable name of the runtime type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "String",
            Value::Object(object) => object.type_name(),
            Value::Null => "null",
            other => other.kind().map_or("unknown", |kind| kind.as_str()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Coerce this value to a declared type.
    ///
    /// Reference types accept any value; the check happens on retrieval.
    pub fn coerce(self, ty: &DeclaredType) -> Result<Value, CoercionError> {
        match ty {
            DeclaredType::Primitive(kind) => self.coerce_to(*kind),
            DeclaredType::Reference(_) => Ok(self),
        }
    }

    /// Coerce this value to a primitive kind.
    ///
    /// Integer kinds convert into each other only when the value fits, and
    /// `float` widens to `double`. Every other combination is a mismatch.
    pub fn coerce_to(self, kind: PrimitiveKind) -> Result<Value, CoercionError> {
        if self.kind() == Some(kind) {
            return Ok(self);
        }
        if self.is_null() {
            return Err(CoercionError::NullPrimitive {
                expected: kind.to_string(),
            });
        }

        let coerced = match (kind, &self) {
            (PrimitiveKind::Double, Value::Float(f)) => Some(Ok(Value::Double(f64::from(*f)))),
            (PrimitiveKind::Int, _) => self.as_integer().map(|i| fit(kind, i, Value::Int)),
            (PrimitiveKind::Long, _) => self.as_integer().map(|i| Ok(Value::Long(i))),
            (PrimitiveKind::Short, _) => self.as_integer().map(|i| fit(kind, i, Value::Short)),
            (PrimitiveKind::Byte, _) => self.as_integer().map(|i| fit(kind, i, Value::Byte)),
            _ => None,
        };

        coerced.unwrap_or_else(|| Err(CoercionError::mismatch(kind, &self)))
    }

    fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Byte(b) => Some(i64::from(*b)),
            Value::Short(s) => Some(i64::from(*s)),
            Value::Int(i) => Some(i64::from(*i)),
            Value::Long(l) => Some(*l),
            _ => None,
        }
    }

    /// Clone the wrapped reference value out as `T`.
    ///
    /// Strings are accepted when `T` is `String`.
    pub fn downcast<T: Any + Clone>(&self) -> Result<T, CoercionError> {
        let found = match self {
            Value::Object(object) => object.downcast_ref::<T>().cloned(),
            Value::String(s) => (s as &dyn Any).downcast_ref::<T>().cloned(),
            _ => None,
        };
        found.ok_or_else(|| CoercionError::mismatch(std::any::type_name::<T>(), self))
    }
}

fn fit<N>(
    kind: PrimitiveKind,
    value: i64,
    wrap: fn(N) -> Value,
) -> Result<Value, CoercionError>
where
    N: TryFrom<i64>,
{
    N::try_from(value)
        .map(wrap)
        .map_err(|_| CoercionError::OutOfRange {
            expected: kind.to_string(),
            value: value.to_string(),
        })
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Byte(a), Value::Byte(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Long(a), Value::Long(b)) => a == b,
            (Value::Short(a), Value::Short(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            (Value::Null, Value::Null) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Boolean(v) => write!(f, "{}", v),
            Value::Byte(v) => write!(f, "{}", v),
            Value::Char(v) => write!(f, "{}", v),
            Value::Double(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Long(v) => write!(f, "{}", v),
            Value::Short(v) => write!(f, "{}", v),
            Value::String(v) => f.write_str(v),
            Value::Object(object) => write!(f, "{:?}", object),
            Value::Null => f.write_str("null"),
        }
    }
}

macro_rules! primitive_conversions {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }

            impl FromValue for $ty {
                fn from_value(value: Value) -> Result<Self, CoercionError> {
                    match value.coerce_to(PrimitiveKind::$variant)? {
                        Value::$variant(v) => Ok(v),
                        other => Err(CoercionError::mismatch(PrimitiveKind::$variant, &other)),
                    }
                }
            }
        )*
    };
}

/// Conversion out of the boxed representation.
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self, CoercionError>;
}

primitive_conversions! {
    i32 => Int,
    bool => Boolean,
    i8 => Byte,
    char => Char,
    f64 => Double,
    f32 => Float,
    i64 => Long,
    i16 => Short,
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self, CoercionError> {
        Ok(value)
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, CoercionError> {
        match value {
            Value::String(s) => Ok(s),
            other => other.downcast::<String>(),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, CoercionError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}
