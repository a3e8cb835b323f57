//! Body converters.
//!
//! A [`Converter`] turns raw body bytes into a typed value, or fails. The
//! classifiers treat it as an opaque capability: they never look at the wire
//! format, they only react to `Ok` or `Err`.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use bytes::Bytes;

use crate::{Error, Result};

/// Trait for decoding raw body bytes into a typed value.
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use netresponse_core::{Converter, Error, Result};
///
/// struct Csv;
///
/// impl Converter for Csv {
///     type Output = Vec<String>;
///
///     fn convert(&self, body: &Bytes) -> Result<Self::Output> {
///         let text = std::str::from_utf8(body).map_err(|e| Error::decode(e.to_string()))?;
///         Ok(text.split(',').map(str::to_string).collect())
///     }
/// }
///
/// let values = Csv.convert(&Bytes::from("a,b")).expect("valid csv");
/// assert_eq!(values, ["a", "b"]);
/// ```
pub trait Converter: Send + Sync {
    /// The decoded type.
    type Output;

    /// Decode `body`.
    ///
    /// # Errors
    ///
    /// Returns an error when the bytes do not form a valid `Output`.
    fn convert(&self, body: &Bytes) -> Result<Self::Output>;
}

impl<C: Converter + ?Sized> Converter for &C {
    type Output = C::Output;

    fn convert(&self, body: &Bytes) -> Result<Self::Output> {
        (**self).convert(body)
    }
}

impl<C: Converter + ?Sized> Converter for Box<C> {
    type Output = C::Output;

    fn convert(&self, body: &Bytes) -> Result<Self::Output> {
        (**self).convert(body)
    }
}

impl<C: Converter + ?Sized> Converter for Arc<C> {
    type Output = C::Output;

    fn convert(&self, body: &Bytes) -> Result<Self::Output> {
        (**self).convert(body)
    }
}

// ============================================================================
// JSON
// ============================================================================

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so the error names the exact field that failed
/// (e.g. "user.address.city").
///
/// # Errors
///
/// Returns [`Error::JsonDeserialization`] if the bytes are not a valid `T`.
///
/// # Example
///
/// ```
/// use netresponse_core::from_json;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct User { name: String }
///
/// let bytes = br#"{"name":"Alice"}"#;
/// let user: User = from_json(bytes).expect("deserialize");
/// assert_eq!(user, User { name: "Alice".to_string() });
/// ```
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| Error::json_deserialization(e.path().to_string(), e.inner().to_string()))
}

/// Converter decoding JSON bodies into `T`.
pub struct JsonConverter<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonConverter<T> {
    /// Create a JSON converter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for JsonConverter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonConverter<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for JsonConverter<T> {}

impl<T> fmt::Debug for JsonConverter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonConverter")
            .field("output", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T: serde::de::DeserializeOwned> Converter for JsonConverter<T> {
    type Output = T;

    fn convert(&self, body: &Bytes) -> Result<T> {
        from_json(body)
    }
}

// ============================================================================
// Stock converters
// ============================================================================

/// Converter decoding UTF-8 text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextConverter;

impl Converter for TextConverter {
    type Output = String;

    fn convert(&self, body: &Bytes) -> Result<String> {
        String::from_utf8(body.to_vec()).map_err(|e| Error::decode(e.to_string()))
    }
}

/// Converter returning the raw bytes unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct BytesConverter;

impl Converter for BytesConverter {
    type Output = Bytes;

    fn convert(&self, body: &Bytes) -> Result<Bytes> {
        Ok(body.clone())
    }
}

/// Converter that discards the body.
///
/// Useful for endpoints where only the outcome matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitConverter;

impl Converter for UnitConverter {
    type Output = ();

    fn convert(&self, _body: &Bytes) -> Result<()> {
        Ok(())
    }
}

// ============================================================================
// Closures
// ============================================================================

/// Converter backed by a closure, see [`converter_fn`].
pub struct FnConverter<F, T> {
    f: F,
    _marker: PhantomData<fn() -> T>,
}

impl<F: Clone, T> Clone for FnConverter<F, T> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F, T> fmt::Debug for FnConverter<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnConverter")
            .field("output", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl<F, T> Converter for FnConverter<F, T>
where
    F: Fn(&Bytes) -> Result<T> + Send + Sync,
{
    type Output = T;

    fn convert(&self, body: &Bytes) -> Result<T> {
        (self.f)(body)
    }
}

/// Wrap a closure as a [`Converter`].
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use netresponse_core::{Converter, Error, converter_fn};
///
/// let code = converter_fn(|body: &Bytes| {
///     std::str::from_utf8(body)
///         .ok()
///         .and_then(|s| s.trim().parse::<u32>().ok())
///         .ok_or_else(|| Error::decode("expected a numeric code"))
/// });
///
/// assert_eq!(code.convert(&Bytes::from("42")).expect("numeric"), 42);
/// assert!(code.convert(&Bytes::from("x")).is_err());
/// ```
pub const fn converter_fn<F, T>(f: F) -> FnConverter<F, T>
where
    F: Fn(&Bytes) -> Result<T> + Send + Sync,
{
    FnConverter {
        f,
        _marker: PhantomData,
    }
}
