//! Three-state field values for partial updates.
//!
//! A JSON PATCH body distinguishes between a key that is missing, a key
//! that is explicitly `null`, and a key with a value. `Option<T>` collapses
//! the first two, so update DTOs use [`Patch<T>`] instead, together with a
//! struct-level `#[serde(default)]` so that missing keys become
//! [`Patch::Absent`].

use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use validator::{ValidateEmail, ValidateLength, ValidateUrl};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// The key was not sent; the column is left untouched.
    Absent,
    /// The key was sent as `null`; the column is set to NULL.
    Null,
    /// The key was sent with a value.
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }

    /// The concrete value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            Patch::Absent | Patch::Null => None,
        }
    }
}

/// `None` maps to an explicit null, so a full replacement built from a
/// create DTO clears every nullable column that was left out.
impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only reached when the key exists in the input.
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}

/// Serializes as the inner value; both `Absent` and `Null` become `null`.
/// `validator` records the offending value in its error params this way.
impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value().serialize(serializer)
    }
}

impl ValidateLength<u64> for Patch<String> {
    fn length(&self) -> Option<u64> {
        self.value().map(|s| s.chars().count() as u64)
    }
}

impl ValidateEmail for Patch<String> {
    fn as_email_string(&self) -> Option<Cow<'_, str>> {
        self.value().map(|s| Cow::Borrowed(s.as_str()))
    }
}

impl ValidateUrl for Patch<String> {
    fn as_url_string(&self) -> Option<Cow<'_, str>> {
        self.value().map(|s| Cow::Borrowed(s.as_str()))
    }
}
