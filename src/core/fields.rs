//! Field model.
//!
//! In-memory `(service, username, password)` entries of a store and their
//! deterministic byte encoding.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{CryptoError, Result, StoreError};

/// A single credential.
///
/// All three strings are wiped when the field is dropped.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct Field {
    service: String,
    username: String,
    password: String,
}

impl Field {
    pub fn new(
        service: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            service: service.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Cleartext password. Callers must not log it.
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("service", &self.service)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Fields of one store, keyed and ordered by service.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Fields {
    entries: BTreeMap<String, Field>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a field exists for `service`.
    pub fn exists(&self, service: &str) -> bool {
        self.entries.contains_key(service)
    }

    /// Insert a field, replacing any existing one for the same service.
    ///
    /// Returns `true` if a field was replaced.
    pub fn add(
        &mut self,
        service: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> bool {
        let field = Field::new(service, username, password);
        self.entries
            .insert(field.service.clone(), field)
            .is_some()
    }

    /// Remove the field for `service`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::FieldNotFound` if no such field exists.
    pub fn remove(&mut self, service: &str) -> Result<()> {
        match self.entries.remove(service) {
            Some(_) => Ok(()),
            None => Err(self.not_found(service)),
        }
    }

    /// Look up the field for `service`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::FieldNotFound` if no such field exists.
    pub fn get(&self, service: &str) -> Result<&Field> {
        self.entries
            .get(service)
            .ok_or_else(|| self.not_found(service))
    }

    /// Service names in sorted order.
    pub fn services(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Wipe every field and empty the set.
    pub fn purge(&mut self) {
        for field in self.entries.values_mut() {
            field.zeroize();
        }
        self.entries.clear();
    }

    fn not_found(&self, service: &str) -> crate::error::Error {
        StoreError::field_not_found(service, &self.services()).into()
    }
}

impl std::fmt::Debug for Fields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.entries.values()).finish()
    }
}

/// Encrypted body layout: the store name plus its fields in service order.
#[derive(Serialize)]
struct BodyRef<'a> {
    name: &'a str,
    fields: Vec<&'a Field>,
}

#[derive(Deserialize)]
struct Body {
    name: String,
    fields: Vec<Field>,
}

/// Encode a store's name and fields for encryption.
///
/// The output is stable: encoding an unchanged set always yields the same
/// bytes.
pub fn encode(name: &str, fields: &Fields) -> Result<Zeroizing<Vec<u8>>> {
    let body = BodyRef {
        name,
        fields: fields.entries.values().collect(),
    };
    Ok(Zeroizing::new(serde_json::to_vec(&body)?))
}

/// Decode bytes produced by [`encode`].
///
/// # Errors
///
/// Returns `CryptoError::CorruptPayload` if the document is malformed or
/// lists a service twice.
pub fn decode(bytes: &[u8]) -> Result<(String, Fields)> {
    let mut body: Body = serde_json::from_slice(bytes)
        .map_err(|e| CryptoError::CorruptPayload(e.to_string()))?;

    let mut fields = Fields::new();
    for field in body.fields.drain(..) {
        if field.service.is_empty() {
            return Err(CryptoError::CorruptPayload("empty service name".to_string()).into());
        }
        if fields.exists(&field.service) {
            return Err(CryptoError::CorruptPayload(format!(
                "duplicate service '{}'",
                field.service
            ))
            .into());
        }
        fields.entries.insert(field.service.clone(), field);
    }

    Ok((std::mem::take(&mut body.name), fields))
}
