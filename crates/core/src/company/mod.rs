//! Company domain model and storage capability.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A company registered with the gateway.
///
/// Companies are never hard-deleted; deactivation only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Unique identifier (operator-chosen, e.g. `cli_001`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// External tenant identifier (the report source's realm id).
    pub realm_id: String,
    /// Whether the company is active.
    pub is_active: bool,
}

/// Errors that can occur in company storage.
#[derive(Debug, Error)]
pub enum CompanyError {
    /// A required field was blank.
    #[error("Missing fields (id, name, realmId).")]
    MissingFields,

    /// Underlying store failure.
    #[error("Company store error: {0}")]
    Store(String),
}

/// Company storage capability.
///
/// The production implementation is the SeaORM repository in `aliada-db`;
/// tests use an in-memory implementation.
#[async_trait]
pub trait CompanyStore: Send + Sync {
    /// Returns all active companies, most recently created first.
    async fn list_active(&self) -> Result<Vec<Company>, CompanyError>;

    /// Inserts a new company or updates name/realm id for an existing one,
    /// reactivating it.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyError::MissingFields`] when any field is blank after
    /// trimming.
    async fn upsert(&self, id: &str, name: &str, realm_id: &str) -> Result<Company, CompanyError>;

    /// Resolves a realm id to a known, active company.
    async fn find_active_by_realm(&self, realm_id: &str)
    -> Result<Option<Company>, CompanyError>;
}

/// Trims upsert input and rejects blank fields.
///
/// Pure helper shared by store implementations.
pub fn normalize_upsert_input<'a>(
    id: &'a str,
    name: &'a str,
    realm_id: &'a str,
) -> Result<(&'a str, &'a str, &'a str), CompanyError> {
    let id = id.trim();
    let name = name.trim();
    let realm_id = realm_id.trim();

    if id.is_empty() || name.is_empty() || realm_id.is_empty() {
        return Err(CompanyError::MissingFields);
    }

    Ok((id, name, realm_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_whitespace() {
        let (id, name, realm) =
            normalize_upsert_input(" cli_001 ", " Empresa A ", " 12314567890 ").unwrap();
        assert_eq!(id, "cli_001");
        assert_eq!(name, "Empresa A");
        assert_eq!(realm, "12314567890");
    }

    #[test]
    fn test_blank_fields_rejected() {
        assert!(matches!(
            normalize_upsert_input("", "Empresa A", "123"),
            Err(CompanyError::MissingFields)
        ));
        assert!(matches!(
            normalize_upsert_input("cli_001", "   ", "123"),
            Err(CompanyError::MissingFields)
        ));
        assert!(matches!(
            normalize_upsert_input("cli_001", "Empresa A", ""),
            Err(CompanyError::MissingFields)
        ));
    }
}
