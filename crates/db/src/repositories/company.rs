//! Company repository for the registry table.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use aliada_core::company::{Company, CompanyError, CompanyStore, normalize_upsert_input};

use crate::entities::companies;

/// Company repository backed by the `companies` table.
#[derive(Debug, Clone)]
pub struct CompanyRepository {
    db: DatabaseConnection,
}

impl CompanyRepository {
    /// Creates a new company repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists active companies, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_active(&self) -> Result<Vec<companies::Model>, DbErr> {
        companies::Entity::find()
            .filter(companies::Column::IsActive.eq(true))
            .order_by_desc(companies::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    /// Inserts or updates a company.
    ///
    /// An existing identifier gets its name and realm id replaced and is
    /// reactivated; there is no delete operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn upsert(
        &self,
        id: &str,
        name: &str,
        realm_id: &str,
    ) -> Result<companies::Model, DbErr> {
        let now = chrono::Utc::now().into();

        match companies::Entity::find_by_id(id).one(&self.db).await? {
            Some(existing) => {
                let mut active: companies::ActiveModel = existing.into();
                active.name = Set(name.to_string());
                active.realm_id = Set(realm_id.to_string());
                active.is_active = Set(true);
                active.updated_at = Set(now);
                active.update(&self.db).await
            }
            None => {
                let company = companies::ActiveModel {
                    id: Set(id.to_string()),
                    name: Set(name.to_string()),
                    realm_id: Set(realm_id.to_string()),
                    is_active: Set(true),
                    created_at: Set(now),
                    updated_at: Set(now),
                };
                company.insert(&self.db).await
            }
        }
    }

    /// Resolves a realm id to an active company, if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_active_by_realm(
        &self,
        realm_id: &str,
    ) -> Result<Option<companies::Model>, DbErr> {
        companies::Entity::find()
            .filter(companies::Column::RealmId.eq(realm_id))
            .filter(companies::Column::IsActive.eq(true))
            .one(&self.db)
            .await
    }
}

fn to_domain(model: companies::Model) -> Company {
    Company {
        id: model.id,
        name: model.name,
        realm_id: model.realm_id,
        is_active: model.is_active,
    }
}

fn store_err(err: DbErr) -> CompanyError {
    CompanyError::Store(err.to_string())
}

#[async_trait]
impl CompanyStore for CompanyRepository {
    async fn list_active(&self) -> Result<Vec<Company>, CompanyError> {
        let models = Self::list_active(self).await.map_err(store_err)?;
        Ok(models.into_iter().map(to_domain).collect())
    }

    async fn upsert(&self, id: &str, name: &str, realm_id: &str) -> Result<Company, CompanyError> {
        let (id, name, realm_id) = normalize_upsert_input(id, name, realm_id)?;
        let model = Self::upsert(self, id, name, realm_id)
            .await
            .map_err(store_err)?;
        Ok(to_domain(model))
    }

    async fn find_active_by_realm(
        &self,
        realm_id: &str,
    ) -> Result<Option<Company>, CompanyError> {
        let model = Self::find_active_by_realm(self, realm_id)
            .await
            .map_err(store_err)?;
        Ok(model.map(to_domain))
    }
}
