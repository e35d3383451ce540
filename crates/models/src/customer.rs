use sea_orm::{entity::prelude::*, ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email_address: String,
    pub phone_number: String,
    pub address: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(field: &str, value: &str) -> Result<(), errors::ModelError> {
    if value.trim().is_empty() {
        return Err(errors::ModelError::Validation(format!("{field} required")));
    }
    if value.chars().count() > 128 {
        return Err(errors::ModelError::Validation(format!("{field} longer than 128 characters")));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), errors::ModelError> {
    if email.trim().is_empty() {
        return Err(errors::ModelError::Validation("emailAddress required".into()));
    }
    if !email.contains('@') {
        return Err(errors::ModelError::Validation("invalid email".into()));
    }
    if email.chars().count() > 255 {
        return Err(errors::ModelError::Validation("emailAddress longer than 255 characters".into()));
    }
    Ok(())
}

/// Free-form fields may be empty but must fit their column.
pub fn validate_max_len(field: &str, value: &str, max: usize) -> Result<(), errors::ModelError> {
    if value.chars().count() > max {
        return Err(errors::ModelError::Validation(format!("{field} longer than {max} characters")));
    }
    Ok(())
}

/// Check the fields a customer must carry before it is written.
pub fn validate(model: &Model) -> Result<(), errors::ModelError> {
    validate_name("firstName", &model.first_name)?;
    validate_name("lastName", &model.last_name)?;
    validate_email(&model.email_address)?;
    // varchar(64) / varchar(255)
    validate_max_len("phoneNumber", &model.phone_number, 64)?;
    validate_max_len("address", &model.address, 255)?;
    Ok(())
}

pub async fn find_by_email<C: ConnectionTrait>(db: &C, email: &str) -> Result<Option<Model>, errors::ModelError> {
    let found = Entity::find()
        .filter(Column::EmailAddress.eq(email))
        .one(db)
        .await?;
    Ok(found)
}

/// Insert a new row; a taken email surfaces as `ModelError::Duplicate`.
pub async fn insert<C: ConnectionTrait>(db: &C, model: Model) -> Result<Model, errors::ModelError> {
    let am: ActiveModel = model.into();
    let created = am.reset_all().insert(db).await?;
    Ok(created)
}

/// Overwrite every mutable column of an existing row.
pub async fn replace<C: ConnectionTrait>(db: &C, model: Model) -> Result<Model, errors::ModelError> {
    let am: ActiveModel = model.into();
    let updated = am.reset_all().update(db).await?;
    Ok(updated)
}

/// Hard delete; returns whether a row was removed.
pub async fn delete<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
