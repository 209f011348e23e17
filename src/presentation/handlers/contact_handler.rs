// Copyright (c) 2025 Speedrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::application::dto::contact_request::CreateContactDto;
use crate::domain::models::contact::Contact;
use crate::domain::repositories::contact_repository::ContactRepository;
use crate::presentation::errors::ApiError;

/// 创建联系人记录
///
/// 必填字段校验失败映射为400
pub async fn create_contact(
    Extension(repo): Extension<Arc<dyn ContactRepository>>,
    Json(payload): Json<CreateContactDto>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    // Validation guarantees both fields are present
    let contact = Contact::new(
        payload.name.unwrap_or_default(),
        payload.email.unwrap_or_default(),
        payload.message,
    );
    let created = repo.create(&contact).await?;
    info!(id = %created.id, "contact record created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// 列出联系人记录，按创建时间倒序
pub async fn list_contacts(
    Extension(repo): Extension<Arc<dyn ContactRepository>>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    let contacts = repo.list().await?;
    Ok(Json(contacts))
}
