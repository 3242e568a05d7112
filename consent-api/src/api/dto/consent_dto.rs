// src/api/dto/consent_dto.rs

use crate::domain::cookie_consent::CookieConsent;
use crate::domain::user_consent_model;
use crate::error::AppError;
use axum::{
    extract::{FromRequest, Request},
    Form,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{uid, status}`; `status` is `null` when no consent is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentStatusResponse {
    pub uid: String,
    pub status: Option<CookieConsent>,
}

impl ConsentStatusResponse {
    pub fn absent(uid: String) -> Self {
        Self { uid, status: None }
    }
}

impl From<user_consent_model::Model> for ConsentStatusResponse {
    fn from(model: user_consent_model::Model) -> Self {
        Self {
            status: Some(model.consent()),
            uid: model.uid,
        }
    }
}

/// application/x-www-form-urlencoded のリクエストボディ
///
/// CORS プリフライトを避けるため JSON ではなくフォームで受け取る。
/// 旧クライアントは `status` に JSON 文字列を入れて送ってくる。
#[derive(Debug, Default, Deserialize)]
pub struct ConsentFormDto {
    pub status: Option<String>,
    pub essential: Option<String>,
    pub settings: Option<String>,
    pub usage: Option<String>,
    pub campaigns: Option<String>,
}

impl ConsentFormDto {
    pub fn into_consent(self) -> Result<CookieConsent, AppError> {
        if let Some(status) = self.status {
            let value: Value = serde_json::from_str(&status)
                .map_err(|e| AppError::BadRequest(format!("Invalid status JSON: {}", e)))?;
            if !value.is_object() {
                return Err(AppError::BadRequest(
                    "Invalid status JSON: expected an object".to_string(),
                ));
            }
            let consent: CookieConsent = serde_json::from_value(value)
                .map_err(|e| AppError::BadRequest(format!("Invalid status JSON: {}", e)))?;
            return Ok(consent.with_essential_enforced());
        }

        // essential は送られてきても検証だけして無視する
        parse_form_bool("essential", self.essential.as_deref())?;

        Ok(CookieConsent::new(
            parse_form_bool("settings", self.settings.as_deref())?,
            parse_form_bool("usage", self.usage.as_deref())?,
            parse_form_bool("campaigns", self.campaigns.as_deref())?,
        ))
    }
}

pub fn parse_form_bool(field: &str, value: Option<&str>) -> Result<bool, AppError> {
    let Some(raw) = value else {
        return Ok(false);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "1" | "yes" => Ok(true),
        "false" | "off" | "0" | "no" | "" => Ok(false),
        _ => Err(AppError::ValidationError(format!(
            "{}: expected a boolean, got '{}'",
            field, raw
        ))),
    }
}

/// フォームを検証済みの CookieConsent に変換する抽出器
pub struct ConsentForm(pub CookieConsent);

impl<S> FromRequest<S> for ConsentForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(dto) = Form::<ConsentFormDto>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(ConsentForm(dto.into_consent()?))
    }
}
