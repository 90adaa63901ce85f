//! services/api/src/web/rest.rs
//!
//! Contains the Axum handler for readings and the master definition for the
//! OpenAPI specification.

use crate::web::auth::{require_present, AccountResponse, LoginRequest, SignupRequest};
use crate::web::state::AppState;
use astrology_core::{ReadingOutcome, ReadingRequest, ReadingResult};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};
use utoipa::{OpenApi, ToSchema};

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::web::auth::signup_handler,
        crate::web::auth::login_handler,
        crate::web::auth::logout_handler,
        crate::web::auth::session_handler,
        create_reading_handler,
    ),
    components(
        schemas(
            SignupRequest,
            LoginRequest,
            AccountResponse,
            ReadingRequestBody,
            ReadingBody,
            ReadingResponse
        )
    ),
    tags(
        (name = "Astrology API", description = "Mock accounts and generated astrology readings.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

/// Birth details for a reading. An empty name uses the account's name.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadingRequestBody {
    #[serde(default)]
    pub name: String,
    /// Calendar date as `YYYY-MM-DD`.
    pub birth_date: String,
    pub birth_time: String,
    pub birth_location: String,
    #[serde(default)]
    pub question: Option<String>,
}

impl ReadingRequestBody {
    fn into_domain(self) -> Result<ReadingRequest, (StatusCode, String)> {
        require_present(&[
            ("birthDate", self.birth_date.as_str()),
            ("birthTime", self.birth_time.as_str()),
            ("birthLocation", self.birth_location.as_str()),
        ])?;

        let birth_date = NaiveDate::parse_from_str(self.birth_date.trim(), "%Y-%m-%d").map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                format!("birthDate '{}' is not a valid date: {}", self.birth_date, e),
            )
        })?;

        Ok(ReadingRequest {
            name: self.name,
            birth_date,
            birth_time: self.birth_time,
            birth_location: self.birth_location,
            question: self.question.filter(|q| !q.trim().is_empty()),
        })
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ReadingBody {
    pub zodiac_sign: String,
    pub house_ruler: String,
    pub planetary_influences: Vec<String>,
    pub life_path_number: u32,
    pub cardinal_number: u32,
    pub prediction: String,
    pub advice: String,
    pub compatible_signs: Vec<String>,
    pub lucky_numbers: Vec<u32>,
    pub lucky_colors: Vec<String>,
}

impl From<ReadingResult> for ReadingBody {
    fn from(reading: ReadingResult) -> Self {
        Self {
            zodiac_sign: reading.zodiac_sign.to_string(),
            house_ruler: reading.house_ruler,
            planetary_influences: reading.planetary_influences,
            life_path_number: reading.life_path_number,
            cardinal_number: reading.cardinal_number,
            prediction: reading.prediction,
            advice: reading.advice,
            compatible_signs: reading
                .compatible_signs
                .iter()
                .map(|sign| sign.to_string())
                .collect(),
            lucky_numbers: reading.lucky_numbers.to_vec(),
            lucky_colors: reading.lucky_colors,
        }
    }
}

/// The response payload sent after a reading was generated.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ReadingResponse {
    pub reading: ReadingBody,
    /// The account after this reading was counted.
    pub account: AccountResponse,
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// Generate a reading for the logged-in account.
///
/// Each successful reading uses up one of the account's remaining requests.
#[utoipa::path(
    post,
    path = "/readings",
    request_body = ReadingRequestBody,
    responses(
        (status = 200, description = "Reading generated", body = ReadingResponse),
        (status = 400, description = "Missing field or invalid birth date"),
        (status = 401, description = "Not logged in"),
        (status = 402, description = "No readings left"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_reading_handler(
    State(app_state): State<Arc<AppState>>,
    Json(body): Json<ReadingRequestBody>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let request = body.into_domain()?;

    let outcome = app_state
        .service
        .lock()
        .await
        .request_reading(request)
        .await;

    match outcome {
        Ok(ReadingOutcome::Ready { reading, account }) => {
            let response = ReadingResponse {
                reading: reading.into(),
                account: account.into(),
            };
            Ok((StatusCode::OK, Json(response)))
        }
        Ok(ReadingOutcome::NoRequestsRemaining { account }) => {
            info!(account_id = %account.id, "Offering more readings");
            Err((
                StatusCode::PAYMENT_REQUIRED,
                "No readings left. Please purchase more readings to continue".to_string(),
            ))
        }
        Ok(ReadingOutcome::NotAuthenticated) => Err((
            StatusCode::UNAUTHORIZED,
            "Please log in to use this feature".to_string(),
        )),
        Err(e) => {
            error!("Failed to generate reading: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate your reading. Please try again.".to_string(),
            ))
        }
    }
}
