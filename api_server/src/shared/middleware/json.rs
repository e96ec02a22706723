use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;

/// JSON 요청 본문 Extractor
/// JSON body extractor whose rejections are 400 `{"error": ...}` responses.
///
/// axum 기본 Json은 형식 오류에 415/422를 반환하지만,
/// 이 API는 모든 요청 검증 실패를 400으로 응답합니다.
///
/// 사용법:
/// ```ignore
/// pub async fn deposit(
///     State(app_state): State<AppState>,
///     ApiJson(request): ApiJson<AmountRequest>,  // <- 이렇게 사용!
/// ) -> Result<...> {
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err((
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": format!("Invalid request body: {}", rejection.body_text())
                })),
            )),
        }
    }
}
