use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use common_errors::AppError;
use serde::{Deserialize, de::DeserializeOwned};

/// Request body accepted either as `application/x-www-form-urlencoded` or as
/// `application/json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormOrJson<T>(pub T);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyFormat {
    Form,
    Json,
}

fn body_format(request: &Request) -> Option<BodyFormat> {
    let content_type = request.headers().get(CONTENT_TYPE)?.to_str().ok()?;
    let mime = content_type.split(';').next()?.trim().to_ascii_lowercase();

    match mime.as_str() {
        "application/x-www-form-urlencoded" => Some(BodyFormat::Form),
        "application/json" => Some(BodyFormat::Json),
        other if other.ends_with("+json") => Some(BodyFormat::Json),
        _ => None,
    }
}

impl<S, T> FromRequest<S> for FormOrJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(
        req: Request, state: &S,
    ) -> Result<Self, Self::Rejection> {
        match body_format(&req) {
            Some(BodyFormat::Form) => {
                let Form(value) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|rejection| {
                        AppError::bad_request_with_details(
                            "INVALID_BODY",
                            "Form body could not be parsed",
                            &rejection.body_text(),
                        )
                    })?;
                Ok(Self(value))
            }
            Some(BodyFormat::Json) => {
                let Json(value) = Json::<T>::from_request(req, state)
                    .await
                    .map_err(|rejection| {
                        AppError::bad_request_with_details(
                            "INVALID_BODY",
                            "JSON body could not be parsed",
                            &rejection.body_text(),
                        )
                    })?;
                Ok(Self(value))
            }
            None => {
                Err(AppError::unsupported_media_type(
                    "Expected an application/x-www-form-urlencoded or \
                     application/json body",
                ))
            }
        }
    }
}

/// A scalar body field that may arrive as text (forms) or as a JSON number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// Parses the value as a whole number, accepting numeric strings.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Float(value) if value.fract() == 0.0 => {
                Some(*value as i64)
            }
            Self::Float(_) => None,
            Self::Text(text) => text.trim().parse().ok(),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::StatusCode};
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Payload {
        name: Option<String>,
        amount: Option<FieldValue>,
    }

    fn request(content_type: Option<&str>, body: &str) -> Request {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_form_body() {
        let req = request(
            Some("application/x-www-form-urlencoded"),
            "name=alice&amount=30",
        );
        let FormOrJson(payload) =
            FormOrJson::<Payload>::from_request(req, &()).await.unwrap();

        assert_eq!(payload.name.as_deref(), Some("alice"));
        assert_eq!(payload.amount.and_then(|a| a.as_integer()), Some(30));
    }

    #[tokio::test]
    async fn test_json_body_with_charset() {
        let req = request(
            Some("application/json; charset=utf-8"),
            r#"{"name":"bob","amount":45}"#,
        );
        let FormOrJson(payload) =
            FormOrJson::<Payload>::from_request(req, &()).await.unwrap();

        assert_eq!(payload.name.as_deref(), Some("bob"));
        assert_eq!(payload.amount, Some(FieldValue::Integer(45)));
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let req = request(Some("application/json"), "{not json");
        let err = FormOrJson::<Payload>::from_request(req, &())
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "INVALID_BODY");
    }

    #[tokio::test]
    async fn test_missing_content_type_is_rejected() {
        let req = request(None, "name=alice");
        let err = FormOrJson::<Payload>::from_request(req, &())
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[test]
    fn test_field_value_integer_parsing() {
        assert_eq!(FieldValue::Text(" 15 ".into()).as_integer(), Some(15));
        assert_eq!(FieldValue::Float(20.0).as_integer(), Some(20));
        assert_eq!(FieldValue::Float(20.5).as_integer(), None);
        assert_eq!(FieldValue::Text("ten".into()).as_integer(), None);
        assert!(FieldValue::Text("  ".into()).is_blank());
    }
}
