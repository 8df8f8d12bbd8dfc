use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_derive::Serialize;

#[derive(Serialize)]
pub struct JsonResponse<T> {
    pub(crate) status: String,
    pub(crate) message: String,
    pub(crate) code: u32,
    pub(crate) id: Option<i32>,
    pub(crate) item: Option<T>,
    pub(crate) list: Option<Vec<T>>,
}

pub struct JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    id: Option<i32>,
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T> Default for JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    fn default() -> Self {
        Self {
            id: None,
            item: None,
            list: None,
        }
    }
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize,
{
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder::default()
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    pub fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    fn into_response(self, status: StatusCode, message: String) -> HttpResponse {
        let label = if status.is_success() { "OK" } else { "Error" };
        HttpResponse::build(status).json(JsonResponse {
            status: label.to_string(),
            message,
            code: status.as_u16() as u32,
            id: self.id,
            item: self.item,
            list: self.list,
        })
    }

    fn into_error(self, status: StatusCode, message: impl Into<String>) -> actix_web::Error {
        let message = message.into();
        let message = if message.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("Error")
                .to_string()
        } else {
            message
        };
        let response = self.into_response(status, message.clone());
        InternalError::from_response(message, response).into()
    }

    pub fn ok(self, message: impl Into<String>) -> HttpResponse {
        self.into_response(StatusCode::OK, message.into())
    }

    pub fn bad_request(self, message: impl Into<String>) -> actix_web::Error {
        self.into_error(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(self, message: impl Into<String>) -> actix_web::Error {
        self.into_error(StatusCode::NOT_FOUND, message)
    }

    pub fn internal_server_error(self, message: impl Into<String>) -> actix_web::Error {
        self.into_error(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}
