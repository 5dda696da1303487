use poem::http::StatusCode;
use poem_openapi::payload::PlainText;

/// Maps a core error onto its HTTP status and plain-text body.
///
/// This is the only place where error kinds become transport statuses.
pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, PlainText<String>);
}
