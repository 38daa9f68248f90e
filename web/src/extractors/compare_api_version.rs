use crate::extractors::RejectionType;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use log::*;
use semver::Version;
use service::config::ApiVersion;

/// Rejects requests whose `x-version` header is missing or names an API
/// version this server does not serve. Yields the parsed version otherwise.
pub(crate) struct CompareApiVersion(pub Version);

impl<S> FromRequestParts<S> for CompareApiVersion
where
    S: Send + Sync,
{
    type Rejection = RejectionType;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(ApiVersion::field_name())
            .and_then(|value| value.to_str().ok())
            .map(str::trim);

        match header {
            Some(version) if ApiVersion::is_supported(version) => Version::parse(version)
                .map(CompareApiVersion)
                .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string())),
            Some(version) => {
                debug!("Rejected request for unsupported API version {version}");
                Err((
                    StatusCode::BAD_REQUEST,
                    format!(
                        "Unsupported {} header value: {version}",
                        ApiVersion::field_name()
                    ),
                ))
            }
            None => Err((
                StatusCode::BAD_REQUEST,
                format!("Missing {} header", ApiVersion::field_name()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(version: Option<&str>) -> Result<CompareApiVersion, RejectionType> {
        let mut builder = Request::builder().uri("/programs");
        if let Some(version) = version {
            builder = builder.header(ApiVersion::field_name(), version);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        CompareApiVersion::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn accepts_the_default_version() {
        let CompareApiVersion(version) = extract(Some(ApiVersion::default_version()))
            .await
            .unwrap();
        assert_eq!(version.to_string(), ApiVersion::default_version());
    }

    #[tokio::test]
    async fn rejects_a_missing_header() {
        let (status, _) = extract(None).await.err().unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rejects_an_unknown_version() {
        let (status, message) = extract(Some("9.9.9")).await.err().unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(message.contains("9.9.9"));
    }
}
