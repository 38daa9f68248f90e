use serde::Serialize;
pub(crate) mod admin;
pub(crate) mod application_controller;
pub(crate) mod contact_submission_controller;
pub(crate) mod event_controller;
pub(crate) mod health_check_controller;
pub(crate) mod hero_banner_controller;
pub(crate) mod mentor_controller;
pub(crate) mod program_controller;
pub(crate) mod site_controller;
pub(crate) mod startup_controller;
pub(crate) mod user;
pub(crate) mod user_controller;
pub(crate) mod user_session_controller;

#[derive(Debug, Serialize)]
struct ApiResponse<T: Serialize> {
    status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status_code: u16, data: T) -> Self {
        Self {
            status_code,
            data: Some(data),
        }
    }

    pub fn no_content(status_code: u16) -> ApiResponse<()> {
        ApiResponse {
            status_code,
            data: None,
        }
    }
}
