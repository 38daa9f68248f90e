use serde::Deserialize;
use utoipa::ToSchema;

use domain::roles::Role;

/// Body for a user editing their own profile
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct UpdateParams {
    pub(crate) full_name: String,
    pub(crate) email: String,
}

/// Body for replacing a user's whole role set
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct RolesParams {
    pub(crate) roles: Vec<Role>,
}

/// Body for disabling or re-enabling an account
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct DisabledParams {
    pub(crate) disabled: bool,
}
