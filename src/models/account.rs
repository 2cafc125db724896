//! Account model

use serde::{Deserialize, Serialize};

/// A registered account
///
/// The username doubles as the user identifier everywhere else in the
/// system. The password is stored as given; hashing is explicitly out of
/// scope for this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}
