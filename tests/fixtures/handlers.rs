//! User API handlers for the end-to-end generation tests.

pub struct StoreUserRequest;

impl StoreUserRequest {
    pub fn rules(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("email", "required|email"),
            ("age", "numeric|min:18"),
            ("subscribe", "boolean"),
        ]
    }
}

/// List all users.
///
/// @queryParam q string required Example: test
/// @queryParam page integer Example: 1
pub fn index() {}

/// Store a new user.
///
/// @bodyParam shadowed string Example: never used
pub fn store(request: StoreUserRequest) {}

/// Update a user profile.
///
/// @bodyParam age integer Example: 30
/// @bodyParam name string required Example: John Doe
/// @bodyParam nickname string optional
pub fn update(id: u64) {}

/// Delete a user.
pub fn destroy(id: u64) {}
