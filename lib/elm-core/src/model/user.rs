#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub email: String,
    /// Profile name, "first last" convention
    pub full_name: String,
    pub is_staff: bool,
    pub is_superuser: bool,
}
