//! User details consumed by token issuance and validation.

/// A principal that tokens are issued to and validated against.
///
/// The user store lives outside this crate; it only needs to expose the
/// username the token subject is bound to.
pub trait UserDetails {
    /// The username used as the token subject
    fn username(&self) -> &str;
}

impl UserDetails for str {
    fn username(&self) -> &str {
        self
    }
}

impl UserDetails for String {
    fn username(&self) -> &str {
        self.as_str()
    }
}

impl<T: UserDetails + ?Sized> UserDetails for &T {
    fn username(&self) -> &str {
        (**self).username()
    }
}
