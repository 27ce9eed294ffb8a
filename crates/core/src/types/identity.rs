//! Identity of the shopper that owns a cart/wishlist partition.

use super::id::UserId;

/// The logical actor that scopes a cart or wishlist partition.
///
/// A guest session has no stable identifier; an authenticated shopper is
/// keyed by their WordPress user ID. Switching identity swaps the active
/// storage partition wholesale - guest state is never merged into a user
/// partition and stays intact for a later logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Identity {
    /// Anonymous browsing session.
    #[default]
    Guest,
    /// Logged-in shopper.
    Authenticated(UserId),
}

impl Identity {
    /// Suffix of the durable-storage partition key for this identity.
    ///
    /// `"guest"` for guests, `"user_<id>"` for authenticated shoppers.
    /// Deterministic and pure.
    #[must_use]
    pub fn partition_suffix(&self) -> String {
        match self {
            Self::Guest => "guest".to_owned(),
            Self::Authenticated(user_id) => format!("user_{user_id}"),
        }
    }

    /// Whether this identity belongs to a logged-in shopper.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Guest => write!(f, "guest"),
            Self::Authenticated(user_id) => write!(f, "user {user_id}"),
        }
    }
}
