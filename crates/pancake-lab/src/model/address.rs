use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Delivery address inside the campus: a building and a room in it.
///
/// Ranges are not enforced here; see [`AddressValidator`](crate::validators::AddressValidator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    pub building: i32,
    pub room: i32,
}

impl Address {
    pub fn new(building: i32, room: i32) -> Self {
        Self { building, room }
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "building {}, room {}", self.building, self.room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_needs_both_fields() {
        assert_eq!(Address::new(3, 14), Address::new(3, 14));
        assert_ne!(Address::new(3, 14), Address::new(3, 15));
        assert_ne!(Address::new(3, 14), Address::new(4, 14));
    }
}
