//! Domain rules checked before anything is written to storage.

use crate::model::{Address, Pancake};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Valid building and room numbers.
pub const ADDRESS_RANGE: RangeInclusive<i32> = 1..=100;

/// Most ingredients a single pancake can carry.
pub const MAX_INGREDIENTS: usize = 5;

/// A value broke a domain rule.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Building number must be between 1 and 100, got {0}")]
    BuildingOutOfRange(i32),

    #[error("Room number must be between 1 and 100, got {0}")]
    RoomOutOfRange(i32),

    #[error("Pancake can't have more than {max} ingredients, got {count}")]
    TooManyIngredients { count: usize, max: usize },
}

pub trait Validator<T> {
    fn validate(&self, value: &T) -> Result<(), ValidationError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AddressValidator;

impl Validator<Address> for AddressValidator {
    fn validate(&self, address: &Address) -> Result<(), ValidationError> {
        if !ADDRESS_RANGE.contains(&address.building) {
            return Err(ValidationError::BuildingOutOfRange(address.building));
        }
        if !ADDRESS_RANGE.contains(&address.room) {
            return Err(ValidationError::RoomOutOfRange(address.room));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PancakeValidator;

impl Validator<Pancake> for PancakeValidator {
    fn validate(&self, pancake: &Pancake) -> Result<(), ValidationError> {
        let count = pancake.ingredients.len();
        if count > MAX_INGREDIENTS {
            return Err(ValidationError::TooManyIngredients {
                count,
                max: MAX_INGREDIENTS,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Ingredient, OrderId};
    use proptest::prelude::*;

    #[test]
    fn test_address_bounds_are_inclusive() {
        let validator = AddressValidator;
        assert!(validator.validate(&Address::new(1, 1)).is_ok());
        assert!(validator.validate(&Address::new(100, 100)).is_ok());
    }

    #[test]
    fn test_building_checked_before_room() {
        let result = AddressValidator.validate(&Address::new(0, 101));
        assert_eq!(result, Err(ValidationError::BuildingOutOfRange(0)));
    }

    #[test]
    fn test_room_out_of_range() {
        let result = AddressValidator.validate(&Address::new(5, 101));
        assert_eq!(result, Err(ValidationError::RoomOutOfRange(101)));
    }

    #[test]
    fn test_pancake_ingredient_limit() {
        let mut pancake = Pancake::new(OrderId::new());
        for _ in 0..MAX_INGREDIENTS {
            pancake = pancake.with_ingredient(Ingredient::Hazelnuts);
        }
        assert!(PancakeValidator.validate(&pancake).is_ok());

        let too_many = pancake.with_ingredient(Ingredient::Hazelnuts);
        assert_eq!(
            PancakeValidator.validate(&too_many),
            Err(ValidationError::TooManyIngredients { count: 6, max: 5 })
        );
    }

    proptest! {
        #[test]
        fn prop_addresses_in_range_pass(building in 1..=100i32, room in 1..=100i32) {
            prop_assert!(AddressValidator.validate(&Address::new(building, room)).is_ok());
        }

        #[test]
        fn prop_building_out_of_range_fails(
            building in prop_oneof![i32::MIN..1i32, 101..=i32::MAX],
            room in 1..=100i32,
        ) {
            prop_assert_eq!(
                AddressValidator.validate(&Address::new(building, room)),
                Err(ValidationError::BuildingOutOfRange(building))
            );
        }

        #[test]
        fn prop_room_out_of_range_fails(
            building in 1..=100i32,
            room in prop_oneof![i32::MIN..1i32, 101..=i32::MAX],
        ) {
            prop_assert_eq!(
                AddressValidator.validate(&Address::new(building, room)),
                Err(ValidationError::RoomOutOfRange(room))
            );
        }
    }
}
