use std::collections::HashMap;

use itertools::Itertools;

use crate::error::FamilyError;
use crate::model::entity::{Passenger, PassengerKind};
use crate::model::family::Family;
use crate::model::unit::{Cost, Seats};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Class {
    Adult,
    Child,
}

impl From<PassengerKind> for Class {
    fn from(kind: PassengerKind) -> Self {
        if kind.is_adult() { Class::Adult } else { Class::Child }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ClassCounter(HashMap<Class, usize>);

impl ClassCounter {
    fn get(&self, class: Class) -> usize {
        self.0.get(&class).copied().unwrap_or(0)
    }
}

impl From<&[Passenger]> for ClassCounter {
    fn from(members: &[Passenger]) -> Self {
        ClassCounter(members.iter().map(|member| Class::from(member.kind)).counts())
    }
}

impl Family {
    /// Appends `passenger` if the family stays within its composition limits.
    ///
    /// Checks run in a fixed order and the first violation is returned; on
    /// error the family is left untouched.
    pub fn add_member(&mut self, passenger: Passenger) -> Result<(), FamilyError> {
        self.check_admission(passenger.kind)?;
        self.members.push(passenger);
        Ok(())
    }

    fn check_admission(&self, kind: PassengerKind) -> Result<(), FamilyError> {
        if self.members.len() >= Family::MAX_MEMBERS {
            return Err(FamilyError::FamilyFull);
        }
        let counts = ClassCounter::from(self.members.as_slice());
        match Class::from(kind) {
            Class::Child => {
                if counts.get(Class::Adult) == 0 {
                    return Err(FamilyError::UnaccompaniedChild);
                }
                if counts.get(Class::Child) >= Family::MAX_CHILDREN {
                    return Err(FamilyError::TooManyChildren);
                }
            }
            Class::Adult => {
                if counts.get(Class::Adult) >= Family::MAX_ADULTS {
                    return Err(FamilyError::TooManyAdults);
                }
            }
        }
        Ok(())
    }

    pub fn total_cost(&self) -> Cost {
        self.members.iter().map(Passenger::ticket_price).sum()
    }

    pub fn total_seats(&self) -> Seats {
        self.members.iter().map(Passenger::seat_requirement).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn member(id: u32, kind: PassengerKind) -> Passenger {
        let age = if kind.is_adult() { 35 } else { 8 };
        Passenger::new(id, age, kind).with_family("A")
    }

    fn family_of(kinds: &[PassengerKind]) -> Family {
        let mut family = Family::new("A");
        for (id, kind) in kinds.iter().enumerate() {
            family.add_member(member(id as u32 + 1, *kind)).unwrap();
        }
        family
    }

    use PassengerKind::{Adult, AdultRequiringTwoSeats as Wide, Child};

    #[test]
    fn new_family_is_empty() {
        let family = Family::new("A");
        assert_eq!(family.name(), "A");
        assert!(family.is_empty());
        assert_eq!(family.total_cost(), 0);
        assert_eq!(family.total_seats(), 0);
    }

    #[test]
    fn full_family_accepts_nothing() {
        let mut family = family_of(&[Adult, Wide, Child, Child, Child]);
        assert_eq!(family.len(), 5);
        assert_eq!(family.add_member(member(6, Adult)), Err(FamilyError::FamilyFull));
        assert_eq!(family.add_member(member(6, Child)), Err(FamilyError::FamilyFull));
        assert_eq!(family.len(), 5);
    }

    #[test]
    fn child_needs_an_adult() {
        let mut family = Family::new("A");
        assert_eq!(family.add_member(member(1, Child)), Err(FamilyError::UnaccompaniedChild));
        assert!(family.is_empty());
    }

    #[test]
    fn fourth_child_is_rejected() {
        let mut family = family_of(&[Adult, Child, Child, Child]);
        assert_eq!(family.add_member(member(5, Child)), Err(FamilyError::TooManyChildren));
        assert_eq!(family.len(), 4);
    }

    #[test_case(&[Adult, Adult], Adult; "two adults then adult")]
    #[test_case(&[Wide, Adult], Wide; "mixed adults then wide adult")]
    #[test_case(&[Wide, Wide, Child], Adult; "two wide adults and a child")]
    fn third_adult_is_rejected(existing: &[PassengerKind], next: PassengerKind) {
        let mut family = family_of(existing);
        let before = family.clone();
        assert_eq!(family.add_member(member(9, next)), Err(FamilyError::TooManyAdults));
        assert_eq!(family, before);
    }

    #[test]
    fn size_is_checked_before_composition() {
        // Five members with two adults: a further adult would also break the
        // adult limit, but the size check wins.
        let mut family = family_of(&[Adult, Adult, Child, Child, Child]);
        assert_eq!(family.add_member(member(6, Adult)), Err(FamilyError::FamilyFull));
    }

    #[test]
    fn members_keep_insertion_order() {
        let family = family_of(&[Wide, Child, Adult]);
        let ids = family.members().iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test_case(&[Adult], 250, 1)]
    #[test_case(&[Wide], 500, 2)]
    #[test_case(&[Adult, Child], 400, 2)]
    #[test_case(&[Adult, Adult, Child, Child, Child], 950, 5)]
    #[test_case(&[Wide, Wide, Child, Child, Child], 1450, 7)]
    fn totals_follow_members(kinds: &[PassengerKind], cost: Cost, seats: Seats) {
        let family = family_of(kinds);
        assert_eq!(family.total_cost(), cost);
        assert_eq!(family.total_seats(), seats);
    }

    #[test]
    fn totals_reflect_later_additions() {
        let mut family = family_of(&[Adult]);
        assert_eq!(family.total_cost(), 250);
        family.add_member(member(2, Child)).unwrap();
        assert_eq!(family.total_cost(), 400);
        assert_eq!(family.total_seats(), 2);
    }
}
