use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::error::GenerateError;
use crate::model::entity::{Age, FamilyName, Id, Passenger, PassengerKind};
use crate::model::family::Family;

const ADULT_AGES: std::ops::RangeInclusive<Age> = 13..=59;
const CHILD_AGES: std::ops::RangeInclusive<Age> = 2..=11;
const MAX_CHILD_AGE: Age = 12;

/// Hands out passenger ids, starting at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassengerIdGenerator {
    next: Id,
}

impl Default for PassengerIdGenerator {
    fn default() -> Self {
        PassengerIdGenerator { next: 1 }
    }
}

impl PassengerIdGenerator {
    pub fn next_id(&mut self) -> Id {
        let id = self.next;
        self.next += 1;
        id
    }

    pub fn reset(&mut self) {
        self.next = 1;
    }
}

/// Family names in spreadsheet-column order: A..Z, AA, AB, ...
pub fn family_name(index: usize) -> FamilyName {
    let mut letters = Vec::new();
    let mut index = index as i64;
    while index >= 0 {
        letters.push(char::from(b'A' + (index % 26) as u8));
        index = index / 26 - 1;
    }
    letters.iter().rev().collect()
}

/// Builds random passenger populations for exercising the optimizer.
pub struct PassengerGenerator {
    ids: PassengerIdGenerator,
    rng: SmallRng,
}

impl PassengerGenerator {
    pub fn new(rng: SmallRng) -> PassengerGenerator {
        PassengerGenerator {
            ids: PassengerIdGenerator::default(),
            rng,
        }
    }

    pub fn from_seed(seed: u64) -> PassengerGenerator {
        PassengerGenerator::new(SmallRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> PassengerGenerator {
        PassengerGenerator::new(SmallRng::from_entropy())
    }

    /// Generates exactly `count` passengers, part of them grouped into
    /// families. Every family member is also part of the passenger list.
    ///
    /// Ids restart at 1 on every call.
    pub fn generate(&mut self, count: usize) -> Result<(Vec<Passenger>, Vec<Family>), GenerateError> {
        if count == 0 {
            return Err(GenerateError::InvalidCount);
        }
        self.ids.reset();

        let mut passengers = Vec::with_capacity(count);
        let mut families = Vec::new();
        while passengers.len() < count {
            let free = count - passengers.len();
            if free > 1 && self.rng.gen_bool(0.5) {
                let name = family_name(families.len());
                let bound = (passengers.len() + Family::MAX_MEMBERS >= count).then_some(free);
                let family = self.generate_family(name, bound)?;
                passengers.extend_from_slice(family.members());
                families.push(family);
            } else {
                let passenger = self.generate_single_passenger();
                passengers.push(passenger);
            }
        }

        info!(
            passengers = passengers.len(),
            families = families.len(),
            "generated passengers"
        );
        Ok((passengers, families))
    }

    /// Generates one family of at most `max_members` (default 5) members:
    /// one or two adults followed by up to three children.
    pub fn generate_family(
        &mut self,
        name: impl Into<FamilyName>,
        max_members: Option<usize>,
    ) -> Result<Family, GenerateError> {
        let max_members = max_members.unwrap_or(Family::MAX_MEMBERS);
        if !(1..=Family::MAX_MEMBERS).contains(&max_members) {
            return Err(GenerateError::InvalidFamilySize(max_members));
        }

        let mut family = Family::new(name);
        let size = self.rng.gen_range(max_members.min(2)..=max_members);
        let adults = self.rng.gen_range(1..=Family::MAX_ADULTS).min(size);
        let children = (size - adults).min(Family::MAX_CHILDREN);

        for _ in 0..adults {
            let age = self.rng.gen_range(ADULT_AGES);
            let passenger = self.generate_passenger(age, Some(family.name()));
            family.add_member(passenger)?;
        }
        for _ in 0..children {
            let age = self.rng.gen_range(CHILD_AGES);
            let passenger = self.generate_passenger(age, Some(family.name()));
            family.add_member(passenger)?;
        }

        debug!(family = family.name(), members = family.len(), "generated family");
        Ok(family)
    }

    /// An adult-age passenger travelling alone.
    pub fn generate_single_passenger(&mut self) -> Passenger {
        let age = self.rng.gen_range(ADULT_AGES);
        self.generate_passenger(age, None)
    }

    /// Passengers older than 12 are adults, needing one or two seats with
    /// equal probability.
    pub fn generate_passenger(&mut self, age: Age, family: Option<&str>) -> Passenger {
        let kind = if age > MAX_CHILD_AGE {
            if self.rng.gen_bool(0.5) {
                PassengerKind::AdultRequiringTwoSeats
            } else {
                PassengerKind::Adult
            }
        } else {
            PassengerKind::Child
        };
        let passenger = Passenger::new(self.ids.next_id(), age, kind);
        match family {
            Some(name) if !name.is_empty() => passenger.with_family(name),
            _ => passenger,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use test_case::test_case;

    #[test]
    fn ids_count_up_and_reset() {
        let mut ids = PassengerIdGenerator::default();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.next_id(), 3);
        ids.reset();
        assert_eq!(ids.next_id(), 1);
    }

    #[test_case(0, "A")]
    #[test_case(1, "B")]
    #[test_case(25, "Z")]
    #[test_case(26, "AA")]
    #[test_case(27, "AB")]
    #[test_case(51, "AZ")]
    #[test_case(52, "BA")]
    #[test_case(701, "ZZ")]
    #[test_case(702, "AAA")]
    fn family_names(index: usize, expected: &str) {
        assert_eq!(family_name(index), expected);
    }

    #[test_case(1)]
    #[test_case(7)]
    #[test_case(250)]
    fn generates_exact_count(count: usize) {
        let mut generator = PassengerGenerator::from_seed(count as u64);
        let (passengers, families) = generator.generate(count).unwrap();
        assert_eq!(passengers.len(), count);

        let ids = passengers.iter().map(|p| p.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), count);
        assert!(ids.contains(&1));

        for family in &families {
            assert!(family.members().iter().all(|member| passengers.contains(member)));
        }
    }

    #[test]
    fn zero_count_is_rejected() {
        let mut generator = PassengerGenerator::from_seed(1);
        assert_eq!(generator.generate(0), Err(GenerateError::InvalidCount));
    }

    #[test]
    fn ids_restart_each_run() {
        let mut generator = PassengerGenerator::from_seed(3);
        generator.generate(10).unwrap();
        let (passengers, _) = generator.generate(10).unwrap();
        assert_eq!(passengers[0].id, 1);
    }

    #[test]
    fn same_seed_same_population() {
        let first = PassengerGenerator::from_seed(42).generate(60).unwrap();
        let second = PassengerGenerator::from_seed(42).generate(60).unwrap();
        assert_eq!(first, second);
    }

    #[test_case(None)]
    #[test_case(Some(1))]
    #[test_case(Some(2))]
    #[test_case(Some(3))]
    #[test_case(Some(5))]
    fn families_respect_composition(max_members: Option<usize>) {
        let mut generator = PassengerGenerator::from_seed(9);
        for index in 0..50 {
            let family = generator.generate_family(family_name(index), max_members).unwrap();
            let adults = family.members().iter().filter(|p| p.kind.is_adult()).count();
            let children = family.len() - adults;
            assert!(family.len() <= max_members.unwrap_or(5));
            assert!((1..=2).contains(&adults));
            assert!(children <= 3);
            assert!(family
                .members()
                .iter()
                .all(|p| p.family.as_deref() == Some(family.name())));
        }
    }

    #[test_case(0)]
    #[test_case(6)]
    fn family_bound_outside_limits(max_members: usize) {
        let mut generator = PassengerGenerator::from_seed(1);
        assert_eq!(
            generator.generate_family("A", Some(max_members)).unwrap_err(),
            GenerateError::InvalidFamilySize(max_members)
        );
    }

    #[test]
    fn passenger_kind_follows_age() {
        let mut generator = PassengerGenerator::from_seed(5);
        for _ in 0..20 {
            let child = generator.generate_passenger(8, None);
            assert_eq!(child.kind, PassengerKind::Child);
            assert_eq!(child.age, 8);
            let adult = generator.generate_passenger(30, Some("A"));
            assert!(adult.kind.is_adult());
            assert_eq!(adult.family.as_deref(), Some("A"));
        }
    }

    #[test]
    fn single_passengers_are_adults_travelling_alone() {
        let mut generator = PassengerGenerator::from_seed(11);
        for _ in 0..50 {
            let passenger = generator.generate_single_passenger();
            assert!(ADULT_AGES.contains(&passenger.age));
            assert!(passenger.kind.is_adult());
            assert!(passenger.family.is_none());
        }
    }
}
