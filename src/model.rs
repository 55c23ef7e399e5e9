pub mod entity {
    use std::fmt;
    use super::unit::{Cost, Seats};

    pub type Id = u32;
    pub type Age = u32;
    pub type FamilyName = String;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum PassengerKind {
        Adult,
        AdultRequiringTwoSeats,
        Child,
    }

    impl PassengerKind {
        /// Both adult categories count towards the adult limit of a family.
        pub fn is_adult(self) -> bool {
            matches!(self, PassengerKind::Adult | PassengerKind::AdultRequiringTwoSeats)
        }
    }

    impl fmt::Display for PassengerKind {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let label = match self {
                PassengerKind::Adult => "Adult",
                PassengerKind::AdultRequiringTwoSeats => "AdultRequiringTwoSeats",
                PassengerKind::Child => "Child",
            };
            f.pad(label)
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Passenger {
        pub id: Id,
        pub age: Age,
        pub kind: PassengerKind,
        pub family: Option<FamilyName>,
    }

    impl Passenger {
        pub fn new(id: Id, age: Age, kind: PassengerKind) -> Passenger {
            Passenger { id, age, kind, family: None }
        }

        pub fn with_family(mut self, family: impl Into<FamilyName>) -> Passenger {
            self.family = Some(family.into());
            self
        }

        pub fn ticket_price(&self) -> Cost {
            match self.kind {
                PassengerKind::AdultRequiringTwoSeats => 500,
                PassengerKind::Adult => 250,
                PassengerKind::Child => 150,
            }
        }

        pub fn seat_requirement(&self) -> Seats {
            match self.kind {
                PassengerKind::AdultRequiringTwoSeats => 2,
                PassengerKind::Adult | PassengerKind::Child => 1,
            }
        }

        /// The family key, with an empty name treated as travelling alone.
        pub fn family_key(&self) -> Option<&str> {
            self.family.as_deref().filter(|name| !name.is_empty())
        }
    }
}


pub mod family {
    use super::entity::{FamilyName, Passenger};

    /// A named group of passengers that is always seated together.
    ///
    /// Members can only be added through [`Family::add_member`], which keeps
    /// the composition rules intact.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Family {
        pub(crate) name: FamilyName,
        pub(crate) members: Vec<Passenger>,
    }

    impl Family {
        pub const MAX_MEMBERS: usize = 5;
        pub const MAX_ADULTS: usize = 2;
        pub const MAX_CHILDREN: usize = 3;

        pub fn new(name: impl Into<FamilyName>) -> Family {
            Family {
                name: name.into(),
                members: Vec::new(),
            }
        }

        pub fn name(&self) -> &str {
            &self.name
        }

        pub fn members(&self) -> &[Passenger] {
            &self.members
        }

        pub fn len(&self) -> usize {
            self.members.len()
        }

        pub fn is_empty(&self) -> bool {
            self.members.is_empty()
        }
    }
}

pub mod unit {
    use super::entity::FamilyName;

    pub type Cost = u64;
    pub type Seats = usize;

    /// An indivisible item the optimizer either takes whole or skips.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct AllocationUnit<P> {
        pub cost: Cost,
        pub seats: Seats,
        pub members: Vec<P>,
        pub family: Option<FamilyName>,
    }

    impl<P> AllocationUnit<P> {
        pub fn new(cost: Cost, seats: Seats, members: Vec<P>) -> AllocationUnit<P> {
            AllocationUnit { cost, seats, members, family: None }
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Selection<P> {
        pub units: Vec<AllocationUnit<P>>,
    }

    impl<P> Selection<P> {
        pub fn empty() -> Selection<P> {
            Selection { units: Vec::new() }
        }

        pub fn total_cost(&self) -> Cost {
            self.units.iter().map(|unit| unit.cost).sum()
        }

        pub fn total_seats(&self) -> Seats {
            self.units.iter().map(|unit| unit.seats).sum()
        }

        pub fn len(&self) -> usize {
            self.units.len()
        }

        pub fn is_empty(&self) -> bool {
            self.units.is_empty()
        }
    }
}
