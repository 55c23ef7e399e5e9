use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::error::FormationError;
use crate::model::entity::Passenger;
use crate::model::family::Family;
use crate::model::unit::AllocationUnit;

impl From<&Passenger> for AllocationUnit<Passenger> {
    fn from(passenger: &Passenger) -> Self {
        AllocationUnit::new(
            passenger.ticket_price(),
            passenger.seat_requirement(),
            vec![passenger.clone()],
        )
    }
}

impl From<&Family> for AllocationUnit<Passenger> {
    fn from(family: &Family) -> Self {
        AllocationUnit {
            cost: family.total_cost(),
            seats: family.total_seats(),
            members: family.members().to_vec(),
            family: Some(family.name().to_owned()),
        }
    }
}

/// Groups `passengers` into the units the optimizer chooses from.
///
/// Lone passengers become singleton units. A family becomes a single unit
/// carrying all of its members the first time one of them shows up in
/// `passengers`; later members of the same family add nothing. Units come
/// out in first-encounter order.
pub fn form_units(
    passengers: &[Passenger],
    families: &[Family],
) -> Result<Vec<AllocationUnit<Passenger>>, FormationError> {
    let by_name: HashMap<&str, &Family> = families
        .iter()
        .map(|family| (family.name(), family))
        .collect();
    let mut added: HashSet<&str> = HashSet::new();
    let mut units = Vec::new();

    for passenger in passengers {
        match passenger.family_key() {
            None => units.push(AllocationUnit::from(passenger)),
            Some(name) => {
                if added.contains(name) {
                    continue;
                }
                let family = by_name.get(name).ok_or_else(|| {
                    FormationError::UnknownFamilyReference {
                        family: name.to_owned(),
                        passenger: passenger.id,
                    }
                })?;
                trace!(family = name, members = family.len(), "forming family unit");
                added.insert(name);
                units.push(AllocationUnit::from(*family));
            }
        }
    }

    debug!(
        passengers = passengers.len(),
        families = added.len(),
        units = units.len(),
        "formed allocation units"
    );
    Ok(units)
}

/// Every payload item of `units`, in unit order then payload order.
pub fn flatten_units<P: Clone>(units: &[AllocationUnit<P>]) -> Vec<P> {
    units.iter().flat_map(|unit| unit.members.iter().cloned()).collect()
}
