use std::fmt;

use crate::model::entity::Passenger;
use crate::model::unit::{Cost, Seats};

/// Text rendering of the passengers that made it onto the flight.
pub struct Report<'a> {
    passengers: &'a [Passenger],
    capacity: Seats,
}

impl<'a> Report<'a> {
    pub fn new(passengers: &'a [Passenger], capacity: Seats) -> Report<'a> {
        Report { passengers, capacity }
    }

    pub fn revenue(&self) -> Cost {
        self.passengers.iter().map(Passenger::ticket_price).sum()
    }

    pub fn seats_used(&self) -> Seats {
        self.passengers.iter().map(Passenger::seat_requirement).sum()
    }

    fn widths(&self) -> [usize; 4] {
        let rows = self.passengers.iter();
        let digits = rows.clone().map(|p| p.id.to_string().len()).max().unwrap_or(0);
        [
            widest(rows.clone().map(|p| id_cell(p).len()), 0, "").max(digits + ID_PADDING),
            widest(rows.clone().map(|p| p.age.to_string().len()), PADDING, "Age"),
            widest(rows.clone().map(|p| p.kind.to_string().len()), PADDING, "Type"),
            widest(rows.map(|p| p.family_key().map_or(0, str::len)), PADDING, "Family"),
        ]
    }
}

const ID_PADDING: usize = 5;
const PADDING: usize = 2;

fn id_cell(passenger: &Passenger) -> String {
    format!("ID: {:03}", passenger.id)
}

fn widest(cells: impl Iterator<Item = usize>, padding: usize, header: &str) -> usize {
    cells.map(|len| len + padding).chain([header.len()]).max().unwrap_or(0)
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [id, age, kind, family] = self.widths();

        writeln!(f, "Selected Passengers:")?;
        writeln!(f, "{:<id$} | {:<age$} | {:<kind$} | {:<family$}", "", "Age", "Type", "Family")?;
        writeln!(f, "{}", "-".repeat(id + age + kind + family + 9))?;
        for passenger in self.passengers {
            writeln!(
                f,
                "{:<id$} | {:<age$} | {:<kind$} | {:<family$}",
                id_cell(passenger),
                passenger.age,
                passenger.kind,
                passenger.family_key().unwrap_or(""),
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Summary:")?;
        writeln!(f, "Total Revenue Generated: {} Euros", self.revenue())?;
        write!(f, "Total Seats Used: {} / {}", self.seats_used(), self.capacity)
    }
}
