//! Folds joined trip/country rows into domain trips.
//!
//! Listing queries left-join `country_trip` and `country`, producing one row
//! per (trip, country) pair ordered by trip identifier and list position. A
//! trip with no countries yields a single row with a `None` country.

use crate::domain::{Trip, TripId};

use super::models::TripRow;

pub(crate) fn trip_from_row(row: TripRow) -> Trip {
    Trip {
        id: TripId::new(row.id_trip),
        name: row.name,
        description: row.description,
        date_from: row.date_from,
        date_to: row.date_to,
        max_people: row.max_people,
        countries: Vec::new(),
    }
}

/// Group consecutive rows for the same trip, keeping the first `extra` seen
/// for each trip.
///
/// Rows must arrive ordered by trip. Country names keep their first-seen
/// order and repeats are dropped.
pub(crate) fn group_trip_rows<X, I>(rows: I) -> Vec<(Trip, X)>
where
    I: IntoIterator<Item = (TripRow, X, Option<String>)>,
{
    let mut grouped: Vec<(Trip, X)> = Vec::new();
    for (row, extra, country) in rows {
        let continues_last = grouped
            .last()
            .is_some_and(|(trip, _)| trip.id.get() == row.id_trip);
        if !continues_last {
            grouped.push((trip_from_row(row), extra));
        }
        let (Some(name), Some((trip, _))) = (country, grouped.last_mut()) else {
            continue;
        };
        if !trip.countries.contains(&name) {
            trip.countries.push(name);
        }
    }
    grouped
}
