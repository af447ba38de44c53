//! Internal Diesel row structs.
//!
//! These types never leave the persistence layer; repositories convert them
//! into domain values before returning.

use chrono::NaiveDate;
use diesel::prelude::*;

use super::schema::{client, client_trip, country, country_trip, trip};

/// Insertable struct for new client records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = client)]
pub(crate) struct NewClientRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub telephone: Option<&'a str>,
    pub pesel: Option<&'a str>,
}

/// Row struct for reading trips.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = trip)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TripRow {
    pub id_trip: i32,
    pub name: String,
    pub description: Option<String>,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub max_people: i32,
}

/// Insertable struct for new trip records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = trip)]
pub(crate) struct NewTripRow<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub max_people: i32,
}

/// Insertable struct for country dictionary entries.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = country)]
pub(crate) struct NewCountryRow<'a> {
    pub name: &'a str,
}

/// Insertable struct linking a trip to a country at a list position.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = country_trip)]
pub(crate) struct NewCountryTripRow {
    pub id_country: i32,
    pub id_trip: i32,
    pub position: i32,
}

/// Registration columns read alongside a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = client_trip)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RegistrationRow {
    pub registered_at: NaiveDate,
    pub payment_date: Option<NaiveDate>,
}

/// Insertable struct for new registrations.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = client_trip)]
pub(crate) struct NewClientTripRow {
    pub id_client: i32,
    pub id_trip: i32,
    pub registered_at: NaiveDate,
    pub payment_date: Option<NaiveDate>,
}
