//! Diesel table definitions for the travel-agency schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate them
//! with `diesel print-schema` after changing a migration.

diesel::table! {
    /// Customers of the agency.
    client (id_client) {
        /// Serial primary key.
        id_client -> Int4,
        first_name -> Varchar,
        last_name -> Varchar,
        email -> Varchar,
        /// Optional phone number.
        telephone -> Nullable<Varchar>,
        /// Optional national identifier.
        pesel -> Nullable<Varchar>,
    }
}

diesel::table! {
    /// Trips on offer.
    ///
    /// `max_people` is positive and `date_to` never precedes `date_from`.
    trip (id_trip) {
        /// Serial primary key.
        id_trip -> Int4,
        name -> Varchar,
        description -> Nullable<Varchar>,
        date_from -> Date,
        date_to -> Date,
        /// Capacity limit for `client_trip` rows referencing this trip.
        max_people -> Int4,
    }
}

diesel::table! {
    /// Country dictionary, unique by name.
    country (id_country) {
        id_country -> Int4,
        name -> Varchar,
    }
}

diesel::table! {
    /// Ordered country list of each trip.
    ///
    /// `position` is the country's index in the list supplied at creation.
    country_trip (id_country, id_trip) {
        id_country -> Int4,
        id_trip -> Int4,
        position -> Int4,
    }
}

diesel::table! {
    /// Client registrations on trips, keyed by the pair.
    client_trip (id_client, id_trip) {
        id_client -> Int4,
        id_trip -> Int4,
        /// Date the registration was recorded.
        registered_at -> Date,
        /// Date the trip was paid for, if it has been.
        payment_date -> Nullable<Date>,
    }
}

diesel::joinable!(country_trip -> country (id_country));
diesel::joinable!(country_trip -> trip (id_trip));
diesel::joinable!(client_trip -> client (id_client));
diesel::joinable!(client_trip -> trip (id_trip));

diesel::allow_tables_to_appear_in_same_query!(client, trip, country, country_trip, client_trip);
