//! Diesel table definitions for the team database.

#![allow(missing_docs)]

diesel::table! {
    team_member (id) {
        id -> Integer,
        name -> Text,
        image_url -> Text,
        slot_position -> Integer,
    }
}
