use diesel::connection::SimpleConnection;

use team_sync::team::{TEAM_CAPACITY, TeamError, TeamStore, repo};

mod common;

#[test]
fn upsert_then_lookup_round_trips() {
    let (_db, mut conn) = common::setup_db();

    repo::upsert_member(&mut conn, 1, "bulbasaur", "img/1.png", 0).unwrap();
    let row = repo::find_by_key(&mut conn, 1).unwrap().expect("row");
    assert_eq!(row.name, "bulbasaur");
    assert_eq!(row.slot_position, 0);
    assert_eq!(repo::count_members(&mut conn).unwrap(), 1);
}

#[test]
fn upsert_into_occupied_slot_evicts_the_occupant() {
    let (_db, mut conn) = common::setup_db();

    repo::upsert_member(&mut conn, 1, "bulbasaur", "", 0).unwrap();
    repo::upsert_member(&mut conn, 4, "charmander", "", 0).unwrap();

    assert_eq!(repo::count_members(&mut conn).unwrap(), 1);
    assert!(repo::find_by_key(&mut conn, 1).unwrap().is_none());
    let row = repo::find_by_key(&mut conn, 4).unwrap().expect("row");
    assert_eq!(row.slot_position, 0);
}

#[test]
fn upsert_moves_a_member_between_slots_without_duplicating_it() {
    let (_db, mut conn) = common::setup_db();

    repo::upsert_member(&mut conn, 7, "squirtle", "", 0).unwrap();
    repo::upsert_member(&mut conn, 7, "squirtle", "", 3).unwrap();

    assert_eq!(repo::count_members(&mut conn).unwrap(), 1);
    let row = repo::find_by_key(&mut conn, 7).unwrap().expect("row");
    assert_eq!(row.slot_position, 3);
}

#[test]
fn upsert_into_its_own_slot_overwrites_in_place() {
    let (_db, mut conn) = common::setup_db();

    repo::upsert_member(&mut conn, 7, "squirtle", "", 2).unwrap();
    repo::upsert_member(&mut conn, 7, "squirtle", "img/new.png", 2).unwrap();

    assert_eq!(repo::count_members(&mut conn).unwrap(), 1);
    let row = repo::find_by_key(&mut conn, 7).unwrap().expect("row");
    assert_eq!(row.image_url, "img/new.png");
}

#[test]
fn out_of_range_slots_are_rejected() {
    let (_db, mut conn) = common::setup_db();

    let err = repo::upsert_member(&mut conn, 1, "x", "", TEAM_CAPACITY).unwrap_err();
    assert!(matches!(err, TeamError::SlotOutOfRange(_)));
    let err = repo::delete_by_slot(&mut conn, TEAM_CAPACITY).unwrap_err();
    assert!(matches!(err, TeamError::SlotOutOfRange(_)));
    assert_eq!(repo::count_members(&mut conn).unwrap(), 0);
}

#[test]
fn deletes_are_noops_when_nothing_matches() {
    let (_db, mut conn) = common::setup_db();

    assert_eq!(repo::delete_by_slot(&mut conn, 2).unwrap(), 0);
    assert_eq!(repo::delete_by_key(&mut conn, 42).unwrap(), 0);

    repo::upsert_member(&mut conn, 42, "mew", "", 2).unwrap();
    assert_eq!(repo::delete_by_slot(&mut conn, 2).unwrap(), 1);
    assert_eq!(repo::delete_by_key(&mut conn, 42).unwrap(), 0);
}

#[test]
fn corrupt_slot_rows_are_skipped_in_snapshots() {
    let (db, mut conn) = common::setup_db();

    repo::upsert_member(&mut conn, 1, "bulbasaur", "", 2).unwrap();
    // Bypass the repo to plant a row with an impossible slot.
    conn.batch_execute(
        "INSERT INTO team_member (id, name, image_url, slot_position) VALUES (99, 'glitch', '', 99)",
    )
    .unwrap();
    drop(conn);

    let store = TeamStore::open(&db.path).expect("open");
    let snapshot = store.snapshot();
    assert_eq!(snapshot.iter().flatten().count(), 1);
    assert_eq!(snapshot[2].as_ref().unwrap().id, 1);
}
