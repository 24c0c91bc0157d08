use chrono::{Duration, TimeZone, Utc};
use mindfuel_core::db::open_db_in_memory;
use mindfuel_core::{
    Habit, HabitRepository, Mood, MoodRepository, NewHabit, NewMood, RepoError, SqliteHabitRepository,
    SqliteMoodRepository,
};
use rusqlite::Connection;

fn stored_habit(repo: &SqliteHabitRepository<'_>, id: i64) -> Habit {
    repo.list_habits()
        .unwrap()
        .into_iter()
        .find(|habit| habit.id == id)
        .unwrap()
}

fn stored_mood(repo: &SqliteMoodRepository<'_>, id: i64) -> Mood {
    repo.list_moods()
        .unwrap()
        .into_iter()
        .find(|mood| mood.id == id)
        .unwrap()
}

#[test]
fn create_and_read_habit_roundtrip_is_verbatim() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteHabitRepository::try_new(&conn).unwrap();

    let habit = NewHabit::new("  Morning run ").with_tag("Health ✓");
    let id = repo.create_habit(&habit).unwrap();

    let loaded = stored_habit(&repo, id);
    assert_eq!(loaded.id, id);
    assert_eq!(loaded.name, "  Morning run ");
    assert_eq!(loaded.tag.as_deref(), Some("Health ✓"));
}

#[test]
fn habit_without_tag_stores_null() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteHabitRepository::try_new(&conn).unwrap();

    let id = repo.create_habit(&NewHabit::new("read")).unwrap();
    assert_eq!(stored_habit(&repo, id).tag, None);
}

#[test]
fn ids_are_unique_and_increasing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteHabitRepository::try_new(&conn).unwrap();

    let first = repo.create_habit(&NewHabit::new("a")).unwrap();
    let second = repo.create_habit(&NewHabit::new("a")).unwrap();
    assert!(second > first);
}

#[test]
fn default_timestamp_is_insertion_time() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMoodRepository::try_new(&conn).unwrap();

    let before = Utc::now() - Duration::milliseconds(1);
    let id = repo.create_mood(&NewMood::new(5)).unwrap();
    let after = Utc::now() + Duration::milliseconds(1);

    let stored = stored_mood(&repo, id).timestamp;
    assert!(stored >= before && stored <= after);
}

#[test]
fn supplied_timestamp_is_kept() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteHabitRepository::try_new(&conn).unwrap();

    let at = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();
    let id = repo.create_habit(&NewHabit::new("stretch").at(at)).unwrap();
    assert_eq!(stored_habit(&repo, id).timestamp, at);
}

#[test]
fn create_and_read_mood_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMoodRepository::try_new(&conn).unwrap();

    let id = repo
        .create_mood(&NewMood::new(-3).with_energy(12).with_note("tired"))
        .unwrap();
    let loaded = stored_mood(&repo, id);
    assert_eq!(loaded.score, -3);
    assert_eq!(loaded.energy, Some(12));
    assert_eq!(loaded.note.as_deref(), Some("tired"));

    let bare = repo.create_mood(&NewMood::new(7)).unwrap();
    let loaded = stored_mood(&repo, bare);
    assert_eq!(loaded.energy, None);
    assert_eq!(loaded.note, None);
}

#[test]
fn validation_failure_blocks_create_and_persists_nothing() {
    let conn = open_db_in_memory().unwrap();
    let habits = SqliteHabitRepository::try_new(&conn).unwrap();
    let moods = SqliteMoodRepository::try_new(&conn).unwrap();

    let err = habits.create_habit(&NewHabit::new(" ")).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert!(habits.list_habits().unwrap().is_empty());

    let err = moods
        .create_mood(&NewMood::new(1).with_note("n".repeat(201)))
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert!(moods.list_moods().unwrap().is_empty());
}

#[test]
fn list_returns_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteHabitRepository::try_new(&conn).unwrap();

    let late = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let early = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();
    repo.create_habit(&NewHabit::new("first").at(late)).unwrap();
    repo.create_habit(&NewHabit::new("second").at(early)).unwrap();

    let names: Vec<String> = repo
        .list_habits()
        .unwrap()
        .into_iter()
        .map(|habit| habit.name)
        .collect();
    assert_eq!(names, vec!["first", "second"]);
}

#[test]
fn recent_orders_newest_first_and_breaks_ties_by_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMoodRepository::try_new(&conn).unwrap();

    let base = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    let oldest = repo.create_mood(&NewMood::new(1).at(base)).unwrap();
    let newest = repo
        .create_mood(&NewMood::new(2).at(base + Duration::hours(2)))
        .unwrap();
    let tie_low = repo
        .create_mood(&NewMood::new(3).at(base + Duration::hours(1)))
        .unwrap();
    let tie_high = repo
        .create_mood(&NewMood::new(4).at(base + Duration::hours(1)))
        .unwrap();

    let ids: Vec<i64> = repo
        .recent_moods(10)
        .unwrap()
        .into_iter()
        .map(|mood| mood.id)
        .collect();
    assert_eq!(ids, vec![newest, tie_high, tie_low, oldest]);
}

#[test]
fn recent_respects_limit() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteHabitRepository::try_new(&conn).unwrap();

    for index in 0..5 {
        repo.create_habit(&NewHabit::new(format!("h{index}"))).unwrap();
    }

    assert_eq!(repo.recent_habits(3).unwrap().len(), 3);
    assert!(repo.recent_habits(0).unwrap().is_empty());
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteHabitRepository::try_new(&conn) {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
    assert!(SqliteMoodRepository::try_new(&conn).is_err());
}

#[test]
fn corrupted_timestamp_is_reported_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO habits (name, timestamp) VALUES ('broken', ?1);",
        [i64::MAX],
    )
    .unwrap();

    let repo = SqliteHabitRepository::try_new(&conn).unwrap();
    let err = repo.list_habits().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(message) if message.contains("habits.timestamp")));
}
