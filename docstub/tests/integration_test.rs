//! End-to-end tests for the seeded store.
//!
//! Each test constructs a fresh store, seeds it, and drives the same
//! query/update shapes the application issues against a real database.

use bson::Bson;

use docstub::model::{Activity, Role, TeacherAccount};
use docstub::prelude::*;
use docstub::seed::{self, ACTIVITIES, TEACHERS};

async fn seeded_store() -> DocumentStore<MemoryStore> {
    let store = DocumentStore::new(MemoryStore::new());
    seed::init_database(&store).await.unwrap();
    store
}

fn names(documents: &[bson::Document]) -> Vec<&str> {
    let mut names = documents
        .iter()
        .filter_map(|document| document.get(ID_FIELD).and_then(Bson::as_str))
        .collect::<Vec<_>>();
    names.sort_unstable();
    names
}

#[tokio::test]
async fn seeding_is_idempotent() {
    let store = seeded_store().await;
    let before = store.collection(ACTIVITIES).find(&Query::new()).await.unwrap();

    seed::init_database(&store).await.unwrap();

    let after = store.collection(ACTIVITIES).find(&Query::new()).await.unwrap();
    assert_eq!(
        store
            .collection(ACTIVITIES)
            .count_documents(&Query::new())
            .await
            .unwrap(),
        13
    );
    assert_eq!(
        store
            .collection(TEACHERS)
            .count_documents(&Query::new())
            .await
            .unwrap(),
        3
    );
    assert_eq!(names(&before), names(&after));
}

#[tokio::test]
async fn seeding_never_overwrites_existing_state() {
    let store = seeded_store().await;

    let signup = Update::new().push("participants", "kai@mergington.edu");
    store
        .collection(ACTIVITIES)
        .update_one(&Query::by_id("Chess Club"), &signup)
        .await
        .unwrap();

    seed::init_database(&store).await.unwrap();

    let chess = store
        .collection(ACTIVITIES)
        .find_one_as::<Activity>("Chess Club")
        .await
        .unwrap()
        .unwrap();
    assert!(chess.participants.contains(&"kai@mergington.edu".to_string()));
}

#[tokio::test]
async fn seeded_catalog_is_readable_as_records() {
    let store = seeded_store().await;

    let chess = store
        .collection(ACTIVITIES)
        .find_one_as::<Activity>("Chess Club")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(chess.schedule_details.days, vec!["Monday", "Friday"]);
    assert_eq!(chess.schedule_details.start_time, "15:15");
    assert_eq!(chess.max_participants, 12);
    assert_eq!(
        chess.participants,
        vec!["michael@mergington.edu", "daniel@mergington.edu"]
    );

    let principal = store
        .collection(TEACHERS)
        .find_one_as::<TeacherAccount>("principal")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(principal.display_name, "Principal Martinez");
    assert_eq!(principal.password, "hashed_admin789");
    assert_eq!(principal.role, Role::Admin);
}

#[tokio::test]
async fn day_filter_selects_activities_meeting_that_day() {
    let store = seeded_store().await;

    let friday = Query::new().with(Filter::days_intersect(["Friday"]));
    let matched = store.collection(ACTIVITIES).find(&friday).await.unwrap();

    assert_eq!(
        names(&matched),
        vec!["Basketball Team", "Chess Club", "Debate Team", "Morning Fitness"]
    );

    let never = Query::new().with(Filter::days_intersect(["Holiday"]));
    assert!(store.collection(ACTIVITIES).find(&never).await.unwrap().is_empty());
}

#[tokio::test]
async fn time_window_filter_selects_contained_activities() {
    let store = seeded_store().await;

    let afternoon = Query::new()
        .with(Filter::start_time_at_least("15:00"))
        .with(Filter::end_time_at_most("17:00"));
    let matched = store.collection(ACTIVITIES).find(&afternoon).await.unwrap();

    assert_eq!(
        names(&matched),
        vec!["Art Club", "Basketball Team", "Chess Club"]
    );
}

#[tokio::test]
async fn signup_flow_pushes_and_pulls_participants() {
    let store = seeded_store().await;
    let activities = store.collection(ACTIVITIES);

    let signup = Update::new().push("participants", "kai@mergington.edu");
    let result = activities
        .update_one(&Query::by_id("Chess Club"), &signup)
        .await
        .unwrap();
    assert_eq!(result.modified_count, 1);

    let chess = activities
        .find_one_as::<Activity>("Chess Club")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(chess.participants.len(), 3);

    let withdraw = Update::new().pull("participants", "kai@mergington.edu");
    let result = activities
        .update_one(&Query::by_id("Chess Club"), &withdraw)
        .await
        .unwrap();
    assert_eq!(result.modified_count, 1);

    let chess = activities
        .find_one_as::<Activity>("Chess Club")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        chess.participants,
        vec!["michael@mergington.edu", "daniel@mergington.edu"]
    );
}

#[tokio::test]
async fn update_on_unknown_identifier_reports_zero_and_changes_nothing() {
    let store = seeded_store().await;
    let activities = store.collection(ACTIVITIES);

    let signup = Update::new().push("participants", "kai@mergington.edu");
    let result = activities
        .update_one(&Query::by_id("Knitting Circle"), &signup)
        .await
        .unwrap();

    assert_eq!(result.modified_count, 0);
    assert_eq!(
        activities.count_documents(&Query::new()).await.unwrap(),
        13
    );
}

#[tokio::test]
async fn count_is_total_size_regardless_of_predicate() {
    let store = seeded_store().await;
    let activities = store.collection(ACTIVITIES);

    let sunday = Query::new().with(Filter::days_intersect(["Sunday"]));

    assert_eq!(activities.count_documents(&Query::new()).await.unwrap(), 13);
    assert_eq!(activities.count_documents(&sunday).await.unwrap(), 13);
}

#[tokio::test]
async fn aggregate_lists_all_scheduled_days_sorted() {
    let store = seeded_store().await;

    let records = store.collection(ACTIVITIES).aggregate(&[]).await.unwrap();
    let days = records
        .iter()
        .filter_map(|record| record.get(ID_FIELD).and_then(Bson::as_str))
        .collect::<Vec<_>>();

    assert_eq!(
        days,
        vec![
            "Friday", "Monday", "Saturday", "Sunday", "Thursday", "Tuesday", "Wednesday",
        ]
    );
}

#[tokio::test]
async fn store_can_borrow_a_shared_backend() {
    let backend = MemoryStore::new();
    let store = DocumentStore::new(&backend);
    seed::init_database(&store).await.unwrap();

    let other = DocumentStore::new(&backend);
    assert_eq!(
        other
            .collection(TEACHERS)
            .count_documents(&Query::new())
            .await
            .unwrap(),
        3
    );
}
