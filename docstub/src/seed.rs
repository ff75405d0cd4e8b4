//! Static seed catalog and the idempotent seeding entry point.
//!
//! The catalog is configuration, not computed data: a fixed set of
//! activities and teacher accounts the development deployment starts with.
//! [`init_database`] is invoked once at process startup by external
//! initialization code and only populates collections that are empty.

use tracing::debug;

use docstub_core::{
    backend::StoreBackend, error::StoreResult, query::Query, store::DocumentStore,
};

use crate::{
    auth::hash_password,
    model::{Activity, Role, ScheduleDetails, TeacherAccount},
};

pub use crate::model::{ACTIVITIES, TEACHERS};

fn activity(
    name: &str,
    description: &str,
    schedule: &str,
    days: &[&str],
    start_time: &str,
    end_time: &str,
    max_participants: i64,
    participants: &[&str],
) -> Activity {
    Activity {
        name: name.to_string(),
        description: description.to_string(),
        schedule: schedule.to_string(),
        schedule_details: ScheduleDetails {
            days: days.iter().map(|day| day.to_string()).collect(),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
        },
        max_participants,
        participants: participants.iter().map(|email| email.to_string()).collect(),
    }
}

fn teacher(username: &str, display_name: &str, password: &str, role: Role) -> TeacherAccount {
    TeacherAccount {
        username: username.to_string(),
        display_name: display_name.to_string(),
        password: hash_password(password),
        role,
    }
}

/// The fixed activity catalog the store is seeded with.
pub fn initial_activities() -> Vec<Activity> {
    vec![
        activity(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Mondays and Fridays, 3:15 PM - 4:45 PM",
            &["Monday", "Friday"],
            "15:15",
            "16:45",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        activity(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 7:00 AM - 8:00 AM",
            &["Tuesday", "Thursday"],
            "07:00",
            "08:00",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        activity(
            "Morning Fitness",
            "Early morning physical training and exercises",
            "Mondays, Wednesdays, Fridays, 6:30 AM - 7:45 AM",
            &["Monday", "Wednesday", "Friday"],
            "06:30",
            "07:45",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        activity(
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 3:30 PM - 5:30 PM",
            &["Tuesday", "Thursday"],
            "15:30",
            "17:30",
            22,
            &["liam@mergington.edu", "noah@mergington.edu"],
        ),
        activity(
            "Basketball Team",
            "Practice and compete in basketball tournaments",
            "Wednesdays and Fridays, 3:15 PM - 5:00 PM",
            &["Wednesday", "Friday"],
            "15:15",
            "17:00",
            15,
            &["ava@mergington.edu", "mia@mergington.edu"],
        ),
        activity(
            "Art Club",
            "Explore various art techniques and create masterpieces",
            "Thursdays, 3:15 PM - 5:00 PM",
            &["Thursday"],
            "15:15",
            "17:00",
            15,
            &["amelia@mergington.edu", "harper@mergington.edu"],
        ),
        activity(
            "Drama Club",
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 3:30 PM - 5:30 PM",
            &["Monday", "Wednesday"],
            "15:30",
            "17:30",
            20,
            &["ella@mergington.edu", "scarlett@mergington.edu"],
        ),
        activity(
            "Math Club",
            "Solve challenging problems and prepare for math competitions",
            "Tuesdays, 7:15 AM - 8:00 AM",
            &["Tuesday"],
            "07:15",
            "08:00",
            10,
            &["james@mergington.edu", "benjamin@mergington.edu"],
        ),
        activity(
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 3:30 PM - 5:30 PM",
            &["Friday"],
            "15:30",
            "17:30",
            12,
            &["charlotte@mergington.edu", "amelia@mergington.edu"],
        ),
        activity(
            "Weekend Robotics Workshop",
            "Build and program robots in our state-of-the-art workshop",
            "Saturdays, 10:00 AM - 2:00 PM",
            &["Saturday"],
            "10:00",
            "14:00",
            15,
            &["ethan@mergington.edu", "oliver@mergington.edu"],
        ),
        activity(
            "Science Olympiad",
            "Weekend science competition preparation for regional and state events",
            "Saturdays, 1:00 PM - 4:00 PM",
            &["Saturday"],
            "13:00",
            "16:00",
            18,
            &["isabella@mergington.edu", "lucas@mergington.edu"],
        ),
        activity(
            "Sunday Chess Tournament",
            "Weekly tournament for serious chess players with rankings",
            "Sundays, 2:00 PM - 5:00 PM",
            &["Sunday"],
            "14:00",
            "17:00",
            16,
            &["william@mergington.edu", "jacob@mergington.edu"],
        ),
        activity(
            "Manga Maniacs",
            "Dive into epic adventures, discover incredible superpowers, and experience \
             unforgettable friendships through the captivating world of Japanese manga! Join \
             fellow otaku to discuss your favorite series and discover new ones.",
            "Tuesdays, 7:00 PM - 8:00 PM",
            &["Tuesday"],
            "19:00",
            "20:00",
            15,
            &[],
        ),
    ]
}

/// The fixed teacher and administrator accounts the store is seeded with.
pub fn initial_teachers() -> Vec<TeacherAccount> {
    vec![
        teacher("mrodriguez", "Ms. Rodriguez", "art123", Role::Teacher),
        teacher("mchen", "Mr. Chen", "chess456", Role::Teacher),
        teacher("principal", "Principal Martinez", "admin789", Role::Admin),
    ]
}

/// Populates the activity and teacher collections from the static catalog.
///
/// Idempotent: each collection is seeded only while it is empty, so calling
/// this again never overwrites existing state.
///
/// # Errors
///
/// Returns a [`StoreError`](docstub_core::error::StoreError) if inserting a
/// catalog record fails.
pub async fn init_database<B: StoreBackend>(store: &DocumentStore<B>) -> StoreResult<()> {
    let activities = store.collection(ACTIVITIES);
    if activities.count_documents(&Query::new()).await? == 0 {
        let catalog = initial_activities();
        debug!(count = catalog.len(), "seeding activities");
        for activity in &catalog {
            activities.insert_record(activity).await?;
        }
    }

    let teachers = store.collection(TEACHERS);
    if teachers.count_documents(&Query::new()).await? == 0 {
        let accounts = initial_teachers();
        debug!(count = accounts.len(), "seeding teacher accounts");
        for account in &accounts {
            teachers.insert_record(account).await?;
        }
    }

    Ok(())
}
