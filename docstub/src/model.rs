//! Typed records for the two collections the application stores.

use serde::{Deserialize, Serialize};

use docstub_core::document::Record;

/// Name of the activities collection.
pub const ACTIVITIES: &str = "activities";

/// Name of the teacher accounts collection.
pub const TEACHERS: &str = "teachers";

/// Structured schedule for an activity.
///
/// `start_time` and `end_time` are zero-padded 24-hour "HH:MM" strings, so
/// lexicographic comparison is chronological comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDetails {
    /// Weekday names the activity meets on.
    pub days: Vec<String>,
    pub start_time: String,
    pub end_time: String,
}

/// An extracurricular activity students can sign up for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Activity name; doubles as the document identifier.
    #[serde(rename = "_id")]
    pub name: String,
    pub description: String,
    /// Human-readable schedule string shown to students.
    pub schedule: String,
    pub schedule_details: ScheduleDetails,
    pub max_participants: i64,
    /// Email addresses of signed-up students.
    pub participants: Vec<String>,
}

impl Record for Activity {
    fn id(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        ACTIVITIES
    }
}

/// Account role tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Teacher,
    Admin,
}

/// A teacher or administrator account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherAccount {
    /// Login name; doubles as the document identifier.
    #[serde(rename = "_id")]
    pub username: String,
    pub display_name: String,
    /// Hashed password as produced by [`crate::auth::hash_password`].
    pub password: String,
    pub role: Role,
}

impl Record for TeacherAccount {
    fn id(&self) -> &str {
        &self.username
    }

    fn collection_name() -> &'static str {
        TEACHERS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docstub_core::document::RecordExt;

    #[test]
    fn activity_roundtrips_through_document() {
        let activity = Activity {
            name: "Chess Club".to_string(),
            description: "Learn strategies and compete in chess tournaments".to_string(),
            schedule: "Mondays and Fridays, 3:15 PM - 4:45 PM".to_string(),
            schedule_details: ScheduleDetails {
                days: vec!["Monday".to_string(), "Friday".to_string()],
                start_time: "15:15".to_string(),
                end_time: "16:45".to_string(),
            },
            max_participants: 12,
            participants: vec!["michael@mergington.edu".to_string()],
        };

        let document = activity.to_document().unwrap();
        let restored = Activity::from_document(document).unwrap();

        assert_eq!(restored, activity);
    }

    #[test]
    fn teacher_account_serializes_identifier_and_role_tags() {
        let account = TeacherAccount {
            username: "principal".to_string(),
            display_name: "Principal Martinez".to_string(),
            password: "hashed_admin789".to_string(),
            role: Role::Admin,
        };

        let json = account.to_json().unwrap();

        assert_eq!(json["_id"], "principal");
        assert_eq!(json["role"], "admin");
        assert_eq!(
            TeacherAccount::from_json(json).unwrap().role,
            Role::Admin
        );
    }
}
