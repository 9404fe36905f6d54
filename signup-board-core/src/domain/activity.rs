use serde::{Deserialize, Serialize};

/// A schedulable offering with a capacity and a roster of participant emails.
///
/// Mirrors the backend wire shape exactly: the activity name is the key of the
/// surrounding catalog map, not a field of the activity itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// What the activity is about
    pub description: String,

    /// Human-readable schedule string (e.g. "Fridays, 3:30 PM - 5:00 PM")
    pub schedule: String,

    /// Capacity as reported by the server
    pub max_participants: u32,

    /// Ordered roster of participant emails
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Number of participants currently on the roster
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Remaining capacity: `max_participants - participant_count`.
    ///
    /// Can go negative when the snapshot is inconsistent; the server owns the
    /// invariant and the client renders whatever it was given.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }

    /// Capacity line as rendered on the activity card
    pub fn capacity_label(&self) -> String {
        format!(
            "{}/{} ({} spots left)",
            self.participant_count(),
            self.max_participants,
            self.spots_left()
        )
    }

    /// Check whether an email is already on the roster
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess_club(participants: &[&str]) -> Activity {
        Activity {
            description: "Learn strategies and compete in tournaments".to_string(),
            schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
            max_participants: 12,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_spots_left() {
        let activity = chess_club(&["michael@example.edu", "daniel@example.edu"]);

        assert_eq!(activity.participant_count(), 2);
        assert_eq!(activity.spots_left(), 10);
    }

    #[test]
    fn test_spots_left_goes_negative_when_overbooked() {
        let mut activity = chess_club(&[]);
        activity.max_participants = 1;
        activity.participants = vec![
            "a@example.edu".to_string(),
            "b@example.edu".to_string(),
            "c@example.edu".to_string(),
        ];

        // Not clamped: an inconsistent snapshot renders as-is
        assert_eq!(activity.spots_left(), -2);
        assert_eq!(activity.capacity_label(), "3/1 (-2 spots left)");
    }

    #[test]
    fn test_capacity_label() {
        let activity = chess_club(&["michael@example.edu", "daniel@example.edu"]);
        assert_eq!(activity.capacity_label(), "2/12 (10 spots left)");

        let mut activity = chess_club(&["a@x.edu", "b@x.edu", "c@x.edu"]);
        activity.max_participants = 10;
        assert_eq!(activity.capacity_label(), "3/10 (7 spots left)");
    }

    #[test]
    fn test_has_participant() {
        let activity = chess_club(&["michael@example.edu"]);

        assert!(activity.has_participant("michael@example.edu"));
        assert!(!activity.has_participant("daniel@example.edu"));
    }

    #[test]
    fn test_deserialize_wire_shape() {
        let json = r#"{
            "description": "Physical education and sports",
            "schedule": "Mondays, 2:00 PM - 3:00 PM",
            "max_participants": 30,
            "participants": ["john@example.edu", "olivia@example.edu"]
        }"#;

        let activity: Activity = serde_json::from_str(json).unwrap();

        assert_eq!(activity.max_participants, 30);
        assert_eq!(
            activity.participants,
            vec!["john@example.edu", "olivia@example.edu"]
        );
    }

    #[test]
    fn test_participants_default_to_empty() {
        let json = r#"{
            "description": "Brand new club",
            "schedule": "TBD",
            "max_participants": 5
        }"#;

        let activity: Activity = serde_json::from_str(json).unwrap();

        assert!(activity.participants.is_empty());
        assert_eq!(activity.spots_left(), 5);
    }

    #[test]
    fn test_roster_order_is_preserved() {
        let activity = chess_club(&["z@x.edu", "a@x.edu", "m@x.edu"]);

        // The roster renders in server order, never sorted client-side
        assert_eq!(activity.participants, vec!["z@x.edu", "a@x.edu", "m@x.edu"]);
    }
}
