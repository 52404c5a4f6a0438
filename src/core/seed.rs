use crate::core::ActivitySeed;

fn activity(
    name: &str,
    description: &str,
    schedule: &str,
    max_participants: usize,
    participants: &[&str],
) -> ActivitySeed {
    ActivitySeed {
        name: name.to_string(),
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

/// Mergington High School 預設活動清單
pub fn default_seed() -> Vec<ActivitySeed> {
    vec![
        activity(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        activity(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        activity(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        activity(
            "Basketball Team",
            "Competitive basketball training and inter-school games",
            "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
            15,
            &["james@mergington.edu"],
        ),
        activity(
            "Soccer Team",
            "Practice drills and matches against other schools",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            22,
            &["lucas@mergington.edu", "mia@mergington.edu"],
        ),
        activity(
            "Art Club",
            "Explore painting, drawing and mixed media",
            "Wednesdays, 3:30 PM - 5:00 PM",
            15,
            &["amelia@mergington.edu"],
        ),
        activity(
            "Drama Club",
            "Acting, stagecraft and the spring school play",
            "Thursdays, 3:30 PM - 5:30 PM",
            20,
            &["ella@mergington.edu", "henry@mergington.edu"],
        ),
        activity(
            "Math Club",
            "Problem solving and preparation for math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
            &["liam@mergington.edu"],
        ),
        activity(
            "Debate Team",
            "Public speaking and argumentation in regional debates",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            &["ava@mergington.edu", "noah@mergington.edu"],
        ),
    ]
}
