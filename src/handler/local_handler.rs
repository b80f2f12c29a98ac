use crate::model::{
    Activity, ActivityCatalog, ActivityDetails, ApiError, Confirmation, RosterApi,
};
use async_trait::async_trait;
use std::cell::RefCell;

pub const ACTIVITY_NOT_FOUND: &str = "Activity not found";
pub const ALREADY_SIGNED_UP: &str = "Student is already signed up";
pub const NOT_SIGNED_UP: &str = "Student is not signed up for this activity";

/// Serves the roster from memory with the same answers the real service
/// gives. Used for offline previews.
#[derive(Debug, Default)]
pub struct LocalRosterApi {
    catalog: RefCell<ActivityCatalog>,
}

impl LocalRosterApi {
    pub fn new(catalog: ActivityCatalog) -> Self {
        Self {
            catalog: RefCell::new(catalog),
        }
    }

    /// The school's extracurricular activities.
    pub fn seeded() -> Self {
        Self::new(seed_catalog())
    }

    pub fn snapshot(&self) -> ActivityCatalog {
        self.catalog.borrow().clone()
    }
}

#[async_trait(?Send)]
impl RosterApi for LocalRosterApi {
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ApiError> {
        Ok(self.snapshot())
    }

    async fn sign_up(&self, activity: &str, email: &str) -> Result<Confirmation, ApiError> {
        let mut catalog = self.catalog.borrow_mut();
        let entry = catalog
            .find_mut(activity)
            .ok_or_else(|| ApiError::not_found(ACTIVITY_NOT_FOUND))?;

        if entry.has_participant(email) {
            return Err(ApiError::bad_request(ALREADY_SIGNED_UP));
        }
        entry.details.participants.push(email.to_string());

        Ok(Confirmation {
            message: format!("Signed up {email} for {activity}"),
        })
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<Confirmation, ApiError> {
        let mut catalog = self.catalog.borrow_mut();
        let entry = catalog
            .find_mut(activity)
            .ok_or_else(|| ApiError::not_found(ACTIVITY_NOT_FOUND))?;

        let position = entry
            .details
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| ApiError::bad_request(NOT_SIGNED_UP))?;
        entry.details.participants.remove(position);

        Ok(Confirmation {
            message: format!("Unregistered {email} from {activity}"),
        })
    }
}

fn activity(
    name: &str,
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: [&str; 2],
) -> Activity {
    Activity::new(
        name,
        ActivityDetails {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        },
    )
}

fn seed_catalog() -> ActivityCatalog {
    vec![
        activity(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            ["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        activity(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            ["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        activity(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            ["john@mergington.edu", "olivia@mergington.edu"],
        ),
        activity(
            "Soccer Team",
            "Join the school soccer team and compete in local leagues",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            18,
            ["lucas@mergington.edu", "mia@mergington.edu"],
        ),
        activity(
            "Basketball Club",
            "Practice basketball skills and play friendly matches",
            "Wednesdays, 3:30 PM - 5:00 PM",
            15,
            ["liam@mergington.edu", "ava@mergington.edu"],
        ),
        activity(
            "Art Club",
            "Explore painting, drawing, and other visual arts",
            "Mondays, 3:30 PM - 5:00 PM",
            16,
            ["isabella@mergington.edu", "noah@mergington.edu"],
        ),
        activity(
            "Drama Society",
            "Participate in theater productions and acting workshops",
            "Thursdays, 4:00 PM - 5:30 PM",
            20,
            ["charlotte@mergington.edu", "jackson@mergington.edu"],
        ),
        activity(
            "Mathletes",
            "Compete in math competitions and solve challenging problems",
            "Fridays, 2:30 PM - 3:30 PM",
            10,
            ["amelia@mergington.edu", "benjamin@mergington.edu"],
        ),
        activity(
            "Science Club",
            "Conduct experiments and explore scientific concepts",
            "Wednesdays, 4:00 PM - 5:00 PM",
            14,
            ["elijah@mergington.edu", "harper@mergington.edu"],
        ),
    ]
    .into_iter()
    .collect()
}
