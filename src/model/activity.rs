use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One entry of the `GET /activities` payload, without its key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub participants: Vec<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub details: ActivityDetails,
}

impl Activity {
    pub fn new(name: impl Into<String>, details: ActivityDetails) -> Self {
        Self {
            name: name.into(),
            details,
        }
    }

    pub fn participants(&self) -> &[String] {
        &self.details.participants
    }

    /// Remaining capacity, never below zero even when the server reports
    /// more participants than places.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.details.participants.len()).unwrap_or(u32::MAX);
        self.details.max_participants.saturating_sub(taken)
    }

    pub fn availability(&self) -> String {
        match self.spots_left() {
            1 => "1 spot left".to_string(),
            n => format!("{n} spots left"),
        }
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.details.participants.iter().any(|p| p == email)
    }
}

/// The full activity collection, in the order the server listed it.
///
/// Serialized as a JSON object keyed by activity name. Entries are kept in
/// document order rather than sorted, so the rendered list and the select
/// options match the server.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActivityCatalog {
    activities: Vec<Activity>,
}

impl ActivityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the activity with the same name, keeping its position.
    pub fn insert(&mut self, activity: Activity) {
        match self.activities.iter_mut().find(|a| a.name == activity.name) {
            Some(existing) => *existing = activity,
            None => self.activities.push(activity),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.activities.iter_mut().find(|a| a.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(|a| a.name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.activities.iter()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl FromIterator<Activity> for ActivityCatalog {
    fn from_iter<I: IntoIterator<Item = Activity>>(iter: I) -> Self {
        let mut catalog = ActivityCatalog::new();
        for activity in iter {
            catalog.insert(activity);
        }
        catalog
    }
}

impl<'a> IntoIterator for &'a ActivityCatalog {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for ActivityCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.activities.len()))?;
        for activity in &self.activities {
            map.serialize_entry(&activity.name, &activity.details)?;
        }
        map.end()
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = ActivityCatalog;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of activity names to activity details")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
        let mut catalog = ActivityCatalog::new();
        while let Some((name, details)) = access.next_entry::<String, ActivityDetails>()? {
            catalog.insert(Activity { name, details });
        }
        Ok(catalog)
    }
}

impl<'de> Deserialize<'de> for ActivityCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CatalogVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(max: u32, participants: &[&str]) -> ActivityDetails {
        ActivityDetails {
            description: "d".to_string(),
            schedule: "Mon".to_string(),
            max_participants: max,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn keeps_server_order() {
        let json = r#"{
            "Zumba": {"description": "z", "schedule": "Tue", "max_participants": 5, "participants": []},
            "Archery": {"description": "a", "schedule": "Wed", "max_participants": 3, "participants": []},
            "Mathletes": {"description": "m", "schedule": "Fri", "max_participants": 10, "participants": []}
        }"#;

        let catalog: ActivityCatalog = serde_json::from_str(json).unwrap();
        let names: Vec<_> = catalog.names().collect();
        assert_eq!(names, vec!["Zumba", "Archery", "Mathletes"]);
    }

    #[test]
    fn missing_participants_is_empty() {
        let json = r#"{"Chess Club": {"description": "d", "schedule": "Mon", "max_participants": 2}}"#;
        let catalog: ActivityCatalog = serde_json::from_str(json).unwrap();
        let chess = catalog.find("Chess Club").unwrap();
        assert!(chess.participants().is_empty());
        assert_eq!(chess.spots_left(), 2);

        let json = r#"{"A": {"description": "d", "schedule": "s", "max_participants": 2, "participants": null}}"#;
        let catalog: ActivityCatalog = serde_json::from_str(json).unwrap();
        let a = catalog.find("A").unwrap();
        assert!(a.participants().is_empty());
        assert_eq!(a.availability(), "2 spots left");
    }

    #[test]
    fn spots_left_is_clamped() {
        let activity = Activity::new("Full", details(1, &["a@x.com", "b@x.com", "c@x.com"]));
        assert_eq!(activity.spots_left(), 0);
        assert_eq!(activity.availability(), "0 spots left");
    }

    #[test]
    fn availability_pluralizes() {
        assert_eq!(
            Activity::new("Chess Club", details(2, &["a@x.com"])).availability(),
            "1 spot left"
        );
        assert_eq!(
            Activity::new("Chess Club", details(12, &["a@x.com"])).availability(),
            "11 spots left"
        );
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut catalog: ActivityCatalog = vec![
            Activity::new("Chess Club", details(2, &[])),
            Activity::new("Art Club", details(4, &[])),
        ]
        .into_iter()
        .collect();

        catalog.insert(Activity::new("Chess Club", details(2, &["a@x.com"])));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.names().next(), Some("Chess Club"));
        assert!(catalog.find("Chess Club").unwrap().has_participant("a@x.com"));
    }

    #[test]
    fn serializes_as_object_in_order() {
        let catalog: ActivityCatalog = vec![
            Activity::new("B", details(1, &[])),
            Activity::new("A", details(1, &[])),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.find("\"B\"").unwrap() < json.find("\"A\"").unwrap());

        let back: ActivityCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
    }

    #[test]
    fn rejects_non_object_payload() {
        assert!(serde_json::from_str::<ActivityCatalog>("[1, 2, 3]").is_err());
    }
}
