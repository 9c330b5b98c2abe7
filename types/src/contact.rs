//! Contact card records.
//!
//! A [`ContactRecord`] is the card one person hands another at an event:
//! who they are, how to reach them, and where the two met. Required fields
//! are non-empty by construction; everything else is an explicit `Option`.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Identifier ───────────────────────────────────────────────

/// Unique identifier for a contact within one directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(u32);

impl ContactId {
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Record ───────────────────────────────────────────────────

/// A required contact field was blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("contact field `{field}` must not be empty")]
pub struct ContactRecordError {
    field: &'static str,
}

impl ContactRecordError {
    /// Name of the field that was rejected.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }
}

/// Input for building a contact record, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInput {
    pub id: ContactId,
    pub name: String,
    pub title: String,
    pub company: String,
    pub avatar: String,
    pub phone: String,
    pub email: String,
    pub tagline: String,
    pub headline: String,
    pub bio: String,
    pub event: String,
    pub venue: String,
    #[serde(default)]
    pub localized_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub profile_url: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub interests: Option<Vec<String>>,
    #[serde(default)]
    pub hobbies: Option<Vec<String>>,
}

/// A single exchanged contact card.
///
/// Invariant: every required field is non-empty after trimming, and present
/// optional fields are non-blank (blank input is stored as absent). Enforced
/// via [`ContactRecord::new`] and `#[serde(try_from)]` at the
/// deserialization boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContactInput")]
pub struct ContactRecord {
    id: ContactId,
    name: String,
    title: String,
    company: String,
    avatar: String,
    phone: String,
    email: String,
    tagline: String,
    headline: String,
    bio: String,
    event: String,
    venue: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    localized_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    profile_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    interests: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hobbies: Option<Vec<String>>,
}

impl TryFrom<ContactInput> for ContactRecord {
    type Error = ContactRecordError;

    fn try_from(input: ContactInput) -> Result<Self, Self::Error> {
        Self::new(input)
    }
}

fn required(field: &'static str, value: String) -> Result<String, ContactRecordError> {
    if value.trim().is_empty() {
        Err(ContactRecordError { field })
    } else {
        Ok(value)
    }
}

fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn tags(values: Option<Vec<String>>) -> Option<Vec<String>> {
    let kept: Vec<String> = values?
        .into_iter()
        .filter(|tag| !tag.trim().is_empty())
        .collect();
    if kept.is_empty() { None } else { Some(kept) }
}

impl ContactRecord {
    pub fn new(input: ContactInput) -> Result<Self, ContactRecordError> {
        Ok(Self {
            id: input.id,
            name: required("name", input.name)?,
            title: required("title", input.title)?,
            company: required("company", input.company)?,
            avatar: required("avatar", input.avatar)?,
            phone: required("phone", input.phone)?,
            email: required("email", input.email)?,
            tagline: required("tagline", input.tagline)?,
            headline: required("headline", input.headline)?,
            bio: required("bio", input.bio)?,
            event: required("event", input.event)?,
            venue: required("venue", input.venue)?,
            localized_name: optional(input.localized_name),
            address: optional(input.address),
            profile_url: optional(input.profile_url),
            website: optional(input.website),
            interests: tags(input.interests),
            hobbies: tags(input.hobbies),
        })
    }

    #[must_use]
    pub fn id(&self) -> ContactId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn company(&self) -> &str {
        &self.company
    }

    /// Single glyph shown in place of a profile photo.
    #[must_use]
    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn tagline(&self) -> &str {
        &self.tagline
    }

    #[must_use]
    pub fn headline(&self) -> &str {
        &self.headline
    }

    #[must_use]
    pub fn bio(&self) -> &str {
        &self.bio
    }

    /// Event where the contact was exchanged.
    #[must_use]
    pub fn event(&self) -> &str {
        &self.event
    }

    /// Venue of the event where the contact was exchanged.
    #[must_use]
    pub fn venue(&self) -> &str {
        &self.venue
    }

    /// Name in the contact's own script, if it differs from `name`.
    #[must_use]
    pub fn localized_name(&self) -> Option<&str> {
        self.localized_name.as_deref()
    }

    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Professional-network profile URL.
    #[must_use]
    pub fn profile_url(&self) -> Option<&str> {
        self.profile_url.as_deref()
    }

    #[must_use]
    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }

    /// Networking-interest tags.
    #[must_use]
    pub fn interests(&self) -> Option<&[String]> {
        self.interests.as_deref()
    }

    /// Hobby tags.
    #[must_use]
    pub fn hobbies(&self) -> Option<&[String]> {
        self.hobbies.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ContactInput {
        ContactInput {
            id: ContactId::new(1),
            name: "Ada Byron".to_owned(),
            title: "Analyst".to_owned(),
            company: "Analytical Engines Ltd".to_owned(),
            avatar: "A".to_owned(),
            phone: "+44 20 7946 0011".to_owned(),
            email: "ada@analytical.example".to_owned(),
            tagline: "Numbers tell stories".to_owned(),
            headline: "First among programmers".to_owned(),
            bio: "Writes programs for machines that do not exist yet.".to_owned(),
            event: "Difference Engine Expo".to_owned(),
            venue: "Kensington Hall".to_owned(),
            localized_name: None,
            address: None,
            profile_url: None,
            website: None,
            interests: None,
            hobbies: None,
        }
    }

    #[test]
    fn record_from_valid_input() {
        let record = ContactRecord::new(input()).unwrap();
        assert_eq!(record.id(), ContactId::new(1));
        assert_eq!(record.name(), "Ada Byron");
        assert_eq!(record.venue(), "Kensington Hall");
        assert_eq!(record.localized_name(), None);
        assert_eq!(record.interests(), None);
    }

    #[test]
    fn rejects_empty_required_field() {
        let mut bad = input();
        bad.email = String::new();
        let err = ContactRecord::new(bad).unwrap_err();
        assert_eq!(err.field(), "email");
    }

    #[test]
    fn rejects_whitespace_required_field() {
        let mut bad = input();
        bad.phone = "   ".to_owned();
        let err = ContactRecord::new(bad).unwrap_err();
        assert_eq!(err.field(), "phone");
    }

    #[test]
    fn blank_optional_fields_become_absent() {
        let mut raw = input();
        raw.localized_name = Some("   ".to_owned());
        raw.website = Some(String::new());
        raw.address = Some("12 Crescent Row, London".to_owned());
        let record = ContactRecord::new(raw).unwrap();
        assert_eq!(record.localized_name(), None);
        assert_eq!(record.website(), None);
        assert_eq!(record.address(), Some("12 Crescent Row, London"));
    }

    #[test]
    fn blank_tags_are_dropped() {
        let mut raw = input();
        raw.interests = Some(vec![String::new(), "  ".to_owned()]);
        raw.hobbies = Some(vec!["chess".to_owned(), String::new()]);
        let record = ContactRecord::new(raw).unwrap();
        assert_eq!(record.interests(), None);
        assert_eq!(record.hobbies(), Some(&["chess".to_owned()][..]));
    }

    #[test]
    fn deserialize_validates_on_load() {
        let valid = serde_json::json!({
            "id": 3,
            "name": "Grace Hopper",
            "title": "Rear Admiral",
            "company": "US Navy",
            "avatar": "G",
            "phone": "+1 202 555 0100",
            "email": "grace@navy.example",
            "tagline": "It is easier to ask forgiveness",
            "headline": "Compiler pioneer",
            "bio": "Invented the compiler and the nanosecond prop.",
            "event": "UNIVAC Symposium",
            "venue": "Philadelphia Convention Hall",
            "website": "https://hopper.example"
        });
        let record: ContactRecord = serde_json::from_value(valid).unwrap();
        assert_eq!(record.id(), ContactId::new(3));
        assert_eq!(record.website(), Some("https://hopper.example"));
        assert_eq!(record.address(), None);

        let invalid = serde_json::json!({
            "id": 4,
            "name": "",
            "title": "Engineer",
            "company": "Somewhere",
            "avatar": "S",
            "phone": "555",
            "email": "s@example.com",
            "tagline": "t",
            "headline": "h",
            "bio": "b",
            "event": "e",
            "venue": "v"
        });
        assert!(serde_json::from_value::<ContactRecord>(invalid).is_err());
    }

    #[test]
    fn serialize_skips_absent_optionals() {
        let record = ContactRecord::new(input()).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("localized_name"));
        assert!(!object.contains_key("hobbies"));
        assert_eq!(object["venue"], "Kensington Hall");
    }
}
