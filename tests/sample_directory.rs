//! Fixture guarantees for the built-in sample contacts.

use std::collections::HashSet;

use imprint_types::{ContactDirectory, ContactRecord, sample_contacts};

#[test]
fn ships_exactly_five_contacts() {
    assert_eq!(sample_contacts().len(), 5);
}

#[test]
fn ids_are_one_through_five_in_authored_order() {
    let ids: Vec<u32> = sample_contacts()
        .records()
        .iter()
        .map(|record| record.id().value())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    let unique: HashSet<u32> = ids.into_iter().collect();
    assert_eq!(unique.len(), 5);
}

#[test]
fn required_fields_are_non_empty_on_every_record() {
    for record in sample_contacts().records() {
        let required: [(&str, &str); 11] = [
            ("name", record.name()),
            ("title", record.title()),
            ("company", record.company()),
            ("avatar", record.avatar()),
            ("phone", record.phone()),
            ("email", record.email()),
            ("tagline", record.tagline()),
            ("headline", record.headline()),
            ("bio", record.bio()),
            ("event", record.event()),
            ("venue", record.venue()),
        ];
        for (field, value) in required {
            assert!(
                !value.trim().is_empty(),
                "contact {} has a blank {field}",
                record.id()
            );
        }
    }
}

#[test]
fn every_optional_field_is_both_used_and_omitted() {
    let records = sample_contacts().records();

    let coverage: [(&str, Vec<bool>); 6] = [
        (
            "localized_name",
            records
                .iter()
                .map(|r| r.localized_name().is_some())
                .collect(),
        ),
        (
            "address",
            records.iter().map(|r| r.address().is_some()).collect(),
        ),
        (
            "profile_url",
            records.iter().map(|r| r.profile_url().is_some()).collect(),
        ),
        (
            "website",
            records.iter().map(|r| r.website().is_some()).collect(),
        ),
        (
            "interests",
            records.iter().map(|r| r.interests().is_some()).collect(),
        ),
        (
            "hobbies",
            records.iter().map(|r| r.hobbies().is_some()).collect(),
        ),
    ];

    for (field, present) in coverage {
        assert!(
            present.iter().any(|p| *p),
            "no sample contact exercises optional field {field}"
        );
        assert!(
            present.iter().any(|p| !p),
            "no sample contact omits optional field {field}"
        );
    }
}

#[test]
fn wire_format_skips_absent_optional_fields() {
    let records = sample_contacts().records();

    // Maya carries URLs and tags but no localized name or address.
    let maya = serde_json::to_value(&records[0]).unwrap();
    let maya = maya.as_object().unwrap();
    assert_eq!(maya["id"], 1);
    assert_eq!(maya["name"], "Maya Chen");
    assert!(maya.contains_key("profile_url"));
    assert!(maya.contains_key("interests"));
    assert!(!maya.contains_key("localized_name"));
    assert!(!maya.contains_key("address"));

    // Yuki is the inverse: localized name and address, no profile URL.
    let yuki = serde_json::to_value(&records[2]).unwrap();
    let yuki = yuki.as_object().unwrap();
    assert!(yuki.contains_key("localized_name"));
    assert!(yuki.contains_key("address"));
    assert!(!yuki.contains_key("profile_url"));
}

#[test]
fn directory_survives_a_serde_roundtrip() {
    let directory = sample_contacts();
    let json = serde_json::to_string(directory).unwrap();
    let restored: ContactDirectory = serde_json::from_str(&json).unwrap();
    assert_eq!(directory, &restored);

    let names: Vec<&str> = restored
        .records()
        .iter()
        .map(ContactRecord::name)
        .collect();
    assert_eq!(
        names,
        vec![
            "Maya Chen",
            "Diego Alvarez",
            "Yuki Tanaka",
            "Amara Okafor",
            "Elena Petrova"
        ]
    );
}
