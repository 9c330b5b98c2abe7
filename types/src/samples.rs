//! Built-in demo contacts.
//!
//! Every fresh install ships with the same five contacts so list and detail
//! views have something to render before the user exchanges a real card.
//! The data is authored here and validated through the normal construction
//! path on first access.

use std::sync::OnceLock;

use crate::contact::{ContactId, ContactInput, ContactRecord};
use crate::directory::ContactDirectory;

static SAMPLE_CONTACTS: OnceLock<ContactDirectory> = OnceLock::new();

/// Get the built-in demo directory.
pub fn sample_contacts() -> &'static ContactDirectory {
    SAMPLE_CONTACTS.get_or_init(build)
}

fn contact(input: ContactInput) -> ContactRecord {
    ContactRecord::new(input).expect("sample contacts are authored with every required field")
}

fn build() -> ContactDirectory {
    let records = vec![
        contact(ContactInput {
            id: ContactId::new(1),
            name: "Maya Chen".to_owned(),
            title: "Product Design Lead".to_owned(),
            company: "Lumen Labs".to_owned(),
            avatar: "🎨".to_owned(),
            phone: "+1 415 555 0142".to_owned(),
            email: "maya.chen@lumenlabs.io".to_owned(),
            tagline: "Design is how it works".to_owned(),
            headline: "Design systems that scale past the first redesign".to_owned(),
            bio: "Leads the design platform group at Lumen Labs. Previously built the \
                  component library behind three product launches."
                .to_owned(),
            event: "Design Systems Summit".to_owned(),
            venue: "Moscone West".to_owned(),
            localized_name: None,
            address: None,
            profile_url: Some("https://linkedin.com/in/mayachen".to_owned()),
            website: Some("https://mayachen.design".to_owned()),
            interests: Some(vec![
                "design systems".to_owned(),
                "accessibility".to_owned(),
                "design tokens".to_owned(),
            ]),
            hobbies: Some(vec!["bouldering".to_owned(), "film photography".to_owned()]),
        }),
        contact(ContactInput {
            id: ContactId::new(2),
            name: "Diego Alvarez".to_owned(),
            title: "Staff Backend Engineer".to_owned(),
            company: "Riverbed Analytics".to_owned(),
            avatar: "🛰️".to_owned(),
            phone: "+1 512 555 0183".to_owned(),
            email: "diego@riverbed.io".to_owned(),
            tagline: "Ship boring software".to_owned(),
            headline: "Keeps the query planner fast while the data triples".to_owned(),
            bio: "Works on the ingestion pipeline at Riverbed Analytics. Cares about \
                  tail latencies and honest postmortems."
                .to_owned(),
            event: "Data Council".to_owned(),
            venue: "Palmer Events Center".to_owned(),
            localized_name: None,
            address: Some("2200 Barton Springs Rd, Austin, TX".to_owned()),
            profile_url: None,
            website: None,
            interests: Some(vec![
                "stream processing".to_owned(),
                "observability".to_owned(),
            ]),
            hobbies: None,
        }),
        contact(ContactInput {
            id: ContactId::new(3),
            name: "Yuki Tanaka".to_owned(),
            title: "Founder & CEO".to_owned(),
            company: "Hanami Robotics".to_owned(),
            avatar: "🤖".to_owned(),
            phone: "+81 3 5555 0167".to_owned(),
            email: "yuki@hanami-robotics.jp".to_owned(),
            tagline: "Robots should be gentle".to_owned(),
            headline: "Building harvest robots farmers actually trust".to_owned(),
            bio: "Founded Hanami Robotics after a decade in industrial automation. Now \
                  teaches machines to pick strawberries without bruising them."
                .to_owned(),
            event: "Robotics World Tokyo".to_owned(),
            venue: "Tokyo Big Sight".to_owned(),
            localized_name: Some("田中 由紀".to_owned()),
            address: Some("1-2-8 Ariake, Koto City, Tokyo".to_owned()),
            profile_url: None,
            website: Some("https://hanami-robotics.jp".to_owned()),
            interests: None,
            hobbies: Some(vec!["calligraphy".to_owned(), "trail running".to_owned()]),
        }),
        contact(ContactInput {
            id: ContactId::new(4),
            name: "Amara Okafor".to_owned(),
            title: "Developer Advocate".to_owned(),
            company: "Northwind Cloud".to_owned(),
            avatar: "📣".to_owned(),
            phone: "+44 20 7946 0121".to_owned(),
            email: "amara.okafor@northwind.dev".to_owned(),
            tagline: "Docs are the product".to_owned(),
            headline: "Turns angry GitHub issues into roadmap items".to_owned(),
            bio: "Runs developer relations for Northwind's container platform. Speaks, \
                  writes, and files the bugs nobody else wants to reproduce."
                .to_owned(),
            event: "CloudNative Summit".to_owned(),
            venue: "ExCeL London".to_owned(),
            localized_name: None,
            address: None,
            profile_url: Some("https://linkedin.com/in/amaraokafor".to_owned()),
            website: None,
            interests: Some(vec![
                "developer experience".to_owned(),
                "technical writing".to_owned(),
                "wasm".to_owned(),
            ]),
            hobbies: None,
        }),
        contact(ContactInput {
            id: ContactId::new(5),
            name: "Elena Petrova".to_owned(),
            title: "Venture Partner".to_owned(),
            company: "Meridian Ventures".to_owned(),
            avatar: "📈".to_owned(),
            phone: "+1 646 555 0195".to_owned(),
            email: "elena@meridian.vc".to_owned(),
            tagline: "Back people, not decks".to_owned(),
            headline: "Leads seed rounds in developer tools and infrastructure".to_owned(),
            bio: "Spent eight years as an infrastructure engineer before moving to \
                  venture. Still reads the pull requests of portfolio companies."
                .to_owned(),
            event: "Founders Forum".to_owned(),
            venue: "Spring Studios".to_owned(),
            localized_name: None,
            address: None,
            profile_url: Some("https://linkedin.com/in/elenapetrova".to_owned()),
            website: None,
            interests: Some(vec!["devtools".to_owned(), "open source".to_owned()]),
            hobbies: Some(vec!["chess".to_owned(), "sailing".to_owned()]),
        }),
    ];

    ContactDirectory::new(records).expect("sample contact ids are unique")
}
