use chrono::{SecondsFormat, Utc};

use crate::utils::document::{FieldValue, Fields, Record};

/// Posts are read-only over HTTP; they carry title, content, author, an
/// ISO-8601 date and optionally a category.
pub type Post = Record;

#[derive(Debug, Clone)]
pub struct SeedPost {
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: String,
    pub category: Option<String>,
}

impl SeedPost {
    fn new(title: &str, content: &str, author: &str, date: &str) -> Self {
        SeedPost {
            title: title.to_string(),
            content: content.to_string(),
            author: author.to_string(),
            date: date.to_string(),
            category: None,
        }
    }

    pub fn into_fields(self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("title".into(), FieldValue::Text(self.title));
        fields.insert("content".into(), FieldValue::Text(self.content));
        fields.insert("author".into(), FieldValue::Text(self.author));
        fields.insert("date".into(), FieldValue::Text(self.date));
        if let Some(category) = self.category {
            fields.insert("category".into(), FieldValue::Text(category));
        }
        fields
    }
}

/// The community posts inserted by `seed-posts`, all dated now.
pub fn sample_posts() -> Vec<SeedPost> {
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false);

    vec![
        SeedPost::new(
            "Neighborhood BBQ this Saturday",
            "Join us for a community BBQ at the central park. Bring your favorite dish!",
            "Jane Smith",
            &now,
        ),
        SeedPost::new(
            "Yoga in the Park",
            "Free community yoga session this Sunday at 8 AM in Riverdale Park.",
            "Alex Johnson",
            &now,
        ),
        SeedPost::new(
            "Lost Dog in Downtown",
            "Please help us find our missing dog, a golden retriever named Max. Last seen near Main Street.",
            "Emily Davis",
            &now,
        ),
        SeedPost::new(
            "Looking for Lawn Mower",
            "Does anyone have a lawn mower we could borrow this weekend?",
            "Michael Brown",
            &now,
        ),
    ]
}
