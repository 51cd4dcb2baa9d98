//! Fixed seed data loaded at startup

use std::collections::HashMap;

use crate::{error::AppResult, services::Services};

const BOOKS: [[(&str, &str); 3]; 4] = [
    [
        ("bookName", "A Song of Ice & Fire"),
        ("author", "George RR Martin"),
        ("publicationYear", "1998"),
    ],
    [
        ("bookName", "A Brief History of Time"),
        ("author", "Stephen Hawking"),
        ("publicationYear", "1989"),
    ],
    [
        ("bookName", "Machine Learning System Design"),
        ("author", "Chip Huyen"),
        ("publicationYear", "2022"),
    ],
    [
        ("bookName", "Economic Hit Man"),
        ("author", "XYZ"),
        ("publicationYear", "2005"),
    ],
];

const MEMBERS: [[(&str, &str); 4]; 3] = [
    [
        ("firstName", "Irfan"),
        ("lastName", "Danish"),
        ("age", "26"),
        ("address", "Piplan, Mianwali"),
    ],
    [
        ("firstName", "Talha"),
        ("lastName", "Zaheer"),
        ("age", "26"),
        ("address", "DG Khan"),
    ],
    [
        ("firstName", "Hammad"),
        ("lastName", "Munir"),
        ("age", "27"),
        ("address", "Lahore"),
    ],
];

fn attributes(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Register the sample books and members through the attribute-map path
pub fn load(services: &mut Services) -> AppResult<()> {
    for book in &BOOKS {
        services
            .catalog()
            .register_book_from_attributes(&attributes(book))?;
    }
    for member in &MEMBERS {
        services
            .members()
            .register_member_from_attributes(&attributes(member))?;
    }
    tracing::info!(
        "Seed data loaded: {} books, {} members",
        BOOKS.len(),
        MEMBERS.len()
    );
    Ok(())
}
