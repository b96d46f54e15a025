//! CV snapshots shared by the integration tests.
#![allow(dead_code)]

use serde_json::{Value, json};

pub fn personal_info() -> Value {
    json!({
        "name": "Jane Doe",
        "title": "Backend Engineer",
        "email": "jane@example.com",
        "phone": "+1 555 0100",
        "location": "Oslo",
        "website": "https://www.example.com",
        "github": "https://github.com/jane",
        "linkedin": "https://linkedin.com/in/jane"
    })
}

/// Only a name; every other section empty.
pub fn minimal_cv() -> Value {
    json!({ "personalInfo": { "name": "Jane Doe" } })
}

pub fn experience_entry(index: usize) -> Value {
    json!({
        "title": format!("Engineer {}", index),
        "company": format!("Company {}", index),
        "period": "2019 - 2021",
        "is_current": false,
        "description": "Built and operated services.\nOwned the deployment pipeline."
    })
}

pub fn cv_with_experience(count: usize) -> Value {
    let entries: Vec<Value> = (0..count).map(experience_entry).collect();
    json!({
        "personalInfo": { "name": "Jane Doe" },
        "experience": entries
    })
}

pub fn cv_with_skills() -> Value {
    json!({
        "personalInfo": { "name": "Jane Doe" },
        "skills": {
            "frontend": ["Rust", "Go"],
            "tools": ["Docker"],
            "backend": ["TDD"]
        }
    })
}

pub fn cv_with_languages(count: usize) -> Value {
    let languages: Vec<Value> = (0..count)
        .map(|i| json!({ "language": format!("Language{}", i), "level": "Fluent" }))
        .collect();
    json!({
        "personalInfo": { "name": "Jane Doe" },
        "languages": languages
    })
}

pub fn featured_project(title: &str) -> Value {
    json!({
        "title": title,
        "short_description": "A small tool.",
        "technologies": ["Rust"],
        "status": "completed",
        "featured": true,
        "github_url": format!("https://github.com/jane/{}", title)
    })
}
