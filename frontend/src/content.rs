use std::rc::Rc;

use log::error;
use serde::Deserialize;

static WRAPPED_JSON: &str = include_str!("../content/wrapped.json");

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Stat {
    pub label: String,
    pub value: String,
    pub sub: Option<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Trip {
    pub name: String,
    pub value: u32,
    pub rank: u8,
    pub note: String,
}

impl Trip {
    pub fn medal(&self) -> &'static str {
        match self.rank {
            1 => "🥇",
            2 => "🥈",
            _ => "🥉",
        }
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Bar {
    pub name: String,
    pub value: u32,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub src: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct Content {
    pub photos: Vec<String>,
    pub stats: Vec<Stat>,
    pub trips: Vec<Trip>,
    pub happiness: Vec<Bar>,
    pub songs: Vec<Song>,
    pub first_date_options: Vec<ChoiceOption>,
}

impl Content {
    pub fn parse(json: &str) -> Result<Content, serde_json::Error> {
        serde_json::from_str(json)
    }
}

thread_local! {
    static CONTENT: Rc<Content> = Rc::new(Content::parse(WRAPPED_JSON).unwrap_or_else(|e| {
        error!("Embedded content failed to parse: {}", e);
        Content::default()
    }));
}

/// Shared copy of the embedded page content.
pub fn content() -> Rc<Content> {
    CONTENT.with(Rc::clone)
}
