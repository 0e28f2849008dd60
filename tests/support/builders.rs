// tests/support/builders.rs
use railway_core::{Maybe, Outcome, Request, ValueOutcome};
use uuid::Uuid;

pub const NAME_REQUIRED_CODE: &str = "Thing.NameRequired";
pub const NAME_REQUIRED_MESSAGE: &str = "Name must not be empty.";

#[derive(Debug, Clone)]
pub struct CreateThing {
    pub name: String,
    pub size: i32,
}

impl Request for CreateThing {
    type Response = ValueOutcome<Uuid>;
}

#[derive(Debug, Clone)]
pub struct ArchiveThing {
    pub id: Uuid,
}

impl Request for ArchiveThing {
    type Response = Outcome;
}

#[derive(Debug, Clone)]
pub struct FindThing {
    pub id: Uuid,
}

impl Request for FindThing {
    type Response = Maybe<String>;
}

pub struct CreateThingBuilder {
    name: String,
    size: i32,
}

impl CreateThingBuilder {
    pub fn new() -> Self {
        Self {
            name: "lamp".into(),
            size: 1,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub const fn size(mut self, size: i32) -> Self {
        self.size = size;
        self
    }

    pub fn build(self) -> CreateThing {
        CreateThing {
            name: self.name,
            size: self.size,
        }
    }
}
