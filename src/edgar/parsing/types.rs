use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::num::ParseFloatError;

/// A single tagged value from an XBRL instance, in document order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Fact {
    pub prefix: String,
    pub name: String,
    pub context_ref: Option<String>,
    pub unit_ref: Option<String>,
    pub decimals: Option<String>,
    pub value: String,
    /// False when the decoder could not produce a usable value
    /// (no context, `xsi:nil`, or empty text).
    pub valid: bool,
}

impl Fact {
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn qualified_name(&self) -> String {
        if self.prefix.is_empty() {
            self.name.clone()
        } else {
            format!("{}:{}", self.prefix, self.name)
        }
    }

    pub fn numeric_value(&self) -> Result<f64, ParseFloatError> {
        self.value.trim().parse::<f64>()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Period {
    Instant(String),
    Duration { start: String, end: String },
    Forever,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Dimension {
    pub axis: String,
    pub member: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Context {
    pub id: String,
    pub period: Period,
    pub dimensions: Vec<Dimension>,
}

impl Context {
    pub fn instant(&self) -> Option<&str> {
        match &self.period {
            Period::Instant(date) => Some(date.as_str()),
            _ => None,
        }
    }
}

/// Decoded instance document: facts in document order and contexts by id.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct XbrlDocument {
    /// Identifier of the source, usually the file path.
    pub name: String,
    pub facts: Vec<Fact>,
    pub contexts: HashMap<String, Context>,
}

impl XbrlDocument {
    pub fn context(&self, id: &str) -> Option<&Context> {
        self.contexts.get(id)
    }

    pub fn valid_facts(&self) -> impl Iterator<Item = &Fact> {
        self.facts.iter().filter(|fact| fact.is_valid())
    }
}
