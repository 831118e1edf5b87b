use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Known contributors, looked up by e-mail.
#[derive(Debug, Clone, Default)]
pub struct ContributorRegistry {
    contributors: Vec<Contributor>,
}

impl ContributorRegistry {
    pub fn new(contributors: Vec<Contributor>) -> Self {
        Self { contributors }
    }

    /// Case-insensitive, surrounding whitespace ignored.
    pub fn lookup(&self, email: &str) -> Option<&Contributor> {
        let wanted = email.trim().to_lowercase();
        self.contributors
            .iter()
            .find(|c| c.email.trim().to_lowercase() == wanted)
    }
}
