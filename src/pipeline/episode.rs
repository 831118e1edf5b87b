use serde::Serialize;
use crate::analyzers::quality::QualityStatus;
use crate::{Result, ScreenerError};

pub const PROVISIONAL_TITLE: &str = "Titre provisoire";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EpisodeStatus {
    Draft,
}

/// Draft episode handed to the publication workflow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Episode {
    pub title: String,
    pub audio_url: String,
    pub duration: u64,
    pub transcript: String,
    pub keywords: Vec<String>,
    pub category: String,
    pub cover_image: String,
    pub contributor_email: String,
    pub quality_status: QualityStatus,
    pub quality_score: u8,
    pub status: EpisodeStatus,
}

/// Body sent to the publication back office.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodePayload<'a> {
    pub title: &'a str,
    pub audio_url: &'a str,
    pub duration: u64,
    pub transcript: &'a str,
    pub keywords: &'a [String],
    pub category: &'a str,
    pub cover_image: &'a str,
    pub contributor_email: &'a str,
    pub quality_status: QualityStatus,
    pub quality_score: u8,
    pub status: EpisodeStatus,
}

impl Episode {
    pub fn payload(&self) -> EpisodePayload<'_> {
        EpisodePayload {
            title: &self.title,
            audio_url: &self.audio_url,
            duration: self.duration,
            transcript: &self.transcript,
            keywords: &self.keywords,
            category: &self.category,
            cover_image: &self.cover_image,
            contributor_email: &self.contributor_email,
            quality_status: self.quality_status,
            quality_score: self.quality_score,
            status: self.status,
        }
    }
}

pub fn provisional_title(contributor_name: Option<&str>) -> String {
    match contributor_name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => format!("{} - {}", PROVISIONAL_TITLE, name),
        None => PROVISIONAL_TITLE.to_string(),
    }
}

/// Structural check only: one `@`, non-empty local part, dotted domain.
pub fn validate_email(email: &str) -> Result<String> {
    let email = email.trim();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
                && domain
                    .split('.')
                    .filter(|part| !part.is_empty())
                    .count()
                    >= 2
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };
    if valid {
        Ok(email.to_string())
    } else {
        Err(ScreenerError::Config(format!("invalid contributor e-mail: {:?}", email)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn episode() -> Episode {
        Episode {
            title: provisional_title(Some("Camille")),
            audio_url: "/work/final/final_ep.wav".into(),
            duration: 600,
            transcript: "Bonjour".into(),
            keywords: vec!["stress".into()],
            category: "Stress & émotions".into(),
            cover_image: "/covers/emotions.png".into(),
            contributor_email: "camille@example.org".into(),
            quality_status: QualityStatus::ARevoir,
            quality_score: 75,
            status: EpisodeStatus::Draft,
        }
    }

    #[test]
    fn payload_uses_back_office_field_names() {
        let json = serde_json::to_value(episode().payload()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Titre provisoire - Camille",
                "audioUrl": "/work/final/final_ep.wav",
                "duration": 600,
                "transcript": "Bonjour",
                "keywords": ["stress"],
                "category": "Stress & émotions",
                "coverImage": "/covers/emotions.png",
                "contributorEmail": "camille@example.org",
                "qualityStatus": "A_REVOIR",
                "qualityScore": 75,
                "status": "draft",
            })
        );
    }

    #[test]
    fn title_without_contributor() {
        assert_eq!(provisional_title(None), "Titre provisoire");
        assert_eq!(provisional_title(Some("  ")), "Titre provisoire");
    }

    #[test]
    fn email_shapes() {
        assert_eq!(validate_email(" a.b@example.org ").unwrap(), "a.b@example.org");
        for bad in ["", "nobody", "@example.org", "a@b", "a@@b.org", "a b@c.org", "a@.org", "a@org."] {
            assert!(validate_email(bad).is_err(), "{bad} should be rejected");
        }
    }
}
