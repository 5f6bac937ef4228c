//! Student profile models

use serde::{Deserialize, Serialize};

/// The signed-in student's profile (`GET /profiles/me`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_movie: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_book: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_celebrities: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hobbies: Option<String>,
}

impl Profile {
    /// Label/value pairs for fields that are present and non-empty
    pub fn present_fields(&self) -> Vec<(&'static str, String)> {
        let year = self.year.map(|y| y.to_string());
        [
            ("Name", self.name.clone()),
            ("Major", self.major.clone()),
            ("Year", year),
            ("Favorite movie", self.favorite_movie.clone()),
            ("Favorite book", self.favorite_book.clone()),
            ("Favorite celebrities", self.favorite_celebrities.clone()),
            ("Learning style", self.learning_style.clone()),
            ("Interests", self.interests.clone()),
            ("Hobbies", self.hobbies.clone()),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            value
                .filter(|v| !v.trim().is_empty())
                .map(|v| (label, v))
        })
        .collect()
    }
}

/// Partial profile update (`PUT /profiles/update`)
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_movie: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_book: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_celebrities: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.favorite_movie.is_none()
            && self.favorite_book.is_none()
            && self.favorite_celebrities.is_none()
            && self.learning_style.is_none()
            && self.interests.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_fields_skips_blank_values() {
        let profile: Profile = serde_json::from_str(
            r#"{"user_id": 1, "favorite_movie": "Arrival", "favorite_book": "", "year": 2}"#,
        )
        .unwrap();

        let fields = profile.present_fields();
        assert_eq!(
            fields,
            vec![
                ("Year", "2".to_string()),
                ("Favorite movie", "Arrival".to_string())
            ]
        );
    }

    #[test]
    fn test_profile_update_serializes_only_set_fields() {
        let update = ProfileUpdate {
            interests: Some("robotics".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"interests": "robotics"}));
        assert!(!update.is_empty());
        assert!(ProfileUpdate::default().is_empty());
    }
}
