//! Partial updates submitted through the edit form.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::column::ActorColumn;
use super::model::Actor;

/// A partial update of the editable name fields.
///
/// A field is `Some` only when it was present in the submitted form;
/// absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorPatch {
    /// New first name, if submitted.
    pub first_name: Option<String>,
    /// New last name, if submitted.
    pub last_name: Option<String>,
}

impl ActorPatch {
    /// Build a patch from submitted form fields, keeping only the
    /// editable columns. Unknown fields are ignored.
    pub fn from_form(form: &HashMap<String, String>) -> Self {
        Self {
            first_name: form.get(ActorColumn::FirstName.as_str()).cloned(),
            last_name: form.get(ActorColumn::LastName.as_str()).cloned(),
        }
    }

    /// True when no recognized field was submitted.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none()
    }

    /// Names of the columns this patch touches.
    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::with_capacity(2);
        if self.first_name.is_some() {
            fields.push(ActorColumn::FirstName.as_str());
        }
        if self.last_name.is_some() {
            fields.push(ActorColumn::LastName.as_str());
        }
        fields
    }

    /// Apply the submitted fields to an in-memory row.
    pub fn apply_to(&self, actor: &mut Actor) {
        if let Some(first_name) = &self.first_name {
            actor.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            actor.last_name = last_name.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::id::ActorId;
    use chrono::NaiveDateTime;

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_only_editable_fields_are_kept() {
        let patch = ActorPatch::from_form(&form(&[
            ("first_name", "NICK"),
            ("actor_id", "999"),
            ("last_update", "yesterday"),
        ]));
        assert_eq!(patch.first_name.as_deref(), Some("NICK"));
        assert_eq!(patch.last_name, None);
        assert_eq!(patch.fields(), vec!["first_name"]);
    }

    #[test]
    fn test_no_recognized_fields_is_empty() {
        assert!(ActorPatch::from_form(&form(&[("nickname", "x")])).is_empty());
        assert!(ActorPatch::from_form(&HashMap::new()).is_empty());
    }

    #[test]
    fn test_empty_string_is_still_submitted() {
        let patch = ActorPatch::from_form(&form(&[("last_name", "")]));
        assert!(!patch.is_empty());
        assert_eq!(patch.last_name.as_deref(), Some(""));
    }

    #[test]
    fn test_apply_leaves_unsubmitted_fields() {
        let mut actor = Actor {
            actor_id: ActorId(2),
            first_name: "NICK".to_string(),
            last_name: "WAHLBERG".to_string(),
            last_update: NaiveDateTime::default(),
        };
        ActorPatch {
            first_name: None,
            last_name: Some("STALLONE".to_string()),
        }
        .apply_to(&mut actor);
        assert_eq!(actor.first_name, "NICK");
        assert_eq!(actor.last_name, "STALLONE");
    }
}
