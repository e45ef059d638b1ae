use crate::{
    api::{ApiError, Visitor, VisitorPayload},
    utils::photo::normalize_upload,
};

pub const SURNAME_REQUIRED_MESSAGE: &str = "Sobrenome não pode ser vazio.";
pub const REGISTERED_MESSAGE: &str = "Visitante cadastrado com sucesso!";
pub const UPDATED_MESSAGE: &str = "Visitante atualizado com sucesso!";

/// Case-insensitive match on the visitor's full name.
pub fn filter_visitors(visitors: &[Visitor], query: &str) -> Vec<Visitor> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return visitors.to_vec();
    }
    visitors
        .iter()
        .filter(|visitor| visitor.full_name().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitorFormState {
    pub name: String,
    pub sur_name: String,
    pub rg: String,
    pub phone: String,
    pub photo: Option<String>,
}

impl VisitorFormState {
    pub fn from_visitor(visitor: &Visitor) -> Self {
        Self {
            name: visitor.name.clone(),
            sur_name: visitor.sur_name.clone(),
            rg: visitor.rg.clone(),
            phone: visitor.phone.clone(),
            photo: visitor.photo.clone(),
        }
    }

    pub fn to_request(&self) -> Result<VisitorPayload, ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::validation("Nome não pode ser vazio."));
        }
        if self.sur_name.trim().is_empty() {
            return Err(ApiError::validation(SURNAME_REQUIRED_MESSAGE));
        }
        let photo = match self.photo.as_deref() {
            Some(raw) => normalize_upload(raw).map_err(ApiError::validation)?,
            None => None,
        };
        Ok(VisitorPayload {
            name: self.name.trim().to_string(),
            sur_name: self.sur_name.trim().to_string(),
            rg: self.rg.trim().to_string(),
            phone: self.phone.trim().to_string(),
            photo,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::visitor;

    #[test]
    fn filter_matches_name_and_surname_case_insensitively() {
        let visitors = vec![visitor(1, "Maria", "Oliveira"), visitor(2, "João", "Lima")];
        assert_eq!(filter_visitors(&visitors, "").len(), 2);
        assert_eq!(filter_visitors(&visitors, "OLIV")[0].id, 1);
        assert_eq!(filter_visitors(&visitors, "joão lima")[0].id, 2);
        assert!(filter_visitors(&visitors, "RG1").is_empty());
    }

    #[test]
    fn blank_surname_is_rejected() {
        let state = VisitorFormState {
            name: "Maria".into(),
            sur_name: "   ".into(),
            ..Default::default()
        };
        let err = state.to_request().unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(err.error, SURNAME_REQUIRED_MESSAGE);
    }

    #[test]
    fn photo_is_normalized_to_a_data_url() {
        let state = VisitorFormState {
            name: "Maria".into(),
            sur_name: "Oliveira".into(),
            rg: " 123 ".into(),
            phone: "7999".into(),
            photo: Some("aGVsbG8=".into()),
        };
        let payload = state.to_request().unwrap();
        assert_eq!(payload.rg, "123");
        assert_eq!(
            payload.photo.as_deref(),
            Some("data:image/jpeg;base64,aGVsbG8=")
        );

        let broken = VisitorFormState {
            photo: Some("data:image/jpeg;base64,@@".into()),
            ..state
        };
        assert_eq!(broken.to_request().unwrap_err().code, "VALIDATION_ERROR");
    }

    #[test]
    fn from_visitor_keeps_existing_photo() {
        let mut existing = visitor(3, "Ana", "Souza");
        existing.photo = Some("data:image/png;base64,AAAA".into());
        let state = VisitorFormState::from_visitor(&existing);
        assert_eq!(state.photo, existing.photo);
        assert_eq!(state.to_request().unwrap().photo, existing.photo);
    }
}
