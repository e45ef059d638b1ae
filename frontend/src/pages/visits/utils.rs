use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    api::{ApiError, NewVisit, Visit},
    utils::time::{format_visit_datetime, DisplayDateTime},
};

pub const VISITOR_NOT_FOUND: &str = "Visitante não encontrado";
pub const NO_VISITS_MESSAGE: &str = "Não existem visitas cadastradas.";
pub const NO_MATCHES_MESSAGE: &str = "Nenhuma visita encontrada com o critério de busca.";

/// A visit joined with its visitor's name and display date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitRow {
    pub visit: Visit,
    pub visitor_name: String,
    pub when: DisplayDateTime,
}

impl VisitRow {
    pub fn new(visit: Visit, names: &HashMap<i64, String>) -> Self {
        let visitor_name = names
            .get(&visit.visitor_id)
            .filter(|name| !name.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| VISITOR_NOT_FOUND.to_string());
        let when = format_visit_datetime(&visit.visit_date);
        Self {
            visit,
            visitor_name,
            when,
        }
    }

    fn matches(&self, needle: &str) -> bool {
        [
            self.visitor_name.as_str(),
            self.visit.responsible_name.as_str(),
            self.visit.sector.as_str(),
            self.visit.visit_reason.as_str(),
            self.when.date.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Visitor ids in first-seen order, each once.
pub fn unique_visitor_ids(visits: &[Visit]) -> Vec<i64> {
    let mut seen = HashSet::new();
    visits
        .iter()
        .map(|visit| visit.visitor_id)
        .filter(|id| seen.insert(*id))
        .collect()
}

pub fn build_rows(visits: Vec<Visit>, names: &HashMap<i64, String>) -> Vec<VisitRow> {
    visits
        .into_iter()
        .map(|visit| VisitRow::new(visit, names))
        .collect()
}

pub fn filter_visits(rows: &[VisitRow], query: &str) -> Vec<VisitRow> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| row.matches(&needle))
        .cloned()
        .collect()
}

pub fn empty_message(total: usize, shown: usize) -> Option<&'static str> {
    if total == 0 {
        Some(NO_VISITS_MESSAGE)
    } else if shown == 0 {
        Some(NO_MATCHES_MESSAGE)
    } else {
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitFormState {
    pub sector: String,
    pub responsible_name: String,
    pub visit_reason: String,
}

fn check_length(errors: &mut Vec<String>, value: &str, label: &str, min: usize, max: usize) {
    let len = value.trim().chars().count();
    if len < min || len > max {
        errors.push(format!(
            "{} deve ter entre {} e {} caracteres.",
            label, min, max
        ));
    }
}

impl VisitFormState {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.responsible_name.trim().is_empty() {
            return Err(ApiError::validation("Informe o nome do responsável"));
        }
        let mut errors = Vec::new();
        check_length(&mut errors, &self.sector, "Setor", 2, 50);
        check_length(&mut errors, &self.responsible_name, "Responsável", 2, 100);
        check_length(&mut errors, &self.visit_reason, "Motivo da visita", 2, 100);
        match errors.len() {
            0 => Ok(()),
            1 => Err(ApiError::validation(errors.remove(0))),
            _ => Err(ApiError::validation("Verifique os campos da visita.")
                .with_details(json!({ "errors": errors }))),
        }
    }

    pub fn to_request(&self, visitor_id: i64, visit_date: String) -> Result<NewVisit, ApiError> {
        self.validate()?;
        Ok(NewVisit {
            visit_reason: self.visit_reason.trim().to_string(),
            sector: self.sector.trim().to_string(),
            visit_date,
            visitor_id,
            responsible_name: self.responsible_name.trim().to_string(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::visit;

    fn names() -> HashMap<i64, String> {
        HashMap::from([(7, "Maria Oliveira".to_string())])
    }

    #[test]
    fn rows_survive_resource_serialization() {
        let rows = build_rows(vec![visit(1, 7, "2025-03-01T17:05:00Z")], &names());
        let encoded = serde_json::to_string(&rows).expect("rows encode");
        let decoded: Vec<VisitRow> = serde_json::from_str(&encoded).expect("rows decode");
        assert_eq!(decoded, rows);
        assert_eq!(decoded[0].visit.visitor_id, 7);
        assert_eq!(decoded[0].when.date, "01/03/2025");
    }

    #[test]
    fn unique_ids_keep_first_seen_order() {
        let visits = vec![
            visit(1, 7, "2025-03-01T14:05:00-03:00"),
            visit(2, 3, "2025-03-01T15:00:00-03:00"),
            visit(3, 7, "2025-03-02T09:00:00-03:00"),
        ];
        assert_eq!(unique_visitor_ids(&visits), vec![7, 3]);
    }

    #[test]
    fn rows_fall_back_when_visitor_is_unknown() {
        let rows = build_rows(
            vec![
                visit(1, 7, "2025-03-01T14:05:00-03:00"),
                visit(2, 3, "invalido"),
            ],
            &names(),
        );
        assert_eq!(rows[0].visitor_name, "Maria Oliveira");
        assert_eq!(rows[0].when.date, "01/03/2025");
        assert_eq!(rows[0].when.time, "14:05");
        assert_eq!(rows[1].visitor_name, VISITOR_NOT_FOUND);
        assert_eq!(rows[1].when.date, crate::utils::time::INVALID_DATE_LABEL);
    }

    #[test]
    fn filter_matches_name_sector_reason_and_date() {
        let mut other = visit(2, 3, "2025-04-10T10:00:00-03:00");
        other.sector = "Compras".into();
        other.visit_reason = "Entrega".into();
        let rows = build_rows(
            vec![visit(1, 7, "2025-03-01T14:05:00-03:00"), other],
            &names(),
        );

        assert_eq!(filter_visits(&rows, "  ").len(), 2);
        assert_eq!(filter_visits(&rows, "MARIA")[0].visit.id, 1);
        assert_eq!(filter_visits(&rows, "compras")[0].visit.id, 2);
        assert_eq!(filter_visits(&rows, "entrega")[0].visit.id, 2);
        assert_eq!(filter_visits(&rows, "01/03")[0].visit.id, 1);
        assert_eq!(filter_visits(&rows, "carla").len(), 2);
        assert!(filter_visits(&rows, "inexistente").is_empty());
    }

    #[test]
    fn empty_message_distinguishes_no_data_from_no_matches() {
        assert_eq!(empty_message(0, 0), Some(NO_VISITS_MESSAGE));
        assert_eq!(empty_message(3, 0), Some(NO_MATCHES_MESSAGE));
        assert_eq!(empty_message(3, 1), None);
    }

    #[test]
    fn form_requires_responsible_first() {
        let state = VisitFormState {
            sector: "Financeiro".into(),
            visit_reason: "Reunião".into(),
            ..Default::default()
        };
        let err = state.validate().unwrap_err();
        assert_eq!(err.error, "Informe o nome do responsável");
    }

    #[test]
    fn form_collects_length_errors() {
        let state = VisitFormState {
            sector: "F".into(),
            responsible_name: "Carla".into(),
            visit_reason: "x".repeat(101),
        };
        let err = state.validate().unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        let details = err.details.expect("details");
        assert_eq!(details["errors"].as_array().map(Vec::len), Some(2));

        let single = VisitFormState {
            sector: "F".into(),
            responsible_name: "Carla".into(),
            visit_reason: "Reunião".into(),
        };
        assert_eq!(
            single.validate().unwrap_err().error,
            "Setor deve ter entre 2 e 50 caracteres."
        );
    }

    #[test]
    fn to_request_trims_and_attaches_visitor() {
        let state = VisitFormState {
            sector: " Financeiro ".into(),
            responsible_name: " Carla ".into(),
            visit_reason: " Reunião ".into(),
        };
        let request = state
            .to_request(7, "2025-03-01T14:05:00.000-03:00".into())
            .unwrap();
        assert_eq!(request.visitor_id, 7);
        assert_eq!(request.sector, "Financeiro");
        assert_eq!(request.responsible_name, "Carla");
        assert_eq!(request.visit_reason, "Reunião");
        assert_eq!(request.visit_date, "2025-03-01T14:05:00.000-03:00");
    }
}
