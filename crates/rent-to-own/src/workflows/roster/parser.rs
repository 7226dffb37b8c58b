use super::RosterImportError;
use crate::workflows::readiness::{RenterRecord, CREDIT_SCORE_RANGE};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::io::Read;

/// Why a single roster field was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldProblem {
    Missing,
    NotANumber(String),
    Negative(f64),
    OutOfRange { value: i64, min: i32, max: i32 },
}

impl fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldProblem::Missing => write!(f, "is required"),
            FieldProblem::NotANumber(value) => write!(f, "is not a finite number: '{value}'"),
            FieldProblem::Negative(value) => write!(f, "must not be negative, got {value}"),
            FieldProblem::OutOfRange { value, min, max } => {
                write!(f, "must be between {min} and {max}, got {value}")
            }
        }
    }
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<RenterRecord>, RosterImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut records = Vec::new();

    for result in csv_reader.records() {
        let raw = result?;
        let line = raw.position().map(|position| position.line()).unwrap_or(0);
        let row: RosterRow = raw.deserialize(Some(&headers))?;
        records.push(row.into_record(line)?);
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    email: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    phone: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    credit_score_current: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    credit_score_initial: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    payment_reliability_percent: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    income: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    savings: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    debts: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    employment_years: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    current_rent: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    max_affordable_home: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    estimated_down_payment: Option<String>,
}

impl RosterRow {
    fn into_record(self, line: u64) -> Result<RenterRecord, RosterImportError> {
        let fields = FieldReader { line };

        Ok(RenterRecord {
            name: fields.required("name", self.name)?,
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            credit_score_current: fields
                .credit_score("credit_score_current", self.credit_score_current)?,
            credit_score_initial: fields
                .credit_score("credit_score_initial", self.credit_score_initial)?,
            payment_reliability_percent: fields.non_negative(
                "payment_reliability_percent",
                self.payment_reliability_percent,
            )?,
            income: fields.number("income", self.income)?,
            savings: fields.non_negative("savings", self.savings)?,
            debts: fields.non_negative("debts", self.debts)?,
            employment_years: fields.non_negative("employment_years", self.employment_years)?,
            current_rent: fields.non_negative("current_rent", self.current_rent)?,
            max_affordable_home: fields.non_negative("max_affordable_home", self.max_affordable_home)?,
            estimated_down_payment: fields
                .non_negative("estimated_down_payment", self.estimated_down_payment)?,
        })
    }
}

struct FieldReader {
    line: u64,
}

impl FieldReader {
    fn reject(&self, field: &'static str, problem: FieldProblem) -> RosterImportError {
        RosterImportError::InvalidRow {
            line: self.line,
            field,
            problem,
        }
    }

    fn required(
        &self,
        field: &'static str,
        value: Option<String>,
    ) -> Result<String, RosterImportError> {
        value.ok_or_else(|| self.reject(field, FieldProblem::Missing))
    }

    fn credit_score(
        &self,
        field: &'static str,
        value: Option<String>,
    ) -> Result<i32, RosterImportError> {
        let raw = self.required(field, value)?;
        let parsed = raw
            .parse::<i64>()
            .map_err(|_| self.reject(field, FieldProblem::NotANumber(raw.clone())))?;

        i32::try_from(parsed)
            .ok()
            .filter(|score| CREDIT_SCORE_RANGE.contains(score))
            .ok_or_else(|| {
                self.reject(
                    field,
                    FieldProblem::OutOfRange {
                        value: parsed,
                        min: *CREDIT_SCORE_RANGE.start(),
                        max: *CREDIT_SCORE_RANGE.end(),
                    },
                )
            })
    }

    fn number(&self, field: &'static str, value: Option<String>) -> Result<f64, RosterImportError> {
        let raw = self.required(field, value)?;
        match raw.parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => Ok(parsed),
            _ => Err(self.reject(field, FieldProblem::NotANumber(raw))),
        }
    }

    fn non_negative(
        &self,
        field: &'static str,
        value: Option<String>,
    ) -> Result<f64, RosterImportError> {
        let parsed = self.number(field, value)?;
        if parsed < 0.0 {
            return Err(self.reject(field, FieldProblem::Negative(parsed)));
        }
        Ok(parsed)
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
