use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq)]
pub struct Certificate {
    pub created_date: OffsetDateTime,
    /// Between 0.0 and 1.0
    pub grade: Option<f64>,
}
