use serde::Deserialize;

use crate::transactions::util::month;

#[derive(Debug, Deserialize)]
pub struct GetMonthFilterDto {
    pub month: Option<String>,
}

impl GetMonthFilterDto {
    pub fn month_number(&self) -> Option<i32> {
        match &self.month {
            Some(month) => month::month_number(month),
            None => None,
        }
    }
}
