use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GetTransactionsFilterDto {
    pub page: Option<i64>,
    #[serde(rename = "perPage")]
    pub per_page: Option<i64>,
    pub search: Option<String>,
}

impl GetTransactionsFilterDto {
    pub fn search_price(&self) -> Option<f64> {
        match &self.search {
            Some(search) => match search.trim().parse::<f64>() {
                Ok(price) => Some(price),
                Err(_) => None,
            },
            None => None,
        }
    }

    pub fn to_sql(&self) -> String {
        let mut sql = "SELECT * FROM transactions".to_string();

        let mut page: i64 = 1;
        let mut per_page: i64 = 10;

        // WHERE CLAUSES
        if let Some(search) = &self.search {
            if search.len() > 0 {
                sql.push_str(" WHERE (title ILIKE $1 OR description ILIKE $1");

                if self.search_price().is_some() {
                    sql.push_str(" OR price = $2");
                }

                sql.push_str(")");
            }
        }

        // PAGINATION
        if let Some(value) = self.page {
            page = value;
        }

        if let Some(value) = self.per_page {
            per_page = value;
        }

        sql.push_str(" ORDER BY id");
        sql.push_str(&[" LIMIT ", &per_page.to_string()].concat());
        sql.push_str(&[" OFFSET ", &((page - 1) * per_page).to_string()].concat());

        tracing::debug!(%sql);

        sql
    }
}
