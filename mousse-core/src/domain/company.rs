use std::cmp::Ordering;

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub company_type: Option<String>,
    pub notes: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Country whose companies are listed ahead of all others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeCountry(String);

impl HomeCountry {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_lowercase())
    }

    pub fn matches(&self, country: Option<&str>) -> bool {
        country.is_some_and(|country| country.to_lowercase() == self.0)
    }

    /// Home country first, then country, then name.
    pub fn compare(&self, a: &Company, b: &Company) -> Ordering {
        let home_rank = |company: &Company| {
            if self.matches(company.country.as_deref()) {
                0
            } else {
                1
            }
        };

        home_rank(a)
            .cmp(&home_rank(b))
            .then_with(|| a.country.cmp(&b.country))
            .then_with(|| a.name.cmp(&b.name))
    }

    pub fn sort(&self, companies: &mut [Company]) {
        companies.sort_by(|a, b| self.compare(a, b));
    }
}

/// Case-insensitive substring search over name, city, country and type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanySearch(String);

impl CompanySearch {
    /// Returns `None` when the trimmed term is empty.
    pub fn parse(raw: &str) -> Option<Self> {
        let term = raw.trim().to_lowercase();
        (!term.is_empty()).then_some(Self(term))
    }

    pub fn term(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, company: &Company) -> bool {
        let contains = |field: Option<&str>| {
            field.is_some_and(|value| value.to_lowercase().contains(&self.0))
        };

        contains(Some(&company.name))
            || contains(company.city.as_deref())
            || contains(company.country.as_deref())
            || contains(company.company_type.as_deref())
    }
}

/// Filter applied to the company directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CompanyQuery {
    #[default]
    All,
    /// Companies offering one recycling option. Takes precedence over search.
    ForRecyclingOption(i64),
    Search(CompanySearch),
}

impl CompanyQuery {
    /// Builds the filter from raw query parameters. An option id that is not
    /// an integer counts as absent, as does a blank search term.
    pub fn from_params(recycling_option_id: Option<&str>, search: Option<&str>) -> Self {
        if let Some(id) = recycling_option_id.and_then(|raw| raw.trim().parse::<i64>().ok()) {
            return CompanyQuery::ForRecyclingOption(id);
        }

        match search.and_then(CompanySearch::parse) {
            Some(search) => CompanyQuery::Search(search),
            None => CompanyQuery::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(id: i64, name: &str, city: Option<&str>, country: Option<&str>) -> Company {
        Company {
            id,
            name: name.to_string(),
            city: city.map(str::to_string),
            country: country.map(str::to_string),
            company_type: None,
            notes: None,
            website: None,
            email: None,
            phone: None,
            address: None,
        }
    }

    #[test]
    fn home_country_sorts_first_then_country_then_name() {
        let home = HomeCountry::new("France");
        let mut companies = vec![
            company(1, "Zeta", None, Some("Belgique")),
            company(2, "Beta", None, Some("france")),
            company(3, "Alpha", None, Some("Allemagne")),
            company(4, "Alpha", None, Some("FRANCE")),
            company(5, "Nulle", None, None),
        ];
        home.sort(&mut companies);

        let ids: Vec<i64> = companies.iter().map(|c| c.id).collect();
        // FRANCE < france byte-wise; None sorts ahead of any country.
        assert_eq!(ids, vec![4, 2, 5, 3, 1]);
    }

    #[test]
    fn home_country_is_case_insensitive_and_trimmed() {
        let home = HomeCountry::new("  Belgique ");
        assert!(home.matches(Some("BELGIQUE")));
        assert!(!home.matches(Some("France")));
        assert!(!home.matches(None));
    }

    #[test]
    fn search_matches_any_text_field() {
        let search = CompanySearch::parse("  LYON ").unwrap();
        assert_eq!(search.term(), "lyon");
        assert!(search.matches(&company(1, "Recyc", Some("Lyon"), None)));
        assert!(!search.matches(&company(2, "Recyc", Some("Paris"), None)));

        let mut typed = company(3, "Mousses SA", None, None);
        typed.company_type = Some("Recycleur".into());
        assert!(CompanySearch::parse("recycl").unwrap().matches(&typed));
        assert!(CompanySearch::parse("mousses").unwrap().matches(&typed));
    }

    #[test]
    fn search_handles_accented_terms() {
        let search = CompanySearch::parse("ÉCO").unwrap();
        assert!(search.matches(&company(1, "Écomousse", None, None)));
    }

    #[test]
    fn blank_search_is_no_search() {
        assert_eq!(CompanySearch::parse("   "), None);
        assert_eq!(CompanyQuery::from_params(None, Some("  ")), CompanyQuery::All);
    }

    #[test]
    fn option_filter_wins_over_search() {
        assert_eq!(
            CompanyQuery::from_params(Some("12"), Some("lyon")),
            CompanyQuery::ForRecyclingOption(12)
        );
    }

    #[test]
    fn unparseable_option_id_is_ignored() {
        assert_eq!(
            CompanyQuery::from_params(Some("abc"), Some("lyon")),
            CompanyQuery::Search(CompanySearch::parse("lyon").unwrap())
        );
        assert_eq!(CompanyQuery::from_params(Some(""), None), CompanyQuery::All);
    }
}
