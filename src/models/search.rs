use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Field the dog search can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Breed,
    Name,
    Age,
}

impl SortField {
    pub const ALL: [SortField; 3] = [SortField::Breed, SortField::Name, SortField::Age];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Breed => "breed",
            SortField::Name => "name",
            SortField::Age => "age",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortField::Breed => "Breed",
            SortField::Name => "Name",
            SortField::Age => "Age",
        }
    }

    /// Next field in selector order, wrapping around.
    pub fn next(&self) -> Self {
        match self {
            SortField::Breed => SortField::Name,
            SortField::Name => SortField::Age,
            SortField::Age => SortField::Breed,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// A `<field>:<direction>` sort specification, e.g. `breed:asc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field.as_str(), self.direction.as_str())
    }
}

/// Error parsing a sort specification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid sort spec '{0}', expected <breed|name|age>:<asc|desc>")]
pub struct SortSpecParseError(pub String);

impl FromStr for SortSpec {
    type Err = SortSpecParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || SortSpecParseError(s.to_string());
        let (field, direction) = s.split_once(':').ok_or_else(err)?;
        let field = match field {
            "breed" => SortField::Breed,
            "name" => SortField::Name,
            "age" => SortField::Age,
            _ => return Err(err()),
        };
        let direction = match direction {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            _ => return Err(err()),
        };
        Ok(Self { field, direction })
    }
}

/// Query parameters of `GET /dogs/search`.
///
/// Empty lists and `None` values are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchDogsParams {
    pub breeds: Vec<String>,
    pub zip_codes: Vec<String>,
    pub age_min: Option<u32>,
    pub age_max: Option<u32>,
    pub size: Option<usize>,
    pub from: Option<usize>,
    pub sort: Option<SortSpec>,
}

impl SearchDogsParams {
    /// Flatten into `(key, value)` pairs. Lists repeat their key.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        for breed in &self.breeds {
            pairs.push(("breeds", breed.clone()));
        }
        for zip in &self.zip_codes {
            pairs.push(("zipCodes", zip.clone()));
        }
        if let Some(min) = self.age_min {
            pairs.push(("ageMin", min.to_string()));
        }
        if let Some(max) = self.age_max {
            pairs.push(("ageMax", max.to_string()));
        }
        if let Some(size) = self.size {
            pairs.push(("size", size.to_string()));
        }
        if let Some(from) = self.from {
            pairs.push(("from", from.to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.to_string()));
        }
        pairs
    }
}

/// Response of `GET /dogs/search`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchDogsResponse {
    pub result_ids: Vec<String>,
    pub total: usize,
    /// Opaque cursor for the next page (a query string)
    #[serde(default)]
    pub next: Option<String>,
    /// Opaque cursor for the previous page
    #[serde(default)]
    pub prev: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_spec_display() {
        assert_eq!(SortSpec::default().to_string(), "breed:asc");
        assert_eq!(
            SortSpec::new(SortField::Age, SortDirection::Desc).to_string(),
            "age:desc"
        );
    }

    #[test]
    fn test_sort_spec_parse() {
        assert_eq!(
            "name:desc".parse::<SortSpec>().unwrap(),
            SortSpec::new(SortField::Name, SortDirection::Desc)
        );
        assert!("name".parse::<SortSpec>().is_err());
        assert!("color:asc".parse::<SortSpec>().is_err());
        assert!("age:up".parse::<SortSpec>().is_err());
    }

    #[test]
    fn test_sort_field_cycles() {
        let mut field = SortField::Breed;
        for _ in 0..SortField::ALL.len() {
            field = field.next();
        }
        assert_eq!(field, SortField::Breed);
    }

    #[test]
    fn test_query_pairs_omit_empty_values() {
        let params = SearchDogsParams {
            size: Some(12),
            from: Some(0),
            sort: Some(SortSpec::default()),
            ..Default::default()
        };
        assert_eq!(
            params.to_query_pairs(),
            vec![
                ("size", "12".to_string()),
                ("from", "0".to_string()),
                ("sort", "breed:asc".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_pairs_repeat_list_keys() {
        let params = SearchDogsParams {
            breeds: vec!["Beagle".to_string(), "Pug".to_string()],
            zip_codes: vec!["10001".to_string()],
            age_min: Some(1),
            age_max: Some(8),
            ..Default::default()
        };
        let pairs = params.to_query_pairs();
        assert_eq!(pairs[0], ("breeds", "Beagle".to_string()));
        assert_eq!(pairs[1], ("breeds", "Pug".to_string()));
        assert_eq!(pairs[2], ("zipCodes", "10001".to_string()));
        assert_eq!(pairs[3], ("ageMin", "1".to_string()));
        assert_eq!(pairs[4], ("ageMax", "8".to_string()));
    }

    #[test]
    fn test_search_response_deserializes_camel_case() {
        let json = r#"{"resultIds":["a","b"],"total":30,"next":"/dogs/search?size=12&from=12"}"#;
        let res: SearchDogsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(res.result_ids, vec!["a", "b"]);
        assert_eq!(res.total, 30);
        assert_eq!(res.next.as_deref(), Some("/dogs/search?size=12&from=12"));
        assert!(res.prev.is_none());
    }
}
