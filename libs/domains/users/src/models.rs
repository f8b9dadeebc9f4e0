use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Largest page a client may request.
pub const MAX_PAGE_SIZE: u64 = 1000;
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// A registered user as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub gender: String,
    #[serde(with = "birthdate_format")]
    #[schema(value_type = String, example = "01/31/2000")]
    pub birthdate: NaiveDate,
    pub address: Option<Address>,
}

/// Address owned by exactly one user.
///
/// `user_id` is a plain lookup field; the user owns the address, never the
/// other way around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: i64,
    pub work_address: Option<String>,
    pub home_address: Option<String>,
    pub user_id: i64,
}

/// Registration payload.
///
/// Every field is optional on the wire so that missing values are reported
/// by the validator instead of failing deserialization. Unknown fields such
/// as a client-supplied `id` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default, with = "birthdate_format::option")]
    #[schema(value_type = Option<String>, example = "01/31/2000")]
    pub birthdate: Option<NaiveDate>,
    #[serde(default)]
    pub address: Option<NewAddress>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewAddress {
    #[serde(default)]
    pub work_address: Option<String>,
    #[serde(default)]
    pub home_address: Option<String>,
}

/// Zero-based page selection, read from `?page=&size=`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageRequest {
    /// Zero-based page index
    #[serde(default)]
    #[param(default = 0, minimum = 0)]
    pub page: u64,
    /// Page size
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 1000))]
    #[param(default = 10, minimum = 1, maximum = 1000)]
    pub size: u64,
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl PageRequest {
    pub fn new(page: u64, size: u64) -> Self {
        Self { page, size }
    }

    /// Rows to skip, clamped to what PostgreSQL accepts as an OFFSET.
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size).min(i64::MAX as u64)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

/// One page of results plus the totals a client needs to navigate.
///
/// ```json
/// {
///   "content": [],
///   "totalElements": 15,
///   "totalPages": 2,
///   "number": 1,
///   "size": 10,
///   "numberOfElements": 5,
///   "first": false,
///   "last": true,
///   "empty": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: u64,
    pub size: u64,
    pub number_of_elements: u64,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        let size = request.size.max(1);
        let total_pages = total_elements.div_ceil(size);
        let number_of_elements = content.len() as u64;

        Self {
            empty: content.is_empty(),
            content,
            total_elements,
            total_pages,
            number: request.page,
            size: request.size,
            number_of_elements,
            first: request.page == 0,
            last: request.page.saturating_add(1) >= total_pages,
        }
    }
}

/// `MM/dd/yyyy` on output; `MM/dd/yyyy` or ISO `yyyy-MM-dd` on input.
pub mod birthdate_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub const FORMAT: &str = "%m/%d/%Y";
    const ISO_FORMAT: &str = "%Y-%m-%d";

    pub fn parse(raw: &str) -> Result<NaiveDate, String> {
        let raw = raw.trim();
        NaiveDate::parse_from_str(raw, FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(raw, ISO_FORMAT))
            .map_err(|_| format!("invalid birthdate '{raw}', expected MM/dd/yyyy or yyyy-MM-dd"))
    }

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(de::Error::custom)
    }

    /// Same formats for optional dates; `null` and blank strings are `None`.
    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(
            date: &Option<NaiveDate>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(date) => super::serialize(date, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveDate>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) if !raw.trim().is_empty() => parse(&raw).map(Some).map_err(de::Error::custom),
                _ => Ok(None),
            }
        }
    }
}
