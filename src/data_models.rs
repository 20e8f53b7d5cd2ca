use serde::{Deserialize, Deserializer, Serialize};

/// Reads a list field that the service may send as `null`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestType {
    Ideas,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdeaType {
    Keyword,
}

/// Tag naming what an attribute value represents.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttributeType {
    KeywordText,
    SearchVolume,
    CategoryProductsAndServices,
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Language {
    pub id: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum SearchParameter {
    #[serde(rename = "RelatedToQuerySearchParameter")]
    RelatedToQuery { queries: Vec<String> },
    #[serde(rename = "LanguageSearchParameter")]
    Language { languages: Vec<Language> },
}

/// Paging window: which slice of the full result set one call returns.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    pub start_index: u32,
    pub number_results: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TargetingIdeaSelector {
    pub request_type: RequestType,
    pub idea_type: IdeaType,
    pub requested_attribute_types: Vec<AttributeType>,
    pub search_parameters: Vec<SearchParameter>,
    pub paging: Paging,
}

/// Typed attribute value. Variants this client does not model decode as `Unknown`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum Attribute {
    #[serde(rename = "StringAttribute")]
    String {
        #[serde(default)]
        value: Option<String>,
    },
    #[serde(rename = "LongAttribute")]
    Long { value: i64 },
    #[serde(rename = "IntegerSetAttribute")]
    IntegerSet {
        #[serde(default)]
        value: Option<Vec<i32>>,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AttributeMapEntry {
    pub key: AttributeType,
    pub value: Attribute,
}

impl AttributeMapEntry {
    pub fn new(key: AttributeType, value: Attribute) -> AttributeMapEntry {
        AttributeMapEntry { key, value }
    }
}

/// One suggested keyword with its sparse attribute list.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TargetingIdea {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<AttributeMapEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TargetingIdeaPage {
    #[serde(default)]
    pub total_num_entries: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub entries: Vec<TargetingIdea>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub error_string: String,
    #[serde(default)]
    pub field_path: Option<String>,
    #[serde(default)]
    pub trigger: Option<String>,
}

/// Error body the service returns with a non-success status.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiException {
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

impl std::fmt::Display for ApiException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered = self
            .errors
            .iter()
            .map(|e| {
                let mut s = e.error_string.clone();
                if let Some(path) = &e.field_path {
                    s.push_str(&format!(" @ {path}"));
                }
                if let Some(trigger) = &e.trigger {
                    s.push_str(&format!("; trigger:'{trigger}'"));
                }
                s
            })
            .collect::<Vec<String>>();
        write!(f, "[{}]", rendered.join(", "))
    }
}
