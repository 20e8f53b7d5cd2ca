use std::fmt;
use std::io::{self, Write};
use thiserror::Error;

use crate::data_models::{
    Attribute, AttributeType, IdeaType, Language, Paging, RequestType, SearchParameter,
    TargetingIdea, TargetingIdeaSelector,
};
use crate::service::{ServiceError, TargetingIdeaService};

pub const DESCRIPTION: &str =
    "This code example retrieves keywords that are related to a given keyword.";
pub const SEARCH_PHRASE: &str = "mars cruise";
/// English. Only a single language parameter is accepted.
pub const LANGUAGE_ID: i64 = 1000;
pub const PAGE_SIZE: u32 = 500;

#[derive(Debug, Error)]
pub enum IdeasError {
    #[error("Failed to retrieve related keywords.")]
    RetrieveRelatedKeywords(#[source] ServiceError),
    #[error("failed to write keyword ideas")]
    Output(#[from] io::Error),
}

/// Selector for keyword ideas related to `keyword_text`, limited to one language.
pub fn build_selector(keyword_text: &str, language_id: i64) -> TargetingIdeaSelector {
    TargetingIdeaSelector {
        request_type: RequestType::Ideas,
        idea_type: IdeaType::Keyword,
        requested_attribute_types: vec![
            AttributeType::KeywordText,
            AttributeType::SearchVolume,
            AttributeType::CategoryProductsAndServices,
        ],
        search_parameters: vec![
            SearchParameter::RelatedToQuery {
                queries: vec![keyword_text.to_string()],
            },
            SearchParameter::Language {
                languages: vec![Language { id: language_id }],
            },
        ],
        paging: Paging {
            start_index: 0,
            number_results: PAGE_SIZE,
        },
    }
}

/// Fields extracted from one idea's attribute list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordIdea {
    pub keyword: Option<String>,
    pub average_monthly_searches: i64,
    pub categories: Option<String>,
}

impl KeywordIdea {
    pub fn from_idea(idea: &TargetingIdea) -> KeywordIdea {
        let mut out = KeywordIdea::default();
        for entry in &idea.data {
            match (entry.key, &entry.value) {
                (AttributeType::KeywordText, Attribute::String { value }) => {
                    out.keyword = value.clone();
                }
                (AttributeType::SearchVolume, Attribute::Long { value }) => {
                    out.average_monthly_searches = *value;
                }
                (
                    AttributeType::CategoryProductsAndServices,
                    Attribute::IntegerSet { value: Some(ids) },
                ) => {
                    out.categories = Some(join_categories(ids));
                }
                _ => {}
            }
        }
        out
    }
}

impl fmt::Display for KeywordIdea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Keyword with text '{}', and average monthly search volume '{}' was found with categories: {}",
            self.keyword.as_deref().unwrap_or_default(),
            self.average_monthly_searches,
            self.categories.as_deref().unwrap_or_default()
        )
    }
}

pub fn join_categories(ids: &[i32]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetrievalSummary {
    /// Total count reported by the last page fetched.
    pub total_num_entries: i64,
    pub pages_fetched: usize,
    pub ideas_printed: usize,
}

/// Start of the next page, or `None` once `total` is reached. Stops as
/// well when the offset would no longer fit the paging window.
pub fn next_offset(offset: u32, page_size: u32, total: i64) -> Option<u32> {
    offset
        .checked_add(page_size)
        .filter(|next| i64::from(*next) < total)
}

/// Pages through the service, printing one line per idea to `out`.
///
/// At least one call is always made. The loop stops once the offset reaches
/// the total count of the most recent page, so a page with no entries does
/// not stop it early.
pub async fn get_keyword_ideas<S, W>(
    service: &S,
    mut selector: TargetingIdeaSelector,
    out: &mut W,
) -> Result<RetrievalSummary, IdeasError>
where
    S: TargetingIdeaService,
    W: Write,
{
    let page_size = PAGE_SIZE;
    let mut offset: u32 = 0;
    let mut summary = RetrievalSummary::default();

    loop {
        selector.paging = Paging {
            start_index: offset,
            number_results: page_size,
        };
        log::debug!("fetching keyword ideas at offset {offset}");
        let page = service
            .get(&selector)
            .await
            .map_err(IdeasError::RetrieveRelatedKeywords)?;
        summary.pages_fetched += 1;
        summary.total_num_entries = page.total_num_entries;

        for idea in &page.entries {
            writeln!(out, "{}", KeywordIdea::from_idea(idea))?;
            summary.ideas_printed += 1;
        }

        match next_offset(offset, page_size, page.total_num_entries) {
            Some(next) => offset = next,
            None => break,
        }
    }

    writeln!(
        out,
        "Number of related keywords found: {}",
        summary.total_num_entries
    )?;
    log::info!(
        "retrieved {} keyword ideas over {} pages",
        summary.ideas_printed,
        summary.pages_fetched
    );
    Ok(summary)
}
