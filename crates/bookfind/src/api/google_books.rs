use log::{info, trace};
use serde::Deserialize;

use crate::{Error, ErrorKind};

use super::Client;

const GOOGLE_BOOKS_URL: &str = "https://www.googleapis.com/books/v1/volumes";

pub(crate) fn search_by_title<C: Client>(
    title: &str,
    language: &str,
) -> Result<Vec<Volume>, Error> {
    info!("Searching for title '{title}' restricted to '{language}' using Google Books API");

    let url = reqwest::Url::parse_with_params(
        GOOGLE_BOOKS_URL,
        &[("q", title), ("langRestrict", language)],
    )
    .map_err(|e| Error::wrap(ErrorKind::IO, e))?;

    let client = C::default();
    let model: GoogleModel = client.get_json(url.as_str())?;

    trace!("Request was successful");

    if model.total_items == 0 {
        return Err(Error::new(
            ErrorKind::NoValue,
            "No book found with this title",
        ));
    }

    Ok(model
        .items
        .into_iter()
        .map(|item| item.volume_info)
        .collect())
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct GoogleModel {
    #[serde(rename = "totalItems")]
    total_items: u32,
    // `items` is missing entirely from the response when `totalItems` is 0.
    #[serde(default)]
    items: Vec<Item>,
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct Item {
    #[serde(rename = "volumeInfo")]
    volume_info: Volume,
}

/// Volume information for a single search result from the Google Book API.
///
/// The API only includes the fields it has a value for, so every field is
/// optional. Search results are relevance ordered by the API and that order
/// is kept when collecting volumes.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
pub struct Volume {
    /// Title of the volume.
    pub title: Option<String>,
    /// Authors in the order reported by the API.
    pub authors: Option<Vec<String>>,
    /// Publication date as an opaque string, often `Year-Month-Day` with the
    /// day (and sometimes month) omitted.
    #[serde(rename = "publishedDate")]
    pub published_date: Option<String>,
    /// Free text description of the volume.
    pub description: Option<String>,
}
