#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]
#![doc = include_str!("../README.md")]

mod api;
mod error;

pub use api::google_books::Volume;
pub use error::{Error, ErrorKind};

use log::trace;

type Client = reqwest::blocking::Client;

/// Search volumes by free text `title`, restricting results to `language`,
/// using the Google Books API.
///
/// A single blocking request is made per call and the volumes are returned
/// in the order the API reports them.
///
/// # Errors
///
/// An `Err` of kind [`ErrorKind::NoValue`] is returned when the API reports
/// zero matching items.
/// An `Err` of kind [`ErrorKind::Status`] is returned for any non-200
/// response status, carrying the status code as received.
/// An `Err` of kind [`ErrorKind::IO`] or [`ErrorKind::Deserialize`] is
/// returned when the request itself fails or the response body cannot be
/// parsed.
#[inline]
pub fn volumes_by_title(title: &str, language: &str) -> Result<Vec<Volume>, Error> {
    trace!("Search volumes by title of '{title}'");
    api::google_books::search_by_title::<Client>(title, language)
}
