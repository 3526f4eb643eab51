use std::fmt;
use std::str::FromStr;

use url::Url;

use super::common::{required_text, Query};
use crate::{Error, ErrorKind};

/// Free-text search for area identifiers (`/areas_search`).
#[derive(Debug, Clone, PartialEq)]
pub struct AreasSearchQuery {
    pub text: String,
}

impl AreasSearchQuery {
    pub fn new<'a>(text: impl Into<Option<&'a str>>) -> Result<Self, Error> {
        Ok(Self {
            text: required_text("text", text.into())?,
        })
    }
}

impl Query for AreasSearchQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut().append_pair("text", &self.text);
        url
    }
}

/// Which schedule the `/area` endpoint returns.
///
/// `Current` is the live schedule. `Future` returns generated test data for
/// upcoming events, which is useful while integrating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AreaTest {
    #[default]
    Current,
    Future,
}

impl fmt::Display for AreaTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AreaTest::Current => "current",
            AreaTest::Future => "future",
        })
    }
}

/// Unknown values fail with `BadRequest`.
impl FromStr for AreaTest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "current" => Ok(AreaTest::Current),
            "future" => Ok(AreaTest::Future),
            other => {
                tracing::warn!("Unknown area test mode `{}`", other);
                Err(Error::new(ErrorKind::BadRequest))
            }
        }
    }
}

/// Details for a single area (`/area`).
#[derive(Debug, Clone, PartialEq)]
pub struct AreaQuery {
    pub id: String,
    pub test: AreaTest,
}

impl AreaQuery {
    pub fn new<'a>(id: impl Into<Option<&'a str>>) -> Result<Self, Error> {
        Ok(Self {
            id: required_text("id", id.into())?,
            test: AreaTest::default(),
        })
    }

    pub fn with_test(mut self, test: AreaTest) -> Self {
        self.test = test;
        self
    }
}

impl Query for AreaQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("id", &self.id)
            .append_pair("test", &self.test.to_string());
        url
    }
}
