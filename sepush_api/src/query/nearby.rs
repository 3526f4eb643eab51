use url::Url;

use super::common::{required_coordinate, Query};
use crate::Error;

/// A coordinate pair for `/areas_nearby` and `/topics_nearby`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyQuery {
    pub lat: f64,
    pub long: f64,
}

impl NearbyQuery {
    pub fn new(lat: impl Into<Option<f64>>, long: impl Into<Option<f64>>) -> Result<Self, Error> {
        Ok(Self {
            lat: required_coordinate("lat", lat.into())?,
            long: required_coordinate("long", long.into())?,
        })
    }
}

impl Query for NearbyQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("lat", &self.lat.to_string())
            .append_pair("long", &self.long.to_string());
        url
    }
}
