use serde::{Deserialize, Serialize};

use hearth_types::Model;

use crate::base::BaseModel;

/// A rentable listing.
///
/// Relations are carried as ids (`city_id`, `user_id`, `amenity_ids`);
/// resolving them is the application's job, not the storage layer's.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(flatten)]
    pub base: BaseModel,
    #[serde(default)]
    pub city_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub number_rooms: i64,
    #[serde(default)]
    pub number_bathrooms: i64,
    #[serde(default)]
    pub max_guest: i64,
    #[serde(default)]
    pub price_by_night: i64,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub amenity_ids: Vec<String>,
}

impl Place {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Model for Place {
    const TYPE_NAME: &'static str = "Place";

    fn id(&self) -> &str {
        &self.base.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_types::{from_document, to_document};

    #[test]
    fn new_place_has_zeroed_listing_fields() {
        let place = Place::new();
        assert_eq!(place.number_rooms, 0);
        assert_eq!(place.price_by_night, 0);
        assert_eq!(place.latitude, 0.0);
        assert!(place.amenity_ids.is_empty());
    }

    #[test]
    fn document_roundtrip_keeps_every_field() {
        let mut place = Place::new();
        place.city_id = "c-1".into();
        place.user_id = "u-1".into();
        place.name = "Lighthouse loft".into();
        place.description = "Sleeps four".into();
        place.number_rooms = 2;
        place.number_bathrooms = 1;
        place.max_guest = 4;
        place.price_by_night = 120;
        place.latitude = 37.77;
        place.longitude = -122.43;
        place.amenity_ids = vec!["a-1".into(), "a-2".into()];

        let back: Place = from_document(&to_document(&place).unwrap()).unwrap();
        assert_eq!(back, place);
    }
}
