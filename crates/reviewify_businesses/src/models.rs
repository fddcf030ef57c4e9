//! Payloads and outward-facing representations for the business resource.

use reviewify_common::LinkBuilder;
use reviewify_db::{Business, BusinessPage, NewBusiness};
use serde::{Deserialize, Serialize};

/// Incoming body for creating or fully replacing a business.
///
/// Every field is optional at the parsing layer; presence is checked by
/// [`BusinessPayload::validate`] so a missing field produces the structured
/// missing-attributes error instead of a deserialization failure.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize)]
pub struct BusinessPayload {
    pub owner_id: Option<i64>,
    pub name: Option<String>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

impl BusinessPayload {
    /// Checks that all required fields are present.
    ///
    /// Returns the validated fields, or the names of every missing field.
    pub fn validate(self) -> Result<NewBusiness, Vec<&'static str>> {
        match self {
            BusinessPayload {
                owner_id: Some(owner_id),
                name: Some(name),
                street_address: Some(street_address),
                city: Some(city),
                state: Some(state),
                zip_code: Some(zip_code),
            } => Ok(NewBusiness {
                owner_id,
                name,
                street_address,
                city,
                state,
                zip_code,
            }),
            payload => Err(payload.missing_fields()),
        }
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.owner_id.is_none() {
            missing.push("owner_id");
        }
        if self.name.is_none() {
            missing.push("name");
        }
        if self.street_address.is_none() {
            missing.push("street_address");
        }
        if self.city.is_none() {
            missing.push("city");
        }
        if self.state.is_none() {
            missing.push("state");
        }
        if self.zip_code.is_none() {
            missing.push("zip_code");
        }
        missing
    }
}

/// Pagination window for the business listing.
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub offset: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    3
}

/// A business as returned to clients: all stored fields plus its canonical
/// URL.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize)]
pub struct BusinessView {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[serde(rename = "self")]
    pub self_link: String,
}

impl BusinessView {
    pub fn from_entity(business: &Business, links: &LinkBuilder) -> Self {
        Self {
            id: business.id,
            owner_id: business.owner_id,
            name: business.name.clone(),
            street_address: business.street_address.clone(),
            city: business.city.clone(),
            state: business.state.clone(),
            zip_code: business.zip_code.clone(),
            self_link: links.business(business.id),
        }
    }
}

/// One page of the business listing; `next` is present iff more rows remain
/// beyond the current window.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize)]
pub struct BusinessListView {
    pub entries: Vec<BusinessView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl BusinessListView {
    pub fn from_page(page: &BusinessPage, offset: i64, limit: i64, links: &LinkBuilder) -> Self {
        let entries = page
            .entries
            .iter()
            .map(|business| BusinessView::from_entity(business, links))
            .collect();
        let next_offset = offset + limit;
        let next = (next_offset < page.total).then(|| links.businesses_page(next_offset, limit));
        Self { entries, next }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> BusinessPayload {
        BusinessPayload {
            owner_id: Some(1),
            name: Some("The Electric Cafe".to_string()),
            street_address: Some("100 Main St".to_string()),
            city: Some("Corvallis".to_string()),
            state: Some("OR".to_string()),
            zip_code: Some("97330".to_string()),
        }
    }

    fn sample_business(id: i64) -> Business {
        Business {
            id,
            owner_id: 1,
            name: "The Electric Cafe".to_string(),
            street_address: "100 Main St".to_string(),
            city: "Corvallis".to_string(),
            state: "OR".to_string(),
            zip_code: "97330".to_string(),
        }
    }

    #[test]
    fn complete_payload_validates() {
        let fields = full_payload().validate().unwrap();
        assert_eq!(fields.owner_id, 1);
        assert_eq!(fields.state, "OR");
    }

    #[test]
    fn missing_fields_are_all_reported() {
        let payload = BusinessPayload {
            owner_id: None,
            zip_code: None,
            ..full_payload()
        };
        let missing = payload.validate().unwrap_err();
        assert_eq!(missing, vec!["owner_id", "zip_code"]);
    }

    #[test]
    fn view_carries_a_self_link() {
        let links = LinkBuilder::new("http://localhost:8080");
        let view = BusinessView::from_entity(&sample_business(7), &links);
        assert_eq!(view.self_link, "http://localhost:8080/businesses/7");
    }

    #[test]
    fn next_link_present_only_while_rows_remain() {
        let links = LinkBuilder::new("http://localhost:8080");
        let page = BusinessPage {
            entries: (1..=3).map(sample_business).collect(),
            total: 5,
        };

        let view = BusinessListView::from_page(&page, 0, 3, &links);
        assert_eq!(
            view.next.as_deref(),
            Some("http://localhost:8080/businesses?offset=3&limit=3")
        );

        let last_page = BusinessPage {
            entries: (4..=5).map(sample_business).collect(),
            total: 5,
        };
        let view = BusinessListView::from_page(&last_page, 3, 3, &links);
        assert!(view.next.is_none());
    }

    #[test]
    fn serialized_view_uses_the_self_key() {
        let links = LinkBuilder::new("http://localhost:8080");
        let view = BusinessView::from_entity(&sample_business(1), &links);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["self"], "http://localhost:8080/businesses/1");
        assert!(json.get("self_link").is_none());
    }
}
