//! Payloads and outward-facing representations for the review resource.

use reviewify_common::LinkBuilder;
use reviewify_db::{NewReview, Review};
use serde::{Deserialize, Serialize};

/// Incoming body for creating a review. `review_text` is genuinely optional;
/// the rest is presence-checked by [`ReviewPayload::validate`].
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize)]
pub struct ReviewPayload {
    pub user_id: Option<i64>,
    pub business_id: Option<i64>,
    pub stars: Option<i64>,
    pub review_text: Option<String>,
}

impl ReviewPayload {
    pub fn validate(self) -> Result<NewReview, Vec<&'static str>> {
        match self {
            ReviewPayload {
                user_id: Some(user_id),
                business_id: Some(business_id),
                stars: Some(stars),
                review_text,
            } => Ok(NewReview {
                user_id,
                business_id,
                stars,
                review_text,
            }),
            payload => Err(payload.missing_fields()),
        }
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.user_id.is_none() {
            missing.push("user_id");
        }
        if self.business_id.is_none() {
            missing.push("business_id");
        }
        if self.stars.is_none() {
            missing.push("stars");
        }
        missing
    }
}

/// Incoming body for updating a review: `stars` is required, and an absent
/// `review_text` means "keep the stored text".
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize)]
pub struct ReviewUpdatePayload {
    pub stars: Option<i64>,
    pub review_text: Option<String>,
}

impl ReviewUpdatePayload {
    pub fn validate(self) -> Result<(i64, Option<String>), Vec<&'static str>> {
        match self.stars {
            Some(stars) => Ok((stars, self.review_text)),
            None => Err(vec!["stars"]),
        }
    }
}

/// A review as returned to clients. The stored `business_id` is replaced by
/// the canonical URL of the business under the `business` key; `review_text`
/// serializes as `null` when absent.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize)]
pub struct ReviewView {
    pub id: i64,
    pub user_id: i64,
    pub business: String,
    pub stars: i64,
    pub review_text: Option<String>,
    #[serde(rename = "self")]
    pub self_link: String,
}

impl ReviewView {
    pub fn from_entity(review: &Review, links: &LinkBuilder) -> Self {
        Self {
            id: review.id,
            user_id: review.user_id,
            business: links.business(review.business_id),
            stars: review.stars,
            review_text: review.review_text.clone(),
            self_link: links.review(review.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_requires_user_business_and_stars() {
        let payload = ReviewPayload {
            user_id: None,
            business_id: Some(2),
            stars: None,
            review_text: None,
        };
        assert_eq!(payload.validate().unwrap_err(), vec!["user_id", "stars"]);
    }

    #[test]
    fn review_text_is_not_required() {
        let payload = ReviewPayload {
            user_id: Some(1),
            business_id: Some(2),
            stars: Some(5),
            review_text: None,
        };
        let fields = payload.validate().unwrap();
        assert_eq!(fields.stars, 5);
        assert!(fields.review_text.is_none());
    }

    #[test]
    fn update_payload_requires_only_stars() {
        let payload = ReviewUpdatePayload {
            stars: Some(3),
            review_text: None,
        };
        assert_eq!(payload.validate().unwrap(), (3, None));

        let payload = ReviewUpdatePayload {
            stars: None,
            review_text: Some("nice".to_string()),
        };
        assert_eq!(payload.validate().unwrap_err(), vec!["stars"]);
    }

    #[test]
    fn view_replaces_business_id_with_a_link() {
        let links = LinkBuilder::new("http://localhost:8080");
        let review = Review {
            id: 12,
            user_id: 3,
            business_id: 7,
            stars: 4,
            review_text: None,
        };
        let view = ReviewView::from_entity(&review, &links);
        assert_eq!(view.business, "http://localhost:8080/businesses/7");
        assert_eq!(view.self_link, "http://localhost:8080/reviews/12");

        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("business_id").is_none());
        assert_eq!(json["review_text"], serde_json::Value::Null);
        assert_eq!(json["self"], "http://localhost:8080/reviews/12");
    }
}
