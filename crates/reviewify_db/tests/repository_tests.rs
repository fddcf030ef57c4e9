//! Repository tests against a throwaway SQLite database.
//!
//! Each test gets its own database file under the system temp directory so
//! tests can run in parallel without sharing state.

use reviewify_db::{
    BusinessRepository, BusinessRepositoryFactory, CreateReviewError, DbClient, NewBusiness,
    NewReview, RepositoryFactory, ReviewRepository, ReviewRepositoryFactory,
    SqlBusinessRepository, SqlReviewRepository,
};

fn temp_db_url(tag: &str) -> String {
    let path = std::env::temp_dir().join(format!("reviewify_test_{}_{}.db", tag, std::process::id()));
    let _ = std::fs::remove_file(&path);
    format!("sqlite://{}", path.display())
}

async fn setup(tag: &str) -> (SqlBusinessRepository, SqlReviewRepository) {
    let db_client = DbClient::from_url(&temp_db_url(tag))
        .await
        .expect("failed to open test database");
    let businesses = BusinessRepositoryFactory::new().create_repository(db_client.clone());
    let reviews = ReviewRepositoryFactory::new().create_repository(db_client);
    businesses.init_schema().await.expect("businesses schema");
    reviews.init_schema().await.expect("reviews schema");
    (businesses, reviews)
}

fn sample_business(owner_id: i64, name: &str) -> NewBusiness {
    NewBusiness {
        owner_id,
        name: name.to_string(),
        street_address: "100 Main St".to_string(),
        city: "Corvallis".to_string(),
        state: "OR".to_string(),
        zip_code: "97330".to_string(),
    }
}

#[tokio::test]
async fn create_then_find_returns_the_same_business() {
    let (businesses, _) = setup("biz_create_find").await;

    let created = businesses
        .create(sample_business(1, "The Electric Cafe"))
        .await
        .unwrap();
    assert!(created.id > 0);

    let found = businesses.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found, created);
}

#[tokio::test]
async fn find_unknown_business_is_none() {
    let (businesses, _) = setup("biz_find_none").await;
    assert!(businesses.find_by_id(999).await.unwrap().is_none());
}

#[tokio::test]
async fn list_pages_in_id_order_and_reports_total() {
    let (businesses, _) = setup("biz_list").await;

    for i in 0..5 {
        businesses
            .create(sample_business(1, &format!("Business {i}")))
            .await
            .unwrap();
    }

    let first = businesses.list(0, 3).await.unwrap();
    assert_eq!(first.total, 5);
    assert_eq!(first.entries.len(), 3);
    let ids: Vec<i64> = first.entries.iter().map(|b| b.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);

    let second = businesses.list(3, 3).await.unwrap();
    assert_eq!(second.total, 5);
    assert_eq!(second.entries.len(), 2);
    assert!(second.entries[0].id > first.entries[2].id);
}

#[tokio::test]
async fn list_by_owner_filters_and_is_unpaginated() {
    let (businesses, _) = setup("biz_by_owner").await;

    for i in 0..4 {
        businesses
            .create(sample_business(7, &format!("Owned {i}")))
            .await
            .unwrap();
    }
    businesses
        .create(sample_business(8, "Someone else's"))
        .await
        .unwrap();

    let owned = businesses.list_by_owner(7).await.unwrap();
    assert_eq!(owned.len(), 4);
    assert!(owned.iter().all(|b| b.owner_id == 7));
}

#[tokio::test]
async fn replace_overwrites_every_field() {
    let (businesses, _) = setup("biz_replace").await;

    let created = businesses
        .create(sample_business(1, "Old Name"))
        .await
        .unwrap();

    let replaced = businesses
        .replace(
            created.id,
            NewBusiness {
                owner_id: 2,
                name: "New Name".to_string(),
                street_address: "200 Oak Ave".to_string(),
                city: "Portland".to_string(),
                state: "OR".to_string(),
                zip_code: "97201".to_string(),
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(replaced.id, created.id);
    assert_eq!(replaced.owner_id, 2);
    assert_eq!(replaced.name, "New Name");
    assert_eq!(replaced.city, "Portland");
}

#[tokio::test]
async fn replace_unknown_business_is_none() {
    let (businesses, _) = setup("biz_replace_none").await;
    let result = businesses
        .replace(42, sample_business(1, "Ghost"))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn delete_business_cascades_to_reviews() {
    let (businesses, reviews) = setup("biz_delete_cascade").await;

    let business = businesses
        .create(sample_business(1, "Doomed"))
        .await
        .unwrap();
    let review = reviews
        .create(NewReview {
            user_id: 10,
            business_id: business.id,
            stars: 4,
            review_text: Some("fine while it lasted".to_string()),
        })
        .await
        .unwrap();

    assert!(businesses.delete(business.id).await.unwrap());
    assert!(businesses.find_by_id(business.id).await.unwrap().is_none());
    assert!(reviews.find_by_id(review.id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_unknown_business_is_false() {
    let (businesses, _) = setup("biz_delete_none").await;
    assert!(!businesses.delete(42).await.unwrap());
}

#[tokio::test]
async fn review_create_rejects_missing_business() {
    let (_, reviews) = setup("rev_missing_biz").await;

    let err = reviews
        .create(NewReview {
            user_id: 1,
            business_id: 12345,
            stars: 3,
            review_text: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, CreateReviewError::BusinessNotFound));

    // Nothing was persisted for that user
    assert!(reviews.list_by_user(1).await.unwrap().is_empty());
}

#[tokio::test]
async fn review_create_rejects_second_review_for_same_pair() {
    let (businesses, reviews) = setup("rev_duplicate").await;

    let business = businesses
        .create(sample_business(1, "Popular Spot"))
        .await
        .unwrap();

    reviews
        .create(NewReview {
            user_id: 5,
            business_id: business.id,
            stars: 5,
            review_text: None,
        })
        .await
        .unwrap();

    let err = reviews
        .create(NewReview {
            user_id: 5,
            business_id: business.id,
            stars: 1,
            review_text: Some("changed my mind".to_string()),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, CreateReviewError::Duplicate));

    // A different user may still review the same business
    reviews
        .create(NewReview {
            user_id: 6,
            business_id: business.id,
            stars: 2,
            review_text: None,
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn review_update_keeps_text_when_not_supplied() {
    let (businesses, reviews) = setup("rev_update_coalesce").await;

    let business = businesses
        .create(sample_business(1, "Steady Place"))
        .await
        .unwrap();
    let review = reviews
        .create(NewReview {
            user_id: 3,
            business_id: business.id,
            stars: 2,
            review_text: Some("slow service".to_string()),
        })
        .await
        .unwrap();

    let updated = reviews.update(review.id, 4, None).await.unwrap().unwrap();
    assert_eq!(updated.stars, 4);
    assert_eq!(updated.review_text.as_deref(), Some("slow service"));

    let updated = reviews
        .update(review.id, 4, Some("much better now".to_string()))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.review_text.as_deref(), Some("much better now"));
}

#[tokio::test]
async fn review_update_unknown_id_is_none() {
    let (_, reviews) = setup("rev_update_none").await;
    assert!(reviews.update(42, 3, None).await.unwrap().is_none());
}

#[tokio::test]
async fn review_delete_reports_whether_a_row_went_away() {
    let (businesses, reviews) = setup("rev_delete").await;

    let business = businesses
        .create(sample_business(1, "Reviewed Once"))
        .await
        .unwrap();
    let review = reviews
        .create(NewReview {
            user_id: 9,
            business_id: business.id,
            stars: 0,
            review_text: None,
        })
        .await
        .unwrap();

    assert!(reviews.delete(review.id).await.unwrap());
    assert!(!reviews.delete(review.id).await.unwrap());
}

#[tokio::test]
async fn stars_outside_range_fail_at_the_store() {
    let (businesses, reviews) = setup("rev_stars_check").await;

    let business = businesses
        .create(sample_business(1, "Strict Ratings"))
        .await
        .unwrap();

    let err = reviews
        .create(NewReview {
            user_id: 1,
            business_id: business.id,
            stars: 9,
            review_text: None,
        })
        .await
        .unwrap_err();
    // The CHECK constraint is the only range enforcement
    assert!(matches!(err, CreateReviewError::Db(_)));
}
