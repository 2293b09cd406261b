use super::*;

/// Tests updating a single field.
///
/// Verifies that only the provided field changes and every other field keeps
/// its prior value when re-fetched.
///
/// Expected: Ok with only status changed
#[tokio::test]
async fn updates_only_provided_field() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::bug::BugFactory::new(db)
        .title("Original")
        .description("Original description")
        .status("Active")
        .build()
        .await?;

    let repo = BugRepository::new(db);
    let updated = repo
        .update(UpdateBugParam {
            id: created.id,
            title: None,
            description: None,
            status: Some("Resolved".to_string()),
        })
        .await?;

    assert_eq!(updated.status, "Resolved");

    let refetched = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(refetched.status, "Resolved");
    assert_eq!(refetched.title, "Original");
    assert_eq!(refetched.description.as_deref(), Some("Original description"));
    assert_eq!(refetched.created_at, created.created_at);

    Ok(())
}

/// Tests updating every mutable field at once.
///
/// Expected: Ok with all fields changed and ID unchanged
#[tokio::test]
async fn updates_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::bug::create_bug(db).await?;

    let repo = BugRepository::new(db);
    let updated = repo
        .update(UpdateBugParam {
            id: created.id,
            title: Some("New title".to_string()),
            description: Some("New description".to_string()),
            status: Some("Closed".to_string()),
        })
        .await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "New title");
    assert_eq!(updated.description.as_deref(), Some("New description"));
    assert_eq!(updated.status, "Closed");

    Ok(())
}

/// Tests updating a bug that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound) and no rows inserted
#[tokio::test]
async fn fails_for_nonexistent_bug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BugRepository::new(db);
    let result = repo
        .update(UpdateBugParam {
            id: 999999,
            title: Some("Ghost".to_string()),
            description: None,
            status: None,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
    assert_eq!(entity::prelude::Bug::find().count(db).await?, 0);

    Ok(())
}
