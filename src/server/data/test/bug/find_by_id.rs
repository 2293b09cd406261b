use super::*;

/// Tests finding an existing bug.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_existing_bug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::bug::BugFactory::new(db)
        .title("Findable")
        .description("Here")
        .build()
        .await?;

    let repo = BugRepository::new(db);
    let bug = repo.find_by_id(created.id).await?.expect("bug should exist");

    assert_eq!(bug.id, created.id);
    assert_eq!(bug.title, "Findable");
    assert_eq!(bug.description.as_deref(), Some("Here"));
    assert_eq!(bug.created_at, created.created_at);

    Ok(())
}

/// Tests finding a bug that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_bug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BugRepository::new(db);
    let bug = repo.find_by_id(999999).await?;

    assert!(bug.is_none());

    Ok(())
}
