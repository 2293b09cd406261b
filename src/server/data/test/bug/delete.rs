use super::*;

/// Tests deleting a bug.
///
/// Verifies that the repository removes the record and returns the data it
/// held before deletion.
///
/// Expected: Ok with deleted bug returned
#[tokio::test]
async fn deletes_bug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::bug::BugFactory::new(db)
        .title("ToDelete")
        .build()
        .await?;

    let repo = BugRepository::new(db);
    let deleted = repo.delete(created.id).await?;

    assert_eq!(deleted.id, created.id);
    assert_eq!(deleted.title, "ToDelete");

    let check = entity::prelude::Bug::find_by_id(created.id).one(db).await?;
    assert!(check.is_none());

    Ok(())
}

/// Tests deleting only removes the targeted bug.
///
/// Expected: Ok with the other bug still present
#[tokio::test]
async fn leaves_other_bugs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let keep = factory::bug::create_bug(db).await?;
    let remove = factory::bug::create_bug(db).await?;

    let repo = BugRepository::new(db);
    repo.delete(remove.id).await?;

    let remaining = repo.get_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep.id);

    Ok(())
}

/// Tests deleting a bug that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound) and existing rows untouched
#[tokio::test]
async fn fails_for_nonexistent_bug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::bug::create_bug(db).await?;

    let repo = BugRepository::new(db);
    let result = repo.delete(999999).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
    assert_eq!(entity::prelude::Bug::find().count(db).await?, 1);

    Ok(())
}
