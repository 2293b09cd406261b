use super::*;

/// Tests creating a bug with all fields.
///
/// Verifies that the repository inserts the bug, assigns an ID and creation
/// timestamp, and stores the provided fields unchanged.
///
/// Expected: Ok with bug created
#[tokio::test]
async fn creates_bug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BugRepository::new(db);
    let bug = repo
        .create(CreateBugParam {
            title: "Test Bug".to_string(),
            description: Some("Demo Bug".to_string()),
            status: "Active".to_string(),
        })
        .await?;

    assert!(bug.id > 0);
    assert_eq!(bug.title, "Test Bug");
    assert_eq!(bug.description.as_deref(), Some("Demo Bug"));
    assert_eq!(bug.status, "Active");

    let stored = entity::prelude::Bug::find_by_id(bug.id)
        .one(db)
        .await?
        .expect("bug should be stored");
    assert_eq!(stored.title, "Test Bug");
    assert_eq!(stored.created_at, bug.created_at);

    Ok(())
}

/// Tests creating a bug without a description.
///
/// Expected: Ok with description stored as NULL
#[tokio::test]
async fn creates_bug_without_description() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BugRepository::new(db);
    let bug = repo
        .create(CreateBugParam {
            title: "No description".to_string(),
            description: None,
            status: "Active".to_string(),
        })
        .await?;

    let stored = entity::prelude::Bug::find_by_id(bug.id).one(db).await?.unwrap();
    assert!(stored.description.is_none());

    Ok(())
}

/// Tests that titles with unicode and punctuation survive a round trip.
///
/// Expected: Ok with title stored byte-for-byte
#[tokio::test]
async fn preserves_special_character_titles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let title = "🔥 Very long title with !@#$%^&*() characters — and it still works ✅";

    let repo = BugRepository::new(db);
    let bug = repo
        .create(CreateBugParam {
            title: title.to_string(),
            description: Some("Edge case description".to_string()),
            status: "Active".to_string(),
        })
        .await?;

    assert_eq!(bug.title, title);
    let stored = repo.find_by_id(bug.id).await?.unwrap();
    assert_eq!(stored.title, title);

    Ok(())
}

/// Tests that every create assigns a fresh ID.
///
/// Expected: Ok with strictly increasing IDs and one row per create
#[tokio::test]
async fn assigns_increasing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BugRepository::new(db);
    let mut last_id = 0;
    for n in 1..=3 {
        let bug = repo
            .create(CreateBugParam {
                title: format!("Bug{}", n),
                description: None,
                status: "Active".to_string(),
            })
            .await?;

        assert!(bug.id > last_id);
        last_id = bug.id;
        assert_eq!(entity::prelude::Bug::find().count(db).await?, n);
    }

    Ok(())
}

/// Tests that the ID of a deleted bug is not handed out again.
///
/// Deletes the bug holding the highest ID, which plain SQLite rowid allocation
/// would reuse, then creates another bug.
///
/// Expected: Ok with the new ID greater than every ID assigned before
#[tokio::test]
async fn does_not_reuse_deleted_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BugRepository::new(db);
    factory::bug::create_bug(db).await?;
    let highest = factory::bug::create_bug(db).await?;

    repo.delete(highest.id).await?;

    let next = repo
        .create(CreateBugParam {
            title: "After delete".to_string(),
            description: None,
            status: "Active".to_string(),
        })
        .await?;

    assert!(next.id > highest.id);

    Ok(())
}
