use petstore_core::{Repository, StoreError, User};

#[tokio::test]
async fn creation_returns_the_username() {
    let repo = Repository::new();
    assert_eq!(
        repo.add_user(User::named("ada")).await.unwrap(),
        "ada".to_string()
    );

    let ada = repo.user("ada").await.unwrap();
    assert_eq!(ada.id, Some(0));
}

#[tokio::test]
async fn duplicate_usernames_are_rejected_before_the_id_check() {
    let repo = Repository::new();
    repo.add_user(User::named("ada")).await.unwrap();

    // Carries both defects; the username collision wins.
    let mut clash = User::named("ada");
    clash.id = Some(9);
    assert_eq!(
        repo.add_user(clash).await,
        Err(StoreError::DuplicateUsername("ada".into()))
    );

    // Usernames are case-sensitive, so this one is fine.
    repo.add_user(User::named("Ada")).await.unwrap();
}

#[tokio::test]
async fn a_preset_id_is_rejected_and_nothing_is_stored() {
    let repo = Repository::new();

    let mut preset = User::named("ada");
    preset.id = Some(3);
    assert_eq!(repo.add_user(preset).await, Err(StoreError::PresetId));
    assert_eq!(
        repo.user("ada").await,
        Err(StoreError::UnknownUser("ada".into()))
    );
}

#[tokio::test]
async fn deletion_resolves_by_username() {
    let repo = Repository::new();
    repo.add_user(User::named("ada")).await.unwrap();

    repo.delete_user("ada").await.unwrap();
    assert_eq!(
        repo.user("ada").await,
        Err(StoreError::UnknownUser("ada".into()))
    );
    assert_eq!(
        repo.delete_user("ada").await,
        Err(StoreError::UnknownUser("ada".into()))
    );
}

#[tokio::test]
async fn update_keeps_the_stored_id_and_keys_on_the_new_username() {
    let repo = Repository::new();
    repo.add_user(User::named("ada")).await.unwrap();
    repo.add_user(User::named("grace")).await.unwrap();

    // The incoming record carries the wrong id; the stored one wins.
    let mut updated = User::named("grace");
    updated.id = Some(40);
    updated.email = "grace@example.com".into();
    let stored = repo.update_user(updated).await.unwrap();
    assert_eq!(stored.id, Some(1));
    assert_eq!(stored.email, "grace@example.com");

    let fetched = repo.user("grace").await.unwrap();
    assert_eq!(fetched.id, Some(1));
    assert_eq!(fetched.email, "grace@example.com");

    // An unknown username propagates, and nothing is created.
    assert_eq!(
        repo.update_user(User::named("nobody")).await,
        Err(StoreError::UnknownUser("nobody".into()))
    );
    assert_eq!(
        repo.user("nobody").await,
        Err(StoreError::UnknownUser("nobody".into()))
    );
}
