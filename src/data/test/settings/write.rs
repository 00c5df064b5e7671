use super::*;
use serde_json::Value;

/// Tests that a write returns the canonical settings after commit.
///
/// Expected: Ok with the written fields present in the returned map
#[tokio::test]
async fn returns_canonical_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    let canonical = repo
        .write(500, &[("ignoreChannels".to_string(), json!(["111"]))])
        .await?;

    assert_eq!(canonical.get("ignoreChannels"), Some(&json!(["111"])));

    Ok(())
}

/// Tests that writing an existing key overwrites its value.
///
/// Expected: second write wins, only one row per key remains
#[tokio::test]
async fn upserts_existing_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GuildSettingFactory::new(db)
        .guild_id("500")
        .key("prefix")
        .value(json!("?"))
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db);
    let canonical = repo
        .write(500, &[("prefix".to_string(), json!("$"))])
        .await?;

    assert_eq!(canonical.get("prefix"), Some(&json!("$")));
    assert_eq!(canonical.len(), 1);

    Ok(())
}

/// Tests that a JSON null value deletes the stored field.
///
/// Verifies the tombstone semantics: null means "explicitly clear", so the
/// row disappears and the serialized view falls back to the default.
///
/// Expected: cleared key absent from the canonical map
#[tokio::test]
async fn null_value_deletes_field() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GuildSettingFactory::new(db)
        .guild_id("500")
        .key("logChannel")
        .value(json!("42"))
        .build()
        .await?;
    GuildSettingFactory::new(db)
        .guild_id("500")
        .key("prefix")
        .value(json!("?"))
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db);
    let canonical = repo
        .write(500, &[("logChannel".to_string(), Value::Null)])
        .await?;

    assert!(!canonical.contains_key("logChannel"));
    assert_eq!(canonical.get("prefix"), Some(&json!("?")));

    Ok(())
}

/// Tests that clearing a field that was never written is a no-op.
///
/// Expected: Ok with the other fields untouched
#[tokio::test]
async fn clearing_missing_field_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    let canonical = repo
        .write(500, &[("logChannel".to_string(), Value::Null)])
        .await?;

    assert!(canonical.is_empty());

    Ok(())
}

/// Tests that every pair in a batch lands in one commit.
///
/// Expected: all fields visible in a subsequent read
#[tokio::test]
async fn applies_whole_batch() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    repo.write(
        500,
        &[
            ("prefix".to_string(), json!("?")),
            ("adminRoles".to_string(), json!(["42"])),
            ("welcome".to_string(), json!({"enabled": true})),
        ],
    )
    .await?;

    let settings = repo.get(500).await?;

    assert_eq!(settings.len(), 3);
    assert_eq!(settings.get("welcome"), Some(&json!({"enabled": true})));

    Ok(())
}

/// Tests that later pairs in a batch override earlier ones for the same key.
///
/// The wire format is ordered, so the last write for a key wins within a
/// single transaction.
///
/// Expected: final value from the last pair
#[tokio::test]
async fn later_pairs_override_earlier_in_batch() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    let canonical = repo
        .write(
            500,
            &[
                ("prefix".to_string(), json!("?")),
                ("prefix".to_string(), json!("$")),
            ],
        )
        .await?;

    assert_eq!(canonical.get("prefix"), Some(&json!("$")));

    Ok(())
}
