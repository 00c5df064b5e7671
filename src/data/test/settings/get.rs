use super::*;

/// Tests reading settings for a guild with no stored rows.
///
/// Verifies that an unconfigured guild yields an empty map rather than an
/// error, so the schema layer can serialize pure defaults.
///
/// Expected: Ok with an empty map
#[tokio::test]
async fn returns_empty_map_for_unconfigured_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    let settings = repo.get(500).await?;

    assert!(settings.is_empty());

    Ok(())
}

/// Tests that stored rows fold into a keyed settings map.
///
/// Expected: map contains every written field with its JSON value
#[tokio::test]
async fn folds_rows_into_settings_map() -> Result<(), DbErr> {
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
    GuildSettingFactory::new(db)
        .guild_id("500")
        .key("adminRoles")
        .value(json!(["42"]))
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db);
    let settings = repo.get(500).await?;

    assert_eq!(settings.get("prefix"), Some(&json!("?")));
    assert_eq!(settings.get("adminRoles"), Some(&json!(["42"])));
    assert_eq!(settings.len(), 2);

    Ok(())
}

/// Tests that settings rows are scoped per guild.
///
/// Expected: writes for one guild are invisible to another
#[tokio::test]
async fn scopes_settings_by_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_setting(db, "500").await?;

    let repo = GuildSettingsRepository::new(db);
    let other = repo.get(501).await?;

    assert!(other.is_empty());

    Ok(())
}
