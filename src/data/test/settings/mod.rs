use crate::data::settings::GuildSettingsRepository;
use sea_orm::DbErr;
use serde_json::json;
use test_utils::builder::TestBuilder;
use test_utils::factory::guild_setting::{create_setting, GuildSettingFactory};

mod get;
mod write;
