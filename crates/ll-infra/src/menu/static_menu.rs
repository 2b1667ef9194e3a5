use anyhow::{Context, Result};
use ll_core::menu::Dish;

const BUNDLED_MENU_JSON: &str = include_str!("../../assets/menu.json");

/// The static dish list shipped with the app, used to seed an empty cache.
pub fn bundled_menu() -> Result<Vec<Dish>> {
    serde_json::from_str(BUNDLED_MENU_JSON).context("Failed to parse bundled menu")
}
