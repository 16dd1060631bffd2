// SPDX-License-Identifier: GPL-3.0-only

use std::collections::HashMap;
use std::sync::{LazyLock, Mutex, PoisonError};

use cosmic::widget::icon;

/// Icon handles are built once per name and size and reused on every view
static ICON_CACHE: LazyLock<Mutex<HashMap<(&'static str, u16), icon::Handle>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Themed icon handle for the given icon name
pub fn get_handle(name: &'static str, size: u16) -> icon::Handle {
    let mut cache = ICON_CACHE.lock().unwrap_or_else(PoisonError::into_inner);

    cache
        .entry((name, size))
        .or_insert_with(|| icon::from_name(name).size(size).handle())
        .clone()
}
