//! Reads server-rendered `<meta>` configuration out of the live document.

use crate::config::{
    IdentityConfig, IdentityKeyError, PUBLISHABLE_KEY_META, ROLE_SOURCES_META, SIGN_IN_URL_META, SIGN_UP_URL_META,
};
use crate::state::identity::RoleLookup;

fn meta_content(name: &str) -> Option<String> {
    let doc = web_sys::window()?.document()?;
    let el = doc.query_selector(&format!("meta[name=\"{name}\"]")).ok()??;
    el.get_attribute("content")
}

/// Rebuild the identity config the server validated at startup.
///
/// # Errors
///
/// Returns an [`IdentityKeyError`] when the key tag is absent or invalid.
pub fn read_identity_config() -> Result<IdentityConfig, IdentityKeyError> {
    let key = meta_content(PUBLISHABLE_KEY_META).ok_or(IdentityKeyError::Missing)?;
    let mut config = IdentityConfig::from_publishable_key(&key)?
        .with_sign_in_url(meta_content(SIGN_IN_URL_META).as_deref())
        .with_sign_up_url(meta_content(SIGN_UP_URL_META).as_deref());

    if let Some(raw) = meta_content(ROLE_SOURCES_META) {
        match RoleLookup::parse(&raw) {
            Ok(lookup) => config = config.with_role_lookup(lookup),
            Err(e) => log::warn!("ignoring role source list: {e}"),
        }
    }
    Ok(config)
}
