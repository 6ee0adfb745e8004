//! Configuration for the page interactions.

use showcase_shared::SiteConfig;
use web_sys::Document;

/// Id of the optional inline JSON block overriding defaults, e.g.
/// `<script type="application/json" id="site-config">{"scrolled_threshold": 80}</script>`
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Read the page's config block, falling back to defaults when it is absent
/// or unusable.
pub fn load(document: &Document) -> SiteConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return SiteConfig::default();
    };

    match SiteConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            web_sys::console::warn_1(&format!("Ignoring #{CONFIG_ELEMENT_ID}: {err}").into());
            SiteConfig::default()
        },
    }
}
