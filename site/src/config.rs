//! Deployment configuration for external assets.
//!
//! Every URL is a literal constant, intended to be swapped per deployment.
//! An optional embedded JSON block (`<script type="application/json"
//! id="showroom-config">`) overrides individual entries at hydration, and
//! a `?debug=1` query flag raises client logging to debug level.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// 3D engine core script.
pub const ENGINE_SRC: &str = "https://unpkg.com/three@0.147.0/build/three.min.js";

/// Model-loader extension script. Must attach to the engine's global.
pub const LOADER_SRC: &str = "https://unpkg.com/three@0.147.0/examples/js/loaders/GLTFLoader.js";

/// Showcase model asset.
pub const MODEL_SRC: &str = "/assets/models/roadster.glb";

/// Vector animation shown whenever the 3D path degrades.
pub const FALLBACK_SRC: &str = "/assets/anim/roadster-outline.json";

/// Player for the vector fallback, loaded statically from the shell.
pub const LOTTIE_PLAYER_SRC: &str =
    "https://unpkg.com/@lottiefiles/lottie-player@2.0.12/dist/lottie-player.js";

/// Id of the optional embedded override block.
#[cfg(feature = "hydrate")]
const CONFIG_BLOCK_ID: &str = "showroom-config";

/// Resolved configuration handed to the viewer at initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub engine_src: String,
    pub loader_src: String,
    pub model_src: String,
    pub fallback_src: String,
    /// Raise client logging to debug level.
    pub debug: bool,
}

/// Partial override parsed from the embedded JSON block. Unknown keys are
/// ignored so the block can carry non-Rust settings too.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigOverrides {
    engine_src: Option<String>,
    loader_src: Option<String>,
    model_src: Option<String>,
    fallback_src: Option<String>,
    debug: Option<bool>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            engine_src: ENGINE_SRC.to_owned(),
            loader_src: LOADER_SRC.to_owned(),
            model_src: MODEL_SRC.to_owned(),
            fallback_src: FALLBACK_SRC.to_owned(),
            debug: false,
        }
    }
}

impl SiteConfig {
    /// Apply overrides from a JSON object. Returns `false`, changing
    /// nothing, when the JSON does not parse.
    pub fn apply_json(&mut self, json: &str) -> bool {
        let Ok(overrides) = serde_json::from_str::<ConfigOverrides>(json) else {
            return false;
        };
        if let Some(v) = overrides.engine_src {
            self.engine_src = v;
        }
        if let Some(v) = overrides.loader_src {
            self.loader_src = v;
        }
        if let Some(v) = overrides.model_src {
            self.model_src = v;
        }
        if let Some(v) = overrides.fallback_src {
            self.fallback_src = v;
        }
        if let Some(v) = overrides.debug {
            self.debug = v;
        }
        true
    }

    /// Resolve the live configuration: constants first, then the embedded
    /// override block, then the debug query flag. Server renders see only
    /// the constants.
    #[must_use]
    pub fn load() -> Self {
        #[cfg_attr(not(feature = "hydrate"), allow(unused_mut))]
        let mut config = Self::default();
        #[cfg(feature = "hydrate")]
        {
            let document = web_sys::window().and_then(|w| w.document());
            if let Some(block) = document.and_then(|d| d.get_element_by_id(CONFIG_BLOCK_ID)) {
                let json = block.text_content().unwrap_or_default();
                if !json.trim().is_empty() && !config.apply_json(&json) {
                    log::debug!("embedded config block is not valid JSON; constants stand");
                }
            }
            if let Some(search) = web_sys::window()
                .map(|w| w.location())
                .and_then(|l| l.search().ok())
            {
                config.debug = config.debug || debug_from_search(&search);
            }
        }
        config
    }
}

/// Whether a location query string asks for debug logging.
#[must_use]
pub fn debug_from_search(search: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .any(|pair| pair == "debug=1" || pair == "debug=true")
}
