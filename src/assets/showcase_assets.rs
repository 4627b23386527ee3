use std::borrow::Cow;

use gpui::{Result, SharedString};
use rust_embed::RustEmbed;

use crate::assets::AssetProvider;

/// Icons bundled into the binary.
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "icons/**/*.svg"]
#[exclude = "*.DS_Store"]
pub struct ShowcaseAssets;

impl AssetProvider for ShowcaseAssets {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        <Self as RustEmbed>::get(path).map(|f| f.data)
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        Ok(ShowcaseAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::IconKind;

    #[test]
    fn every_icon_kind_is_embedded() {
        for kind in IconKind::ALL {
            assert!(
                AssetProvider::get(&ShowcaseAssets, &kind.path()).is_some(),
                "missing asset for {kind:?}"
            );
        }
    }
}
