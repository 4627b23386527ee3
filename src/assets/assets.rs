use std::borrow::Cow;

use anyhow::anyhow;
use gpui::{AssetSource, Result, SharedString};
use smallvec::SmallVec;

/// Asset source that asks each provider in turn.
pub struct Assets<const N: usize> {
    providers: SmallVec<[Box<dyn AssetProvider>; N]>,
}

impl<const N: usize> Assets<N> {
    pub fn new(providers: [Box<dyn AssetProvider>; N]) -> Assets<N> {
        Self {
            providers: SmallVec::from(providers),
        }
    }
}

/// Builds an [`Assets`] source from a list of providers.
#[macro_export]
macro_rules! assets {
    ( $( $item:expr ),* $(,)? ) => {
        $crate::Assets::new([
            $( Box::new($item) ),*
        ])
    };
}

impl<const N: usize> AssetSource for Assets<N> {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }

        self.providers
            .iter()
            .find_map(|provider| provider.get(path))
            .map(Some)
            .ok_or_else(|| anyhow!("could not find asset at path \"{path}\""))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        Ok(self
            .providers
            .iter()
            .flat_map(|provider| provider.list(path).into_iter())
            .flatten()
            .collect())
    }
}

pub trait AssetProvider: Send + Sync {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>>;
    fn list(&self, path: &str) -> Result<Vec<SharedString>>;
}
