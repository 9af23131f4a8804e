use std::marker::PhantomData;

use bevy::asset::io::Reader;
use bevy::asset::{AssetLoader, LoadContext};
use bevy::prelude::*;
use bevy::reflect::TypePath;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RonLoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("invalid {kind}: {reason}")]
    Invalid { kind: &'static str, reason: String },
}

/// Post-parse checks run before a RON asset is handed to the app.
pub trait ValidateAsset {
    const KIND: &'static str;

    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Parses bytes into `T` and validates the result.
pub fn parse_ron_asset<T>(bytes: &[u8]) -> Result<T, RonLoaderError>
where
    T: ValidateAsset + for<'de> Deserialize<'de>,
{
    let asset = ron::de::from_bytes::<T>(bytes)?;
    asset
        .validate()
        .map_err(|reason| RonLoaderError::Invalid {
            kind: T::KIND,
            reason,
        })?;
    Ok(asset)
}

#[derive(TypePath)]
pub struct RonLoader<T: TypePath> {
    extensions: Vec<&'static str>,
    _phantom: PhantomData<T>,
}

impl<T: TypePath> RonLoader<T> {
    pub fn new(extensions: &[&'static str]) -> Self {
        Self {
            extensions: extensions.to_vec(),
            _phantom: PhantomData,
        }
    }
}

impl<T> AssetLoader for RonLoader<T>
where
    T: Asset + TypePath + ValidateAsset + for<'de> Deserialize<'de> + Send + Sync + 'static,
{
    type Asset = T;
    type Settings = ();
    type Error = RonLoaderError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        parse_ron_asset(&bytes)
    }

    fn extensions(&self) -> &[&str] {
        &self.extensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Radius {
        value: f32,
    }

    impl ValidateAsset for Radius {
        const KIND: &'static str = "radius";

        fn validate(&self) -> Result<(), String> {
            if self.value > 0.0 {
                Ok(())
            } else {
                Err(format!("{} is not positive", self.value))
            }
        }
    }

    #[test]
    fn valid_asset_parses() {
        let r: Radius = parse_ron_asset(b"(value: 2.5)").unwrap();
        assert_eq!(r.value, 2.5);
    }

    #[test]
    fn parse_error_is_reported() {
        let err = parse_ron_asset::<Radius>(b"(value: )").unwrap_err();
        assert!(matches!(err, RonLoaderError::Ron(_)));
    }

    #[test]
    fn validation_error_names_kind() {
        let err = parse_ron_asset::<Radius>(b"(value: -1.0)").unwrap_err();
        assert_eq!(err.to_string(), "invalid radius: -1 is not positive");
    }
}
