//! Asset lookup and loading.
//!
//! Assets live on disk under an asset root (`assets/` next to the working directory by
//! default) and are read on demand; nothing is embedded in the binary.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use strum_macros::{EnumIter, IntoStaticStr};
use tracing::trace;

use crate::constants::LEVEL_PATH;
use crate::error::AssetError;

pub const ASSET_ROOT: &str = "assets";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum Asset {
    PlayerSheet,
    GroundSheet,
    HazardSheet,
    Background,
    RoundOver,
    Level,
}

impl Asset {
    /// Path of the asset relative to the asset root.
    pub fn path(self) -> &'static str {
        match self {
            Asset::PlayerSheet => "res/zweim.png",
            Asset::GroundSheet => "res/holz.png",
            Asset::HazardSheet => "res/krokokl.png",
            Asset::Background => "res/Hintergrund ohne krokodil.png",
            Asset::RoundOver => "res/GAMEOVER.png",
            Asset::Level => LEVEL_PATH,
        }
    }

    pub fn resolve(self, root: &Path) -> PathBuf {
        root.join(self.path())
    }
}

pub fn get_asset_bytes_from(root: &Path, asset: Asset) -> Result<Cow<'static, [u8]>, AssetError> {
    let path = asset.resolve(root);
    trace!(asset = <&'static str>::from(asset), path = %path.display(), "Reading asset");
    let bytes = fs::read(&path).map_err(|source| AssetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(Cow::Owned(bytes))
}
