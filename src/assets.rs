use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, bail};
use bevy::{
    asset::{AssetLoadFailedEvent, io::file::FileAssetReader},
    prelude::*,
};

use crate::constants::{APPLE_IMAGE, ASSET_DIR, DOT_IMAGE, HEAD_IMAGE};

#[derive(Resource, Clone)]
pub struct SnakeImages {
    pub dot: Handle<Image>,
    pub head: Handle<Image>,
    pub apple: Handle<Image>,
}

/// Directory the asset server reads from.
pub fn asset_root() -> PathBuf {
    FileAssetReader::get_base_path().join(ASSET_DIR)
}

/// Fails if any of the game's images is missing from `root`.
pub fn verify_assets(root: &Path) -> anyhow::Result<()> {
    for name in [DOT_IMAGE, HEAD_IMAGE, APPLE_IMAGE] {
        let path = root.join(name);
        let meta = fs::metadata(&path)
            .with_context(|| format!("cannot open image {}", path.display()))?;
        if !meta.is_file() {
            bail!("{} is not a file", path.display());
        }
    }
    Ok(())
}

pub fn load_images(mut commands: Commands, server: Res<AssetServer>) {
    commands.insert_resource(SnakeImages {
        dot: server.load(DOT_IMAGE),
        head: server.load(HEAD_IMAGE),
        apple: server.load(APPLE_IMAGE),
    });
}

pub fn exit_on_load_failure(
    mut failures: MessageReader<AssetLoadFailedEvent<Image>>,
    mut exit: MessageWriter<AppExit>,
) {
    for failure in failures.read() {
        error!(path = %failure.path, error = %failure.error, "failed to load image");
        exit.write(AppExit::error());
    }
}
