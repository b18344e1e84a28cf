//! Piece bitmaps: decoded from disk at startup, then uploaded as egui
//! textures once a rendering context exists.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use egui::{ColorImage, TextureHandle, TextureOptions};
use image::DynamicImage;
use log::{debug, info};
use skakbord_core::board::Piece;
use thiserror::Error;

pub const PIECE_IMAGE_EXTENSION: &str = "bmp";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("unable to load image {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Where the bitmap for `piece` lives inside `dir`, e.g.
/// `<dir>/white_pawn.bmp`.
pub fn piece_image_path(dir: &Path, piece: Piece) -> PathBuf {
    dir.join(piece.asset_name()).with_extension(PIECE_IMAGE_EXTENSION)
}

/// Decoded images for all twelve pieces.
pub struct PieceImages {
    images: HashMap<Piece, ColorImage>,
}

impl PieceImages {
    /// Loads every piece image from `dir`. Fails on the first image that is
    /// missing or cannot be decoded.
    pub fn load_dir(dir: &Path) -> Result<Self, AssetError> {
        let mut images = HashMap::new();

        for piece in Piece::all() {
            let path = piece_image_path(dir, piece);
            let image = image::open(&path).map_err(|source| AssetError::Load {
                path: path.clone(),
                source,
            })?;
            debug!("loaded {} ({}x{})", path.display(), image.width(), image.height());

            images.insert(piece, to_color_image(&image));
        }

        info!("loaded {} piece images from {}", images.len(), dir.display());
        Ok(Self { images })
    }

    /// Hands the images to egui. The textures are freed when the returned
    /// [`PieceTextures`] is dropped.
    pub fn upload(self, ctx: &egui::Context) -> PieceTextures {
        let textures = self
            .images
            .into_iter()
            .map(|(piece, image)| {
                let name = format!("piece-{}", piece.asset_name());
                (piece, ctx.load_texture(name, image, TextureOptions::LINEAR))
            })
            .collect();

        PieceTextures { textures }
    }
}

fn to_color_image(image: &DynamicImage) -> ColorImage {
    let size = [image.width() as _, image.height() as _];
    let image_buffer = image.to_rgba8();
    let pixels = image_buffer.as_flat_samples();
    ColorImage::from_rgba_unmultiplied(size, pixels.as_slice())
}

pub struct PieceTextures {
    textures: HashMap<Piece, TextureHandle>,
}

impl PieceTextures {
    pub fn get(&self, piece: Piece) -> Option<&TextureHandle> {
        self.textures.get(&piece)
    }
}

/// How pieces are drawn.
pub enum PieceSet {
    Images(PieceTextures),
    /// A disc with the piece's letter on it. Needs no assets.
    Lettered,
}
