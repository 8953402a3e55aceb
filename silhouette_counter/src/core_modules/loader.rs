// THEORY:
// The loader is the bridge between files on disk and the boolean grid the
// counter works on. It decodes with the `image` crate, walks the RGBA pixels in
// row-major order and keeps only the answer to one question per pixel: is every
// color channel below the dark threshold? The counter never sees colors.

pub mod loader {
    use crate::core_modules::grid::grid::DarkGrid;
    use crate::core_modules::pixel::pixel::{Channel, Pixel};
    use crate::error::Result;
    use image::{GrayImage, Luma, RgbaImage};
    use std::path::Path;
    use tracing::debug;

    /// Decodes `path` and thresholds it into a grid.
    pub fn load_grid(path: impl AsRef<Path>, dark_threshold: Channel) -> Result<DarkGrid> {
        let path = path.as_ref();
        let image = image::open(path)?.to_rgba8();
        debug!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "decoded image"
        );
        grid_from_rgba(&image, dark_threshold)
    }

    /// Marks a cell dark when red, green and blue are all below `dark_threshold`.
    pub fn grid_from_rgba(image: &RgbaImage, dark_threshold: Channel) -> Result<DarkGrid> {
        let cells = image
            .pixels()
            .map(|rgba| Pixel::from(rgba).is_dark(dark_threshold))
            .collect();
        DarkGrid::from_cells(image.width() as usize, image.height() as usize, cells)
    }

    /// Writes a grid back out as black-on-white. The format follows the extension.
    pub fn save_grid(path: impl AsRef<Path>, grid: &DarkGrid) -> Result<()> {
        let image = GrayImage::from_fn(grid.width() as u32, grid.height() as u32, |x, y| {
            if grid.is_dark(y as usize, x as usize) {
                Luma([0u8])
            } else {
                Luma([255u8])
            }
        });
        image.save(path.as_ref())?;
        Ok(())
    }
}
