//! Rendering helpers for module grids.
//!
//! The encoder stops at the module grid. These helpers add the quiet zone, scale modules to
//! pixels and pick colors for callers that want a ready-made picture.

use std::path::Path;

use image::{GrayImage, ImageBuffer, Luma};

use crate::matrix::ModuleGrid;

/*---- Utilities ----*/

// Returns a string of SVG code for an image depicting
// the given grid, with the given number of border modules.
// The string always uses Unix newlines (\n), regardless of the platform.
pub fn to_svg_string(grid: &ModuleGrid, border: usize) -> String {
    let mut result = String::new();
    result += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
    result += "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n";
    let dimension = grid.size() + border * 2;
    result += &format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" viewBox=\"0 0 {0} {0}\" stroke=\"none\">\n",
        dimension
    );
    result += "\t<rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\"/>\n";
    result += "\t<path d=\"";
    let mut first = true;
    for y in 0..grid.size() {
        for x in 0..grid.size() {
            if grid.get(x, y) {
                if !first {
                    result += " ";
                }
                first = false;
                result += &format!("M{},{}h1v1h-1z", x + border, y + border);
            }
        }
    }
    result += "\" fill=\"#000000\"/>\n";
    result += "</svg>\n";
    result
}

/// Renders the grid as text, two characters per module so it looks square in a terminal.
pub fn to_ascii(grid: &ModuleGrid, border: usize) -> String {
    let border = border as i32;
    let size = grid.size() as i32;
    let mut result = String::new();
    for y in -border..size + border {
        for x in -border..size + border {
            let c: char = if grid.get_module(x, y) { '█' } else { ' ' };
            result.push(c);
            result.push(c);
        }
        result.push('\n');
    }
    result
}

/// Prints the given grid to the console with a 4-module border.
pub fn print_grid(grid: &ModuleGrid) {
    println!("{}", to_ascii(grid, 4));
}

/// Renders the grid into a grayscale image buffer.
///
/// # Arguments
///
/// * `grid` - The module grid to render.
/// * `border` - Quiet zone width, in modules.
/// * `scale` - Pixels per module side. Zero is treated as one.
///
/// # Example
///
/// ```
/// use qrgrid::helper::to_image_buffer;
///
/// let grid = qrgrid::encode("HELLO").unwrap();
/// let img = to_image_buffer(&grid, 4, 2);
/// assert_eq!(img.dimensions(), (58, 58));
/// ```
pub fn to_image_buffer(grid: &ModuleGrid, border: u32, scale: u32) -> GrayImage {
    let scale = scale.max(1);
    let size = (grid.size() as u32 + 2 * border) * scale;
    ImageBuffer::from_fn(size, size, |x, y| {
        let qr_x = (x / scale) as i32 - border as i32;
        let qr_y = (y / scale) as i32 - border as i32;
        if grid.get_module(qr_x, qr_y) {
            Luma([0u8]) // Black
        } else {
            Luma([255u8]) // White
        }
    })
}

/// Renders the grid and saves it to `path`. The format follows the file extension.
///
/// # Errors
///
/// Returns an `image::ImageError` if there is an error saving the image.
pub fn save_image(
    grid: &ModuleGrid,
    path: impl AsRef<Path>,
    border: u32,
    scale: u32,
) -> Result<(), image::ImageError> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    to_image_buffer(grid, border, scale).save(path)
}
