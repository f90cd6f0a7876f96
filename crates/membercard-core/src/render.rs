//! Card rendering: markup for the preview, PNG for export

mod raster;
mod svg;

pub use raster::{Rasterizer, RenderedCard};
pub use svg::{render_card_svg, BRANCH_CAPTION, CARD_HEIGHT, CARD_WIDTH, DATE_CAPTION};
