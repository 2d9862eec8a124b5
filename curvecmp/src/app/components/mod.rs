mod legend;
mod plotter;

pub use legend::Legend;
pub use plotter::Plotter;

use crate::curves::Rgb;

pub(crate) fn color32(color: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(color.0, color.1, color.2)
}
