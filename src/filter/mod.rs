use crate::color::Rgb;

mod brightness;

pub(crate) trait Filter {
    /// Apply the filter to a frame
    fn apply(&mut self, frame: &mut [Rgb]);

    fn tick(&mut self, _frame: u64) {}
}

pub(crate) use brightness::BrightnessFilter;
pub use brightness::BrightnessRange;
