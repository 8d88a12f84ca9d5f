use eframe::egui::Color32;
use palette::{Darken, Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Chart colours
// ---------------------------------------------------------------------------

/// The three dashboard charts, each with its own fill colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    CompletionHistogram,
    QualityByDepartment,
    FeedbackByDepartment,
}

impl ChartKind {
    /// Bar fill colour (CSS named colours).
    pub fn fill(self) -> Color32 {
        let named = match self {
            ChartKind::CompletionHistogram => palette::named::SKYBLUE,
            ChartKind::QualityByDepartment => palette::named::MEDIUMSEAGREEN,
            ChartKind::FeedbackByDepartment => palette::named::SALMON,
        };
        Color32::from_rgb(named.red, named.green, named.blue)
    }

    /// Bar outline: the fill colour darkened in HSL space.
    pub fn stroke(self) -> Color32 {
        darken(self.fill(), 0.3)
    }
}

fn darken(color: Color32, factor: f32) -> Color32 {
    let rgb = Srgb::new(color.r(), color.g(), color.b()).into_format::<f32>();
    let hsl: Hsl = rgb.into_color();
    let rgb: Srgb = hsl.darken(factor).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}
