/// Chart theme configuration
pub struct ChartTheme {
    pub background_color: plotters::style::RGBAColor,
    pub text_color: plotters::style::RGBAColor,
    pub grid_color: plotters::style::RGBAColor,
    pub axis_color: plotters::style::RGBAColor,
    /// Bar fill, the cyan accent the rest of the UI keys off
    pub accent_color: plotters::style::RGBColor,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background_color: plotters::style::RGBAColor(0, 0, 0, 0.94),
            text_color: plotters::style::RGBAColor(255, 255, 255, 0.8),
            grid_color: plotters::style::RGBAColor(255, 255, 255, 0.15),
            axis_color: plotters::style::RGBAColor(0, 255, 231, 0.8),
            accent_color: plotters::style::RGBColor(0, 255, 231),
        }
    }
}

/// Chart style configuration
pub struct ChartStyle {
    pub caption_font_size: u32,
    pub font_size: u32,
    pub margin: u32,
    pub label_area_size: u32,
    pub bar_width: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            caption_font_size: 30,
            font_size: 15,
            margin: 10,
            label_area_size: 50,
            bar_width: 0.8,
        }
    }
}
